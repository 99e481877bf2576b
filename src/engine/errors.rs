use thiserror::Error;

/// Ошибки движка блэкджека.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Сумма должна быть не меньше нуля, получено {0}")]
    NegativeAmount(i64),

    #[error("Нельзя взять новую карту в состоянии стенд или бюст")]
    NotPlayable,

    #[error("За столом должен быть хотя бы один гость")]
    NotEnoughGuests,

    #[error("В раздающей колоде закончились карты")]
    ShoeExhausted,
}
