use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Денежная сумма. Обёртка над i64, чтобы не путать с обычными числами.
///
/// Конструктор не пропускает отрицательные суммы, поэтому `Money`
/// всегда означает корректную величину перевода или стартовый банк.
/// Баланс игрока при этом может уйти в минус — но уже после переводов,
/// а не при создании (см. `Player::transfer`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Единственный публичный способ получить `Money` из числа.
    pub fn new(amount: i64) -> Result<Self, EngineError> {
        if amount < 0 {
            return Err(EngineError::NegativeAmount(amount));
        }
        Ok(Money(amount))
    }

    /// Внутренний конструктор для арифметики переводов:
    /// баланс после перевода имеет право быть отрицательным.
    pub(crate) const fn raw(amount: i64) -> Self {
        Money(amount)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}
