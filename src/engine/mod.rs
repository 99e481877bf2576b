//! Движок раунда блэкджека.
//!
//! Высокоуровневый объект: `Round`
//! Основные операции:
//!   - `Round::new` – собрать раунд (дилер создаётся внутри)
//!   - `deal_all` – раздать по одной карте дилеру и каждому гостю
//!   - `blackjack_guests` / `is_guest_win` – итоговые запросы

pub mod errors;
pub mod player;
pub mod round;

pub use errors::EngineError;
pub use player::{PlayState, Player};
pub use round::{Round, MIN_GUESTS};

use crate::domain::card::Card;

/// Источник карт для раунда: по одной уникальной карте на вызов.
/// Что делать при исчерпании — решает реализация; наша `infra::Shoe`
/// возвращает `EngineError::ShoeExhausted`.
pub trait CardSource {
    fn draw(&mut self) -> Result<Card, EngineError>;
}

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
