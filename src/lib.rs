//! Движок одного раунда блэкджека.
//!
//! Три слоя, как обычно:
//!   - `domain` – чистые значения: карты, очки, деньги, колода;
//!   - `engine` – участники, машина состояний, раунд и его ошибки;
//!   - `infra` – конкретные коллабораторы: RNG и раздающая колода.
//!
//! Консоль, конфигурация и многораундовая персистентность сюда
//! намеренно не входят — это заботы внешнего кода.

pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Card, Deck, Money, Point, Rank, Suit, BLACKJACK_POINT};
pub use engine::{CardSource, EngineError, PlayState, Player, RandomSource, Round};
pub use infra::{DeterministicRng, Shoe, SystemRng};
