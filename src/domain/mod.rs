//! Доменная модель блэкджека: карты, очки, деньги, колода.

pub mod card;
pub mod deck;
pub mod money;
pub mod point;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use money::*;
pub use point::*;
