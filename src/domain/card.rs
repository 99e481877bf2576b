use core::fmt;

use serde::{Deserialize, Serialize};

/// Масть карты. Display даёт корейские названия мастей —
/// именно так карты показываются за столом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Базовая стоимость ранга: картинки (J/Q/K) стоят 10,
    /// туз считается как 1. Мягкую замену 1 → 11 делает `Point`.
    pub fn base_points(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u32,
        }
    }

    /// Картинка (K/Q/J): отдельный класс рангов с одинаковой стоимостью.
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// "Мягкий" ранг — единственный с двумя стоимостями (1 или 11).
    pub fn is_soft(self) -> bool {
        matches!(self, Rank::Ace)
    }
}

/// Обычная карта 52-карточной колоды.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Полное имя карты, например `5스페이드`.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Clubs => "클로버",
            Suit::Diamonds => "다이아몬드",
            Suit::Hearts => "하트",
            Suit::Spades => "스페이드",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `A스페이드`, `10하트`, `7클로버`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
