use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Максимум очков: всё, что больше, — перебор (bust).
pub const BLACKJACK_POINT: u32 = 21;

/// Сколько очков добавляет туз, если считать его как 11 вместо 1.
const SOFT_ACE_BONUS: u32 = 10;

/// Итоговые очки руки. Обёртка над u32, чтобы не путать с обычными числами.
/// Очки никогда не хранятся отдельно от руки — всегда пересчитываются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point(pub u32);

impl Point {
    pub const ZERO: Point = Point(0);

    /// Очки руки с разрешением мягкого туза.
    ///
    /// Каждый туз сначала считается как 11; пока сумма больше 21
    /// и остаётся туз, посчитанный как 11, один из них пересчитываем
    /// как 1. В итоге — максимум, не превышающий 21, либо минимально
    /// возможная сумма, если перебор неизбежен.
    pub fn of_hand(cards: &[Card]) -> Point {
        let mut soft_aces = cards.iter().filter(|c| c.rank.is_soft()).count() as u32;
        let mut total: u32 = cards.iter().map(|c| c.rank.base_points()).sum::<u32>()
            + soft_aces * SOFT_ACE_BONUS;

        while total > BLACKJACK_POINT && soft_aces > 0 {
            total -= SOFT_ACE_BONUS;
            soft_aces -= 1;
        }

        Point(total)
    }

    pub fn is_bust(self) -> bool {
        self.0 > BLACKJACK_POINT
    }
}
