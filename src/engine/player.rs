use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::money::Money;
use crate::domain::point::{Point, BLACKJACK_POINT};
use crate::engine::errors::EngineError;

/// Игровое состояние участника в рамках раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayState {
    /// Может брать новые карты.
    Playable,
    /// Остановился сам. Терминальное состояние раунда.
    Standing,
    /// Перебор (больше 21). Терминальное состояние раунда.
    Busted,
}

/// Участник раунда: и гость, и дилер — один и тот же тип.
/// Дилер отличается только фиксированным именем и нулевым банком
/// (его создаёт `Round`, а не вызывающий код).
///
/// Рука, баланс, доход и состояние меняются только через методы —
/// `Round` и внешний код никогда не трогают поля напрямую.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    money: Money,
    /// Накопленный доход за раунд: сумма всех переводов со знаком
    /// с точки зрения этого участника. Не ограничен ни снизу, ни сверху.
    revenue: i64,
    state: PlayState,
}

impl Player {
    /// Новый участник: пустая рука, нулевой доход, состояние Playable.
    /// Отрицательный стартовый банк непредставим — его отсекает `Money::new`.
    pub fn new(name: impl Into<String>, money: Money) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            money,
            revenue: 0,
            state: PlayState::Playable,
        }
    }

    /// Принять карту. Разрешено только в состоянии Playable;
    /// иначе — ошибка, и рука остаётся нетронутой.
    /// Если после карты сумма превышает 21, участник переходит в Busted.
    pub fn deal(&mut self, card: Card) -> Result<(), EngineError> {
        if self.state != PlayState::Playable {
            return Err(EngineError::NotPlayable);
        }

        self.hand.push(card);
        if self.total_point().is_bust() {
            self.state = PlayState::Busted;
        }
        Ok(())
    }

    /// Остановиться: Playable → Standing.
    /// В терминальных состояниях ничего не делает.
    pub fn stand(&mut self) {
        if self.state == PlayState::Playable {
            self.state = PlayState::Standing;
        }
    }

    /// Перевести `amount` другому участнику: у себя сумма вычитается
    /// из баланса и дохода, у получателя — прибавляется.
    /// Баланс при этом может уйти в минус; проверку платёжеспособности
    /// оставляем слою расчётов, не примитиву перевода.
    pub fn transfer(&mut self, other: &mut Player, amount: Money) {
        self.money = Money::raw(self.money.amount() - amount.amount());
        self.revenue -= amount.amount();
        other.money = Money::raw(other.money.amount() + amount.amount());
        other.revenue += amount.amount();
    }

    /// Очки руки — всегда пересчитываются заново, без кэша.
    pub fn total_point(&self) -> Point {
        Point::of_hand(&self.hand)
    }

    pub fn is_playable(&self) -> bool {
        self.state == PlayState::Playable
    }

    /// Блэкджек: ровно две карты на 21 очко. Состояние не меняет.
    pub fn has_blackjack(&self) -> bool {
        self.hand.len() == 2 && self.total_point().0 == BLACKJACK_POINT
    }

    /// Рука в виде строки: имена карт через запятую, в порядке раздачи.
    /// Например `"5스페이드, 5스페이드"`.
    pub fn show_cards(&self) -> String {
        self.hand
            .iter()
            .map(Card::full_name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn money(&self) -> i64 {
        self.money.amount()
    }

    pub fn revenue(&self) -> i64 {
        self.revenue
    }

    pub fn state(&self) -> PlayState {
        self.state
    }
}
