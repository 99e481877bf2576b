use crate::domain::money::Money;
use crate::engine::errors::EngineError;
use crate::engine::player::Player;
use crate::engine::CardSource;

/// Минимальное число гостей за столом.
pub const MIN_GUESTS: usize = 1;

/// Фиксированное имя дилера (как его показывает стол).
const DEALER_NAME: &str = "딜러";

/// Один раунд блэкджека: дилер, гости и источник карт.
///
/// Раунд только раздаёт карты и отвечает на вопросы об итоге;
/// руку участника он никогда не меняет напрямую — только через
/// `Player::deal`.
pub struct Round<S: CardSource> {
    dealer: Player,
    guests: Vec<Player>,
    source: S,
}

impl<S: CardSource> Round<S> {
    /// Собрать раунд. Список гостей проверяется до того, как
    /// возникнет какое-либо состояние: пустой список — ошибка,
    /// и раунд не создаётся. Дилера создаём сами: фиксированное
    /// имя и нулевой банк, вызывающий код его не передаёт.
    pub fn new(guests: Vec<Player>, source: S) -> Result<Self, EngineError> {
        if guests.len() < MIN_GUESTS {
            return Err(EngineError::NotEnoughGuests);
        }

        Ok(Self {
            dealer: Player::new(DEALER_NAME, Money::ZERO),
            guests,
            source,
        })
    }

    /// Раздать по одной карте всем: сначала дилеру, затем гостям
    /// в порядке списка. Стартовая рука из двух карт — это два вызова,
    /// очерёдность определяет внешний код.
    ///
    /// Ошибка раздачи (участник не Playable) или пустой источник
    /// пробрасываются наверх; уже взятые из источника карты считаются
    /// израсходованными, отката нет.
    pub fn deal_all(&mut self) -> Result<(), EngineError> {
        let card = self.source.draw()?;
        self.dealer.deal(card)?;

        for guest in &mut self.guests {
            let card = self.source.draw()?;
            guest.deal(card)?;
        }
        Ok(())
    }

    /// Гости с блэкджеком, в исходном порядке. Дилер не участвует.
    pub fn blackjack_guests(&self) -> Vec<&Player> {
        self.guests.iter().filter(|g| g.has_blackjack()).collect()
    }

    /// Единственный предикат победы раунда: у дилера блэкджека нет,
    /// а хотя бы у одного гостя — есть. Никакого сравнения
    /// очков 20 против 19 здесь нет и быть не должно.
    pub fn is_guest_win(&self) -> bool {
        !self.dealer.has_blackjack() && !self.blackjack_guests().is_empty()
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn guests(&self) -> &[Player] {
        &self.guests
    }
}
