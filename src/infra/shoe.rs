use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::errors::EngineError;
use crate::engine::{CardSource, RandomSource};

/// Раздающая колода ("шуз"): перемешанная 52-карточная колода,
/// отдающая по одной карте без повторов. Когда карты кончились,
/// `draw` возвращает `ShoeExhausted` — дальше пусть решает вызывающий.
#[derive(Clone, Debug)]
pub struct Shoe {
    deck: Deck,
}

impl Shoe {
    /// Новый шуз из стандартной колоды, перемешанной переданным RNG.
    pub fn shuffled(rng: &mut impl RandomSource) -> Self {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        Shoe { deck }
    }

    /// Шуз с заранее заданным порядком карт — для тестов и реплея.
    /// Карты отдаются с конца списка (как `Deck::draw_one`).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Shoe {
            deck: Deck { cards },
        }
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Result<Card, EngineError> {
        self.deck.draw_one().ok_or(EngineError::ShoeExhausted)
    }
}
