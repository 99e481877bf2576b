//! Интеграционные тесты для доменной модели (crate::domain).

use blackjack_engine::domain::*;

/// Карта показывается как ранг + корейское название масти.
#[test]
fn card_display_names() {
    assert_eq!(Card::new(Rank::Five, Suit::Spades).full_name(), "5스페이드");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).full_name(), "10하트");
    assert_eq!(Card::new(Rank::Ace, Suit::Clubs).full_name(), "A클로버");
    assert_eq!(
        Card::new(Rank::King, Suit::Diamonds).full_name(),
        "K다이아몬드"
    );
    assert_eq!(Card::new(Rank::Queen, Suit::Spades).full_name(), "Q스페이드");
}

/// Картинки (K/Q/J) — отдельный класс рангов, все по 10 очков.
#[test]
fn face_ranks_share_fixed_value() {
    for rank in [Rank::Jack, Rank::Queen, Rank::King] {
        assert!(rank.is_face());
        assert_eq!(rank.base_points(), 10);
    }

    assert!(!Rank::Ace.is_face());
    assert!(!Rank::Ten.is_face());

    // Мягкий ранг ровно один — туз.
    assert!(Rank::Ace.is_soft());
    assert!(!Rank::King.is_soft());
    assert!(!Rank::Two.is_soft());
}

/// Разрешение мягкого туза: максимум, не превышающий 21.
#[test]
fn point_resolution_soft_ace() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let king = Card::new(Rank::King, Suit::Hearts);
    let nine = Card::new(Rank::Nine, Suit::Clubs);
    let five = Card::new(Rank::Five, Suit::Diamonds);

    // Пустая рука — ноль.
    assert_eq!(Point::of_hand(&[]), Point::ZERO);

    // Одинокий туз — 11.
    assert_eq!(Point::of_hand(&[ace]), Point(11));

    // Два туза: один остаётся 11, второй пересчитан в 1.
    assert_eq!(Point::of_hand(&[ace, ace]), Point(12));

    // Туз + картинка = блэкджековая 21.
    assert_eq!(Point::of_hand(&[ace, king]), Point(21));

    // Туз + 9 = мягкие 20; добор 5 пересчитывает туз в 1.
    assert_eq!(Point::of_hand(&[ace, nine]), Point(20));
    assert_eq!(Point::of_hand(&[ace, nine, five]), Point(15));

    // Туз + туз + 9 = 21 (11 + 1 + 9).
    assert_eq!(Point::of_hand(&[ace, ace, nine]), Point(21));
}

/// Результат не зависит от порядка карт в руке.
#[test]
fn point_resolution_is_order_independent() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let nine = Card::new(Rank::Nine, Suit::Clubs);
    let five = Card::new(Rank::Five, Suit::Diamonds);

    assert_eq!(
        Point::of_hand(&[ace, nine, five]),
        Point::of_hand(&[nine, five, ace]),
    );
    assert_eq!(
        Point::of_hand(&[five, ace, nine]),
        Point::of_hand(&[ace, nine, five]),
    );
}

/// Неизбежный перебор: даже все тузы по 1 не спасают.
#[test]
fn point_resolution_unavoidable_bust() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let king = Card::new(Rank::King, Suit::Hearts);
    let queen = Card::new(Rank::Queen, Suit::Clubs);

    // 1 + 10 + 10 + 1 = 22 — минимально возможная сумма.
    let p = Point::of_hand(&[ace, king, queen, ace]);
    assert_eq!(p, Point(22));
    assert!(p.is_bust());

    assert!(!Point(21).is_bust());
    assert!(Point(22).is_bust());
}

/// Money: отрицательная сумма отсекается на конструкторе.
#[test]
fn money_rejects_negative_amounts() {
    let err = Money::new(-1).unwrap_err();
    assert_eq!(
        err,
        blackjack_engine::engine::EngineError::NegativeAmount(-1)
    );

    let zero = Money::new(0).expect("ноль — корректная сумма");
    assert!(zero.is_zero());
    assert_eq!(zero, Money::ZERO);

    let m = Money::new(1000).expect("положительная сумма");
    assert_eq!(m.amount(), 1000);
}

/// Deck: стандартная колода — 52 уникальные карты, по 13 на масть.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());

    use std::collections::HashSet;
    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);

    for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
        let count = deck.cards.iter().filter(|c| c.suit == suit).count();
        assert_eq!(count, 13);
    }
}

#[test]
fn deck_draw_one_until_empty() {
    let mut deck = Deck::standard_52();

    let first = deck.draw_one().expect("полная колода");
    assert_eq!(deck.len(), 51);
    assert!(!deck.cards.contains(&first));

    while deck.draw_one().is_some() {}
    assert!(deck.is_empty());
    assert!(deck.draw_one().is_none());
}
