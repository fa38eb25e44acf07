use std::collections::BTreeSet;

use pokersim_engine::cards::{Card, Rank as R, Suit as S};
use pokersim_engine::deck::Deck;
use pokersim_engine::errors::DeckError;
use pokersim_engine::hand::{Category, Hand};

fn hand(cards: [&str; 5]) -> Hand {
    Hand::from_cards(cards.map(|s| s.parse::<Card>().unwrap()))
}

fn rank_flags(h: &Hand) -> [bool; 5] {
    [
        h.is_pair(),
        h.is_two_pair(),
        h.is_trip(),
        h.is_full_house(),
        h.is_quad(),
    ]
}

#[test]
fn full_house_has_eight_matches() {
    let h = hand(["2♠", "2♣", "2♦", "5♥", "5♠"]);
    assert_eq!(h.num_matches(), 8);
    assert_eq!(rank_flags(&h), [false, false, false, true, false]);
}

#[test]
fn each_rank_shape_maps_to_one_predicate() {
    let cases = [
        (["2♠", "7♣", "9♦", "J♥", "K♠"], 0, [false; 5]),
        (["2♠", "2♣", "9♦", "J♥", "K♠"], 2, [true, false, false, false, false]),
        (["2♠", "2♣", "9♦", "9♥", "K♠"], 4, [false, true, false, false, false]),
        (["2♠", "2♣", "2♦", "9♥", "K♠"], 6, [false, false, true, false, false]),
        (["Q♠", "Q♣", "Q♦", "Q♥", "K♠"], 12, [false, false, false, false, true]),
    ];
    for (cards, matches, flags) in cases {
        let h = hand(cards);
        assert_eq!(h.num_matches(), matches, "{}", h);
        assert_eq!(rank_flags(&h), flags, "{}", h);
    }
}

#[test]
fn num_matches_only_takes_reachable_values() {
    let allowed: BTreeSet<u32> = [0, 2, 4, 6, 8, 12].into_iter().collect();
    let mut seen = BTreeSet::new();
    // Every rank multiset of size five (no rank more than four times); suits
    // are assigned per occurrence so no card repeats.
    for a in 0..13 {
        for b in a..13 {
            for c3 in b..13 {
                for d in c3..13 {
                    for e in d..13 {
                        let idx = [a, b, c3, d, e];
                        if idx.iter().any(|&r| idx.iter().filter(|&&x| x == r).count() > 4) {
                            continue;
                        }
                        let mut used = [0usize; 13];
                        let cards = idx.map(|r| {
                            let s = S::ALL[used[r]];
                            used[r] += 1;
                            Card::new(R::ALL[r], s)
                        });
                        let m = Hand::from_cards(cards).num_matches();
                        assert!(allowed.contains(&m), "unexpected {} for {:?}", m, idx);
                        seen.insert(m);
                    }
                }
            }
        }
    }
    assert_eq!(seen, allowed);
}

#[test]
fn flush_requires_every_suit_to_match() {
    assert!(hand(["3♠", "7♠", "9♠", "J♠", "A♠"]).is_flush());
    assert!(!hand(["3♠", "7♠", "9♥", "J♠", "A♠"]).is_flush());
    assert!(!hand(["3♥", "7♠", "9♠", "J♠", "A♠"]).is_flush());
}

#[test]
fn straight_needs_five_consecutive_ranks() {
    assert!(hand(["3♠", "4♣", "5♦", "6♥", "7♠"]).is_straight());
    assert!(hand(["10♠", "J♣", "Q♦", "K♥", "A♠"]).is_straight());
    assert!(!hand(["2♠", "3♣", "4♦", "5♥", "7♠"]).is_straight());
    assert!(!hand(["3♠", "3♣", "4♦", "5♥", "6♠"]).is_straight());
}

#[test]
fn ace_is_never_low() {
    let mut wheel = hand(["A♠", "2♣", "3♦", "4♥", "5♠"]);
    assert!(!wheel.is_straight());
    assert_eq!(wheel.category(), Category::HighCard);
}

#[test]
fn straight_check_sorts_by_rank_index() {
    let mut h = hand(["K♥", "10♠", "A♠", "Q♦", "J♣"]);
    assert!(h.is_straight());
    assert_eq!(h.to_string(), "[10♠, J♣, Q♦, K♥, A♠]");
}

#[test]
fn category_follows_poker_precedence() {
    let cases = [
        (["2♠", "7♣", "9♦", "J♥", "K♠"], Category::HighCard),
        (["2♠", "2♣", "9♦", "J♥", "K♠"], Category::Pair),
        (["2♠", "2♣", "9♦", "9♥", "K♠"], Category::TwoPair),
        (["2♠", "2♣", "2♦", "9♥", "K♠"], Category::Trip),
        (["8♠", "9♣", "10♦", "J♥", "Q♠"], Category::Straight),
        (["2♥", "7♥", "9♥", "J♥", "K♥"], Category::Flush),
        (["2♠", "2♣", "2♦", "5♥", "5♠"], Category::FullHouse),
        (["Q♠", "Q♣", "Q♦", "Q♥", "K♠"], Category::Quad),
        (["5♦", "6♦", "7♦", "8♦", "9♦"], Category::StraightFlush),
    ];
    for (cards, expected) in cases {
        let mut h = hand(cards);
        assert_eq!(h.category(), expected, "{}", h);
    }
    assert!(Category::StraightFlush > Category::Quad);
    assert!(Category::Flush > Category::Straight);
}

#[test]
fn deal_consumes_five_from_the_front() {
    let mut deck = Deck::new_with_seed(8);
    deck.shuffle();
    let front: Vec<Card> = deck.cards()[..5].to_vec();
    let h = Hand::deal(&mut deck).unwrap();
    assert_eq!(h.cards().to_vec(), front);
    assert_eq!(deck.len(), 47);
}

#[test]
fn deal_from_short_deck_fails() {
    let mut deck = Deck::new_with_seed(8);
    for _ in 0..49 {
        deck.deal().unwrap();
    }
    assert_eq!(Hand::deal(&mut deck), Err(DeckError::EmptyDeck));
    assert!(deck.is_empty());
}

#[test]
fn ten_deals_exhaust_all_but_two() {
    let mut deck = Deck::new_with_seed(77);
    deck.shuffle();
    for _ in 0..10 {
        Hand::deal(&mut deck).unwrap();
    }
    assert_eq!(deck.len(), 2);
}
