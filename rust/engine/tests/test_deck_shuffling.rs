use std::collections::HashSet;

use tablestakes_engine::deck::Deck;

fn order(deck: &mut Deck, n: usize) -> Vec<usize> {
    (0..n).map(|_| deck.deal_card().unwrap().index()).collect()
}

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c.index()), "card {} duplicated at position {}", c, i);
    }
    assert!(deck.deal_card().is_none(), "after 52 cards, deck should be empty");
    assert!(!deck.burn_card());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(order(&mut d1, 10), order(&mut d2, 10));
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(order(&mut d1, 52), order(&mut d2, 52));
}

#[test]
fn consecutive_shuffles_restore_a_full_deck() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    let first = order(&mut deck, 52);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let second = order(&mut deck, 52);
    assert_ne!(first, second);
    let unique: HashSet<_> = second.into_iter().collect();
    assert_eq!(unique.len(), 52);
}
