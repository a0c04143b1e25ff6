use tablestakes_engine::engine::Engine;
use tablestakes_engine::player::PlayerAction as A;
use tablestakes_engine::rules::RuleSet;
use tablestakes_engine::strategy::{Passive, Scripted};

#[test]
fn heads_up_shove_ends_the_game() {
    let mut eng = Engine::new(RuleSet::default(), 77).unwrap();
    eng.add_player("a", Box::new(Scripted::new([A::AllIn(0)])))
        .unwrap();
    eng.add_player("b", Box::new(Scripted::new([A::AllIn(0)])))
        .unwrap();
    let summaries = eng.play_game(10).unwrap();

    // equal stacks: whoever loses the single pot has nothing left
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].eliminated.len(), 1);
    assert!(eng.is_game_over());
    assert_eq!(eng.seat_count(), 1);
    assert_eq!(eng.player(0).unwrap().stack(), 2000);
    assert_eq!(eng.player(0).unwrap().seat(), 0);
}

#[test]
fn empty_seats_are_skipped_then_removed() {
    let mut eng = Engine::new(RuleSet::default(), 2).unwrap();
    eng.add_player_with_stack("broke", 0, Box::new(Passive)).unwrap();
    for name in ["b", "c", "d"] {
        eng.add_player(name, Box::new(Passive)).unwrap();
    }

    eng.start_hand().unwrap();
    // seat 0 has no chips, so the button lands on seat 1
    assert_eq!(eng.get_game_state().dealer(), 1);
    eng.deal_hole_cards().unwrap();
    eng.collect_blinds().unwrap();
    assert_eq!(eng.player(0).unwrap().hand().len(), 0);
    while !eng.is_hand_complete() {
        eng.run_betting_round().unwrap();
        eng.advance_phase().unwrap();
    }
    eng.collect_bets();
    let results = eng.determine_winner().unwrap();
    eng.distribute_winnings(&results).unwrap();
    let summary = eng.end_hand(results).unwrap();

    assert_eq!(summary.eliminated, vec!["broke".to_string()]);
    let names: Vec<&str> = eng.players().map(|p| p.name()).collect();
    assert_eq!(names, vec!["b", "c", "d"]);
    assert!(eng.players().enumerate().all(|(i, p)| p.seat() == i));
    // old seat 1 ("b") is the button at index 0, so "c" deals next
    assert_eq!(eng.get_game_state().dealer(), 0);
    eng.start_hand().unwrap();
    assert_eq!(eng.get_game_state().dealer(), 1);
    assert_eq!(eng.player(1).unwrap().name(), "c");
}

#[test]
fn sitting_out_players_keep_their_seat() {
    let mut eng = Engine::new(RuleSet::default(), 2).unwrap();
    for name in ["a", "b", "c"] {
        eng.add_player(name, Box::new(Passive)).unwrap();
    }
    eng.set_sitting_out(2, true).unwrap();
    eng.play_hand().unwrap();
    assert_eq!(eng.seat_count(), 3);
    assert_eq!(eng.player(2).unwrap().stack(), 1000);
    eng.set_sitting_out(2, false).unwrap();
    eng.play_hand().unwrap();
    assert!(eng.player(2).unwrap().hand().len() >= 2);
}
