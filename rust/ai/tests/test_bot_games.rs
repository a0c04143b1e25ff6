use tablestakes_ai::{create_ai, AI_KINDS};
use tablestakes_engine::cards::Card;
use tablestakes_engine::engine::Engine;
use tablestakes_engine::player::PlayerAction;
use tablestakes_engine::rules::{BettingStructure, RuleSet};

fn table(kinds: &[&str], rules: RuleSet, seed: u64) -> Engine {
    let mut eng = Engine::new(rules, seed).unwrap();
    for (i, kind) in kinds.iter().enumerate() {
        let bot = create_ai(kind, seed.wrapping_add(i as u64)).unwrap();
        eng.add_player(format!("{}-{}", kind, i), bot).unwrap();
    }
    eng
}

fn chips(eng: &Engine) -> u32 {
    eng.players().map(|p| p.stack()).sum()
}

#[test]
fn every_kind_is_constructible() {
    for kind in AI_KINDS {
        let bot = create_ai(kind, 0).unwrap();
        assert_eq!(bot.name(), *kind);
    }
    let err = create_ai("shark", 0).err().unwrap();
    assert!(err.to_string().contains("shark"));
}

#[test]
fn mixed_table_conserves_chips() {
    let kinds = ["tight", "aggressive", "balanced", "random", "passive", "aggressive"];
    let rules = RuleSet::default();
    let total = rules.starting_stack * kinds.len() as u32;
    let mut eng = table(&kinds, rules, 2024);
    let summaries = eng.play_game(60).unwrap();
    assert!(!summaries.is_empty());
    assert_eq!(chips(&eng), total);
    assert!(!eng.is_hand_in_progress());
}

#[test]
fn pot_limit_bots_stay_legal() {
    let rules = RuleSet::pot_limit(1, 2);
    let total = rules.starting_stack * 4;
    let mut eng = table(&["aggressive", "aggressive", "random", "balanced"], rules, 9);
    eng.play_game(40).unwrap();
    assert_eq!(chips(&eng), total);
    assert_eq!(eng.rules().structure, BettingStructure::PotLimit);
}

#[test]
fn fixed_limit_bots_bet_one_big_blind() {
    let rules = RuleSet::fixed_limit(1, 2);
    let total = rules.starting_stack * 4;
    let mut eng = table(&["aggressive", "aggressive", "random", "balanced"], rules, 12);
    for _ in 0..30 {
        if eng.is_game_over() {
            break;
        }
        eng.play_hand().unwrap();
        let record = eng.last_record().unwrap();
        for a in &record.actions {
            if let PlayerAction::Bet(amount) = a.action {
                assert_eq!(amount, 2, "{:?}", a);
            }
        }
    }
    assert_eq!(chips(&eng), total);
}

#[test]
fn same_seed_replays_the_same_game() {
    let run = |seed| {
        let mut eng = table(&["tight", "aggressive", "random"], RuleSet::default(), seed);
        let summaries = eng.play_game(25).unwrap();
        let boards: Vec<Vec<usize>> = summaries
            .iter()
            .map(|s| s.board.iter().map(Card::index).collect())
            .collect();
        let stacks: Vec<u32> = eng.players().map(|p| p.stack()).collect();
        (boards, stacks)
    };
    assert_eq!(run(77), run(77));
}
