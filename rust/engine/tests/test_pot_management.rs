use tablestakes_engine::pot::{calculate_pots, total, Contribution, Pot};

fn contrib(seat: usize, amount: u32, folded: bool) -> Contribution {
    Contribution {
        seat,
        amount,
        folded,
    }
}

#[test]
fn three_stack_depths_make_three_pots() {
    let pots = calculate_pots(&[
        contrib(0, 50, false),
        contrib(1, 150, false),
        contrib(2, 300, false),
    ]);
    assert_eq!(
        pots,
        vec![
            Pot {
                amount: 150,
                eligible: vec![0, 1, 2]
            },
            Pot {
                amount: 200,
                eligible: vec![1, 2]
            },
            Pot {
                amount: 150,
                eligible: vec![2]
            },
        ]
    );
}

#[test]
fn input_order_does_not_matter() {
    let pots = calculate_pots(&[
        contrib(2, 300, false),
        contrib(0, 50, false),
        contrib(1, 150, false),
    ]);
    let amounts: Vec<u32> = pots.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![150, 200, 150]);
    assert_eq!(pots[0].eligible, vec![0, 1, 2]);
}

#[test]
fn recomputation_tracks_later_rounds() {
    let mut contributions = vec![
        contrib(0, 20, false),
        contrib(1, 20, false),
        contrib(2, 20, false),
    ];
    assert_eq!(calculate_pots(&contributions).len(), 1);
    // seat 0 is all-in; the others keep betting on the next street
    contributions[1].amount = 120;
    contributions[2].amount = 120;
    let pots = calculate_pots(&contributions);
    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].amount, 60);
    assert_eq!(pots[1], Pot { amount: 200, eligible: vec![1, 2] });
    assert_eq!(total(&pots), 260);
}

#[test]
fn total_is_conserved_with_folds() {
    let contributions = [
        contrib(0, 7, true),
        contrib(1, 90, false),
        contrib(2, 35, true),
        contrib(3, 60, false),
        contrib(4, 90, true),
    ];
    let pots = calculate_pots(&contributions);
    assert_eq!(total(&pots), 7 + 90 + 35 + 60 + 90);
    for p in &pots {
        assert!(p.eligible.iter().all(|s| *s == 1 || *s == 3));
    }
}
