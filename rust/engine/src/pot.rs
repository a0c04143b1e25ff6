use serde::{Deserialize, Serialize};

/// A chip amount and the seats entitled to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    /// Seat indices, ascending.
    pub eligible: Vec<usize>,
}

/// One seat's total commitment to the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub seat: usize,
    pub amount: u32,
    pub folded: bool,
}

/// Splits hand contributions into a main pot and side pots.
///
/// Distinct contribution levels are walked in ascending order. Each level adds
/// `(level - previous) * contributors_at_or_above_level` chips, and the seats
/// at or above the level that have not folded are eligible. The result is
/// always derived from scratch; callers rebuild it whenever contributions
/// change.
///
/// Adjacent levels with the same eligible seats are merged into one pot.
/// A level that only folded seats reached has nobody to award it to. Its
/// chips are carried into the next pot built, or into the last pot when no
/// later level has an eligible seat, so the total is always conserved.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::pot::{calculate_pots, Contribution};
///
/// let pots = calculate_pots(&[
///     Contribution { seat: 0, amount: 50, folded: false },
///     Contribution { seat: 1, amount: 150, folded: false },
///     Contribution { seat: 2, amount: 300, folded: false },
/// ]);
/// let amounts: Vec<u32> = pots.iter().map(|p| p.amount).collect();
/// assert_eq!(amounts, vec![150, 200, 150]);
/// assert_eq!(pots[1].eligible, vec![1, 2]);
/// ```
pub fn calculate_pots(contributions: &[Contribution]) -> Vec<Pot> {
    let mut levels: Vec<u32> = contributions
        .iter()
        .map(|c| c.amount)
        .filter(|&a| a > 0)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::with_capacity(levels.len());
    let mut previous = 0u32;
    let mut orphaned = 0u32;
    for level in levels {
        let reached: Vec<&Contribution> =
            contributions.iter().filter(|c| c.amount >= level).collect();
        let amount = (level - previous) * reached.len() as u32 + orphaned;
        previous = level;

        let mut eligible: Vec<usize> = reached
            .iter()
            .filter(|c| !c.folded)
            .map(|c| c.seat)
            .collect();
        eligible.sort_unstable();

        if eligible.is_empty() {
            orphaned = amount;
            continue;
        }
        orphaned = 0;
        match pots.last_mut() {
            // a level that only a folded seat separates adds to the same pot
            Some(last) if last.eligible == eligible => last.amount += amount,
            _ => pots.push(Pot { amount, eligible }),
        }
    }

    if orphaned > 0 {
        if let Some(last) = pots.last_mut() {
            last.amount += orphaned;
        }
    }
    pots
}

pub fn total(pots: &[Pot]) -> u32 {
    pots.iter().map(|p| p.amount).sum()
}
