use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{PlayerAction as A, PlayerStatus};

/// How large a bet or raise may be.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BettingStructure {
    NoLimit,
    PotLimit,
    FixedLimit,
}

impl std::str::FromStr for BettingStructure {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "no-limit" | "nl" => Ok(BettingStructure::NoLimit),
            "pot-limit" | "pl" => Ok(BettingStructure::PotLimit),
            "fixed-limit" | "fl" | "limit" => Ok(BettingStructure::FixedLimit),
            other => Err(GameError::InvalidRules(format!(
                "unknown betting structure '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    CashGame,
    Tournament,
    SitAndGo,
}

/// Table rules for a session. Immutable once the engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    /// Raise cap per betting round; only enforced under fixed-limit.
    pub max_raises: u32,
    pub structure: BettingStructure,
    pub game_type: GameType,
    /// When false, a seat that checked earlier in the round may not raise.
    pub allow_check_raise: bool,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::texas_holdem()
    }
}

impl RuleSet {
    /// No-limit hold'em at 1/2 with 1000-chip stacks.
    pub fn texas_holdem() -> Self {
        Self {
            small_blind: 1,
            big_blind: 2,
            starting_stack: 1000,
            max_raises: 3,
            structure: BettingStructure::NoLimit,
            game_type: GameType::CashGame,
            allow_check_raise: true,
            min_players: 2,
            max_players: 10,
        }
    }

    pub fn tournament(starting_stack: u32) -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            starting_stack,
            game_type: GameType::Tournament,
            ..Self::texas_holdem()
        }
    }

    /// Cash game with stacks of one hundred big blinds.
    pub fn cash_game(small_blind: u32, big_blind: u32) -> Self {
        Self {
            small_blind,
            big_blind,
            starting_stack: big_blind.saturating_mul(100),
            ..Self::texas_holdem()
        }
    }

    pub fn pot_limit(small_blind: u32, big_blind: u32) -> Self {
        Self {
            structure: BettingStructure::PotLimit,
            ..Self::cash_game(small_blind, big_blind)
        }
    }

    pub fn fixed_limit(small_blind: u32, big_blind: u32) -> Self {
        Self {
            structure: BettingStructure::FixedLimit,
            max_raises: 4,
            ..Self::cash_game(small_blind, big_blind)
        }
    }

    /// Smallest legal raise-to total. The increment is one big blind for
    /// every structure.
    pub fn minimum_raise(&self, current_bet: u32) -> u32 {
        current_bet.saturating_add(self.big_blind)
    }

    /// Largest legal bet for a player holding `chips` with `pot` in the middle.
    pub fn maximum_bet(&self, current_bet: u32, chips: u32, pot: u32) -> u32 {
        match self.structure {
            BettingStructure::NoLimit => chips,
            BettingStructure::FixedLimit => current_bet.saturating_add(self.big_blind),
            BettingStructure::PotLimit => chips.min(current_bet.saturating_add(pot)),
        }
    }

    pub fn is_valid_player_count(&self, n: usize) -> bool {
        (self.min_players..=self.max_players).contains(&n)
    }

    /// Whether a bet or raise to the round total `amount` has a legal size:
    /// at least the opening bet (or minimum raise) and at most
    /// [`RuleSet::maximum_bet`]. Fixed-limit leaves exactly one size.
    /// `chips` is the largest total the player can reach this round.
    pub fn is_valid_bet(&self, amount: u32, current_bet: u32, chips: u32, pot: u32) -> bool {
        let minimum = if current_bet == 0 {
            self.big_blind
        } else {
            self.minimum_raise(current_bet)
        };
        amount <= chips && amount >= minimum && amount <= self.maximum_bet(current_bet, chips, pot)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidRules("blinds must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidRules(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidRules(
                "starting stack must be positive".into(),
            ));
        }
        if self.min_players < 2 || self.min_players > self.max_players {
            return Err(GameError::InvalidRules(format!(
                "table size {}..={} is not playable",
                self.min_players, self.max_players
            )));
        }
        Ok(())
    }

    /// Checks `action` against the betting rules without touching any state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablestakes_engine::player::{PlayerAction, PlayerStatus};
    /// use tablestakes_engine::rules::{BetContext, RuleSet};
    ///
    /// let rules = RuleSet::texas_holdem();
    /// let ctx = BetContext {
    ///     seat: 0,
    ///     status: PlayerStatus::Active,
    ///     stack: 100,
    ///     round_bet: 0,
    ///     current_bet: 10,
    ///     pot: 15,
    ///     raises_this_round: 0,
    ///     checked_this_round: false,
    /// };
    /// assert!(rules.validate_action(&ctx, &PlayerAction::Call(10)).is_ok());
    /// // a raise must reach current bet + big blind
    /// assert!(rules.validate_action(&ctx, &PlayerAction::Raise(11)).is_err());
    /// assert!(rules.validate_action(&ctx, &PlayerAction::Raise(12)).is_ok());
    /// ```
    pub fn validate_action(&self, ctx: &BetContext, action: &A) -> Result<(), GameError> {
        let illegal = |reason: String| GameError::IllegalAction {
            seat: ctx.seat,
            action: *action,
            reason,
        };

        if !ctx.status.can_act() {
            return Err(illegal(format!("player is {:?}", ctx.status)));
        }

        match *action {
            A::Fold | A::Check | A::AllIn(_) => Ok(()),
            A::Call(_) => {
                let delta = ctx.current_bet.saturating_sub(ctx.round_bet);
                if ctx.current_bet <= ctx.round_bet {
                    return Err(illegal("nothing to call".into()));
                }
                if ctx.stack < delta {
                    return Err(illegal(format!(
                        "call needs {} but stack is {}",
                        delta, ctx.stack
                    )));
                }
                Ok(())
            }
            A::Bet(amount) => {
                if ctx.current_bet != 0 {
                    return Err(illegal("betting is already open, raise instead".into()));
                }
                if amount < self.big_blind {
                    return Err(illegal(format!(
                        "bet {} is below the big blind {}",
                        amount, self.big_blind
                    )));
                }
                if ctx.stack < amount {
                    return Err(illegal(format!(
                        "bet {} exceeds stack {}",
                        amount, ctx.stack
                    )));
                }
                self.check_size(ctx, amount).map_err(illegal)
            }
            A::Raise(amount) => {
                if ctx.current_bet == 0 {
                    return Err(illegal("no bet to raise".into()));
                }
                let minimum = self.minimum_raise(ctx.current_bet);
                if amount < minimum {
                    return Err(illegal(format!(
                        "raise to {} is below the minimum {}",
                        amount, minimum
                    )));
                }
                let needed = amount.saturating_sub(ctx.round_bet);
                if ctx.stack < needed {
                    return Err(illegal(format!(
                        "raise needs {} but stack is {}",
                        needed, ctx.stack
                    )));
                }
                if self.structure == BettingStructure::FixedLimit
                    && ctx.raises_this_round >= self.max_raises
                {
                    return Err(illegal(format!(
                        "raise cap of {} reached",
                        self.max_raises
                    )));
                }
                if !self.allow_check_raise && ctx.checked_this_round {
                    return Err(illegal("check-raise is not allowed at this table".into()));
                }
                self.check_size(ctx, amount).map_err(illegal)
            }
        }
    }

    fn check_size(&self, ctx: &BetContext, amount: u32) -> Result<(), String> {
        let reachable = ctx.stack.saturating_add(ctx.round_bet);
        if self.is_valid_bet(amount, ctx.current_bet, reachable, ctx.pot) {
            return Ok(());
        }
        let cap = self.maximum_bet(ctx.current_bet, reachable, ctx.pot);
        Err(format!("{:?} caps this bet at {}", self.structure, cap))
    }
}

/// The numbers an action is judged against: one player's position in the
/// current betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    pub seat: usize,
    pub status: PlayerStatus,
    pub stack: u32,
    pub round_bet: u32,
    pub current_bet: u32,
    /// Every chip committed this hand, including the current round.
    pub pot: u32,
    pub raises_this_round: u32,
    pub checked_this_round: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(stack: u32, round_bet: u32, current_bet: u32) -> BetContext {
        BetContext {
            seat: 3,
            status: PlayerStatus::Active,
            stack,
            round_bet,
            current_bet,
            pot: 30,
            raises_this_round: 0,
            checked_this_round: false,
        }
    }

    #[test]
    fn presets_match_table_defaults() {
        let r = RuleSet::default();
        assert_eq!((r.small_blind, r.big_blind, r.starting_stack), (1, 2, 1000));
        assert_eq!(r.structure, BettingStructure::NoLimit);
        assert_eq!(RuleSet::cash_game(5, 10).starting_stack, 1000);
        assert_eq!(RuleSet::tournament(1500).big_blind, 20);
        assert_eq!(RuleSet::fixed_limit(1, 2).max_raises, 4);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_blinds_and_tiny_tables() {
        let mut r = RuleSet::cash_game(10, 5);
        assert!(matches!(r.validate(), Err(GameError::InvalidRules(_))));
        r = RuleSet::default();
        r.min_players = 1;
        assert!(r.validate().is_err());
        r.min_players = 11;
        assert!(r.validate().is_err());
    }

    #[test]
    fn sizing_queries_per_structure() {
        assert_eq!(RuleSet::default().minimum_raise(10), 12);
        assert_eq!(RuleSet::default().maximum_bet(10, 500, 40), 500);
        assert_eq!(RuleSet::fixed_limit(1, 2).maximum_bet(10, 500, 40), 12);
        assert_eq!(RuleSet::pot_limit(1, 2).maximum_bet(10, 500, 40), 50);
        assert_eq!(RuleSet::pot_limit(1, 2).maximum_bet(10, 30, 40), 30);
        assert!(RuleSet::default().is_valid_player_count(2));
        assert!(!RuleSet::default().is_valid_player_count(11));
        assert!(RuleSet::default().is_valid_bet(2, 0, 100, 3));
        assert!(!RuleSet::default().is_valid_bet(11, 10, 100, 3));
        assert!(!RuleSet::default().is_valid_bet(120, 10, 100, 3));
    }

    #[test]
    fn is_valid_bet_follows_the_structure() {
        let fl = RuleSet::fixed_limit(1, 2);
        assert!(fl.is_valid_bet(2, 0, 500, 3));
        assert!(!fl.is_valid_bet(4, 0, 500, 3));
        assert!(fl.is_valid_bet(12, 10, 500, 30));
        assert!(!fl.is_valid_bet(14, 10, 500, 30));
        let pl = RuleSet::pot_limit(1, 2);
        assert!(pl.is_valid_bet(40, 10, 500, 30));
        assert!(!pl.is_valid_bet(41, 10, 500, 30));
        assert!(RuleSet::default().is_valid_bet(500, 10, 500, 30));
    }

    #[test]
    fn fold_check_and_all_in_are_always_structurally_legal() {
        let r = RuleSet::default();
        let c = ctx(100, 0, 50);
        assert!(r.validate_action(&c, &A::Fold).is_ok());
        assert!(r.validate_action(&c, &A::Check).is_ok());
        assert!(r.validate_action(&c, &A::AllIn(0)).is_ok());
    }

    #[test]
    fn inactive_players_cannot_act() {
        let r = RuleSet::default();
        let mut c = ctx(100, 0, 0);
        c.status = PlayerStatus::Folded;
        assert!(matches!(
            r.validate_action(&c, &A::Check),
            Err(GameError::IllegalAction { seat: 3, .. })
        ));
    }

    #[test]
    fn call_rules() {
        let r = RuleSet::default();
        assert!(r.validate_action(&ctx(100, 10, 10), &A::Call(0)).is_err());
        assert!(r.validate_action(&ctx(5, 0, 10), &A::Call(10)).is_err());
        assert!(r.validate_action(&ctx(10, 0, 10), &A::Call(10)).is_ok());
    }

    #[test]
    fn bet_rules() {
        let r = RuleSet::default();
        assert!(r.validate_action(&ctx(100, 0, 2), &A::Bet(10)).is_err());
        assert!(r.validate_action(&ctx(100, 0, 0), &A::Bet(1)).is_err());
        assert!(r.validate_action(&ctx(5, 0, 0), &A::Bet(10)).is_err());
        assert!(r.validate_action(&ctx(100, 0, 0), &A::Bet(2)).is_ok());
    }

    #[test]
    fn raise_rules() {
        let r = RuleSet::default();
        assert!(r.validate_action(&ctx(100, 0, 0), &A::Raise(10)).is_err());
        assert!(r.validate_action(&ctx(100, 0, 10), &A::Raise(11)).is_err());
        // stack covers amount minus what is already in
        assert!(r.validate_action(&ctx(15, 5, 10), &A::Raise(20)).is_ok());
        assert!(r.validate_action(&ctx(14, 5, 10), &A::Raise(20)).is_err());
    }

    #[test]
    fn pot_limit_caps_bets_and_raises() {
        let r = RuleSet::pot_limit(1, 2);
        assert!(r.validate_action(&ctx(500, 0, 0), &A::Bet(30)).is_ok());
        assert!(r.validate_action(&ctx(500, 0, 0), &A::Bet(31)).is_err());
        assert!(r.validate_action(&ctx(500, 0, 10), &A::Raise(40)).is_ok());
        assert!(r.validate_action(&ctx(500, 0, 10), &A::Raise(41)).is_err());
    }

    #[test]
    fn fixed_limit_enforces_raise_cap() {
        let r = RuleSet::fixed_limit(1, 2);
        let mut c = ctx(500, 0, 10);
        assert!(r.validate_action(&c, &A::Raise(12)).is_ok());
        c.raises_this_round = 4;
        assert!(r.validate_action(&c, &A::Raise(12)).is_err());
        // no-limit ignores the cap
        assert!(RuleSet::default().validate_action(&c, &A::Raise(12)).is_ok());
    }

    #[test]
    fn fixed_limit_holds_bets_and_raises_to_one_size() {
        let r = RuleSet::fixed_limit(1, 2);
        assert!(r.validate_action(&ctx(500, 0, 0), &A::Bet(2)).is_ok());
        assert!(matches!(
            r.validate_action(&ctx(500, 0, 0), &A::Bet(3)),
            Err(GameError::IllegalAction { reason, .. }) if reason.contains("caps this bet at 2")
        ));
        assert!(r.validate_action(&ctx(500, 0, 10), &A::Raise(12)).is_ok());
        assert!(r.validate_action(&ctx(500, 0, 10), &A::Raise(13)).is_err());
        assert!(r.validate_action(&ctx(500, 2, 10), &A::Raise(150)).is_err());
        // all-in stays available whatever its size
        assert!(r.validate_action(&ctx(500, 0, 10), &A::AllIn(500)).is_ok());
    }

    #[test]
    fn check_raise_can_be_switched_off() {
        let mut r = RuleSet::default();
        let mut c = ctx(500, 0, 10);
        c.checked_this_round = true;
        assert!(r.validate_action(&c, &A::Raise(20)).is_ok());
        r.allow_check_raise = false;
        assert!(r.validate_action(&c, &A::Raise(20)).is_err());
        assert!(r.validate_action(&c, &A::Call(10)).is_ok());
        c.checked_this_round = false;
        assert!(r.validate_action(&c, &A::Raise(20)).is_ok());
    }

    #[test]
    fn structure_parses_common_spellings() {
        assert_eq!(
            "pot_limit".parse::<BettingStructure>().unwrap(),
            BettingStructure::PotLimit
        );
        assert_eq!(
            "NL".parse::<BettingStructure>().unwrap(),
            BettingStructure::NoLimit
        );
        assert!("spread".parse::<BettingStructure>().is_err());
    }
}
