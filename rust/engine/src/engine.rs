use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::HandStrength;
use crate::logger::{format_hand_id, today, ActionRecord, HandRecord, PotRecord};
use crate::player::{Player, PlayerAction, PlayerStatus};
use crate::pot::{self, Contribution, Pot};
use crate::rules::{BetContext, RuleSet};
use crate::strategy::Strategy;
use crate::table::{Phase, SeatView, TableState};

/// One chair at the table: the player record and whoever decides for it.
pub struct Seat {
    player: Player,
    strategy: Box<dyn Strategy>,
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat")
            .field("player", &self.player)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// What happened in a hand, returned by [`Engine::play_hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_number: u64,
    pub board: Vec<Card>,
    pub pots: Vec<PotRecord>,
    /// Names of players removed for having no chips left
    pub eliminated: Vec<String>,
}

/// Core game engine that runs multi-player hands.
///
/// The engine owns the only seat table. Strategies see the table through a
/// [`SeatView`] built fresh for each decision, and everything else reads it
/// through the accessors here.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::engine::Engine;
/// use tablestakes_engine::rules::RuleSet;
/// use tablestakes_engine::strategy::Passive;
///
/// let mut engine = Engine::new(RuleSet::default(), 7).unwrap();
/// for name in ["ann", "bob", "cyd"] {
///     engine.add_player(name, Box::new(Passive)).unwrap();
/// }
/// let summary = engine.play_hand().unwrap();
/// assert_eq!(summary.board.len(), 5);
/// let chips: u32 = engine.players().map(|p| p.stack()).sum();
/// assert_eq!(chips, 3000);
/// ```
#[derive(Debug)]
pub struct Engine {
    rules: RuleSet,
    seats: Vec<Seat>,
    table: TableState,
    deck: Deck,
    seed: u64,
    hand_number: u64,
    in_progress: bool,
    /// Per seat: acted since the last bet level change in this round
    acted: Vec<bool>,
    /// Per seat: checked earlier in this round
    checked: Vec<bool>,
    actions: Vec<ActionRecord>,
    last_record: Option<HandRecord>,
}

impl Engine {
    pub fn new(rules: RuleSet, seed: u64) -> Result<Self, GameError> {
        rules.validate()?;
        Ok(Self {
            rules,
            seats: Vec::new(),
            table: TableState::default(),
            deck: Deck::new_with_seed(seed),
            seed,
            hand_number: 0,
            in_progress: false,
            acted: Vec::new(),
            checked: Vec::new(),
            actions: Vec::new(),
            last_record: None,
        })
    }

    /// Seats a player with the configured starting stack and returns the seat index.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        strategy: Box<dyn Strategy>,
    ) -> Result<usize, GameError> {
        let stack = self.rules.starting_stack;
        self.add_player_with_stack(name, stack, strategy)
    }

    /// Seats a player with an explicit stack. Refused once the chips on the
    /// table would no longer fit in a `u32`.
    pub fn add_player_with_stack(
        &mut self,
        name: impl Into<String>,
        stack: u32,
        strategy: Box<dyn Strategy>,
    ) -> Result<usize, GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        if self.seats.len() >= self.rules.max_players {
            return Err(GameError::TableFull {
                max: self.rules.max_players,
            });
        }
        let on_table: u64 = self.seats.iter().map(|s| u64::from(s.player.stack())).sum();
        if on_table + u64::from(stack) > u64::from(u32::MAX) {
            return Err(GameError::ChipOverflow);
        }
        let seat = self.seats.len();
        self.seats.push(Seat {
            player: Player::new(name, seat, stack),
            strategy,
        });
        Ok(seat)
    }

    /// Takes a seat out of (or back into) the deal from the next hand on.
    pub fn set_sitting_out(&mut self, seat: usize, sitting_out: bool) -> Result<(), GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        let player = &mut self
            .seats
            .get_mut(seat)
            .ok_or(GameError::NoSuchSeat(seat))?
            .player;
        if sitting_out {
            player.sit_out();
        } else {
            player.sit_in();
        }
        Ok(())
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.seats.iter().map(|s| &s.player)
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.seats.get(seat).map(|s| &s.player)
    }
    pub fn strategy_name(&self, seat: usize) -> Option<&str> {
        self.seats.get(seat).map(|s| s.strategy.name())
    }
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn is_hand_in_progress(&self) -> bool {
        self.in_progress
    }
    /// History record of the most recently finished hand.
    pub fn last_record(&self) -> Option<&HandRecord> {
        self.last_record.as_ref()
    }

    /// Read-only table snapshot: phase, board, current bet, pots and seat positions.
    pub fn get_game_state(&self) -> &TableState {
        &self.table
    }

    /// Shuffles, resets per-hand state, moves the dealer button and assigns blinds.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        let ready = self.seats_ready();
        if !self.rules.is_valid_player_count(ready) {
            return Err(GameError::InvalidPlayerCount {
                count: ready,
                min: self.rules.min_players,
                max: self.rules.max_players,
            });
        }

        self.deck.shuffle();
        self.table.reset_for_hand();
        for seat in &mut self.seats {
            seat.player.reset_for_hand();
        }
        self.acted = vec![false; self.seats.len()];
        self.checked = vec![false; self.seats.len()];
        self.actions.clear();
        self.hand_number += 1;
        self.in_progress = true;

        let from = self.table.dealer;
        let dealer = self.next_seat_dealt_in(from).unwrap_or(from);
        let small_blind = self.next_seat_dealt_in(dealer).unwrap_or(dealer);
        let big_blind = self.next_seat_dealt_in(small_blind).unwrap_or(small_blind);
        self.table.dealer = dealer;
        self.table.small_blind_seat = small_blind;
        self.table.big_blind_seat = big_blind;
        self.table.acting = self.first_actor_after(big_blind);

        info!(
            hand = self.hand_number,
            players = ready,
            dealer,
            small_blind,
            big_blind,
            "hand started"
        );
        Ok(())
    }

    /// Two cards to every seat in the hand, one at a time in seat order.
    pub fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        for _ in 0..2 {
            for seat in &mut self.seats {
                if !seat.player.in_hand() {
                    continue;
                }
                let card = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                seat.player.deal_card(card)?;
            }
        }
        Ok(())
    }

    /// Posts both blinds. A stack smaller than its blind goes all-in for what it has.
    pub fn collect_blinds(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        let (sb, bb) = (self.table.small_blind_seat, self.table.big_blind_seat);
        self.post_blind(sb, self.rules.small_blind)?;
        self.post_blind(bb, self.rules.big_blind)?;
        self.table.current_bet = self.rules.big_blind;
        self.table.acting = self.first_actor_after(bb);
        Ok(())
    }

    fn post_blind(&mut self, seat: usize, blind: u32) -> Result<(), GameError> {
        let player = &mut self
            .seats
            .get_mut(seat)
            .ok_or(GameError::NoSuchSeat(seat))?
            .player;
        let amount = blind.min(player.stack());
        player.commit(amount)?;
        debug!(seat, amount, all_in = player.is_all_in(), "blind posted");
        Ok(())
    }

    /// Legal actions for `seat` in canonical order: fold, check, call, bet,
    /// raise, all-in. Bet and raise carry their minimum totals. Empty when
    /// the seat cannot act.
    pub fn get_legal_actions(&self, seat: usize) -> Vec<PlayerAction> {
        let Some(player) = self.player(seat) else {
            return Vec::new();
        };
        if !self.in_progress || !player.can_act() {
            return Vec::new();
        }
        let current = self.table.current_bet;
        let round_bet = player.round_bet();

        let mut candidates = vec![PlayerAction::Fold];
        if player.can_check(current) {
            candidates.push(PlayerAction::Check);
        }
        if player.can_call(current) {
            candidates.push(PlayerAction::Call(player.to_call(current)));
        }
        if player.can_raise(current, self.rules.big_blind) {
            if current == 0 {
                candidates.push(PlayerAction::Bet(self.rules.big_blind));
            } else {
                candidates.push(PlayerAction::Raise(self.rules.minimum_raise(current)));
            }
        }
        if player.stack() > 0 {
            candidates.push(PlayerAction::AllIn(round_bet + player.stack()));
        }

        let ctx = self.bet_context(seat);
        candidates.retain(|a| self.rules.validate_action(&ctx, a).is_ok());
        candidates
    }

    /// Validates and applies an action for the acting seat. A rejected action
    /// leaves every piece of state untouched.
    pub fn submit_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        self.require_in_progress()?;
        if self.table.phase == Phase::Showdown {
            return Err(GameError::HandAlreadyComplete);
        }
        if seat >= self.seats.len() {
            return Err(GameError::NoSuchSeat(seat));
        }
        if self.table.acting != Some(seat) {
            return Err(GameError::NotPlayersTurn {
                expected: self.table.acting,
                actual: seat,
            });
        }
        let ctx = self.bet_context(seat);
        self.rules.validate_action(&ctx, &action)?;

        let applied = self.apply_action(seat, action)?;
        self.acted[seat] = true;
        if applied == PlayerAction::Check {
            self.checked[seat] = true;
        }
        let name = self.seats[seat].player.name().to_string();
        debug!(seat, player = %name, phase = %self.table.phase, action = %applied, "action");
        self.actions.push(ActionRecord {
            seat,
            player: name,
            phase: self.table.phase,
            action: applied,
        });
        self.table.acting = self.next_active_player(seat);
        Ok(())
    }

    fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<PlayerAction, GameError> {
        let current = self.table.current_bet;
        let player = &mut self.seats[seat].player;
        let applied = match action {
            PlayerAction::Fold => {
                player.fold();
                PlayerAction::Fold
            }
            PlayerAction::Check => PlayerAction::Check,
            PlayerAction::Call(_) => {
                let delta = player.to_call(current);
                player.commit(delta)?;
                PlayerAction::Call(delta)
            }
            PlayerAction::Bet(amount) | PlayerAction::Raise(amount) => {
                player.commit(amount.saturating_sub(player.round_bet()))?;
                action
            }
            PlayerAction::AllIn(_) => {
                player.go_all_in();
                PlayerAction::AllIn(player.round_bet())
            }
        };

        let new_total = player.round_bet();
        if new_total > current {
            self.table.current_bet = new_total;
            if current > 0 && matches!(applied, PlayerAction::Raise(_) | PlayerAction::AllIn(_)) {
                self.table.raises_this_round += 1;
            }
            // everyone else has to answer the new level
            for (i, acted) in self.acted.iter_mut().enumerate() {
                if i != seat {
                    *acted = false;
                }
            }
        }
        Ok(applied)
    }

    /// Next seat after `from`, wrapping around, that can still act. `from`
    /// itself is never returned; `None` when no other seat can act.
    pub fn next_active_player(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..n)
            .map(|i| (from + i) % n)
            .find(|&s| self.seats[s].player.can_act())
    }

    /// Like [`Engine::next_active_player`] but falls back to `from` itself.
    fn first_actor_after(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|&s| self.seats[s].player.can_act())
    }

    fn next_seat_dealt_in(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|&s| self.seats[s].player.status() == PlayerStatus::Active)
    }

    /// True once nobody can act, or once at least one action has been taken
    /// and every seat that can act has acted at the current bet level and
    /// matched it.
    pub fn is_betting_round_complete(&self) -> bool {
        let mut actors = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.player.can_act())
            .peekable();
        if actors.peek().is_none() {
            return true;
        }
        if !self.acted.iter().any(|&a| a) {
            return false;
        }
        let current = self.table.current_bet;
        actors.all(|(i, s)| {
            self.acted.get(i).copied().unwrap_or(false) && s.player.round_bet() == current
        })
    }

    /// Asks each acting seat's strategy for a decision until the round closes.
    /// A decision that is not offered or fails validation is replaced with a
    /// check when that is free, otherwise a fold.
    pub fn run_betting_round(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        while !self.is_betting_round_complete() && self.in_hand_count() > 1 {
            let Some(seat) = self.table.acting else {
                break;
            };
            let legal = self.get_legal_actions(seat);
            if legal.is_empty() {
                self.table.acting = self.next_active_player(seat);
                continue;
            }

            let decision = self.decide(seat, &legal);
            let result = if legal.iter().any(|a| a.kind() == decision.kind()) {
                self.submit_action(seat, decision)
            } else {
                Err(GameError::IllegalAction {
                    seat,
                    action: decision,
                    reason: "not among the legal actions".into(),
                })
            };
            if let Err(err) = result {
                let fallback = if legal.contains(&PlayerAction::Check) {
                    PlayerAction::Check
                } else {
                    PlayerAction::Fold
                };
                warn!(seat, error = %err, fallback = %fallback, "decision rejected");
                self.submit_action(seat, fallback)?;
            }
        }
        Ok(())
    }

    fn decide(&mut self, seat: usize, legal: &[PlayerAction]) -> PlayerAction {
        let opponents = self
            .seats
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != seat && s.player.in_hand())
            .count();
        let pot = self.chips_committed();
        let big_blind = self.rules.big_blind;
        let table = &self.table;
        let s = &mut self.seats[seat];
        let all_in_total = s.player.round_bet() + s.player.stack();
        let max_total = self
            .rules
            .maximum_bet(table.current_bet, all_in_total, pot)
            .min(all_in_total);
        let view = SeatView {
            table,
            seat,
            player: &s.player,
            big_blind,
            opponents,
            pot,
            max_total,
        };
        s.strategy.decide(&view, legal)
    }

    /// Closes the current round and moves to the next phase, burning one card
    /// and dealing the phase's community cards.
    pub fn advance_phase(&mut self) -> Result<(), GameError> {
        self.require_in_progress()?;
        if self.table.phase == Phase::Showdown {
            return Err(GameError::HandAlreadyComplete);
        }
        self.collect_bets();

        let next = self.table.phase.next();
        if next != Phase::Showdown {
            if !self.deck.burn_card() {
                return Err(GameError::DeckExhausted);
            }
            for _ in 0..next.cards_dealt() {
                let card = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                self.table.community.push(card);
                for seat in &mut self.seats {
                    if seat.player.in_hand() {
                        seat.player.deal_card(card)?;
                    }
                }
            }
        }

        self.table.phase = next;
        self.table.betting_round += 1;
        self.table.current_bet = 0;
        self.table.raises_this_round = 0;
        self.acted.iter_mut().for_each(|a| *a = false);
        self.checked.iter_mut().for_each(|c| *c = false);
        self.table.acting = if next == Phase::Showdown {
            None
        } else {
            self.first_actor_after(self.table.dealer)
        };
        debug!(phase = %next, board = self.table.community.len(), "phase advanced");
        Ok(())
    }

    /// Rebuilds the pots from hand contributions and clears round bets.
    pub fn collect_bets(&mut self) {
        self.table.pots = self.calculate_pots();
        for seat in &mut self.seats {
            seat.player.clear_round_bet();
        }
    }

    /// Pots derived from scratch from every seat's contribution to this hand,
    /// folded seats' dead money included.
    pub fn calculate_pots(&self) -> Vec<Pot> {
        let contributions: Vec<Contribution> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.player.total_bet() > 0)
            .map(|(seat, s)| Contribution {
                seat,
                amount: s.player.total_bet(),
                folded: s.player.is_folded(),
            })
            .collect();
        pot::calculate_pots(&contributions)
    }

    pub fn can_more_betting_occur(&self) -> bool {
        self.seats.iter().filter(|s| s.player.can_act()).count() >= 2
    }

    fn betting_possible(&self) -> bool {
        let current = self.table.current_bet;
        self.can_more_betting_occur()
            || self
                .seats
                .iter()
                .any(|s| s.player.can_act() && s.player.round_bet() < current)
    }

    fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|s| s.player.in_hand()).count()
    }

    /// No hand running, showdown reached, or at most one player left in.
    pub fn is_hand_complete(&self) -> bool {
        !self.in_progress || self.table.phase == Phase::Showdown || self.in_hand_count() <= 1
    }

    /// Picks one winner per pot. Uncontested pots are awarded without looking
    /// at cards. Equal best hands are not split: the lowest seat index wins.
    pub fn determine_winner(&self) -> Result<Vec<PotRecord>, GameError> {
        let pots = self.calculate_pots();
        let mut results = Vec::with_capacity(pots.len());
        for pot in pots {
            let contenders: Vec<usize> = pot
                .eligible
                .iter()
                .copied()
                .filter(|&s| self.seats[s].player.in_hand())
                .collect();

            let (winner, category) = match contenders.as_slice() {
                [] => continue,
                [only] => (*only, None),
                _ => {
                    let mut best: Option<(usize, HandStrength)> = None;
                    let mut tied = false;
                    for &seat in &contenders {
                        let strength = self.seats[seat].player.hand().strength()?;
                        let ord = match &best {
                            Some((_, b)) => strength.cmp(b),
                            None => Ordering::Greater,
                        };
                        match ord {
                            Ordering::Greater => {
                                best = Some((seat, strength));
                                tied = false;
                            }
                            Ordering::Equal => tied = true,
                            Ordering::Less => {}
                        }
                    }
                    let Some((seat, strength)) = best else {
                        continue;
                    };
                    if tied {
                        warn!(
                            pot = pot.amount,
                            winner = seat,
                            "tied hands, pot awarded whole to the lowest seat"
                        );
                    }
                    (seat, Some(strength.category))
                }
            };

            results.push(PotRecord {
                amount: pot.amount,
                eligible: pot.eligible,
                winner,
                winner_name: self.seats[winner].player.name().to_string(),
                category,
            });
        }
        Ok(results)
    }

    pub fn distribute_winnings(&mut self, results: &[PotRecord]) -> Result<(), GameError> {
        for r in results {
            if let Some(seat) = self.seats.get_mut(r.winner) {
                seat.player.add_chips(r.amount)?;
                info!(seat = r.winner, player = %r.winner_name, amount = r.amount, "pot awarded");
            }
        }
        self.table.pots.clear();
        Ok(())
    }

    /// Finishes the hand, records it and removes players left without chips.
    pub fn end_hand(&mut self, results: Vec<PotRecord>) -> Result<HandSummary, GameError> {
        self.require_in_progress()?;
        self.table.phase = Phase::Showdown;
        self.table.acting = None;
        self.in_progress = false;

        let eliminated = self.remove_eliminated_players()?;
        let board = self.table.community.clone();
        self.last_record = Some(HandRecord {
            hand_id: format_hand_id(&today(), self.hand_number),
            seed: Some(self.seed),
            actions: std::mem::take(&mut self.actions),
            board: board.clone(),
            pots: results.clone(),
            eliminated: eliminated.clone(),
            ts: None,
        });
        info!(
            hand = self.hand_number,
            pots = results.len(),
            eliminated = eliminated.len(),
            "hand complete"
        );
        Ok(HandSummary {
            hand_number: self.hand_number,
            board,
            pots: results,
            eliminated,
        })
    }

    /// Drops every seat whose stack is empty and renumbers the rest. The
    /// dealer index moves to the last surviving seat at or before the old
    /// button so rotation continues forward.
    pub fn remove_eliminated_players(&mut self) -> Result<Vec<String>, GameError> {
        if self.in_progress {
            return Err(GameError::HandInProgress);
        }
        if self.seats.iter().all(|s| s.player.stack() > 0) {
            return Ok(Vec::new());
        }

        let old_dealer = self.table.dealer;
        let mut dealer = None;
        let mut removed = Vec::new();
        let mut kept: Vec<Seat> = Vec::with_capacity(self.seats.len());
        for (i, seat) in std::mem::take(&mut self.seats).into_iter().enumerate() {
            if seat.player.stack() == 0 {
                removed.push(seat.player.name().to_string());
                continue;
            }
            if i <= old_dealer {
                dealer = Some(kept.len());
            }
            kept.push(seat);
        }
        for (i, seat) in kept.iter_mut().enumerate() {
            seat.player.set_seat(i);
        }
        // nobody at or before the button survived: wrap to the last seat
        self.table.dealer = dealer.unwrap_or(kept.len().saturating_sub(1));
        self.acted = vec![false; kept.len()];
        self.checked = vec![false; kept.len()];
        self.seats = kept;
        info!(eliminated = ?removed, remaining = self.seats.len(), "players eliminated");
        Ok(removed)
    }

    /// At most one player still holds chips.
    pub fn is_game_over(&self) -> bool {
        self.seats.iter().filter(|s| s.player.stack() > 0).count() <= 1
    }

    /// Runs a full hand: deal, blinds, up to four betting rounds, showdown.
    /// When every remaining player is all-in the board is run out without
    /// further betting.
    pub fn play_hand(&mut self) -> Result<HandSummary, GameError> {
        self.start_hand()?;
        self.deal_hole_cards()?;
        self.collect_blinds()?;
        while !self.is_hand_complete() {
            if self.betting_possible() {
                self.run_betting_round()?;
            }
            if self.in_hand_count() <= 1 {
                break;
            }
            self.advance_phase()?;
        }
        self.collect_bets();
        let results = self.determine_winner()?;
        self.distribute_winnings(&results)?;
        self.end_hand(results)
    }

    /// Plays up to `num_hands` hands, stopping early once the game is over.
    pub fn play_game(&mut self, num_hands: u64) -> Result<Vec<HandSummary>, GameError> {
        let mut summaries = Vec::new();
        for _ in 0..num_hands {
            if self.is_game_over() || !self.rules.is_valid_player_count(self.seats_ready()) {
                info!(hands = summaries.len(), "game over");
                break;
            }
            summaries.push(self.play_hand()?);
        }
        Ok(summaries)
    }

    fn seats_ready(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.player.stack() > 0 && s.player.status() != PlayerStatus::SittingOut)
            .count()
    }

    /// Every chip committed this hand, current round included.
    fn chips_committed(&self) -> u32 {
        self.seats.iter().map(|s| s.player.total_bet()).sum()
    }

    fn bet_context(&self, seat: usize) -> BetContext {
        let player = &self.seats[seat].player;
        BetContext {
            seat,
            status: player.status(),
            stack: player.stack(),
            round_bet: player.round_bet(),
            current_bet: self.table.current_bet,
            pot: self.chips_committed(),
            raises_this_round: self.table.raises_this_round,
            checked_this_round: self.checked.get(seat).copied().unwrap_or(false),
        }
    }

    fn require_in_progress(&self) -> Result<(), GameError> {
        if self.in_progress {
            Ok(())
        } else {
            Err(GameError::NoHandInProgress)
        }
    }
}
