//! Battle - One engagement between the controlled party and the enemy party
//!
//! State machine: NotStarted -> InProgress -> Won(side). Each round the
//! faster party acts first, member by member in stored order, then the other
//! party acts. Controlled heroes wait for a decision from outside; enemy heroes
//! follow the scripted policy. The battle ends the moment either party is
//! defeated, even in the middle of a pass.

mod events;
mod source;

pub use events::BattleEvent;
pub use source::{DecisionSource, QueuedDecisions, ScriptedSource};

use crate::combat::{execute_move, MoveOutcome};
use crate::error::BattleError;
use crate::party::{MoveWeights, Party, PARTY_SIZE};
use crate::types::{Decision, Side};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Consecutive rejected decisions tolerated by `run` before giving up
pub const MAX_REJECTED_DECISIONS: usize = 16;

/// Where a battle is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleState {
    NotStarted,
    InProgress,
    /// Terminal; the side that still has a living hero
    Won(Side),
}

/// Decide which side acts first each round: the higher total speed, or a fair
/// coin flip on a tie
pub fn determine_first_party(controlled: &Party, enemy: &Party, rng: &mut impl Rng) -> Side {
    let controlled_speed = controlled.total_speed();
    let enemy_speed = enemy.total_speed();

    if controlled_speed > enemy_speed {
        Side::Controlled
    } else if controlled_speed < enemy_speed {
        Side::Enemy
    } else if rng.gen_bool(0.5) {
        Side::Controlled
    } else {
        Side::Enemy
    }
}

/// A battle between two parties
#[derive(Debug, Clone)]
pub struct Battle {
    controlled: Party,
    enemy: Party,
    weights: MoveWeights,
    state: BattleState,
    first: Option<Side>,
    round: u32,
    /// 0 while the first mover's pass runs, 1 for the second
    half: usize,
    /// Next controlled slot to consider during the controlled pass
    next_slot: usize,
    events: Vec<BattleEvent>,
}

impl Battle {
    pub fn new(controlled: Party, enemy: Party) -> Self {
        Battle {
            controlled,
            enemy,
            weights: MoveWeights::default(),
            state: BattleState::NotStarted,
            first: None,
            round: 0,
            half: 0,
            next_slot: 0,
            events: Vec::new(),
        }
    }

    /// Use custom scripted-policy weights for the enemy party
    pub fn with_weights(mut self, weights: MoveWeights) -> Self {
        self.weights = weights;
        self
    }

    // === Queries ===

    pub fn controlled_party(&self) -> &Party {
        &self.controlled
    }

    pub fn enemy_party(&self) -> &Party {
        &self.enemy
    }

    pub fn party(&self, side: Side) -> &Party {
        match side {
            Side::Controlled => &self.controlled,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn weights(&self) -> &MoveWeights {
        &self.weights
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Side that moves first each round, once the battle has started
    pub fn first_mover(&self) -> Option<Side> {
        self.first
    }

    /// Current round, starting at 1 (0 before the battle starts)
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, BattleState::Won(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            BattleState::Won(side) => Some(side),
            _ => None,
        }
    }

    /// Everything that has happened so far, in order
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Controlled slot currently waiting for a decision
    pub fn pending_actor(&self) -> Option<usize> {
        if self.state != BattleState::InProgress || self.current_side() != Some(Side::Controlled) {
            return None;
        }
        (self.next_slot < PARTY_SIZE).then_some(self.next_slot)
    }

    fn current_side(&self) -> Option<Side> {
        let first = self.first?;
        Some(if self.half == 0 { first } else { first.opponent() })
    }

    // === Transitions ===

    /// Decide turn order and enter the first round.
    ///
    /// Returns the first mover. Calling again while in progress returns the
    /// same side without re-deciding.
    pub fn start(&mut self, rng: &mut impl Rng) -> Result<Side, BattleError> {
        match self.state {
            BattleState::Won(_) => return Err(BattleError::AlreadyFinished),
            BattleState::InProgress => return self.first.ok_or(BattleError::NotStarted),
            BattleState::NotStarted => {}
        }

        let controlled_speed = self.controlled.total_speed();
        let enemy_speed = self.enemy.total_speed();
        let first = determine_first_party(&self.controlled, &self.enemy, rng);
        info!(
            "battle started: controlled speed {} vs enemy speed {}, {:?} moves first",
            controlled_speed, enemy_speed, first
        );

        self.first = Some(first);
        self.state = BattleState::InProgress;
        self.round = 1;
        self.half = 0;
        self.next_slot = 0;
        self.events.push(BattleEvent::Started {
            first,
            controlled_speed,
            enemy_speed,
            coin_flip: controlled_speed == enemy_speed,
        });
        self.events.push(BattleEvent::RoundStarted { round: 1 });

        self.advance(rng);
        Ok(first)
    }

    /// Apply a decision for the controlled hero that is currently waiting.
    ///
    /// Invalid decisions are rejected without changing any state. After a
    /// valid move the battle runs forward (including any enemy pass) until
    /// the next controlled decision is needed or the battle ends.
    pub fn submit(&mut self, decision: Decision, rng: &mut impl Rng) -> Result<MoveOutcome, BattleError> {
        match self.state {
            BattleState::NotStarted => return Err(BattleError::NotStarted),
            BattleState::Won(_) => return Err(BattleError::AlreadyFinished),
            BattleState::InProgress => {}
        }
        let slot = self.pending_actor().ok_or(BattleError::AlreadyFinished)?;

        let outcome = execute_move(
            &mut self.controlled,
            slot,
            &mut self.enemy,
            decision,
            Side::Controlled,
            rng,
        )?;
        self.events.push(BattleEvent::Move(outcome.clone()));
        self.next_slot += 1;

        self.advance(rng);
        Ok(outcome)
    }

    /// Drive the whole battle to its end, asking `source` for every controlled move
    pub fn run<S: DecisionSource>(&mut self, source: &mut S, rng: &mut impl Rng) -> Result<Side, BattleError> {
        self.start(rng)?;

        let mut rejected = 0;
        while let Some(slot) = self.pending_actor() {
            let decision = source.decide(self, slot);
            match self.submit(decision, rng) {
                Ok(_) => rejected = 0,
                Err(e) => {
                    warn!("decision for controlled slot {} rejected: {}", slot, e);
                    source.rejected(&e);
                    rejected += 1;
                    if rejected >= MAX_REJECTED_DECISIONS {
                        return Err(e);
                    }
                }
            }
        }

        self.winner().ok_or(BattleError::NotStarted)
    }

    /// Run scripted passes and skip dead controlled heroes until a controlled
    /// decision is needed or the battle is over
    fn advance(&mut self, rng: &mut impl Rng) {
        loop {
            if self.check_terminal() {
                return;
            }

            match self.current_side() {
                Some(Side::Enemy) => {
                    let outcomes = self.enemy.scripted_turn(
                        Side::Enemy,
                        &mut self.controlled,
                        &self.weights,
                        rng,
                    );
                    self.events.extend(outcomes.into_iter().map(BattleEvent::Move));
                    // A pass that wins the battle must not open another round
                    if self.check_terminal() {
                        return;
                    }
                    self.end_half();
                }
                Some(Side::Controlled) => {
                    while self.next_slot < PARTY_SIZE
                        && !self.controlled.heroes()[self.next_slot].is_alive()
                    {
                        self.next_slot += 1;
                    }
                    if self.next_slot < PARTY_SIZE {
                        return;
                    }
                    self.end_half();
                }
                None => return,
            }
        }
    }

    fn end_half(&mut self) {
        self.next_slot = 0;
        self.half += 1;
        if self.half == 2 {
            self.half = 0;
            self.round += 1;
            debug!("round {} begins", self.round);
            self.events.push(BattleEvent::RoundStarted { round: self.round });
        }
    }

    /// Move to a terminal state if a party is defeated.
    ///
    /// The controlled party is checked first, so a mutual defeat is a loss.
    fn check_terminal(&mut self) -> bool {
        if self.is_over() {
            return true;
        }

        let winner = if self.controlled.is_defeated() {
            Side::Enemy
        } else if self.enemy.is_defeated() {
            Side::Controlled
        } else {
            return false;
        };

        info!("battle over after {} rounds: {:?} wins", self.round, winner);
        self.state = BattleState::Won(winner);
        self.events.push(BattleEvent::Ended {
            winner,
            rounds: self.round,
        });
        true
    }
}
