//! Decision sources - Where the controlled party's moves come from

use super::Battle;
use crate::error::BattleError;
use crate::party::{scripted_decision, MoveWeights};
use crate::types::Decision;
use rand::Rng;
use std::collections::VecDeque;

/// Supplies a move for each controlled hero that needs to act.
///
/// The battle calls `decide` once per living controlled hero per round and
/// waits for the answer; this is the only point where control leaves the engine.
pub trait DecisionSource {
    /// Pick a move for the controlled hero in `slot`
    fn decide(&mut self, battle: &Battle, slot: usize) -> Decision;

    /// Called when the last decision was rejected; the battle will ask again
    fn rejected(&mut self, _error: &BattleError) {}
}

/// Plays the controlled party with the same policy the enemy uses
pub struct ScriptedSource<R: Rng> {
    weights: MoveWeights,
    rng: R,
}

impl<R: Rng> ScriptedSource<R> {
    pub fn new(rng: R) -> Self {
        ScriptedSource {
            weights: MoveWeights::default(),
            rng,
        }
    }

    pub fn with_weights(weights: MoveWeights, rng: R) -> Self {
        ScriptedSource { weights, rng }
    }
}

impl<R: Rng> DecisionSource for ScriptedSource<R> {
    fn decide(&mut self, battle: &Battle, _slot: usize) -> Decision {
        scripted_decision(&self.weights, battle.enemy_party(), &mut self.rng)
            .unwrap_or_else(Decision::defend)
    }
}

/// Replays a fixed list of decisions, defending once the list runs out
#[derive(Debug, Clone, Default)]
pub struct QueuedDecisions {
    queue: VecDeque<Decision>,
    rejections: usize,
}

impl QueuedDecisions {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        QueuedDecisions {
            queue: decisions.into_iter().collect(),
            rejections: 0,
        }
    }

    pub fn push(&mut self, decision: Decision) {
        self.queue.push_back(decision);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// How many of the queued decisions the battle refused
    pub fn rejections(&self) -> usize {
        self.rejections
    }
}

impl DecisionSource for QueuedDecisions {
    fn decide(&mut self, _battle: &Battle, _slot: usize) -> Decision {
        self.queue.pop_front().unwrap_or_else(Decision::defend)
    }

    fn rejected(&mut self, _error: &BattleError) {
        self.rejections += 1;
    }
}
