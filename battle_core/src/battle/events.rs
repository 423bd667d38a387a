//! Battle events - Ordered log of everything that happened in a battle

use crate::combat::MoveOutcome;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// One entry of the battle log, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleEvent {
    /// Turn order was decided
    Started {
        first: Side,
        controlled_speed: i32,
        enemy_speed: i32,
        /// Total speeds were equal and a coin flip decided
        coin_flip: bool,
    },
    RoundStarted { round: u32 },
    Move(MoveOutcome),
    Ended { winner: Side, rounds: u32 },
}

impl BattleEvent {
    /// Text for the message box, from the controlled party's point of view
    pub fn message(&self) -> String {
        match self {
            BattleEvent::Started { first, coin_flip, .. } => {
                let who = match first {
                    Side::Controlled => "Your party",
                    Side::Enemy => "The enemy party",
                };
                if *coin_flip {
                    format!("{} wins the coin flip and moves first!", who)
                } else {
                    format!("{} is faster and moves first!", who)
                }
            }
            BattleEvent::RoundStarted { round } => format!("Round {}", round),
            BattleEvent::Move(outcome) => outcome.summary(),
            BattleEvent::Ended { winner, .. } => match winner {
                Side::Controlled => "You won!".to_string(),
                Side::Enemy => "You lost!".to_string(),
            },
        }
    }

    pub fn as_move(&self) -> Option<&MoveOutcome> {
        match self {
            BattleEvent::Move(outcome) => Some(outcome),
            _ => None,
        }
    }
}
