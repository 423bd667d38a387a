//! Error types for hero, party and battle operations

use crate::types::Side;
use thiserror::Error;

/// Hero construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeroError {
    #[error("Character must have at least 1 of each stat ({stat} was {value})")]
    InvalidStat { stat: &'static str, value: i32 },
}

/// Party construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartyError {
    #[error("A party must have 4 filled hero slots, got {0}")]
    WrongSize(usize),
}

/// Rejected battle operation. State is left untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("actor slot {0} is out of range (0-3)")]
    ActorOutOfRange(usize),
    #[error("{side:?} hero in slot {slot} is dead and cannot act")]
    DeadActor { side: Side, slot: usize },
    #[error("{0} needs a target")]
    MissingTarget(&'static str),
    #[error("target slot {0} is out of range (0-3)")]
    TargetOutOfRange(usize),
    #[error("target slot {0} is already dead")]
    DeadTarget(usize),
    #[error("the battle has not started")]
    NotStarted,
    #[error("the battle is already over")]
    AlreadyFinished,
    #[error(transparent)]
    Hero(#[from] HeroError),
    #[error(transparent)]
    Party(#[from] PartyError),
}
