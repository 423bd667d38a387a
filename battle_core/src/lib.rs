//! battle_core - Battle resolution engine for four-hero party combat
//!
//! This library provides:
//! - Hero: A combat unit with fixed stats and mutable battle state
//! - Party: Four heroes ordered by speed, with defeat detection and a scripted policy
//! - Move resolution: Effects computed from actor/target pairs and applied by the caller
//! - Battle: Turn order, round sequencing and win/loss detection
//! - Config: TOML rosters

pub mod battle;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod error;
pub mod hero;
pub mod party;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use battle::{
    determine_first_party, Battle, BattleEvent, BattleState, DecisionSource, QueuedDecisions,
    ScriptedSource,
};
pub use combat::{execute_move, Effect, HitReport, MoveOutcome};
pub use config::{default_roster, ConfigError, RosterConfig};
pub use error::{BattleError, HeroError, PartyError};
pub use hero::{Hero, HeroStats};
pub use party::{MoveWeights, Party, PARTY_SIZE};
pub use types::{Decision, HeroRef, MoveKind, Side};
