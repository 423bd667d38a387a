//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::hero::{Hero, HeroStats};
pub use crate::party::{MoveWeights, Party};
pub use crate::types::{Decision, HeroRef, MoveKind, Side};

// Combat
pub use crate::combat::{HitReport, MoveOutcome};

// Battle
pub use crate::battle::{Battle, BattleEvent, BattleState, DecisionSource, QueuedDecisions, ScriptedSource};

// Errors
pub use crate::error::{BattleError, HeroError, PartyError};

// Config
pub use crate::config::{default_roster, load_roster, RosterConfig};
