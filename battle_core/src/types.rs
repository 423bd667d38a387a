//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four moves a hero can make in battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Single target, scales with attack vs defense
    Attack,
    /// Single target, scales with magic vs magic resist
    Magic,
    /// Reduced-damage attack against every living opponent
    Cluster,
    /// Doubles defense and magic resist until the next hit
    Defend,
}

impl MoveKind {
    /// Get all move kinds in menu order
    pub fn all() -> &'static [MoveKind] {
        &[
            MoveKind::Attack,
            MoveKind::Magic,
            MoveKind::Cluster,
            MoveKind::Defend,
        ]
    }

    /// Whether this move needs a single opposing target
    pub fn needs_target(&self) -> bool {
        matches!(self, MoveKind::Attack | MoveKind::Magic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoveKind::Attack => "attack",
            MoveKind::Magic => "magic",
            MoveKind::Cluster => "cluster",
            MoveKind::Defend => "defend",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of the battle a party is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The party whose moves are supplied from outside the engine
    Controlled,
    /// The party driven by the scripted policy
    Enemy,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Controlled => Side::Enemy,
            Side::Enemy => Side::Controlled,
        }
    }
}

/// Identifies a hero by side, slot and name in events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRef {
    pub side: Side,
    /// Position within the party (0-3, ascending speed)
    pub slot: usize,
    pub name: String,
}

impl HeroRef {
    pub fn new(side: Side, slot: usize, name: impl Into<String>) -> Self {
        HeroRef {
            side,
            slot,
            name: name.into(),
        }
    }
}

/// A move choice for one acting hero: what to do and, for single-target moves, whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub kind: MoveKind,
    /// Slot in the opposing party; required for attack and magic, ignored otherwise
    #[serde(default)]
    pub target: Option<usize>,
}

impl Decision {
    pub fn attack(target: usize) -> Self {
        Decision {
            kind: MoveKind::Attack,
            target: Some(target),
        }
    }

    pub fn magic(target: usize) -> Self {
        Decision {
            kind: MoveKind::Magic,
            target: Some(target),
        }
    }

    pub fn cluster() -> Self {
        Decision {
            kind: MoveKind::Cluster,
            target: None,
        }
    }

    pub fn defend() -> Self {
        Decision {
            kind: MoveKind::Defend,
            target: None,
        }
    }
}
