//! MoveOutcome - Structured result of one resolved move

use crate::types::{HeroRef, MoveKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitReport {
    pub target: HeroRef,
    /// The target dodged; nothing else changed
    pub dodged: bool,
    /// Damage rolled for the hit (0 when dodged)
    pub damage: i32,
    /// The hit killed the target
    pub killed: bool,
    /// The target was defending and lost the stance
    pub broke_guard: bool,
    /// Target health after the hit
    pub health_after: i32,
}

impl HitReport {
    /// A dodged hit
    pub fn dodge(target: HeroRef, health: i32) -> Self {
        HitReport {
            target,
            dodged: true,
            damage: 0,
            killed: false,
            broke_guard: false,
            health_after: health,
        }
    }

    /// Render this hit for a move of the given kind
    pub fn message(&self, kind: MoveKind) -> String {
        let name = &self.target.name;
        if self.dodged {
            return format!("{} dodged the attack!", name);
        }

        let damage = match kind {
            MoveKind::Magic => format!("{} magic damage", self.damage),
            _ => format!("{} damage", self.damage),
        };

        if self.killed {
            format!("{} took {} and died!", name, damage)
        } else if self.broke_guard {
            format!("{} was defending and took {}!", name, damage)
        } else {
            format!("{} took {}!", name, damage)
        }
    }
}

/// Result of a hero's move: who acted, with what, and what each target took
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    pub actor: HeroRef,
    /// One entry per target; empty for defend
    pub hits: Vec<HitReport>,
}

impl MoveOutcome {
    pub fn new(kind: MoveKind, actor: HeroRef) -> Self {
        MoveOutcome {
            kind,
            actor,
            hits: Vec::new(),
        }
    }

    /// Total damage actually dealt (dodged hits count as 0)
    pub fn total_damage(&self) -> i32 {
        self.hits.iter().map(|h| h.damage).sum()
    }

    /// Targets killed by this move
    pub fn kills(&self) -> impl Iterator<Item = &HeroRef> {
        self.hits.iter().filter(|h| h.killed).map(|h| &h.target)
    }

    /// Whether every hit of this move was dodged
    pub fn all_dodged(&self) -> bool {
        !self.hits.is_empty() && self.hits.iter().all(|h| h.dodged)
    }

    /// One-line text for the move, matching the in-game message box
    pub fn summary(&self) -> String {
        match self.kind {
            MoveKind::Attack | MoveKind::Magic => match self.hits.first() {
                Some(hit) => hit.message(self.kind),
                None => format!("{} found no target", self.actor.name),
            },
            MoveKind::Cluster => format!(
                "{} attacked the entire party in one fell swoop!",
                self.actor.name
            ),
            MoveKind::Defend => format!("{} braced itself for incoming damage!", self.actor.name),
        }
    }

    /// Per-target lines, useful for cluster breakdowns
    pub fn hit_messages(&self) -> Vec<String> {
        self.hits.iter().map(|h| h.message(self.kind)).collect()
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
