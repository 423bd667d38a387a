//! Hero - A single combat unit with fixed stats and mutable battle state

use crate::defense::{brace, break_guard};
use crate::error::HeroError;
use serde::{Deserialize, Serialize};

/// Image shown for a dead hero when none is given
pub const DEFAULT_DEAD_IMAGE: &str = "skullandbones.png";

/// Creation-time stats of a hero. Every value must be at least 1 (1-100 recommended).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStats {
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub evasion: i32,
    pub magic: i32,
    pub magic_resist: i32,
    pub speed: i32,
}

impl HeroStats {
    /// Stats in roster-table order:
    /// health, attack, defense, evasion, magic, magic resist, speed
    pub const fn new(
        max_health: i32,
        attack: i32,
        defense: i32,
        evasion: i32,
        magic: i32,
        magic_resist: i32,
        speed: i32,
    ) -> Self {
        HeroStats {
            max_health,
            attack,
            defense,
            evasion,
            magic,
            magic_resist,
            speed,
        }
    }

    /// Reject any stat at or below zero
    pub fn validate(&self) -> Result<(), HeroError> {
        let checks = [
            ("max_health", self.max_health),
            ("attack", self.attack),
            ("defense", self.defense),
            ("evasion", self.evasion),
            ("speed", self.speed),
            ("magic", self.magic),
            ("magic_resist", self.magic_resist),
        ];
        for (stat, value) in checks {
            if value <= 0 {
                return Err(HeroError::InvalidStat { stat, value });
            }
        }
        Ok(())
    }
}

/// What a landed hit did to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// The hit was at least the remaining health
    Killed,
    /// Health went down; `broke_guard` is set when a defending stance was consumed
    Damaged { broke_guard: bool },
}

/// A combat unit. Stats are fixed at creation; health, the alive and defending
/// flags, and the (possibly braced) defense values change during a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    name: String,
    max_health: i32,
    current_health: i32,
    attack: i32,
    defense: i32,
    evasion: i32,
    speed: i32,
    magic: i32,
    magic_resist: i32,
    alive: bool,
    defending: bool,
    alive_image: String,
    dead_image: String,
}

impl Hero {
    /// Create a hero using the default dead image
    pub fn new(
        name: impl Into<String>,
        stats: HeroStats,
        alive_image: impl Into<String>,
    ) -> Result<Self, HeroError> {
        Self::with_dead_image(name, stats, alive_image, DEFAULT_DEAD_IMAGE)
    }

    /// Create a hero with a custom dead image
    pub fn with_dead_image(
        name: impl Into<String>,
        stats: HeroStats,
        alive_image: impl Into<String>,
        dead_image: impl Into<String>,
    ) -> Result<Self, HeroError> {
        stats.validate()?;

        Ok(Hero {
            name: name.into(),
            max_health: stats.max_health,
            current_health: stats.max_health,
            attack: stats.attack,
            defense: stats.defense,
            evasion: stats.evasion,
            speed: stats.speed,
            magic: stats.magic,
            magic_resist: stats.magic_resist,
            alive: true,
            defending: false,
            alive_image: alive_image.into(),
            dead_image: dead_image.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    /// Current defense, doubled while defending
    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn evasion(&self) -> i32 {
        self.evasion
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn magic(&self) -> i32 {
        self.magic
    }

    /// Current magic resist, doubled while defending
    pub fn magic_resist(&self) -> i32 {
        self.magic_resist
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub fn alive_image(&self) -> &str {
        &self.alive_image
    }

    pub fn dead_image(&self) -> &str {
        &self.dead_image
    }

    /// Image the presentation layer should show for the hero's current state
    pub fn current_image(&self) -> &str {
        if self.alive {
            &self.alive_image
        } else {
            &self.dead_image
        }
    }

    /// Enter the defending stance: defense and magic resist double until the next hit.
    ///
    /// Defending again while already braced keeps the stance without doubling
    /// a second time, so one hit always restores the base values.
    pub fn defend(&mut self) {
        if self.defending {
            return;
        }
        self.defense = brace(self.defense);
        self.magic_resist = brace(self.magic_resist);
        self.defending = true;
    }

    /// Apply a landed hit of `damage` points
    pub fn take_hit(&mut self, damage: i32) -> HitResult {
        if damage >= self.current_health {
            self.die();
            return HitResult::Killed;
        }

        self.current_health -= damage;
        let broke_guard = self.defending;
        if broke_guard {
            self.defense = break_guard(self.defense);
            self.magic_resist = break_guard(self.magic_resist);
            self.defending = false;
        }
        HitResult::Damaged { broke_guard }
    }

    /// Set health to 0 and mark the hero dead. Idempotent.
    pub fn die(&mut self) {
        self.current_health = 0;
        self.alive = false;
    }
}
