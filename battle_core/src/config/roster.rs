//! Roster configuration loading

use super::ConfigError;
use crate::battle::Battle;
use crate::hero::{Hero, HeroStats, DEFAULT_DEAD_IMAGE};
use crate::party::{MoveWeights, Party};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One hero entry in a roster file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub name: String,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
    pub evasion: i32,
    pub magic: i32,
    pub magic_resist: i32,
    pub speed: i32,
    pub alive_image: String,
    #[serde(default = "default_dead_image")]
    pub dead_image: String,
}

fn default_dead_image() -> String {
    DEFAULT_DEAD_IMAGE.to_string()
}

impl HeroConfig {
    pub fn stats(&self) -> HeroStats {
        HeroStats::new(
            self.max_health,
            self.attack,
            self.defense,
            self.evasion,
            self.magic,
            self.magic_resist,
            self.speed,
        )
    }

    /// Create the hero this entry describes
    pub fn build(&self) -> Result<Hero, ConfigError> {
        let hero = Hero::with_dead_image(
            self.name.clone(),
            self.stats(),
            self.alive_image.clone(),
            self.dead_image.clone(),
        )?;
        Ok(hero)
    }
}

/// Both parties of a battle plus the enemy's scripted-policy weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub controlled: Vec<HeroConfig>,
    pub enemy: Vec<HeroConfig>,
    #[serde(default)]
    pub ai: MoveWeights,
}

impl RosterConfig {
    /// Check weights and build both parties
    pub fn build_parties(&self) -> Result<(Party, Party), ConfigError> {
        self.ai.validate().map_err(ConfigError::ValidationError)?;
        let controlled = build_party(&self.controlled)?;
        let enemy = build_party(&self.enemy)?;
        Ok((controlled, enemy))
    }

    /// Build a ready-to-start battle from this roster
    pub fn build_battle(&self) -> Result<Battle, ConfigError> {
        let (controlled, enemy) = self.build_parties()?;
        Ok(Battle::new(controlled, enemy).with_weights(self.ai))
    }
}

fn build_party(entries: &[HeroConfig]) -> Result<Party, ConfigError> {
    let heroes = entries
        .iter()
        .map(HeroConfig::build)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Party::new(heroes)?)
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<RosterConfig, ConfigError> {
    super::load_toml(path)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<RosterConfig, ConfigError> {
    super::parse_toml(content)
}

/// The built-in adventurers vs undead roster
pub fn default_roster() -> Result<RosterConfig, ConfigError> {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml)
}
