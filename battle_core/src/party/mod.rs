//! Party - A fixed roster of four heroes ordered by ascending speed

mod scripted;

pub use scripted::{scripted_decision, MoveWeights};

use crate::error::PartyError;
use crate::hero::Hero;
use crate::types::{HeroRef, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Number of heroes in every party
pub const PARTY_SIZE: usize = 4;

/// Four heroes, stored slowest first. The order is fixed when the roster is set
/// and never re-sorted during a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    heroes: [Hero; PARTY_SIZE],
}

impl Party {
    /// Build a party from exactly four heroes
    pub fn new(heroes: Vec<Hero>) -> Result<Self, PartyError> {
        Ok(Party {
            heroes: sort_ascending_speed(heroes)?,
        })
    }

    /// Heroes in stored (ascending speed) order
    pub fn heroes(&self) -> &[Hero; PARTY_SIZE] {
        &self.heroes
    }

    /// Replace the whole roster. The new heroes are sorted like on construction.
    pub fn set_heroes(&mut self, heroes: Vec<Hero>) -> Result<(), PartyError> {
        self.heroes = sort_ascending_speed(heroes)?;
        Ok(())
    }

    pub fn get(&self, slot: usize) -> Option<&Hero> {
        self.heroes.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Hero> {
        self.heroes.get_mut(slot)
    }

    /// Mutable access to a slot that has already been validated
    pub(crate) fn hero_mut(&mut self, slot: usize) -> &mut Hero {
        &mut self.heroes[slot]
    }

    /// Event reference for the hero in `slot`
    pub(crate) fn hero_ref(&self, side: Side, slot: usize) -> HeroRef {
        HeroRef::new(side, slot, self.heroes[slot].name())
    }

    /// True once all four heroes are dead
    pub fn is_defeated(&self) -> bool {
        self.heroes.iter().all(|h| !h.is_alive())
    }

    /// Slot of a hero within this party, compared by identity rather than value
    pub fn index_of(&self, hero: &Hero) -> Option<usize> {
        self.heroes.iter().position(|h| std::ptr::eq(h, hero))
    }

    /// Slots of heroes still alive, in stored order
    pub fn living_indices(&self) -> Vec<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.heroes.iter().filter(|h| h.is_alive()).count()
    }

    /// Sum of all four speeds, dead heroes included
    pub fn total_speed(&self) -> i32 {
        self.heroes.iter().map(|h| h.speed()).sum()
    }

    /// Uniformly pick a living hero's slot, or None if everyone is dead
    pub fn random_living_index(&self, rng: &mut impl Rng) -> Option<usize> {
        self.living_indices().choose(rng).copied()
    }
}

/// Sort four heroes by ascending speed. Equal speeds keep their input order.
pub fn sort_ascending_speed(mut heroes: Vec<Hero>) -> Result<[Hero; PARTY_SIZE], PartyError> {
    if heroes.len() != PARTY_SIZE {
        return Err(PartyError::WrongSize(heroes.len()));
    }
    heroes.sort_by_key(|h| h.speed());
    <[Hero; PARTY_SIZE]>::try_from(heroes).map_err(|v| PartyError::WrongSize(v.len()))
}
