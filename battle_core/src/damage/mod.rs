//! Damage system - Per-move damage formulas

mod calculation;

pub use calculation::{attack_damage, magic_damage, stat_delta};

/// Damage formula constants
pub mod constants {
    /// Flat damage of a single-target attack
    pub const ATTACK_BASE: i32 = 20;

    /// Flat damage of each cluster hit
    pub const CLUSTER_BASE: i32 = 3;

    /// Flat damage of a magic attack
    pub const MAGIC_BASE: i32 = 25;

    /// Divisor applied to the stat difference
    pub const DELTA_DIVISOR: i32 = 3;
}
