//! Defense system - Evasion and the defending stance

mod evasion;
mod stance;

pub use evasion::{dodge_chance, roll_dodge};
pub use stance::{brace, break_guard};

/// Defense calculation constants
pub mod constants {
    /// Percent dodge chance granted per point of evasion
    pub const DODGE_PERCENT_PER_EVASION: f64 = 0.25;

    /// Defense and magic resist multiplier while defending
    pub const DEFEND_MULTIPLIER: i32 = 2;
}
