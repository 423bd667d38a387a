//! Defending stance - Doubled defense until the next incoming hit

use super::constants::DEFEND_MULTIPLIER;

/// Raise a defense value for the defending stance
pub fn brace(value: i32) -> i32 {
    value * DEFEND_MULTIPLIER
}

/// Drop a braced defense value back down after a hit
///
/// Uses integer division, so a value that was braced once returns exactly to
/// where it started.
pub fn break_guard(value: i32) -> i32 {
    value / DEFEND_MULTIPLIER
}
