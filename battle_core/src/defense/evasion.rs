//! Evasion - Chance for a target to dodge an incoming attack or spell
//!
//! Every single-target hit (and each hit of a cluster) rolls once against the
//! target's evasion before any damage is computed.
//!
//! Formula: dodge_chance = evasion * DODGE_PERCENT_PER_EVASION (percent)
//!
//! Examples:
//! - 25 evasion: 6.25% dodge
//! - 60 evasion: 15% dodge
//! - 100 evasion: 25% dodge

use super::constants::DODGE_PERCENT_PER_EVASION;
use rand::Rng;

/// Dodge chance in percent for a given evasion value
pub fn dodge_chance(evasion: i32) -> f64 {
    if evasion <= 0 {
        return 0.0;
    }
    evasion as f64 * DODGE_PERCENT_PER_EVASION
}

/// Roll a dodge check: draw uniformly in [0, 100) and dodge if the draw is at
/// or below the threshold
pub fn roll_dodge(evasion: i32, rng: &mut impl Rng) -> bool {
    if evasion <= 0 {
        return false;
    }
    let draw = rng.gen::<f64>() * 100.0;
    draw <= dodge_chance(evasion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dodge_chance_scaling() {
        assert!((dodge_chance(25) - 6.25).abs() < f64::EPSILON);
        assert!((dodge_chance(60) - 15.0).abs() < f64::EPSILON);
        assert!((dodge_chance(100) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_evasion_never_dodges() {
        assert!((dodge_chance(0) - 0.0).abs() < f64::EPSILON);
        let mut rng = StepRng::new(0, 0);
        assert!(!roll_dodge(0, &mut rng));
    }

    #[test]
    fn test_lowest_draw_always_dodges() {
        let mut rng = StepRng::new(0, 0);
        assert!(roll_dodge(1, &mut rng));
    }

    #[test]
    fn test_highest_draw_never_dodges() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert!(!roll_dodge(100, &mut rng));
    }

    #[test]
    fn test_dodge_rate_matches_threshold() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 20_000;
        let dodges = (0..trials).filter(|_| roll_dodge(100, &mut rng)).count();
        let rate = dodges as f64 / trials as f64 * 100.0;

        // 100 evasion = 25% threshold
        assert!((rate - 25.0).abs() < 1.5, "observed dodge rate {}", rate);
    }
}
