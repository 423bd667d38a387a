//! Damage calculation - Turning an offense/defense pair into hit damage
//!
//! Both physical and magic damage use the same shape:
//!
//! `damage = base + |offense - defense| / 3`
//!
//! The difference is taken as a magnitude, so a defender whose defense exceeds
//! the attacker's offense takes the same bonus as one who is outclassed by the
//! same margin.

use super::constants::{ATTACK_BASE, CLUSTER_BASE, DELTA_DIVISOR, MAGIC_BASE};

/// Floored magnitude of the stat difference divided by the delta divisor
pub fn stat_delta(offense: i32, defense: i32) -> i32 {
    (offense - defense).abs() / DELTA_DIVISOR
}

/// Damage of an attack (or one cluster hit) against a defense value
pub fn attack_damage(attack: i32, defense: i32, cluster: bool) -> i32 {
    let base = if cluster { CLUSTER_BASE } else { ATTACK_BASE };
    base + stat_delta(attack, defense)
}

/// Damage of a magic attack against a magic resist value
pub fn magic_damage(magic: i32, magic_resist: i32) -> i32 {
    MAGIC_BASE + stat_delta(magic, magic_resist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_damage() {
        // 20 + |50 - 20| / 3 = 20 + 10
        assert_eq!(attack_damage(50, 20, false), 30);
    }

    #[test]
    fn test_cluster_damage() {
        // 3 + |50 - 20| / 3 = 3 + 10
        assert_eq!(attack_damage(50, 20, true), 13);
    }

    #[test]
    fn test_delta_is_symmetric() {
        assert_eq!(attack_damage(20, 50, false), attack_damage(50, 20, false));
        assert_eq!(magic_damage(10, 70), magic_damage(70, 10));
    }

    #[test]
    fn test_delta_floors() {
        // |45 - 85| = 40, 40 / 3 = 13
        assert_eq!(stat_delta(45, 85), 13);
        assert_eq!(attack_damage(45, 85, false), 33);
    }

    #[test]
    fn test_magic_damage() {
        // 25 + |90 - 60| / 3 = 25 + 10
        assert_eq!(magic_damage(90, 60), 35);
        // Equal stats only deal the base
        assert_eq!(magic_damage(60, 60), 25);
    }
}
