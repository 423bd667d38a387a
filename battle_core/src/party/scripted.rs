//! Scripted policy - How a non-player party picks its moves each round
//!
//! Each living member draws a move category from cumulative thresholds
//! (default attack 0-35, magic 35-70, cluster 70-95, defend 95-100), then
//! single-target moves pick a random living opponent.

use super::Party;
use crate::combat::{execute_move, MoveOutcome};
use crate::types::{Decision, MoveKind, Side};
use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Percent weights of each move category for the scripted policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveWeights {
    #[serde(default = "default_attack_weight")]
    pub attack: f64,
    #[serde(default = "default_magic_weight")]
    pub magic: f64,
    #[serde(default = "default_cluster_weight")]
    pub cluster: f64,
    #[serde(default = "default_defend_weight")]
    pub defend: f64,
}

impl Default for MoveWeights {
    fn default() -> Self {
        MoveWeights {
            attack: 35.0,
            magic: 35.0,
            cluster: 25.0,
            defend: 5.0,
        }
    }
}

fn default_attack_weight() -> f64 {
    35.0
}
fn default_magic_weight() -> f64 {
    35.0
}
fn default_cluster_weight() -> f64 {
    25.0
}
fn default_defend_weight() -> f64 {
    5.0
}

impl MoveWeights {
    /// Weights must be non-negative and add up to 100
    pub fn validate(&self) -> Result<(), String> {
        let weights = [self.attack, self.magic, self.cluster, self.defend];
        if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(format!("move weights must be non-negative, got {:?}", weights));
        }
        let total: f64 = weights.iter().sum();
        if (total - 100.0).abs() > 1e-6 {
            return Err(format!("move weights must sum to 100, got {}", total));
        }
        Ok(())
    }

    /// Map a draw in [0, 100) to a move category.
    ///
    /// Each category owns a half-open band, so a zero weight is never picked.
    pub fn pick(&self, draw: f64) -> MoveKind {
        let attack_max = self.attack;
        let magic_max = attack_max + self.magic;
        let cluster_max = magic_max + self.cluster;

        if draw < attack_max {
            MoveKind::Attack
        } else if draw < magic_max {
            MoveKind::Magic
        } else if draw < cluster_max {
            MoveKind::Cluster
        } else {
            MoveKind::Defend
        }
    }

    /// Draw a move category
    pub fn roll(&self, rng: &mut impl Rng) -> MoveKind {
        self.pick(rng.gen::<f64>() * 100.0)
    }
}

/// Pick one scripted decision against `opposing`
///
/// Returns None when the opposing party has nobody left to hit and the drawn
/// move needs an opponent.
pub fn scripted_decision(
    weights: &MoveWeights,
    opposing: &Party,
    rng: &mut impl Rng,
) -> Option<Decision> {
    let kind = weights.roll(rng);
    match kind {
        MoveKind::Defend => Some(Decision::defend()),
        MoveKind::Cluster => (!opposing.is_defeated()).then(Decision::cluster),
        MoveKind::Attack | MoveKind::Magic => {
            let target = opposing.random_living_index(rng)?;
            Some(Decision {
                kind,
                target: Some(target),
            })
        }
    }
}

impl Party {
    /// One scripted pass: every living member acts once against `opposing`.
    ///
    /// The pass stops as soon as the opposing party is defeated.
    pub fn scripted_turn(
        &mut self,
        side: Side,
        opposing: &mut Party,
        weights: &MoveWeights,
        rng: &mut impl Rng,
    ) -> Vec<MoveOutcome> {
        let mut outcomes = Vec::new();

        for slot in 0..self.heroes.len() {
            if opposing.is_defeated() {
                break;
            }
            if !self.heroes[slot].is_alive() {
                continue;
            }

            let Some(decision) = scripted_decision(weights, opposing, rng) else {
                continue;
            };

            match execute_move(self, slot, opposing, decision, side, rng) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => warn!("scripted move for slot {} rejected: {}", slot, e),
            }
        }

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::{Hero, HeroStats};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn party(prefix: &str) -> Party {
        let heroes = (0..4)
            .map(|i| {
                Hero::new(
                    format!("{prefix}{i}"),
                    HeroStats::new(80, 50, 30, 10, 50, 30, 10 + i),
                    "x.png",
                )
                .unwrap()
            })
            .collect();
        Party::new(heroes).unwrap()
    }

    #[test]
    fn test_default_weights_thresholds() {
        let weights = MoveWeights::default();
        assert!(weights.validate().is_ok());

        assert_eq!(weights.pick(0.0), MoveKind::Attack);
        assert_eq!(weights.pick(34.9), MoveKind::Attack);
        assert_eq!(weights.pick(35.0), MoveKind::Magic);
        assert_eq!(weights.pick(69.9), MoveKind::Magic);
        assert_eq!(weights.pick(70.0), MoveKind::Cluster);
        assert_eq!(weights.pick(94.9), MoveKind::Cluster);
        assert_eq!(weights.pick(95.0), MoveKind::Defend);
        assert_eq!(weights.pick(99.9), MoveKind::Defend);
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let weights = MoveWeights {
            attack: 0.0,
            magic: 50.0,
            cluster: 0.0,
            defend: 50.0,
        };
        assert_eq!(weights.pick(0.0), MoveKind::Magic);
        assert_eq!(weights.pick(49.9), MoveKind::Magic);
        assert_eq!(weights.pick(50.0), MoveKind::Defend);

        let all_cluster = MoveWeights {
            attack: 0.0,
            magic: 0.0,
            cluster: 100.0,
            defend: 0.0,
        };
        for draw in [0.0, 50.0, 99.999] {
            assert_eq!(all_cluster.pick(draw), MoveKind::Cluster);
        }
    }

    #[test]
    fn test_weights_validation() {
        let bad_sum = MoveWeights {
            attack: 50.0,
            ..Default::default()
        };
        assert!(bad_sum.validate().is_err());

        let negative = MoveWeights {
            attack: -5.0,
            magic: 75.0,
            cluster: 25.0,
            defend: 5.0,
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_category_distribution() {
        let weights = MoveWeights::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 4];
        let trials = 20_000;
        for _ in 0..trials {
            let idx = match weights.roll(&mut rng) {
                MoveKind::Attack => 0,
                MoveKind::Magic => 1,
                MoveKind::Cluster => 2,
                MoveKind::Defend => 3,
            };
            counts[idx] += 1;
        }
        let pct = |n: usize| n as f64 / trials as f64 * 100.0;
        assert!((pct(counts[0]) - 35.0).abs() < 1.5);
        assert!((pct(counts[1]) - 35.0).abs() < 1.5);
        assert!((pct(counts[2]) - 25.0).abs() < 1.5);
        assert!((pct(counts[3]) - 5.0).abs() < 1.0);
    }

    #[test]
    fn test_decision_targets_living_only() {
        let mut opposing = party("e");
        opposing.get_mut(0).unwrap().die();
        opposing.get_mut(1).unwrap().die();
        opposing.get_mut(3).unwrap().die();

        let weights = MoveWeights {
            attack: 100.0,
            magic: 0.0,
            cluster: 0.0,
            defend: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let decision = scripted_decision(&weights, &opposing, &mut rng).unwrap();
            assert_eq!(decision, Decision::attack(2));
        }
    }

    #[test]
    fn test_no_living_opponents_yields_no_attack() {
        let mut opposing = party("e");
        for slot in 0..4 {
            opposing.get_mut(slot).unwrap().die();
        }
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            match scripted_decision(&MoveWeights::default(), &opposing, &mut rng) {
                None => {}
                Some(d) => assert_eq!(d.kind, MoveKind::Defend),
            }
        }
    }

    #[test]
    fn test_scripted_turn_skips_dead_members() {
        let mut acting = party("a");
        let mut opposing = party("e");
        acting.get_mut(1).unwrap().die();
        acting.get_mut(3).unwrap().die();

        // Highest draw: every member defends
        let mut rng = StepRng::new(u64::MAX, 0);
        let outcomes = acting.scripted_turn(Side::Enemy, &mut opposing, &MoveWeights::default(), &mut rng);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.kind == MoveKind::Defend));
        assert_eq!(outcomes[0].actor.slot, 0);
        assert_eq!(outcomes[1].actor.slot, 2);
        assert!(acting.heroes()[0].is_defending());
        assert!(!acting.heroes()[1].is_defending());
    }

    #[test]
    fn test_scripted_turn_stops_when_opponents_fall() {
        let mut acting = party("a");
        let mut opposing = party("e");
        for slot in 1..4 {
            opposing.get_mut(slot).unwrap().die();
        }
        opposing.get_mut(0).unwrap().take_hit(79);

        let weights = MoveWeights {
            attack: 0.0,
            magic: 0.0,
            cluster: 100.0,
            defend: 0.0,
        };
        let mut rng = StepRng::new(u64::MAX, 0);
        let outcomes = acting.scripted_turn(Side::Enemy, &mut opposing, &weights, &mut rng);

        // First cluster finishes the last opponent; nobody else acts
        assert!(opposing.is_defeated());
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].hits.len(), 1);
        assert!(outcomes[0].hits[0].killed);
    }
}
