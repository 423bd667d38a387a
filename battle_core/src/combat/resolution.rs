//! Move resolution - Turn a hero's decision into effects and apply them
//!
//! Resolution is split in two so that no hero ever writes to another one
//! directly:
//! 1. `resolve_*` reads the actor and target and produces an `Effect`
//! 2. `apply_effect` writes that effect to the target and reports the result
//!
//! `execute_move` runs both steps for a full decision and is what the battle
//! loop and the scripted policy call.

use super::result::{HitReport, MoveOutcome};
use crate::damage::{attack_damage, magic_damage};
use crate::defense::roll_dodge;
use crate::error::BattleError;
use crate::hero::{Hero, HitResult};
use crate::party::Party;
use crate::types::{Decision, HeroRef, MoveKind, Side};
use log::debug;
use rand::Rng;

/// What a resolved hit will do to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The target evaded; no state changes
    Dodged,
    /// The hit lands for this much damage
    Damage(i32),
}

/// Resolve a physical attack (or one cluster hit)
pub fn resolve_attack(attacker: &Hero, target: &Hero, cluster: bool) -> Effect {
    let mut rng = rand::thread_rng();
    resolve_attack_with_rng(attacker, target, cluster, &mut rng)
}

/// Resolve a physical attack with a provided RNG (for deterministic testing)
pub fn resolve_attack_with_rng(
    attacker: &Hero,
    target: &Hero,
    cluster: bool,
    rng: &mut impl Rng,
) -> Effect {
    if roll_dodge(target.evasion(), rng) {
        return Effect::Dodged;
    }
    Effect::Damage(attack_damage(attacker.attack(), target.defense(), cluster))
}

/// Resolve a magic attack
pub fn resolve_magic(attacker: &Hero, target: &Hero) -> Effect {
    let mut rng = rand::thread_rng();
    resolve_magic_with_rng(attacker, target, &mut rng)
}

/// Resolve a magic attack with a provided RNG (for deterministic testing)
pub fn resolve_magic_with_rng(attacker: &Hero, target: &Hero, rng: &mut impl Rng) -> Effect {
    if roll_dodge(target.evasion(), rng) {
        return Effect::Dodged;
    }
    Effect::Damage(magic_damage(attacker.magic(), target.magic_resist()))
}

/// Apply a resolved effect to its target
pub fn apply_effect(target: &mut Hero, target_ref: HeroRef, effect: Effect) -> HitReport {
    match effect {
        Effect::Dodged => HitReport::dodge(target_ref, target.current_health()),
        Effect::Damage(damage) => {
            let result = target.take_hit(damage);
            HitReport {
                target: target_ref,
                dodged: false,
                damage,
                killed: result == HitResult::Killed,
                broke_guard: matches!(result, HitResult::Damaged { broke_guard: true }),
                health_after: target.current_health(),
            }
        }
    }
}

/// Check a decision against the current state without changing anything
pub fn validate_decision(
    acting: &Party,
    actor_slot: usize,
    opposing: &Party,
    decision: &Decision,
    side: Side,
) -> Result<(), BattleError> {
    let actor = acting
        .get(actor_slot)
        .ok_or(BattleError::ActorOutOfRange(actor_slot))?;
    if !actor.is_alive() {
        return Err(BattleError::DeadActor {
            side,
            slot: actor_slot,
        });
    }

    if decision.kind.needs_target() {
        let slot = decision
            .target
            .ok_or(BattleError::MissingTarget(decision.kind.name()))?;
        let target = opposing
            .get(slot)
            .ok_or(BattleError::TargetOutOfRange(slot))?;
        if !target.is_alive() {
            return Err(BattleError::DeadTarget(slot));
        }
    }

    Ok(())
}

/// Validate and carry out one hero's decision
///
/// `side` is the side of the acting party; targets are on the other side.
/// Cluster only hits opposing heroes that are still alive.
pub fn execute_move(
    acting: &mut Party,
    actor_slot: usize,
    opposing: &mut Party,
    decision: Decision,
    side: Side,
    rng: &mut impl Rng,
) -> Result<MoveOutcome, BattleError> {
    validate_decision(acting, actor_slot, opposing, &decision, side)?;

    let actor_ref = acting.hero_ref(side, actor_slot);
    let mut outcome = MoveOutcome::new(decision.kind, actor_ref);
    let target_side = side.opponent();

    match decision.kind {
        MoveKind::Attack | MoveKind::Magic => {
            // Validated above
            let slot = decision.target.unwrap_or_default();
            let effect = {
                let actor = &acting.heroes()[actor_slot];
                let target = &opposing.heroes()[slot];
                if decision.kind == MoveKind::Magic {
                    resolve_magic_with_rng(actor, target, rng)
                } else {
                    resolve_attack_with_rng(actor, target, false, rng)
                }
            };
            let target_ref = opposing.hero_ref(target_side, slot);
            outcome
                .hits
                .push(apply_effect(opposing.hero_mut(slot), target_ref, effect));
        }
        MoveKind::Cluster => {
            for slot in opposing.living_indices() {
                let effect = resolve_attack_with_rng(
                    &acting.heroes()[actor_slot],
                    &opposing.heroes()[slot],
                    true,
                    rng,
                );
                let target_ref = opposing.hero_ref(target_side, slot);
                outcome
                    .hits
                    .push(apply_effect(opposing.hero_mut(slot), target_ref, effect));
            }
        }
        MoveKind::Defend => {
            acting.hero_mut(actor_slot).defend();
        }
    }

    debug!("{:?} {}: {}", side, decision.kind, outcome.summary());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::HeroStats;
    use rand::rngs::mock::StepRng;

    // Highest possible draw: never dodges
    fn always_hit() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    // Lowest possible draw: always dodges
    fn always_dodge() -> StepRng {
        StepRng::new(0, 0)
    }

    fn hero(name: &str, attack: i32, defense: i32, speed: i32) -> Hero {
        Hero::new(name, HeroStats::new(60, attack, defense, 20, 40, 40, speed), "x.png").unwrap()
    }

    fn party(prefix: &str) -> Party {
        Party::new(vec![
            hero(&format!("{prefix}0"), 50, 20, 10),
            hero(&format!("{prefix}1"), 50, 20, 20),
            hero(&format!("{prefix}2"), 50, 20, 30),
            hero(&format!("{prefix}3"), 50, 20, 40),
        ])
        .unwrap()
    }

    #[test]
    fn test_attack_damage_effect() {
        let attacker = hero("A", 50, 20, 10);
        let target = hero("B", 10, 20, 10);
        let effect = resolve_attack_with_rng(&attacker, &target, false, &mut always_hit());
        assert_eq!(effect, Effect::Damage(30));

        let effect = resolve_attack_with_rng(&attacker, &target, true, &mut always_hit());
        assert_eq!(effect, Effect::Damage(13));
    }

    #[test]
    fn test_dodge_effect() {
        let attacker = hero("A", 50, 20, 10);
        let target = hero("B", 10, 20, 10);
        assert_eq!(
            resolve_attack_with_rng(&attacker, &target, false, &mut always_dodge()),
            Effect::Dodged
        );
        assert_eq!(
            resolve_magic_with_rng(&attacker, &target, &mut always_dodge()),
            Effect::Dodged
        );
    }

    #[test]
    fn test_dodge_changes_nothing() {
        let mut controlled = party("c");
        let mut enemy = party("e");
        enemy.hero_mut(1).defend();

        let outcome = execute_move(
            &mut controlled,
            0,
            &mut enemy,
            Decision::attack(1),
            Side::Controlled,
            &mut always_dodge(),
        )
        .unwrap();

        assert!(outcome.all_dodged());
        assert_eq!(enemy.heroes()[1].current_health(), 60);
        assert!(enemy.heroes()[1].is_defending());
        assert_eq!(outcome.summary(), "e1 dodged the attack!");
    }

    #[test]
    fn test_magic_uses_magic_stats() {
        let mut controlled = party("c");
        let mut enemy = party("e");

        // 25 + |40 - 40| / 3
        let outcome = execute_move(
            &mut controlled,
            2,
            &mut enemy,
            Decision::magic(3),
            Side::Controlled,
            &mut always_hit(),
        )
        .unwrap();

        assert_eq!(outcome.total_damage(), 25);
        assert_eq!(enemy.heroes()[3].current_health(), 35);
        assert_eq!(outcome.summary(), "e3 took 25 magic damage!");
    }

    #[test]
    fn test_defending_target_breaks_guard() {
        let mut controlled = party("c");
        let mut enemy = party("e");
        enemy.hero_mut(0).defend();
        assert_eq!(enemy.heroes()[0].defense(), 40);

        // 20 + |50 - 40| / 3 = 23
        let outcome = execute_move(
            &mut controlled,
            0,
            &mut enemy,
            Decision::attack(0),
            Side::Controlled,
            &mut always_hit(),
        )
        .unwrap();

        let hit = &outcome.hits[0];
        assert_eq!(hit.damage, 23);
        assert!(hit.broke_guard);
        assert!(!enemy.heroes()[0].is_defending());
        assert_eq!(enemy.heroes()[0].defense(), 20);
        assert_eq!(outcome.summary(), "e0 was defending and took 23 damage!");
    }

    #[test]
    fn test_cluster_skips_dead_targets() {
        let mut controlled = party("c");
        let mut enemy = party("e");
        enemy.hero_mut(2).die();

        let outcome = execute_move(
            &mut controlled,
            3,
            &mut enemy,
            Decision::cluster(),
            Side::Controlled,
            &mut always_hit(),
        )
        .unwrap();

        assert_eq!(outcome.hits.len(), 3);
        assert!(outcome.hits.iter().all(|h| h.target.slot != 2));
        assert!(outcome.hits.iter().all(|h| h.damage == 13 && !h.killed));
        assert_eq!(enemy.heroes()[2].current_health(), 0);
        assert_eq!(enemy.heroes()[0].current_health(), 47);
    }

    #[test]
    fn test_defend_targets_self() {
        let mut controlled = party("c");
        let mut enemy = party("e");

        let outcome = execute_move(
            &mut controlled,
            1,
            &mut enemy,
            Decision::defend(),
            Side::Controlled,
            &mut always_hit(),
        )
        .unwrap();

        assert!(outcome.hits.is_empty());
        assert!(controlled.heroes()[1].is_defending());
        assert_eq!(controlled.heroes()[1].defense(), 40);
        assert_eq!(controlled.heroes()[1].magic_resist(), 80);
    }

    #[test]
    fn test_rejects_illegal_decisions() {
        let mut controlled = party("c");
        let mut enemy = party("e");
        enemy.hero_mut(1).die();
        controlled.hero_mut(0).die();
        let rng = &mut always_hit();

        let err = execute_move(&mut controlled, 1, &mut enemy, Decision::attack(1), Side::Controlled, rng)
            .unwrap_err();
        assert_eq!(err, BattleError::DeadTarget(1));

        let err = execute_move(&mut controlled, 1, &mut enemy, Decision::magic(7), Side::Controlled, rng)
            .unwrap_err();
        assert_eq!(err, BattleError::TargetOutOfRange(7));

        let missing = Decision {
            kind: MoveKind::Attack,
            target: None,
        };
        let err = execute_move(&mut controlled, 1, &mut enemy, missing, Side::Controlled, rng)
            .unwrap_err();
        assert_eq!(err, BattleError::MissingTarget("attack"));

        let err = execute_move(&mut controlled, 0, &mut enemy, Decision::defend(), Side::Controlled, rng)
            .unwrap_err();
        assert_eq!(
            err,
            BattleError::DeadActor {
                side: Side::Controlled,
                slot: 0
            }
        );

        // Nothing changed on either side
        assert!(enemy.heroes().iter().filter(|h| h.is_alive()).all(|h| h.current_health() == 60));
        assert!(!controlled.heroes()[1].is_defending());
    }
}
