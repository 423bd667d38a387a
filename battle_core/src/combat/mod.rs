//! Combat resolution - Resolve moves into effects and apply them to heroes

mod resolution;
mod result;

pub use resolution::{
    apply_effect, execute_move, resolve_attack, resolve_attack_with_rng, resolve_magic,
    resolve_magic_with_rng, validate_decision, Effect,
};
pub use result::{HitReport, MoveOutcome};
