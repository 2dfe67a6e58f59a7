//! Ability checks - roll-under resolution with advantage and criticals
//!
//! A check draws a d20 and succeeds when the modified roll is strictly
//! below the target. Advantage draws two and keeps the lower die,
//! disadvantage keeps the higher (lower is better under roll-under).
//! Criticals are decided by the raw kept die alone: a natural 1 always
//! succeeds, a natural 20 always fails, regardless of the modifier.

use dice_core::{DiceFormula, DieSize, Keep, RollOutcome};
use rand::Rng;

use crate::config::rules;
use crate::types::{CheckOutcome, Critical, RollMode};

/// The d20 formula for a given roll mode
pub fn check_formula(mode: RollMode) -> DiceFormula {
    match mode {
        RollMode::Normal => DiceFormula::single(DieSize::D20),
        RollMode::Advantage => DiceFormula::new(2, DieSize::D20).with_keep(Keep::Lowest),
        RollMode::Disadvantage => DiceFormula::new(2, DieSize::D20).with_keep(Keep::Highest),
    }
}

/// Resolve a check from an already-drawn roll (pure)
///
/// The modifier is applied to the roll, never to the target; callers are
/// expected to have clamped the target beforehand (see
/// [`crate::resource::clamp_ability`]) - out-of-range targets compute
/// normally here.
pub fn resolve_check_roll(
    draw: &RollOutcome,
    target: i32,
    mode: RollMode,
    modifier: i32,
) -> CheckOutcome {
    let check = &rules().check;
    let raw_roll = draw.kept_die();
    let modified_roll = raw_roll as i32 + modifier;

    let critical = if raw_roll == check.crit_success_on {
        Critical::Success
    } else if raw_roll == check.crit_failure_on {
        Critical::Failure
    } else {
        Critical::None
    };

    // Roll strictly under the target succeeds; equal or higher fails.
    // Criticals override in success-then-failure order; the two cannot
    // both fire from one raw value, the order is kept defensively.
    let mut success = modified_roll < target;
    if critical == Critical::Success {
        success = true;
    }
    if critical == Critical::Failure {
        success = false;
    }

    CheckOutcome {
        raw_roll,
        modified_roll,
        target,
        modifier,
        mode,
        success,
        critical,
        dice: draw.dice.clone(),
    }
}

/// Draw the mode's dice and resolve the check
pub fn resolve_check_with_rng<R: Rng>(
    target: i32,
    mode: RollMode,
    modifier: i32,
    rng: &mut R,
) -> CheckOutcome {
    let draw = check_formula(mode).roll_with_rng(rng);
    resolve_check_roll(&draw, target, mode, modifier)
}

/// Resolve a check with the thread-local generator
pub fn resolve_check(target: i32, mode: RollMode, modifier: i32) -> CheckOutcome {
    resolve_check_with_rng(target, mode, modifier, &mut rand::thread_rng())
}
