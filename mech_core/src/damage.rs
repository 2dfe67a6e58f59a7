//! Damage rolls - the damage-die slot with situational modes
//!
//! Heavy weapons add a flat bonus after the roll; unarmed strikes step the
//! die down one size before rolling (floored at d4). Double damage
//! multiplies the post-bonus total. Heavy and unarmed are exclusive modes;
//! doubling is orthogonal to both.

use dice_core::{DiceFormula, DieSize, RollOutcome};
use rand::Rng;

use crate::config::rules;
use crate::types::{DamageMode, DamageResult};
use crate::ResolveError;

/// The die actually rolled for a mode (unarmed steps down, floor d4)
pub fn effective_damage_die(die: DieSize, mode: DamageMode) -> DieSize {
    match mode {
        DamageMode::Unarmed => die.step_down().unwrap_or(die),
        DamageMode::Normal | DamageMode::Heavy => die,
    }
}

/// Fold mode bonus and doubling over an already-rolled base (pure)
///
/// total = (base_roll + bonus) * (doubled ? multiplier : 1); the bonus is
/// added before doubling.
pub fn apply_damage_roll(base_roll: u32, mode: DamageMode, doubled: bool) -> DamageResult {
    let damage = &rules().damage;
    let bonus = match mode {
        DamageMode::Heavy => damage.heavy_bonus,
        DamageMode::Normal | DamageMode::Unarmed => 0,
    };
    let multiplier = if doubled { damage.double_multiplier } else { 1 };

    DamageResult {
        base_roll,
        bonus,
        doubled,
        total: (base_roll as i32 + bonus) * multiplier,
    }
}

/// Roll the damage die under the given mode
pub fn compute_damage_with_rng<R: Rng>(
    die: DieSize,
    mode: DamageMode,
    doubled: bool,
    rng: &mut R,
) -> DamageResult {
    let rolled = effective_damage_die(die, mode);
    let draw = DiceFormula::single(rolled).roll_with_rng(rng);
    apply_damage_roll(draw.kept, mode, doubled)
}

/// Roll the damage die with the thread-local generator
pub fn compute_damage(die: DieSize, mode: DamageMode, doubled: bool) -> DamageResult {
    compute_damage_with_rng(die, mode, doubled, &mut rand::thread_rng())
}

/// Roll an attack's damage expression (enemy and recharge attacks)
///
/// Fails with `InvalidFormula` before any die is drawn; no partial
/// evaluation is attempted.
pub fn roll_attack_damage_with_rng<R: Rng>(
    expr: &str,
    rng: &mut R,
) -> Result<RollOutcome, ResolveError> {
    let formula = DiceFormula::parse(expr).map_err(|source| ResolveError::InvalidFormula {
        formula: expr.to_string(),
        source,
    })?;
    Ok(formula.roll_with_rng(rng))
}
