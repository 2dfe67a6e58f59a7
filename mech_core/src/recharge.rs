//! Recharge gate - readiness for special attacks
//!
//! A recharge attack must roll its gate open (5+ on 1d6) before it can be
//! used; using it always closes the gate again. The gate itself carries no
//! authorization - a host may expose the manual override only in the right
//! mode (e.g. boss mode), but that check lives with the host.

use dice_core::{DiceFormula, DieSize, RollOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::rules;
use crate::damage::roll_attack_damage_with_rng;
use crate::store::FieldUpdate;
use crate::ResolveError;

/// The item-owned readiness flag; created closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RechargeState {
    pub ready: bool,
}

impl RechargeState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What a recharge roll did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum RechargeEvent {
    BecameReady,
    StillCharging,
}

/// One recharge roll: the d6 result plus its consequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RechargeOutcome {
    pub roll: u32,
    pub event: RechargeEvent,
}

/// Apply a recharge roll to the current state (pure)
///
/// Rolling while already ready is permitted; a qualifying roll simply
/// re-reports readiness.
pub fn apply_recharge_roll(state: &RechargeState, roll: u32) -> (RechargeState, RechargeOutcome) {
    let threshold = rules().recharge.ready_threshold;

    if roll >= threshold {
        (
            RechargeState { ready: true },
            RechargeOutcome {
                roll,
                event: RechargeEvent::BecameReady,
            },
        )
    } else {
        (
            *state,
            RechargeOutcome {
                roll,
                event: RechargeEvent::StillCharging,
            },
        )
    }
}

/// Roll 1d6 against the gate and apply the result
pub fn roll_recharge_with_rng<R: Rng>(
    state: &RechargeState,
    rng: &mut R,
) -> (RechargeState, RechargeOutcome) {
    let draw = DiceFormula::single(DieSize::D6).roll_with_rng(rng);
    apply_recharge_roll(state, draw.kept)
}

/// Roll the recharge die with the thread-local generator
pub fn roll_recharge(state: &RechargeState) -> (RechargeState, RechargeOutcome) {
    roll_recharge_with_rng(state, &mut rand::thread_rng())
}

/// Use the gated attack: roll its damage and close the gate
///
/// Fails with `NotReady` before any die is drawn when the gate is closed,
/// and with `InvalidFormula` (also before rolling) when the damage
/// expression does not parse; neither failure touches the state. A
/// successful use resets `ready` to false unconditionally.
pub fn use_attack_with_rng<R: Rng>(
    state: &RechargeState,
    name: &str,
    damage_expr: &str,
    rng: &mut R,
) -> Result<(RechargeState, RollOutcome), ResolveError> {
    if !state.ready {
        return Err(ResolveError::NotReady {
            name: name.to_string(),
        });
    }

    let damage = roll_attack_damage_with_rng(damage_expr, rng)?;
    Ok((RechargeState { ready: false }, damage))
}

/// Manual readiness override, bypassing the roll
///
/// No authorization is performed here; gating the override (boss mode
/// only, etc.) is the host's concern.
pub fn set_ready(ready: bool) -> RechargeState {
    RechargeState { ready }
}

/// The commit describing a recharge state for the host document layer
pub fn recharge_update(item_id: &str, state: &RechargeState) -> FieldUpdate {
    FieldUpdate::new(item_id, "system.ready", serde_json::json!(state.ready))
}
