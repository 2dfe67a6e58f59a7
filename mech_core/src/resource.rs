//! Bounded resources - ability clamping, restores, and capped heals
//!
//! Clamping happens at derive time and never rewrites stored data, so
//! repeated derivation is idempotent. Heals are capped at max and report
//! the amount actually applied; restores report a no-op when already full.

use dice_core::{DiceFormula, DieSize};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::rules;
use crate::store::FieldUpdate;
use crate::types::BoundedResource;

/// Clamp a raw ability score into the playable range (default [1, 20])
pub fn clamp_ability(raw: i32) -> i32 {
    let bounds = &rules().abilities;
    raw.clamp(bounds.min, bounds.max)
}

/// What an explicit restore-to-max did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum RestoreOutcome {
    Restored { from: i32, to: i32 },
    AlreadyAtMax,
}

/// Set a resource back to its maximum
pub fn restore_to_max(resource: &BoundedResource) -> (BoundedResource, RestoreOutcome) {
    if resource.value >= resource.max {
        return (*resource, RestoreOutcome::AlreadyAtMax);
    }
    (
        BoundedResource::full(resource.max),
        RestoreOutcome::Restored {
            from: resource.value,
            to: resource.max,
        },
    )
}

/// A heal application, with the amount that actually landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealResult {
    pub requested: u32,
    /// min(requested, max - value); may be less than requested
    pub applied: i32,
    pub from: i32,
    pub to: i32,
}

/// Add a heal amount, capped so the value never exceeds max
pub fn heal(resource: &BoundedResource, amount: u32) -> (BoundedResource, HealResult) {
    let headroom = (resource.max - resource.value).max(0);
    let applied = (amount as i32).min(headroom);
    let to = resource.value + applied;

    (
        BoundedResource::new(to, resource.max),
        HealResult {
            requested: amount,
            applied,
            from: resource.value,
            to,
        },
    )
}

/// A hit-die heal: the roll plus the capped application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealRoll {
    pub roll: u32,
    pub result: HealResult,
}

/// Roll the hit die and heal by the result
pub fn heal_roll_with_rng<R: Rng>(
    resource: &BoundedResource,
    hit_die: DieSize,
    rng: &mut R,
) -> (BoundedResource, HealRoll) {
    let draw = DiceFormula::single(hit_die).roll_with_rng(rng);
    let (next, result) = heal(resource, draw.kept);
    (next, HealRoll {
        roll: draw.kept,
        result,
    })
}

/// Roll a hit-die heal with the thread-local generator
pub fn heal_roll(resource: &BoundedResource, hit_die: DieSize) -> (BoundedResource, HealRoll) {
    heal_roll_with_rng(resource, hit_die, &mut rand::thread_rng())
}

/// The commit describing a resource value for the host document layer
///
/// `path` is the host-side field, e.g. `system.hitPoints.value`.
pub fn resource_update(entity_id: &str, path: &str, resource: &BoundedResource) -> FieldUpdate {
    FieldUpdate::new(entity_id, path, serde_json::json!(resource.value))
}
