//! Initiative - a ternary value decided by a single roll-under check
//!
//! Player actors test a chosen ability once when they enter combat:
//! success puts them at +1 (act first), failure at -1 (act last).
//! Criticals carry no extra weight. Enemies never roll; they sit at 0.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorKind};
use crate::check::resolve_check_with_rng;
use crate::types::{AbilityKey, CheckOutcome, RollMode};

/// Fixed initiative for non-player-controlled combatants
pub const NPC_INITIATIVE: i32 = 0;

/// A rolled initiative value with the check that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeResult {
    pub initiative: i32,
    pub outcome: CheckOutcome,
}

/// Initiative for one combatant entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Initiative {
    Rolled(InitiativeResult),
    Fixed(i32),
}

impl Initiative {
    pub fn value(&self) -> i32 {
        match self {
            Initiative::Rolled(result) => result.initiative,
            Initiative::Fixed(value) => *value,
        }
    }
}

/// Roll an initiative test against a target value
///
/// Always Normal mode with no modifier.
pub fn roll_initiative_with_rng<R: Rng>(target: i32, rng: &mut R) -> InitiativeResult {
    let outcome = resolve_check_with_rng(target, RollMode::Normal, 0, rng);
    let initiative = if outcome.success { 1 } else { -1 };
    InitiativeResult {
        initiative,
        outcome,
    }
}

/// Roll initiative with the thread-local generator
pub fn roll_initiative(target: i32) -> InitiativeResult {
    roll_initiative_with_rng(target, &mut rand::thread_rng())
}

/// Initiative for an actor entering combat, dispatched on its kind
///
/// `key` is the ability the player chose to test; enemies ignore it and
/// take the fixed value without consuming a roll.
pub fn initiative_for_with_rng<R: Rng>(actor: &Actor, key: AbilityKey, rng: &mut R) -> Initiative {
    match actor.kind {
        ActorKind::Enemy => Initiative::Fixed(NPC_INITIATIVE),
        ActorKind::Mecha => {
            let target = actor.derived().abilities.get(key);
            Initiative::Rolled(roll_initiative_with_rng(target, rng))
        }
    }
}
