//! Prelude module for convenient imports
//!
//! ```rust
//! use mech_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    Abilities, AbilityKey, AttackRange, BoundedResource, CheckOutcome, Critical, DamageMode,
    DamageResult, RollMode,
};

// Actors
pub use crate::actor::{
    resolve_attack_with_rng, roll_enemy_hit_points_with_rng, Actor, ActorDice, ActorKind, Attack,
    AttackResult, DerivedStats,
};

// Checks and initiative
pub use crate::check::{resolve_check, resolve_check_with_rng};
pub use crate::initiative::{roll_initiative, Initiative, InitiativeResult, NPC_INITIATIVE};

// Damage
pub use crate::damage::{compute_damage, compute_damage_with_rng, effective_damage_die};

// Reactor and recharge state machines
pub use crate::reactor::{
    roll_reactor, roll_reactor_with_rng, reactor_update, ReactorEvent, ReactorOutcome, ReactorState,
};
pub use crate::recharge::{
    recharge_update, roll_recharge, roll_recharge_with_rng, RechargeEvent, RechargeOutcome,
    RechargeState,
};

// Resources
pub use crate::resource::{clamp_ability, heal, heal_roll, restore_to_max, HealResult, HealRoll};

// Config
pub use crate::config::{init_rules, init_rules_default, rules};

// Persistence contract
pub use crate::store::{commit, DocumentStore, FieldUpdate, MemoryStore, StoreError};

// Errors
pub use crate::ResolveError;

// Re-exports from dice_core
pub use dice_core::{DiceFormula, DieSize, FormulaError, Keep, RollOutcome};
