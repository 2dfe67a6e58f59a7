//! mech_core - Resolution engine for mecha combat rolls
//!
//! This library provides:
//! - Ability checks: roll-under d20 tests with advantage/disadvantage
//!   and critical detection
//! - Damage: die-based damage with heavy/unarmed handling and doubling
//! - Reactor: a degrading die with a terminal overheat state
//! - Recharge: a roll-gated readiness flag for special attacks
//! - Resources: bounded pools with capped heals and restores
//!
//! Every resolver is a pure state transition: it takes the current state,
//! returns the next state plus an outcome record, and leaves persistence
//! to the host through the [`store`] module.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mech_core::prelude::*;
//!
//! init_rules_default().unwrap();
//!
//! // Roll a power check at advantage
//! let outcome = resolve_check(15, RollMode::Advantage, 0);
//! println!("rolled {} vs {}: {}", outcome.modified_roll, outcome.target, outcome.success);
//!
//! // Roll the reactor and commit the result
//! let reactor = ReactorState::default();
//! let (next, event) = roll_reactor(&reactor);
//! let mut store = MemoryStore::new();
//! commit(&mut store, &[reactor_update("mecha-1", &next)]).unwrap();
//! ```

pub mod actor;
pub mod check;
pub mod config;
pub mod damage;
pub mod initiative;
pub mod prelude;
pub mod reactor;
pub mod recharge;
pub mod resource;
pub mod store;
pub mod types;

use thiserror::Error;

// Core API - what most users need
pub use actor::{Actor, ActorDice, ActorKind, Attack, AttackResult, DerivedStats};
pub use check::{resolve_check, resolve_check_with_rng};
pub use types::{
    Abilities, AbilityKey, AttackRange, BoundedResource, CheckOutcome, Critical, DamageMode,
    DamageResult, RollMode,
};

// State machines
pub use reactor::{ReactorEvent, ReactorOutcome, ReactorState};
pub use recharge::{RechargeEvent, RechargeOutcome, RechargeState};

// Configuration
pub use config::{init_rules, init_rules_default, rules};

// Persistence contract
pub use store::{commit, DocumentStore, FieldUpdate, MemoryStore, StoreError};

// Re-export commonly needed dice_core types
pub use dice_core::{DiceFormula, DieSize, FormulaError, RollOutcome};

/// Errors a resolver can surface to the host
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A damage or hit-dice expression failed to parse; nothing was rolled
    #[error("invalid dice formula '{formula}': {source}")]
    InvalidFormula {
        formula: String,
        #[source]
        source: FormulaError,
    },

    /// A recharge attack was used while its gate was closed
    #[error("'{name}' is not ready; roll its recharge first")]
    NotReady { name: String },

    /// The host document layer rejected a committed update
    #[error("failed to persist '{path}': {message}")]
    PersistenceFailed { path: String, message: String },
}
