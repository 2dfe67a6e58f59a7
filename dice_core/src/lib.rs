//! dice_core - Dice primitives for roll-under tabletop resolution
//!
//! This library provides:
//! - DieSize: the ordered standard die sizes (d4 through d20)
//! - DiceFormula: parsed dice expressions like "2d20kl" or "1d6+2"
//! - RollOutcome: a full roll record with per-die discarded flags

mod die;
mod formula;
mod roll;

pub use die::DieSize;
pub use formula::{DiceFormula, Keep};
pub use roll::{DieRoll, RollOutcome};

use thiserror::Error;

/// Error parsing a dice expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("empty dice expression")]
    Empty,
    #[error("missing 'd' separator in '{0}'")]
    MissingSeparator(String),
    #[error("invalid die count '{0}'")]
    InvalidCount(String),
    #[error("die count must be at least 1")]
    ZeroCount,
    #[error("unsupported die size d{0}")]
    UnsupportedDie(u32),
    #[error("invalid die size '{0}'")]
    InvalidDieSize(String),
    #[error("invalid modifier '{0}'")]
    InvalidModifier(String),
}
