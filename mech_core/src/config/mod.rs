//! Ruleset configuration

mod rules;

pub use rules::{
    ensure_rules_initialized, init_rules, init_rules_default, rules, rules_initialized,
    AbilityRules, CheckRules, DamageRules, ReactorRules, RechargeRules, Rules,
};

use thiserror::Error;

/// Error loading ruleset configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("validation error: {0}")]
    Validation(String),
}
