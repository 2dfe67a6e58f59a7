//! Tunable ruleset constants
//!
//! Every hard number in the resolvers (crit faces, clamp bounds, heavy
//! bonus, degrade and recharge thresholds) reads from here, so variant
//! rulesets can be loaded from a TOML file without touching the engine.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global ruleset instance
static RULES: OnceLock<Rules> = OnceLock::new();

/// Initialize the global ruleset from a TOML file
///
/// Must be called once at startup before any resolution.
/// Returns error if already initialized or if loading fails.
pub fn init_rules(path: &Path) -> Result<(), ConfigError> {
    let rules = Rules::load_from_path(path)?;
    RULES
        .set(rules)
        .map_err(|_| ConfigError::Validation("Rules already initialized".to_string()))
}

/// Initialize the global ruleset with default values
pub fn init_rules_default() -> Result<(), ConfigError> {
    RULES
        .set(Rules::default())
        .map_err(|_| ConfigError::Validation("Rules already initialized".to_string()))
}

/// Get a reference to the global ruleset
///
/// Panics if not initialized via `init_rules()` or `init_rules_default()`.
pub fn rules() -> &'static Rules {
    RULES
        .get()
        .expect("Rules not initialized - call init_rules() or init_rules_default() first")
}

/// Check whether the ruleset has been initialized
pub fn rules_initialized() -> bool {
    RULES.get().is_some()
}

/// Ensure the ruleset is initialized with defaults (idempotent, useful for tests)
pub fn ensure_rules_initialized() {
    RULES.get_or_init(Rules::default);
}

/// Tunable ruleset constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub check: CheckRules,
    #[serde(default)]
    pub abilities: AbilityRules,
    #[serde(default)]
    pub damage: DamageRules,
    #[serde(default)]
    pub reactor: ReactorRules,
    #[serde(default)]
    pub recharge: RechargeRules,
}

impl Rules {
    /// Load the ruleset from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let rules: Rules = toml::from_str(&content)?;
        Ok(rules)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRules {
    /// Raw kept die that forces a critical success
    #[serde(default = "default_crit_success_on")]
    pub crit_success_on: u32,
    /// Raw kept die that forces a critical failure
    #[serde(default = "default_crit_failure_on")]
    pub crit_failure_on: u32,
}

impl Default for CheckRules {
    fn default() -> Self {
        CheckRules {
            crit_success_on: 1,
            crit_failure_on: 20,
        }
    }
}

fn default_crit_success_on() -> u32 {
    1
}
fn default_crit_failure_on() -> u32 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityRules {
    /// Lower clamp bound for derived ability scores
    #[serde(default = "default_ability_min")]
    pub min: i32,
    /// Upper clamp bound for derived ability scores
    #[serde(default = "default_ability_max")]
    pub max: i32,
}

impl Default for AbilityRules {
    fn default() -> Self {
        AbilityRules { min: 1, max: 20 }
    }
}

fn default_ability_min() -> i32 {
    1
}
fn default_ability_max() -> i32 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageRules {
    /// Flat bonus added to heavy-weapon damage rolls
    #[serde(default = "default_heavy_bonus")]
    pub heavy_bonus: i32,
    /// Multiplier applied to the post-bonus total of double-damage rolls
    #[serde(default = "default_double_multiplier")]
    pub double_multiplier: i32,
}

impl Default for DamageRules {
    fn default() -> Self {
        DamageRules {
            heavy_bonus: 2,
            double_multiplier: 2,
        }
    }
}

fn default_heavy_bonus() -> i32 {
    2
}
fn default_double_multiplier() -> i32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorRules {
    /// A reactor roll at or below this degrades the die
    #[serde(default = "default_degrade_threshold")]
    pub degrade_threshold: u32,
}

impl Default for ReactorRules {
    fn default() -> Self {
        ReactorRules {
            degrade_threshold: 2,
        }
    }
}

fn default_degrade_threshold() -> u32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RechargeRules {
    /// A recharge roll (1d6) at or above this readies the attack
    #[serde(default = "default_ready_threshold")]
    pub ready_threshold: u32,
}

impl Default for RechargeRules {
    fn default() -> Self {
        RechargeRules { ready_threshold: 5 }
    }
}

fn default_ready_threshold() -> u32 {
    5
}
