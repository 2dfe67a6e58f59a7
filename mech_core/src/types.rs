//! Core value objects shared across the resolution engine

use dice_core::DieRoll;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four tested abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKey {
    Power,
    Mobility,
    System,
    Presence,
}

impl AbilityKey {
    /// All ability keys in sheet order
    pub fn all() -> &'static [AbilityKey] {
        &[
            AbilityKey::Power,
            AbilityKey::Mobility,
            AbilityKey::System,
            AbilityKey::Presence,
        ]
    }
}

impl fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbilityKey::Power => write!(f, "Power"),
            AbilityKey::Mobility => write!(f, "Mobility"),
            AbilityKey::System => write!(f, "System"),
            AbilityKey::Presence => write!(f, "Presence"),
        }
    }
}

/// One score per ability, as stored on the sheet (unclamped)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Abilities {
    pub power: i32,
    pub mobility: i32,
    pub system: i32,
    pub presence: i32,
}

impl Abilities {
    pub fn get(&self, key: AbilityKey) -> i32 {
        match key {
            AbilityKey::Power => self.power,
            AbilityKey::Mobility => self.mobility,
            AbilityKey::System => self.system,
            AbilityKey::Presence => self.presence,
        }
    }

    pub fn set(&mut self, key: AbilityKey, value: i32) {
        match key {
            AbilityKey::Power => self.power = value,
            AbilityKey::Mobility => self.mobility = value,
            AbilityKey::System => self.system = value,
            AbilityKey::Presence => self.presence = value,
        }
    }
}

/// A bounded numeric pool such as hit points or armor points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundedResource {
    pub value: i32,
    pub max: i32,
}

impl BoundedResource {
    pub fn new(value: i32, max: i32) -> Self {
        BoundedResource { value, max }
    }

    /// Full pool
    pub fn full(max: i32) -> Self {
        BoundedResource { value: max, max }
    }

    /// Display percentage, rounded; 0 whenever max is zero or negative
    pub fn percent(&self) -> u32 {
        if self.max <= 0 {
            return 0;
        }
        let pct = (self.value as f64 / self.max as f64 * 100.0).round();
        pct.max(0.0) as u32
    }
}

/// How an ability check is rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    #[default]
    Normal,
    /// Two d20, keep the lower (lower is better under roll-under)
    Advantage,
    /// Two d20, keep the higher
    Disadvantage,
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollMode::Normal => write!(f, "Normal"),
            RollMode::Advantage => write!(f, "Advantage"),
            RollMode::Disadvantage => write!(f, "Disadvantage"),
        }
    }
}

/// Critical state of a check, decided by the raw kept die alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Critical {
    #[default]
    None,
    Success,
    Failure,
}

/// Immutable record of a resolved ability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The kept die, before the modifier
    pub raw_roll: u32,
    /// raw_roll + modifier, unclamped
    pub modified_roll: i32,
    pub target: i32,
    pub modifier: i32,
    pub mode: RollMode,
    pub success: bool,
    pub critical: Critical,
    /// Full draw, including discarded dice, for host display
    pub dice: Vec<DieRoll>,
}

/// Situational mode for a damage-die roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageMode {
    #[default]
    Normal,
    /// Flat bonus after the roll, no die change
    Heavy,
    /// Die steps down one size before rolling, floored at d4
    Unarmed,
}

/// Result of a damage-die evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    pub base_roll: u32,
    pub bonus: i32,
    pub doubled: bool,
    /// (base_roll + bonus) * (doubled ? multiplier : 1)
    pub total: i32,
}

/// Attack range bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackRange {
    #[default]
    Close,
    Near,
    Far,
    Distant,
}

impl fmt::Display for AttackRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackRange::Close => write!(f, "Close"),
            AttackRange::Near => write!(f, "Near"),
            AttackRange::Far => write!(f, "Far"),
            AttackRange::Distant => write!(f, "Distant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_zero_max() {
        assert_eq!(BoundedResource::new(0, 0).percent(), 0);
        assert_eq!(BoundedResource::new(5, 0).percent(), 0);
    }

    #[test]
    fn test_percent_rounds() {
        assert_eq!(BoundedResource::new(5, 10).percent(), 50);
        assert_eq!(BoundedResource::new(1, 3).percent(), 33);
        assert_eq!(BoundedResource::new(2, 3).percent(), 67);
    }

    #[test]
    fn test_percent_over_max() {
        // value is not hard-capped above max
        assert_eq!(BoundedResource::new(12, 10).percent(), 120);
    }

    #[test]
    fn test_abilities_get_set() {
        let mut abilities = Abilities::default();
        abilities.set(AbilityKey::Mobility, 14);
        assert_eq!(abilities.get(AbilityKey::Mobility), 14);
        assert_eq!(abilities.get(AbilityKey::Power), 0);
    }
}
