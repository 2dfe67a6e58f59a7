//! Actors and attacks - the aggregates the host persists
//!
//! The engine never owns storage: everything here computes next-state
//! values and outcome records, and the host commits them (see
//! [`crate::store`]).

use dice_core::{DieSize, RollOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::check::resolve_check_with_rng;
use crate::damage::roll_attack_damage_with_rng;
use crate::recharge::RechargeState;
use crate::resource::clamp_ability;
use crate::types::{
    Abilities, AbilityKey, AttackRange, BoundedResource, CheckOutcome, RollMode,
};
use crate::ResolveError;

/// Fallback damage expression for attacks with none configured
const DEFAULT_ATTACK_DAMAGE: &str = "1d6";
/// Fallback hit-dice expression for enemies with none configured
const DEFAULT_HIT_DICE: &str = "1d8";

/// The two actor kinds; behavior dispatches on this tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Mecha,
    Enemy,
}

/// The three die slots on a mecha sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorDice {
    pub hit: DieSize,
    pub damage: DieSize,
    pub reactor: DieSize,
}

impl Default for ActorDice {
    fn default() -> Self {
        ActorDice {
            hit: DieSize::D6,
            damage: DieSize::D6,
            reactor: DieSize::D20,
        }
    }
}

/// An actor as the host stores it (raw, unclamped)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub kind: ActorKind,
    pub abilities: Abilities,
    pub hit_points: BoundedResource,
    pub armor_points: BoundedResource,
    pub dice: ActorDice,
    /// Enemy-only: unlocks the host's boss attacks and overrides
    #[serde(default)]
    pub boss: bool,
    /// Enemy-only: hit-dice expression rolled at spawn
    #[serde(default)]
    pub hit_dice: Option<String>,
}

/// Read-time derived state; never written back to the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub abilities: Abilities,
    pub hit_points_pct: u32,
    pub armor_points_pct: u32,
}

impl Actor {
    /// Recompute derived state from the stored values
    ///
    /// Ability scores clamp into the playable range on every derivation
    /// (idempotent); enemies keep their raw scores, matching how their
    /// sheets bypass the clamp.
    pub fn derived(&self) -> DerivedStats {
        let abilities = match self.kind {
            ActorKind::Enemy => self.abilities,
            ActorKind::Mecha => {
                let mut clamped = self.abilities;
                for key in AbilityKey::all() {
                    clamped.set(*key, clamp_ability(self.abilities.get(*key)));
                }
                clamped
            }
        };

        DerivedStats {
            abilities,
            hit_points_pct: self.hit_points.percent(),
            armor_points_pct: self.armor_points.percent(),
        }
    }

    /// Roll an ability check against the derived (clamped) score
    pub fn stat_check_with_rng<R: Rng>(
        &self,
        key: AbilityKey,
        mode: RollMode,
        modifier: i32,
        rng: &mut R,
    ) -> CheckOutcome {
        let target = self.derived().abilities.get(key);
        resolve_check_with_rng(target, mode, modifier, rng)
    }
}

/// An attack-bearing item owned by an enemy actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Damage expression, e.g. "2d6+1"; empty falls back to 1d6
    pub damage: String,
    /// Which ability the defender tests against this attack
    pub defend: AbilityKey,
    pub range: AttackRange,
    pub targets: u32,
    /// Present on recharge attacks only; gates use behind a roll
    #[serde(default)]
    pub recharge: Option<RechargeState>,
}

/// A resolved attack, ready for the host to present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub damage: RollOutcome,
    pub defend: AbilityKey,
    pub range: AttackRange,
    pub targets: u32,
}

/// Resolve an attack roll
///
/// Recharge attacks fail with `NotReady` while the gate is closed (before
/// any die is drawn) and come back un-readied after a successful use. The
/// returned state is `None` for plain attacks, `Some(gate)` for recharge
/// attacks; the caller commits it.
pub fn resolve_attack_with_rng<R: Rng>(
    attack: &Attack,
    rng: &mut R,
) -> Result<(Option<RechargeState>, AttackResult), ResolveError> {
    if let Some(gate) = &attack.recharge {
        if !gate.ready {
            return Err(ResolveError::NotReady {
                name: attack.name.clone(),
            });
        }
    }

    let expr = if attack.damage.is_empty() {
        DEFAULT_ATTACK_DAMAGE
    } else {
        attack.damage.as_str()
    };
    let damage = roll_attack_damage_with_rng(expr, rng)?;

    let next_gate = attack.recharge.map(|_| RechargeState { ready: false });

    Ok((
        next_gate,
        AttackResult {
            damage,
            defend: attack.defend,
            range: attack.range,
            targets: attack.targets,
        },
    ))
}

/// Roll an enemy's spawn hit points from its hit-dice expression
///
/// Returns the rolled pool (value = max = total) plus the raw total for
/// display.
pub fn roll_enemy_hit_points_with_rng<R: Rng>(
    hit_dice: Option<&str>,
    rng: &mut R,
) -> Result<(BoundedResource, i32), ResolveError> {
    let expr = match hit_dice {
        Some(expr) if !expr.is_empty() => expr,
        _ => DEFAULT_HIT_DICE,
    };
    let outcome = roll_attack_damage_with_rng(expr, rng)?;
    Ok((BoundedResource::full(outcome.total), outcome.total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ensure_rules_initialized;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mecha() -> Actor {
        Actor {
            id: "m1".to_string(),
            name: "Vanguard".to_string(),
            kind: ActorKind::Mecha,
            abilities: Abilities {
                power: 25,
                mobility: 0,
                system: 12,
                presence: -2,
            },
            hit_points: BoundedResource::new(5, 10),
            armor_points: BoundedResource::new(0, 0),
            dice: ActorDice::default(),
            boss: false,
            hit_dice: None,
        }
    }

    fn plain_attack() -> Attack {
        Attack {
            name: "Claw Swipe".to_string(),
            damage: "1d6".to_string(),
            defend: AbilityKey::Mobility,
            range: AttackRange::Close,
            targets: 1,
            recharge: None,
        }
    }

    #[test]
    fn test_derived_clamps_mecha_abilities() {
        ensure_rules_initialized();
        let derived = mecha().derived();
        assert_eq!(derived.abilities.power, 20);
        assert_eq!(derived.abilities.mobility, 1);
        assert_eq!(derived.abilities.system, 12);
        assert_eq!(derived.abilities.presence, 1);
    }

    #[test]
    fn test_derived_never_mutates_stored_actor() {
        ensure_rules_initialized();
        let actor = mecha();
        let _ = actor.derived();
        let again = actor.derived();
        // Stored values stay raw; derivation is repeatable
        assert_eq!(actor.abilities.power, 25);
        assert_eq!(again.abilities.power, 20);
    }

    #[test]
    fn test_derived_skips_clamp_for_enemies() {
        ensure_rules_initialized();
        let mut enemy = mecha();
        enemy.kind = ActorKind::Enemy;
        let derived = enemy.derived();
        assert_eq!(derived.abilities.power, 25);
    }

    #[test]
    fn test_derived_percentages() {
        ensure_rules_initialized();
        let derived = mecha().derived();
        assert_eq!(derived.hit_points_pct, 50);
        // Zero max reports zero, not a division error
        assert_eq!(derived.armor_points_pct, 0);
    }

    #[test]
    fn test_stat_check_uses_clamped_target() {
        ensure_rules_initialized();
        let actor = mecha();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        // Raw power is 25; the check must test against the clamped 20
        let outcome = actor.stat_check_with_rng(AbilityKey::Power, RollMode::Normal, 0, &mut rng);
        assert_eq!(outcome.target, 20);
    }

    #[test]
    fn test_plain_attack_rolls_damage() {
        ensure_rules_initialized();
        let mut rng = rand::thread_rng();
        let (gate, result) = resolve_attack_with_rng(&plain_attack(), &mut rng).unwrap();
        assert!(gate.is_none());
        assert!(result.damage.total >= 1 && result.damage.total <= 6);
        assert_eq!(result.defend, AbilityKey::Mobility);
        assert_eq!(result.targets, 1);
    }

    #[test]
    fn test_empty_damage_falls_back_to_1d6() {
        ensure_rules_initialized();
        let mut attack = plain_attack();
        attack.damage = String::new();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let (_, result) = resolve_attack_with_rng(&attack, &mut rng).unwrap();
            assert!(result.damage.total >= 1 && result.damage.total <= 6);
        }
    }

    #[test]
    fn test_recharge_attack_gate() {
        ensure_rules_initialized();
        let mut attack = plain_attack();
        attack.recharge = Some(RechargeState::new());
        let mut rng = rand::thread_rng();

        // Closed gate: refused before any roll
        let result = resolve_attack_with_rng(&attack, &mut rng);
        assert!(matches!(result, Err(ResolveError::NotReady { .. })));

        // Open gate: resolves and comes back closed
        attack.recharge = Some(RechargeState { ready: true });
        let (gate, _) = resolve_attack_with_rng(&attack, &mut rng).unwrap();
        assert_eq!(gate, Some(RechargeState { ready: false }));
    }

    #[test]
    fn test_malformed_attack_damage_refused() {
        ensure_rules_initialized();
        let mut attack = plain_attack();
        attack.damage = "banana".to_string();
        let mut rng = rand::thread_rng();
        let result = resolve_attack_with_rng(&attack, &mut rng);
        assert!(matches!(result, Err(ResolveError::InvalidFormula { .. })));
    }

    #[test]
    fn test_enemy_hit_points_roll() {
        ensure_rules_initialized();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let (pool, total) = roll_enemy_hit_points_with_rng(Some("2d8+2"), &mut rng).unwrap();
            assert_eq!(pool.value, pool.max);
            assert_eq!(pool.value, total);
            assert!(total >= 4 && total <= 18);
        }
        // Missing expression falls back to 1d8
        let (pool, _) = roll_enemy_hit_points_with_rng(None, &mut rng).unwrap();
        assert!(pool.max >= 1 && pool.max <= 8);
    }
}
