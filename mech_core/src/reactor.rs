//! Reactor die - a degrading resource with a terminal overheat state
//!
//! The reactor rolls its own current die size. A low roll degrades the
//! die one step (d20 -> d12 -> d10 -> d8 -> d6 -> d4); at d4 a low roll
//! reports overheat instead of mutating. The die never recovers on its
//! own - any restoration is an external actor update.

use dice_core::{DiceFormula, DieSize};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::rules;
use crate::store::FieldUpdate;

/// The actor-owned reactor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactorState {
    pub die: DieSize,
}

impl ReactorState {
    pub fn new(die: DieSize) -> Self {
        ReactorState { die }
    }

    /// Whether the reactor is at its terminal size
    pub fn at_floor(&self) -> bool {
        self.die.step_down().is_none()
    }
}

impl Default for ReactorState {
    fn default() -> Self {
        ReactorState { die: DieSize::D20 }
    }
}

/// What a reactor roll did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum ReactorEvent {
    /// Roll above the threshold; nothing changed
    Steady,
    /// Roll at or below the threshold; die stepped down one size
    Degraded { from: DieSize, to: DieSize },
    /// Roll at or below the threshold while already at d4; no change
    Overheated,
}

/// One reactor roll: the unmodified die result plus its consequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactorOutcome {
    pub roll: u32,
    pub event: ReactorEvent,
}

/// Apply a reactor roll to the current state (pure)
///
/// Returns the next state and the outcome; the caller commits the state.
pub fn apply_reactor_roll(state: &ReactorState, roll: u32) -> (ReactorState, ReactorOutcome) {
    let threshold = rules().reactor.degrade_threshold;

    let event = if roll <= threshold {
        match state.die.step_down() {
            Some(to) => ReactorEvent::Degraded {
                from: state.die,
                to,
            },
            None => ReactorEvent::Overheated,
        }
    } else {
        ReactorEvent::Steady
    };

    let next = match event {
        ReactorEvent::Degraded { to, .. } => ReactorState { die: to },
        ReactorEvent::Steady | ReactorEvent::Overheated => *state,
    };

    (next, ReactorOutcome { roll, event })
}

/// Roll the reactor's current die and apply the result
pub fn roll_reactor_with_rng<R: Rng>(
    state: &ReactorState,
    rng: &mut R,
) -> (ReactorState, ReactorOutcome) {
    let draw = DiceFormula::single(state.die).roll_with_rng(rng);
    apply_reactor_roll(state, draw.kept)
}

/// Roll the reactor with the thread-local generator
pub fn roll_reactor(state: &ReactorState) -> (ReactorState, ReactorOutcome) {
    roll_reactor_with_rng(state, &mut rand::thread_rng())
}

/// The commit describing a reactor state for the host document layer
pub fn reactor_update(actor_id: &str, state: &ReactorState) -> FieldUpdate {
    FieldUpdate::new(
        actor_id,
        "system.dice.reactor",
        serde_json::json!(state.die),
    )
}
