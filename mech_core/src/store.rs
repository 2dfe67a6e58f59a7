//! Persistence contract - commits described as data, applied by the host
//!
//! Resolvers never write anywhere themselves: each state-mutating
//! operation returns its next state together with a `FieldUpdate`, and the
//! caller applies that through a host-owned `DocumentStore`. The roll
//! outcome stays with the caller, so a failed commit is still displayable
//! (display first, persist best-effort). Per-entity write serialization is
//! the host's responsibility; the engine neither retries nor batches
//! across entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::ResolveError;

/// One field write against one persisted entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub entity_id: String,
    /// Dotted field path in the host document, e.g. `system.dice.reactor`
    pub path: String,
    pub value: Value,
}

impl FieldUpdate {
    pub fn new(entity_id: &str, path: &str, value: Value) -> Self {
        FieldUpdate {
            entity_id: entity_id.to_string(),
            path: path.to_string(),
            value,
        }
    }
}

/// Error from the host document layer
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Host-implemented document update sink
pub trait DocumentStore {
    fn update_field(&mut self, update: &FieldUpdate) -> Result<(), StoreError>;
}

/// Apply updates in order, stopping at the first failure
///
/// A failure maps to `PersistenceFailed` carrying the path that rejected;
/// the caller already holds the roll outcome and decides whether to retry.
pub fn commit<S: DocumentStore>(store: &mut S, updates: &[FieldUpdate]) -> Result<(), ResolveError> {
    for update in updates {
        store
            .update_field(update)
            .map_err(|e| ResolveError::PersistenceFailed {
                path: update.path.clone(),
                message: e.0,
            })?;
    }
    Ok(())
}

/// In-memory store for tests and offline resolution
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: HashMap<(String, String), Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entity_id: &str, path: &str) -> Option<&Value> {
        self.fields
            .get(&(entity_id.to_string(), path.to_string()))
    }
}

impl DocumentStore for MemoryStore {
    fn update_field(&mut self, update: &FieldUpdate) -> Result<(), StoreError> {
        self.fields.insert(
            (update.entity_id.clone(), update.path.clone()),
            update.value.clone(),
        );
        Ok(())
    }
}
