//! Animal registry — the sole owner of all mutable care state.
//!
//! Populated once from the roster at process start; records live until
//! process exit. The registry is plain storage: it hands out borrows
//! and leaves invariant-preserving mutation to its callers (the action
//! processor and the reset scheduler).

use std::collections::HashMap;

use crate::config::Roster;
use crate::error::{Error, Result};
use crate::record::PetRecord;

/// Process-wide map from animal identifier to its record.
#[derive(Debug)]
pub struct Registry {
    pets: HashMap<String, PetRecord>,
}

impl Registry {
    /// Build the registry from a validated roster.
    pub fn from_roster(roster: &Roster) -> Self {
        let pets = roster
            .pets
            .iter()
            .map(|spec| (spec.id.clone(), PetRecord::from_spec(spec)))
            .collect();
        Self { pets }
    }

    /// Resolve an animal by id.
    pub fn lookup(&self, id: &str) -> Result<&PetRecord> {
        self.pets.get(id).ok_or_else(|| Error::NotFound(id.into()))
    }

    /// Resolve an animal by id for mutation.
    pub fn lookup_mut(&mut self, id: &str) -> Result<&mut PetRecord> {
        self.pets
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.into()))
    }

    /// Iterate over every record (read-only).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PetRecord)> {
        self.pets.iter().map(|(id, rec)| (id.as_str(), rec))
    }

    /// Iterate over every record for mutation (reset pass).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PetRecord> {
        self.pets.values_mut()
    }

    /// Number of registered animals.
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// True when the roster was empty.
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// All registered identifiers, sorted for stable output.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.pets.keys().cloned().collect();
        ids.sort();
        ids
    }
}
