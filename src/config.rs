//! Roster configuration.
//!
//! The set of tracked animals is fixed and statically known at process
//! start: it is loaded once from a JSON roster file (or the built-in
//! sample roster) and never changes for the process lifetime. Each
//! entry carries the animal's display attributes plus its daily care
//! limits.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Gender;

/// One roster entry: everything needed to register an animal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetSpec {
    /// Stable identifier, unique within the roster.
    pub id: String,
    pub species: String,
    pub breed: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub weight_kg: f32,
    pub color: String,

    /// Maximum feeds per calendar day (must be at least 1).
    pub max_feed: u32,
    /// Whether this animal is on a medication plan.
    #[serde(default)]
    pub has_medication: bool,
    /// Maximum medication doses per calendar day. Required (>= 1) when
    /// `has_medication` is set; ignored otherwise.
    #[serde(default)]
    pub max_medication: u32,
    /// Initial state of the manual health flag.
    #[serde(default)]
    pub health_alert: bool,
}

/// The full animal roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub pets: Vec<PetSpec>,
}

impl Roster {
    /// Load and validate a roster from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let raw = std::fs::read_to_string(path).map_err(|_| RosterError::Io)?;
        Self::parse(&raw)
    }

    /// Parse and validate a roster from a JSON string.
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        let roster: Self = serde_json::from_str(raw).map_err(|_| RosterError::Malformed)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Check every entry against the care-limit rules.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen = std::collections::HashSet::new();
        for spec in &self.pets {
            if spec.id.trim().is_empty() {
                return Err(RosterError::Validation("empty animal id"));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(RosterError::Validation("duplicate animal id"));
            }
            if spec.max_feed == 0 {
                return Err(RosterError::Validation("max_feed must be at least 1"));
            }
            if spec.has_medication && spec.max_medication == 0 {
                return Err(RosterError::Validation(
                    "max_medication must be at least 1 for a medicated animal",
                ));
            }
        }
        Ok(())
    }

    /// Built-in sample roster, used when no roster file is supplied.
    pub fn sample() -> Self {
        Self {
            pets: vec![
                PetSpec {
                    id: "bella".into(),
                    species: "dog".into(),
                    breed: "Labrador Retriever".into(),
                    gender: Gender::Female,
                    birth_date: NaiveDate::from_ymd_opt(2021, 4, 12).unwrap_or_default(),
                    weight_kg: 28.5,
                    color: "yellow".into(),
                    max_feed: 3,
                    has_medication: true,
                    max_medication: 2,
                    health_alert: false,
                },
                PetSpec {
                    id: "milo".into(),
                    species: "cat".into(),
                    breed: "European Shorthair".into(),
                    gender: Gender::Male,
                    birth_date: NaiveDate::from_ymd_opt(2023, 1, 30).unwrap_or_default(),
                    weight_kg: 4.2,
                    color: "tabby".into(),
                    max_feed: 2,
                    has_medication: false,
                    max_medication: 0,
                    health_alert: false,
                },
                PetSpec {
                    id: "kiwi".into(),
                    species: "parrot".into(),
                    breed: "Budgerigar".into(),
                    gender: Gender::Unknown,
                    birth_date: NaiveDate::from_ymd_opt(2022, 9, 3).unwrap_or_default(),
                    weight_kg: 0.04,
                    color: "green".into(),
                    max_feed: 4,
                    has_medication: false,
                    max_medication: 0,
                    health_alert: false,
                },
            ],
        }
    }
}

/// Errors from roster loading and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// The roster file could not be read.
    Io,
    /// The roster JSON failed to deserialize.
    Malformed,
    /// An entry failed a care-limit rule; the message names the rule.
    Validation(&'static str),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "roster file could not be read"),
            Self::Malformed => write!(f, "roster JSON is malformed"),
            Self::Validation(msg) => write!(f, "roster validation failed: {}", msg),
        }
    }
}

impl std::error::Error for RosterError {}
