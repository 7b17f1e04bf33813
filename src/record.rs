//! Per-animal care record.
//!
//! A [`PetRecord`] is the unit of mutable state in the system: static
//! identity attributes fixed at registration, the per-day feed and
//! medication counters, the manually managed health flag, and the
//! append-only care-note log. Records are owned exclusively by the
//! [`Registry`](crate::registry::Registry); everything else sees them
//! only as borrows inside a call or as cloned snapshots.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PetSpec;

/// Animal gender, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// One care note: free text plus the instant it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub text: String,
    pub recorded_at: DateTime<Utc>,
}

/// The full mutable state for one animal.
///
/// Invariants upheld by the mutation paths (the action processor and
/// the reset scheduler):
///
/// - `feed_count <= max_feed`, and `last_feed_time` is `Some` exactly
///   when `feed_count > 0` since the last daily reset.
/// - When `has_medication` is false the medication counters stay at
///   zero and `last_medication_time` stays `None` for the record's
///   whole lifetime.
/// - `notes` only ever grows, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct PetRecord {
    // ── Identity (immutable after registration) ───────────────
    pub id: String,
    pub species: String,
    pub breed: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub weight_kg: f32,
    pub color: String,

    // ── Feeding ───────────────────────────────────────────────
    pub feed_count: u32,
    pub max_feed: u32,
    pub last_feed_time: Option<DateTime<Utc>>,

    // ── Medication ────────────────────────────────────────────
    pub has_medication: bool,
    pub medication_count: u32,
    pub max_medication: u32,
    pub last_medication_time: Option<DateTime<Utc>>,

    // ── Flags and notes ───────────────────────────────────────
    /// Manually set by an administrative path; never touched by the
    /// feed/medicate/annotate operations or the daily reset.
    pub health_alert: bool,
    pub notes: Vec<Note>,
}

impl PetRecord {
    /// Build a fresh record from a roster entry. Counters start at
    /// zero, no feed/medication has been recorded yet, and the note
    /// log is empty.
    pub fn from_spec(spec: &PetSpec) -> Self {
        Self {
            id: spec.id.clone(),
            species: spec.species.clone(),
            breed: spec.breed.clone(),
            gender: spec.gender,
            birth_date: spec.birth_date,
            weight_kg: spec.weight_kg,
            color: spec.color.clone(),
            feed_count: 0,
            max_feed: spec.max_feed,
            last_feed_time: None,
            has_medication: spec.has_medication,
            medication_count: 0,
            max_medication: if spec.has_medication {
                spec.max_medication
            } else {
                0
            },
            last_medication_time: None,
            health_alert: spec.health_alert,
            notes: Vec::new(),
        }
    }

    /// Zero the per-day counters. Called only by the reset scheduler
    /// when a calendar-day boundary has been crossed.
    pub fn reset_daily_counters(&mut self) {
        self.feed_count = 0;
        self.last_feed_time = None;
        if self.has_medication {
            self.medication_count = 0;
            self.last_medication_time = None;
        }
    }

    /// Administrative override for the manual health flag. Not part of
    /// the care operations; exposed for the external admin path only.
    pub fn set_health_alert(&mut self, on: bool) {
        self.health_alert = on;
    }
}
