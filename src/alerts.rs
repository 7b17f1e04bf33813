//! Alert evaluator.
//!
//! Maps a record and the current instant to a single prioritized alert
//! classification. Pure: no mutation, no I/O, no clock reads. `now`
//! is injected so the evaluation is deterministic and testable.
//!
//! Priority order, first match wins:
//!
//! 1. manual health flag set          → [`AlertKind::Health`]
//! 2. last feed at least 8 h ago      → [`AlertKind::Food`]
//! 3. last dose at least 12 h ago     → [`AlertKind::Medication`]
//! 4. otherwise                       → [`AlertKind::Ok`]
//!
//! An animal that has never been fed (or dosed) today raises no
//! overdue alert: the elapsed-time checks fire only from a recorded
//! timestamp, so "never fed" is not treated as "overdue".

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::record::PetRecord;

/// Hours since the last feed before a food alert fires.
pub const FOOD_OVERDUE_HOURS: i64 = 8;
/// Hours since the last dose before a medication alert fires.
pub const MEDICATION_OVERDUE_HOURS: i64 = 12;

/// Prioritized alert classification, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Health,
    Food,
    Medication,
    Ok,
}

impl AlertKind {
    /// Fixed human-readable message for this kind. Localisation is a
    /// presentation concern; only the kind and its priority are part
    /// of the core contract.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Health => "health check required",
            Self::Food => "feeding overdue",
            Self::Medication => "medication overdue",
            Self::Ok => "all good",
        }
    }
}

/// The evaluator's result: a kind plus its fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
}

impl Alert {
    fn of(kind: AlertKind) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }
}

/// Evaluate the alert status for one record at instant `now`.
pub fn evaluate(record: &PetRecord, now: DateTime<Utc>) -> Alert {
    if record.health_alert {
        return Alert::of(AlertKind::Health);
    }

    if let Some(fed_at) = record.last_feed_time {
        if now.signed_duration_since(fed_at) >= Duration::hours(FOOD_OVERDUE_HOURS) {
            return Alert::of(AlertKind::Food);
        }
    }

    if record.has_medication {
        if let Some(dosed_at) = record.last_medication_time {
            if now.signed_duration_since(dosed_at) >= Duration::hours(MEDICATION_OVERDUE_HOURS) {
                return Alert::of(AlertKind::Medication);
            }
        }
    }

    Alert::of(AlertKind::Ok)
}
