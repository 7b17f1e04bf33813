//! Action processor.
//!
//! Applies one [`Action`] to one record under the capacity and
//! eligibility rules. Ineligible requests (counter already at its
//! daily cap, medication for an animal without a plan, blank note)
//! leave the record untouched by contract; the caller still returns
//! the unchanged record to the outside world.
//!
//! `now` is sampled once per call by the service so the counter and
//! its timestamp always agree.

use chrono::{DateTime, Utc};
use log::debug;

use crate::record::{Note, PetRecord};

use super::actions::Action;

/// Apply `action` to `record` at instant `now`.
pub fn apply(record: &mut PetRecord, action: &Action, now: DateTime<Utc>) {
    match action {
        Action::Feed => {
            if record.feed_count < record.max_feed {
                record.feed_count += 1;
                record.last_feed_time = Some(now);
                debug!(
                    "{}: fed ({}/{})",
                    record.id, record.feed_count, record.max_feed
                );
            } else {
                debug!("{}: feed ignored, daily cap reached", record.id);
            }
        }
        Action::Medicate => {
            if !record.has_medication {
                debug!("{}: medicate ignored, no medication plan", record.id);
            } else if record.medication_count < record.max_medication {
                record.medication_count += 1;
                record.last_medication_time = Some(now);
                debug!(
                    "{}: dosed ({}/{})",
                    record.id, record.medication_count, record.max_medication
                );
            } else {
                debug!("{}: medicate ignored, daily cap reached", record.id);
            }
        }
        Action::Annotate { text } => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                debug!("{}: blank note ignored", record.id);
            } else {
                record.notes.push(Note {
                    text: trimmed.to_owned(),
                    recorded_at: now,
                });
            }
        }
    }
}
