//! Daily reset scheduler.
//!
//! Feed and medication counters are *per calendar day*: when the UTC
//! date of the current call differs from the date of the last reset,
//! every record's daily counters are zeroed exactly once and the reset
//! day advances to the current date. The policy is day-boundary-crossed,
//! not days-elapsed-counted: a multi-day gap (process idle over a
//! weekend, clock adjusted either direction) collapses into a single
//! reset pass with no compensation for the missed days.
//!
//! [`ResetScheduler::reconcile`] must run at the start of every
//! external operation, before any read or mutation, and is idempotent
//! within the same day.

use chrono::{DateTime, NaiveDate, Utc};
use log::info;

use crate::registry::Registry;

/// Tracks the calendar day (UTC) on which the last reset pass ran.
#[derive(Debug)]
pub struct ResetScheduler {
    last_reset_day: NaiveDate,
}

impl ResetScheduler {
    /// Start the scheduler on the day of process start; the first
    /// reconcile on that same day is a no-op.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            last_reset_day: now.date_naive(),
        }
    }

    /// Reconcile the day boundary against the registry.
    ///
    /// Returns `true` if a reset pass ran.
    pub fn reconcile(&mut self, registry: &mut Registry, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        if today == self.last_reset_day {
            return false;
        }

        for record in registry.iter_mut() {
            record.reset_daily_counters();
        }
        info!(
            "daily counters reset for {} animal(s): {} -> {}",
            registry.len(),
            self.last_reset_day,
            today
        );
        self.last_reset_day = today;
        true
    }

    /// Day of the most recent reset (or process start).
    pub fn last_reset_day(&self) -> NaiveDate {
        self.last_reset_day
    }
}
