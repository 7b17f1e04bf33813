//! Care service — the application core's outward surface.
//!
//! [`CareService`] owns the registry and the reset scheduler behind a
//! single mutex and exposes exactly the three operations the transport
//! layer may consume: status listing, record lookup, and action
//! application. Every operation samples the clock once, reconciles the
//! calendar-day boundary first, and only then reads or mutates.
//!
//! ```text
//!  transport ──▶ ┌───────────────────────────────┐
//!   (HTTP/UI)    │          CareService          │
//!    Clock  ──▶  │  reconcile · apply · evaluate │──▶ snapshots
//!                └───────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::alerts::{self, Alert};
use crate::config::Roster;
use crate::error::Result;
use crate::record::PetRecord;
use crate::registry::Registry;
use crate::scheduler::ResetScheduler;

use super::actions::Action;
use super::ports::{Clock, SystemClock};
use super::processor;

/// Registry plus reset bookkeeping, guarded as one unit.
///
/// One lock covers the whole registry. Every critical section spans
/// the full reconcile-then-act sequence and is O(number of animals)
/// at worst, which closes the check-then-act race between the cap
/// check and the counter increment.
#[derive(Debug)]
struct CoreState {
    registry: Registry,
    reset: ResetScheduler,
}

/// The process-lifetime care engine. State is in-memory only; nothing
/// survives process exit.
pub struct CareService<C: Clock = SystemClock> {
    clock: C,
    state: Mutex<CoreState>,
}

impl CareService<SystemClock> {
    /// Construct the service on the system UTC clock.
    pub fn with_system_clock(roster: &Roster) -> Self {
        Self::new(roster, SystemClock)
    }
}

impl<C: Clock> CareService<C> {
    /// Construct the service from a validated roster. The reset
    /// scheduler starts on the clock's current day.
    pub fn new(roster: &Roster, clock: C) -> Self {
        let state = CoreState {
            registry: Registry::from_roster(roster),
            reset: ResetScheduler::new(clock.now()),
        };
        Self {
            clock,
            state: Mutex::new(state),
        }
    }

    // ── External operations ───────────────────────────────────

    /// Evaluate every animal's alert status.
    pub fn all_statuses(&self) -> HashMap<String, Alert> {
        let now = self.clock.now();
        let mut state = self.lock_state();
        let CoreState { registry, reset } = &mut *state;
        reset.reconcile(registry, now);

        registry
            .iter()
            .map(|(id, record)| (id.to_owned(), alerts::evaluate(record, now)))
            .collect()
    }

    /// Snapshot of one animal's record.
    pub fn pet(&self, id: &str) -> Result<PetRecord> {
        let now = self.clock.now();
        let mut state = self.lock_state();
        let CoreState { registry, reset } = &mut *state;
        reset.reconcile(registry, now);

        registry.lookup(id).cloned()
    }

    /// Apply one action to one animal and return the updated snapshot.
    ///
    /// `kind` is the transport's raw action string; kinds outside the
    /// known set are a silent no-op against the unchanged record.
    pub fn apply_action(&self, id: &str, kind: &str, text: Option<&str>) -> Result<PetRecord> {
        let now = self.clock.now();
        let mut state = self.lock_state();
        let CoreState { registry, reset } = &mut *state;
        reset.reconcile(registry, now);

        let record = registry.lookup_mut(id)?;
        match Action::parse(kind, text) {
            Some(action) => processor::apply(record, &action, now),
            None => debug!("{}: unknown action kind '{}' ignored", id, kind),
        }
        Ok(record.clone())
    }

    // ── Conveniences for the transport layer ──────────────────

    /// All registered animal identifiers, sorted.
    pub fn pet_ids(&self) -> Vec<String> {
        self.lock_state().registry.ids()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Acquire the state lock. Poisoning is recovered: every mutation
    /// step leaves the registry invariant-consistent, so a panicked
    /// holder cannot expose torn state.
    fn lock_state(&self) -> MutexGuard<'_, CoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
