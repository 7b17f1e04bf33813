//! Port traits — the boundary between the care core and the outside
//! world.
//!
//! The core's only external dependency is the wall clock. Injecting it
//! through a port keeps [`reconcile`](crate::scheduler::ResetScheduler::reconcile)
//! and [`evaluate`](crate::alerts::evaluate) deterministic: production
//! wires in [`SystemClock`], tests wire in a settable mock.

use chrono::{DateTime, Utc};

/// Source of the current instant, sampled once per operation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system's UTC wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
