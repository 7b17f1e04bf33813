//! Application core — pure domain logic behind a narrow seam.
//!
//! This module wires the record model, reset scheduler, and alert
//! evaluator into the [`CareService`](service::CareService), the only
//! surface the transport layer may consume. The single external
//! dependency, the wall clock, enters through the port trait in
//! [`ports`], keeping every operation deterministic under test.

pub mod actions;
pub mod ports;
pub mod processor;
pub mod service;
