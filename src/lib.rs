//! PawTrack — daily-care tracking and alert engine.
//!
//! Tracks per-animal daily feed and medication counters and derives a
//! prioritized alert status from elapsed time and manually set health
//! flags. The crate is the state + alert core only: transport, page
//! rendering, and display formatting live in external consumers of
//! [`app::service::CareService`].

#![deny(unused_must_use)]

pub mod alerts;
pub mod app;
pub mod config;
pub mod record;
pub mod registry;
pub mod scheduler;

mod error;

pub use error::{Error, Result};
