//! Rehab Test Harness - synthetic sessions and clinical scenarios
//!
//! This crate provides:
//! - A deterministic 33-landmark motion simulator with seeded jitter
//! - Canned exercises and patient profiles
//! - Tracing setup for tests

pub mod logging;
pub mod scenarios;
pub mod simulator;

pub use logging::*;
pub use scenarios::*;
pub use simulator::*;
