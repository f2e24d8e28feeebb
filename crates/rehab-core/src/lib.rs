//! Rehab Core - Fundamental types and primitives
//!
//! This crate defines the types shared by the scoring engine:
//! - Landmarks and the 33-point body model
//! - Named joint angles and frames
//! - Exercises, reference poses and rep configuration
//! - Warning and recommendation tags
//! - Error types

pub mod error;
pub mod exercise;
pub mod frame;
pub mod id;
pub mod joint;
pub mod landmark;
pub mod warning;

pub use error::*;
pub use exercise::*;
pub use frame::*;
pub use id::*;
pub use joint::*;
pub use landmark::*;
pub use warning::*;
