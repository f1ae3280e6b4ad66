//! Rift subsidence simulator
//!
//! Computes the tectonic subsidence, surface heat flow, and strain rate of a continental
//! lithosphere stretched during one to three rifting episodes of finite duration.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analysis;
pub mod base;
pub mod prelude;
pub mod sim;
