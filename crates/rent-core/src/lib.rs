//! # rent-core
//!
//! Core types, rounding, settings, and error definitions for rentsched.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – numeric type aliases, the error hierarchy,
//! monetary rounding, and the `ScheduleSettings` value that selects between
//! the supported billing policies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Rounding conventions for monetary amounts.
pub mod rounding;

/// Scheduling policy settings (proration, rounding, leap rule, rate changes).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A monetary amount in the unit's billing currency.
pub type Amount = Real;

/// A rate expressed as a decimal (e.g. 0.1 = 10 %).
pub type Rate = Real;

/// Non-negative integer type.
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rounding::Rounding;
pub use settings::{LeapYearRule, OccupancyGate, RateChangeTiming, ScheduleSettings};
