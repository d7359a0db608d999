//! # rentsched
//!
//! Per-period billing schedules for a leased unit.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `rent-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use rentsched::schedule::compute_schedule;
//! use rentsched::time::Date;
//!
//! let d = |s: &str| s.parse::<Date>().unwrap();
//! let records = compute_schedule(100.0, d("2023-01-01"), d("2023-01-01"), d("2023-03-31"), 15, 1, 0.1);
//!
//! // Opening charge for Jan 1–14, then one charge per cycle.
//! assert_eq!(records[0].amount, 46.67);
//! assert_eq!(records[0].due_date, d("2023-01-01"));
//! assert_eq!(records.len(), 4);
//! ```
//!
//! ## Policies
//!
//! [`core::ScheduleSettings`] selects between the supported readings of the
//! billing rules (leap-year rule, rate-change timing, occupancy gate,
//! proration denominator, rounding); pass it to
//! [`schedule::RentScheduler::new`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, rounding, settings, and error definitions.
pub use rent_core as core;

/// Date, month, and billing-calendar types.
pub use rent_time as time;

/// Billing records, requests, proration, rate changes, and the scheduler.
pub use rent_schedule as schedule;

/// Commonly used items.
pub mod prelude {
    pub use rent_core::{Error, Result, ScheduleSettings};
    pub use rent_schedule::{
        compute_schedule, BillingRecord, ChargeKind, RentScheduler, ScheduleRequest,
        ScheduleRequestBuilder,
    };
    pub use rent_time::Date;
}
