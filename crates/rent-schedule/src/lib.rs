//! # rent-schedule
//!
//! Billing schedules for a leased unit: one record per billing cycle in a
//! reporting window, with a prorated opening charge at the lease start and
//! periodic rate changes gated by occupancy.
//!
//! ```
//! use rent_schedule::compute_schedule;
//! use rent_time::Date;
//!
//! let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
//! let records = compute_schedule(100.0, d(2023, 1, 1), d(2023, 1, 1), d(2023, 3, 31), 1, 1, 0.1);
//! let amounts: Vec<f64> = records.iter().map(|r| r.amount).collect();
//! assert_eq!(amounts, vec![100.0, 110.0, 121.0]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Opening-period proration.
pub mod proration;

/// Occupancy-gated periodic rate changes.
pub mod rate_change;

/// `BillingRecord` and `ChargeKind`.
pub mod record;

/// `ScheduleRequest` and its builder.
pub mod request;

/// `RentScheduler` and the `compute_schedule` entry point.
pub mod scheduler;

pub use proration::{Proration, ProrationCase};
pub use rate_change::{Direction, RateChange};
pub use record::{BillingRecord, ChargeKind};
pub use request::{ScheduleRequest, ScheduleRequestBuilder};
pub use scheduler::{compute_schedule, RateState, RentScheduler};
