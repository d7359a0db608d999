//! # rent-time
//!
//! Date, month, and billing-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Billing month lengths, clamped due dates, and month distances.
pub mod billing_calendar;

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `YearMonth` — a calendar month and inclusive month ranges.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use billing_calendar::{months_between, BillingCalendar};
pub use date::Date;
pub use month::Month;
pub use year_month::{MonthRange, YearMonth};
