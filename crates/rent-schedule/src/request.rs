//! Inputs of one schedule computation.
//!
//! The scheduler trusts its input.  Callers that accept data from outside
//! build requests through [`ScheduleRequestBuilder`], which runs
//! [`ScheduleRequest::validate`].

use crate::rate_change::RateChange;
use rent_core::errors::{Error, Result};
use rent_core::{ensure, Real};
use rent_time::Date;

/// Inputs for one unit's billing schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRequest {
    /// Starting per-period rate.
    pub base_rate: Real,
    /// First day of the lease.
    pub lease_start: Date,
    /// First day of the reporting window (inclusive).
    pub window_start: Date,
    /// Last day of the reporting window (inclusive).
    pub window_end: Date,
    /// Nominal day of month on which charges are due (1–31).
    pub billing_day: u8,
    /// Cadence and factor of rate changes.
    pub rate_change: RateChange,
}

impl ScheduleRequest {
    /// Check the request against the scheduler's input contract.
    pub fn validate(&self) -> Result<()> {
        if !self.base_rate.is_finite() || !self.rate_change.factor.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "rates must be finite (base rate {}, change factor {})",
                self.base_rate, self.rate_change.factor
            )));
        }
        ensure!(
            self.base_rate > 0.0,
            "base rate must be positive, got {}",
            self.base_rate
        );
        ensure!(
            self.window_start <= self.window_end,
            "window start {} is after window end {}",
            self.window_start,
            self.window_end
        );
        ensure!(
            (1..=31).contains(&self.billing_day),
            "billing day must be in [1, 31], got {}",
            self.billing_day
        );
        ensure!(
            self.rate_change.frequency_months > 0,
            "rate change frequency must be at least one month"
        );
        ensure!(
            self.rate_change.factor > -1.0,
            "change factor must be greater than -1, got {}",
            self.rate_change.factor
        );
        Ok(())
    }

    /// Whether `date` lies inside the reporting window, both ends included.
    pub fn window_contains(&self, date: Date) -> bool {
        self.window_start <= date && date <= self.window_end
    }
}

/// Builder for [`ScheduleRequest`].
///
/// Defaults: billing day 1, no rate change.
#[derive(Debug, Clone)]
pub struct ScheduleRequestBuilder {
    base_rate: Real,
    lease_start: Date,
    window_start: Date,
    window_end: Date,
    billing_day: u8,
    rate_change: RateChange,
}

impl ScheduleRequestBuilder {
    /// Begin building a request.
    pub fn new(base_rate: Real, lease_start: Date, window_start: Date, window_end: Date) -> Self {
        Self {
            base_rate,
            lease_start,
            window_start,
            window_end,
            billing_day: 1,
            rate_change: RateChange::none(),
        }
    }

    /// Set the nominal billing day of month.
    pub fn with_billing_day(mut self, day: u8) -> Self {
        self.billing_day = day;
        self
    }

    /// Set the rate-change cadence (in months) and signed factor.
    pub fn with_rate_change(mut self, frequency_months: u32, factor: Real) -> Self {
        self.rate_change = RateChange::new(frequency_months, factor);
        self
    }

    /// Validate and build the request.
    pub fn build(self) -> Result<ScheduleRequest> {
        let request = ScheduleRequest {
            base_rate: self.base_rate,
            lease_start: self.lease_start,
            window_start: self.window_start,
            window_end: self.window_end,
            billing_day: self.billing_day,
            rate_change: self.rate_change,
        };
        request.validate()?;
        Ok(request)
    }
}
