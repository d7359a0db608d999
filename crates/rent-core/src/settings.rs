//! Scheduling policy settings.
//!
//! [`ScheduleSettings`] gathers every business rule that has more than one
//! defensible reading.  It is an immutable value handed to the scheduler, so
//! two schedules computed with different settings never interact.  The
//! `Default` reproduces the standard behaviour:
//!
//! * a fixed 30-day proration denominator,
//! * amounts rounded to cents, ties away from zero,
//! * the simplified leap-year rule (`year % 4 == 0 && year % 100 != 0`),
//! * rate changes applied to the due date on which they fall,
//! * rate-change permission judged on the current period's occupancy.

use crate::rounding::Rounding;
use crate::Natural;

/// Leap-year rule used by the billing calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeapYearRule {
    /// Divisible by 4 and not by 100.  Treats 2000 as a common year.
    #[default]
    Simplified,
    /// Full Gregorian rule, including the divisible-by-400 exception.
    Gregorian,
}

impl LeapYearRule {
    /// Whether `year` has a 29-day February under this rule.
    pub fn is_leap(self, year: u16) -> bool {
        match self {
            LeapYearRule::Simplified => year % 4 == 0 && year % 100 != 0,
            LeapYearRule::Gregorian => (year % 4 == 0 && year % 100 != 0) || year % 400 == 0,
        }
    }
}

/// When a permitted rate change shows up in the emitted amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateChangeTiming {
    /// The change is reflected in the amount of the due date that triggered it.
    #[default]
    SamePeriod,
    /// The triggering due date still bills the old rate; the new rate starts
    /// with the next emitted record.
    NextPeriod,
}

/// Which occupancy state decides whether a due rate change is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OccupancyGate {
    /// The occupancy of the period being billed.
    #[default]
    CurrentPeriod,
    /// The occupancy of the previously emitted period.  The first period of a
    /// schedule has no predecessor and uses its own occupancy.
    PreviousPeriod,
}

/// Policy knobs for schedule generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleSettings {
    /// Day count every proration divides by, whatever the month's length.
    pub proration_denominator: Natural,
    /// Decimal places kept on emitted amounts.
    pub amount_precision: i32,
    /// Rounding applied to emitted amounts.
    pub rounding: Rounding,
    /// Leap-year rule for month lengths.
    pub leap_year_rule: LeapYearRule,
    /// Same-period or deferred application of rate changes.
    pub rate_change_timing: RateChangeTiming,
    /// Occupancy state consulted by the rate-change gate.
    pub occupancy_gate: OccupancyGate,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            proration_denominator: 30,
            amount_precision: 2,
            rounding: Rounding::Closest,
            leap_year_rule: LeapYearRule::Simplified,
            rate_change_timing: RateChangeTiming::SamePeriod,
            occupancy_gate: OccupancyGate::CurrentPeriod,
        }
    }
}

impl ScheduleSettings {
    /// Set the proration denominator (in days).
    pub fn with_proration_denominator(mut self, days: Natural) -> Self {
        self.proration_denominator = days;
        self
    }

    /// Set the precision and rounding convention for emitted amounts.
    pub fn with_rounding(mut self, precision: i32, rounding: Rounding) -> Self {
        self.amount_precision = precision;
        self.rounding = rounding;
        self
    }

    /// Set the leap-year rule.
    pub fn with_leap_year_rule(mut self, rule: LeapYearRule) -> Self {
        self.leap_year_rule = rule;
        self
    }

    /// Set when rate changes take effect.
    pub fn with_rate_change_timing(mut self, timing: RateChangeTiming) -> Self {
        self.rate_change_timing = timing;
        self
    }

    /// Set which occupancy state gates rate changes.
    pub fn with_occupancy_gate(mut self, gate: OccupancyGate) -> Self {
        self.occupancy_gate = gate;
        self
    }

    /// Round an amount for emission.
    pub fn round_amount(&self, value: crate::Real) -> crate::Real {
        self.rounding.apply(value, self.amount_precision)
    }
}
