//! Opening-period proration.
//!
//! When the lease starts inside the reporting window, the span between the
//! lease start and the next regular due date is billed as a partial period,
//! dated at the lease start.  Which span applies depends on where the lease
//! day falls relative to the billing day; the three cases are checked in the
//! order of [`ProrationCase`].  Every case divides by the configured
//! denominator (30 days by default) whatever the month's real length.

use rent_core::{Real, ScheduleSettings};
use rent_time::{BillingCalendar, Date};
use tracing::debug;

use crate::record::BillingRecord;
use crate::request::ScheduleRequest;

/// Position of the lease start relative to its month's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProrationCase {
    /// The billing day does not exist in the lease month and the lease starts
    /// before the month's last day.  Bills `last_day - lease_day` days.
    DueDayOverflow,
    /// The lease starts before the due date of its month.  Bills
    /// `billing_day - lease_day` days.
    BeforeDueDay,
    /// The lease starts after the due date of its month.  Bills the full
    /// period less the `lease_day - billing_day` days already elapsed.
    AfterDueDay,
}

/// An opening charge before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proration {
    /// Which boundary case produced the charge.
    pub case: ProrationCase,
    /// Day count of the case (billed days, or elapsed days for
    /// [`ProrationCase::AfterDueDay`]).
    pub days: u8,
    /// Unrounded charge.
    pub amount: Real,
}

/// Classify the lease start and compute its unrounded opening charge.
///
/// Returns `None` when the lease starts on its month's due date, where the
/// regular record already covers the full period.
pub fn prorate(
    lease_start: Date,
    billing_day: u8,
    base_rate: Real,
    calendar: &BillingCalendar,
    denominator: u32,
) -> Option<Proration> {
    let billing_day = billing_day.max(1);
    let month = lease_start.year_month();
    let lease_day = lease_start.day_of_month();
    let last_day = calendar.last_day_of_month(month.year(), month.month());
    let due_this_month = calendar.due_date_for(month, billing_day).ok()?;
    let denominator = denominator.max(1) as Real;

    let (case, days, amount) = if billing_day > last_day && lease_day < last_day {
        let days = last_day - lease_day;
        (ProrationCase::DueDayOverflow, days, base_rate * days as Real / denominator)
    } else if lease_day < billing_day && lease_start < due_this_month {
        let days = billing_day - lease_day;
        (ProrationCase::BeforeDueDay, days, base_rate * days as Real / denominator)
    } else if lease_day > billing_day && lease_start > due_this_month {
        let days = lease_day - billing_day;
        // A denominator shorter than the elapsed span bills nothing.
        let amount = (base_rate * (1.0 - days as Real / denominator)).max(0.0);
        (ProrationCase::AfterDueDay, days, amount)
    } else {
        return None;
    };

    Some(Proration { case, days, amount })
}

/// The opening prorated record for `request`, if the lease starts inside the
/// window and off its month's due date.  Always prorates the base rate.
pub fn opening_record(
    request: &ScheduleRequest,
    settings: &ScheduleSettings,
    calendar: &BillingCalendar,
) -> Option<BillingRecord> {
    if !request.window_contains(request.lease_start) {
        return None;
    }
    let proration = prorate(
        request.lease_start,
        request.billing_day,
        request.base_rate,
        calendar,
        settings.proration_denominator,
    )?;
    let amount = settings.round_amount(proration.amount);
    debug!(
        lease_start = %request.lease_start,
        case = ?proration.case,
        days = proration.days,
        amount,
        "opening period prorated"
    );
    Some(BillingRecord::prorated(amount, request.lease_start))
}
