//! The billing walk over a reporting window.
//!
//! The walk visits every calendar month from the window's first month through
//! its last.  For each month it clamps the billing day to a due date, drops
//! the month when that date falls outside the window or when the lease month's
//! charge is already covered by the opening prorated record, and otherwise
//! emits one record at the running rate.
//!
//! The running rate lives in a [`RateState`] threaded through a fold, so a
//! call owns all of its state and identical inputs always give identical
//! output.

use rent_core::{OccupancyGate, RateChangeTiming, Real, ScheduleSettings};
use rent_time::{BillingCalendar, Date, YearMonth};
use tracing::{debug, debug_span, trace};

use crate::proration::opening_record;
use crate::rate_change::RateChange;
use crate::record::BillingRecord;
use crate::request::ScheduleRequest;

/// Rate-change state carried from one period to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateState {
    /// Unrounded running rate.
    pub current_rate: Real,
    /// Occupancy of the last regular period emitted, if any.
    pub previous_occupied: Option<bool>,
}

impl RateState {
    /// The state at the start of a schedule.
    pub fn new(base_rate: Real) -> Self {
        Self {
            current_rate: base_rate,
            previous_occupied: None,
        }
    }
}

/// Accumulator of the monthly fold.
#[derive(Debug)]
struct Walk {
    rate: RateState,
    records: Vec<BillingRecord>,
    opening: Option<BillingRecord>,
}

/// Computes billing schedules under one set of [`ScheduleSettings`].
#[derive(Debug, Clone, Default)]
pub struct RentScheduler {
    settings: ScheduleSettings,
    calendar: BillingCalendar,
}

impl RentScheduler {
    /// Create a scheduler with the given settings.
    pub fn new(settings: ScheduleSettings) -> Self {
        Self {
            calendar: BillingCalendar::new(settings.leap_year_rule),
            settings,
        }
    }

    /// The settings in force.
    pub fn settings(&self) -> &ScheduleSettings {
        &self.settings
    }

    /// The billing calendar derived from the settings.
    pub fn calendar(&self) -> &BillingCalendar {
        &self.calendar
    }

    /// Compute the ordered billing records covering the request's window.
    ///
    /// Records are in chronological order.  The opening prorated record, when
    /// there is one, sits just before the lease month's regular record.
    pub fn schedule(&self, request: &ScheduleRequest) -> Vec<BillingRecord> {
        let _span = debug_span!(
            "schedule",
            window_start = %request.window_start,
            window_end = %request.window_end,
            lease_start = %request.lease_start,
        )
        .entered();

        // Rate-change cadence counts from the window's first month.
        let reference = request.window_start.year_month();
        let months = reference.through(request.window_end.year_month());

        let init = Walk {
            rate: RateState::new(request.base_rate),
            records: Vec::with_capacity(months.len() + 1),
            opening: opening_record(request, &self.settings, &self.calendar),
        };

        let walk = months.fold(init, |walk, month| {
            self.visit_month(request, reference, walk, month)
        });
        debug!(records = walk.records.len(), "schedule complete");
        walk.records
    }

    fn visit_month(
        &self,
        request: &ScheduleRequest,
        reference: YearMonth,
        mut walk: Walk,
        month: YearMonth,
    ) -> Walk {
        if walk
            .opening
            .is_some_and(|r| r.due_date.year_month() == month)
        {
            walk.records.extend(walk.opening.take());
        }

        let Ok(due_date) = self.calendar.due_date_for(month, request.billing_day) else {
            return walk;
        };
        if !request.window_contains(due_date) {
            trace!(%month, %due_date, "due date outside window");
            return walk;
        }
        if self.covered_by_opening(request, due_date) {
            trace!(%month, %due_date, "lease month already billed from lease start");
            return walk;
        }

        let occupied = due_date >= request.lease_start;
        let months_since_base = reference.months_until(month);
        let (billed_rate, rate) = self.advance_rate(
            &request.rate_change,
            walk.rate,
            occupied,
            months_since_base,
            due_date,
        );
        let amount = self.settings.round_amount(billed_rate);
        trace!(%due_date, occupied, amount, "period billed");

        walk.records
            .push(BillingRecord::regular(occupied, amount, due_date));
        walk.rate = rate;
        walk
    }

    /// Whether the lease month's regular charge is superseded by billing from
    /// the lease start: the lease begins after the due date, or the billing
    /// day overflows the month and the lease begins before its last day.
    fn covered_by_opening(&self, request: &ScheduleRequest, due_date: Date) -> bool {
        let lease = request.lease_start;
        let month = due_date.year_month();
        if month != lease.year_month() {
            return false;
        }
        if lease > due_date {
            return true;
        }
        let last_day = self.calendar.last_day_of_month(month.year(), month.month());
        request.billing_day > last_day && lease.day_of_month() < last_day
    }

    /// Apply a due, permitted change to the running rate.  Returns the rate
    /// billed on this period and the state carried forward.
    fn advance_rate(
        &self,
        change: &RateChange,
        state: RateState,
        occupied: bool,
        months_since_base: i32,
        due_date: Date,
    ) -> (Real, RateState) {
        let gate_occupied = match self.settings.occupancy_gate {
            OccupancyGate::CurrentPeriod => occupied,
            OccupancyGate::PreviousPeriod => state.previous_occupied.unwrap_or(occupied),
        };

        let mut next_rate = state.current_rate;
        if change.is_due(months_since_base) {
            if change.is_permitted(gate_occupied) {
                next_rate = change.apply(state.current_rate);
                debug!(
                    %due_date,
                    from = state.current_rate,
                    to = next_rate,
                    "rate change applied"
                );
            } else {
                debug!(
                    %due_date,
                    direction = ?change.direction(),
                    occupied = gate_occupied,
                    "rate change blocked by occupancy"
                );
            }
        }

        let billed = match self.settings.rate_change_timing {
            RateChangeTiming::SamePeriod => next_rate,
            RateChangeTiming::NextPeriod => state.current_rate,
        };
        let carried = RateState {
            current_rate: next_rate,
            previous_occupied: Some(occupied),
        };
        (billed, carried)
    }
}

/// Compute a billing schedule with the default settings.
///
/// `change_frequency_months` of zero disables rate changes; a `billing_day`
/// of zero bills on the first of the month and one past the month's length
/// bills on its last day.  Inputs are otherwise trusted; see
/// [`ScheduleRequest::validate`] for the full contract.
pub fn compute_schedule(
    base_rate: Real,
    lease_start: Date,
    window_start: Date,
    window_end: Date,
    billing_day: u8,
    change_frequency_months: u32,
    change_factor: Real,
) -> Vec<BillingRecord> {
    let request = ScheduleRequest {
        base_rate,
        lease_start,
        window_start,
        window_end,
        billing_day,
        rate_change: RateChange::new(change_frequency_months, change_factor),
    };
    RentScheduler::default().schedule(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ChargeKind;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn inverted_window_is_empty() {
        let records = compute_schedule(
            100.0,
            date(2023, 1, 1),
            date(2023, 3, 1),
            date(2023, 1, 1),
            1,
            1,
            0.1,
        );
        assert!(records.is_empty());
    }

    #[test]
    fn zero_billing_day_bills_on_the_first() {
        let records = compute_schedule(
            100.0,
            date(2022, 1, 1),
            date(2023, 1, 1),
            date(2023, 2, 28),
            0,
            1,
            0.0,
        );
        let dates: Vec<Date> = records.iter().map(|r| r.due_date).collect();
        assert_eq!(dates, vec![date(2023, 1, 1), date(2023, 2, 1)]);
    }

    #[test]
    fn opening_record_in_later_month_keeps_chronology() {
        // Lease starts in the window's third month, after the billing day.
        let records = compute_schedule(
            100.0,
            date(2023, 3, 20),
            date(2023, 1, 1),
            date(2023, 4, 30),
            15,
            1,
            0.0,
        );
        let summary: Vec<(Date, bool, ChargeKind)> = records
            .iter()
            .map(|r| (r.due_date, r.occupied, r.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                (date(2023, 1, 15), false, ChargeKind::Regular),
                (date(2023, 2, 15), false, ChargeKind::Regular),
                (date(2023, 3, 20), true, ChargeKind::Prorated),
                (date(2023, 4, 15), true, ChargeKind::Regular),
            ]
        );
        assert_eq!(records[2].amount, 83.33);
    }

    #[test]
    fn overflow_month_regular_record_is_skipped_without_window_lease() {
        // Lease starts on Feb 5 but before the window opens on Feb 10: no
        // opening record, and the lease month's clamped due date is still
        // treated as covered.
        let records = compute_schedule(
            100.0,
            date(2023, 2, 5),
            date(2023, 2, 10),
            date(2023, 3, 31),
            31,
            1,
            0.0,
        );
        assert_eq!(records, vec![BillingRecord::regular(true, 100.0, date(2023, 3, 31))]);
    }

    #[test]
    fn rate_state_starts_at_base_rate() {
        let s = RateState::new(250.0);
        assert_eq!(s.current_rate, 250.0);
        assert_eq!(s.previous_occupied, None);
    }
}
