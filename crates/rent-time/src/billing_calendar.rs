//! Calendar arithmetic used by billing: month lengths, clamped due dates,
//! and month-granularity distances.
//!
//! Month lengths here follow the configured [`LeapYearRule`], which by
//! default is the simplified rule.  Under that rule February 2000 has 28
//! billing days even though 2000-02-29 is a valid [`Date`]; a clamped due
//! date is therefore always a valid date.

use crate::date::Date;
use crate::month::Month;
use crate::year_month::YearMonth;
use rent_core::errors::Result;
use rent_core::LeapYearRule;

/// Month-length and due-date rules for one leap-year convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BillingCalendar {
    leap_year_rule: LeapYearRule,
}

impl BillingCalendar {
    /// Create a billing calendar using the given leap-year rule.
    pub fn new(leap_year_rule: LeapYearRule) -> Self {
        Self { leap_year_rule }
    }

    /// The leap-year rule in force.
    pub fn leap_year_rule(&self) -> LeapYearRule {
        self.leap_year_rule
    }

    /// Number of days in `month` of `year`: 28/29 for February, otherwise 30
    /// or 31 per the Gregorian pattern.
    pub fn last_day_of_month(&self, year: u16, month: Month) -> u8 {
        if month == Month::February {
            if self.leap_year_rule.is_leap(year) {
                29
            } else {
                28
            }
        } else if month.is_long() {
            31
        } else {
            30
        }
    }

    /// Billing day clamped into `[1, last_day_of_month]` for `month`.
    pub fn clamp_billing_day(&self, month: YearMonth, billing_day: u8) -> u8 {
        billing_day.clamp(1, self.last_day_of_month(month.year(), month.month()))
    }

    /// The due date in `month` for the nominal `billing_day`, clamped to the
    /// month's last day when the month is shorter.
    ///
    /// Fails only when `month` lies outside the supported date range.
    pub fn due_date_for(&self, month: YearMonth, billing_day: u8) -> Result<Date> {
        let day = self.clamp_billing_day(month, billing_day);
        month.first_day()?;
        Ok(Date::from_ymd_unchecked(month.year(), month.month().number(), day))
    }
}

/// Months from `a` to `b`, counting only year and month:
/// `(b.year - a.year) * 12 + (b.month - a.month)`.
pub fn months_between(a: Date, b: Date) -> i32 {
    a.year_month().months_until(b.year_month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn last_day_of_month_simplified() {
        let cal = BillingCalendar::default();
        assert_eq!(cal.last_day_of_month(2023, Month::January), 31);
        assert_eq!(cal.last_day_of_month(2023, Month::February), 28);
        assert_eq!(cal.last_day_of_month(2024, Month::February), 29);
        assert_eq!(cal.last_day_of_month(2000, Month::February), 28);
        assert_eq!(cal.last_day_of_month(2100, Month::February), 28);
        assert_eq!(cal.last_day_of_month(2023, Month::April), 30);
        assert_eq!(cal.last_day_of_month(2023, Month::December), 31);
    }

    #[test]
    fn last_day_of_month_gregorian() {
        let cal = BillingCalendar::new(LeapYearRule::Gregorian);
        assert_eq!(cal.last_day_of_month(2000, Month::February), 29);
        assert_eq!(cal.last_day_of_month(2100, Month::February), 28);
    }

    #[test]
    fn due_date_clamps_to_month_end() {
        let cal = BillingCalendar::default();
        let feb23 = YearMonth::new(2023, Month::February);
        let feb24 = YearMonth::new(2024, Month::February);
        assert_eq!(cal.due_date_for(feb23, 31).unwrap(), date(2023, 2, 28));
        assert_eq!(cal.due_date_for(feb24, 29).unwrap(), date(2024, 2, 29));
        assert_eq!(cal.due_date_for(feb24, 15).unwrap(), date(2024, 2, 15));
        assert_eq!(
            cal.due_date_for(YearMonth::new(2023, Month::April), 31).unwrap(),
            date(2023, 4, 30)
        );
    }

    #[test]
    fn due_date_in_2000_uses_simplified_february() {
        let cal = BillingCalendar::default();
        let feb00 = YearMonth::new(2000, Month::February);
        assert_eq!(cal.due_date_for(feb00, 29).unwrap(), date(2000, 2, 28));
        let greg = BillingCalendar::new(LeapYearRule::Gregorian);
        assert_eq!(greg.due_date_for(feb00, 29).unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn billing_day_zero_is_first_of_month() {
        let cal = BillingCalendar::default();
        let jan = YearMonth::new(2023, Month::January);
        assert_eq!(cal.due_date_for(jan, 0).unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn due_date_out_of_range() {
        let cal = BillingCalendar::default();
        assert!(cal.due_date_for(YearMonth::new(2200, Month::January), 1).is_err());
    }

    #[test]
    fn months_between_ignores_day_of_month() {
        assert_eq!(months_between(date(2023, 1, 31), date(2023, 2, 1)), 1);
        assert_eq!(months_between(date(2023, 1, 1), date(2023, 1, 31)), 0);
        assert_eq!(months_between(date(2022, 12, 15), date(2024, 1, 1)), 13);
        assert_eq!(months_between(date(2024, 1, 1), date(2023, 12, 1)), -1);
    }
}
