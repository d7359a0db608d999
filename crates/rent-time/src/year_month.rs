//! `YearMonth` — a calendar month, and inclusive ranges of them.

use crate::date::Date;
use crate::month::Month;
use rent_core::errors::Result;

/// A calendar month of a given year.
///
/// Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: Month,
}

impl YearMonth {
    /// Create a year-month.
    pub fn new(year: u16, month: Month) -> Self {
        Self { year, month }
    }

    /// Create from a 1-based month number already known to be valid.
    pub(crate) fn from_parts(year: u16, month: u8) -> Self {
        Self {
            year,
            month: Month::from_number(month).unwrap_or(Month::January),
        }
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month of the year.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The following calendar month.
    pub fn succ(self) -> Self {
        match self.month.succ() {
            (month, false) => Self { year: self.year, month },
            (month, true) => Self {
                year: self.year + 1,
                month,
            },
        }
    }

    /// Signed number of months from `self` to `other`, ignoring days:
    /// `(other.year - self.year) * 12 + (other.month - self.month)`.
    pub fn months_until(self, other: YearMonth) -> i32 {
        (other.year as i32 - self.year as i32) * 12
            + (other.month.number() as i32 - self.month.number() as i32)
    }

    /// The first day of this month.
    pub fn first_day(self) -> Result<Date> {
        Date::from_ymd(self.year, self.month.number(), 1)
    }

    /// Iterate every month from `self` through `last`, inclusive.  Empty when
    /// `last` precedes `self`.
    pub fn through(self, last: YearMonth) -> MonthRange {
        MonthRange {
            next: self,
            last,
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

impl std::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "YearMonth({self})")
    }
}

/// Chronological iterator over an inclusive span of months.
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: YearMonth,
    last: YearMonth,
}

impl Iterator for MonthRange {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        if self.next > self.last {
            return None;
        }
        let current = self.next;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.next.months_until(self.last) + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MonthRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_until_ignores_days() {
        let a = YearMonth::new(2023, Month::November);
        let b = YearMonth::new(2024, Month::February);
        assert_eq!(a.months_until(b), 3);
        assert_eq!(b.months_until(a), -3);
        assert_eq!(a.months_until(a), 0);
    }

    #[test]
    fn range_crosses_year_end() {
        let months: Vec<String> = YearMonth::new(2023, Month::November)
            .through(YearMonth::new(2024, Month::February))
            .map(|m| m.to_string())
            .collect();
        assert_eq!(months, ["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn range_len() {
        let r = YearMonth::new(2023, Month::January).through(YearMonth::new(2023, Month::December));
        assert_eq!(r.len(), 12);
    }

    #[test]
    fn inverted_range_is_empty() {
        let r = YearMonth::new(2023, Month::March).through(YearMonth::new(2023, Month::February));
        assert_eq!(r.len(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn first_day() {
        let d = YearMonth::new(2024, Month::February).first_day().unwrap();
        assert_eq!(d, Date::from_ymd(2024, 2, 1).unwrap());
    }
}
