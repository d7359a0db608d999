//! Periodic rate changes gated by occupancy.
//!
//! A change is *due* on every month whose distance from the reference month
//! is a positive multiple of the cadence.  A due change is *permitted* only
//! when it moves the rate in the direction the occupancy allows: increases
//! while occupied, decreases while vacant.  Permitted changes compound on the
//! running rate.

use rent_core::{Natural, Rate, Real};

/// Direction of an attempted rate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive factor.
    Increase,
    /// Negative factor.
    Decrease,
    /// Zero factor; never changes the rate.
    Hold,
}

/// A rate-change cadence and signed fractional factor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateChange {
    /// Months between permitted changes.  Zero disables changes.
    pub frequency_months: Natural,
    /// Signed fractional change (`0.1` = +10 %).
    pub factor: Rate,
}

impl RateChange {
    /// Create a rate-change rule.
    pub fn new(frequency_months: Natural, factor: Rate) -> Self {
        Self {
            frequency_months,
            factor,
        }
    }

    /// A rule that never changes the rate.
    pub fn none() -> Self {
        Self::new(1, 0.0)
    }

    /// The direction this rule pushes the rate.
    pub fn direction(&self) -> Direction {
        if self.factor > 0.0 {
            Direction::Increase
        } else if self.factor < 0.0 {
            Direction::Decrease
        } else {
            Direction::Hold
        }
    }

    /// Whether a change is due `months_since_base` months after the reference
    /// month.
    pub fn is_due(&self, months_since_base: i32) -> bool {
        months_since_base > 0
            && (months_since_base as i64)
                .checked_rem(self.frequency_months as i64)
                .is_some_and(|r| r == 0)
    }

    /// Whether a due change may be applied given the gating occupancy.
    pub fn is_permitted(&self, occupied: bool) -> bool {
        match self.direction() {
            Direction::Increase => occupied,
            Direction::Decrease => !occupied,
            Direction::Hold => false,
        }
    }

    /// The rate after one application of this change.
    pub fn apply(&self, rate: Real) -> Real {
        rate * (1.0 + self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cadence() {
        let every_three = RateChange::new(3, 0.1);
        let due: Vec<i32> = (0..10).filter(|m| every_three.is_due(*m)).collect();
        assert_eq!(due, vec![3, 6, 9]);
        assert!(!every_three.is_due(-3));
    }

    #[test]
    fn zero_frequency_is_never_due() {
        let r = RateChange::new(0, 0.1);
        assert!((0..24).all(|m| !r.is_due(m)));
    }

    #[test]
    fn occupancy_gate() {
        let up = RateChange::new(1, 0.1);
        let down = RateChange::new(1, -0.1);
        let flat = RateChange::none();
        assert!(up.is_permitted(true));
        assert!(!up.is_permitted(false));
        assert!(down.is_permitted(false));
        assert!(!down.is_permitted(true));
        assert!(!flat.is_permitted(true) && !flat.is_permitted(false));
        assert_eq!(flat.direction(), Direction::Hold);
    }

    #[test]
    fn compounding() {
        let up = RateChange::new(1, 0.1);
        assert_relative_eq!(up.apply(up.apply(100.0)), 121.0, epsilon = 1e-9);
        let down = RateChange::new(1, -0.1);
        assert_relative_eq!(down.apply(down.apply(100.0)), 81.0, epsilon = 1e-9);
    }
}
