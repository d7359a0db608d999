//! Rounding conventions for monetary amounts.
//!
//! Amounts are rounded only at the point a record is emitted; running rates
//! keep full precision.

use crate::Real;

/// Rounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// No rounding; the value is returned unchanged.
    None,
    /// Round up (ceiling towards positive infinity).
    Up,
    /// Round down (floor towards negative infinity).
    Down,
    /// Round to nearest, ties away from zero.
    #[default]
    Closest,
    /// Round towards zero (truncation).
    Floor,
    /// Round away from zero.
    Ceiling,
}

impl Rounding {
    /// Round `value` to `precision` decimal places with this convention.
    pub fn apply(self, value: Real, precision: i32) -> Real {
        round(value, precision, self)
    }
}

/// Round `value` to `precision` decimal places using the given convention.
///
/// The value is scaled by `10^precision`, rounded to an integer, and scaled
/// back, so `round(46.666…, 2, Closest)` is `46.67` and
/// `round(-0.125, 2, Closest)` is `-0.13`.
pub fn round(value: Real, precision: i32, convention: Rounding) -> Real {
    if matches!(convention, Rounding::None) || !value.is_finite() {
        return value;
    }
    let mult = 10_f64.powi(precision);
    let scaled = value * mult;
    let rounded = match convention {
        Rounding::None => scaled,
        Rounding::Up => scaled.ceil(),
        Rounding::Down => scaled.floor(),
        Rounding::Closest => scaled.round(),
        Rounding::Floor => scaled.trunc(),
        Rounding::Ceiling => {
            if scaled >= 0.0 {
                scaled.ceil()
            } else {
                scaled.floor()
            }
        }
    };
    rounded / mult
}
