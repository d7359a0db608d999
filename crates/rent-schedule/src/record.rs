//! `BillingRecord` — one charge posted on one due date.

use rent_core::Amount;
use rent_time::Date;

/// Whether a record is the opening partial-period charge or a regular cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChargeKind {
    /// Partial-period charge dated at the lease start.
    Prorated,
    /// Charge on a regular (clamped) billing day.
    Regular,
}

/// A charge for one billing period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BillingRecord {
    /// `true` iff the due date is on or after the lease start.
    pub occupied: bool,
    /// The charge, already rounded for emission.
    pub amount: Amount,
    /// The date the charge is posted.
    pub due_date: Date,
    /// Opening prorated charge or regular cycle charge.
    pub kind: ChargeKind,
}

impl BillingRecord {
    /// A regular cycle charge.
    pub fn regular(occupied: bool, amount: Amount, due_date: Date) -> Self {
        Self {
            occupied,
            amount,
            due_date,
            kind: ChargeKind::Regular,
        }
    }

    /// The opening prorated charge.  The unit is leased from `lease_start`,
    /// so the record is always occupied.
    pub fn prorated(amount: Amount, lease_start: Date) -> Self {
        Self {
            occupied: true,
            amount,
            due_date: lease_start,
            kind: ChargeKind::Prorated,
        }
    }

    /// `true` when the unit was not yet leased on the due date.
    pub fn is_vacant(&self) -> bool {
        !self.occupied
    }

    /// Whether this charge has already been posted relative to `ref_date`.
    /// A charge due on `ref_date` has not yet occurred.
    pub fn has_occurred(&self, ref_date: Date) -> bool {
        self.due_date < ref_date
    }
}
