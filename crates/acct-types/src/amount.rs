use std::{fmt, iter::Sum};

use crate::impl_quantity_newtype;

type RawAmount = u64;

/// An amount of value in the smallest currency denomination.
///
/// All arithmetic on amounts is checked; a computation that would wrap is a
/// failure of the operation performing it, never silent.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Amount(RawAmount);

impl_quantity_newtype!(Amount => RawAmount);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u64) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sum for Amount {
    /// Sums amounts, saturating at the maximum representable value.
    ///
    /// Callers that must detect overflow should fold with
    /// [`checked_add`](Amount::checked_add) instead.
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| {
            acc.checked_add(a).unwrap_or(Amount(RawAmount::MAX))
        })
    }
}
