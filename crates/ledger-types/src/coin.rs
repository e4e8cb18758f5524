//! Linear value tokens that turn bookkeeping mistakes into panics.

use std::{fmt, mem};

use sandnet_acct_types::Amount;

/// A quantity of value in flight between two ledger slots.
///
/// Coins cannot be cloned and refuse to be dropped; the only exits are
/// [`split`](Coin::split), which conserves value, and
/// [`into_value`](Coin::into_value), which hands the amount back to a caller
/// that is about to deposit it somewhere.  Code that loses track of a coin
/// panics instead of silently minting or burning funds.
pub struct Coin(Amount);

impl Coin {
    /// Conjures a coin out of thin air.
    ///
    /// Only balance withdrawals and explicit minting should call this; every
    /// other path must obtain coins by moving existing ones.
    pub fn mint_unchecked(value: Amount) -> Self {
        Self(value)
    }

    /// The value this coin carries.
    pub fn value(&self) -> Amount {
        self.0
    }

    /// Splits off `part`, returning it alongside the remainder.
    ///
    /// # Panics
    ///
    /// If `part` exceeds this coin's value.  Callers withdraw the full amount
    /// up front, so a short coin here is a bookkeeping bug.
    pub fn split(self, part: Amount) -> (Coin, Coin) {
        // Disarm the drop guard before the subtraction so a bad split panics
        // once, not again during unwind.
        let value = self.into_value();
        let rest = value.checked_sub(part).expect("coin: split exceeds value");
        (Coin(part), Coin(rest))
    }

    /// Disarms the coin and surrenders its value.
    ///
    /// The caller takes over responsibility for conserving the amount.
    pub fn into_value(self) -> Amount {
        let value = self.0;
        // Coin holds no resources beyond the drop guard.
        mem::forget(self);
        value
    }
}

impl Drop for Coin {
    fn drop(&mut self) {
        panic!("coin: leaked {} microunits", self.0);
    }
}

impl fmt::Debug for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coin").field(&self.0).finish()
    }
}
