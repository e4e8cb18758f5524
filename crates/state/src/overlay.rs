use sandnet_acct_types::{Address, Amount};
use sandnet_ledger_types::{AccountState, Coin, StateAccessor};

use crate::{batch::WriteBatch, ledger::LedgerState};

/// Copy-on-write overlay over the committed ledger, the isolation boundary
/// for a group in progress.
///
/// Reads check the overlay first and fall through to the base.  The first
/// mutable access to an account clones it into the overlay; the base is never
/// written.  Dropping the overlay is a rollback; [`commit`] folds the staged
/// writes into the base atomically.
///
/// [`commit`]: SpeculativeState::commit
#[derive(Debug)]
pub struct SpeculativeState<'a> {
    base: &'a mut LedgerState,
    batch: WriteBatch,
}

impl<'a> SpeculativeState<'a> {
    pub fn new(base: &'a mut LedgerState) -> Self {
        Self {
            base,
            batch: WriteBatch::new(),
        }
    }

    /// The staged writes so far.
    pub fn batch(&self) -> &WriteBatch {
        &self.batch
    }

    /// Commits the staged writes into the base ledger, returning the applied
    /// batch for inspection.
    pub fn commit(self) -> WriteBatch {
        self.base.apply_batch(self.batch.clone());
        self.batch
    }

    /// Discards the staged writes, leaving the base ledger exactly as it was
    /// when the overlay was opened.
    pub fn discard(self) -> WriteBatch {
        self.batch
    }
}

impl StateAccessor for SpeculativeState<'_> {
    fn account(&self, addr: Address) -> Option<&AccountState> {
        // Check overlay first, fall through to base.
        self.batch.account(addr).or_else(|| self.base.account(addr))
    }

    fn account_mut(&mut self, addr: Address) -> &mut AccountState {
        if !self.batch.has_account(addr) {
            // CoW: clone from base on first write, or stage a fresh account.
            let state = self
                .base
                .account(addr)
                .cloned()
                .unwrap_or_else(AccountState::new_empty);
            self.batch.insert_account(addr, state);
        }
        self.batch
            .account_mut(addr)
            .expect("state: account staged above")
    }

    fn fees_collected(&self) -> Amount {
        self.batch
            .fees_collected()
            .unwrap_or_else(|| self.base.fees_collected())
    }

    fn collect_fee(&mut self, coin: Coin) {
        let total = self
            .fees_collected()
            .checked_add(coin.into_value())
            .expect("ledger: fee sink overflow");
        self.batch.set_fees_collected(total);
    }
}

#[cfg(test)]
mod tests {
    use sandnet_ledger_types::LedgerError;

    use super::*;

    fn addr(b: u8) -> Address {
        Address::new([b; 32])
    }

    fn funded_base() -> LedgerState {
        let mut base = LedgerState::new();
        base.fund(addr(1), Amount::from(10_000)).expect("test: fund");
        base
    }

    #[test]
    fn test_discard_leaves_base_untouched() {
        let mut base = funded_base();
        let before = base.clone();

        let mut spec = SpeculativeState::new(&mut base);
        spec.apply_transfer(addr(1), addr(2), Amount::from(5_000), Amount::from(1_000))
            .expect("test: speculative transfer");
        assert_eq!(spec.balance(addr(2)), Amount::from(5_000));
        let _ = spec.discard();

        assert_eq!(base.balance(addr(1)), before.balance(addr(1)));
        assert_eq!(base.balance(addr(2)), Amount::ZERO);
        assert_eq!(base.fees_collected(), before.fees_collected());
    }

    #[test]
    fn test_commit_folds_into_base() {
        let mut base = funded_base();

        let mut spec = SpeculativeState::new(&mut base);
        spec.apply_transfer(addr(1), addr(2), Amount::from(5_000), Amount::from(1_000))
            .expect("test: speculative transfer");
        let batch = spec.commit();

        assert!(batch.has_account(addr(1)));
        assert!(batch.has_account(addr(2)));
        assert_eq!(base.balance(addr(1)), Amount::from(4_000));
        assert_eq!(base.balance(addr(2)), Amount::from(5_000));
        assert_eq!(base.fees_collected(), Amount::from(1_000));
    }

    #[test]
    fn test_failed_step_stages_nothing_extra() {
        let mut base = funded_base();

        let mut spec = SpeculativeState::new(&mut base);
        let err = spec
            .apply_transfer(addr(3), addr(2), Amount::from(1), Amount::from(0))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));

        // The unfunded sender got staged by the balance probe, but with state
        // identical to an untouched account.
        assert_eq!(spec.balance(addr(3)), Amount::ZERO);
        assert_eq!(spec.balance(addr(1)), Amount::from(10_000));
    }
}
