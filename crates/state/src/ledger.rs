use std::collections::BTreeMap;

use sandnet_acct_types::{Address, Amount};
use sandnet_ledger_types::{AccountState, Coin, LedgerError, LedgerResult, StateAccessor};

use crate::batch::WriteBatch;

/// The committed ledger: every account the session has touched, plus the fee
/// sink total.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerState {
    accounts: BTreeMap<Address, AccountState>,
    fees_collected: Amount,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints new value into an account, as an explicit funding transaction
    /// would.  Checked against the ledger-wide total so the sum of all live
    /// value always fits in an [`Amount`].
    pub fn fund(&mut self, addr: Address, amount: Amount) -> LedgerResult<()> {
        self.total_value()
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        let coin = Coin::mint_unchecked(amount);
        self.account_mut(addr).add_balance(coin);
        Ok(())
    }

    /// Sum of all balances plus collected fees.  Constant across group
    /// execution; only [`fund`](LedgerState::fund) moves it.
    pub fn total_value(&self) -> Amount {
        self.accounts
            .values()
            .map(|a| a.balance())
            .chain([self.fees_collected])
            .sum()
    }

    pub fn num_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Folds a finished group's staged writes into the committed state.
    pub(crate) fn apply_batch(&mut self, batch: WriteBatch) {
        let (accounts, fees_collected) = batch.into_parts();
        for (addr, state) in accounts {
            self.accounts.insert(addr, state);
        }
        if let Some(total) = fees_collected {
            self.fees_collected = total;
        }
    }
}

impl StateAccessor for LedgerState {
    fn account(&self, addr: Address) -> Option<&AccountState> {
        self.accounts.get(&addr)
    }

    fn account_mut(&mut self, addr: Address) -> &mut AccountState {
        self.accounts.entry(addr).or_default()
    }

    fn fees_collected(&self) -> Amount {
        self.fees_collected
    }

    fn collect_fee(&mut self, coin: Coin) {
        self.fees_collected = self
            .fees_collected
            .checked_add(coin.into_value())
            .expect("ledger: fee sink overflow");
    }
}
