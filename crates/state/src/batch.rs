use std::collections::BTreeMap;

use sandnet_acct_types::{Address, Amount};
use sandnet_ledger_types::AccountState;

/// Staged writes accumulated while executing a group speculatively.
///
/// This is a sparse layer over the committed state: presence of an account
/// here means the group touched it.  The whole batch is inspectable before
/// commit and applied as a unit, so readers see all of a group's effects or
/// none of them.
#[derive(Clone, Debug, Default)]
pub struct WriteBatch {
    /// Accounts touched by the group, in full post-group form.
    accounts: BTreeMap<Address, AccountState>,

    /// Fee sink total override.  `None` means the group collected no fees.
    fees_collected: Option<Amount>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an account is present in the overlay.
    pub fn has_account(&self, addr: Address) -> bool {
        self.accounts.contains_key(&addr)
    }

    pub fn account(&self, addr: Address) -> Option<&AccountState> {
        self.accounts.get(&addr)
    }

    pub(crate) fn account_mut(&mut self, addr: Address) -> Option<&mut AccountState> {
        self.accounts.get_mut(&addr)
    }

    pub(crate) fn insert_account(&mut self, addr: Address, state: AccountState) {
        self.accounts.insert(addr, state);
    }

    /// Addresses of all accounts the group touched.
    pub fn touched_accounts(&self) -> impl Iterator<Item = Address> + '_ {
        self.accounts.keys().copied()
    }

    pub fn fees_collected(&self) -> Option<Amount> {
        self.fees_collected
    }

    pub(crate) fn set_fees_collected(&mut self, total: Amount) {
        self.fees_collected = Some(total);
    }

    pub(crate) fn into_parts(self) -> (BTreeMap<Address, AccountState>, Option<Amount>) {
        (self.accounts, self.fees_collected)
    }
}
