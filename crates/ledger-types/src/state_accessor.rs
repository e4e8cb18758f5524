use sandnet_acct_types::{Address, Amount};

use crate::{
    account::AccountState,
    coin::Coin,
    errors::{LedgerError, LedgerResult},
};

/// Opaque interface for manipulating ledger state.
///
/// This exists because the group executor runs the same transaction logic
/// against the committed ledger and against the speculative overlay it opens
/// for a group in progress.
pub trait StateAccessor {
    /// Gets a ref to an account, if it has ever been touched.
    fn account(&self, addr: Address) -> Option<&AccountState>;

    /// Gets a mut ref to an account, creating it with zero balance on first
    /// reference.
    fn account_mut(&mut self, addr: Address) -> &mut AccountState;

    /// Total fees collected into the fee sink so far.
    fn fees_collected(&self) -> Amount;

    /// Destroys a coin into the fee sink, keeping the running total so the
    /// conservation law stays checkable.
    fn collect_fee(&mut self, coin: Coin);

    /// Balance of an account, zero if it has never been touched.
    fn balance(&self, addr: Address) -> Amount {
        self.account(addr).map_or(Amount::ZERO, |a| a.balance())
    }

    /// Moves `amount` from `from` to `to`, collecting `fee` from `from` in
    /// the same step.
    ///
    /// Requires `from.balance >= amount + fee`; on failure nothing is
    /// mutated.  `to` is created with balance 0 if previously unseen.
    fn apply_transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        fee: Amount,
    ) -> LedgerResult<()> {
        let total = amount
            .checked_add(fee)
            .ok_or(LedgerError::BalanceOverflow)?;
        let coin = self.account_mut(from).take_balance(total)?;
        let (fee_coin, value_coin) = coin.split(fee);
        self.account_mut(to).add_balance(value_coin);
        self.collect_fee(fee_coin);
        Ok(())
    }

    /// Collects just a fee from `from`, for transaction kinds that move no
    /// value.  A zero fee consumes nothing and cannot fail.
    fn apply_fee_only(&mut self, from: Address, fee: Amount) -> LedgerResult<()> {
        let coin = self.account_mut(from).take_balance(fee)?;
        self.collect_fee(coin);
        Ok(())
    }
}
