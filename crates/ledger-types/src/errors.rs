use sandnet_acct_types::{Amount, AppId};
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors from low-level ledger mutation primitives.
///
/// These carry no account address; the executor attaches the offending
/// account and transaction index when it wraps them.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LedgerError {
    /// A withdrawal was larger than the account's balance.
    #[error("insufficient balance (needed {needed}, available {available})")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// A deposit would push a balance past the representable maximum.
    #[error("balance overflow")]
    BalanceOverflow,

    /// A local-state write would exceed the app schema's declared slot count.
    #[error("{app} local state is out of {kind} slots")]
    LocalStateFull { app: AppId, kind: &'static str },
}
