//! Account state model and ledger access traits.
//!
//! This crate defines the data the simulated ledger holds for each account
//! (balance, asset holdings, per-application local state) together with the
//! [`StateAccessor`] trait the executor manipulates it through. Value moves
//! between accounts only as [`Coin`]s, so accounting bugs surface as panics
//! rather than silently minted or destroyed funds.

mod account;
mod coin;
mod errors;
mod state_accessor;

pub use account::{AccountState, Holding, LocalState, StateValue};
pub use coin::Coin;
pub use errors::{LedgerError, LedgerResult};
pub use state_accessor::StateAccessor;
