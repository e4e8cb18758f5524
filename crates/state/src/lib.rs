//! In-memory ledger state and the copy-on-write overlay used for group
//! isolation.
//!
//! [`LedgerState`] is the committed state readers observe.  The executor
//! never mutates it directly while a group is in flight; it opens a
//! [`SpeculativeState`] overlay, applies the whole group there, and either
//! drops the overlay (abort, base untouched) or folds the resulting
//! [`WriteBatch`] back in (commit, atomic from the reader's perspective).

mod batch;
mod ledger;
mod overlay;

pub use batch::WriteBatch;
pub use ledger::LedgerState;
pub use overlay::SpeculativeState;
