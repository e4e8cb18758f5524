//! Atomic transaction-group executor.
//!
//! This crate implements the simulator's consensus-level accounting rules:
//! pooled-fee validation across a group, strictly ordered application of
//! balance and state mutations, and all-or-nothing commit semantics.
//!
//! ## Architecture
//!
//! - `fees`: aggregate fee-pool precondition, checked before any mutation
//! - `optin`: asset-holding and app-local-state record creation
//! - `evaluator`: the [`AppEvaluator`] collaborator seam for contract calls
//! - `executor`: the group state machine, applying transactions against a
//!   speculative overlay and committing or discarding it as a unit
//! - `simulator`: front door serializing group submissions behind a single
//!   writer lock

mod errors;
mod evaluator;
mod executor;
mod fees;
mod optin;
mod registry;
mod simulator;
mod txn;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

pub use errors::{ExecError, ExecResult, GroupError, OptInTarget};
pub use evaluator::{AppEvaluator, EvalContext, EvalOutcome, StateDelta};
pub use executor::{CommitReceipt, GroupExecutor, GroupPhase};
pub use fees::check_fee_pool;
pub use registry::AppRegistry;
pub use simulator::{AccountSnapshot, Simulator};
pub use txn::{TxKind, TxSpec};
