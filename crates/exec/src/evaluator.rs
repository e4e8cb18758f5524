//! Contract evaluator collaborator seam.
//!
//! The executor treats the smart-contract machinery as an external verdict
//! source: it hands over the call and the caller's current local state, and
//! gets back accept-with-delta or reject.  Nothing about bytecode lives in
//! this crate.

use sandnet_acct_types::{Address, AppId};
use sandnet_ledger_types::{LocalState, StateValue};

/// Everything the evaluator sees for one application call.
#[derive(Debug)]
pub struct EvalContext<'a> {
    sender: Address,
    app: AppId,
    args: &'a [Vec<u8>],
    local: Option<&'a LocalState>,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        sender: Address,
        app: AppId,
        args: &'a [Vec<u8>],
        local: Option<&'a LocalState>,
    ) -> Self {
        Self {
            sender,
            app,
            args,
            local,
        }
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn app(&self) -> AppId {
        self.app
    }

    pub fn args(&self) -> &[Vec<u8>] {
        self.args
    }

    /// The caller's local state for this app, if it has opted in.
    pub fn local(&self) -> Option<&LocalState> {
        self.local
    }
}

/// Local-state writes an accepted call wants applied to the caller's record.
///
/// Clears run before writes so a delta can recycle a slot within one call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StateDelta {
    writes: Vec<(String, StateValue)>,
    clears: Vec<String>,
}

impl StateDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write(mut self, key: impl Into<String>, value: StateValue) -> Self {
        self.writes.push((key.into(), value));
        self
    }

    pub fn with_clear(mut self, key: impl Into<String>) -> Self {
        self.clears.push(key.into());
        self
    }

    pub fn writes(&self) -> &[(String, StateValue)] {
        &self.writes
    }

    pub fn clears(&self) -> &[String] {
        &self.clears
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.clears.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<(String, StateValue)>, Vec<String>) {
        (self.writes, self.clears)
    }
}

/// Verdict returned by the evaluator for one call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalOutcome {
    /// The call passed; apply this delta before the next transaction.
    Accept(StateDelta),
    /// The call failed; the whole group aborts.
    Reject(String),
}

/// External collaborator deciding application calls.
///
/// Implementations must be deterministic and side-effect-free: the executor
/// may invoke them for a group that ends up aborting, and the only channel
/// back into the ledger is the returned delta.
pub trait AppEvaluator {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalOutcome;
}
