//! The atomic group executor.

use sandnet_acct_types::{Address, Amount, AppId};
use sandnet_ledger_types::StateAccessor;
use sandnet_params::ProtocolParams;
use sandnet_state::{LedgerState, SpeculativeState, WriteBatch};
use tracing::{debug, warn};

use crate::{
    errors::{ExecError, ExecResult, GroupError},
    evaluator::{AppEvaluator, EvalContext, EvalOutcome, StateDelta},
    fees::check_fee_pool,
    optin,
    registry::AppRegistry,
    txn::{TxKind, TxSpec},
};

/// Lifecycle of one group submission.
///
/// `Committed` and `Aborted` are terminal; no transition re-enters
/// `Validating` or `Applying` once left.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GroupPhase {
    Pending,
    Validating,
    Applying,
    Committed,
    Aborted,
}

impl GroupPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed | Self::Aborted)
    }

    fn can_advance_to(self, next: GroupPhase) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Validating)
                | (Self::Validating, Self::Applying)
                | (Self::Validating, Self::Aborted)
                | (Self::Applying, Self::Committed)
                | (Self::Applying, Self::Aborted)
        )
    }
}

/// Acknowledgement of a committed group, carrying the staged delta set that
/// was applied.
#[derive(Clone, Debug)]
pub struct CommitReceipt {
    batch: WriteBatch,
}

impl CommitReceipt {
    fn new(batch: WriteBatch) -> Self {
        Self { batch }
    }

    /// The full staged writes the commit applied.
    pub fn batch(&self) -> &WriteBatch {
        &self.batch
    }

    /// Accounts the group touched.
    pub fn touched_accounts(&self) -> impl Iterator<Item = Address> + '_ {
        self.batch.touched_accounts()
    }

    /// Fees the group collected into the fee sink.
    pub fn fees_collected(&self) -> Amount {
        self.batch.fees_collected().unwrap_or(Amount::ZERO)
    }
}

/// Executes one transaction group against a ledger, atomically.
///
/// Holds exclusive access to the ledger for the whole Validating+Applying
/// span; concurrent submissions must be serialized by the caller (the
/// [`Simulator`](crate::Simulator) front door does this).
#[derive(Debug)]
pub struct GroupExecutor<'a, E: AppEvaluator + ?Sized> {
    state: &'a mut LedgerState,
    params: &'a ProtocolParams,
    registry: &'a AppRegistry,
    evaluator: &'a E,
    phase: GroupPhase,
}

impl<'a, E: AppEvaluator + ?Sized> GroupExecutor<'a, E> {
    pub fn new(
        state: &'a mut LedgerState,
        params: &'a ProtocolParams,
        registry: &'a AppRegistry,
        evaluator: &'a E,
    ) -> Self {
        Self {
            state,
            params,
            registry,
            evaluator,
            phase: GroupPhase::Pending,
        }
    }

    pub fn phase(&self) -> GroupPhase {
        self.phase
    }

    fn advance(phase: &mut GroupPhase, next: GroupPhase) {
        debug_assert!(
            phase.can_advance_to(next),
            "executor: bad phase transition {phase:?} -> {next:?}"
        );
        *phase = next;
    }

    /// Runs the whole group to a terminal phase.
    ///
    /// On commit the new state is visible to subsequent reads; on abort the
    /// ledger is exactly as it was before the call, down to lazily created
    /// accounts.
    pub fn execute(mut self, txs: &[TxSpec]) -> Result<CommitReceipt, GroupError> {
        Self::advance(&mut self.phase, GroupPhase::Validating);
        if let Err(kind) = self.validate(txs) {
            Self::advance(&mut self.phase, GroupPhase::Aborted);
            warn!(%kind, "group rejected in validation");
            return Err(GroupError::structural(kind));
        }

        Self::advance(&mut self.phase, GroupPhase::Applying);
        let mut overlay = SpeculativeState::new(self.state);
        for (idx, tx) in txs.iter().enumerate() {
            if let Err(kind) =
                apply_tx(&mut overlay, tx, self.params, self.registry, self.evaluator)
            {
                let _ = overlay.discard();
                Self::advance(&mut self.phase, GroupPhase::Aborted);
                warn!(index = idx, %kind, "aborting group");
                return Err(GroupError::at(idx, kind));
            }
            debug!(index = idx, sender = %tx.sender(), "applied transaction");
        }

        let batch = overlay.commit();
        Self::advance(&mut self.phase, GroupPhase::Committed);
        debug!(
            accounts = batch.touched_accounts().count(),
            "group committed"
        );
        Ok(CommitReceipt::new(batch))
    }

    /// Group-wide preconditions: structure, then the fee pool.  Ledger
    /// untouched on failure.
    fn validate(&self, txs: &[TxSpec]) -> ExecResult<()> {
        if txs.is_empty() {
            return Err(ExecError::EmptyGroup);
        }
        if txs.len() > self.params.max_group_size {
            return Err(ExecError::GroupSizeExceeded {
                len: txs.len(),
                max: self.params.max_group_size,
            });
        }
        check_fee_pool(txs, self.params)
    }
}

/// Applies one transaction against the overlay, dispatching by kind.
fn apply_tx<S: StateAccessor, E: AppEvaluator + ?Sized>(
    state: &mut S,
    tx: &TxSpec,
    params: &ProtocolParams,
    registry: &AppRegistry,
    evaluator: &E,
) -> ExecResult<()> {
    let sender = tx.sender();
    match tx.kind() {
        TxKind::TransferValue { receiver, amount } => state
            .apply_transfer(sender, *receiver, *amount, tx.fee())
            .map_err(|e| ExecError::from_ledger(sender, e)),

        TxKind::OptInAsset { asset } => {
            state
                .apply_fee_only(sender, tx.fee())
                .map_err(|e| ExecError::from_ledger(sender, e))?;
            optin::opt_in_asset(state, sender, *asset, params)
        }

        TxKind::OptInApplication { app } => {
            state
                .apply_fee_only(sender, tx.fee())
                .map_err(|e| ExecError::from_ledger(sender, e))?;
            optin::opt_in_application(state, sender, *app, registry, params)
        }

        TxKind::CallApplication { app, args } => {
            state
                .apply_fee_only(sender, tx.fee())
                .map_err(|e| ExecError::from_ledger(sender, e))?;
            let local = state.account(sender).and_then(|a| a.app_state(*app));
            let ctx = EvalContext::new(sender, *app, args, local);
            match evaluator.evaluate(&ctx) {
                EvalOutcome::Reject(reason) => Err(ExecError::LogicReject(reason)),
                EvalOutcome::Accept(delta) => apply_delta(state, sender, *app, delta),
            }
        }
    }
}

/// Applies an accepted call's local-state delta to the caller's record.
///
/// An empty delta needs no record, so calls into apps the sender never opted
/// into succeed as long as they write nothing.
fn apply_delta<S: StateAccessor>(
    state: &mut S,
    sender: Address,
    app: AppId,
    delta: StateDelta,
) -> ExecResult<()> {
    if delta.is_empty() {
        return Ok(());
    }
    let Some(local) = state.account_mut(sender).app_state_mut(app) else {
        return Err(ExecError::NotOptedIn { sender, app });
    };
    let (writes, clears) = delta.into_parts();
    for key in &clears {
        local.remove(key);
    }
    for (key, value) in writes {
        local
            .put(app, key, value)
            .map_err(|e| ExecError::from_ledger(sender, e))?;
    }
    Ok(())
}
