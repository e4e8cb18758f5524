//! Shared helpers for executor tests.

#![allow(unreachable_pub, reason = "test util module")]

use std::collections::BTreeMap;

use sandnet_acct_types::{Address, Amount, AppId};
use sandnet_params::ProtocolParams;
use sandnet_state::LedgerState;

use crate::{
    errors::GroupError,
    evaluator::{AppEvaluator, EvalContext, EvalOutcome, StateDelta},
    executor::{CommitReceipt, GroupExecutor},
    registry::AppRegistry,
    txn::TxSpec,
};

/// Short test address.
pub fn addr(b: u8) -> Address {
    Address::new([b; 32])
}

pub fn params_with_min_fee(min_fee: u64) -> ProtocolParams {
    ProtocolParams {
        min_fee,
        ..ProtocolParams::default()
    }
}

/// Ledger pre-funded from a balance table.
pub fn funded_state(balances: &[(Address, u64)]) -> LedgerState {
    let mut state = LedgerState::new();
    for (addr, amount) in balances {
        state
            .fund(*addr, Amount::from(*amount))
            .expect("test: fund");
    }
    state
}

/// Deterministic evaluator scripted per app id: listed apps reject or accept
/// with a canned delta, everything else accepts with an empty delta.
#[derive(Debug, Default)]
pub struct ScriptedEvaluator {
    rejects: BTreeMap<AppId, String>,
    deltas: BTreeMap<AppId, StateDelta>,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(mut self, app: AppId, reason: impl Into<String>) -> Self {
        self.rejects.insert(app, reason.into());
        self
    }

    pub fn accepting_with(mut self, app: AppId, delta: StateDelta) -> Self {
        self.deltas.insert(app, delta);
        self
    }
}

impl AppEvaluator for ScriptedEvaluator {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> EvalOutcome {
        if let Some(reason) = self.rejects.get(&ctx.app()) {
            return EvalOutcome::Reject(reason.clone());
        }
        EvalOutcome::Accept(self.deltas.get(&ctx.app()).cloned().unwrap_or_default())
    }
}

/// Evaluator that accepts every call with an empty delta.
pub fn accept_all() -> ScriptedEvaluator {
    ScriptedEvaluator::new()
}

/// Runs a group with an empty registry and the accept-all evaluator, for
/// tests that only move value.
pub fn run_transfers(
    state: &mut LedgerState,
    params: &ProtocolParams,
    txs: &[TxSpec],
) -> Result<CommitReceipt, GroupError> {
    let registry = AppRegistry::new();
    let evaluator = accept_all();
    GroupExecutor::new(state, params, &registry, &evaluator).execute(txs)
}
