//! Front door serializing group submissions against one ledger.

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use sandnet_acct_types::{Address, Amount};
use sandnet_ledger_types::{AccountState, StateAccessor};
use sandnet_params::ProtocolParams;
use sandnet_state::LedgerState;

use crate::{
    errors::{ExecError, ExecResult, GroupError},
    evaluator::AppEvaluator,
    executor::{CommitReceipt, GroupExecutor},
    registry::AppRegistry,
    txn::TxSpec,
};

/// Committed view of one account, cloned out from under the lock.
pub type AccountSnapshot = AccountState;

/// Owns a ledger and runs groups against it one at a time.
///
/// The ledger is a single shared mutable resource; the simulator holds a
/// writer lock for the full Validating+Applying span of each submission, so
/// concurrent submissions are serialized and never merged.  Reads go through
/// the same lock and therefore only ever observe committed state.
pub struct Simulator {
    state: Mutex<LedgerState>,
    params: ProtocolParams,
    registry: AppRegistry,
    evaluator: Arc<dyn AppEvaluator + Send + Sync>,
}

impl Simulator {
    pub fn new(
        params: ProtocolParams,
        registry: AppRegistry,
        evaluator: Arc<dyn AppEvaluator + Send + Sync>,
    ) -> Self {
        Self {
            state: Mutex::new(LedgerState::new()),
            params,
            registry,
            evaluator,
        }
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Validates and applies a group atomically, blocking until it reaches a
    /// terminal phase.
    pub fn execute_group(&self, txs: &[TxSpec]) -> Result<CommitReceipt, GroupError> {
        let mut state = self.state.lock();
        GroupExecutor::new(&mut state, &self.params, &self.registry, &*self.evaluator).execute(txs)
    }

    /// Committed state of an account, if it has ever been touched.
    pub fn get_account(&self, addr: Address) -> Option<AccountSnapshot> {
        self.state.lock().account(addr).cloned()
    }

    /// Committed balance of an account, zero if never touched.
    pub fn balance(&self, addr: Address) -> Amount {
        self.state.lock().balance(addr)
    }

    /// Mints value into an account, the simulator's stand-in for a funding
    /// transaction from outside the session.
    pub fn fund(&self, addr: Address, amount: Amount) -> ExecResult<()> {
        self.state
            .lock()
            .fund(addr, amount)
            .map_err(|e| ExecError::from_ledger(addr, e))
    }

    /// Total fees collected across all committed groups.
    pub fn fees_collected(&self) -> Amount {
        self.state.lock().fees_collected()
    }

    /// Sum of all balances plus collected fees; constant across group
    /// execution.
    pub fn total_value(&self) -> Amount {
        self.state.lock().total_value()
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("params", &self.params)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
