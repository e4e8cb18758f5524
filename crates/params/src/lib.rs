//! Protocol parameters for the ledger simulator.
//!
//! All fields have sensible defaults matching the simulated network's
//! mainnet-like values, so an empty config document yields a working
//! simulator.

use sandnet_acct_types::Amount;
use serde::Deserialize;

/// Default minimum fee per transaction, in microunits.
pub const DEFAULT_MIN_FEE: u64 = 1_000;

/// Default maximum number of transactions in one atomic group.
pub const DEFAULT_MAX_GROUP_SIZE: usize = 16;

/// What to do when an account opts into an asset or application it already
/// has a record for.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateOptIn {
    /// Duplicate opt-ins succeed as no-ops.
    #[default]
    Allow,
    /// Duplicate opt-ins abort the group.
    Reject,
}

/// Ambient configuration consumed by the group executor.
#[derive(Clone, Debug, Deserialize)]
pub struct ProtocolParams {
    /// Minimum fee per transaction; a group's declared fees must sum to at
    /// least `len × min_fee`.  Defaults to [`DEFAULT_MIN_FEE`].
    #[serde(default = "default_min_fee")]
    pub min_fee: u64,

    /// Maximum transactions per group.  Defaults to
    /// [`DEFAULT_MAX_GROUP_SIZE`].
    #[serde(default = "default_max_group_size")]
    pub max_group_size: usize,

    /// Duplicate opt-in policy.  Defaults to [`DuplicateOptIn::Allow`].
    #[serde(default)]
    pub duplicate_opt_in: DuplicateOptIn,

    /// Per-record minimum-balance reserve, in microunits.  When set, every
    /// account must keep `min_balance × (1 + holdings + app states)` after an
    /// opt-in.  Defaults to `None` (no reservation), the simulator's
    /// deliberate simplification of the real network's rule.
    #[serde(default)]
    pub min_balance: Option<u64>,
}

fn default_min_fee() -> u64 {
    DEFAULT_MIN_FEE
}

fn default_max_group_size() -> usize {
    DEFAULT_MAX_GROUP_SIZE
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            min_fee: DEFAULT_MIN_FEE,
            max_group_size: DEFAULT_MAX_GROUP_SIZE,
            duplicate_opt_in: DuplicateOptIn::default(),
            min_balance: None,
        }
    }
}

impl ProtocolParams {
    pub fn min_fee(&self) -> Amount {
        Amount::from(self.min_fee)
    }

    pub fn min_balance(&self) -> Option<Amount> {
        self.min_balance.map(Amount::from)
    }
}
