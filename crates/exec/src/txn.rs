use sandnet_acct_types::{Address, Amount, AppId, AssetId};

/// A proposed transaction: the signer, its explicitly declared fee, and the
/// kind-specific payload.
///
/// The declared fee may be zero; only the group's aggregate matters (see
/// [`check_fee_pool`](crate::check_fee_pool)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxSpec {
    sender: Address,
    fee: Amount,
    kind: TxKind,
}

/// Closed set of transaction kinds the executor dispatches over.
///
/// Adding a kind is a compile-time-checked extension; the executor matches
/// exhaustively.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TxKind {
    /// Move `amount` from the sender to `receiver`.
    TransferValue { receiver: Address, amount: Amount },

    /// Create the sender's holding record for `asset`.
    OptInAsset { asset: AssetId },

    /// Create the sender's local-state record for `app`.
    OptInApplication { app: AppId },

    /// Invoke `app` through the contract evaluator.
    CallApplication { app: AppId, args: Vec<Vec<u8>> },
}

impl TxSpec {
    pub fn new(sender: Address, fee: Amount, kind: TxKind) -> Self {
        Self { sender, fee, kind }
    }

    pub fn transfer(sender: Address, receiver: Address, amount: Amount, fee: Amount) -> Self {
        Self::new(sender, fee, TxKind::TransferValue { receiver, amount })
    }

    pub fn opt_in_asset(sender: Address, asset: AssetId, fee: Amount) -> Self {
        Self::new(sender, fee, TxKind::OptInAsset { asset })
    }

    pub fn opt_in_application(sender: Address, app: AppId, fee: Amount) -> Self {
        Self::new(sender, fee, TxKind::OptInApplication { app })
    }

    pub fn app_call(sender: Address, app: AppId, args: Vec<Vec<u8>>, fee: Amount) -> Self {
        Self::new(sender, fee, TxKind::CallApplication { app, args })
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }

    pub fn kind(&self) -> &TxKind {
        &self.kind
    }
}
