use std::{error, fmt};

use sandnet_acct_types::{Address, Amount, AppId, AssetId};
use sandnet_ledger_types::LedgerError;
use thiserror::Error;

pub type ExecResult<T> = Result<T, ExecError>;

/// What a duplicate opt-in was aimed at, for error reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OptInTarget {
    Asset(AssetId),
    App(AppId),
}

impl fmt::Display for OptInTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset(id) => write!(f, "{id}"),
            Self::App(id) => write!(f, "{id}"),
        }
    }
}

impl From<AssetId> for OptInTarget {
    fn from(value: AssetId) -> Self {
        Self::Asset(value)
    }
}

impl From<AppId> for OptInTarget {
    fn from(value: AppId) -> Self {
        Self::App(value)
    }
}

/// Rule violations detected while validating or applying a group.
///
/// Every variant reflects a defect in the proposed group, not a resource
/// hiccup; nothing here is retryable verbatim.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ExecError {
    /// Aggregate declared fees below the protocol minimum for the group.
    #[error("group fees below protocol minimum (required {required}, provided {provided})")]
    FeesNotEnough { required: Amount, provided: Amount },

    /// A sender cannot cover amount plus fee at its point of application.
    #[error("account {sender} cannot cover {needed} (available {available})")]
    InsufficientBalance {
        sender: Address,
        needed: Amount,
        available: Amount,
    },

    /// The contract evaluator rejected a call.
    #[error("application rejected call: {0}")]
    LogicReject(String),

    /// Duplicate opt-in under the rejecting policy.
    #[error("account {sender} already opted into {target}")]
    AlreadyOptedIn {
        sender: Address,
        target: OptInTarget,
    },

    /// A state delta targeted an app the sender never opted into.
    #[error("account {sender} is not opted into {app}")]
    NotOptedIn { sender: Address, app: AppId },

    /// Structural: the group is longer than the protocol maximum.
    #[error("group of {len} transactions exceeds maximum {max}")]
    GroupSizeExceeded { len: usize, max: usize },

    /// Structural: the group contains no transactions.
    #[error("group contains no transactions")]
    EmptyGroup,

    /// An opt-in left the account under its minimum-balance reserve.
    #[error("account {sender} below minimum balance (required {required}, available {available})")]
    BelowMinBalance {
        sender: Address,
        required: Amount,
        available: Amount,
    },

    /// An application id with no registered schema.
    #[error("unknown application {0}")]
    UnknownApp(AppId),

    /// A state delta exceeded the app schema's declared slot counts.
    #[error("local state of {sender} for {app} is out of {kind} slots")]
    SchemaViolation {
        sender: Address,
        app: AppId,
        kind: &'static str,
    },

    /// Amount arithmetic would wrap.
    #[error("amount arithmetic overflow")]
    AmountOverflow,
}

impl ExecError {
    /// Attaches the offending account to a low-level ledger error.
    pub(crate) fn from_ledger(sender: Address, err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { needed, available } => Self::InsufficientBalance {
                sender,
                needed,
                available,
            },
            LedgerError::BalanceOverflow => Self::AmountOverflow,
            LedgerError::LocalStateFull { app, kind } => Self::SchemaViolation { sender, app, kind },
        }
    }
}

/// Structured abort report for a whole group: the failing transaction's index
/// (where one applies) and the rule it violated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupError {
    index: Option<usize>,
    kind: ExecError,
}

impl GroupError {
    /// Failure attributable to a specific transaction.
    pub(crate) fn at(index: usize, kind: ExecError) -> Self {
        Self {
            index: Some(index),
            kind,
        }
    }

    /// Group-wide failure detected before any transaction was applied.
    pub(crate) fn structural(kind: ExecError) -> Self {
        Self { index: None, kind }
    }

    /// Index of the failing transaction, if the failure is attributable to
    /// one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn kind(&self) -> &ExecError {
        &self.kind
    }

    pub fn into_kind(self) -> ExecError {
        self.kind
    }
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "transaction {i}: {}", self.kind),
            None => write!(f, "group: {}", self.kind),
        }
    }
}

impl error::Error for GroupError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.kind)
    }
}
