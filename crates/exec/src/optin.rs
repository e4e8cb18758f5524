//! Opt-in record creation for assets and applications.

use sandnet_acct_types::{Address, AppId, AssetId};
use sandnet_ledger_types::StateAccessor;
use sandnet_params::{DuplicateOptIn, ProtocolParams};

use crate::{
    errors::{ExecError, ExecResult},
    registry::AppRegistry,
};

/// Creates the sender's holding record for an asset.
///
/// Idempotent under the default policy: a duplicate opt-in is a no-op, a
/// deliberate simplification of network semantics (the rejecting policy is
/// available via [`ProtocolParams::duplicate_opt_in`]).
pub(crate) fn opt_in_asset<S: StateAccessor>(
    state: &mut S,
    sender: Address,
    asset: AssetId,
    params: &ProtocolParams,
) -> ExecResult<()> {
    let created = state.account_mut(sender).add_holding(asset);
    if !created && params.duplicate_opt_in == DuplicateOptIn::Reject {
        return Err(ExecError::AlreadyOptedIn {
            sender,
            target: asset.into(),
        });
    }
    check_min_balance(state, sender, params)
}

/// Creates the sender's local-state record for an application, sized by its
/// registered schema.
pub(crate) fn opt_in_application<S: StateAccessor>(
    state: &mut S,
    sender: Address,
    app: AppId,
    registry: &AppRegistry,
    params: &ProtocolParams,
) -> ExecResult<()> {
    let schema = *registry.schema(app).ok_or(ExecError::UnknownApp(app))?;
    let created = state.account_mut(sender).open_app_state(app, schema);
    if !created && params.duplicate_opt_in == DuplicateOptIn::Reject {
        return Err(ExecError::AlreadyOptedIn {
            sender,
            target: app.into(),
        });
    }
    check_min_balance(state, sender, params)
}

/// Enforces the configured per-record reserve, if any.
///
/// Checked after the record is created, so the new record counts against the
/// reserve it introduces.
fn check_min_balance<S: StateAccessor>(
    state: &S,
    sender: Address,
    params: &ProtocolParams,
) -> ExecResult<()> {
    let Some(reserve) = params.min_balance() else {
        return Ok(());
    };
    let acct = state
        .account(sender)
        .expect("optin: account created by opt-in");
    let records = 1 + acct.num_holdings() + acct.num_app_states();
    let required = reserve
        .checked_mul(records as u64)
        .ok_or(ExecError::AmountOverflow)?;
    if acct.balance() < required {
        return Err(ExecError::BelowMinBalance {
            sender,
            required,
            available: acct.balance(),
        });
    }
    Ok(())
}
