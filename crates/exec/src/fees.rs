//! Pooled-fee validation.

use sandnet_acct_types::Amount;
use sandnet_params::ProtocolParams;

use crate::{
    errors::{ExecError, ExecResult},
    txn::TxSpec,
};

/// Checks that a group's declared fees satisfy the protocol minimum in
/// aggregate.
///
/// The ledger pools fee obligations across a group so that any subset of
/// signers may subsidize the others; only `Σ fee_i >= n × min_fee` matters,
/// never which transaction carries which fee.  Pure precondition, independent
/// of execution order, no side effects.
pub fn check_fee_pool(txs: &[TxSpec], params: &ProtocolParams) -> ExecResult<()> {
    let required = params
        .min_fee()
        .checked_mul(txs.len() as u64)
        .ok_or(ExecError::AmountOverflow)?;
    let provided = txs
        .iter()
        .try_fold(Amount::ZERO, |acc, tx| acc.checked_add(tx.fee()))
        .ok_or(ExecError::AmountOverflow)?;

    if provided < required {
        return Err(ExecError::FeesNotEnough { required, provided });
    }
    Ok(())
}
