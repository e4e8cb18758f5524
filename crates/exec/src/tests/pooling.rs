//! Fee-pooling scenarios.

use sandnet_acct_types::Amount;
use sandnet_ledger_types::StateAccessor;

use crate::{errors::ExecError, test_utils::*, txn::TxSpec};

const AMOUNT: u64 = 5_000;

#[test]
fn test_pooling_one_sponsor_commits() {
    // min_fee = 1000, group = [A->B fee 2000, B->C fee 0].
    let params = params_with_min_fee(1_000);
    let mut state = funded_state(&[(addr(1), AMOUNT + 2_000)]);

    let txs = vec![
        TxSpec::transfer(addr(1), addr(2), Amount::from(AMOUNT), Amount::from(2_000)),
        TxSpec::transfer(addr(2), addr(3), Amount::from(AMOUNT), Amount::ZERO),
    ];
    let receipt = run_transfers(&mut state, &params, &txs).expect("group commits");

    // A pays amount + 2000; B is a pass-through; C receives the amount.
    assert_eq!(state.balance(addr(1)), Amount::ZERO);
    assert_eq!(state.balance(addr(2)), Amount::ZERO);
    assert_eq!(state.balance(addr(3)), Amount::from(AMOUNT));
    assert_eq!(receipt.fees_collected(), Amount::from(2_000));
}

#[test]
fn test_pooling_underfunded_aborts_untouched() {
    // min_fee = 1000, group = [A->B fee 1000, B->C fee 0]: required 2000.
    let params = params_with_min_fee(1_000);
    let mut state = funded_state(&[(addr(1), AMOUNT * 2)]);
    let before = state.clone();

    let txs = vec![
        TxSpec::transfer(addr(1), addr(2), Amount::from(AMOUNT), Amount::from(1_000)),
        TxSpec::transfer(addr(2), addr(3), Amount::from(AMOUNT), Amount::ZERO),
    ];
    let err = run_transfers(&mut state, &params, &txs).unwrap_err();

    assert_eq!(err.index(), None);
    assert_eq!(
        *err.kind(),
        ExecError::FeesNotEnough {
            required: Amount::from(2_000),
            provided: Amount::from(1_000),
        }
    );
    assert_eq!(state, before);
}

#[test]
fn test_pooling_three_way_round_trip() {
    // min_fee = 1000, group = [A->B fee 3000, B->C fee 0, C->A fee 0].
    let params = params_with_min_fee(1_000);
    let mut state = funded_state(&[(addr(1), AMOUNT + 3_000)]);

    let txs = vec![
        TxSpec::transfer(addr(1), addr(2), Amount::from(AMOUNT), Amount::from(3_000)),
        TxSpec::transfer(addr(2), addr(3), Amount::from(AMOUNT), Amount::ZERO),
        TxSpec::transfer(addr(3), addr(1), Amount::from(AMOUNT), Amount::ZERO),
    ];
    run_transfers(&mut state, &params, &txs).expect("group commits");

    // The value round-trips back to A; only the pooled fee leaves.
    assert_eq!(state.balance(addr(1)), Amount::from(AMOUNT));
    assert_eq!(state.balance(addr(2)), Amount::ZERO);
    assert_eq!(state.balance(addr(3)), Amount::ZERO);
    assert_eq!(state.fees_collected(), Amount::from(3_000));
}

#[test]
fn test_zero_min_fee_allows_free_group() {
    let params = params_with_min_fee(0);
    let mut state = funded_state(&[(addr(1), AMOUNT)]);

    let txs = vec![TxSpec::transfer(
        addr(1),
        addr(2),
        Amount::from(AMOUNT),
        Amount::ZERO,
    )];
    run_transfers(&mut state, &params, &txs).expect("free group commits");
    assert_eq!(state.fees_collected(), Amount::ZERO);
}
