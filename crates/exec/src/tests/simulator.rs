use std::{sync::Arc, thread};

use sandnet_acct_types::Amount;
use sandnet_params::ProtocolParams;

use crate::{
    errors::ExecError,
    registry::AppRegistry,
    simulator::Simulator,
    test_utils::{accept_all, addr, params_with_min_fee},
    txn::TxSpec,
};

fn simple_simulator(min_fee: u64) -> Simulator {
    Simulator::new(
        params_with_min_fee(min_fee),
        AppRegistry::new(),
        Arc::new(accept_all()),
    )
}

#[test]
fn test_simulator_end_to_end() {
    let sim = simple_simulator(1_000);
    sim.fund(addr(1), Amount::from(100_000)).expect("fund");

    let receipt = sim
        .execute_group(&[TxSpec::transfer(
            addr(1),
            addr(2),
            Amount::from(40_000),
            Amount::from(1_000),
        )])
        .expect("commit");

    assert_eq!(receipt.fees_collected(), Amount::from(1_000));
    assert_eq!(sim.balance(addr(1)), Amount::from(59_000));
    assert_eq!(sim.balance(addr(2)), Amount::from(40_000));
    assert_eq!(sim.fees_collected(), Amount::from(1_000));
    assert_eq!(sim.total_value(), Amount::from(100_000));
}

#[test]
fn test_simulator_rejected_group_invisible() {
    let sim = simple_simulator(1_000);
    sim.fund(addr(1), Amount::from(5_000)).expect("fund");

    sim.execute_group(&[TxSpec::transfer(
        addr(1),
        addr(2),
        Amount::from(50_000),
        Amount::from(1_000),
    )])
    .unwrap_err();

    assert_eq!(sim.balance(addr(1)), Amount::from(5_000));
    assert!(sim.get_account(addr(2)).is_none());
    assert_eq!(sim.fees_collected(), Amount::ZERO);
}

#[test]
fn test_simulator_serializes_concurrent_groups() {
    let sim = simple_simulator(0);
    let accounts: Vec<_> = (0..4u8).map(addr).collect();
    for a in &accounts {
        sim.fund(*a, Amount::from(10_000)).expect("fund");
    }
    let total = sim.total_value();

    // Hammer the ledger from several threads; every group either commits in
    // full or leaves no trace, so the total can never drift.
    let sim = &sim;
    thread::scope(|s| {
        for (i, from) in accounts.iter().copied().enumerate() {
            let to = accounts[(i + 1) % accounts.len()];
            s.spawn(move || {
                for _ in 0..50 {
                    let _ = sim.execute_group(&[TxSpec::transfer(
                        from,
                        to,
                        Amount::from(100),
                        Amount::ZERO,
                    )]);
                }
            });
        }
    });

    assert_eq!(sim.total_value(), total);
    assert_eq!(sim.fees_collected(), Amount::ZERO);
}

#[test]
fn test_simulator_registry_threaded_through() {
    let mut registry = AppRegistry::new();
    let app = registry.register(sandnet_acct_types::StateSchema::new(1, 0));

    let sim = Simulator::new(ProtocolParams::default(), registry, Arc::new(accept_all()));
    sim.fund(addr(1), Amount::from(100_000)).expect("fund");

    sim.execute_group(&[TxSpec::opt_in_application(
        addr(1),
        app,
        Amount::from(1_000),
    )])
    .expect("opt in");

    // Second opt-in under the default Allow policy is a no-op commit.
    sim.execute_group(&[TxSpec::opt_in_application(
        addr(1),
        app,
        Amount::from(1_000),
    )])
    .expect("idempotent opt in");

    let acct = sim.get_account(addr(1)).expect("account");
    assert_eq!(acct.num_app_states(), 1);
    assert_eq!(sim.fees_collected(), Amount::from(2_000));
}

#[test]
fn test_simulator_unknown_app_opt_in_fails() {
    let sim = simple_simulator(0);
    sim.fund(addr(1), Amount::from(10_000)).expect("fund");

    let err = sim
        .execute_group(&[TxSpec::opt_in_application(
            addr(1),
            sandnet_acct_types::AppId::new(9),
            Amount::ZERO,
        )])
        .unwrap_err();
    assert!(matches!(err.kind(), ExecError::UnknownApp(_)));
}
