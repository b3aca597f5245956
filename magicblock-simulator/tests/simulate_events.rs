use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use magicblock_config::{DecodePolicy, SimulatorConfig};
use magicblock_idl::{event_discriminator, EventCoder, Idl};
use magicblock_simulator::{
    Context, MethodArg, Program, Provider, ProviderStub, ProviderStubOutcome,
};
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Keypair,
    signer::Signer,
};
use stubs::logs::{
    consumed, emit, invoke, log, market_paused, order_placed, success,
};
use test_tools_core::{diagnostics::log_simulation_logs, init_logger};

mod stubs;

fn market_idl() -> Idl {
    Idl::try_from_json(include_str!("fixtures/market.json")).unwrap()
}

fn setup(idl: Idl, provider: &ProviderStub) -> Program {
    setup_with_config(idl, provider, &SimulatorConfig::default())
}

fn setup_with_config(
    idl: Idl,
    provider: &ProviderStub,
    config: &SimulatorConfig,
) -> Program {
    Program::new(
        idl.address().unwrap().unwrap(),
        idl,
        Arc::new(provider.clone()),
        config,
    )
}

fn initialize_args() -> Vec<MethodArg> {
    let ctx = Context::default()
        .with_account("authority", Pubkey::new_unique())
        .with_account("market", Pubkey::new_unique())
        .with_account("systemProgram", Pubkey::default());
    vec![MethodArg::value(30u16), ctx.into()]
}

/// Known discriminator, but the string body claims more bytes than follow.
fn truncated_market_paused() -> String {
    let mut bytes = event_discriminator("MarketPaused").to_vec();
    bytes.extend_from_slice(&[5, 0, 0, 0, b'a']);
    format!("Program data: {}", STANDARD.encode(bytes))
}

#[tokio::test]
async fn test_simulate_without_declared_events() {
    init_logger!();

    let mut idl = market_idl();
    idl.events.clear();
    let program_id = idl.address().unwrap().unwrap();
    let logs = vec![
        invoke(&program_id, 1),
        log("Instruction: Initialize"),
        // Looks like an emission but the program declares no events
        "Program data: AAAAAAAAAAA=".to_string(),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs.clone());
    let program = setup(idl, &provider);

    let res = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert!(res.events.is_empty());
    assert_eq!(res.raw, logs);
    assert_eq!(provider.simulate_count(), 1);
}

#[tokio::test]
async fn test_simulate_returns_raw_logs_unchanged() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let coder = EventCoder::new(&idl);
    let logs = vec![
        invoke(&program_id, 1),
        log("Instruction: Initialize"),
        emit(&coder, &market_paused("maintenance")),
        consumed(&program_id, 4_211),
        success(&program_id),
    ];
    let provider =
        ProviderStub::with_logs(logs.clone()).with_units_consumed(4_211);
    let program = setup(idl, &provider);

    let res = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();
    log_simulation_logs(&res.raw);

    assert_eq!(res.raw, logs);
    assert_eq!(res.events, vec![market_paused("maintenance")]);
    assert_eq!(res.units_consumed, Some(4_211));
}

#[tokio::test]
async fn test_simulate_preserves_emission_order() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let coder = EventCoder::new(&idl);
    let market = Pubkey::new_unique();
    let expected = vec![
        order_placed(market, "Bid", 10),
        market_paused("halted"),
        order_placed(market, "Ask", 12),
    ];
    let logs = vec![
        invoke(&program_id, 1),
        emit(&coder, &expected[0]),
        log("Instruction: PlaceOrder"),
        emit(&coder, &expected[1]),
        log("matching"),
        emit(&coder, &expected[2]),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs);
    let program = setup(idl, &provider);

    let res = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert_eq!(res.events, expected);
}

#[tokio::test]
async fn test_simulate_is_repeatable() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let coder = EventCoder::new(&idl);
    let logs = vec![
        invoke(&program_id, 1),
        emit(&coder, &order_placed(Pubkey::new_unique(), "Bid", 7)),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs);
    let program = setup(idl, &provider);

    let first = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();
    let second = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.simulate_count(), 2);
}

#[tokio::test]
async fn test_simulate_skips_malformed_emissions() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let coder = EventCoder::new(&idl);
    let logs = vec![
        invoke(&program_id, 1),
        emit(&coder, &market_paused("first")),
        "Program data: %%% not base64 %%%".to_string(),
        // Valid base64, unknown discriminator
        "Program data: CQkJCQkJCQkJCQ==".to_string(),
        truncated_market_paused(),
        emit(&coder, &market_paused("second")),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs);
    let program = setup(idl, &provider);

    let res = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert_eq!(
        res.events,
        vec![market_paused("first"), market_paused("second")]
    );
}

#[tokio::test]
async fn test_simulate_ignores_events_of_invoked_programs() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let other_program = Pubkey::new_unique();
    let coder = EventCoder::new(&idl);
    let logs = vec![
        invoke(&program_id, 1),
        invoke(&other_program, 2),
        emit(&coder, &market_paused("not ours")),
        success(&other_program),
        emit(&coder, &market_paused("ours")),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs);
    let program = setup(idl, &provider);

    let res = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert_eq!(res.events, vec![market_paused("ours")]);
}

#[tokio::test]
async fn test_simulate_forwards_signers_and_commitment() {
    init_logger!();

    let provider = ProviderStub::with_logs(vec![]);
    let program = setup(market_idl(), &provider);

    // Configured default
    program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();
    assert_eq!(
        provider.last_commitment(),
        Some(CommitmentConfig::confirmed())
    );

    // Overridden by the call context
    let authority = Arc::new(Keypair::new());
    let ctx = Context::default()
        .with_account("authority", authority.pubkey())
        .with_account("market", Pubkey::new_unique())
        .with_account("systemProgram", Pubkey::default())
        .with_signer(authority.clone())
        .with_commitment(CommitmentConfig::finalized());
    let res = program
        .simulate()
        .call("initialize", vec![MethodArg::value(30u16), ctx.into()])
        .await
        .unwrap();

    assert!(res.raw.is_empty());
    assert_eq!(
        provider.last_commitment(),
        Some(CommitmentConfig::finalized())
    );
    assert_eq!(provider.last_signers(), vec![authority.pubkey()]);

    let tx = provider.last_transaction().unwrap();
    assert_eq!(tx.message.account_keys[0], provider.wallet());
    assert_eq!(tx.message.instructions.len(), 1);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let coder = EventCoder::new(&idl);
    let logs = vec![
        invoke(&program_id, 1),
        emit(&coder, &market_paused("busy")),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs);
    let program = setup(idl, &provider);
    let simulate = program.simulate().get("initialize").unwrap();

    let (a, b, c) = tokio::join!(
        simulate(initialize_args()),
        simulate(initialize_args()),
        simulate(initialize_args()),
    );

    assert_eq!(a.unwrap().events, vec![market_paused("busy")]);
    assert_eq!(b.unwrap().events, vec![market_paused("busy")]);
    assert_eq!(c.unwrap().events, vec![market_paused("busy")]);
    assert_eq!(provider.simulate_count(), 3);
}

#[tokio::test]
async fn test_strict_policy_config_allows_clean_logs() {
    init_logger!();

    let idl = market_idl();
    let program_id = idl.address().unwrap().unwrap();
    let coder = EventCoder::new(&idl);
    let logs = vec![
        invoke(&program_id, 1),
        log("Instruction: Initialize"),
        emit(&coder, &market_paused("strict")),
        success(&program_id),
    ];
    let provider = ProviderStub::with_logs(logs);
    let mut config = SimulatorConfig::default();
    config.events.decode_policy = DecodePolicy::Strict;
    let program = setup_with_config(idl, &provider, &config);

    let res = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert_eq!(res.events, vec![market_paused("strict")]);
}

#[tokio::test]
async fn test_stub_outcome_can_change_between_calls() {
    init_logger!();

    let provider = ProviderStub::default();
    let program = setup(market_idl(), &provider);

    provider.set_outcome(ProviderStubOutcome::Logs(vec![log("one")]));
    let first = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();
    provider.set_outcome(ProviderStubOutcome::Logs(vec![log("two")]));
    let second = program
        .simulate()
        .call("initialize", initialize_args())
        .await
        .unwrap();

    assert_eq!(first.raw, vec![log("one")]);
    assert_eq!(second.raw, vec![log("two")]);
}
