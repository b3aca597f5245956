use std::{fs, sync::Arc};

use assert_matches::assert_matches;
use magicblock_config::SimulatorConfig;
use magicblock_simulator::{errors::SimulatorError, Program, ProviderStub};
use solana_sdk::pubkey;
use test_tools_core::init_logger;

const MARKET_IDL: &str = include_str!("fixtures/market.json");

#[test]
fn test_load_program_from_config_file() {
    init_logger!();

    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("idl")).unwrap();
    fs::write(dir.path().join("idl/market.json"), MARKET_IDL).unwrap();
    let config_path = dir.path().join("simulator.toml");
    fs::write(
        &config_path,
        r#"
[rpc]
remote = "development"

[[program]]
id = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS"
idl = "idl/market.json"
"#,
    )
    .unwrap();

    let config =
        SimulatorConfig::try_load_from_file(config_path.to_str().unwrap())
            .unwrap();
    let program = Program::from_program_config(
        &config.programs[0],
        Arc::new(ProviderStub::default()),
        &config,
    )
    .unwrap();

    assert_eq!(
        program.program_id(),
        &pubkey!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS")
    );
    assert_eq!(program.idl().name, "market");
    let mut names = program.simulate().names().collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, vec!["initialize", "placeOrder"]);
}

#[test]
fn test_load_program_with_missing_idl_file() {
    init_logger!();

    let dir = tempfile::tempdir().unwrap();
    let config = SimulatorConfig::try_load_from_toml(
        r#"
[[program]]
id = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS"
idl = "missing.json"
"#,
        Some(&dir.path().join("simulator.toml")),
    )
    .unwrap();

    let res = Program::from_program_config(
        &config.programs[0],
        Arc::new(ProviderStub::default()),
        &config,
    );

    assert_matches!(res, Err(SimulatorError::Io(_)));
}
