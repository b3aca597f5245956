use std::env;

use magicblock_config::{
    DecodePolicy, ProgramConfig, RemoteConfig, SimulatorConfig,
};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey};
use test_tools_core::paths::cargo_workspace_dir;
use url::Url;

#[test]
fn test_load_with_programs_resolves_idl_paths() {
    let workspace_dir = cargo_workspace_dir();
    let config_file_dir = workspace_dir
        .join("magicblock-config")
        .join("tests")
        .join("fixtures")
        .join("05_with-programs.toml");
    let config =
        SimulatorConfig::try_load_from_file(config_file_dir.to_str().unwrap())
            .unwrap();

    assert_eq!(config.rpc.remote, RemoteConfig::Development);
    assert_eq!(
        config.programs,
        vec![ProgramConfig {
            id: pubkey!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS"),
            idl: format!(
                "{}/../idls/market.json",
                config_file_dir.parent().unwrap().to_str().unwrap()
            ),
        }]
    );
}

#[test]
fn test_load_missing_file() {
    assert!(SimulatorConfig::try_load_from_file(
        "/definitely/not/here/simulator.toml"
    )
    .is_err());
}

#[test]
fn test_load_with_programs_envs_override() {
    let workspace_dir = cargo_workspace_dir();
    let config_file_dir = workspace_dir
        .join("magicblock-config")
        .join("tests")
        .join("fixtures")
        .join("05_with-programs.toml");

    // Values from the toml file should be overridden by the ENV variables
    env::set_var("SIMULATOR_RPC_URL", "http://rpc.example.com:9000");
    env::set_var("SIMULATOR_COMMITMENT", "processed");
    env::set_var("SIMULATOR_DECODE_POLICY", "strict");

    let config =
        SimulatorConfig::try_load_from_file(config_file_dir.to_str().unwrap())
            .unwrap()
            .override_from_envs();

    env::remove_var("SIMULATOR_RPC_URL");
    env::remove_var("SIMULATOR_COMMITMENT");
    env::remove_var("SIMULATOR_DECODE_POLICY");

    assert_eq!(
        config.rpc.remote,
        RemoteConfig::Custom(Url::parse("http://rpc.example.com:9000").unwrap())
    );
    assert_eq!(config.rpc.commitment, CommitmentLevel::Processed);
    assert_eq!(config.events.decode_policy, DecodePolicy::Strict);
    assert_eq!(config.programs.len(), 1);
}
