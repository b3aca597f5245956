use std::{env, fmt, fs, path::Path, str::FromStr};

use errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentLevel;
use url::Url;

pub mod errors;
mod events;
mod program;
mod rpc;
pub use events::*;
pub use program::*;
pub use rpc::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(rename = "program")]
    pub programs: Vec<ProgramConfig>,
}

impl SimulatorConfig {
    pub fn try_load_from_file(path: &str) -> ConfigResult<Self> {
        let p = Path::new(path);
        let toml = fs::read_to_string(p)?;
        Self::try_load_from_toml(&toml, Some(p))
    }

    pub fn try_load_from_toml(
        toml: &str,
        config_path: Option<&Path>,
    ) -> ConfigResult<Self> {
        let mut config: Self = toml::from_str(toml)?;
        for program in &mut config.programs {
            // If we know the config path we can resolve relative IDL paths
            // Otherwise they have to be absolute.
            if let Some(config_path) = config_path {
                program.idl = config_path
                    .parent()
                    .ok_or_else(|| {
                        ConfigError::ConfigPathInvalid(format!(
                            "Config path: '{}' is missing parent dir",
                            config_path.display()
                        ))
                    })?
                    .join(&program.idl)
                    .to_str()
                    .ok_or_else(|| {
                        ConfigError::IdlPathInvalidUnicode(
                            program.id.to_string(),
                            program.idl.to_string(),
                        )
                    })?
                    .to_string()
            }
        }
        Ok(config)
    }

    pub fn override_from_envs(&self) -> SimulatorConfig {
        let mut config = self.clone();

        // -----------------
        // RPC
        // -----------------
        if let Ok(url) = env::var("SIMULATOR_RPC_URL") {
            config.rpc.remote = RemoteConfig::Custom(
                Url::parse(&url).unwrap_or_else(|err| {
                    panic!("Invalid 'SIMULATOR_RPC_URL' env var ({:?})", err)
                }),
            );
        }

        if let Ok(commitment) = env::var("SIMULATOR_COMMITMENT") {
            config.rpc.commitment = CommitmentLevel::from_str(&commitment)
                .unwrap_or_else(|err| {
                    panic!(
                        "Failed to parse 'SIMULATOR_COMMITMENT' as CommitmentLevel: {}: {:?}",
                        commitment, err
                    )
                });
        }

        // -----------------
        // Events
        // -----------------
        if let Ok(policy) = env::var("SIMULATOR_DECODE_POLICY") {
            config.events.decode_policy = policy.parse().unwrap_or_else(|err| {
                panic!(
                    "Failed to parse 'SIMULATOR_DECODE_POLICY' as DecodePolicy: {}: {:?}",
                    policy, err
                )
            });
        }

        config
    }
}

impl fmt::Display for SimulatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml = toml::to_string_pretty(self)
            .unwrap_or("Invalid Config".to_string());
        write!(f, "{}", toml)
    }
}
