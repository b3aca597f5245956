use std::fmt;

use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize, Serialize,
};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use url::Url;

const DEVNET_URL: &str = "https://api.devnet.solana.com";
const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com";
const TESTNET_URL: &str = "https://api.testnet.solana.com";
const DEVELOPMENT_URL: &str = "http://127.0.0.1:8899";

// -----------------
// RpcConfig
// -----------------
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RpcConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Commitment used for simulations that don't request one explicitly.
    #[serde(default = "default_commitment")]
    pub commitment: CommitmentLevel,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            commitment: default_commitment(),
        }
    }
}

impl RpcConfig {
    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment,
        }
    }
}

fn default_commitment() -> CommitmentLevel {
    CommitmentLevel::Confirmed
}

// -----------------
// RemoteConfig
// -----------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteConfig {
    #[default]
    Devnet,
    #[serde(alias = "mainnet-beta")]
    Mainnet,
    Testnet,
    #[serde(alias = "local")]
    #[serde(alias = "localhost")]
    Development,
    #[serde(untagged, deserialize_with = "deserialize_url")]
    Custom(Url),
}

impl RemoteConfig {
    pub fn url(&self) -> Url {
        let known = match self {
            RemoteConfig::Devnet => DEVNET_URL,
            RemoteConfig::Mainnet => MAINNET_URL,
            RemoteConfig::Testnet => TESTNET_URL,
            RemoteConfig::Development => DEVELOPMENT_URL,
            RemoteConfig::Custom(url) => return url.clone(),
        };
        // The cluster URLs above are constants and always parse
        Url::parse(known).unwrap()
    }
}

pub fn deserialize_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    struct UrlVisitor;

    impl Visitor<'_> for UrlVisitor {
        type Value = Url;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a valid URL string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Url, E>
        where
            E: de::Error,
        {
            Url::parse(value).map_err(|e| {
                // The error returned here by serde is a bit unhelpful so we help out
                // by logging a bit more information.
                eprintln!(
                    "RemoteConfig encountered invalid URL '{value}', err: ({e}).",
                );
                de::Error::custom(e)
            })
        }
    }

    deserializer.deserialize_str(UrlVisitor)
}
