use async_trait::async_trait;
use log::*;
use magicblock_config::RpcConfig;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::config::RpcSimulateTransactionConfig;
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey,
    transaction::Transaction,
};

use crate::{
    errors::{ProviderError, ProviderResult},
    Provider, SharedSigner, Simulate, SimulationResult,
};

/// Simulates transactions against a remote cluster via its JSON RPC
/// `simulateTransaction` method.
///
/// Each simulation is a single request. The node skips signature
/// verification and substitutes its latest blockhash, so transactions are
/// sent unsigned and signers are not needed.
pub struct RpcProvider {
    rpc_client: RpcClient,
    wallet: Pubkey,
}

impl RpcProvider {
    pub fn new(rpc_client: RpcClient, wallet: Pubkey) -> Self {
        Self { rpc_client, wallet }
    }

    pub fn from_config(config: &RpcConfig, wallet: Pubkey) -> Self {
        let rpc_client = RpcClient::new_with_commitment(
            config.remote.url().to_string(),
            config.commitment_config(),
        );
        Self::new(rpc_client, wallet)
    }

    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }
}

impl Provider for RpcProvider {
    fn wallet(&self) -> Pubkey {
        self.wallet
    }

    fn simulator(&self) -> Option<&dyn Simulate> {
        Some(self)
    }
}

#[async_trait]
impl Simulate for RpcProvider {
    async fn simulate(
        &self,
        transaction: Transaction,
        _signers: &[SharedSigner],
        commitment: Option<CommitmentConfig>,
    ) -> ProviderResult<Option<SimulationResult>> {
        let commitment =
            commitment.unwrap_or_else(|| self.rpc_client.commitment());
        let response = self
            .rpc_client
            .simulate_transaction_with_config(
                &transaction,
                RpcSimulateTransactionConfig {
                    sig_verify: false,
                    replace_recent_blockhash: true,
                    commitment: Some(commitment),
                    ..Default::default()
                },
            )
            .await
            .map_err(Box::new)?;

        let value = response.value;
        trace!(
            "Simulated at slot {}: err: {:?}, units: {:?}",
            response.context.slot,
            value.err,
            value.units_consumed
        );
        match value.err {
            Some(err) => Err(ProviderError::SimulationFailed {
                err,
                logs: value.logs.unwrap_or_default(),
            }),
            None => Ok(Some(SimulationResult {
                logs: value.logs,
                units_consumed: value.units_consumed,
            })),
        }
    }
}
