use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig, pubkey::Pubkey,
    transaction::Transaction,
};

use crate::{errors::ProviderResult, SharedSigner};

/// Raw outcome of a simulation as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationResult {
    pub logs: Option<Vec<String>>,
    pub units_consumed: Option<u64>,
}

#[async_trait]
pub trait Simulate: Send + Sync {
    /// Executes `transaction` against the cluster without persisting any
    /// state. `None` means the cluster could not produce a result at all.
    async fn simulate(
        &self,
        transaction: Transaction,
        signers: &[SharedSigner],
        commitment: Option<CommitmentConfig>,
    ) -> ProviderResult<Option<SimulationResult>>;
}

pub trait Provider: Send + Sync {
    /// Fee payer of the transactions built for this provider.
    fn wallet(&self) -> Pubkey;

    /// Simulation capability, not every provider has one.
    fn simulator(&self) -> Option<&dyn Simulate>;
}
