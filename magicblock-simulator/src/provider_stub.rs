use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    transaction::{Transaction, TransactionError},
};

use crate::{
    errors::{ProviderError, ProviderResult},
    Provider, SharedSigner, Simulate, SimulationResult,
};

#[derive(Debug, Clone)]
pub enum ProviderStubOutcome {
    Logs(Vec<String>),
    NoLogs,
    NoResult,
    Failed {
        err: TransactionError,
        logs: Vec<String>,
    },
    Other(String),
}

#[derive(Debug, Default)]
struct ProviderStubCalls {
    count: u64,
    last_commitment: Option<CommitmentConfig>,
    last_signers: Vec<Pubkey>,
    last_transaction: Option<Transaction>,
}

#[derive(Debug, Clone)]
pub struct ProviderStub {
    wallet: Pubkey,
    can_simulate: bool,
    outcome: Arc<RwLock<ProviderStubOutcome>>,
    units_consumed: Option<u64>,
    calls: Arc<RwLock<ProviderStubCalls>>,
}

impl Default for ProviderStub {
    fn default() -> Self {
        Self {
            wallet: Pubkey::new_unique(),
            can_simulate: true,
            outcome: Arc::new(RwLock::new(ProviderStubOutcome::NoLogs)),
            units_consumed: None,
            calls: Default::default(),
        }
    }
}

impl ProviderStub {
    pub fn with_logs(logs: Vec<String>) -> Self {
        let stub = Self::default();
        stub.set_outcome(ProviderStubOutcome::Logs(logs));
        stub
    }

    /// A provider that only knows its wallet and cannot simulate.
    pub fn without_simulation() -> Self {
        Self {
            can_simulate: false,
            ..Default::default()
        }
    }

    pub fn with_units_consumed(mut self, units: u64) -> Self {
        self.units_consumed = Some(units);
        self
    }

    pub fn set_outcome(&self, outcome: ProviderStubOutcome) {
        *self.outcome.write().unwrap() = outcome;
    }

    pub fn simulate_count(&self) -> u64 {
        self.calls.read().unwrap().count
    }

    pub fn last_commitment(&self) -> Option<CommitmentConfig> {
        self.calls.read().unwrap().last_commitment
    }

    pub fn last_signers(&self) -> Vec<Pubkey> {
        self.calls.read().unwrap().last_signers.clone()
    }

    pub fn last_transaction(&self) -> Option<Transaction> {
        self.calls.read().unwrap().last_transaction.clone()
    }
}

impl Provider for ProviderStub {
    fn wallet(&self) -> Pubkey {
        self.wallet
    }

    fn simulator(&self) -> Option<&dyn Simulate> {
        if self.can_simulate {
            Some(self)
        } else {
            None
        }
    }
}

#[async_trait]
impl Simulate for ProviderStub {
    async fn simulate(
        &self,
        transaction: Transaction,
        signers: &[SharedSigner],
        commitment: Option<CommitmentConfig>,
    ) -> ProviderResult<Option<SimulationResult>> {
        {
            let mut calls = self.calls.write().unwrap();
            calls.count += 1;
            calls.last_commitment = commitment;
            calls.last_signers =
                signers.iter().map(|signer| signer.pubkey()).collect();
            calls.last_transaction = Some(transaction);
        }

        match self.outcome.read().unwrap().clone() {
            ProviderStubOutcome::Logs(logs) => Ok(Some(SimulationResult {
                logs: Some(logs),
                units_consumed: self.units_consumed,
            })),
            ProviderStubOutcome::NoLogs => Ok(Some(SimulationResult {
                logs: None,
                units_consumed: self.units_consumed,
            })),
            ProviderStubOutcome::NoResult => Ok(None),
            ProviderStubOutcome::Failed { err, logs } => {
                Err(ProviderError::SimulationFailed { err, logs })
            }
            ProviderStubOutcome::Other(msg) => Err(ProviderError::Other(msg)),
        }
    }
}
