use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use magicblock_simulator::{
    errors::{SimulatorError, SimulatorResult},
    MethodArg, MethodDescriptor, TransactionBuilder,
};
use solana_sdk::transaction::Transaction;

/// Rejects every call, counting how often it was asked to build.
#[derive(Debug, Clone, Default)]
pub struct RejectingTransactionBuilderStub {
    build_count: Arc<AtomicU64>,
}

impl RejectingTransactionBuilderStub {
    pub fn build_count(&self) -> u64 {
        self.build_count.load(Ordering::Relaxed)
    }
}

impl TransactionBuilder for RejectingTransactionBuilderStub {
    fn build(
        &self,
        method: &MethodDescriptor,
        _args: &[MethodArg],
    ) -> SimulatorResult<Transaction> {
        self.build_count.fetch_add(1, Ordering::Relaxed);
        Err(SimulatorError::MalformedArguments(format!(
            "'{}' rejected by stub",
            method.name
        )))
    }
}
