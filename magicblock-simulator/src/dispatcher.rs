use std::sync::Arc;

use log::*;
use magicblock_config::DecodePolicy;
use magicblock_idl::{errors::IdlResult, ErrorTable, EventCoder, EventRecord};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::{
    errors::{SimulatorError, SimulatorResult},
    split_args_and_context, ErrorTranslator, EventParser, MethodArg,
    MethodDescriptor, Provider, TransactionBuilder,
};

/// Outcome of a successful simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulateResponse {
    /// Events emitted by the program, in emission order.
    pub events: Vec<EventRecord>,
    /// Log lines exactly as returned by the provider.
    pub raw: Vec<String>,
    pub units_consumed: Option<u64>,
}

// -----------------
// SimulationDispatcher
// -----------------
/// Runs method calls of one program through build, simulate and decode.
/// Holds no per call state and is shared by all methods of the program.
pub struct SimulationDispatcher {
    program_id: Pubkey,
    provider: Arc<dyn Provider>,
    builder: Arc<dyn TransactionBuilder>,
    translator: Arc<dyn ErrorTranslator>,
    error_table: ErrorTable,
    event_coder: EventCoder,
    decode_policy: DecodePolicy,
    commitment: Option<CommitmentConfig>,
}

impl SimulationDispatcher {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        program_id: Pubkey,
        provider: Arc<dyn Provider>,
        builder: Arc<dyn TransactionBuilder>,
        translator: Arc<dyn ErrorTranslator>,
        error_table: ErrorTable,
        event_coder: EventCoder,
        decode_policy: DecodePolicy,
        commitment: Option<CommitmentConfig>,
    ) -> Self {
        Self {
            program_id,
            provider,
            builder,
            translator,
            error_table,
            event_coder,
            decode_policy,
            commitment,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub async fn simulate(
        &self,
        method: &MethodDescriptor,
        args: Vec<MethodArg>,
    ) -> SimulatorResult<SimulateResponse> {
        let transaction = self.builder.build(method, &args)?;
        let (_, ctx) = split_args_and_context(&method.args, &args)?;

        let simulator = self.provider.simulator().ok_or_else(|| {
            SimulatorError::UnsupportedOperation(
                "provider cannot simulate".to_string(),
            )
        })?;

        let commitment = ctx.options.commitment.or(self.commitment);
        debug!(
            "Simulating '{}' of {} with {} signer(s)",
            method.name,
            self.program_id,
            ctx.signers.len()
        );

        let result = match simulator
            .simulate(transaction, &ctx.signers, commitment)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                let err = self.translator.translate(err, &self.error_table);
                warn!("Simulation of '{}' failed: {err}", method.name);
                return Err(err);
            }
        };

        let result = result.ok_or(SimulatorError::SimulationUnavailable)?;
        let logs = result.logs.ok_or(SimulatorError::LogsNotFound)?;

        let events = self.decode_events(&logs)?;
        debug!(
            "Simulated '{}': {} log line(s), {} event(s)",
            method.name,
            logs.len(),
            events.len()
        );

        Ok(SimulateResponse {
            events,
            raw: logs,
            units_consumed: result.units_consumed,
        })
    }

    fn decode_events(
        &self,
        logs: &[String],
    ) -> SimulatorResult<Vec<EventRecord>> {
        let parser = EventParser::new(&self.program_id, &self.event_coder);
        match self.decode_policy {
            DecodePolicy::Skip => Ok(parser.parse_logs(logs).collect()),
            DecodePolicy::Strict => parser
                .parse_logs_checked(logs)
                .collect::<IdlResult<Vec<_>>>()
                .map_err(SimulatorError::EventDecode),
        }
    }
}
