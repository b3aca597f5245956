use std::{fs, sync::Arc};

use log::*;
use magicblock_config::{ProgramConfig, SimulatorConfig};
use magicblock_idl::{ErrorTable, EventCoder, Idl};
use solana_sdk::pubkey::Pubkey;

use crate::{
    errors::{SimulatorError, SimulatorResult},
    ErrorTranslator, IdlErrorTranslator, IdlTransactionBuilder,
    MethodDescriptor, Provider, SimulateNamespace, SimulationDispatcher,
    TransactionBuilder,
};

/// A program loaded from its IDL, exposing one simulate callable per
/// instruction.
#[derive(Debug)]
pub struct Program {
    program_id: Pubkey,
    idl: Idl,
    simulate: SimulateNamespace,
}

impl Program {
    pub fn new(
        program_id: Pubkey,
        idl: Idl,
        provider: Arc<dyn Provider>,
        config: &SimulatorConfig,
    ) -> Self {
        let builder =
            IdlTransactionBuilder::new(program_id, provider.wallet(), &idl);
        Self::with_collaborators(
            program_id,
            idl,
            provider,
            Arc::new(builder),
            Arc::new(IdlErrorTranslator),
            config,
        )
    }

    /// Same as [Self::new], with the program id taken from the IDL metadata.
    pub fn from_idl_address(
        idl: Idl,
        provider: Arc<dyn Provider>,
        config: &SimulatorConfig,
    ) -> SimulatorResult<Self> {
        let program_id = idl.address()?.ok_or_else(|| {
            SimulatorError::MissingProgramAddress(idl.name.clone())
        })?;
        Ok(Self::new(program_id, idl, provider, config))
    }

    /// Loads the IDL of a configured program from disk.
    pub fn from_program_config(
        program: &ProgramConfig,
        provider: Arc<dyn Provider>,
        config: &SimulatorConfig,
    ) -> SimulatorResult<Self> {
        let json = fs::read_to_string(&program.idl)?;
        let idl = Idl::try_from_json(&json)?;
        Ok(Self::new(program.id, idl, provider, config))
    }

    pub fn with_collaborators(
        program_id: Pubkey,
        idl: Idl,
        provider: Arc<dyn Provider>,
        builder: Arc<dyn TransactionBuilder>,
        translator: Arc<dyn ErrorTranslator>,
        config: &SimulatorConfig,
    ) -> Self {
        let dispatcher = Arc::new(SimulationDispatcher::new(
            program_id,
            provider,
            builder,
            translator,
            ErrorTable::new(&idl),
            EventCoder::new(&idl),
            config.events.decode_policy,
            Some(config.rpc.commitment_config()),
        ));
        let methods = idl
            .instructions
            .iter()
            .map(MethodDescriptor::from)
            .collect::<Vec<_>>();
        let simulate = SimulateNamespace::new(dispatcher, &methods);
        debug!(
            "Loaded program '{}' ({}) with {} method(s)",
            idl.name,
            program_id,
            simulate.len()
        );

        Self {
            program_id,
            idl,
            simulate,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn idl(&self) -> &Idl {
        &self.idl
    }

    pub fn simulate(&self) -> &SimulateNamespace {
        &self.simulate
    }
}
