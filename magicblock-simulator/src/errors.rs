use magicblock_idl::errors::IdlError;
use solana_rpc_client_api::client_error::Error as ClientError;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

pub type SimulatorResult<T> = std::result::Result<T, SimulatorError>;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("UnsupportedOperation: {0}")]
    UnsupportedOperation(String),

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("UnknownError: {0}")]
    Unknown(#[source] ProviderError),

    #[error("unable to simulate transaction")]
    SimulationUnavailable,

    #[error("simulated logs not found")]
    LogsNotFound,

    #[error("MalformedArguments: {0}")]
    MalformedArguments(String),

    #[error("UnknownMethod '{0}'")]
    UnknownMethod(String),

    #[error("EventDecode: {0}")]
    EventDecode(#[source] IdlError),

    #[error("IdlError: {0}")]
    Idl(#[from] IdlError),

    #[error("IDL of '{0}' does not declare the program address")]
    MissingProgramAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// -----------------
// ProgramError
// -----------------
/// A simulation failure that maps onto an error code declared by the
/// program's IDL or by the framework it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ProgramError {code}: {msg}")]
pub struct ProgramError {
    pub code: u32,
    pub name: Option<String>,
    pub msg: String,
    /// Source location or account reported together with the error.
    pub origin: Option<String>,
    pub logs: Vec<String>,
}

// -----------------
// ProviderError
// -----------------
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("RpcError: {0}")]
    Rpc(#[from] Box<ClientError>),

    #[error("SimulationFailed: {err}")]
    SimulationFailed {
        err: TransactionError,
        logs: Vec<String>,
    },

    #[error("ProviderError: {0}")]
    Other(String),
}

impl ProviderError {
    /// Program logs that came back together with the failure, if any.
    pub fn logs(&self) -> &[String] {
        match self {
            ProviderError::SimulationFailed { logs, .. } => logs,
            _ => &[],
        }
    }

    pub fn transaction_error(&self) -> Option<TransactionError> {
        match self {
            ProviderError::SimulationFailed { err, .. } => Some(err.clone()),
            ProviderError::Rpc(err) => err.get_transaction_error(),
            _ => None,
        }
    }
}
