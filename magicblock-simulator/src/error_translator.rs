use log::*;
use magicblock_idl::{framework_error, ErrorTable, ERROR_CODE_OFFSET};
use solana_sdk::{
    instruction::InstructionError, transaction::TransactionError,
};

use crate::errors::{ProgramError, ProviderError, SimulatorError};

const FRAMEWORK_ERROR_LOG_PREFIX: &str = "Program log: AnchorError";
const CUSTOM_ERROR_MARKER: &str = "custom program error: 0x";

pub trait ErrorTranslator: Send + Sync {
    /// Classifies a failed simulation against the program's declared error
    /// codes. Errors that can't be matched are returned as
    /// [SimulatorError::Unknown] with the original cause attached.
    fn translate(&self, err: ProviderError, table: &ErrorTable)
        -> SimulatorError;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdlErrorTranslator;

impl ErrorTranslator for IdlErrorTranslator {
    fn translate(
        &self,
        err: ProviderError,
        table: &ErrorTable,
    ) -> SimulatorError {
        let logs = err.logs().to_vec();
        let logged = parse_framework_error_log(&logs);

        let code = logged
            .as_ref()
            .map(|logged| logged.code)
            .or_else(|| {
                err.transaction_error()
                    .and_then(|err| custom_error_code(&err))
            })
            .or_else(|| custom_error_code_from_logs(&logs));
        let Some(code) = code else {
            return SimulatorError::Unknown(err);
        };
        let origin = logged.and_then(|logged| logged.origin);

        if let Some(msg) = table.message(code) {
            return ProgramError {
                code,
                name: table.get(code).map(|entry| entry.name.clone()),
                msg: msg.to_string(),
                origin,
                logs,
            }
            .into();
        }
        // Codes from the custom range that the IDL doesn't declare belong
        // to some other program, e.g. one invoked through CPI.
        if code < ERROR_CODE_OFFSET {
            if let Some((name, msg)) = framework_error(code) {
                return ProgramError {
                    code,
                    name: Some(name.to_string()),
                    msg: msg.to_string(),
                    origin,
                    logs,
                }
                .into();
            }
        }

        debug!("Error code {code} is not declared by the program");
        SimulatorError::Unknown(err)
    }
}

fn custom_error_code(err: &TransactionError) -> Option<u32> {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            Some(*code)
        }
        _ => None,
    }
}

fn custom_error_code_from_logs(logs: &[String]) -> Option<u32> {
    logs.iter().find_map(|log| {
        let start = log.find(CUSTOM_ERROR_MARKER)? + CUSTOM_ERROR_MARKER.len();
        let hex = log[start..]
            .split(|c: char| !c.is_ascii_hexdigit())
            .next()?;
        u32::from_str_radix(hex, 16).ok()
    })
}

struct FrameworkErrorLog {
    code: u32,
    /// Source location or account named by the log line.
    origin: Option<String>,
}

/// Parses the error line the framework logs before failing an instruction:
///
/// `Program log: AnchorError [thrown in <file>:<line>|caused by account: <name>|occurred].
/// Error Code: <name>. Error Number: <code>. Error Message: <msg>.`
///
/// Name and message are looked up by code afterwards, only the code and the
/// origin are taken from the line.
fn parse_framework_error_log(logs: &[String]) -> Option<FrameworkErrorLog> {
    let (idx, line) = logs
        .iter()
        .enumerate()
        .find(|(_, log)| log.starts_with(FRAMEWORK_ERROR_LOG_PREFIX))?;

    let (head, rest) = line.split_once(". Error Code: ")?;
    let (name, rest) = rest.split_once(". Error Number: ")?;
    let (number, _) = rest.split_once(". Error Message: ")?;
    let code = number.trim().parse::<u32>().ok()?;

    let origin = head
        .strip_prefix("Program log: AnchorError thrown in ")
        .or_else(|| {
            head.strip_prefix("Program log: AnchorError caused by account: ")
        })
        .map(str::to_string);

    trace!("Parsed framework error at log line {idx}: {name} ({code})");
    Some(FrameworkErrorLog { code, origin })
}
