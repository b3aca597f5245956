use std::slice;

use log::*;
use magicblock_idl::{errors::IdlResult, EventCoder, EventRecord};
use solana_sdk::pubkey::Pubkey;

const PROGRAM_LOG: &str = "Program log: ";
const PROGRAM_DATA: &str = "Program data: ";

// -----------------
// EventParser
// -----------------
/// Extracts the events emitted by one program from simulation logs.
///
/// Logs of nested invocations are attributed to the program executing at
/// that point, which is tracked through the `invoke`/`success`/`failed`
/// lines the runtime writes. Only lines emitted while the parser's program
/// is the innermost one are considered.
pub struct EventParser<'a> {
    program_id: String,
    coder: &'a EventCoder,
}

impl<'a> EventParser<'a> {
    pub fn new(program_id: &Pubkey, coder: &'a EventCoder) -> Self {
        Self {
            program_id: program_id.to_string(),
            coder,
        }
    }

    /// Lazily decodes the events found in `logs`, in emission order. Lines
    /// that look like emissions but fail to decode are skipped.
    pub fn parse_logs<'l>(
        &'l self,
        logs: &'l [String],
    ) -> impl Iterator<Item = EventRecord> + 'l {
        self.parse_logs_checked(logs).filter_map(|res| match res {
            Ok(event) => Some(event),
            Err(err) => {
                trace!("Skipping undecodable event emission: {err}");
                None
            }
        })
    }

    /// Same as [Self::parse_logs], but surfaces decode failures of
    /// `Program data:` emissions instead of skipping them.
    pub fn parse_logs_checked<'l>(&'l self, logs: &'l [String]) -> Events<'l> {
        let lines = if self.coder.has_events() {
            logs
        } else {
            &logs[..0]
        };
        Events {
            lines: lines.iter(),
            program_id: &self.program_id,
            coder: self.coder,
            stack: vec![],
        }
    }
}

// -----------------
// Events
// -----------------
/// One-shot iterator over the emissions found in a log sequence.
pub struct Events<'l> {
    lines: slice::Iter<'l, String>,
    program_id: &'l str,
    coder: &'l EventCoder,
    stack: Vec<&'l str>,
}

enum LogLine<'l> {
    Invoke(&'l str),
    Exit,
    Data(&'l str),
    Log(&'l str),
    Other,
}

fn classify(line: &str) -> LogLine<'_> {
    if let Some(payload) = line.strip_prefix(PROGRAM_DATA) {
        return LogLine::Data(payload);
    }
    if let Some(payload) = line.strip_prefix(PROGRAM_LOG) {
        return LogLine::Log(payload);
    }
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Program"), Some(program), Some("invoke")) => {
            LogLine::Invoke(program)
        }
        (Some("Program"), Some(_), Some(status))
            if status == "success" || status.starts_with("failed") =>
        {
            LogLine::Exit
        }
        _ => LogLine::Other,
    }
}

impl<'l> Events<'l> {
    fn is_executing(&self) -> bool {
        self.stack.last() == Some(&self.program_id)
    }
}

impl<'l> Iterator for Events<'l> {
    type Item = IdlResult<EventRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.lines.next() {
            match classify(line) {
                LogLine::Invoke(program) => self.stack.push(program),
                LogLine::Exit => {
                    self.stack.pop();
                }
                LogLine::Data(payload) if self.is_executing() => {
                    return Some(self.coder.decode(payload));
                }
                // Plain text logs share the prefix with emissions of older
                // programs, so only payloads that decode are reported.
                LogLine::Log(payload) if self.is_executing() => {
                    if let Ok(event) = self.coder.decode(payload) {
                        return Some(Ok(event));
                    }
                }
                _ => {}
            }
        }
        None
    }
}
