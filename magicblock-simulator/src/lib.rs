mod args;
mod context;
mod dispatcher;
mod error_translator;
pub mod errors;
mod log_decoder;
mod method;
mod namespace;
mod program;
mod provider;
mod provider_stub;
mod rpc_provider;
mod transaction_builder;

pub use args::*;
pub use context::*;
pub use dispatcher::*;
pub use error_translator::*;
pub use log_decoder::*;
pub use method::*;
pub use namespace::*;
pub use program::*;
pub use provider::*;
pub use provider_stub::*;
pub use rpc_provider::*;
pub use transaction_builder::*;
