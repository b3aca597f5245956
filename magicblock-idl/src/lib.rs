mod coder;
mod discriminator;
mod error_table;
pub mod errors;
mod event;
mod idl;
mod value;

pub use coder::*;
pub use discriminator::*;
pub use error_table::*;
pub use event::*;
pub use idl::*;
pub use value::*;
