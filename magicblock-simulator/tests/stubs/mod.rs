pub mod logs;
pub mod transaction_builder_stub;
