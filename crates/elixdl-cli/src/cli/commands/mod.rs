//! CLI command handlers.

mod batch;

pub use batch::run_batch;
