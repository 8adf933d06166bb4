//! Transaction subsystem.

pub mod executor;

pub use executor::{CallParams, GasConfig, TransactionExecutor};
