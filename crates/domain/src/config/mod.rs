//! Configuration module for dualstack
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `regions`: Region selection and discovery opt-in
//! - `addressing`: IPv6 partitioning parameters
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod addressing;
pub mod errors;
pub mod logging;
pub mod regions;
pub mod root;

pub use addressing::AddressingConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use regions::RegionsConfig;
pub use root::{CliOverrides, Config};
