//! Dualstack Application Layer
//!
//! Ports describe the cloud control plane this tool drives; use cases are
//! the idempotent reconciliation steps composed by the runner.
pub mod ports;
pub mod use_cases;
