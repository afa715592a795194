mod enable_dual_stack;

pub use enable_dual_stack::{DualStackReport, EnableDualStackUseCase, LoadBalancerOutcome};
