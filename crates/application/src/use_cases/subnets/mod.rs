mod assign_cidrs;

pub use assign_cidrs::{AssignSubnetCidrsUseCase, SubnetAssignment};
