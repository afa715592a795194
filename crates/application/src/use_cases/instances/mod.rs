mod assign_addresses;

pub use assign_addresses::{AssignInstanceAddressesUseCase, AssignedAddresses};
