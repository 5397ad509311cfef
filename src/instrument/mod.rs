pub mod contract_spec;
pub mod registry;

pub use contract_spec::{ContractSpec, Exposure};
pub use registry::{all_contracts, get_contract_specs, lookup, Lookup};
