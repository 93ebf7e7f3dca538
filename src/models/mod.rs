pub mod contract_type;
pub mod household;
pub mod notebook;
pub mod work_record;

pub use contract_type::ContractType;
pub use work_record::{NewWorkRecord, WorkRecord};
