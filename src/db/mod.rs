pub mod household;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod notebook;
pub mod pool;
pub mod stats;
pub mod work_days;

pub use pool::DbPool;
pub use work_days::WorkDayStore;
