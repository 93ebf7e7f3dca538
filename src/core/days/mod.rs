//! Day accounting toward the 88-day working-holiday target.
//!
//! One submission flows through `form` (validation), `prompt`, the injected
//! `TextGenerator`, `extract`, and finally the store, after which the
//! `ledger` re-reads the authoritative list.

pub mod extract;
pub mod form;
pub mod ledger;
pub mod prompt;

pub use extract::{Extraction, extract, extract_days_counted};
pub use form::{ValidatedWork, WorkForm};
pub use ledger::{DayLedger, LedgerSettings, LedgerView, progress_percent, sum_days_counted};
pub use prompt::{ANSWER_LABEL, build_prompt};

/// Default number of days to count toward the second-year visa.
pub const DEFAULT_TARGET_DAYS: u32 = 88;
