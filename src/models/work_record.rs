use super::contract_type::ContractType;
use chrono::NaiveDate;
use serde::Serialize;

/// One submitted work period, as stored in `work_days`.
///
/// Rows are never updated: the only mutation is deleting the whole record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkRecord {
    pub id: i64,                         // ⇔ work_days.id
    pub person: String,                  // ⇔ work_days.person
    pub hours_worked: f64,               // ⇔ work_days.hours
    pub days_worked: f64,                // ⇔ work_days.days
    pub contract_type: ContractType,     // ⇔ work_days.contract_type ('Casual' | 'Piece Rate')
    pub days_counted: u32,               // ⇔ work_days.days_counted (>= 0, default 0)
    pub response: String,                // ⇔ work_days.response (raw generated reply)
    pub period_start: Option<NaiveDate>, // ⇔ work_days.period_start (TEXT "YYYY-MM-DD")
    pub period_end: Option<NaiveDate>,   // ⇔ work_days.period_end
    pub created_at: String,              // ⇔ work_days.created_at (assigned by SQLite)
}

/// Everything needed to insert a `WorkRecord`; `id` and `created_at` come from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkRecord {
    pub person: String,
    pub hours_worked: f64,
    pub days_worked: f64,
    pub contract_type: ContractType,
    pub days_counted: u32,
    pub response: String,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

impl WorkRecord {
    /// "2025-03-03 → 2025-03-09", or "-" when the record has no period.
    pub fn period_label(&self) -> String {
        match (self.period_start, self.period_end) {
            (Some(s), Some(e)) => format!("{} → {}", s, e),
            (Some(s), None) => format!("{} →", s),
            (None, Some(e)) => format!("→ {}", e),
            (None, None) => "-".to_string(),
        }
    }
}
