use crate::models::WorkRecord;
use crate::utils::formatting::fmt_number;
use serde::Serialize;

/// Flat row used for CSV / JSON export of work records.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkRecordExport {
    pub id: i64,
    pub person: String,
    pub days_worked: String,
    pub hours_worked: String,
    pub contract_type: String,
    pub days_counted: u32,
    pub period_start: String,
    pub period_end: String,
    pub created_at: String,
    pub response: String,
}

impl From<&WorkRecord> for WorkRecordExport {
    fn from(r: &WorkRecord) -> Self {
        Self {
            id: r.id,
            person: r.person.clone(),
            days_worked: fmt_number(r.days_worked),
            hours_worked: fmt_number(r.hours_worked),
            contract_type: r.contract_type.to_db_str().to_string(),
            days_counted: r.days_counted,
            period_start: r.period_start.map(|d| d.to_string()).unwrap_or_default(),
            period_end: r.period_end.map(|d| d.to_string()).unwrap_or_default(),
            created_at: r.created_at.clone(),
            response: r.response.clone(),
        }
    }
}
