//! Queries on the `work_days` table and the store seam used by the day ledger.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ContractType, NewWorkRecord, WorkRecord};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Datastore operations the day ledger needs.
///
/// `DbPool` is the production implementation; anything else (tests, another
/// backend) only has to honour the same ordering and scoping rules.
pub trait WorkDayStore {
    /// All records for `person`, newest first.
    fn select_work_records(&mut self, person: &str) -> AppResult<Vec<WorkRecord>>;

    /// Insert and return the created row, with `id` and `created_at` filled in.
    fn insert_work_record(&mut self, rec: &NewWorkRecord) -> AppResult<WorkRecord>;

    /// Delete exactly one record of `person`. Missing rows are `AppError::NotFound`.
    fn delete_work_record(&mut self, person: &str, id: i64) -> AppResult<()>;

    /// Record a completed mutation in the internal audit log. Never fails.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

impl WorkDayStore for DbPool {
    fn select_work_records(&mut self, person: &str) -> AppResult<Vec<WorkRecord>> {
        load_work_records(&self.conn, person)
    }

    fn insert_work_record(&mut self, rec: &NewWorkRecord) -> AppResult<WorkRecord> {
        insert_work_record(&self.conn, rec)
    }

    fn delete_work_record(&mut self, person: &str, id: i64) -> AppResult<()> {
        let n = delete_work_record(&self.conn, person, id)?;
        if n == 0 {
            return Err(AppError::NotFound {
                table: "work_days",
                id,
            });
        }
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        crate::db::log::audit(&self.conn, operation, target, message);
    }
}

fn parse_opt_date(raw: Option<String>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s.clone())),
                )
            }),
    }
}

pub fn map_row(row: &Row) -> Result<WorkRecord> {
    let contract_str: String = row.get("contract_type")?;
    let contract_type = ContractType::from_db_str(&contract_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Validation(format!(
                "Invalid contract type: {}",
                contract_str
            ))),
        )
    })?;

    // CHECK(days_counted >= 0) keeps this in range; clamp anyway for foreign rows.
    let days_counted: i64 = row.get("days_counted")?;

    Ok(WorkRecord {
        id: row.get("id")?,
        person: row.get("person")?,
        hours_worked: row.get("hours")?,
        days_worked: row.get("days")?,
        contract_type,
        days_counted: u32::try_from(days_counted.max(0)).unwrap_or(u32::MAX),
        response: row.get("response")?,
        period_start: parse_opt_date(row.get("period_start")?)?,
        period_end: parse_opt_date(row.get("period_end")?)?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_work_records(conn: &Connection, person: &str) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM work_days
         WHERE person = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([person], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_work_record(conn: &Connection, id: i64) -> AppResult<WorkRecord> {
    let mut stmt = conn.prepare_cached("SELECT * FROM work_days WHERE id = ?1")?;
    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::NotFound {
            table: "work_days",
            id,
        },
        other => AppError::Db(other),
    })
}

pub fn insert_work_record(conn: &Connection, rec: &NewWorkRecord) -> AppResult<WorkRecord> {
    conn.execute(
        "INSERT INTO work_days
           (person, hours, days, contract_type, days_counted, response, period_start, period_end)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            rec.person,
            rec.hours_worked,
            rec.days_worked,
            rec.contract_type.to_db_str(),
            rec.days_counted,
            rec.response,
            rec.period_start.map(|d| d.format("%Y-%m-%d").to_string()),
            rec.period_end.map(|d| d.format("%Y-%m-%d").to_string()),
        ],
    )?;

    load_work_record(conn, conn.last_insert_rowid())
}

/// Returns the number of rows deleted (0 or 1).
pub fn delete_work_record(conn: &Connection, person: &str, id: i64) -> Result<usize> {
    conn.execute(
        "DELETE FROM work_days WHERE id = ?1 AND person = ?2",
        params![id, person],
    )
}

/// Distinct people with at least one record, alphabetically.
pub fn load_people(conn: &Connection) -> AppResult<Vec<(String, u32)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT person, COALESCE(SUM(days_counted), 0) FROM work_days
         GROUP BY person
         ORDER BY person ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let total: i64 = row.get(1)?;
        Ok((
            row.get::<_, String>(0)?,
            u32::try_from(total.max(0)).unwrap_or(u32::MAX),
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
