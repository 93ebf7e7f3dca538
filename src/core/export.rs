use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::work_days::load_work_records;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, WorkRecordExport, ensure_writable};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Write all of `person`'s records (newest first) to `file`.
    /// Returns the number of rows written.
    pub fn export_work_days(
        pool: &DbPool,
        person: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let person = person.trim().to_lowercase();
        if person.is_empty() {
            return Err(AppError::Validation("person must not be blank".into()));
        }

        let path: PathBuf = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows: Vec<WorkRecordExport> = load_work_records(&pool.conn, &person)?
            .iter()
            .map(WorkRecordExport::from)
            .collect();

        format.write(&rows, &path)?;

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} work record(s) of {} as {}", rows.len(), person, format.as_str()),
        );

        Ok(rows.len())
    }
}
