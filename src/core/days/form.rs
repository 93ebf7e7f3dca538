use crate::errors::{AppError, AppResult};
use crate::models::ContractType;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Raw input of one work-period submission, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkForm {
    pub hours: String,
    pub days: String,
    pub contract: ContractType,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

/// A `WorkForm` that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedWork {
    pub hours_worked: f64,
    pub days_worked: f64,
    pub contract: ContractType,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn parse_number(field: &str, raw: &str) -> AppResult<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", field, raw)))?;
    if !v.is_finite() {
        return Err(AppError::Validation(format!(
            "{} must be a finite number, got '{}'",
            field, raw
        )));
    }
    Ok(v)
}

fn parse_opt_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

impl WorkForm {
    pub fn new(hours: impl Into<String>, days: impl Into<String>, contract: ContractType) -> Self {
        Self {
            hours: hours.into(),
            days: days.into(),
            contract,
            period_start: None,
            period_end: None,
        }
    }

    pub fn with_period(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.period_start = Some(start.into());
        self.period_end = Some(end.into());
        self
    }

    /// Check required fields and parse numbers / dates.
    ///
    /// Hours and days must be non-blank numbers; sign and magnitude are not
    /// checked. With `require_period` both dates are mandatory.
    pub fn validate(&self, require_period: bool) -> AppResult<ValidatedWork> {
        let mut missing = Vec::new();
        if is_blank(&self.hours) {
            missing.push("hours");
        }
        if is_blank(&self.days) {
            missing.push("days");
        }
        if require_period {
            if self.period_start.as_deref().is_none_or(is_blank) {
                missing.push("period start");
            }
            if self.period_end.as_deref().is_none_or(is_blank) {
                missing.push("period end");
            }
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill in every field (missing: {})",
                missing.join(", ")
            )));
        }

        let hours_worked = parse_number("hours", &self.hours)?;
        let days_worked = parse_number("days", &self.days)?;
        let period_start = parse_opt_date(self.period_start.as_deref())?;
        let period_end = parse_opt_date(self.period_end.as_deref())?;

        if let (Some(s), Some(e)) = (period_start, period_end)
            && e < s
        {
            return Err(AppError::Validation(format!(
                "period end {} is before period start {}",
                e, s
            )));
        }

        Ok(ValidatedWork {
            hours_worked,
            days_worked,
            contract: self.contract,
            period_start,
            period_end,
        })
    }

    /// Empty the numeric and date inputs; the contract choice is kept.
    pub fn clear(&mut self) {
        self.hours.clear();
        self.days.clear();
        self.period_start = None;
        self.period_end = None;
    }
}
