use super::extract::extract;
use super::form::WorkForm;
use super::prompt::build_prompt;
use super::DEFAULT_TARGET_DAYS;
use crate::db::work_days::WorkDayStore;
use crate::errors::{AppError, AppResult};
use crate::genai::TextGenerator;
use crate::models::{NewWorkRecord, WorkRecord};
use tracing::debug;

/// Sum of `days_counted`, saturating instead of wrapping.
pub fn sum_days_counted(records: &[WorkRecord]) -> u32 {
    records
        .iter()
        .fold(0u32, |acc, r| acc.saturating_add(r.days_counted))
}

/// `round(100 * total / target)`, capped at 100. The total itself is never capped.
pub fn progress_percent(total: u32, target: u32) -> u8 {
    if target == 0 {
        return 100;
    }
    let pct = (f64::from(total) * 100.0 / f64::from(target)).round();
    pct.min(100.0) as u8
}

#[derive(Debug, Clone, Copy)]
pub struct LedgerSettings {
    pub target_days: u32,
    pub require_period: bool,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            target_days: DEFAULT_TARGET_DAYS,
            require_period: false,
        }
    }
}

/// What a person's screen shows: their records, newest first, and the total.
///
/// This is a cache of the store; it is replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerView {
    pub person: String,
    pub records: Vec<WorkRecord>,
    pub total_days_counted: u32,
}

/// Per-person day ledger.
///
/// Every successful mutation is followed by a full reload from the store, so
/// the total always equals the sum over the stored records. Mutations take
/// `&mut self`, so a ledger never runs two submissions at once.
pub struct DayLedger<'a, S: WorkDayStore + ?Sized, G: TextGenerator + ?Sized> {
    store: &'a mut S,
    generator: &'a G,
    settings: LedgerSettings,
    view: LedgerView,
}

impl<'a, S: WorkDayStore + ?Sized, G: TextGenerator + ?Sized> DayLedger<'a, S, G> {
    /// Empty, not yet loaded ledger for `person` (trimmed, lower-cased).
    pub fn new(
        store: &'a mut S,
        generator: &'a G,
        person: &str,
        settings: LedgerSettings,
    ) -> AppResult<Self> {
        let person = person.trim().to_lowercase();
        if person.is_empty() {
            return Err(AppError::Validation("person must not be blank".into()));
        }

        Ok(Self {
            store,
            generator,
            settings,
            view: LedgerView {
                person,
                ..LedgerView::default()
            },
        })
    }

    pub fn person(&self) -> &str {
        &self.view.person
    }

    pub fn view(&self) -> &LedgerView {
        &self.view
    }

    pub fn records(&self) -> &[WorkRecord] {
        &self.view.records
    }

    pub fn total_days_counted(&self) -> u32 {
        self.view.total_days_counted
    }

    pub fn target_days(&self) -> u32 {
        self.settings.target_days
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.view.total_days_counted, self.settings.target_days)
    }

    /// Days still missing to reach the target (0 once reached).
    pub fn remaining_days(&self) -> u32 {
        self.settings
            .target_days
            .saturating_sub(self.view.total_days_counted)
    }

    /// Fetch the person's records and recompute the total.
    ///
    /// On error the previous view is left untouched.
    pub fn load(&mut self) -> AppResult<()> {
        let records = self.store.select_work_records(&self.view.person)?;
        let total = sum_days_counted(&records);

        self.view.records = records;
        self.view.total_days_counted = total;
        Ok(())
    }

    /// Validate, ask the service for a day count, store the record, reload.
    ///
    /// - blank/invalid input: `Validation`, nothing sent, nothing stored
    /// - service error or empty reply: nothing stored
    /// - store error: form kept, view untouched
    ///
    /// The form is cleared as soon as the record is stored.
    pub fn submit(&mut self, form: &mut WorkForm) -> AppResult<WorkRecord> {
        let work = form.validate(self.settings.require_period)?;

        let prompt = build_prompt(work.days_worked, work.hours_worked, work.contract);
        let reply = self
            .generator
            .generate(&prompt)?
            .filter(|text| !text.trim().is_empty())
            .ok_or(AppError::NoResponse)?;

        let extraction = extract(Some(&reply));
        debug!(
            person = %self.view.person,
            matched = extraction.matched,
            days_counted = extraction.value,
            "submit: day count extracted"
        );

        let created = self.store.insert_work_record(&NewWorkRecord {
            person: self.view.person.clone(),
            hours_worked: work.hours_worked,
            days_worked: work.days_worked,
            contract_type: work.contract,
            days_counted: extraction.value,
            response: reply.trim().to_string(),
            period_start: work.period_start,
            period_end: work.period_end,
        })?;

        form.clear();

        self.store.audit(
            "add",
            &format!("work_days #{}", created.id),
            &format!(
                "{}: {} day(s) counted for {}d / {}h {}",
                created.person,
                created.days_counted,
                created.days_worked,
                created.hours_worked,
                created.contract_type
            ),
        );

        self.load()?;
        Ok(created)
    }

    /// Delete one of this person's records, then reload.
    ///
    /// The total is never decremented locally; on error the view is unchanged.
    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        self.store.delete_work_record(&self.view.person, id)?;

        self.store.audit(
            "del",
            &format!("work_days #{}", id),
            &format!("{}: record deleted", self.view.person),
        );

        self.load()
    }
}
