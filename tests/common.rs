#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use household::db::work_days::WorkDayStore;
use household::errors::{AppError, AppResult};
use household::genai::TextGenerator;
use household::models::{ContractType, NewWorkRecord, WorkRecord};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir and no API key.
pub fn hh(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_household_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("household");
    cmd.env("HOME", &home).env_remove("GEMINI_API_KEY");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_household.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty DB through the CLI.
pub fn init_db(name: &str, db_path: &str) {
    hh(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Text generator answering from a script and remembering every prompt.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: RefCell<VecDeque<AppResult<Option<String>>>>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(replies: &[&str]) -> Self {
        let g = Self::default();
        for r in replies {
            g.push(Ok(Some(r.to_string())));
        }
        g
    }

    pub fn push(&self, reply: AppResult<Option<String>>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Generation("no scripted reply left".into())))
    }
}

/// Store that reads from an inner store but refuses every write.
pub struct ReadOnlyStore<S: WorkDayStore> {
    pub inner: S,
}

impl<S: WorkDayStore> WorkDayStore for ReadOnlyStore<S> {
    fn select_work_records(&mut self, person: &str) -> AppResult<Vec<WorkRecord>> {
        self.inner.select_work_records(person)
    }

    fn insert_work_record(&mut self, _rec: &NewWorkRecord) -> AppResult<WorkRecord> {
        Err(AppError::Io(std::io::Error::other("store is read-only")))
    }

    fn delete_work_record(&mut self, _person: &str, _id: i64) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::other("store is read-only")))
    }
}

/// Stored record with the given day count, bypassing the generator.
pub fn seed_record(store: &mut impl WorkDayStore, person: &str, days_counted: u32) -> WorkRecord {
    store
        .insert_work_record(&NewWorkRecord {
            person: person.to_string(),
            hours_worked: 38.0,
            days_worked: 5.0,
            contract_type: ContractType::Casual,
            days_counted,
            response: format!(
                "Nombre de jours pouvant etre comptabiliser : {}.",
                days_counted
            ),
            period_start: None,
            period_end: None,
        })
        .expect("seed record")
}
