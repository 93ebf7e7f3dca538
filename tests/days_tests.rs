use household::core::days::{
    ANSWER_LABEL, DayLedger, LedgerSettings, WorkForm, build_prompt, extract,
    extract_days_counted, progress_percent, sum_days_counted,
};
use household::db::pool::DbPool;
use household::db::work_days::WorkDayStore;
use household::errors::AppError;
use household::models::ContractType;

mod common;
use common::{ReadOnlyStore, ScriptedGenerator, seed_record};

fn settings() -> LedgerSettings {
    LedgerSettings::default()
}

// ---------------------------------------------------------------------------
// extraction
// ---------------------------------------------------------------------------

#[test]
fn test_extract_well_formed_reply() {
    let e = extract(Some("Nombre de jours pouvant etre comptabiliser : 4."));
    assert!(e.matched);
    assert_eq!(e.value, 4);
}

#[test]
fn test_extract_without_match_is_zero() {
    let e = extract(Some("erreur"));
    assert!(!e.matched);
    assert_eq!(e.value, 0);
    assert_eq!(extract_days_counted(None), 0);
}

#[test]
fn test_extract_takes_first_match() {
    assert_eq!(extract_days_counted(Some("a : 3, b : 7")), 3);
}

#[test]
fn test_extract_needs_colon_and_space() {
    assert_eq!(extract_days_counted(Some("jours:5")), 0);
    assert_eq!(extract_days_counted(Some("jours : abc")), 0);
}

#[test]
fn test_extract_skips_non_ascii_digits() {
    let reply = "Jours : ٣ ; Nombre de jours pouvant etre comptabiliser : 4.";
    assert_eq!(extract_days_counted(Some(reply)), 4);
    assert!(!extract(Some("Nombre de jours pouvant etre comptabiliser : ٤.")).matched);
}

#[test]
fn test_extract_overflow_is_unmatched() {
    let e = extract(Some("total : 99999999999999999999"));
    assert!(!e.matched);
    assert_eq!(e.value, 0);
}

// ---------------------------------------------------------------------------
// prompt and totals
// ---------------------------------------------------------------------------

#[test]
fn test_prompt_embeds_inputs_and_format() {
    let p = build_prompt(5.0, 38.0, ContractType::Casual);
    assert!(p.contains(ANSWER_LABEL));
    assert!(p.contains("J'ai travaille 5 jours dans la semaine pour un total de 38h en casual"));

    let p = build_prompt(3.0, 24.5, ContractType::PieceRate);
    assert!(p.ends_with("pour un total de 24.5h en piece rate"));
}

#[test]
fn test_progress_percent_rounds_and_caps() {
    assert_eq!(progress_percent(0, 88), 0);
    assert_eq!(progress_percent(10, 88), 11);
    assert_eq!(progress_percent(44, 88), 50);
    assert_eq!(progress_percent(88, 88), 100);
    assert_eq!(progress_percent(120, 88), 100);
    assert_eq!(progress_percent(5, 0), 100);
}

#[test]
fn test_sum_days_counted_empty() {
    assert_eq!(sum_days_counted(&[]), 0);
}

// ---------------------------------------------------------------------------
// ledger
// ---------------------------------------------------------------------------

#[test]
fn test_load_sums_all_records() {
    let mut pool = DbPool::in_memory().expect("db");
    for n in [3, 5, 2] {
        seed_record(&mut pool, "theo", n);
    }
    seed_record(&mut pool, "carla", 40);

    let generator = ScriptedGenerator::default();
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    assert_eq!(ledger.records().len(), 3);
    assert_eq!(ledger.total_days_counted(), 10);
    assert_eq!(ledger.progress_percent(), 11);
    assert_eq!(ledger.remaining_days(), 78);
    assert_eq!(generator.calls(), 0);
}

#[test]
fn test_person_is_normalized_and_required() {
    let mut pool = DbPool::in_memory().expect("db");
    let generator = ScriptedGenerator::default();

    let ledger = DayLedger::new(&mut pool, &generator, "  Theo ", settings()).expect("ledger");
    assert_eq!(ledger.person(), "theo");
    drop(ledger);

    let err = DayLedger::new(&mut pool, &generator, "   ", settings())
        .err()
        .expect("blank person rejected");
    assert!(err.is_validation());
}

#[test]
fn test_submit_stores_reply_and_reloads() {
    let mut pool = DbPool::in_memory().expect("db");
    for n in [3, 5, 2] {
        seed_record(&mut pool, "theo", n);
    }

    let generator =
        ScriptedGenerator::replying(&["Nombre de jours pouvant etre comptabiliser : 4."]);
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    let mut form = WorkForm::new("38", "5", ContractType::Casual);
    let created = ledger.submit(&mut form).expect("submit");

    assert_eq!(created.days_counted, 4);
    assert_eq!(created.person, "theo");
    assert_eq!(created.hours_worked, 38.0);
    assert_eq!(created.days_worked, 5.0);
    assert_eq!(ledger.total_days_counted(), 14);
    assert_eq!(ledger.records().len(), 4);
    assert_eq!(ledger.records()[0].id, created.id, "newest first");

    // inputs cleared, contract kept
    assert!(form.hours.is_empty());
    assert!(form.days.is_empty());
    assert_eq!(form.contract, ContractType::Casual);

    // reloading without changes is idempotent
    let before = ledger.view().clone();
    ledger.load().expect("reload");
    assert_eq!(ledger.view(), &before);

    let prompts = generator.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert!(
        prompts[0].contains("J'ai travaille 5 jours dans la semaine pour un total de 38h en casual")
    );
}

#[test]
fn test_unparsable_reply_counts_zero_days() {
    let mut pool = DbPool::in_memory().expect("db");
    let generator = ScriptedGenerator::replying(&["Je ne sais pas."]);
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");

    let mut form = WorkForm::new("10", "2", ContractType::PieceRate);
    let created = ledger.submit(&mut form).expect("submit");

    assert_eq!(created.days_counted, 0);
    assert_eq!(created.response, "Je ne sais pas.");
    assert_eq!(ledger.records().len(), 1);
    assert_eq!(ledger.total_days_counted(), 0);
}

#[test]
fn test_blank_input_never_reaches_generator() {
    let mut pool = DbPool::in_memory().expect("db");
    let generator =
        ScriptedGenerator::replying(&["Nombre de jours pouvant etre comptabiliser : 4."]);
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");

    let mut form = WorkForm::new("", "5", ContractType::Casual);
    let err = ledger.submit(&mut form).expect_err("blank hours");

    assert!(err.is_validation());
    assert_eq!(generator.calls(), 0);
    assert_eq!(form.days, "5", "form untouched");
    assert!(ledger.records().is_empty());

    drop(ledger);
    assert!(pool.select_work_records("theo").expect("select").is_empty());
}

#[test]
fn test_non_numeric_input_is_rejected() {
    let mut pool = DbPool::in_memory().expect("db");
    let generator = ScriptedGenerator::default();
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");

    let mut form = WorkForm::new("lots", "5", ContractType::Casual);
    assert!(ledger.submit(&mut form).expect_err("not a number").is_validation());
    assert_eq!(generator.calls(), 0);
}

#[test]
fn test_empty_reply_stores_nothing() {
    let mut pool = DbPool::in_memory().expect("db");
    seed_record(&mut pool, "theo", 6);

    let generator = ScriptedGenerator::default();
    generator.push(Ok(None));
    generator.push(Ok(Some("   ".into())));

    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    let mut form = WorkForm::new("38", "5", ContractType::Casual);
    for _ in 0..2 {
        let err = ledger.submit(&mut form).expect_err("no reply");
        assert!(matches!(err, AppError::NoResponse));
    }

    assert_eq!(ledger.records().len(), 1);
    assert_eq!(ledger.total_days_counted(), 6);
    assert_eq!(form.hours, "38");
}

#[test]
fn test_generator_error_stores_nothing() {
    let mut pool = DbPool::in_memory().expect("db");
    let generator = ScriptedGenerator::default();
    generator.push(Err(AppError::Generation("HTTP 503: unavailable".into())));

    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    let mut form = WorkForm::new("38", "5", ContractType::Casual);
    let err = ledger.submit(&mut form).expect_err("service down");

    assert!(matches!(err, AppError::Generation(_)));
    drop(ledger);
    assert!(pool.select_work_records("theo").expect("select").is_empty());
}

#[test]
fn test_store_failure_keeps_form_and_view() {
    let mut inner = DbPool::in_memory().expect("db");
    seed_record(&mut inner, "theo", 7);
    let mut store = ReadOnlyStore { inner };

    let generator =
        ScriptedGenerator::replying(&["Nombre de jours pouvant etre comptabiliser : 4."]);
    let mut ledger = DayLedger::new(&mut store, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");
    let before = ledger.view().clone();

    let mut form = WorkForm::new("38", "5", ContractType::Casual);
    ledger.submit(&mut form).expect_err("insert refused");

    assert_eq!(ledger.view(), &before);
    assert_eq!(form.hours, "38");
    assert_eq!(form.days, "5");
}

#[test]
fn test_delete_recomputes_total() {
    let mut pool = DbPool::in_memory().expect("db");
    let a = seed_record(&mut pool, "theo", 3);
    seed_record(&mut pool, "theo", 5);
    seed_record(&mut pool, "theo", 2);

    let generator = ScriptedGenerator::default();
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    ledger.delete(a.id).expect("delete");

    assert_eq!(ledger.records().len(), 2);
    assert!(ledger.records().iter().all(|r| r.id != a.id));
    assert_eq!(ledger.total_days_counted(), 7);
}

#[test]
fn test_delete_is_scoped_to_person() {
    let mut pool = DbPool::in_memory().expect("db");
    let carla = seed_record(&mut pool, "carla", 9);
    seed_record(&mut pool, "theo", 4);

    let generator = ScriptedGenerator::default();
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    let err = ledger.delete(carla.id).expect_err("other person's record");
    assert!(matches!(err, AppError::NotFound { .. }));
    assert_eq!(ledger.total_days_counted(), 4);

    drop(ledger);
    assert_eq!(pool.select_work_records("carla").expect("select").len(), 1);
}

#[test]
fn test_delete_failure_keeps_view() {
    let mut inner = DbPool::in_memory().expect("db");
    let rec = seed_record(&mut inner, "theo", 7);
    let mut store = ReadOnlyStore { inner };

    let generator = ScriptedGenerator::default();
    let mut ledger = DayLedger::new(&mut store, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    ledger.delete(rec.id).expect_err("delete refused");
    assert_eq!(ledger.records().len(), 1);
    assert_eq!(ledger.total_days_counted(), 7);
}

#[test]
fn test_target_reached() {
    let mut pool = DbPool::in_memory().expect("db");
    seed_record(&mut pool, "theo", 90);

    let generator = ScriptedGenerator::default();
    let mut ledger = DayLedger::new(&mut pool, &generator, "theo", settings()).expect("ledger");
    ledger.load().expect("load");

    assert_eq!(ledger.total_days_counted(), 90);
    assert_eq!(ledger.progress_percent(), 100);
    assert_eq!(ledger.remaining_days(), 0);
}

// ---------------------------------------------------------------------------
// form
// ---------------------------------------------------------------------------

#[test]
fn test_form_period_rules() {
    let form =
        WorkForm::new("38", "5", ContractType::Casual).with_period("2025-03-03", "2025-03-09");
    let work = form.validate(true).expect("valid period");
    assert_eq!(work.period_start.map(|d| d.to_string()).as_deref(), Some("2025-03-03"));

    let reversed =
        WorkForm::new("38", "5", ContractType::Casual).with_period("2025-03-09", "2025-03-03");
    assert!(reversed.validate(false).expect_err("end before start").is_validation());

    let bad = WorkForm::new("38", "5", ContractType::Casual).with_period("someday", "2025-03-03");
    assert!(matches!(bad.validate(false), Err(AppError::InvalidDate(_))));

    let missing = WorkForm::new("38", "5", ContractType::Casual);
    assert!(missing.validate(false).is_ok());
    assert!(missing.validate(true).expect_err("period required").is_validation());
}
