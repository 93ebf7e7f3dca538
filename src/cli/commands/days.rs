use crate::cli::parser::DaysAction;
use crate::config::Config;
use crate::core::days::{DayLedger, LedgerSettings, LedgerView, WorkForm, progress_percent};
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::db::work_days::load_people;
use crate::errors::AppResult;
use crate::genai::TextGenerator;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{CYAN, RESET, color_for_days_counted, color_for_optional_field};
use crate::utils::date::format_created_at;
use crate::utils::formatting::{bold, truncate};
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_number, progress_bar};

fn settings(cfg: &Config) -> LedgerSettings {
    LedgerSettings {
        target_days: cfg.target_days,
        require_period: cfg.require_period,
    }
}

pub fn handle(action: &DaysAction, cfg: &Config, generator: &dyn TextGenerator) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;

    match action {
        DaysAction::Add {
            person,
            hours,
            days,
            contract,
            from,
            to,
        } => {
            let mut form = WorkForm {
                hours: hours.clone().unwrap_or_default(),
                days: days.clone().unwrap_or_default(),
                contract: *contract,
                period_start: from.clone(),
                period_end: to.clone(),
            };

            let mut ledger = DayLedger::new(&mut pool, generator, person, settings(cfg))?;
            ledger.load()?;
            let before = ledger.total_days_counted();

            info("Asking for the day count…");
            let created = ledger.submit(&mut form)?;

            success(format!(
                "Calculation done: {} day(s) counted (total {} → {})",
                created.days_counted,
                before,
                ledger.total_days_counted()
            ));
            println!("{}Reply:{} {}", CYAN, RESET, created.response);
            print_view(
                ledger.view(),
                ledger.target_days(),
                ledger.progress_percent(),
                ledger.remaining_days(),
            );
        }

        DaysAction::List { person } => {
            let mut ledger = DayLedger::new(&mut pool, generator, person, settings(cfg))?;
            ledger.load()?;
            print_view(
                ledger.view(),
                ledger.target_days(),
                ledger.progress_percent(),
                ledger.remaining_days(),
            );
        }

        DaysAction::People => {
            let people = load_people(&pool.conn)?;
            if people.is_empty() {
                info("No work periods recorded yet.");
                return Ok(());
            }

            header(format!("Days counted toward {}", cfg.target_days));
            for (person, total) in people {
                println!(
                    "{:<12} {:>3} / {}  {}",
                    person,
                    total,
                    cfg.target_days,
                    progress_bar(progress_percent(total, cfg.target_days), 20)
                );
            }
        }

        DaysAction::Del { person, id } => {
            let mut ledger = DayLedger::new(&mut pool, generator, person, settings(cfg))?;
            ledger.delete(*id)?;

            success(format!("Record #{} deleted.", id));
            print_view(
                ledger.view(),
                ledger.target_days(),
                ledger.progress_percent(),
                ledger.remaining_days(),
            );
        }

        DaysAction::Export {
            person,
            format,
            file,
            force,
        } => {
            let n = ExportLogic::export_work_days(&pool, person, *format, file, *force)?;
            info(format!("{} record(s) exported.", n));
        }
    }

    Ok(())
}

fn print_view(view: &LedgerView, target: u32, percent: u8, remaining: u32) {
    header(format!("Work periods of {}", view.person));

    if view.records.is_empty() {
        println!("No work periods recorded for {}.", view.person);
    } else {
        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("CREATED", 16),
            Column::new("PERIOD", 6),
            Column::new("DAYS", 4),
            Column::new("HOURS", 5),
            Column::new("CONTRACT", 8),
            Column::new("COUNTED", 7),
        ]);

        for r in &view.records {
            let period = r.period_label();
            let grey_period = color_for_optional_field(Some(&period));
            table.add_row(vec![
                r.id.to_string(),
                format_created_at(&r.created_at),
                format!("{grey_period}{}{RESET}", truncate(&period, 25)),
                fmt_number(r.days_worked),
                fmt_number(r.hours_worked),
                r.contract_type.to_string(),
                format!(
                    "{}{}{}",
                    color_for_days_counted(r.days_counted),
                    r.days_counted,
                    RESET
                ),
            ]);
        }

        print!("{}", table.render());
    }

    println!();
    println!(
        "{} {} / {} days",
        bold("Total:"),
        view.total_days_counted,
        target
    );
    println!("{}", progress_bar(percent, 30));
    if remaining == 0 {
        success("Target reached!");
    } else {
        println!("{} day(s) to go.", remaining);
    }
}
