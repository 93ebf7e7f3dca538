use crate::cli::parser::NotebookAction;
use crate::config::Config;
use crate::core::notebook::NotebookLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::notebook::{EnglishItemDraft, NotebookFilter};
use crate::ui::messages::{header, success};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

pub fn handle(action: &NotebookAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    let filter = match action {
        NotebookAction::Categories => {
            header("Categories");
            for c in NotebookLogic::categories(&pool)? {
                println!("{:>4}  {}", c.id, c.name);
            }
            return Ok(());
        }
        NotebookAction::CategoryAdd { name } => {
            let c = NotebookLogic::add_category(&pool, name)?;
            success(format!("Category #{} created: {}", c.id, c.name));
            return Ok(());
        }
        NotebookAction::List { category, search } => NotebookFilter {
            category_id: *category,
            search: search.clone(),
        },
        NotebookAction::Add {
            french,
            english,
            category,
            notes,
        } => {
            let draft = EnglishItemDraft {
                french_text: french.clone(),
                english_text: english.clone(),
                category_id: *category,
                notes: notes.clone(),
            };
            let id = NotebookLogic::add(&pool, &draft)?;
            success(format!("Entry #{} added", id));
            NotebookFilter::default()
        }
        NotebookAction::Edit {
            id,
            french,
            english,
            category,
            notes,
        } => {
            let draft = EnglishItemDraft {
                french_text: french.clone(),
                english_text: english.clone(),
                category_id: *category,
                notes: notes.clone(),
            };
            NotebookLogic::edit(&pool, *id, &draft)?;
            success(format!("Entry #{} updated", id));
            NotebookFilter::default()
        }
        NotebookAction::Del { id } => {
            NotebookLogic::delete(&pool, *id)?;
            success(format!("Entry #{} removed", id));
            NotebookFilter::default()
        }
    };

    let names: HashMap<i64, String> = NotebookLogic::categories(&pool)?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let items = NotebookLogic::list(&pool, &filter)?;

    header("English notebook");
    if items.is_empty() {
        println!("No entry found.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("FRANÇAIS", 10),
        Column::new("ENGLISH", 10),
        Column::new("CATEGORY", 8),
        Column::new("NOTES", 5),
    ]);
    for it in items {
        table.add_row(vec![
            it.id.to_string(),
            truncate(&it.french_text, 40),
            truncate(&it.english_text, 40),
            names.get(&it.category_id).cloned().unwrap_or_else(|| "?".into()),
            truncate(it.notes.as_deref().unwrap_or(""), 30),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
