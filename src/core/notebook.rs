use crate::db::log::audit;
use crate::db::notebook::{
    category_exists, delete_item, insert_category, insert_item, load_categories, load_items,
    update_item,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::notebook::{Category, EnglishItem, EnglishItemDraft, NotebookFilter};

/// A draft whose required fields are present and whose category exists.
struct CheckedDraft<'a> {
    french: &'a str,
    english: &'a str,
    category_id: i64,
    notes: Option<&'a str>,
}

fn check_draft<'a>(pool: &DbPool, draft: &'a EnglishItemDraft) -> AppResult<CheckedDraft<'a>> {
    let french = draft.french_text.trim();
    let english = draft.english_text.trim();

    let (false, false, Some(category_id)) =
        (french.is_empty(), english.is_empty(), draft.category_id)
    else {
        return Err(AppError::Validation(
            "French text, English text and category are required".into(),
        ));
    };

    if !category_exists(&pool.conn, category_id)? {
        return Err(AppError::Validation(format!(
            "unknown category id {category_id}"
        )));
    }

    let notes = draft.notes.as_deref().map(str::trim).filter(|n| !n.is_empty());

    Ok(CheckedDraft {
        french,
        english,
        category_id,
        notes,
    })
}

pub struct NotebookLogic;

impl NotebookLogic {
    pub fn categories(pool: &DbPool) -> AppResult<Vec<Category>> {
        load_categories(&pool.conn)
    }

    pub fn add_category(pool: &DbPool, name: &str) -> AppResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("category name must not be blank".into()));
        }

        let id = insert_category(&pool.conn, name)?;
        audit(&pool.conn, "add", &format!("categories #{id}"), name);

        Ok(Category {
            id,
            name: name.to_string(),
        })
    }

    pub fn list(pool: &DbPool, filter: &NotebookFilter) -> AppResult<Vec<EnglishItem>> {
        load_items(&pool.conn, filter)
    }

    pub fn add(pool: &DbPool, draft: &EnglishItemDraft) -> AppResult<i64> {
        let d = check_draft(pool, draft)?;
        let id = insert_item(&pool.conn, d.french, d.english, d.category_id, d.notes)?;
        audit(
            &pool.conn,
            "add",
            &format!("english_items #{id}"),
            &format!("{} = {}", d.french, d.english),
        );
        Ok(id)
    }

    pub fn edit(pool: &DbPool, id: i64, draft: &EnglishItemDraft) -> AppResult<()> {
        let d = check_draft(pool, draft)?;
        update_item(&pool.conn, id, d.french, d.english, d.category_id, d.notes)?;
        audit(
            &pool.conn,
            "edit",
            &format!("english_items #{id}"),
            &format!("{} = {}", d.french, d.english),
        );
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
        delete_item(&pool.conn, id)?;
        audit(&pool.conn, "del", &format!("english_items #{id}"), "entry removed");
        Ok(())
    }
}
