//! Queries on `categories` and `english_items`.

use crate::errors::{AppError, AppResult};
use crate::models::notebook::{Category, EnglishItem, NotebookFilter};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

pub fn load_categories(conn: &Connection) -> AppResult<Vec<Category>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM categories ORDER BY name ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn category_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT id FROM categories WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_category(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

fn map_item(row: &Row) -> rusqlite::Result<EnglishItem> {
    Ok(EnglishItem {
        id: row.get("id")?,
        french_text: row.get("french_text")?,
        english_text: row.get("english_text")?,
        category_id: row.get("category_id")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// Case-insensitive (Unicode) substring match on either text.
fn matches_term(item: &EnglishItem, term: &str) -> bool {
    item.french_text.to_lowercase().contains(term)
        || item.english_text.to_lowercase().contains(term)
}

/// Entries matching `filter`, newest first.
///
/// The category is filtered in SQL. The search term is matched in Rust with
/// Unicode case folding (SQLite's `LOWER()` folds ASCII only).
pub fn load_items(conn: &Connection, filter: &NotebookFilter) -> AppResult<Vec<EnglishItem>> {
    let mut sql = String::from(
        "SELECT id, french_text, english_text, category_id, notes, created_at
         FROM english_items",
    );
    let mut values: Vec<Value> = Vec::new();

    if let Some(cat) = filter.category_id {
        values.push(Value::Integer(cat));
        sql.push_str(" WHERE category_id = ?1");
    }
    sql.push_str(" ORDER BY created_at DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_item)?;

    let term = filter
        .search
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let mut out = Vec::new();
    for r in rows {
        let item = r?;
        if term.as_deref().is_none_or(|t| matches_term(&item, t)) {
            out.push(item);
        }
    }
    Ok(out)
}

pub fn insert_item(
    conn: &Connection,
    french: &str,
    english: &str,
    category_id: i64,
    notes: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO english_items (french_text, english_text, category_id, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![french, english, category_id, notes],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_item(
    conn: &Connection,
    id: i64,
    french: &str,
    english: &str,
    category_id: i64,
    notes: Option<&str>,
) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE english_items
         SET french_text = ?1, english_text = ?2, category_id = ?3, notes = ?4
         WHERE id = ?5",
        params![french, english, category_id, notes, id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound {
            table: "english_items",
            id,
        });
    }
    Ok(())
}

pub fn delete_item(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM english_items WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound {
            table: "english_items",
            id,
        });
    }
    Ok(())
}
