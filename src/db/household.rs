//! Queries on the household list tables: shopping_items, inventory_items,
//! todos and recipes.

use crate::errors::{AppError, AppResult};
use crate::models::household::{InventoryItem, Recipe, ShoppingItem, Todo};
use rusqlite::{Connection, Row, params};

fn not_found(table: &'static str, id: i64) -> AppError {
    AppError::NotFound { table, id }
}

fn collect<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> AppResult<Vec<T>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// shopping_items
// ---------------------------

pub fn load_shopping_items(conn: &Connection) -> AppResult<Vec<ShoppingItem>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, created_at FROM shopping_items ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ShoppingItem {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    })?;
    collect(rows)
}

pub fn insert_shopping_item(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO shopping_items (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_shopping_item(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM shopping_items WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(not_found("shopping_items", id));
    }
    Ok(())
}

/// Delete every row. Returns how many were removed.
pub fn clear_shopping_items(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM shopping_items", [])?)
}

// ---------------------------
// inventory_items
// ---------------------------

fn map_inventory(row: &Row) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get("id")?,
        name: row.get("name")?,
        quantity: row.get("quantity")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_inventory_items(conn: &Connection) -> AppResult<Vec<InventoryItem>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, quantity, created_at FROM inventory_items ORDER BY name ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_inventory)?;
    collect(rows)
}

pub fn load_inventory_item(conn: &Connection, id: i64) -> AppResult<InventoryItem> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, quantity, created_at FROM inventory_items WHERE id = ?1",
    )?;
    stmt.query_row([id], map_inventory).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => not_found("inventory_items", id),
        other => AppError::Db(other),
    })
}

pub fn insert_inventory_item(conn: &Connection, name: &str, quantity: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO inventory_items (name, quantity) VALUES (?1, ?2)",
        params![name, quantity],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_inventory_quantity(conn: &Connection, id: i64, quantity: i64) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE inventory_items SET quantity = ?1 WHERE id = ?2",
        params![quantity, id],
    )?;
    if n == 0 {
        return Err(not_found("inventory_items", id));
    }
    Ok(())
}

pub fn delete_inventory_item(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM inventory_items WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(not_found("inventory_items", id));
    }
    Ok(())
}

// ---------------------------
// todos
// ---------------------------

fn map_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get("id")?,
        text: row.get("text")?,
        completed: row.get::<_, i64>("completed")? != 0,
        created_at: row.get("created_at")?,
    })
}

pub fn load_todos(conn: &Connection) -> AppResult<Vec<Todo>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, text, completed, created_at FROM todos ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_todo)?;
    collect(rows)
}

pub fn load_todo(conn: &Connection, id: i64) -> AppResult<Todo> {
    let mut stmt =
        conn.prepare_cached("SELECT id, text, completed, created_at FROM todos WHERE id = ?1")?;
    stmt.query_row([id], map_todo).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => not_found("todos", id),
        other => AppError::Db(other),
    })
}

pub fn insert_todo(conn: &Connection, text: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO todos (text, completed) VALUES (?1, 0)", [text])?;
    Ok(conn.last_insert_rowid())
}

pub fn set_todo_completed(conn: &Connection, id: i64, completed: bool) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE todos SET completed = ?1 WHERE id = ?2",
        params![if completed { 1 } else { 0 }, id],
    )?;
    if n == 0 {
        return Err(not_found("todos", id));
    }
    Ok(())
}

pub fn delete_todo(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM todos WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(not_found("todos", id));
    }
    Ok(())
}

// ---------------------------
// recipes
// ---------------------------

pub fn load_recipes(conn: &Connection) -> AppResult<Vec<Recipe>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, ingredients, suggestion, created_at FROM recipes
         ORDER BY created_at DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        let raw: String = row.get(1)?;
        let ingredients: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(Recipe {
            id: row.get(0)?,
            ingredients,
            suggestion: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;
    collect(rows)
}

pub fn insert_recipe(
    conn: &Connection,
    ingredients: &[String],
    suggestion: &str,
) -> AppResult<i64> {
    let encoded = serde_json::to_string(ingredients)?;
    conn.execute(
        "INSERT INTO recipes (ingredients, suggestion) VALUES (?1, ?2)",
        params![encoded, suggestion],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn clear_recipes(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM recipes", [])?)
}
