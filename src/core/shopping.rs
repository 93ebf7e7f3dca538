use crate::db::household::{
    clear_shopping_items, delete_shopping_item, insert_shopping_item, load_shopping_items,
};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::household::ShoppingItem;

pub struct ShoppingLogic;

impl ShoppingLogic {
    pub fn list(pool: &DbPool) -> AppResult<Vec<ShoppingItem>> {
        load_shopping_items(&pool.conn)
    }

    /// Add a trimmed, non-blank item and return the refreshed list.
    pub fn add(pool: &DbPool, name: &str) -> AppResult<Vec<ShoppingItem>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("item name must not be blank".into()));
        }

        let id = insert_shopping_item(&pool.conn, name)?;
        audit(&pool.conn, "add", &format!("shopping_items #{id}"), name);

        Self::list(pool)
    }

    pub fn delete(pool: &DbPool, id: i64) -> AppResult<Vec<ShoppingItem>> {
        delete_shopping_item(&pool.conn, id)?;
        audit(&pool.conn, "del", &format!("shopping_items #{id}"), "item removed");

        Self::list(pool)
    }

    /// Empty the whole list. Returns how many items were removed.
    pub fn reset(pool: &DbPool) -> AppResult<usize> {
        let n = clear_shopping_items(&pool.conn)?;
        audit(
            &pool.conn,
            "reset",
            "shopping_items",
            &format!("{n} item(s) removed"),
        );
        Ok(n)
    }
}
