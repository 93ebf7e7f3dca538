use crate::db::household::{
    delete_inventory_item, insert_inventory_item, load_inventory_item, load_inventory_items,
    update_inventory_quantity,
};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::household::InventoryItem;

/// Result of changing a quantity: a stock of zero or less removes the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(InventoryItem),
    Removed(InventoryItem),
}

pub struct InventoryLogic;

/// Case-insensitive substring filter on the item name.
pub fn filter_items(items: Vec<InventoryItem>, search: Option<&str>) -> Vec<InventoryItem> {
    let Some(term) = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) else {
        return items;
    };
    items
        .into_iter()
        .filter(|it| it.name.to_lowercase().contains(&term))
        .collect()
}

impl InventoryLogic {
    /// Items by name, optionally filtered.
    pub fn list(pool: &DbPool, search: Option<&str>) -> AppResult<Vec<InventoryItem>> {
        Ok(filter_items(load_inventory_items(&pool.conn)?, search))
    }

    /// New items start with a quantity of 1.
    pub fn add(pool: &DbPool, name: &str) -> AppResult<InventoryItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("item name must not be blank".into()));
        }

        let id = insert_inventory_item(&pool.conn, name, 1)?;
        audit(&pool.conn, "add", &format!("inventory_items #{id}"), name);

        load_inventory_item(&pool.conn, id)
    }

    /// Set the quantity, deleting the item when it drops to zero or below.
    pub fn set_quantity(pool: &DbPool, id: i64, quantity: i64) -> AppResult<QuantityChange> {
        let item = load_inventory_item(&pool.conn, id)?;

        if quantity <= 0 {
            delete_inventory_item(&pool.conn, id)?;
            audit(
                &pool.conn,
                "del",
                &format!("inventory_items #{id}"),
                &format!("{} out of stock", item.name),
            );
            return Ok(QuantityChange::Removed(item));
        }

        update_inventory_quantity(&pool.conn, id, quantity)?;
        audit(
            &pool.conn,
            "edit",
            &format!("inventory_items #{id}"),
            &format!("{}: {} → {}", item.name, item.quantity, quantity),
        );

        Ok(QuantityChange::Updated(load_inventory_item(&pool.conn, id)?))
    }

    pub fn increment(pool: &DbPool, id: i64) -> AppResult<QuantityChange> {
        let item = load_inventory_item(&pool.conn, id)?;
        Self::set_quantity(pool, id, item.quantity.saturating_add(1))
    }

    pub fn decrement(pool: &DbPool, id: i64) -> AppResult<QuantityChange> {
        let item = load_inventory_item(&pool.conn, id)?;
        Self::set_quantity(pool, id, item.quantity.saturating_sub(1))
    }
}
