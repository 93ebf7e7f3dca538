use crate::cli::parser::InventoryAction;
use crate::config::Config;
use crate::core::inventory::{InventoryLogic, QuantityChange};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::table::{Column, Table};

pub fn handle(action: &InventoryAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    let search = match action {
        InventoryAction::List { search } => search.clone(),
        InventoryAction::Add { name } => {
            let item = InventoryLogic::add(&pool, &name.join(" "))?;
            success(format!("Item added: {}", item.name));
            None
        }
        InventoryAction::Inc { id } => {
            report(InventoryLogic::increment(&pool, *id)?);
            None
        }
        InventoryAction::Dec { id } => {
            report(InventoryLogic::decrement(&pool, *id)?);
            None
        }
    };

    let items = InventoryLogic::list(&pool, search.as_deref())?;

    header("Inventory");
    if items.is_empty() {
        match search {
            Some(q) => println!("No item found for \"{}\"", q),
            None => println!("The inventory is empty."),
        }
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("NAME", 20),
        Column::new("QTY", 3),
    ]);
    for it in items {
        table.add_row(vec![it.id.to_string(), it.name, it.quantity.to_string()]);
    }
    print!("{}", table.render());

    Ok(())
}

fn report(change: QuantityChange) {
    match change {
        QuantityChange::Updated(item) => {
            success(format!("{}: quantity {}", item.name, item.quantity))
        }
        QuantityChange::Removed(item) => success(format!("{} removed", item.name)),
    }
}
