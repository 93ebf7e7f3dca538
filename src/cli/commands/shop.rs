use crate::cli::parser::ShopAction;
use crate::config::Config;
use crate::core::shopping::ShoppingLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::household::ShoppingItem;
use crate::ui::messages::{header, success};

pub fn handle(action: &ShopAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    let items = match action {
        ShopAction::List => ShoppingLogic::list(&pool)?,
        ShopAction::Add { name } => {
            let items = ShoppingLogic::add(&pool, &name.join(" "))?;
            success("Item added");
            items
        }
        ShopAction::Del { id } => {
            let items = ShoppingLogic::delete(&pool, *id)?;
            success("Item removed");
            items
        }
        ShopAction::Reset => {
            let n = ShoppingLogic::reset(&pool)?;
            success(format!("List reset ({} item(s) removed)", n));
            Vec::new()
        }
    };

    print_items(&items);
    Ok(())
}

fn print_items(items: &[ShoppingItem]) {
    header("Shopping list");
    if items.is_empty() {
        println!("The list is empty.");
        return;
    }
    for it in items {
        println!("{:>4}  {}", it.id, it.name);
    }
}
