use crate::cli::parser::TodoAction;
use crate::config::Config;
use crate::core::todo::TodoLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::colors::colorize_done;

pub fn handle(action: &TodoAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    match action {
        TodoAction::List => {}
        TodoAction::Add { text } => {
            TodoLogic::add(&pool, &text.join(" "))?;
            success("Task added");
        }
        TodoAction::Toggle { id } => {
            let todo = TodoLogic::toggle(&pool, *id)?;
            if todo.completed {
                success(format!("Done: {}", todo.text));
            } else {
                success(format!("Reopened: {}", todo.text));
            }
        }
        TodoAction::Del { id } => {
            TodoLogic::delete(&pool, *id)?;
            success("Task removed");
        }
    }

    let todos = TodoLogic::list(&pool)?;
    header("Todo list");
    if todos.is_empty() {
        println!("Nothing to do.");
    }
    for t in todos {
        println!("{:>4}  {} {}", t.id, colorize_done(t.completed), t.text);
    }

    Ok(())
}
