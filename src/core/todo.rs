use crate::db::household::{delete_todo, insert_todo, load_todo, load_todos, set_todo_completed};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::household::Todo;

pub struct TodoLogic;

impl TodoLogic {
    pub fn list(pool: &DbPool) -> AppResult<Vec<Todo>> {
        load_todos(&pool.conn)
    }

    pub fn add(pool: &DbPool, text: &str) -> AppResult<Todo> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("task must not be blank".into()));
        }

        let id = insert_todo(&pool.conn, text)?;
        audit(&pool.conn, "add", &format!("todos #{id}"), text);

        load_todo(&pool.conn, id)
    }

    /// Flip `completed` and return the updated task.
    pub fn toggle(pool: &DbPool, id: i64) -> AppResult<Todo> {
        let todo = load_todo(&pool.conn, id)?;
        set_todo_completed(&pool.conn, id, !todo.completed)?;
        audit(
            &pool.conn,
            "edit",
            &format!("todos #{id}"),
            if todo.completed { "reopened" } else { "completed" },
        );

        load_todo(&pool.conn, id)
    }

    pub fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
        delete_todo(&pool.conn, id)?;
        audit(&pool.conn, "del", &format!("todos #{id}"), "task removed");
        Ok(())
    }
}
