use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Create the config directory, the config file (unless `--test`) and the
/// database, then apply every pending migration.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing household…");

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;

    audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("{} ({} migration(s) applied)", db_path, applied),
    );

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
