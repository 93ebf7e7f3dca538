use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in `log` as `migration_applied`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_work_days",
        description: "Created work_days table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_days (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            person         TEXT NOT NULL,
            hours          REAL NOT NULL,
            days           REAL NOT NULL,
            contract_type  TEXT NOT NULL CHECK(contract_type IN ('Casual','Piece Rate')),
            days_counted   INTEGER NOT NULL DEFAULT 0 CHECK(days_counted >= 0),
            response       TEXT NOT NULL DEFAULT '',
            created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );

        CREATE INDEX IF NOT EXISTS idx_work_days_person ON work_days(person, created_at);
        "#,
    },
    Migration {
        version: "20250301_0002_create_household_lists",
        description: "Created shopping_items, inventory_items, todos and recipes tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS shopping_items (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );

        CREATE TABLE IF NOT EXISTS inventory_items (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            quantity    INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );

        CREATE TABLE IF NOT EXISTS todos (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            text        TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );

        CREATE TABLE IF NOT EXISTS recipes (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            ingredients TEXT NOT NULL DEFAULT '[]',
            suggestion  TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );
        "#,
    },
    Migration {
        version: "20250302_0003_create_english_notebook",
        description: "Created categories and english_items tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS categories (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS english_items (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            french_text   TEXT NOT NULL,
            english_text  TEXT NOT NULL,
            category_id   INTEGER NOT NULL REFERENCES categories(id),
            notes         TEXT,
            created_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );

        CREATE INDEX IF NOT EXISTS idx_english_items_category ON english_items(category_id);

        INSERT OR IGNORE INTO categories (name) VALUES
            ('Vocabulaire'), ('Expressions'), ('Grammaire');
        "#,
    },
    Migration {
        version: "20250410_0004_add_work_period",
        description: "Added period_start / period_end to work_days",
        sql: r#"
        ALTER TABLE work_days ADD COLUMN period_start TEXT;
        ALTER TABLE work_days ADD COLUMN period_end TEXT;
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%fZ','now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Names of the migrations already recorded in `log`.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            out.push(m.version.to_string());
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::init_db() and by DbPool::open(). Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        applied += 1;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(applied)
}
