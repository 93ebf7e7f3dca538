use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Tables reported by `db --info`, in display order.
pub const TABLES: &[&str] = &[
    "work_days",
    "shopping_items",
    "inventory_items",
    "todos",
    "recipes",
    "categories",
    "english_items",
    "log",
];

pub fn count_rows(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    // `table` only ever comes from TABLES
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in TABLES {
        let count = count_rows(pool, table)?;
        let colour = if count > 0 { GREEN } else { GREY };
        println!("    {:<16} {}{}{}", table, colour, count, RESET);
    }

    //
    // 3) SCHEMA VERSION
    //
    let versions = applied_versions(&pool.conn)?;
    match versions.last() {
        Some(v) => println!("{}• Schema:{} {} ({} migrations)", CYAN, RESET, v, versions.len()),
        None => println!("{}• Schema:{} {}not initialized{}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
