//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lanes_core` linkage.
//! - Print a seeded in-memory board summary for quick local sanity checks.

use lanes_core::db::open_db_in_memory;
use lanes_core::{column_for, todos_by_status, SqliteBoardRepository, Status, TodoStore};

fn main() {
    println!("lanes_core version={}", lanes_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory storage: {err}");
            std::process::exit(1);
        }
    };

    let mut store = TodoStore::new(SqliteBoardRepository::new(&conn));
    store.init();

    let todos = store.todos();
    for status in Status::ALL {
        let column = column_for(status);
        println!(
            "{:<18} {}",
            column.title,
            todos_by_status(&todos, status).len()
        );
    }
}
