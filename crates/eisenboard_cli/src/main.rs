//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `eisenboard_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use eisenboard_core::db::open_db_in_memory;
use eisenboard_core::{BoardService, Quadrant, SqliteBoardStore};

fn main() {
    println!("eisenboard_core version={}", eisenboard_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let mut service = BoardService::open(SqliteBoardStore::new(&conn));
    let _ = service.add_task("probe task", true, true);
    service.persist();

    for quadrant in Quadrant::ALL {
        println!(
            "quadrant={quadrant} tasks={}",
            service.board().tasks(quadrant).len()
        );
    }
}
