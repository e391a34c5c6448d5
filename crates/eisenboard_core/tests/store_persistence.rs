use eisenboard_core::db::migrations::latest_version;
use eisenboard_core::db::{open_db, open_db_in_memory};
use eisenboard_core::{Board, BoardStore, Quadrant, SqliteBoardStore};
use tempfile::TempDir;

#[test]
fn migrations_set_user_version_to_latest() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn reopening_an_existing_database_is_a_no_op_migration() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn board_survives_a_full_reopen_cycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.db");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteBoardStore::new(&conn);
        let mut board = Board::new();
        for label in ["A", "B", "C"] {
            board.append(Quadrant::UrgentNotImportant, label);
        }
        board.append(Quadrant::NotUrgentNotImportant, "someday");
        store.save(&board).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteBoardStore::new(&conn);
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(
        loaded.snapshot(Quadrant::UrgentNotImportant),
        ["A", "B", "C"]
    );
    assert_eq!(
        loaded.snapshot(Quadrant::NotUrgentNotImportant),
        ["someday"]
    );
    assert_eq!(loaded.task_count(), 4);
}
