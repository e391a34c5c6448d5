//! End-to-end session: load, render, mutate, save, reload.

use eisenboard_core::db::open_db_in_memory;
use eisenboard_core::{
    BoardService, DragController, PanelController, Quadrant, SqliteBoardStore, TaskListView,
};

#[test]
fn full_session_round_trip() {
    let conn = open_db_in_memory().unwrap();

    // Session one: first run, empty board.
    let mut service = BoardService::open(SqliteBoardStore::new(&conn));
    assert!(service.board().is_empty());

    let mut view = TaskListView::new();
    view.populate(service.board());

    let mut panel = PanelController::new();
    panel.toggle_visibility();
    panel.set_draft("File taxes");
    panel.set_urgent(true);
    panel.set_important(true);
    let id = panel.submit(&mut service, &mut view).unwrap();

    panel.set_draft("Read novel");
    panel.submit(&mut service, &mut view).unwrap();

    let mut drag = DragController::new();
    drag.begin_drag(id);
    assert!(drag.allow_drop());
    assert!(drag.drop_on(&mut service, &mut view, Quadrant::NotUrgentImportant));

    // Session end: one more unconditional save; harmless because save is
    // idempotent given the current board.
    service.persist();
    drop(service);

    // Session two: reload into a fresh board and display.
    let service = BoardService::open(SqliteBoardStore::new(&conn));
    let mut view = TaskListView::new();
    view.populate(service.board());

    assert_eq!(
        service.board().snapshot(Quadrant::NotUrgentImportant),
        ["File taxes"]
    );
    assert_eq!(
        service.board().snapshot(Quadrant::NotUrgentNotImportant),
        ["Read novel"]
    );
    assert_eq!(service.board().task_count(), 2);
    assert_eq!(view.snapshot(Quadrant::NotUrgentImportant), ["File taxes"]);
}
