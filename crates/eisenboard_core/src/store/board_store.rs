//! Board persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Serialize the board to a single JSON document and back.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The persisted document maps each fixed quadrant identifier to an
//!   ordered array of task labels; entries absent from the document read
//!   back as empty lists.
//! - `save` overwrites the prior document atomically (single-row upsert).

use crate::db::DbError;
use crate::model::board::Board;
use crate::model::quadrant::Quadrant;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key of the single board document in the `board_state` table.
const BOARD_STATE_KEY: &str = "board";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from board persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Persisted document exists but is not a valid board snapshot.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted board data: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence interface for the whole board.
pub trait BoardStore {
    /// Reads the persisted board, or `None` when nothing was ever saved.
    fn load(&self) -> StoreResult<Option<Board>>;
    /// Writes the board, replacing any prior document.
    fn save(&self, board: &Board) -> StoreResult<()>;
}

/// Wire shape of the persisted board document.
///
/// Field names are the four fixed quadrant identifiers. Missing entries
/// default to empty; unknown extra entries are ignored on read, which
/// keeps documents written by older layouts loadable.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BoardDocument {
    #[serde(rename = "urgent-important", default)]
    urgent_important: Vec<String>,
    #[serde(rename = "not-urgent-important", default)]
    not_urgent_important: Vec<String>,
    #[serde(rename = "urgent-not-important", default)]
    urgent_not_important: Vec<String>,
    #[serde(rename = "not-urgent-not-important", default)]
    not_urgent_not_important: Vec<String>,
}

impl BoardDocument {
    fn from_board(board: &Board) -> Self {
        let mut document = Self::default();
        for quadrant in Quadrant::ALL {
            *document.list_mut(quadrant) = board.snapshot(quadrant);
        }
        document
    }

    fn into_board(mut self) -> Board {
        let mut board = Board::new();
        for quadrant in Quadrant::ALL {
            for label in std::mem::take(self.list_mut(quadrant)) {
                board.append(quadrant, label);
            }
        }
        board
    }

    fn list_mut(&mut self, quadrant: Quadrant) -> &mut Vec<String> {
        match quadrant {
            Quadrant::UrgentImportant => &mut self.urgent_important,
            Quadrant::NotUrgentImportant => &mut self.not_urgent_important,
            Quadrant::UrgentNotImportant => &mut self.urgent_not_important,
            Quadrant::NotUrgentNotImportant => &mut self.not_urgent_not_important,
        }
    }
}

/// SQLite-backed board store.
pub struct SqliteBoardStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BoardStore for SqliteBoardStore<'_> {
    fn load(&self) -> StoreResult<Option<Board>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM board_state WHERE key = ?1;",
                [BOARD_STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let document: BoardDocument = serde_json::from_str(&raw)
            .map_err(|err| StoreError::InvalidData(err.to_string()))?;
        Ok(Some(document.into_board()))
    }

    fn save(&self, board: &Board) -> StoreResult<()> {
        let document = BoardDocument::from_board(board);
        let raw = serde_json::to_string(&document)
            .map_err(|err| StoreError::InvalidData(err.to_string()))?;

        self.conn.execute(
            "INSERT INTO board_state (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![BOARD_STATE_KEY, raw],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BoardDocument;
    use crate::model::board::Board;
    use crate::model::quadrant::Quadrant;

    #[test]
    fn document_round_trip_preserves_order() {
        let mut board = Board::new();
        board.append(Quadrant::NotUrgentImportant, "A");
        board.append(Quadrant::NotUrgentImportant, "B");

        let document = BoardDocument::from_board(&board);
        let restored = document.into_board();

        assert_eq!(restored.snapshot(Quadrant::NotUrgentImportant), ["A", "B"]);
        assert_eq!(restored.task_count(), 2);
    }

    #[test]
    fn document_tolerates_missing_and_unknown_entries() {
        let raw = r#"{"urgent-important":["one"],"someday":["ignored"]}"#;
        let document: BoardDocument = serde_json::from_str(raw).unwrap();
        let board = document.into_board();

        assert_eq!(board.snapshot(Quadrant::UrgentImportant), ["one"]);
        assert_eq!(board.task_count(), 1);
    }
}
