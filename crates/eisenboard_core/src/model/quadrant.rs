//! Fixed quadrant set and urgency/importance classification.
//!
//! # Responsibility
//! - Define the four Eisenhower quadrant identifiers.
//! - Map (urgent, important) flag pairs to a quadrant.
//!
//! # Invariants
//! - `classify` is pure and total over all four flag combinations.
//! - String forms are stable; they name persisted entries and UI containers.

use std::fmt::{Display, Formatter};

/// One of the four fixed board quadrants.
///
/// The set never changes at runtime. Each variant owns an ordered task list
/// on the [`Board`](crate::model::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    /// Do first.
    UrgentImportant,
    /// Schedule.
    NotUrgentImportant,
    /// Delegate.
    UrgentNotImportant,
    /// Drop.
    NotUrgentNotImportant,
}

impl Quadrant {
    /// All quadrants in canonical display order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ];

    /// Resolves the quadrant for an urgency/importance flag pair.
    ///
    /// Pure total function; every combination maps to exactly one quadrant.
    pub fn classify(urgent: bool, important: bool) -> Self {
        match (urgent, important) {
            (true, true) => Self::UrgentImportant,
            (false, true) => Self::NotUrgentImportant,
            (true, false) => Self::UrgentNotImportant,
            (false, false) => Self::NotUrgentNotImportant,
        }
    }

    /// Stable identifier used in the persisted snapshot and UI element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent-important",
            Self::NotUrgentImportant => "not-urgent-important",
            Self::UrgentNotImportant => "urgent-not-important",
            Self::NotUrgentNotImportant => "not-urgent-not-important",
        }
    }

    /// Parses a stable identifier back into a quadrant.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "urgent-important" => Some(Self::UrgentImportant),
            "not-urgent-important" => Some(Self::NotUrgentImportant),
            "urgent-not-important" => Some(Self::UrgentNotImportant),
            "not-urgent-not-important" => Some(Self::NotUrgentNotImportant),
            _ => None,
        }
    }

    /// Position in [`Quadrant::ALL`], used for fixed-size per-quadrant storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::UrgentImportant => 0,
            Self::NotUrgentImportant => 1,
            Self::UrgentNotImportant => 2,
            Self::NotUrgentNotImportant => 3,
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
