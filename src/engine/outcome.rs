//! Move outcomes and recoverable errors.
//!
//! Illegal operations never panic and never abort a session: they come
//! back as `GameError` values and leave state and history untouched, so a
//! rejected request is always safe to retry.

use serde::{Deserialize, Serialize};

/// Result of an accepted mutating move.
///
/// Win signalling is part of the outcome rather than a callback slot: the
/// host decides whether and how to notify. `won` is evaluated after the
/// mutation, so it can only newly become `true` on a foundation move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether every foundation is complete after this move.
    pub won: bool,
}

/// Which index a [`GameError::IndexOutOfRange`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexKind {
    /// A tableau column index.
    Column,
    /// A foundation index.
    Foundation,
    /// A card index within a column.
    Card,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IndexKind::Column => "column",
            IndexKind::Foundation => "foundation",
            IndexKind::Card => "card",
        };
        f.write_str(name)
    }
}

/// A recoverable engine error. None of these end the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// The move validator rejected the request; nothing changed.
    InvalidMove,

    /// Undo was requested with no snapshot to restore.
    EmptyHistory,

    /// A column, foundation, or card index was outside the configured
    /// bounds.
    IndexOutOfRange {
        /// What the index was supposed to address.
        kind: IndexKind,
        /// The offending index.
        index: usize,
        /// The valid bound (`index < len`).
        len: usize,
    },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove => write!(f, "move rejected by the rules"),
            GameError::EmptyHistory => write!(f, "nothing to undo"),
            GameError::IndexOutOfRange { kind, index, len } => {
                write!(f, "{kind} index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for GameError {}
