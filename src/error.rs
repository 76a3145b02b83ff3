//! Rejections raised while handling player input.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::{GameKind, GridPos};

/// How a rejection reaches the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Malformed input: dropped without a notification.
    Silent,
    /// Precondition failed: shown as an error notification.
    Notify,
}

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HubErrorKind {
    /// The game's timer is paused.
    #[display("Game is paused!")]
    Paused,

    /// Input for a game that is not on screen.
    #[display("Switch to {} first", _0)]
    NotActive(GameKind),

    /// Value entry with no focused cell.
    #[display("Please select a cell first")]
    NoSelection,

    /// Sudoku hint budget spent.
    #[display("No hints remaining")]
    NoHintsRemaining,

    /// Sudoku hint with nothing left to fill.
    #[display("No empty cells to fill")]
    NoEmptyCells,

    /// A given sudoku cell.
    #[display("Cell {} is part of the puzzle", _0)]
    FixedCell(GridPos),

    /// A blocked crossword square.
    #[display("Cell {} is blocked", _0)]
    BlockCell(GridPos),

    /// Coordinates outside the grid.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(GridPos),

    /// Input that is not a digit or letter as required.
    #[display("Unrecognized input {:?}", _0)]
    InvalidInput(String),

    /// Clue number not in the puzzle.
    #[display("No {} clue numbered {}", orientation, number)]
    UnknownClue {
        /// Requested number.
        number: u32,
        /// Requested orientation.
        orientation: crate::Orientation,
    },

    /// A memory pair is still resolving.
    #[display("Cards are still turning")]
    FlipsLocked,

    /// Card already face up, matched, or missing.
    #[display("Card {} cannot be flipped", _0)]
    CardUnavailable(usize),

    /// The puzzle is already finished.
    #[display("Puzzle already solved, start a new game")]
    AlreadySolved,

    /// The game has no such control.
    #[display("{} has no {} control", game, action)]
    Unsupported {
        /// Targeted game.
        game: GameKind,
        /// Requested action.
        action: &'static str,
    },

    /// The content provider returned nothing.
    #[display("No puzzles available for {}", _0)]
    NoPuzzles(GameKind),
}

impl HubErrorKind {
    /// Whether the player is told about this rejection.
    #[instrument]
    pub fn rejection(&self) -> Rejection {
        match self {
            HubErrorKind::FixedCell(_)
            | HubErrorKind::BlockCell(_)
            | HubErrorKind::OutOfBounds(_)
            | HubErrorKind::InvalidInput(_)
            | HubErrorKind::UnknownClue { .. }
            | HubErrorKind::FlipsLocked
            | HubErrorKind::CardUnavailable(_)
            | HubErrorKind::Unsupported { .. } => Rejection::Silent,
            HubErrorKind::Paused
            | HubErrorKind::NotActive(_)
            | HubErrorKind::NoSelection
            | HubErrorKind::NoHintsRemaining
            | HubErrorKind::NoEmptyCells
            | HubErrorKind::AlreadySolved
            | HubErrorKind::NoPuzzles(_) => Rejection::Notify,
        }
    }
}

/// A rejected input with the location that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct HubError {
    /// What went wrong.
    pub kind: HubErrorKind,
    /// Line number where the rejection was raised.
    pub line: u32,
    /// Source file where the rejection was raised.
    pub file: &'static str,
}

impl HubError {
    /// Creates a rejection with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: HubErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &HubErrorKind {
        &self.kind
    }
}
