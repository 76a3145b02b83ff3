//! Player input as a closed set of events.

use serde::{Deserialize, Serialize};

use crate::{Difficulty, GameKind, GridPos, Orientation, Selection};

/// Everything the presentation layer can send to the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Tab switch.
    SelectGame {
        /// Tab picked.
        selection: Selection,
    },
    /// Focus a grid cell.
    SelectCell {
        /// Target game.
        game: GameKind,
        /// Cell to focus.
        position: GridPos,
    },
    /// Focus the first cell of a crossword clue.
    SelectClue {
        /// Target game.
        game: GameKind,
        /// Clue number.
        number: u32,
        /// Clue orientation.
        orientation: Orientation,
    },
    /// Type into a grid cell. Without a position the focused cell is used.
    EnterValue {
        /// Target game.
        game: GameKind,
        /// Explicit cell, if any.
        #[serde(default)]
        position: Option<GridPos>,
        /// Raw text as typed. Empty clears the cell.
        value: String,
    },
    /// Turn a memory card face up.
    FlipCard {
        /// Target game.
        game: GameKind,
        /// Card slot.
        slot: usize,
    },
    /// Deal a fresh puzzle.
    NewGame {
        /// Target game.
        game: GameKind,
    },
    /// Mark every wrong entry.
    Check {
        /// Target game.
        game: GameKind,
    },
    /// Ask for help.
    Hint {
        /// Target game.
        game: GameKind,
    },
    /// Show every answer.
    Reveal {
        /// Target game.
        game: GameKind,
    },
    /// Change tier and deal a fresh puzzle.
    Difficulty {
        /// Target game.
        game: GameKind,
        /// New tier.
        tier: Difficulty,
    },
    /// Pause or resume.
    PauseToggle {
        /// Target game.
        game: GameKind,
    },
}

impl InputEvent {
    /// The game this event targets. Tab switches target none.
    pub fn game(&self) -> Option<GameKind> {
        match self {
            InputEvent::SelectGame { .. } => None,
            InputEvent::SelectCell { game, .. }
            | InputEvent::SelectClue { game, .. }
            | InputEvent::EnterValue { game, .. }
            | InputEvent::FlipCard { game, .. }
            | InputEvent::NewGame { game }
            | InputEvent::Check { game }
            | InputEvent::Hint { game }
            | InputEvent::Reveal { game }
            | InputEvent::Difficulty { game, .. }
            | InputEvent::PauseToggle { game } => Some(*game),
        }
    }

    /// Short name for logs and rejection messages.
    pub fn action(&self) -> &'static str {
        match self {
            InputEvent::SelectGame { .. } => "select game",
            InputEvent::SelectCell { .. } => "select cell",
            InputEvent::SelectClue { .. } => "select clue",
            InputEvent::EnterValue { .. } => "enter value",
            InputEvent::FlipCard { .. } => "flip card",
            InputEvent::NewGame { .. } => "new game",
            InputEvent::Check { .. } => "check",
            InputEvent::Hint { .. } => "hint",
            InputEvent::Reveal { .. } => "reveal",
            InputEvent::Difficulty { .. } => "difficulty",
            InputEvent::PauseToggle { .. } => "pause",
        }
    }
}
