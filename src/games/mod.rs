//! Game kinds hosted by the hub and the pieces every puzzle shares.
//!
//! Each puzzle lives in its own sub-module with its content types, the
//! bundled catalog, and the controller that validates player input.

mod logic_grid;
mod matching_cards;
mod score;
mod word_grid;

pub use logic_grid::{Digits, LogicGridController, LogicGridPuzzle, LOGIC_GRID_SIZE};
pub use matching_cards::{Card, CardLayout, CardState, MatchingCardsController, Symbol};
pub use score::{Score, MIN_BONUS, move_bonus, time_bonus};
pub use word_grid::{
    Orientation, WORD_GRID_SIZE, WordGridController, WordGridPuzzle, WordMatrix, WordPlacement,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// One of the three puzzle types hosted by the hub.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// 9×9 number-grid logic puzzle.
    #[strum(to_string = "Sudoku")]
    LogicGrid,
    /// 10×10 word grid with across/down clues.
    #[strum(to_string = "Crossword")]
    WordGrid,
    /// Memory pairs.
    #[strum(to_string = "Memory Pairs")]
    MatchingCards,
}

impl GameKind {
    /// All game kinds in tab order.
    pub const ALL: [GameKind; 3] = [GameKind::LogicGrid, GameKind::WordGrid, GameKind::MatchingCards];

    /// Dense index used for per-game slots.
    pub fn index(self) -> usize {
        match self {
            GameKind::LogicGrid => 0,
            GameKind::WordGrid => 1,
            GameKind::MatchingCards => 2,
        }
    }
}

/// What the tab switcher is showing: a game, or the informational tips panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// A puzzle game.
    Game(GameKind),
    /// The tips panel. No puzzle is initialized and every timer stays stopped.
    Tips,
}

impl Selection {
    /// The game behind this selection, if any.
    pub fn game(self) -> Option<GameKind> {
        match self {
            Selection::Game(kind) => Some(kind),
            Selection::Tips => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Game(kind) => write!(f, "{}", kind),
            Selection::Tips => write!(f, "Tips"),
        }
    }
}

/// Difficulty tier for the sudoku catalog and the memory layout.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Easy tier.
    #[default]
    Easy,
    /// Medium tier.
    Medium,
    /// Hard tier.
    Hard,
}

impl Difficulty {
    /// Bonus added when a memory game is cleared at this tier.
    #[instrument]
    pub fn completion_bonus(self) -> u32 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 150,
        }
    }
}

/// A cell on a rectangular puzzle grid (zero-based).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct GridPos {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

/// A content provider handing out puzzle material for one game kind.
///
/// The hub picks uniformly at random from whatever the catalog returns.
/// Word grids ignore the tier; memory pairs use it to size the deck.
pub trait PuzzleSource<P>: fmt::Debug {
    /// Returns the candidates available at `tier`.
    fn catalog(&self, tier: Difficulty) -> &[P];
}

/// The puzzles shipped with the hub.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledPuzzles;
