//! The presentation boundary: everything the core tells the screen.

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::{Difficulty, Digits, GameKind, GridPos, Orientation, Selection, WORD_GRID_SIZE};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Positive feedback.
    Success,
    /// Rejected action.
    Error,
}

/// Visual state of a single cell or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    /// Given by the puzzle.
    Fixed,
    /// Current focus.
    Selected,
    /// Wrong entry.
    Error,
    /// Correct entry.
    Correct,
    /// Card resolved into a pair.
    Matched,
    /// Card face up.
    Flipped,
    /// No decoration.
    Blank,
}

/// Addresses a cell on a grid or a slot in the card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRef {
    /// Grid cell.
    Grid(GridPos),
    /// Card slot.
    Slot(usize),
}

/// Named side counters shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuxCounter {
    /// Sudoku hints left.
    Hints,
    /// Memory moves made.
    Moves,
}

/// The clue currently driving word-grid focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClueRef {
    /// Clue number.
    pub number: u32,
    /// Orientation of the word.
    pub orientation: Orientation,
}

/// One clue as shown to the player. Answers stay in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueView {
    /// Clue number.
    pub number: u32,
    /// Orientation of the word.
    pub orientation: Orientation,
    /// Clue text.
    pub clue: String,
    /// First cell of the word.
    pub start: GridPos,
    /// Number of cells.
    pub length: usize,
}

/// Snapshot of a freshly initialized puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleView {
    /// Sudoku board with its givens (0 = empty).
    LogicGrid {
        /// Active tier.
        difficulty: Difficulty,
        /// Given digits.
        givens: Digits,
    },
    /// Crossword layout.
    WordGrid {
        /// Puzzle theme.
        theme: String,
        /// `true` where the grid is blocked.
        blocks: [[bool; WORD_GRID_SIZE]; WORD_GRID_SIZE],
        /// Clue list.
        clues: Vec<ClueView>,
    },
    /// Face-down memory deck.
    MatchingCards {
        /// Active tier.
        difficulty: Difficulty,
        /// Grid columns.
        columns: usize,
        /// Grid rows.
        rows: usize,
        /// Number of cards.
        slots: usize,
    },
}

/// Receiver of every visible state change.
pub trait PresentationSink: fmt::Debug {
    /// Shows `selection`'s container and hides the others.
    fn show(&mut self, selection: Selection);

    /// Full redraw of a fresh puzzle.
    fn render(&mut self, game: GameKind, view: &PuzzleView);

    /// Replaces the visible content of one cell. Empty text clears it.
    fn write_cell(&mut self, game: GameKind, cell: CellRef, text: &str);

    /// Restyles one cell.
    fn mark_cell(&mut self, game: GameKind, cell: CellRef, style: CellStyle);

    /// Updates the score display.
    fn update_score(&mut self, game: GameKind, value: u32);

    /// Updates a side counter.
    fn update_aux_counter(&mut self, game: GameKind, counter: AuxCounter, value: u32);

    /// Updates the `MM:SS` timer display.
    fn update_timer_display(&mut self, game: GameKind, display: &str);

    /// Highlights the active clue, or clears the highlight.
    fn highlight_clue(&mut self, game: GameKind, clue: Option<ClueRef>);

    /// Fire-and-forget toast. The sink dismisses it on its own.
    fn notify(&mut self, text: &str, severity: Severity);
}

/// A sink call captured as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum SinkEvent {
    Show {
        selection: Selection,
    },
    Render {
        game: GameKind,
        view: PuzzleView,
    },
    WriteCell {
        game: GameKind,
        cell: CellRef,
        text: String,
    },
    MarkCell {
        game: GameKind,
        cell: CellRef,
        style: CellStyle,
    },
    Score {
        game: GameKind,
        value: u32,
    },
    Counter {
        game: GameKind,
        counter: AuxCounter,
        value: u32,
    },
    Timer {
        game: GameKind,
        display: String,
    },
    Clue {
        game: GameKind,
        clue: Option<ClueRef>,
    },
    Notify {
        text: String,
        severity: Severity,
    },
}

/// Sink that records every call. Used by the headless replay and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Takes the recorded events, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recorded notifications in order.
    pub fn notifications(&self) -> Vec<(&str, Severity)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Notify { text, severity } => Some((text.as_str(), *severity)),
                _ => None,
            })
            .collect()
    }

    /// Last timer display emitted for `game`.
    pub fn last_timer(&self, game: GameKind) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::Timer { game: g, display } if *g == game => Some(display.as_str()),
            _ => None,
        })
    }

    /// Last score emitted for `game`.
    pub fn last_score(&self, game: GameKind) -> Option<u32> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::Score { game: g, value } if *g == game => Some(*value),
            _ => None,
        })
    }

    /// Last style applied to `cell`.
    pub fn last_style(&self, game: GameKind, cell: CellRef) -> Option<CellStyle> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::MarkCell {
                game: g,
                cell: c,
                style,
            } if *g == game && *c == cell => Some(*style),
            _ => None,
        })
    }
}

impl PresentationSink for RecordingSink {
    fn show(&mut self, selection: Selection) {
        self.events.push(SinkEvent::Show { selection });
    }

    fn render(&mut self, game: GameKind, view: &PuzzleView) {
        self.events.push(SinkEvent::Render {
            game,
            view: view.clone(),
        });
    }

    fn write_cell(&mut self, game: GameKind, cell: CellRef, text: &str) {
        self.events.push(SinkEvent::WriteCell {
            game,
            cell,
            text: text.to_string(),
        });
    }

    fn mark_cell(&mut self, game: GameKind, cell: CellRef, style: CellStyle) {
        self.events.push(SinkEvent::MarkCell { game, cell, style });
    }

    fn update_score(&mut self, game: GameKind, value: u32) {
        self.events.push(SinkEvent::Score { game, value });
    }

    fn update_aux_counter(&mut self, game: GameKind, counter: AuxCounter, value: u32) {
        self.events.push(SinkEvent::Counter {
            game,
            counter,
            value,
        });
    }

    fn update_timer_display(&mut self, game: GameKind, display: &str) {
        self.events.push(SinkEvent::Timer {
            game,
            display: display.to_string(),
        });
    }

    fn highlight_clue(&mut self, game: GameKind, clue: Option<ClueRef>) {
        self.events.push(SinkEvent::Clue { game, clue });
    }

    fn notify(&mut self, text: &str, severity: Severity) {
        self.events.push(SinkEvent::Notify {
            text: text.to_string(),
            severity,
        });
    }
}
