//! Puzzle Hub library - three puzzles behind one tab switcher
//!
//! A sudoku, a crossword and a memory-pairs game share per-game timers,
//! scoring and pause control. Only one game is live at a time.
//!
//! # Architecture
//!
//! - **Timer Registry**: one countable-seconds timer per game
//! - **Session Coordinator**: which game is active and whether it has started
//! - **Puzzle Controllers**: validate input against bundled solutions
//! - **Presentation Sink**: everything the screen is told, including toasts
//! - **Scheduler**: virtual-time queue for ticks and delayed resolutions
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use puzzle_hub::{GameKind, Hub, HubConfig, InputEvent, RecordingSink, Selection};
//!
//! let mut hub = Hub::new(HubConfig::default(), RecordingSink::new());
//! hub.dispatch(InputEvent::SelectGame {
//!     selection: Selection::Game(GameKind::MatchingCards),
//! })?;
//! hub.dispatch(InputEvent::FlipCard { game: GameKind::MatchingCards, slot: 0 })?;
//! hub.advance(Duration::from_secs(1));
//! # Ok::<(), puzzle_hub::HubError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod events;
mod games;
mod hub;
mod presentation;
mod replay;
mod scheduler;
mod session;
mod timer;

// Crate-level exports - Configuration
pub use config::{ConfigError, HubConfig};

// Crate-level exports - Errors
pub use error::{HubError, HubErrorKind, Rejection};

// Crate-level exports - Input
pub use events::InputEvent;

// Crate-level exports - Game types
pub use games::{
    BundledPuzzles, Card, CardLayout, CardState, Difficulty, Digits, GameKind, GridPos,
    LOGIC_GRID_SIZE, LogicGridController, LogicGridPuzzle, MIN_BONUS, MatchingCardsController,
    Orientation, PuzzleSource, Score, Selection, Symbol, WORD_GRID_SIZE, WordGridController,
    WordGridPuzzle, WordMatrix, WordPlacement, move_bonus, time_bonus,
};

// Crate-level exports - Hub
pub use hub::{Hub, HubBuilder};

// Crate-level exports - Presentation boundary
pub use presentation::{
    AuxCounter, CellRef, CellStyle, ClueRef, ClueView, PresentationSink, PuzzleView,
    RecordingSink, Severity, SinkEvent,
};

// Crate-level exports - Headless replay
pub use replay::{MAX_ADVANCE_MS, ReplayError, ReplaySummary, ScriptStep, run_script};

// Crate-level exports - Scheduling
pub use scheduler::{Deferred, Scheduler, Task, TaskId, TaskQueue};

// Crate-level exports - Session and timers
pub use session::{SessionCoordinator, SessionState};
pub use timer::{TimerRegistry, TimerState};
