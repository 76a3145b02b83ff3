//! 9×9 number-grid logic puzzle.
//!
//! The board is compared cell by cell against a bundled solution. Givens
//! are locked; every other cell accepts 1–9, and 0 clears.

mod puzzles;

use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

use crate::hub::{Effects, PuzzleController};
use crate::{
    AuxCounter, BundledPuzzles, CellRef, CellStyle, Difficulty, GameKind, GridPos, HubError,
    HubErrorKind, InputEvent, PuzzleSource, PuzzleView, Score, Severity, time_bonus,
};

/// Side length of the board.
pub const LOGIC_GRID_SIZE: usize = 9;

/// A full board of digits. 0 marks an empty cell.
pub type Digits = [[u8; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE];

/// Flat bonus for a hint that completes the board.
const HINT_COMPLETION_BONUS: u32 = 100;
const WRONG_ENTRY_PENALTY: u32 = 5;
const HINT_PENALTY: u32 = 20;

/// One bundled board: the givens and the filled-in solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicGridPuzzle {
    givens: Digits,
    solution: Digits,
}

impl LogicGridPuzzle {
    /// Pairs a board of givens with its solution.
    pub const fn new(givens: Digits, solution: Digits) -> Self {
        Self { givens, solution }
    }

    /// Starting board.
    pub fn givens(&self) -> &Digits {
        &self.givens
    }

    /// Filled board.
    pub fn solution(&self) -> &Digits {
        &self.solution
    }
}

impl PuzzleSource<LogicGridPuzzle> for BundledPuzzles {
    fn catalog(&self, tier: Difficulty) -> &[LogicGridPuzzle] {
        match tier {
            Difficulty::Easy => &puzzles::EASY,
            Difficulty::Medium => &puzzles::MEDIUM,
            Difficulty::Hard => &puzzles::HARD,
        }
    }
}

/// Sudoku controller.
#[derive(Debug)]
pub struct LogicGridController {
    source: Box<dyn PuzzleSource<LogicGridPuzzle>>,
    difficulty: Difficulty,
    board: Digits,
    givens: Digits,
    solution: Digits,
    errors: [[bool; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE],
    selected: Option<GridPos>,
    score: Score,
    hints: u32,
    generation: u64,
    solved: bool,
}

impl LogicGridController {
    /// Creates an empty controller. Nothing is dealt until the tab is selected.
    pub fn new(source: Box<dyn PuzzleSource<LogicGridPuzzle>>, difficulty: Difficulty) -> Self {
        Self {
            source,
            difficulty,
            board: [[0; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE],
            givens: [[0; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE],
            solution: [[0; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE],
            errors: [[false; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE],
            selected: None,
            score: Score::default(),
            hints: 0,
            generation: 0,
            solved: false,
        }
    }

    /// The board as the player sees it.
    pub fn board(&self) -> &Digits {
        &self.board
    }

    /// The solution of the current puzzle.
    pub fn solution(&self) -> &Digits {
        &self.solution
    }

    /// Whether `pos` holds a given.
    pub fn is_fixed(&self, pos: GridPos) -> bool {
        self.givens[pos.row][pos.col] != 0
    }

    /// Whether `pos` is currently marked wrong.
    pub fn has_error(&self, pos: GridPos) -> bool {
        self.errors[pos.row][pos.col]
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Hints left.
    pub fn hints(&self) -> u32 {
        self.hints
    }

    /// Active tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Focused cell.
    pub fn selected(&self) -> Option<GridPos> {
        self.selected
    }

    /// Whether the completion bonus has been paid.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Puzzle generation, bumped on every deal.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_complete(&self) -> bool {
        self.board == self.solution
    }

    fn empty_cells(&self) -> Vec<GridPos> {
        (0..LOGIC_GRID_SIZE)
            .flat_map(|row| (0..LOGIC_GRID_SIZE).map(move |col| GridPos::new(row, col)))
            .filter(|pos| self.board[pos.row][pos.col] == 0)
            .collect()
    }

    fn style_of(&self, pos: GridPos) -> CellStyle {
        if self.is_fixed(pos) {
            CellStyle::Fixed
        } else if self.errors[pos.row][pos.col] {
            CellStyle::Error
        } else if self.selected == Some(pos) {
            CellStyle::Selected
        } else {
            CellStyle::Blank
        }
    }

    fn glyph(&self, pos: GridPos) -> String {
        match self.board[pos.row][pos.col] {
            0 => String::new(),
            digit => digit.to_string(),
        }
    }

    fn check_bounds(pos: GridPos) -> Result<(), HubError> {
        if pos.row >= LOGIC_GRID_SIZE || pos.col >= LOGIC_GRID_SIZE {
            return Err(HubError::new(HubErrorKind::OutOfBounds(pos)));
        }
        Ok(())
    }

    /// Focuses `pos`. Givens cannot be focused.
    #[instrument(skip(self, fx))]
    pub(crate) fn select(&mut self, pos: GridPos, fx: &mut Effects<'_>) -> Result<(), HubError> {
        Self::check_bounds(pos)?;
        if self.is_fixed(pos) {
            return Err(HubError::new(HubErrorKind::FixedCell(pos)));
        }
        fx.first_interaction(Self::GAME);

        let previous = self.selected.replace(pos);
        if let Some(prev) = previous.filter(|prev| *prev != pos) {
            fx.sink
                .mark_cell(Self::GAME, CellRef::Grid(prev), self.style_of(prev));
        }
        fx.sink
            .mark_cell(Self::GAME, CellRef::Grid(pos), self.style_of(pos));
        debug!(%pos, "Cell selected");
        Ok(())
    }

    /// Writes `value` into `position`, or into the focused cell.
    #[instrument(skip(self, fx))]
    pub(crate) fn enter_value(
        &mut self,
        position: Option<GridPos>,
        value: &str,
        fx: &mut Effects<'_>,
    ) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }
        let pos = position
            .or(self.selected)
            .ok_or_else(|| HubError::new(HubErrorKind::NoSelection))?;
        Self::check_bounds(pos)?;
        if self.is_fixed(pos) {
            return Err(HubError::new(HubErrorKind::FixedCell(pos)));
        }
        if self.solved {
            return Err(HubError::new(HubErrorKind::AlreadySolved));
        }

        let cell = CellRef::Grid(pos);
        let digit = match parse_digit(value) {
            Some(digit) => digit,
            None => {
                fx.sink.write_cell(Self::GAME, cell, &self.glyph(pos));
                return Err(HubError::new(HubErrorKind::InvalidInput(value.to_string())));
            }
        };
        fx.first_interaction(Self::GAME);

        self.board[pos.row][pos.col] = digit;
        fx.sink.write_cell(Self::GAME, cell, &self.glyph(pos));

        if digit == 0 {
            self.errors[pos.row][pos.col] = false;
            fx.sink.mark_cell(Self::GAME, cell, self.style_of(pos));
            return Ok(());
        }

        if digit == self.solution[pos.row][pos.col] {
            self.errors[pos.row][pos.col] = false;
            fx.sink.mark_cell(Self::GAME, cell, self.style_of(pos));
            if self.is_complete() {
                fx.finish(Self::GAME);
                self.score.award(time_bonus(fx.elapsed(Self::GAME), 10));
                self.solved = true;
                fx.sink.update_score(Self::GAME, self.score.value());
                fx.notify(
                    "Congratulations! You've completed the puzzle!",
                    Severity::Success,
                );
                info!(score = self.score.value(), "Sudoku solved");
            }
        } else {
            self.errors[pos.row][pos.col] = true;
            self.score.penalize(WRONG_ENTRY_PENALTY);
            fx.sink.mark_cell(Self::GAME, cell, CellStyle::Error);
            fx.sink.update_score(Self::GAME, self.score.value());
            debug!(%pos, digit, "Wrong digit");
        }
        Ok(())
    }

    /// Marks every filled cell that disagrees with the solution.
    #[instrument(skip(self, fx))]
    pub(crate) fn check_all(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }

        let mut wrong = 0usize;
        for row in 0..LOGIC_GRID_SIZE {
            for col in 0..LOGIC_GRID_SIZE {
                let pos = GridPos::new(row, col);
                let digit = self.board[row][col];
                if digit == 0 || self.is_fixed(pos) {
                    continue;
                }
                let is_wrong = digit != self.solution[row][col];
                if is_wrong {
                    wrong += 1;
                }
                if self.errors[row][col] != is_wrong {
                    self.errors[row][col] = is_wrong;
                    fx.sink
                        .mark_cell(Self::GAME, CellRef::Grid(pos), self.style_of(pos));
                }
            }
        }

        info!(wrong, "Board checked");
        match wrong {
            0 => fx.notify("No errors found! Keep going!", Severity::Success),
            1 => fx.notify("Found 1 error", Severity::Error),
            n => fx.notify(&format!("Found {} errors", n), Severity::Error),
        }
        Ok(())
    }

    /// Fills one random empty cell with its solution digit.
    #[instrument(skip(self, fx))]
    pub(crate) fn use_hint(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }
        if self.hints == 0 {
            return Err(HubError::new(HubErrorKind::NoHintsRemaining));
        }
        let empty = self.empty_cells();
        let pos = *empty
            .choose(&mut *fx.rng)
            .ok_or_else(|| HubError::new(HubErrorKind::NoEmptyCells))?;

        self.board[pos.row][pos.col] = self.solution[pos.row][pos.col];
        self.errors[pos.row][pos.col] = false;
        self.hints -= 1;
        self.score.penalize(HINT_PENALTY);

        let cell = CellRef::Grid(pos);
        fx.sink.write_cell(Self::GAME, cell, &self.glyph(pos));
        fx.sink.mark_cell(Self::GAME, cell, self.style_of(pos));
        fx.sink
            .update_aux_counter(Self::GAME, AuxCounter::Hints, self.hints);
        info!(%pos, hints = self.hints, "Hint used");

        if self.is_complete() {
            fx.finish(Self::GAME);
            self.score.award(HINT_COMPLETION_BONUS);
            self.solved = true;
            fx.notify("Congratulations! You solved the puzzle!", Severity::Success);
        }
        fx.sink.update_score(Self::GAME, self.score.value());
        Ok(())
    }

    /// Switches tier and deals a new board.
    #[instrument(skip(self, fx))]
    pub(crate) fn change_difficulty(
        &mut self,
        tier: Difficulty,
        fx: &mut Effects<'_>,
    ) -> Result<(), HubError> {
        self.difficulty = tier;
        self.initialize(fx)
    }
}

impl PuzzleController for LogicGridController {
    const GAME: GameKind = GameKind::LogicGrid;

    #[instrument(skip(self, fx), fields(difficulty = %self.difficulty))]
    fn initialize(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        let puzzle = *self
            .source
            .catalog(self.difficulty)
            .choose(&mut *fx.rng)
            .ok_or_else(|| HubError::new(HubErrorKind::NoPuzzles(Self::GAME)))?;

        self.generation += 1;
        self.givens = puzzle.givens;
        self.board = puzzle.givens;
        self.solution = puzzle.solution;
        self.errors = [[false; LOGIC_GRID_SIZE]; LOGIC_GRID_SIZE];
        self.selected = None;
        self.score = Score::default();
        self.hints = *fx.config.logic_hints();
        self.solved = false;

        fx.restart(Self::GAME);
        fx.sink.render(
            Self::GAME,
            &PuzzleView::LogicGrid {
                difficulty: self.difficulty,
                givens: self.givens,
            },
        );
        fx.sink.update_score(Self::GAME, 0);
        fx.sink
            .update_aux_counter(Self::GAME, AuxCounter::Hints, self.hints);
        info!(generation = self.generation, "Sudoku dealt");
        Ok(())
    }

    fn handle(&mut self, event: &InputEvent, fx: &mut Effects<'_>) -> Result<(), HubError> {
        match event {
            InputEvent::SelectCell { position, .. } => self.select(*position, fx),
            InputEvent::EnterValue {
                position, value, ..
            } => self.enter_value(*position, value, fx),
            InputEvent::NewGame { .. } => self.initialize(fx),
            InputEvent::Check { .. } => self.check_all(fx),
            InputEvent::Hint { .. } => self.use_hint(fx),
            InputEvent::Difficulty { tier, .. } => self.change_difficulty(*tier, fx),
            InputEvent::PauseToggle { .. } => {
                fx.toggle_pause(Self::GAME);
                Ok(())
            }
            InputEvent::SelectClue { .. }
            | InputEvent::FlipCard { .. }
            | InputEvent::Reveal { .. }
            | InputEvent::SelectGame { .. } => Err(HubError::new(HubErrorKind::Unsupported {
                game: Self::GAME,
                action: event.action(),
            })),
        }
    }
}

/// Accepts one digit 0–9, or empty text as 0.
fn parse_digit(value: &str) -> Option<u8> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0);
    }
    let mut chars = value.chars();
    let digit = chars.next()?.to_digit(10)?;
    match chars.next() {
        Some(_) => None,
        None => u8::try_from(digit).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bundled_boards_are_consistent() {
        for tier in Difficulty::iter() {
            let catalog = PuzzleSource::<LogicGridPuzzle>::catalog(&BundledPuzzles, tier);
            assert_eq!(catalog.len(), 3, "{tier}");
            for puzzle in catalog {
                for row in 0..LOGIC_GRID_SIZE {
                    for col in 0..LOGIC_GRID_SIZE {
                        let given = puzzle.givens()[row][col];
                        let solved = puzzle.solution()[row][col];
                        assert!((1..=9).contains(&solved));
                        assert!(given == 0 || given == solved, "{tier} ({row}, {col})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_bundled_solutions_are_valid_sudoku() {
        for tier in Difficulty::iter() {
            for puzzle in PuzzleSource::<LogicGridPuzzle>::catalog(&BundledPuzzles, tier) {
                let s = puzzle.solution();
                for i in 0..LOGIC_GRID_SIZE {
                    let mut row: Vec<u8> = s[i].to_vec();
                    let mut col: Vec<u8> = (0..LOGIC_GRID_SIZE).map(|r| s[r][i]).collect();
                    let mut block: Vec<u8> = (0..LOGIC_GRID_SIZE)
                        .map(|k| s[(i / 3) * 3 + k / 3][(i % 3) * 3 + k % 3])
                        .collect();
                    row.sort_unstable();
                    col.sort_unstable();
                    block.sort_unstable();
                    let expected: Vec<u8> = (1..=9).collect();
                    assert_eq!(row, expected);
                    assert_eq!(col, expected);
                    assert_eq!(block, expected);
                }
            }
        }
    }

    #[test]
    fn test_parse_digit() {
        assert_eq!(parse_digit("7"), Some(7));
        assert_eq!(parse_digit(" 0 "), Some(0));
        assert_eq!(parse_digit(""), Some(0));
        assert_eq!(parse_digit("12"), None);
        assert_eq!(parse_digit("x"), None);
    }
}
