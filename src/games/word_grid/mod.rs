//! 10×10 crossword with across and down clues.
//!
//! Completion is full-grid equality against the solution. Placements only
//! drive clue numbering and focus movement, so a placement whose answer
//! disagrees with the grid is logged and otherwise tolerated.

mod puzzles;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::hub::{Effects, PuzzleController};
use crate::{
    BundledPuzzles, CellRef, CellStyle, ClueRef, ClueView, Difficulty, GameKind, GridPos,
    HubError, HubErrorKind, InputEvent, PuzzleSource, PuzzleView, Score, Severity, time_bonus,
};

/// Side length of the grid.
pub const WORD_GRID_SIZE: usize = 10;

/// Letters by cell. `None` marks a block.
pub type WordMatrix = [[Option<char>; WORD_GRID_SIZE]; WORD_GRID_SIZE];

const BLOCK: char = '#';
const CORRECT_LETTER_POINTS: u32 = 5;

/// Direction a word runs in.
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
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

/// A numbered clue and where its answer sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPlacement {
    number: u32,
    orientation: Orientation,
    clue: &'static str,
    answer: &'static str,
    row: usize,
    col: usize,
}

impl WordPlacement {
    /// An across clue starting at `(row, col)`.
    pub const fn across(
        number: u32,
        clue: &'static str,
        answer: &'static str,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            number,
            orientation: Orientation::Across,
            clue,
            answer,
            row,
            col,
        }
    }

    /// A down clue starting at `(row, col)`.
    pub const fn down(
        number: u32,
        clue: &'static str,
        answer: &'static str,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            number,
            orientation: Orientation::Down,
            clue,
            answer,
            row,
            col,
        }
    }

    /// Clue number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Clue text.
    pub fn clue(&self) -> &'static str {
        self.clue
    }

    /// Answer as listed with the clue.
    pub fn answer(&self) -> &'static str {
        self.answer
    }

    /// First cell.
    pub fn start(&self) -> GridPos {
        GridPos::new(self.row, self.col)
    }

    /// Cells spanned, clipped to the grid.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        let len = self.answer.chars().count();
        (0..len)
            .map(move |i| match self.orientation {
                Orientation::Across => GridPos::new(self.row, self.col + i),
                Orientation::Down => GridPos::new(self.row + i, self.col),
            })
            .filter(|pos| pos.row < WORD_GRID_SIZE && pos.col < WORD_GRID_SIZE)
    }

    /// Whether the span covers `pos`.
    pub fn contains(&self, pos: GridPos) -> bool {
        let len = self.answer.chars().count();
        match self.orientation {
            Orientation::Across => {
                pos.row == self.row && pos.col >= self.col && pos.col < self.col + len
            }
            Orientation::Down => {
                pos.col == self.col && pos.row >= self.row && pos.row < self.row + len
            }
        }
    }

    fn clue_ref(&self) -> ClueRef {
        ClueRef {
            number: self.number,
            orientation: self.orientation,
        }
    }
}

/// A themed crossword: the solved grid (`#` for blocks) and its clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordGridPuzzle {
    theme: &'static str,
    rows: [&'static str; WORD_GRID_SIZE],
    placements: &'static [WordPlacement],
}

impl WordGridPuzzle {
    /// Builds a puzzle. Each row is read left to right; short rows are
    /// padded with blocks.
    pub const fn new(
        theme: &'static str,
        rows: [&'static str; WORD_GRID_SIZE],
        placements: &'static [WordPlacement],
    ) -> Self {
        Self {
            theme,
            rows,
            placements,
        }
    }

    /// Theme shown above the grid.
    pub fn theme(&self) -> &'static str {
        self.theme
    }

    /// Clues.
    pub fn placements(&self) -> &'static [WordPlacement] {
        self.placements
    }

    /// The solved grid.
    pub fn solution(&self) -> WordMatrix {
        let mut matrix = [[None; WORD_GRID_SIZE]; WORD_GRID_SIZE];
        for (row, line) in self.rows.iter().enumerate() {
            for (col, letter) in line.chars().take(WORD_GRID_SIZE).enumerate() {
                if letter != BLOCK {
                    matrix[row][col] = Some(letter.to_ascii_uppercase());
                }
            }
        }
        matrix
    }

    /// Numbers of placements whose answer does not read off the grid.
    pub fn defects(&self) -> Vec<u32> {
        let solution = self.solution();
        self.placements
            .iter()
            .filter(|placement| {
                let cells: Vec<GridPos> = placement.cells().collect();
                cells.len() != placement.answer.chars().count()
                    || cells
                        .iter()
                        .zip(placement.answer.chars())
                        .any(|(pos, letter)| solution[pos.row][pos.col] != Some(letter))
            })
            .map(|placement| placement.number)
            .collect()
    }
}

impl PuzzleSource<WordGridPuzzle> for BundledPuzzles {
    fn catalog(&self, _tier: Difficulty) -> &[WordGridPuzzle] {
        &puzzles::PUZZLES
    }
}

/// Crossword controller.
#[derive(Debug)]
pub struct WordGridController {
    source: Box<dyn PuzzleSource<WordGridPuzzle>>,
    puzzle: Option<WordGridPuzzle>,
    entries: WordMatrix,
    solution: WordMatrix,
    errors: [[bool; WORD_GRID_SIZE]; WORD_GRID_SIZE],
    selected: Option<GridPos>,
    word: Option<WordPlacement>,
    direction: Option<Orientation>,
    score: Score,
    generation: u64,
    solved: bool,
}

impl WordGridController {
    /// Creates an empty controller.
    pub fn new(source: Box<dyn PuzzleSource<WordGridPuzzle>>) -> Self {
        Self {
            source,
            puzzle: None,
            entries: [[None; WORD_GRID_SIZE]; WORD_GRID_SIZE],
            solution: [[None; WORD_GRID_SIZE]; WORD_GRID_SIZE],
            errors: [[false; WORD_GRID_SIZE]; WORD_GRID_SIZE],
            selected: None,
            word: None,
            direction: None,
            score: Score::default(),
            generation: 0,
            solved: false,
        }
    }

    /// Current puzzle, once dealt.
    pub fn puzzle(&self) -> Option<&WordGridPuzzle> {
        self.puzzle.as_ref()
    }

    /// Letters typed so far.
    pub fn entries(&self) -> &WordMatrix {
        &self.entries
    }

    /// Solved grid.
    pub fn solution(&self) -> &WordMatrix {
        &self.solution
    }

    /// Focused cell.
    pub fn selected(&self) -> Option<GridPos> {
        self.selected
    }

    /// Clue driving focus movement.
    pub fn active_clue(&self) -> Option<ClueRef> {
        self.word.map(|word| word.clue_ref())
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Whether the grid is finished, by solving or revealing.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Puzzle generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_block(&self, pos: GridPos) -> bool {
        self.solution[pos.row][pos.col].is_none()
    }

    fn is_correct(&self, pos: GridPos) -> bool {
        self.entries[pos.row][pos.col].is_some()
            && self.entries[pos.row][pos.col] == self.solution[pos.row][pos.col]
    }

    fn is_complete(&self) -> bool {
        self.entries == self.solution
    }

    fn content_style(&self, pos: GridPos) -> CellStyle {
        if self.errors[pos.row][pos.col] {
            CellStyle::Error
        } else if self.is_correct(pos) {
            CellStyle::Correct
        } else {
            CellStyle::Blank
        }
    }

    fn glyph(&self, pos: GridPos) -> String {
        self.entries[pos.row][pos.col]
            .map(String::from)
            .unwrap_or_default()
    }

    fn placements(&self) -> &'static [WordPlacement] {
        self.puzzle.map(|p| p.placements).unwrap_or_default()
    }

    fn check_cell(&self, pos: GridPos) -> Result<(), HubError> {
        if pos.row >= WORD_GRID_SIZE || pos.col >= WORD_GRID_SIZE {
            return Err(HubError::new(HubErrorKind::OutOfBounds(pos)));
        }
        if self.is_block(pos) {
            return Err(HubError::new(HubErrorKind::BlockCell(pos)));
        }
        Ok(())
    }

    fn move_focus(&mut self, pos: GridPos, fx: &mut Effects<'_>) {
        if let Some(prev) = self.selected.replace(pos).filter(|prev| *prev != pos) {
            fx.sink
                .mark_cell(Self::GAME, CellRef::Grid(prev), self.content_style(prev));
        }
        fx.sink
            .mark_cell(Self::GAME, CellRef::Grid(pos), CellStyle::Selected);
    }

    /// Picks the word under `pos`, keeping the current direction when the
    /// cell is shared.
    fn resolve_word(&self, pos: GridPos) -> Option<WordPlacement> {
        let find = |orientation: Orientation| {
            self.placements()
                .iter()
                .find(|p| p.orientation == orientation && p.contains(pos))
                .copied()
        };
        let across = find(Orientation::Across);
        let down = find(Orientation::Down);
        match (across, down) {
            (Some(_), Some(down)) if self.direction == Some(Orientation::Down) => Some(down),
            (Some(across), _) => Some(across),
            (None, down) => down,
        }
    }

    /// Focuses `pos` and the word through it.
    #[instrument(skip(self, fx))]
    pub(crate) fn select(&mut self, pos: GridPos, fx: &mut Effects<'_>) -> Result<(), HubError> {
        self.check_cell(pos)?;
        fx.first_interaction(Self::GAME);

        self.move_focus(pos, fx);
        self.word = self.resolve_word(pos);
        if let Some(word) = self.word {
            self.direction = Some(word.orientation);
        }
        fx.sink.highlight_clue(Self::GAME, self.active_clue());
        debug!(%pos, clue = ?self.active_clue(), "Cell selected");
        Ok(())
    }

    /// Focuses the first open cell of a clue.
    #[instrument(skip(self, fx))]
    pub(crate) fn select_clue(
        &mut self,
        number: u32,
        orientation: Orientation,
        fx: &mut Effects<'_>,
    ) -> Result<(), HubError> {
        let word = self
            .placements()
            .iter()
            .find(|p| p.number == number && p.orientation == orientation)
            .copied()
            .ok_or_else(|| HubError::new(HubErrorKind::UnknownClue { number, orientation }))?;
        let first = word
            .cells()
            .find(|pos| !self.is_block(*pos))
            .ok_or_else(|| HubError::new(HubErrorKind::BlockCell(word.start())))?;
        fx.first_interaction(Self::GAME);

        self.word = Some(word);
        self.direction = Some(orientation);
        self.move_focus(first, fx);
        fx.sink.highlight_clue(Self::GAME, self.active_clue());
        Ok(())
    }

    /// Types a letter into `position`, or into the focused cell.
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
        self.check_cell(pos)?;
        if self.solved {
            return Err(HubError::new(HubErrorKind::AlreadySolved));
        }

        let cell = CellRef::Grid(pos);
        let letter = match normalize_letter(value) {
            Ok(letter) => letter,
            Err(()) => {
                fx.sink.write_cell(Self::GAME, cell, &self.glyph(pos));
                return Err(HubError::new(HubErrorKind::InvalidInput(value.to_string())));
            }
        };
        fx.first_interaction(Self::GAME);

        let was_correct = self.is_correct(pos);
        self.entries[pos.row][pos.col] = letter;
        self.errors[pos.row][pos.col] = false;
        fx.sink.write_cell(Self::GAME, cell, &self.glyph(pos));
        fx.sink.mark_cell(Self::GAME, cell, self.content_style(pos));

        if self.is_correct(pos) && !was_correct {
            self.score.award(CORRECT_LETTER_POINTS);
            fx.sink.update_score(Self::GAME, self.score.value());
        }

        if letter.is_some() {
            self.advance_focus(pos, fx);
        }

        if self.is_complete() {
            fx.finish(Self::GAME);
            self.score.award(time_bonus(fx.elapsed(Self::GAME), 10));
            self.solved = true;
            fx.sink.update_score(Self::GAME, self.score.value());
            fx.notify("Congratulations! You solved the crossword!", Severity::Success);
            info!(score = self.score.value(), "Crossword solved");
        }
        Ok(())
    }

    fn advance_focus(&mut self, from: GridPos, fx: &mut Effects<'_>) {
        let Some(word) = self.word.filter(|word| word.contains(from)) else {
            return;
        };
        let next = match word.orientation {
            Orientation::Across => GridPos::new(from.row, from.col + 1),
            Orientation::Down => GridPos::new(from.row + 1, from.col),
        };
        if word.contains(next)
            && next.row < WORD_GRID_SIZE
            && next.col < WORD_GRID_SIZE
            && !self.is_block(next)
        {
            self.move_focus(next, fx);
        }
    }

    /// Marks every filled cell that disagrees with the solution.
    #[instrument(skip(self, fx))]
    pub(crate) fn check_all(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }

        let mut wrong = 0usize;
        for row in 0..WORD_GRID_SIZE {
            for col in 0..WORD_GRID_SIZE {
                let pos = GridPos::new(row, col);
                if self.is_block(pos) || self.entries[row][col].is_none() {
                    continue;
                }
                let is_wrong = !self.is_correct(pos);
                if is_wrong {
                    wrong += 1;
                }
                self.errors[row][col] = is_wrong;
                fx.sink
                    .mark_cell(Self::GAME, CellRef::Grid(pos), self.content_style(pos));
            }
        }

        info!(wrong, "Crossword checked");
        match wrong {
            0 => fx.notify("No errors found! Keep going!", Severity::Success),
            1 => fx.notify("Found 1 error", Severity::Error),
            n => fx.notify(&format!("Found {} errors", n), Severity::Error),
        }
        Ok(())
    }

    /// Fills in every answer. No bonus is paid.
    #[instrument(skip(self, fx))]
    pub(crate) fn reveal(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        if fx.is_paused(Self::GAME) {
            return Err(HubError::new(HubErrorKind::Paused));
        }
        if self.solved {
            return Err(HubError::new(HubErrorKind::AlreadySolved));
        }

        self.entries = self.solution;
        self.errors = [[false; WORD_GRID_SIZE]; WORD_GRID_SIZE];
        for row in 0..WORD_GRID_SIZE {
            for col in 0..WORD_GRID_SIZE {
                let pos = GridPos::new(row, col);
                if self.is_block(pos) {
                    continue;
                }
                let cell = CellRef::Grid(pos);
                fx.sink.write_cell(Self::GAME, cell, &self.glyph(pos));
                fx.sink.mark_cell(Self::GAME, cell, CellStyle::Correct);
            }
        }
        fx.finish(Self::GAME);
        self.solved = true;
        fx.notify("Answers revealed!", Severity::Success);
        info!("Crossword revealed");
        Ok(())
    }
}

impl PuzzleController for WordGridController {
    const GAME: GameKind = GameKind::WordGrid;

    #[instrument(skip(self, fx))]
    fn initialize(&mut self, fx: &mut Effects<'_>) -> Result<(), HubError> {
        let puzzle = *self
            .source
            .catalog(Difficulty::default())
            .choose(&mut *fx.rng)
            .ok_or_else(|| HubError::new(HubErrorKind::NoPuzzles(Self::GAME)))?;

        let defects = puzzle.defects();
        if !defects.is_empty() {
            warn!(theme = puzzle.theme, ?defects, "Clue answers disagree with the grid");
        }

        self.generation += 1;
        self.puzzle = Some(puzzle);
        self.solution = puzzle.solution();
        self.entries = [[None; WORD_GRID_SIZE]; WORD_GRID_SIZE];
        self.errors = [[false; WORD_GRID_SIZE]; WORD_GRID_SIZE];
        self.selected = None;
        self.word = None;
        self.direction = None;
        self.score = Score::default();
        self.solved = false;

        fx.restart(Self::GAME);
        fx.sink.render(
            Self::GAME,
            &PuzzleView::WordGrid {
                theme: puzzle.theme.to_string(),
                blocks: self.solution.map(|row| row.map(|cell| cell.is_none())),
                clues: puzzle
                    .placements
                    .iter()
                    .map(|p| ClueView {
                        number: p.number,
                        orientation: p.orientation,
                        clue: p.clue.to_string(),
                        start: p.start(),
                        length: p.answer.chars().count(),
                    })
                    .collect(),
            },
        );
        fx.sink.update_score(Self::GAME, 0);
        fx.sink.highlight_clue(Self::GAME, None);
        info!(theme = puzzle.theme, generation = self.generation, "Crossword dealt");
        Ok(())
    }

    fn handle(&mut self, event: &InputEvent, fx: &mut Effects<'_>) -> Result<(), HubError> {
        match event {
            InputEvent::SelectCell { position, .. } => self.select(*position, fx),
            InputEvent::SelectClue {
                number,
                orientation,
                ..
            } => self.select_clue(*number, *orientation, fx),
            InputEvent::EnterValue {
                position, value, ..
            } => self.enter_value(*position, value, fx),
            InputEvent::NewGame { .. } => self.initialize(fx),
            InputEvent::Check { .. } => self.check_all(fx),
            InputEvent::Reveal { .. } => self.reveal(fx),
            InputEvent::PauseToggle { .. } => {
                fx.toggle_pause(Self::GAME);
                Ok(())
            }
            InputEvent::Hint { .. }
            | InputEvent::Difficulty { .. }
            | InputEvent::FlipCard { .. }
            | InputEvent::SelectGame { .. } => Err(HubError::new(HubErrorKind::Unsupported {
                game: Self::GAME,
                action: event.action(),
            })),
        }
    }
}

/// Uppercases the first character of `value`. Empty input clears.
fn normalize_letter(value: &str) -> Result<Option<char>, ()> {
    match value.trim().chars().next() {
        None => Ok(None),
        Some(c) if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase())),
        Some(_) => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter("a"), Ok(Some('A')));
        assert_eq!(normalize_letter("xyz"), Ok(Some('X')));
        assert_eq!(normalize_letter(""), Ok(None));
        assert_eq!(normalize_letter("7"), Err(()));
    }

    #[test]
    fn test_placement_span() {
        let word = WordPlacement::down(3, "clue", "ABCD", 8, 2);
        assert!(word.contains(GridPos::new(9, 2)));
        assert!(word.contains(GridPos::new(11, 2)));
        assert!(!word.contains(GridPos::new(9, 3)));
        assert_eq!(word.cells().count(), 2);
    }

    #[test]
    fn test_bundled_grids_are_square() {
        for puzzle in PuzzleSource::<WordGridPuzzle>::catalog(&BundledPuzzles, Difficulty::Easy) {
            for row in puzzle.rows {
                assert_eq!(row.chars().count(), WORD_GRID_SIZE, "{}", puzzle.theme);
            }
        }
    }

    #[test]
    fn test_defects_flag_mismatched_answers() {
        const CLUES: [WordPlacement; 2] = [
            WordPlacement::across(1, "Pet", "CAT", 0, 0),
            WordPlacement::across(2, "Wrong", "DOG", 0, 0),
        ];
        let puzzle = WordGridPuzzle::new(
            "Test",
            [
                "CAT#######",
                "##########",
                "##########",
                "##########",
                "##########",
                "##########",
                "##########",
                "##########",
                "##########",
                "##########",
            ],
            &CLUES,
        );
        assert_eq!(puzzle.defects(), vec![2]);
    }
}
