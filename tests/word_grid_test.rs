//! Tests for the crossword controller driven through the hub.

use puzzle_hub::{
    BundledPuzzles, CellRef, CellStyle, ClueRef, Difficulty, GameKind, GridPos, Hub, HubBuilder,
    HubConfig, HubErrorKind, InputEvent, Orientation, PuzzleSource, RecordingSink, Selection,
    Severity, SinkEvent, WordGridPuzzle, WordPlacement,
};

const GAME: GameKind = GameKind::WordGrid;

const CLUES: [WordPlacement; 2] = [
    WordPlacement::across(1, "Purring pet", "CAT", 0, 0),
    WordPlacement::down(1, "It has four wheels", "CAR", 0, 0),
];

/// CAT across and CAR down sharing the top-left square.
const SMALL: WordGridPuzzle = WordGridPuzzle::new(
    "Test",
    ["CAT", "A", "R", "", "", "", "", "", "", ""],
    &CLUES,
);

static SMALL_CATALOG: [WordGridPuzzle; 1] = [SMALL];

#[derive(Debug)]
struct SmallGrid;

impl PuzzleSource<WordGridPuzzle> for SmallGrid {
    fn catalog(&self, _tier: Difficulty) -> &[WordGridPuzzle] {
        &SMALL_CATALOG
    }
}

fn hub() -> Hub<RecordingSink> {
    let mut hub = HubBuilder::new(HubConfig::default().with_seed(Some(1)))
        .with_word_source(SmallGrid)
        .build(RecordingSink::new());
    hub.dispatch(InputEvent::SelectGame {
        selection: Selection::Game(GAME),
    })
    .expect("Crossword dealt");
    hub
}

fn select(hub: &mut Hub<RecordingSink>, row: usize, col: usize) -> Result<(), HubErrorKind> {
    hub.dispatch(InputEvent::SelectCell {
        game: GAME,
        position: GridPos::new(row, col),
    })
    .map_err(|e| e.kind().clone())
}

fn type_letter(hub: &mut Hub<RecordingSink>, value: &str) -> Result<(), HubErrorKind> {
    hub.dispatch(InputEvent::EnterValue {
        game: GAME,
        position: None,
        value: value.to_string(),
    })
    .map_err(|e| e.kind().clone())
}

fn clue(number: u32, orientation: Orientation) -> Option<ClueRef> {
    Some(ClueRef {
        number,
        orientation,
    })
}

#[test]
fn test_shared_cell_defaults_across_and_keeps_down() {
    let mut hub = hub();

    select(&mut hub, 0, 0).expect("Open cell");
    assert_eq!(hub.word_grid().active_clue(), clue(1, Orientation::Across));

    hub.dispatch(InputEvent::SelectClue {
        game: GAME,
        number: 1,
        orientation: Orientation::Down,
    })
    .expect("Clue exists");
    assert_eq!(hub.word_grid().active_clue(), clue(1, Orientation::Down));
    assert_eq!(hub.word_grid().selected(), Some(GridPos::new(0, 0)));

    select(&mut hub, 0, 0).expect("Open cell");
    assert_eq!(hub.word_grid().active_clue(), clue(1, Orientation::Down));

    select(&mut hub, 0, 2).expect("Open cell");
    assert_eq!(hub.word_grid().active_clue(), clue(1, Orientation::Across));
}

#[test]
fn test_typing_advances_along_the_word() {
    let mut hub = hub();
    select(&mut hub, 0, 0).expect("Open cell");

    type_letter(&mut hub, "c").expect("Letter");
    assert_eq!(hub.word_grid().entries()[0][0], Some('C'));
    assert_eq!(hub.word_grid().selected(), Some(GridPos::new(0, 1)));
    type_letter(&mut hub, "a").expect("Letter");
    assert_eq!(hub.word_grid().selected(), Some(GridPos::new(0, 2)));
    assert_eq!(hub.word_grid().score(), 10);

    // Last cell of the word keeps focus.
    type_letter(&mut hub, "x").expect("Wrong letter is still an entry");
    assert_eq!(hub.word_grid().selected(), Some(GridPos::new(0, 2)));
    assert_eq!(hub.word_grid().score(), 10);
}

const STACKED_CLUES: [WordPlacement; 2] = [
    WordPlacement::across(1, "Toward", "TO", 0, 0),
    WordPlacement::down(2, "Compass point", "NE", 1, 1),
];

/// A down word starting right below the end of an across word.
static STACKED: [WordGridPuzzle; 1] = [WordGridPuzzle::new(
    "Stacked",
    ["TO", "#N", "#E", "", "", "", "", "", "", ""],
    &STACKED_CLUES,
)];

#[derive(Debug)]
struct StackedGrid;

impl PuzzleSource<WordGridPuzzle> for StackedGrid {
    fn catalog(&self, _tier: Difficulty) -> &[WordGridPuzzle] {
        &STACKED
    }
}

#[test]
fn test_entry_outside_active_word_keeps_focus() {
    let mut hub = HubBuilder::new(HubConfig::default().with_seed(Some(1)))
        .with_word_source(StackedGrid)
        .build(RecordingSink::new());
    hub.dispatch(InputEvent::SelectGame {
        selection: Selection::Game(GAME),
    })
    .expect("Crossword dealt");
    select(&mut hub, 2, 1).expect("Open cell");
    assert_eq!(hub.word_grid().active_clue(), clue(2, Orientation::Down));

    hub.dispatch(InputEvent::EnterValue {
        game: GAME,
        position: Some(GridPos::new(0, 1)),
        value: "O".to_string(),
    })
    .expect("Letter");

    assert_eq!(hub.word_grid().entries()[0][1], Some('O'));
    assert_eq!(hub.word_grid().selected(), Some(GridPos::new(2, 1)));
}

#[test]
fn test_retyping_a_correct_letter_scores_once() {
    let mut hub = hub();
    select(&mut hub, 1, 0).expect("Open cell");
    type_letter(&mut hub, "A").expect("Letter");
    select(&mut hub, 1, 0).expect("Open cell");
    type_letter(&mut hub, "alpha").expect("First letter kept");

    assert_eq!(hub.word_grid().score(), 5);
    assert_eq!(hub.word_grid().entries()[1][0], Some('A'));
}

#[test]
fn test_filling_every_cell_completes() {
    let mut hub = hub();
    select(&mut hub, 0, 0).expect("Open cell");
    for letter in ["C", "A", "T"] {
        type_letter(&mut hub, letter).expect("Letter");
    }
    assert!(!hub.word_grid().is_solved());

    hub.dispatch(InputEvent::SelectClue {
        game: GAME,
        number: 1,
        orientation: Orientation::Down,
    })
    .expect("Clue exists");
    for letter in ["C", "A", "R"] {
        type_letter(&mut hub, letter).expect("Letter");
    }

    assert!(hub.word_grid().is_solved());
    assert_eq!(hub.word_grid().entries(), hub.word_grid().solution());
    // Five distinct letters, then the time bonus at zero seconds.
    assert_eq!(hub.word_grid().score(), 125);
    assert_eq!(
        hub.sink().notifications(),
        vec![("Congratulations! You solved the crossword!", Severity::Success)]
    );
    assert_eq!(type_letter(&mut hub, "C"), Err(HubErrorKind::AlreadySolved));
}

#[test]
fn test_non_letters_and_blocks_are_silent() {
    let mut hub = hub();

    assert_eq!(
        select(&mut hub, 5, 5),
        Err(HubErrorKind::BlockCell(GridPos::new(5, 5)))
    );
    assert_eq!(
        select(&mut hub, 10, 0),
        Err(HubErrorKind::OutOfBounds(GridPos::new(10, 0)))
    );
    select(&mut hub, 0, 1).expect("Open cell");
    assert_eq!(
        type_letter(&mut hub, "7"),
        Err(HubErrorKind::InvalidInput("7".to_string()))
    );
    assert_eq!(hub.word_grid().entries()[0][1], None);
    assert!(hub.sink().notifications().is_empty());
}

#[test]
fn test_empty_input_clears_the_cell() {
    let mut hub = hub();
    select(&mut hub, 2, 0).expect("Open cell");
    type_letter(&mut hub, "q").expect("Letter");
    type_letter(&mut hub, "").expect("Clear");

    assert_eq!(hub.word_grid().entries()[2][0], None);
    assert_eq!(hub.word_grid().selected(), Some(GridPos::new(2, 0)));
}

#[test]
fn test_check_marks_wrong_letters() {
    let mut hub = hub();
    select(&mut hub, 0, 0).expect("Open cell");
    type_letter(&mut hub, "C").expect("Letter");
    type_letter(&mut hub, "Z").expect("Letter");

    hub.dispatch(InputEvent::Check { game: GAME })
        .expect("Check accepted");

    assert_eq!(
        hub.sink().last_style(GAME, CellRef::Grid(GridPos::new(0, 1))),
        Some(CellStyle::Error)
    );
    assert_eq!(
        hub.sink().last_style(GAME, CellRef::Grid(GridPos::new(0, 0))),
        Some(CellStyle::Correct)
    );
    assert_eq!(
        hub.sink().notifications(),
        vec![("Found 1 error", Severity::Error)]
    );
}

#[test]
fn test_reveal_finishes_without_bonus() {
    let mut hub = hub();
    select(&mut hub, 0, 0).expect("Open cell");

    hub.dispatch(InputEvent::Reveal { game: GAME })
        .expect("Reveal accepted");

    assert!(hub.word_grid().is_solved());
    assert_eq!(hub.word_grid().entries(), hub.word_grid().solution());
    assert_eq!(hub.word_grid().score(), 0);
    assert_eq!(hub.session().timers().running_count(), 0);
    assert_eq!(
        hub.sink().notifications(),
        vec![("Answers revealed!", Severity::Success)]
    );
}

#[test]
fn test_unknown_clue_is_rejected() {
    let mut hub = hub();
    let err = hub
        .dispatch(InputEvent::SelectClue {
            game: GAME,
            number: 9,
            orientation: Orientation::Across,
        })
        .expect_err("No such clue");

    assert_eq!(
        err.kind(),
        &HubErrorKind::UnknownClue {
            number: 9,
            orientation: Orientation::Across
        }
    );
}

#[test]
fn test_pause_rejects_letters_and_reveal() {
    let mut hub = hub();
    select(&mut hub, 0, 0).expect("Open cell");
    hub.dispatch(InputEvent::PauseToggle { game: GAME })
        .expect("Pause");

    assert_eq!(type_letter(&mut hub, "C"), Err(HubErrorKind::Paused));
    assert_eq!(
        hub.dispatch(InputEvent::Reveal { game: GAME })
            .map_err(|e| e.kind().clone()),
        Err(HubErrorKind::Paused)
    );
    assert!(!hub.word_grid().is_solved());
    assert_eq!(hub.word_grid().entries()[0][0], None);
}

#[test]
fn test_pause_rejects_check_without_marking() {
    let mut hub = hub();
    select(&mut hub, 0, 0).expect("Open cell");
    type_letter(&mut hub, "Z").expect("Letter");
    hub.dispatch(InputEvent::PauseToggle { game: GAME })
        .expect("Pause");
    let before = hub.sink().events().len();

    let check = hub
        .dispatch(InputEvent::Check { game: GAME })
        .map_err(|e| e.kind().clone());

    assert_eq!(check, Err(HubErrorKind::Paused));
    assert_eq!(hub.word_grid().score(), 0);
    assert!(
        !hub.sink().events()[before..]
            .iter()
            .any(|event| matches!(event, SinkEvent::MarkCell { .. } | SinkEvent::Score { .. }))
    );
    assert_eq!(
        hub.sink().notifications().last(),
        Some(&("Game is paused!", Severity::Error))
    );
}

#[test]
fn test_hint_is_not_a_crossword_control() {
    let mut hub = hub();
    let err = hub
        .dispatch(InputEvent::Hint { game: GAME })
        .expect_err("No crossword hint");
    assert!(matches!(err.kind(), HubErrorKind::Unsupported { .. }));
}

#[test]
fn test_bundled_crosswords_deal() {
    let mut hub = Hub::new(HubConfig::default().with_seed(Some(4)), RecordingSink::new());
    hub.dispatch(InputEvent::SelectGame {
        selection: Selection::Game(GAME),
    })
    .expect("Crossword dealt");

    let puzzle = hub.word_grid().puzzle().expect("Puzzle dealt");
    assert!(
        PuzzleSource::<WordGridPuzzle>::catalog(&BundledPuzzles, Difficulty::Easy)
            .iter()
            .any(|p| p.theme() == puzzle.theme())
    );
    assert!(!puzzle.placements().is_empty());
}
