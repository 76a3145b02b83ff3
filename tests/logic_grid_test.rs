//! Tests for the sudoku controller driven through the hub.

use std::time::Duration;

use puzzle_hub::{
    AuxCounter, CellRef, CellStyle, Difficulty, Digits, GameKind, GridPos, Hub, HubBuilder,
    HubConfig, HubErrorKind, InputEvent, LogicGridPuzzle, PuzzleSource, RecordingSink, Selection,
    Severity, SinkEvent,
};

const GAME: GameKind = GameKind::LogicGrid;

/// A single board offered at every tier.
#[derive(Debug)]
struct OneBoard(Vec<LogicGridPuzzle>);

impl PuzzleSource<LogicGridPuzzle> for OneBoard {
    fn catalog(&self, _tier: Difficulty) -> &[LogicGridPuzzle] {
        &self.0
    }
}

/// A valid filled board built from shifted rows.
fn solved_board() -> Digits {
    let mut board = [[0; 9]; 9];
    for (row, digits) in board.iter_mut().enumerate() {
        for (col, digit) in digits.iter_mut().enumerate() {
            *digit = ((row * 3 + row / 3 + col) % 9 + 1) as u8;
        }
    }
    board
}

const OPEN: [GridPos; 3] = [
    GridPos { row: 0, col: 0 },
    GridPos { row: 4, col: 5 },
    GridPos { row: 8, col: 8 },
];

fn hub_with(config: HubConfig, open: &[GridPos]) -> Hub<RecordingSink> {
    let solution = solved_board();
    let mut givens = solution;
    for pos in open {
        givens[pos.row][pos.col] = 0;
    }
    let mut hub = HubBuilder::new(config.with_seed(Some(3)))
        .with_logic_source(OneBoard(vec![LogicGridPuzzle::new(givens, solution)]))
        .build(RecordingSink::new());
    hub.dispatch(InputEvent::SelectGame {
        selection: Selection::Game(GAME),
    })
    .expect("Sudoku deals");
    hub
}

fn enter(hub: &mut Hub<RecordingSink>, pos: GridPos, value: &str) -> Result<(), HubErrorKind> {
    hub.dispatch(InputEvent::EnterValue {
        game: GAME,
        position: Some(pos),
        value: value.to_string(),
    })
    .map_err(|e| e.kind().clone())
}

fn correct(pos: GridPos) -> String {
    solved_board()[pos.row][pos.col].to_string()
}

fn wrong(pos: GridPos) -> String {
    (solved_board()[pos.row][pos.col] % 9 + 1).to_string()
}

#[test]
fn test_correct_entries_in_any_order_pay_one_bonus() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);

    for pos in OPEN.iter().rev() {
        enter(&mut hub, *pos, &correct(*pos)).expect("Correct digit accepted");
    }

    assert!(hub.logic_grid().is_solved());
    assert_eq!(hub.logic_grid().board(), hub.logic_grid().solution());
    assert_eq!(hub.logic_grid().score(), 100);
    assert_eq!(
        hub.sink().notifications(),
        vec![("Congratulations! You've completed the puzzle!", Severity::Success)]
    );
    assert_eq!(hub.session().timers().running_count(), 0);

    let again = enter(&mut hub, OPEN[0], &correct(OPEN[0]));
    assert_eq!(again, Err(HubErrorKind::AlreadySolved));
    assert_eq!(hub.logic_grid().score(), 100);
}

#[test]
fn test_hint_on_solved_board_reports_no_empty_cells() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    for pos in OPEN {
        enter(&mut hub, pos, &correct(pos)).expect("Correct digit accepted");
    }
    assert!(hub.logic_grid().is_solved());

    let err = hub
        .dispatch(InputEvent::Hint { game: GAME })
        .expect_err("Nothing left to fill");

    assert_eq!(err.kind(), &HubErrorKind::NoEmptyCells);
    assert_eq!(hub.logic_grid().hints(), 3);
    assert_eq!(hub.logic_grid().score(), 100);
    assert_eq!(
        hub.sink().notifications().last(),
        Some(&("No empty cells to fill", Severity::Error))
    );
}

#[test]
fn test_completion_bonus_shrinks_with_time() {
    let mut hub = hub_with(HubConfig::default(), &OPEN[..1]);
    hub.dispatch(InputEvent::SelectCell {
        game: GAME,
        position: OPEN[0],
    })
    .expect("Open cell selectable");
    hub.advance(Duration::from_secs(125));

    enter(&mut hub, OPEN[0], &correct(OPEN[0])).expect("Correct digit accepted");

    // 100 - 125 / 10
    assert_eq!(hub.logic_grid().score(), 88);
}

#[test]
fn test_wrong_digit_marks_error_and_clamps_score() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    let pos = OPEN[1];

    enter(&mut hub, pos, &wrong(pos)).expect("Wrong digit is still an entry");

    assert!(hub.logic_grid().has_error(pos));
    assert_eq!(hub.logic_grid().score(), 0);
    assert_eq!(
        hub.sink().last_style(GAME, CellRef::Grid(pos)),
        Some(CellStyle::Error)
    );
    assert!(hub.sink().notifications().is_empty());

    enter(&mut hub, pos, "0").expect("Zero clears");
    assert!(!hub.logic_grid().has_error(pos));
    assert_eq!(hub.logic_grid().board()[pos.row][pos.col], 0);
}

#[test]
fn test_givens_cannot_be_selected_or_overwritten() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    let given = GridPos::new(0, 1);

    let err = hub
        .dispatch(InputEvent::SelectCell {
            game: GAME,
            position: given,
        })
        .expect_err("Given is locked");
    assert_eq!(err.kind(), &HubErrorKind::FixedCell(given));
    assert_eq!(enter(&mut hub, given, "5"), Err(HubErrorKind::FixedCell(given)));
    assert!(hub.sink().notifications().is_empty());
    assert!(!hub.session().state().has_started(GAME));
}

#[test]
fn test_invalid_input_echoes_the_stored_digit() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    let pos = OPEN[2];
    enter(&mut hub, pos, &wrong(pos)).expect("Digit accepted");
    hub.sink_mut().drain();

    let result = enter(&mut hub, pos, "x");

    assert!(matches!(result, Err(HubErrorKind::InvalidInput(_))));
    assert_eq!(
        hub.sink().events(),
        &[SinkEvent::WriteCell {
            game: GAME,
            cell: CellRef::Grid(pos),
            text: wrong(pos),
        }]
    );
}

#[test]
fn test_entry_without_focus_needs_a_selection() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);

    let err = hub
        .dispatch(InputEvent::EnterValue {
            game: GAME,
            position: None,
            value: "4".to_string(),
        })
        .expect_err("Nothing focused");

    assert_eq!(err.kind(), &HubErrorKind::NoSelection);
    assert_eq!(
        hub.sink().notifications(),
        vec![("Please select a cell first", Severity::Error)]
    );
}

#[test]
fn test_check_reports_error_count() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    enter(&mut hub, OPEN[0], &wrong(OPEN[0])).expect("Accepted");
    enter(&mut hub, OPEN[1], &wrong(OPEN[1])).expect("Accepted");
    enter(&mut hub, OPEN[2], &correct(OPEN[2])).expect("Accepted");

    hub.dispatch(InputEvent::Check { game: GAME })
        .expect("Check accepted");

    assert_eq!(
        hub.sink().notifications().last(),
        Some(&("Found 2 errors", Severity::Error))
    );
}

#[test]
fn test_clean_board_check_encourages() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    enter(&mut hub, OPEN[0], &correct(OPEN[0])).expect("Accepted");

    hub.dispatch(InputEvent::Check { game: GAME })
        .expect("Check accepted");

    assert_eq!(
        hub.sink().notifications(),
        vec![("No errors found! Keep going!", Severity::Success)]
    );
}

#[test]
fn test_hints_fill_board_and_pay_completion() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);

    for _ in 0..OPEN.len() {
        hub.dispatch(InputEvent::Hint { game: GAME })
            .expect("Hint accepted");
    }

    assert!(hub.logic_grid().is_solved());
    assert_eq!(hub.logic_grid().hints(), 0);
    // Penalties clamp at zero before the flat bonus lands.
    assert_eq!(hub.logic_grid().score(), 100);
    assert!(hub.sink().events().contains(&SinkEvent::Counter {
        game: GAME,
        counter: AuxCounter::Hints,
        value: 0,
    }));
    assert_eq!(
        hub.sink().notifications(),
        vec![("Congratulations! You solved the puzzle!", Severity::Success)]
    );
}

#[test]
fn test_hint_without_budget_changes_nothing() {
    let mut hub = hub_with(HubConfig::default().with_logic_hints(0), &OPEN);
    let before = *hub.logic_grid().board();

    let err = hub
        .dispatch(InputEvent::Hint { game: GAME })
        .expect_err("No hints left");

    assert_eq!(err.kind(), &HubErrorKind::NoHintsRemaining);
    assert_eq!(hub.logic_grid().board(), &before);
    assert_eq!(
        hub.sink().notifications(),
        vec![("No hints remaining", Severity::Error)]
    );
}

#[test]
fn test_hint_on_full_board_reports_no_empty_cells() {
    let mut hub = hub_with(HubConfig::default(), &[]);

    let err = hub
        .dispatch(InputEvent::Hint { game: GAME })
        .expect_err("Nothing to fill");

    assert_eq!(err.kind(), &HubErrorKind::NoEmptyCells);
    assert_eq!(hub.logic_grid().hints(), 3);
}

#[test]
fn test_pause_blocks_entries_until_resumed() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);
    hub.dispatch(InputEvent::PauseToggle { game: GAME })
        .expect("Pause accepted");

    assert_eq!(
        enter(&mut hub, OPEN[0], &correct(OPEN[0])),
        Err(HubErrorKind::Paused)
    );
    assert_eq!(
        hub.dispatch(InputEvent::Hint { game: GAME })
            .map_err(|e| e.kind().clone()),
        Err(HubErrorKind::Paused)
    );
    assert_eq!(
        hub.dispatch(InputEvent::Check { game: GAME })
            .map_err(|e| e.kind().clone()),
        Err(HubErrorKind::Paused)
    );
    assert_eq!(hub.logic_grid().board()[0][0], 0);
    assert!(
        hub.sink()
            .notifications()
            .contains(&("Game is paused!", Severity::Error))
    );

    hub.dispatch(InputEvent::PauseToggle { game: GAME })
        .expect("Resume accepted");
    enter(&mut hub, OPEN[0], &correct(OPEN[0])).expect("Accepted after resume");
}

#[test]
fn test_difficulty_change_redeals_bundled_board() {
    let mut hub = Hub::new(HubConfig::default().with_seed(Some(9)), RecordingSink::new());
    hub.dispatch(InputEvent::SelectGame {
        selection: Selection::Game(GAME),
    })
    .expect("Sudoku deals");

    hub.dispatch(InputEvent::Difficulty {
        game: GAME,
        tier: Difficulty::Hard,
    })
    .expect("Tier change accepted");

    assert_eq!(hub.logic_grid().difficulty(), Difficulty::Hard);
    assert_eq!(hub.logic_grid().generation(), 2);
    assert_eq!(hub.logic_grid().score(), 0);
    assert_eq!(hub.logic_grid().hints(), 3);
}

#[test]
fn test_reveal_is_not_a_sudoku_control() {
    let mut hub = hub_with(HubConfig::default(), &OPEN);

    let err = hub
        .dispatch(InputEvent::Reveal { game: GAME })
        .expect_err("No reveal for sudoku");

    assert!(matches!(err.kind(), HubErrorKind::Unsupported { .. }));
    assert!(hub.sink().notifications().is_empty());
}
