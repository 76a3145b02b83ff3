//! Tests for tab switching, first-interaction timers and pause.

use std::time::Duration;

use puzzle_hub::{
    GameKind, GridPos, Hub, HubConfig, HubErrorKind, InputEvent, RecordingSink, Selection,
    Severity,
};

fn hub() -> Hub<RecordingSink> {
    Hub::new(HubConfig::default().with_seed(Some(11)), RecordingSink::new())
}

fn select(hub: &mut Hub<RecordingSink>, selection: Selection) {
    hub.dispatch(InputEvent::SelectGame { selection })
        .expect("Tab switch accepted");
}

/// First open sudoku cell on the dealt board.
fn open_cell(hub: &Hub<RecordingSink>) -> GridPos {
    let board = hub.logic_grid().board();
    (0..9)
        .flat_map(|row| (0..9).map(move |col| GridPos::new(row, col)))
        .find(|pos| board[pos.row][pos.col] == 0)
        .expect("Bundled board has open cells")
}

fn touch_logic_grid(hub: &mut Hub<RecordingSink>) {
    let position = open_cell(hub);
    hub.dispatch(InputEvent::SelectCell {
        game: GameKind::LogicGrid,
        position,
    })
    .expect("Open cell selectable");
}

#[test]
fn test_timer_waits_for_first_interaction() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::LogicGrid));

    hub.advance(Duration::from_secs(5));
    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 0);
    assert!(!hub.session().state().has_started(GameKind::LogicGrid));
    assert_eq!(hub.pending_tasks(), 0);

    touch_logic_grid(&mut hub);
    hub.advance(Duration::from_secs(3));
    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 3);
    assert_eq!(hub.sink().last_timer(GameKind::LogicGrid), Some("00:03"));
}

#[test]
fn test_repeated_interaction_starts_one_tick_sequence() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::LogicGrid));

    touch_logic_grid(&mut hub);
    touch_logic_grid(&mut hub);
    assert_eq!(hub.pending_tasks(), 1);

    hub.advance(Duration::from_secs(2));
    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 2);
}

#[test]
fn test_switch_zeroes_and_stops_every_timer() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::LogicGrid));
    touch_logic_grid(&mut hub);
    hub.advance(Duration::from_secs(4));

    select(&mut hub, Selection::Game(GameKind::WordGrid));

    for game in GameKind::ALL {
        let timer = hub.session().timers().state(game);
        assert_eq!(timer.elapsed(), 0, "{game}");
        assert!(!timer.running(), "{game}");
        assert!(!hub.session().state().has_started(game), "{game}");
    }
    assert_eq!(hub.session().active_game(), Some(GameKind::WordGrid));
    assert_eq!(hub.sink().last_timer(GameKind::LogicGrid), Some("00:00"));
}

#[test]
fn test_tips_panel_leaves_nothing_running() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::LogicGrid));
    touch_logic_grid(&mut hub);

    select(&mut hub, Selection::Tips);

    assert_eq!(hub.session().active_game(), None);
    assert_eq!(hub.session().timers().running_count(), 0);
    assert_eq!(hub.pending_tasks(), 0);
    hub.advance(Duration::from_secs(10));
    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 0);
}

#[test]
fn test_input_for_hidden_game_is_refused_with_notice() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::WordGrid));

    let err = hub
        .dispatch(InputEvent::Hint {
            game: GameKind::LogicGrid,
        })
        .expect_err("Sudoku is not on screen");

    assert_eq!(err.kind(), &HubErrorKind::NotActive(GameKind::LogicGrid));
    assert_eq!(
        hub.sink().notifications(),
        vec![("Switch to Sudoku first", Severity::Error)]
    );
}

#[test]
fn test_pause_freezes_elapsed_until_resumed() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::LogicGrid));
    touch_logic_grid(&mut hub);
    hub.advance(Duration::from_secs(2));

    hub.dispatch(InputEvent::PauseToggle {
        game: GameKind::LogicGrid,
    })
    .expect("Pause accepted");
    assert!(hub.session().is_paused(GameKind::LogicGrid));
    hub.advance(Duration::from_secs(5));
    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 2);

    hub.dispatch(InputEvent::PauseToggle {
        game: GameKind::LogicGrid,
    })
    .expect("Resume accepted");
    hub.advance(Duration::from_secs(1));
    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 3);

    let notes = hub.sink().notifications();
    assert_eq!(
        notes,
        vec![
            ("Game paused", Severity::Success),
            ("Game resumed", Severity::Success)
        ]
    );
}

#[test]
fn test_new_game_restarts_the_clock() {
    let mut hub = hub();
    select(&mut hub, Selection::Game(GameKind::LogicGrid));
    touch_logic_grid(&mut hub);
    hub.advance(Duration::from_secs(7));

    hub.dispatch(InputEvent::NewGame {
        game: GameKind::LogicGrid,
    })
    .expect("New game accepted");

    assert_eq!(hub.session().elapsed(GameKind::LogicGrid), 0);
    assert!(!hub.session().state().has_started(GameKind::LogicGrid));
    assert_eq!(hub.pending_tasks(), 0);
    assert_eq!(hub.logic_grid().generation(), 2);
}
