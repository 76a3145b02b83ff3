//! Terminal front end for the hub.

mod input;
mod sink;
mod ui;

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use puzzle_hub::{
    Difficulty, GameKind, Hub, HubConfig, InputEvent, LOGIC_GRID_SIZE, PuzzleView,
    Selection, WORD_GRID_SIZE,
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use sink::TerminalSink;
use ui::{Cursors, TABS};

/// Runs the interactive terminal session until the player quits.
pub async fn run_tui(config: HubConfig, log_file: &Path) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Puzzle Hub TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let sink = TerminalSink::new(config.notification_ttl());
    let mut app = App::new(Hub::new(config, sink));
    let res = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = res {
        tracing::error!(error = %e, "TUI exited with error");
    }
    info!("Puzzle Hub TUI closed");
    res
}

#[derive(Debug)]
struct App {
    hub: Hub<TerminalSink>,
    cursors: Cursors,
    tab: usize,
}

impl App {
    fn new(hub: Hub<TerminalSink>) -> Self {
        Self {
            hub,
            cursors: Cursors::default(),
            tab: 0,
        }
    }

    #[instrument(skip_all)]
    async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        self.send(InputEvent::SelectGame {
            selection: TABS[self.tab],
        });
        let mut last = Instant::now();

        loop {
            let now = Instant::now();
            self.hub.advance(now.duration_since(last));
            last = now;
            self.hub.sink_mut().expire_toasts(now);

            terminal.draw(|f| ui::draw(f, self.hub.sink(), &self.cursors))?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Player quit");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Returns `false` when the player asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Tab => {
                self.tab = (self.tab + 1) % TABS.len();
                self.send(InputEvent::SelectGame {
                    selection: TABS[self.tab],
                });
                self.cursors = Cursors::default();
                return true;
            }
            KeyCode::BackTab => {
                self.tab = (self.tab + TABS.len() - 1) % TABS.len();
                self.send(InputEvent::SelectGame {
                    selection: TABS[self.tab],
                });
                self.cursors = Cursors::default();
                return true;
            }
            _ => {}
        }

        let Selection::Game(game) = TABS[self.tab] else {
            return true;
        };

        let common = match key.code {
            KeyCode::F(2) => Some(InputEvent::NewGame { game }),
            KeyCode::F(3) => Some(InputEvent::Check { game }),
            KeyCode::F(4) => Some(InputEvent::Hint { game }),
            KeyCode::F(5) => Some(InputEvent::Reveal { game }),
            KeyCode::F(6) => Some(InputEvent::PauseToggle { game }),
            KeyCode::F(7) => Some(InputEvent::Difficulty {
                game,
                tier: Difficulty::Easy,
            }),
            KeyCode::F(8) => Some(InputEvent::Difficulty {
                game,
                tier: Difficulty::Medium,
            }),
            KeyCode::F(9) => Some(InputEvent::Difficulty {
                game,
                tier: Difficulty::Hard,
            }),
            _ => None,
        };
        if let Some(event) = common {
            self.send(event);
            return true;
        }

        match game {
            GameKind::LogicGrid => self.logic_key(key.code),
            GameKind::WordGrid => self.word_key(key.code),
            GameKind::MatchingCards => self.cards_key(key.code),
        }
        true
    }

    fn logic_key(&mut self, code: KeyCode) {
        let game = GameKind::LogicGrid;
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursors.logic =
                    input::move_cursor(self.cursors.logic, code, LOGIC_GRID_SIZE, |_| false);
                self.send(InputEvent::SelectCell {
                    game,
                    position: self.cursors.logic,
                });
            }
            KeyCode::Char(c) => self.send(InputEvent::EnterValue {
                game,
                position: Some(self.cursors.logic),
                value: c.to_string(),
            }),
            KeyCode::Backspace | KeyCode::Delete => self.send(InputEvent::EnterValue {
                game,
                position: Some(self.cursors.logic),
                value: String::new(),
            }),
            _ => {}
        }
    }

    fn word_key(&mut self, code: KeyCode) {
        let game = GameKind::WordGrid;
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let blocks = self.word_blocks();
                self.cursors.word = input::move_cursor(self.cursors.word, code, WORD_GRID_SIZE, |p| {
                    blocks.is_some_and(|b| b[p.row][p.col])
                });
                self.send(InputEvent::SelectCell {
                    game,
                    position: self.cursors.word,
                });
            }
            KeyCode::PageDown | KeyCode::PageUp => self.cycle_clue(code == KeyCode::PageDown),
            KeyCode::Char(c) => self.send(InputEvent::EnterValue {
                game,
                position: None,
                value: c.to_string(),
            }),
            KeyCode::Backspace | KeyCode::Delete => self.send(InputEvent::EnterValue {
                game,
                position: None,
                value: String::new(),
            }),
            _ => {}
        }
        if let Some(pos) = self.hub.word_grid().selected() {
            self.cursors.word = pos;
        }
    }

    fn word_blocks(&self) -> Option<[[bool; WORD_GRID_SIZE]; WORD_GRID_SIZE]> {
        match &self.hub.sink().panel(GameKind::WordGrid).view {
            Some(PuzzleView::WordGrid { blocks, .. }) => Some(*blocks),
            _ => None,
        }
    }

    fn cycle_clue(&mut self, forward: bool) {
        let panel = self.hub.sink().panel(GameKind::WordGrid);
        let Some(PuzzleView::WordGrid { clues, .. }) = &panel.view else {
            return;
        };
        if clues.is_empty() {
            return;
        }
        let current = panel.clue.and_then(|active| {
            clues
                .iter()
                .position(|c| c.number == active.number && c.orientation == active.orientation)
        });
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % clues.len(),
            (Some(i), false) => (i + clues.len() - 1) % clues.len(),
        };
        let clue = &clues[next];
        let event = InputEvent::SelectClue {
            game: GameKind::WordGrid,
            number: clue.number,
            orientation: clue.orientation,
        };
        self.send(event);
    }

    fn cards_key(&mut self, code: KeyCode) {
        let layout = self.hub.matching_cards().layout();
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursors.slot = input::move_slot(
                    self.cursors.slot,
                    code,
                    layout.columns,
                    self.hub.matching_cards().cards().len(),
                );
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.send(InputEvent::FlipCard {
                game: GameKind::MatchingCards,
                slot: self.cursors.slot,
            }),
            _ => {}
        }
    }

    fn send(&mut self, event: InputEvent) {
        let action = event.action();
        if let Err(e) = self.hub.dispatch(event) {
            debug!(action, error = %e, "Input rejected");
        }
    }
}

