//! Terminal view model fed by the hub.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use puzzle_hub::{
    AuxCounter, CellRef, CellStyle, ClueRef, GameKind, PresentationSink, PuzzleView, Selection,
    Severity,
};
use tracing::debug;

/// A toast waiting to expire.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub severity: Severity,
    shown_at: Instant,
}

/// What one game's panel currently looks like.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    pub view: Option<PuzzleView>,
    pub cells: HashMap<CellRef, String>,
    pub styles: HashMap<CellRef, CellStyle>,
    pub score: u32,
    pub counters: HashMap<AuxCounter, u32>,
    pub timer: String,
    pub clue: Option<ClueRef>,
}

impl Panel {
    pub fn text(&self, cell: CellRef) -> &str {
        self.cells.get(&cell).map(String::as_str).unwrap_or("")
    }

    pub fn style(&self, cell: CellRef) -> CellStyle {
        self.styles.get(&cell).copied().unwrap_or(CellStyle::Blank)
    }
}

/// Sink that keeps the latest state of every panel for the draw pass.
#[derive(Debug)]
pub struct TerminalSink {
    shown: Option<Selection>,
    panels: [Panel; 3],
    toasts: Vec<Toast>,
    toast_ttl: Duration,
}

impl TerminalSink {
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            shown: None,
            panels: Default::default(),
            toasts: Vec::new(),
            toast_ttl,
        }
    }

    pub fn shown(&self) -> Option<Selection> {
        self.shown
    }

    pub fn panel(&self, game: GameKind) -> &Panel {
        &self.panels[game.index()]
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Drops toasts older than the configured lifetime.
    pub fn expire_toasts(&mut self, now: Instant) {
        let ttl = self.toast_ttl;
        self.toasts
            .retain(|toast| now.duration_since(toast.shown_at) < ttl);
    }

    fn panel_mut(&mut self, game: GameKind) -> &mut Panel {
        &mut self.panels[game.index()]
    }
}

impl PresentationSink for TerminalSink {
    fn show(&mut self, selection: Selection) {
        self.shown = Some(selection);
    }

    fn render(&mut self, game: GameKind, view: &PuzzleView) {
        let panel = self.panel_mut(game);
        let timer = std::mem::take(&mut panel.timer);
        *panel = Panel {
            view: Some(view.clone()),
            timer,
            ..Panel::default()
        };
        if let PuzzleView::LogicGrid { givens, .. } = view {
            for (row, digits) in givens.iter().enumerate() {
                for (col, digit) in digits.iter().enumerate() {
                    if *digit != 0 {
                        let cell = CellRef::Grid(puzzle_hub::GridPos::new(row, col));
                        panel.cells.insert(cell, digit.to_string());
                        panel.styles.insert(cell, CellStyle::Fixed);
                    }
                }
            }
        }
    }

    fn write_cell(&mut self, game: GameKind, cell: CellRef, text: &str) {
        let panel = self.panel_mut(game);
        if text.is_empty() {
            panel.cells.remove(&cell);
        } else {
            panel.cells.insert(cell, text.to_string());
        }
    }

    fn mark_cell(&mut self, game: GameKind, cell: CellRef, style: CellStyle) {
        self.panel_mut(game).styles.insert(cell, style);
    }

    fn update_score(&mut self, game: GameKind, value: u32) {
        self.panel_mut(game).score = value;
    }

    fn update_aux_counter(&mut self, game: GameKind, counter: AuxCounter, value: u32) {
        self.panel_mut(game).counters.insert(counter, value);
    }

    fn update_timer_display(&mut self, game: GameKind, display: &str) {
        self.panel_mut(game).timer = display.to_string();
    }

    fn highlight_clue(&mut self, game: GameKind, clue: Option<ClueRef>) {
        self.panel_mut(game).clue = clue;
    }

    fn notify(&mut self, text: &str, severity: Severity) {
        debug!(text, %severity, "Toast");
        self.toasts.push(Toast {
            text: text.to_string(),
            severity,
            shown_at: Instant::now(),
        });
    }
}
