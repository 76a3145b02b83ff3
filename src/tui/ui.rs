//! Stateless UI rendering for the hub.

use puzzle_hub::{
    AuxCounter, CellRef, CellStyle, ClueView, GameKind, GridPos, LOGIC_GRID_SIZE, Orientation,
    PuzzleView, Selection, Severity, WORD_GRID_SIZE,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::sink::{Panel, TerminalSink};

/// Tab order shown in the header.
pub const TABS: [Selection; 4] = [
    Selection::Game(GameKind::LogicGrid),
    Selection::Game(GameKind::WordGrid),
    Selection::Game(GameKind::MatchingCards),
    Selection::Tips,
];

/// Cursor positions kept by the terminal front end.
#[derive(Debug, Clone, Copy)]
pub struct Cursors {
    pub logic: GridPos,
    pub word: GridPos,
    pub slot: usize,
}

impl Default for Cursors {
    fn default() -> Self {
        Self {
            logic: GridPos::new(0, 0),
            word: GridPos::new(0, 0),
            slot: 0,
        }
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, sink: &TerminalSink, cursors: &Cursors) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Length(3), // Status
            Constraint::Min(12),   // Game
            Constraint::Length(3), // Keys
        ])
        .split(area);

    draw_tabs(frame, chunks[0], sink.shown());

    match sink.shown() {
        Some(Selection::Game(game)) => {
            let panel = sink.panel(game);
            draw_status(frame, chunks[1], game, panel);
            match game {
                GameKind::LogicGrid => draw_logic_grid(frame, chunks[2], panel, cursors.logic),
                GameKind::WordGrid => draw_word_grid(frame, chunks[2], panel, cursors.word),
                GameKind::MatchingCards => draw_cards(frame, chunks[2], panel, cursors.slot),
            }
        }
        Some(Selection::Tips) | None => draw_tips(frame, chunks[1].union(chunks[2])),
    }

    let keys = Paragraph::new(
        "Tab switch | arrows move | Enter flip | F2 new | F3 check | F4 hint | F5 reveal | F6 pause | F7-F9 tier | Esc quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(keys, chunks[3]);

    draw_toasts(frame, area, sink);
}

fn draw_tabs(frame: &mut Frame, area: Rect, shown: Option<Selection>) {
    let mut spans = Vec::new();
    for tab in TABS {
        let style = if Some(tab) == shown {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!(" {} ", tab), style));
        spans.push(Span::raw("  "));
    }
    let tabs = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Puzzle Hub "));
    frame.render_widget(tabs, area);
}

fn draw_status(frame: &mut Frame, area: Rect, game: GameKind, panel: &Panel) {
    let mut spans = vec![
        Span::styled("Score ", Style::default().fg(Color::Gray)),
        Span::styled(
            panel.score.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Time ", Style::default().fg(Color::Gray)),
        Span::styled(
            if panel.timer.is_empty() { "00:00" } else { panel.timer.as_str() }.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ];
    for (counter, value) in [AuxCounter::Hints, AuxCounter::Moves]
        .into_iter()
        .filter_map(|c| panel.counters.get(&c).map(|v| (c, *v)))
    {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("{} ", counter), Style::default().fg(Color::Gray)));
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::Yellow)));
    }
    match &panel.view {
        Some(PuzzleView::LogicGrid { difficulty, .. })
        | Some(PuzzleView::MatchingCards { difficulty, .. }) => {
            spans.push(Span::raw(format!("   [{}]", difficulty)));
        }
        Some(PuzzleView::WordGrid { theme, .. }) => {
            spans.push(Span::raw(format!("   Theme: {}", theme)));
        }
        None => {}
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", game)));
    frame.render_widget(status, area);
}

fn cell_style(style: CellStyle, under_cursor: bool) -> Style {
    let base = match style {
        CellStyle::Fixed => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        CellStyle::Selected => Style::default().bg(Color::Blue),
        CellStyle::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        CellStyle::Correct => Style::default().fg(Color::Green),
        CellStyle::Matched => Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
        CellStyle::Flipped => Style::default().fg(Color::Yellow),
        CellStyle::Blank => Style::default().fg(Color::Cyan),
    };
    if under_cursor {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn draw_logic_grid(frame: &mut Frame, area: Rect, panel: &Panel, cursor: GridPos) {
    let mut lines = Vec::new();
    for row in 0..LOGIC_GRID_SIZE {
        if row % 3 == 0 && row > 0 {
            lines.push(Line::from("------+-------+------"));
        }
        let mut spans = Vec::new();
        for col in 0..LOGIC_GRID_SIZE {
            if col % 3 == 0 && col > 0 {
                spans.push(Span::raw("| "));
            }
            let pos = GridPos::new(row, col);
            let cell = CellRef::Grid(pos);
            let text = match panel.text(cell) {
                "" => ".",
                t => t,
            };
            spans.push(Span::styled(
                text.to_string(),
                cell_style(panel.style(cell), pos == cursor),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, center_rect(area, 25, 13));
}

fn draw_word_grid(frame: &mut Frame, area: Rect, panel: &Panel, cursor: GridPos) {
    let Some(PuzzleView::WordGrid { blocks, clues, .. }) = &panel.view else {
        return;
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(area);

    let mut lines = Vec::new();
    for (row, blocked) in blocks.iter().enumerate().take(WORD_GRID_SIZE) {
        let mut spans = Vec::new();
        for (col, is_block) in blocked.iter().enumerate() {
            let pos = GridPos::new(row, col);
            if *is_block {
                spans.push(Span::styled("██", Style::default().fg(Color::DarkGray)));
                continue;
            }
            let cell = CellRef::Grid(pos);
            let text = match panel.text(cell) {
                "" => "_",
                t => t,
            };
            spans.push(Span::styled(
                format!("{} ", text),
                cell_style(panel.style(cell), pos == cursor),
            ));
        }
        lines.push(Line::from(spans));
    }
    let grid = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(grid, center_rect(halves[0], 22, 12));

    let mut clue_lines = Vec::new();
    for orientation in [Orientation::Across, Orientation::Down] {
        clue_lines.push(Line::from(Span::styled(
            orientation.to_string().to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for clue in clues.iter().filter(|c| c.orientation == orientation) {
            clue_lines.push(clue_line(clue, panel));
        }
    }
    let list = Paragraph::new(clue_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Clues "));
    frame.render_widget(list, halves[1]);
}

fn clue_line<'a>(clue: &'a ClueView, panel: &Panel) -> Line<'a> {
    let active = panel
        .clue
        .is_some_and(|c| c.number == clue.number && c.orientation == clue.orientation);
    let style = if active {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(Span::styled(
        format!("{:>2}. {} ({})", clue.number, clue.clue, clue.length),
        style,
    ))
}

fn draw_cards(frame: &mut Frame, area: Rect, panel: &Panel, cursor: usize) {
    let Some(PuzzleView::MatchingCards { columns, rows, .. }) = &panel.view else {
        return;
    };

    let mut lines = Vec::new();
    for row in 0..*rows {
        let mut spans = Vec::new();
        for col in 0..*columns {
            let slot = row * columns + col;
            let cell = CellRef::Slot(slot);
            let face = match panel.text(cell) {
                "" => "??".to_string(),
                symbol => symbol.to_string(),
            };
            spans.push(Span::styled(
                format!("[{}]", face),
                cell_style(panel.style(cell), slot == cursor),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let width = (*columns as u16) * 5 + 2;
    let height = (*rows as u16) * 2 + 2;
    let deck = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(deck, center_rect(area, width, height));
}

fn draw_tips(frame: &mut Frame, area: Rect) {
    let tips = vec![
        Line::from(Span::styled("Sudoku", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("Fill each row, column and box with 1-9. Wrong digits cost 5 points."),
        Line::from(""),
        Line::from(Span::styled("Crossword", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("PgUp/PgDn pick a clue. Typing moves along the word."),
        Line::from(""),
        Line::from(Span::styled("Memory Pairs", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("Fewer moves and a faster clear earn a bigger bonus."),
        Line::from(""),
        Line::from("Each game keeps its own clock. Switching tabs starts over."),
    ];
    let panel = Paragraph::new(tips)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Tips "));
    frame.render_widget(panel, area);
}

fn draw_toasts(frame: &mut Frame, area: Rect, sink: &TerminalSink) {
    let toasts = sink.toasts();
    if toasts.is_empty() {
        return;
    }
    let height = toasts.len().min(4) as u16 + 2;
    let width = area.width.min(50);
    let rect = Rect::new(area.right().saturating_sub(width), area.y, width, height);

    let lines: Vec<Line> = toasts
        .iter()
        .rev()
        .take(4)
        .map(|toast| {
            let color = match toast.severity {
                Severity::Success => Color::Green,
                Severity::Error => Color::Red,
            };
            Line::from(Span::styled(toast.text.clone(), Style::default().fg(color)))
        })
        .collect();
    frame.render_widget(ratatui::widgets::Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        rect,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
