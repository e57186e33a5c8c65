//! Terminal UI frontend using ratatui
//!
//! Draws the attract screen: game list on the left, description and
//! high-score board for the highlighted game on the right. The exit dialog
//! and the name editor render as overlays of the same terminal.

use std::io::{self, Stdout};

use anyhow::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap},
};

use coinop_core::{Frontend, MenuMode, MenuView, NameEntryView};

/// Terminal display handler
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalFrontend {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Frontend for TerminalFrontend {
    fn show_menu(&mut self, view: &MenuView<'_>) -> Result<()> {
        self.terminal.draw(|frame| render_menu(frame, view))?;
        Ok(())
    }

    fn show_name_entry(&mut self, view: &NameEntryView) -> Result<()> {
        self.terminal.draw(|frame| render_name_entry(frame, view))?;
        Ok(())
    }

    fn pause_music(&mut self) {
        // The terminal build ships without a mixer; the hook still marks
        // the launch window in the logs.
        tracing::debug!("music paused");
    }

    fn resume_music(&mut self) {
        tracing::debug!("music resumed");
    }
}

fn render_menu(frame: &mut Frame, view: &MenuView<'_>) {
    let area = frame.area();

    // Layout: header, body (list + side panel), help
    let layout = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(8),    // Body
        Constraint::Length(3), // Help
    ])
    .split(area);

    let header_text = format!("{} games installed", view.entries.len());
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("coinop"));
    frame.render_widget(header, layout[0]);

    let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[1]);
    render_game_list(frame, body[0], view);
    render_side_panel(frame, body[1], view);

    let help_text = "[Up/Down] Browse  [Enter] Play  [Q/Esc] Exit";
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout[2]);

    if view.mode == MenuMode::ConfirmingExit {
        render_exit_dialog(frame, area, view.exit_choice_yes);
    }
}

fn render_game_list(frame: &mut Frame, area: Rect, view: &MenuView<'_>) {
    if view.entries.is_empty() {
        let empty = Paragraph::new("No games installed")
            .block(Block::default().borders(Borders::ALL).title("Games"));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let row = Row::new([format!("{:>3}", entry.id), entry.name.clone()]);
            if i == view.highlighted {
                row.style(Style::default().reversed().bold())
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(4), Constraint::Min(10)])
        .block(Block::default().borders(Borders::ALL).title("Games"));
    frame.render_widget(table, area);
}

fn render_side_panel(frame: &mut Frame, area: Rect, view: &MenuView<'_>) {
    let panel = Layout::vertical([Constraint::Min(4), Constraint::Length(13)]).split(area);

    let description = Paragraph::new(view.description.to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    frame.render_widget(description, panel[0]);

    let rows: Vec<Row> = view
        .scoreboard
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new([
                format!("{:>2}", i + 1),
                entry.name.clone(),
                entry.score.to_string(),
            ])
        })
        .collect();

    let scores = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
        ],
    )
    .header(Row::new(["#", "NAME", "SCORE"]).style(Style::default().bold()))
    .block(Block::default().borders(Borders::ALL).title("High Scores"));
    frame.render_widget(scores, panel[1]);
}

fn render_exit_dialog(frame: &mut Frame, area: Rect, choice_yes: bool) {
    let dialog = centered_rect(area, 34, 5);
    frame.render_widget(Clear, dialog);

    let highlight = Style::default().reversed().bold();
    let no_style = if choice_yes { Style::default() } else { highlight };
    let yes_style = if choice_yes { highlight } else { Style::default() };

    let choices = Line::from(vec![
        Span::styled("  No  ", no_style),
        Span::raw("     "),
        Span::styled("  Yes  ", yes_style),
    ]);
    let body = Paragraph::new(vec![Line::raw(""), choices])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Leave the kiosk?"));
    frame.render_widget(body, dialog);
}

fn render_name_entry(frame: &mut Frame, view: &NameEntryView) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(5),    // Editor
        Constraint::Length(3), // Help
    ])
    .split(area);

    let header = Paragraph::new(format!("Score: {}", view.score))
        .block(Block::default().borders(Borders::ALL).title("NEW HIGH SCORE"));
    frame.render_widget(header, layout[0]);

    // The three letters plus the confirm marker, cursor slot inverted.
    let mut spans = vec![Span::raw(" ")];
    for (i, c) in view.slots.iter().enumerate() {
        let mut style = Style::default().bold();
        if i == view.cursor {
            style = style.reversed();
        }
        spans.push(Span::styled(format!(" {} ", c), style));
        spans.push(Span::raw(" "));
    }
    let editor = Paragraph::new(vec![Line::raw(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(editor, layout[1]);

    let help_text = "[Up/Down] Letter  [Left/Right] Slot  [Enter] on # saves";
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout[2]);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
