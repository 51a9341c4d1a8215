use std::time::Instant;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use crate::format::FormatChoice;
use crate::ui::app::{App, FocusedField};

const COMMAND_PLACEHOLDER: &str = "Enter a URL to generate command...";
const URL_PLACEHOLDER: &str = "e.g., https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const PASTE_HINT: &str = "Copy the command above and paste it into your terminal (PowerShell, CMD, Bash, Zsh, etc.) to start the download.";

pub fn render_ui(f: &mut Frame, app: &App, now: Instant) {
    let output_height = if app.output_visible() {
        Constraint::Length(app.output_locations.len() as u16 + 3)
    } else {
        Constraint::Length(0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(4),  // URL + validation line
            Constraint::Min(6),     // Format list
            output_height,          // Output list + hint
            Constraint::Length(5),  // Generated command
            Constraint::Length(3),  // Copy button
            Constraint::Length(2),  // Footer
        ])
        .split(f.size());

    render_header(f, app, chunks[0]);
    render_url(f, app, chunks[1]);
    render_formats(f, app, chunks[2]);
    if app.output_visible() {
        render_outputs(f, app, chunks[3]);
    }
    render_command(f, app, chunks[4]);
    render_copy_button(f, app, chunks[5], now);
    render_footer(f, app, chunks[6]);
}

fn border_style(app: &App, field: FocusedField) -> Style {
    if app.focused_field == field {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn tools_notice(app: &App) -> String {
    let missing = app.missing_tools();
    if missing.is_empty() {
        "Requires yt-dlp and FFmpeg installed locally.".to_string()
    } else {
        format!(
            "Requires yt-dlp and FFmpeg installed locally. Not found: {}",
            missing.join(", ")
        )
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let notice_color = if app.missing_tools().is_empty() { Color::DarkGray } else { Color::Red };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("YT-DLP", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Span::styled(" Command Generator", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(tools_notice(app), Style::default().fg(notice_color))),
    ]);
    f.render_widget(header, area);
}

fn render_url(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Video URL")
        .border_style(border_style(app, FocusedField::Url));

    let input = if app.url_input.is_empty() {
        Paragraph::new(URL_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.url_input.as_str()).style(Style::default().fg(Color::White))
    };
    f.render_widget(input.block(block), rows[0]);

    if app.focused_field == FocusedField::Url {
        let x = rows[0].x + 1 + app.url_input.chars().count() as u16;
        f.set_cursor(x.min(rows[0].right().saturating_sub(2)), rows[0].y + 1);
    }

    if app.show_url_error() {
        let error = Paragraph::new(crate::command::BuildError::EmptyInput.to_string())
            .style(Style::default().fg(Color::Red));
        f.render_widget(error, rows[1]);
    }
}

fn render_formats(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = FormatChoice::ALL
        .iter()
        .map(|choice| ListItem::new(format!("{:<14} {}", choice.value(), choice.label())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Download Format")
                .border_style(border_style(app, FocusedField::Format)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.format_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_outputs(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = app
        .output_locations
        .iter()
        .map(|loc| ListItem::new(format!("{} ({})", loc.label, loc.path)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Output Location")
                .border_style(border_style(app, FocusedField::Output)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.output_index));
    f.render_stateful_widget(list, rows[0], &mut state);

    let hint = Paragraph::new("Ensure this path exists on your system. Use forward slashes for all OS.")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[1]);
}

pub fn command_text(app: &App) -> &str {
    app.command.command().unwrap_or(COMMAND_PLACEHOLDER)
}

fn render_command(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.command.is_ready() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(command_text(app))
        .block(Block::default().borders(Borders::ALL).title("Generated Command"))
        .style(style)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

pub fn copy_button_label(app: &App, now: Instant) -> &'static str {
    if app.copy_ack.is_visible(now) {
        "Copied!"
    } else {
        "Copy Command"
    }
}

fn render_copy_button(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let style = if !app.command.is_ready() {
        Style::default().fg(Color::DarkGray)
    } else if app.focused_field == FocusedField::CopyButton {
        Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let button = Paragraph::new(format!("[ {} ]", copy_button_label(app, now)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(app, FocusedField::CopyButton)),
        )
        .style(style);
    f.render_widget(button, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let status = match &app.status_message {
        Some(msg) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            "Tab: Next field │ ↑/↓: Select │ Ctrl-Y: Copy │ Ctrl-U: Clear URL │ Esc: Quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let hint = Line::from(Span::styled(PASTE_HINT, Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(vec![status, hint]), area);
}
