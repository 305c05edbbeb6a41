use crate::app::{App, AppScreen, BackendStatus};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, content, status, shortcuts] = Layout::vertical([
        Constraint::Length(3), // Title and backend status
        Constraint::Min(8),    // Screen content
        Constraint::Length(3), // Status area
        Constraint::Length(1), // Shortcuts hint
    ])
    .areas(area.inner(Margin::new(1, 0)));

    ScreenLayout {
        header,
        content,
        status,
        shortcuts,
    }
}

pub fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("== Global Supply Chain Crisis Dashboard ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [tabs_area, backend_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(inner);

    f.render_widget(Paragraph::new(screen_tabs(app.screen)), tabs_area);
    f.render_widget(
        Paragraph::new(backend_line(&app.backend_status)).right_aligned(),
        backend_area,
    );
}

fn screen_tabs(active: AppScreen) -> Line<'static> {
    let tabs = [
        ("F2", "Risk", AppScreen::Risk),
        ("F3", "Workbench", AppScreen::Workbench),
        ("F4", "Map", AppScreen::Map),
    ];

    let mut spans = Vec::new();
    for (key, label, screen) in tabs {
        let style = if screen == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {key} {label} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn backend_line(status: &BackendStatus) -> Line<'_> {
    match status {
        BackendStatus::Checking => Line::styled(
            "● Checking backend...",
            Style::default().fg(Color::Yellow),
        ),
        BackendStatus::Online(message) => Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(message.as_str(), Style::default().fg(Color::Gray)),
        ]),
        BackendStatus::Offline => {
            Line::styled("● Backend offline", Style::default().fg(Color::Red))
        }
    }
}

pub fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled("Ready", Style::default().fg(Color::Gray)))
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        Text::from(Span::styled(app.status_message.as_str(), style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

pub fn render_shortcuts(f: &mut Frame<'_>, area: Rect, shortcuts: &[(&str, &str)]) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (index, (key, label)) in shortcuts.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", label_style));
        }
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(": {label}"), label_style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

/// Single-line text field with a blinking block cursor while focused
pub fn input_field<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    animation_counter: f64,
) -> Paragraph<'a> {
    let border_color = if focused { Color::Green } else { Color::DarkGray };
    let cursor = if focused && (animation_counter * 2.0).sin() > 0.0 {
        "█"
    } else {
        " "
    };

    Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(Color::Green)),
    ]))
    .block(
        Block::default()
            .title(format!(" {label} "))
            .title_style(Style::default().fg(border_color))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    )
}

/// Body shown in place of a result card while nothing has been requested yet
pub fn hint_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::styled(text, Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: true })
}

pub fn error_paragraph(message: &str) -> Paragraph<'_> {
    Paragraph::new(Line::styled(
        message,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
}
