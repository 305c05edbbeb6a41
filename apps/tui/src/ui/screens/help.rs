use crate::app::{App, AppScreen};
use crate::ui::widgets::popup::render_popup;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn render_help_popup(app: &App, f: &mut Frame<'_>) {
    render_popup(
        f,
        f.area(),
        "Help & Keyboard Shortcuts",
        build_help_lines(app.screen),
        "Press F1 or Esc to close",
    );
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<8}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {description}")),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::styled(title, Style::default().add_modifier(Modifier::BOLD))
}

fn build_help_lines(screen: AppScreen) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            "Global Supply Chain Crisis Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(
            "Analyze a product's supply chain risk, locate companies and generate a recipe from a fixed pantry.",
        ),
        Line::from(""),
        section("Everywhere:"),
        key_line("F1", "Toggle this help popup"),
        key_line("F2", "Risk dashboard"),
        key_line("F3", "Workbench (kitchen and locator)"),
        key_line("F4", "Full screen supply chain map"),
        key_line("Ctrl-C", "Quit"),
        Line::from(""),
    ];

    match screen {
        AppScreen::Risk => lines.extend([
            section("Risk dashboard:"),
            key_line("Enter", "Run the analysis for the typed product"),
            key_line("Tab", "Switch between the query and the node cards"),
            key_line("←↑↓→", "Select a supply node"),
            key_line("o", "Show the selected node's maps link"),
            key_line("m", "Open the map"),
            key_line("q", "Quit (node cards only)"),
        ]),
        AppScreen::Workbench => lines.extend([
            section("Workbench:"),
            key_line("Tab", "Next field"),
            key_line("S-Tab", "Previous field"),
            key_line("Enter", "Locate the company or generate the recipe"),
            key_line("Esc", "Clear the focused field"),
        ]),
        AppScreen::Map => lines.extend([
            section("Map:"),
            key_line("Esc", "Back to the previous screen"),
            key_line("q", "Quit"),
        ]),
    }

    lines
}
