use crate::domain::{CrisisReport, RiskLevel};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

pub const fn risk_color(level: RiskLevel) -> Color {
    let (r, g, b) = level.rgb();
    Color::Rgb(r, g, b)
}

pub fn render_risk_gauge(f: &mut Frame<'_>, area: Rect, report: &CrisisReport) {
    let level = report.risk_level();
    let color = risk_color(level);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Risk: {} ", level.label()))
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio((report.risk_score / 100.0).clamp(0.0, 1.0))
        .label(Span::styled(
            report.score_label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(gauge, area);
}
