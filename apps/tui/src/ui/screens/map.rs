use crate::app::App;
use crate::map::MapOverlay;
use crate::ui::widgets::chrome::{
    hint_paragraph, render_header, render_shortcuts, render_status_section, screen_layout,
};
use crate::ui::widgets::world_map::render_world_map;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_map(app: &App, f: &mut Frame<'_>) {
    let layout = screen_layout(f.area());

    render_header(app, f, layout.header);

    match app.report_overlay.as_ref() {
        Some(overlay) => {
            let [map_area, legend_area] =
                Layout::horizontal([Constraint::Min(20), Constraint::Length(40)])
                    .areas(layout.content);
            let title = app
                .analysis
                .result()
                .map_or("Supply Chain", |report| report.product.as_str());

            render_world_map(f, map_area, overlay, title);
            render_legend(app, overlay, f, legend_area);
        }
        None => f.render_widget(
            hint_paragraph("No located supply nodes yet. Run an analysis first."),
            layout.content,
        ),
    }

    render_status_section(app, f, layout.status);
    render_shortcuts(
        f,
        layout.shortcuts,
        &[("F1", "Help"), ("Esc", "Back"), ("q", "Quit")],
    );
}

fn render_legend(app: &App, overlay: &MapOverlay, f: &mut Frame<'_>, area: Rect) {
    let center = overlay.center();
    let label = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::styled(
            format!("Center  {:.3}, {:.3}", center.lat, center.lng),
            label,
        ),
        Line::styled(format!("Zoom    {}", overlay.zoom()), label),
        Line::from(""),
        Line::styled(
            format!("Markers ({})", overlay.markers().len()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    lines.extend(overlay.markers().iter().map(|marker| {
        Line::styled(
            format!(
                "● {} ({:.2}, {:.2})",
                marker.label, marker.position.lat, marker.position.lng
            ),
            Style::default().fg(Color::LightRed),
        )
    }));

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Static map",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        overlay.static_map_url(app.actions.map_config()),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(" Legend ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false }),
        area,
    );
}
