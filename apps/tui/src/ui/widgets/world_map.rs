use crate::map::MapOverlay;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Draws coastlines for the overlay's viewport and a labelled red point per marker
pub fn render_world_map(f: &mut Frame<'_>, area: Rect, overlay: &MapOverlay, title: &str) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let viewport = overlay.viewport();
    let points: Vec<(f64, f64)> = overlay
        .markers()
        .iter()
        .map(|marker| (marker.position.lng, marker.position.lat))
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds(viewport.x_bounds)
        .y_bounds(viewport.y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &points,
                color: Color::Red,
            });
            for marker in overlay.markers() {
                ctx.print(
                    marker.position.lng,
                    marker.position.lat,
                    Span::styled(
                        format!(" {}", marker.label),
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}
