use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

/// A trigger that turns into a spinner while its request runs
pub struct ActionButton<'a> {
    pub label: &'a str,
    pub busy_label: &'a str,
    pub loading: bool,
    pub focused: bool,
}

impl ActionButton<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, throbber: &ThrobberState) {
        let border_color = if self.loading {
            Color::DarkGray
        } else if self.focused {
            Color::Cyan
        } else {
            Color::Gray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.loading {
            let spinner = Throbber::default()
                .label(self.busy_label)
                .style(Style::default().fg(Color::Yellow))
                .throbber_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .throbber_set(BRAILLE_SIX)
                .use_type(WhichUse::Spin);
            // Rendering advances nothing; the event loop steps the shared state
            let mut state = throbber.clone();
            f.render_stateful_widget(spinner, inner, &mut state);
            return;
        }

        let style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };

        f.render_widget(
            Paragraph::new(Line::styled(format!(" {} ", self.label), style)).centered(),
            inner,
        );
    }
}
