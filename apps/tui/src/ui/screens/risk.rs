use crate::app::{App, RiskFocus};
use crate::domain::{CrisisReport, SupplyChainNode};
use crate::lifecycle::FetchState;
use crate::ui::widgets::button::ActionButton;
use crate::ui::widgets::chrome::{
    error_paragraph, hint_paragraph, input_field, render_header, render_shortcuts,
    render_status_section, screen_layout,
};
use crate::ui::widgets::risk_gauge::{render_risk_gauge, risk_color};
use crate::ui::widgets::scroll::{grid_columns, scroll_offset};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

const CARD_MIN_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 6;

pub fn render_risk(app: &App, f: &mut Frame<'_>) {
    let layout = screen_layout(f.area());

    render_header(app, f, layout.header);

    let [search_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(layout.content);
    render_search_card(app, f, search_area);
    render_body(app, f, body_area);

    render_status_section(app, f, layout.status);
    render_shortcuts(f, layout.shortcuts, &shortcuts(app.risk_focus));
}

fn shortcuts(focus: RiskFocus) -> Vec<(&'static str, &'static str)> {
    match focus {
        RiskFocus::Query => vec![
            ("F1", "Help"),
            ("Enter", "Analyze"),
            ("Tab", "Nodes"),
            ("F3", "Workbench"),
            ("Ctrl-C", "Quit"),
        ],
        RiskFocus::Nodes => vec![
            ("F1", "Help"),
            ("←↑↓→", "Select"),
            ("o", "Link"),
            ("m", "Map"),
            ("Tab", "Query"),
            ("q", "Quit"),
        ],
    }
}

fn render_search_card(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(24)]).areas(area);

    f.render_widget(
        input_field(
            "Product",
            &app.product_query,
            app.risk_focus == RiskFocus::Query,
            app.animation_counter,
        ),
        input_area,
    );

    ActionButton {
        label: "RUN ANALYSIS",
        busy_label: "ANALYZING...",
        loading: app.analysis.is_loading(),
        focused: app.risk_focus == RiskFocus::Query,
    }
    .render(f, button_area, &app.throbber_state);
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect) {
    match app.analysis.state() {
        FetchState::Idle => f.render_widget(
            hint_paragraph(
                "Type a product (e.g. \"Nvidia H100\") and press Enter to map its supply chain.",
            )
            .block(muted_block()),
            area,
        ),
        FetchState::Loading => f.render_widget(
            hint_paragraph("Tracing suppliers and scoring risk...").block(muted_block()),
            area,
        ),
        FetchState::Failed(message) => f.render_widget(
            error_paragraph(message).block(
                Block::default()
                    .title(" Analysis ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
            area,
        ),
        FetchState::Succeeded(report) => render_report(app, report, f, area),
    }
}

fn muted_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_report(app: &App, report: &CrisisReport, f: &mut Frame<'_>, area: Rect) {
    let [summary_area, nodes_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(CARD_HEIGHT)]).areas(area);
    let [gauge_area, text_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .areas(summary_area);

    render_risk_gauge(f, gauge_area, report);
    render_summary(app, report, f, text_area);
    render_node_grid(app, report, f, nodes_area);

    if let Ok(mut effect) = app.report_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            let buffer = f.buffer_mut();
            buffer.render_effect(effect, area, app.last_tick);
        }
    }
}

fn render_summary(app: &App, report: &CrisisReport, f: &mut Frame<'_>, area: Rect) {
    let color = risk_color(report.risk_level());
    let analyzed = app
        .analyzed_at
        .map(|at| format!(" analyzed {}", at.format("%H:%M:%S")))
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {} ", report.product))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .title_bottom(
            Line::styled(analyzed, Style::default().fg(Color::DarkGray)).right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Text::from(vec![
        Line::styled(report.risk_summary.as_str(), Style::default().fg(Color::White)),
        Line::styled(
            format!(
                "{} supply nodes, {} located",
                report.supply_chain.len(),
                report.located_count()
            ),
            Style::default().fg(Color::Gray),
        ),
    ]);

    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_node_grid(app: &App, report: &CrisisReport, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Supply Chain ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if report.supply_chain.is_empty() {
        f.render_widget(hint_paragraph("No supply nodes reported."), inner);
        return;
    }

    let columns = grid_columns(inner.width, CARD_MIN_WIDTH);
    let total_rows = report.supply_chain.len().div_ceil(columns);
    let visible_rows = usize::from(inner.height / CARD_HEIGHT).max(1);
    let first_row = scroll_offset(total_rows, visible_rows, app.selected_node_index / columns);

    let row_areas =
        Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);
    let ratio = u32::try_from(columns).unwrap_or(1);
    let column_constraints = vec![Constraint::Ratio(1, ratio); columns];

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row + row_offset;
        let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * columns + column;
            let Some(node) = report.supply_chain.get(index) else {
                return;
            };
            let selected =
                app.risk_focus == RiskFocus::Nodes && index == app.selected_node_index;
            render_node_card(node, selected, f, *cell);
        }
    }
}

fn render_node_card(node: &SupplyChainNode, selected: bool, f: &mut Frame<'_>, area: Rect) {
    let border_color = if selected { Color::Yellow } else { Color::DarkGray };
    let title = if node.found {
        format!(" 📍 {} ", node.company_name)
    } else {
        format!(" {} ", node.company_name)
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let address_style = if node.found {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::ITALIC)
    };

    let mut lines = vec![
        Line::styled(node.role.as_str(), Style::default().fg(Color::Gray)),
        Line::styled(node.display_address(), address_style),
    ];
    if node.maps_link().is_some() {
        lines.push(Line::from(Span::styled(
            "View Satellite Data →",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
