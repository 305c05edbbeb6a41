use crate::app::{App, WorkbenchFocus};
use crate::domain::{CompanyLocation, Recipe};
use crate::lifecycle::FetchState;
use crate::ui::widgets::button::ActionButton;
use crate::ui::widgets::chrome::{
    error_paragraph, hint_paragraph, input_field, render_header, render_shortcuts,
    render_status_section, screen_layout,
};
use crate::ui::widgets::world_map::render_world_map;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_workbench(app: &App, f: &mut Frame<'_>) {
    let layout = screen_layout(f.area());

    render_header(app, f, layout.header);

    let [kitchen_area, locator_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(layout.content);
    render_kitchen(app, f, kitchen_area);
    render_locator(app, f, locator_area);

    render_status_section(app, f, layout.status);
    render_shortcuts(
        f,
        layout.shortcuts,
        &[
            ("F1", "Help"),
            ("Tab", "Next field"),
            ("Enter", "Run"),
            ("F2", "Risk"),
            ("Ctrl-C", "Quit"),
        ],
    );
}

fn panel(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn render_kitchen(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = panel("AI Kitchen", Color::Magenta);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [pantry_area, button_area, card_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(inner);

    let request = app.actions.recipe_request();
    let pantry = Paragraph::new(Line::from(vec![
        Span::styled(
            request.ingredients.join(", "),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  (diet: {})", request.dietary_restrictions),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .title(" Ingredients ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(pantry, pantry_area);

    ActionButton {
        label: "GENERATE RECIPE",
        busy_label: "COOKING...",
        loading: app.recipe.is_loading(),
        focused: app.workbench_focus == WorkbenchFocus::Recipe,
    }
    .render(f, button_area, &app.throbber_state);

    match app.recipe.state() {
        FetchState::Idle => f.render_widget(
            hint_paragraph("Press Enter on the button to cook something from the pantry."),
            card_area,
        ),
        FetchState::Loading => f.render_widget(hint_paragraph("The chef is thinking..."), card_area),
        FetchState::Failed(message) => f.render_widget(error_paragraph(message), card_area),
        FetchState::Succeeded(recipe) => f.render_widget(
            Paragraph::new(recipe_text(recipe)).wrap(Wrap { trim: true }),
            card_area,
        ),
    }
}

fn recipe_text(recipe: &Recipe) -> Text<'_> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(
            recipe.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(
                "{} | {} min | {} kcal",
                recipe.difficulty, recipe.prep_time_minutes, recipe.calories
            ),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled("Ingredients", heading),
    ];

    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|item| Line::from(format!("- {} {}", item.amount, item.name))),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled("Instructions", heading));
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(step, text)| Line::from(format!("{}. {text}", step + 1))),
    );

    Text::from(lines)
}

fn render_locator(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = panel("Company Locator", Color::Blue);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [company_area, city_area, button_area, result_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(inner);

    f.render_widget(
        input_field(
            "Company",
            &app.company_query,
            app.workbench_focus == WorkbenchFocus::Company,
            app.animation_counter,
        ),
        company_area,
    );
    f.render_widget(
        input_field(
            "City (optional)",
            &app.city_query,
            app.workbench_focus == WorkbenchFocus::City,
            app.animation_counter,
        ),
        city_area,
    );

    ActionButton {
        label: "LOCATE",
        busy_label: "SEARCHING...",
        loading: app.location.is_loading(),
        focused: matches!(
            app.workbench_focus,
            WorkbenchFocus::Company | WorkbenchFocus::City
        ),
    }
    .render(f, button_area, &app.throbber_state);

    match app.location.state() {
        FetchState::Idle => f.render_widget(
            hint_paragraph("Enter a company name and press Enter to find its headquarters."),
            result_area,
        ),
        FetchState::Loading => f.render_widget(hint_paragraph("Searching..."), result_area),
        FetchState::Failed(message) => f.render_widget(error_paragraph(message), result_area),
        FetchState::Succeeded(location) => render_location(app, location, f, result_area),
    }
}

fn render_location(app: &App, location: &CompanyLocation, f: &mut Frame<'_>, area: Rect) {
    let [card_area, map_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    let lines = vec![
        Line::styled(
            location.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(location.address.as_str(), Style::default().fg(Color::Gray)),
        Line::styled(
            format!(
                "{:.4}, {:.4}",
                location.coordinates.lat, location.coordinates.lng
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(vec![
            Span::styled(
                "Open in Maps → ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(location.maps_link(), Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        card_area,
    );

    if let Some(overlay) = app.location_overlay.as_ref() {
        render_world_map(f, map_area, overlay, &location.name);
    }
}
