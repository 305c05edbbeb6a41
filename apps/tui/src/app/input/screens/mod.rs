use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod help;
mod map;
mod risk;
mod workbench;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if handle_screen_switch(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Risk => risk::handle_risk_input(app, key),
        AppScreen::Workbench => workbench::handle_workbench_input(app, key),
        AppScreen::Map => map::handle_map_input(app, key),
    }
}

fn handle_screen_switch(app: &mut App, key: KeyCode) -> bool {
    let target = match key {
        KeyCode::F(2) => AppScreen::Risk,
        KeyCode::F(3) => AppScreen::Workbench,
        KeyCode::F(4) => AppScreen::Map,
        _ => return false,
    };

    app.switch_screen(target);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{sample_report, test_app};
    use crate::app::state::{RiskFocus, WorkbenchFocus};
    use crate::app::Outcome;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            dispatch_input(app, KeyCode::Char(ch));
        }
    }

    #[tokio::test]
    async fn test_typing_q_in_query_does_not_quit() {
        let mut app = test_app();
        type_text(&mut app, "qualcomm");

        assert!(app.running);
        assert_eq!(app.product_query, "qualcomm");
    }

    #[tokio::test]
    async fn test_enter_with_empty_query_issues_nothing() {
        let mut app = test_app();
        dispatch_input(&mut app, KeyCode::Enter);

        assert!(!app.analysis.is_loading());
        assert!(app.status_message.starts_with("Error"));
    }

    #[tokio::test]
    async fn test_enter_starts_analysis_once() {
        let mut app = test_app();
        type_text(&mut app, "F-35 Jet");

        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.analysis.is_loading());

        // Disabled while loading: the second press must not reset the request
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.analysis.is_loading());
        assert_eq!(app.status_message, "Analyzing F-35 Jet...");
    }

    #[tokio::test]
    async fn test_node_navigation_and_map() -> Result<(), crate::lifecycle::Refusal> {
        let mut app = test_app();
        let ticket = app.analysis.begin()?;
        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));

        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.risk_focus, RiskFocus::Nodes);

        dispatch_input(&mut app, KeyCode::Down);
        assert_eq!(app.selected_node_index, 1);
        dispatch_input(&mut app, KeyCode::Down);
        assert_eq!(app.selected_node_index, 0);

        dispatch_input(&mut app, KeyCode::Char('m'));
        assert_eq!(app.screen, AppScreen::Map);
        dispatch_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Risk);

        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
        Ok(())
    }

    #[tokio::test]
    async fn test_reopening_map_keeps_return_screen() -> Result<(), crate::lifecycle::Refusal> {
        let mut app = test_app();
        let ticket = app.analysis.begin()?;
        app.apply_outcome(Outcome::Analysis(ticket, Ok(sample_report())));

        dispatch_input(&mut app, KeyCode::F(4));
        dispatch_input(&mut app, KeyCode::F(4));
        assert_eq!(app.screen, AppScreen::Map);

        dispatch_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Risk);
        Ok(())
    }

    #[tokio::test]
    async fn test_workbench_fields_and_tools_are_independent() {
        let mut app = test_app();
        dispatch_input(&mut app, KeyCode::F(3));
        assert_eq!(app.screen, AppScreen::Workbench);

        type_text(&mut app, "OpenAI");
        dispatch_input(&mut app, KeyCode::Tab);
        type_text(&mut app, "San Francisco");
        assert_eq!(app.company_query, "OpenAI");
        assert_eq!(app.city_query, "San Francisco");

        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.location.is_loading());

        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.workbench_focus, WorkbenchFocus::Recipe);
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(app.recipe.is_loading());
        assert!(app.location.is_loading());
    }

    #[tokio::test]
    async fn test_help_swallows_keys() {
        let mut app = test_app();
        dispatch_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        dispatch_input(&mut app, KeyCode::Char('x'));
        assert!(app.product_query.is_empty());

        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
