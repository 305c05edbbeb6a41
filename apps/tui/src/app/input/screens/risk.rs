use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, RiskFocus};
use crossterm::event::KeyCode;

pub fn handle_risk_input(app: &mut App, key: KeyCode) {
    match app.risk_focus {
        RiskFocus::Query => handle_query_input(app, key),
        RiskFocus::Nodes => handle_nodes_input(app, key),
    }
}

fn handle_query_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.product_query.push(c),
        KeyCode::Backspace => {
            app.product_query.pop();
        }
        KeyCode::Enter => app.start_analysis(),
        KeyCode::Tab | KeyCode::Down => {
            if app.node_count() > 0 {
                app.risk_focus = RiskFocus::Nodes;
            }
        }
        KeyCode::Esc => app.product_query.clear(),
        _ => {}
    }
}

fn handle_nodes_input(app: &mut App, key: KeyCode) {
    let count = app.node_count();

    match key {
        KeyCode::Up | KeyCode::Left => {
            app.selected_node_index = wrap_decrement(app.selected_node_index, count);
        }
        KeyCode::Down | KeyCode::Right => {
            app.selected_node_index = wrap_increment(app.selected_node_index, count);
        }
        KeyCode::Home => app.selected_node_index = 0,
        KeyCode::End => app.selected_node_index = count.saturating_sub(1),
        KeyCode::Char('o') | KeyCode::Enter => app.show_selected_link(),
        KeyCode::Char('m') => app.open_map(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab | KeyCode::Esc => app.risk_focus = RiskFocus::Query,
        _ => {}
    }
}
