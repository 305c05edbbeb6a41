use crate::app::state::{App, WorkbenchFocus};
use crossterm::event::KeyCode;

pub fn handle_workbench_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Tab => app.workbench_focus = app.workbench_focus.next(),
        KeyCode::BackTab => app.workbench_focus = app.workbench_focus.previous(),
        KeyCode::Enter => match app.workbench_focus {
            WorkbenchFocus::Company | WorkbenchFocus::City => app.start_location(),
            WorkbenchFocus::Recipe => app.start_recipe(),
        },
        _ => handle_field_input(app, key),
    }
}

fn handle_field_input(app: &mut App, key: KeyCode) {
    let field = match app.workbench_focus {
        WorkbenchFocus::Company => &mut app.company_query,
        WorkbenchFocus::City => &mut app.city_query,
        WorkbenchFocus::Recipe => {
            if key == KeyCode::Char('q') {
                app.running = false;
            }
            return;
        }
    };

    match key {
        KeyCode::Char(c) => field.push(c),
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Esc => field.clear(),
        _ => {}
    }
}
