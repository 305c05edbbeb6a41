// App module for crisis_dashboard
// Handles view state and the requests behind each control

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{AppActions, Outcome};
pub use input::handle_input;
pub use state::{App, AppScreen, BackendStatus, RiskFocus, WorkbenchFocus};
