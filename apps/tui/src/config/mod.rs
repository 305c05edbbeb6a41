// Configuration for crisis_dashboard
// Environment-driven settings and logger setup

pub mod logging;
pub mod settings;

pub use logging::{init_logger, LogTarget};
pub use settings::Settings;
