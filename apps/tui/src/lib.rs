// Export our modules for use in the binary and integration tests
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod lifecycle;
pub mod links;
pub mod map;
pub mod terminal;
pub mod ui;

pub use domain::{CrisisReport, RiskLevel};
