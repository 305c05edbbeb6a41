pub mod button;
pub mod chrome;
pub mod popup;
pub mod risk_gauge;
pub mod scroll;
pub mod world_map;
