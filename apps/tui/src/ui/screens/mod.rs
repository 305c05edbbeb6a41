pub mod help;
pub mod map;
pub mod risk;
pub mod workbench;
