//! The interactive front end: argument parsing and the numbered menu.

pub mod args;
pub mod menu;

pub use args::Cli;
pub use menu::Menu;
