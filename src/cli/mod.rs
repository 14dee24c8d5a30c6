//! Console front-end: menus on stdin, narration on stdout.

mod app;
mod config;
mod input;
mod messages;
mod presenter;

pub use app::App;
pub use config::CliConfig;
