//! Orion CLI application: start a mission, chat with the analyst, and keep
//! the session in a local file between runs.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod config;
pub mod repl;
pub mod terminal;
pub mod utils;
