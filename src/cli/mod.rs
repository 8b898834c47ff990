// src/cli/mod.rs
//
// recruitctl: argument parsing, command dispatch and terminal rendering

pub mod args;
pub mod commands;
pub mod notifier;
pub mod render;

pub use args::Cli;
pub use commands::App;
pub use notifier::TerminalNotifier;
