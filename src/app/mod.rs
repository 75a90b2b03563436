//! App layer - the interactive menu shell
//!
//! The shell reads prompts from any `BufRead`, writes to any `Write`, sends
//! through a [`Transport`](crate::network::Transport) and keeps the single
//! last request in [`AppState`].

pub mod commands;
pub mod prompt;
pub mod shell;
pub mod state;

pub use prompt::InputClosed;
pub use shell::Shell;
pub use state::AppState;
