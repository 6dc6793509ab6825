// CLI module
// Interactive REPL and slash command handling

mod commands;
mod repl;

pub use commands::{handle_command, Command};
pub use repl::Repl;
