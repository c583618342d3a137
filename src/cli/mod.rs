// CLI module
// Argument parsing and the interactive menu dispatcher

mod args;
pub mod menu;

pub use args::CliArgs;
pub use menu::main_menu;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or the --help flag), clap displays
/// the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
