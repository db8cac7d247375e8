use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use sift_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "sift",
    version,
    about = "Classify files with composable name/folder/extension rules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan(args) => commands::scan::run(args),
    }
}
