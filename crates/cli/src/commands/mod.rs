pub mod scan;

use clap::Subcommand;
pub use scan::ScanArgs;

/// Common error type for command handlers
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recursively scan a directory and print the files matching the rules.
    ///
    /// Example:
    ///   sift scan ~/mess --ext img --ext jpg --folder photos
    ///   sift scan /data --name report --skip-name draft --exclude 'node_modules/'
    Scan(ScanArgs),
}
