use std::fs;
use std::io::{Stderr, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use log::debug;
use sift_engine::{Matches, SpecExpr, and_, ext, folder, name, not_};
use sift_fs::{ExcludeSet, walk};
use sift_runtime::default_scan_root;

use crate::commands::CommandResult;
use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, MatchRow, OutputFormat, PrinterConfig, ReportPrinter,
};

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output matches as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress the `found N files` summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn ReportPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        let cfg = PrinterConfig {
            format,
            color,
            show_summary: !self.quiet,
        };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Root directory to scan (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Match when the file name contains any given term (repeatable)
    #[arg(long = "name", value_name = "TERM")]
    pub name_terms: Vec<String>,

    /// Reject when the file name contains any given term (repeatable)
    #[arg(long = "skip-name", value_name = "TERM")]
    pub skip_name_terms: Vec<String>,

    /// Match when any folder segment contains any given term (repeatable)
    #[arg(long = "folder", value_name = "TERM")]
    pub folder_terms: Vec<String>,

    /// Match when the extension contains any given term (repeatable)
    #[arg(long = "ext", value_name = "TERM")]
    pub ext_terms: Vec<String>,

    /// Gitignore-style pattern pruned from the walk (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Destination directory to create for later processing
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ScanArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ScanArgs) -> CommandResult<ExitCode> {
    let root = args.root.clone().unwrap_or_else(default_scan_root);

    if let Some(dest) = &args.dest {
        fs::create_dir_all(dest)
            .with_context(|| format!("failed to create destination {}", dest.display()))?;
        debug!("[scan] destination ready: {:?}", dest);
    }

    let excludes =
        ExcludeSet::new(&root, &args.exclude_patterns).context("invalid exclude pattern")?;

    let records =
        walk(&root, &excludes).with_context(|| format!("failed to scan {}", root.display()))?;

    let spec = build_spec(&args);
    debug!("[scan] specification: {:?}", spec);

    let mut matches = Matches::new(records.into_iter(), &spec);
    let mut printer = args.output.make_printer();

    printer.begin()?;

    for record in matches.by_ref() {
        let row = MatchRow {
            path: &record.file_path,
            file_name: &record.file_name,
            extension: &record.extension,
        };
        printer.print_row(&row)?;
    }

    // The counter is final only now that the stream is exhausted.
    printer.finish(matches.matched())?;

    Ok(ExitCode::from(0))
}

/// One primitive per flag group, AND-ed together; `--skip-name` becomes a
/// negated name primitive. No groups at all matches every record.
fn build_spec(args: &ScanArgs) -> SpecExpr {
    let mut children = Vec::new();

    if !args.name_terms.is_empty() {
        children.push(name(&args.name_terms));
    }
    if !args.skip_name_terms.is_empty() {
        children.push(not_(name(&args.skip_name_terms)));
    }
    if !args.folder_terms.is_empty() {
        children.push(folder(&args.folder_terms));
    }
    if !args.ext_terms.is_empty() {
        children.push(ext(&args.ext_terms));
    }

    and_(children)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
