use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (one JSON object per line) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Configuration for printing a filter pass.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    /// Whether to print the `found N files` summary after the pass.
    pub show_summary: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            show_summary: true,
        }
    }
}

/// One matched record in the result stream.
#[derive(Debug)]
pub struct MatchRow<'a> {
    pub path: &'a Path,
    pub file_name: &'a str,
    pub extension: &'a str,
}

/// Trait for printing filter results.
///
/// Implementations receive the stream of matched rows while the filter is
/// being consumed, then a final count once the stream is exhausted. A pass
/// abandoned before exhaustion never calls `finish`.
pub trait ReportPrinter {
    /// Called once before any rows are printed.
    fn begin(&mut self) -> io::Result<()>;

    /// Called for each matched row, in match order.
    fn print_row(&mut self, row: &MatchRow<'_>) -> io::Result<()>;

    /// Called once after the stream is fully consumed; `found` is the
    /// final match count.
    fn finish(&mut self, found: usize) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        let use_color = match cfg.color {
            ColorChoice::Always => true,
            // Auto over an arbitrary writer cannot probe for a TTY; callers
            // that need detection should go through `stdout`.
            ColorChoice::Auto | ColorChoice::Never => false,
        };

        Self {
            out,
            cfg,
            use_color,
        }
    }

    /// Create a printer that writes to stdout, with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            cfg,
            use_color,
        }
    }

    #[inline]
    fn format_path(&self, path: &Path) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", path.display())
        } else {
            path.display().to_string()
        }
    }
}

impl<W: Write> ReportPrinter for HumanPrinter<W> {
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &MatchRow<'_>) -> io::Result<()> {
        writeln!(self.out, "process -> {}", self.format_path(row.path))
    }

    fn finish(&mut self, found: usize) -> io::Result<()> {
        if self.cfg.show_summary {
            writeln!(self.out, "found {} files", found)?;
        }
        Ok(())
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    /// Create a printer that writes rows to stdout and the summary to stderr.
    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
        }
    }
}

impl<W: Write, E: Write> ReportPrinter for JsonPrinter<W, E> {
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &MatchRow<'_>) -> io::Result<()> {
        let obj = serde_json::json!({
            "path": row.path.display().to_string(),
            "name": row.file_name,
            "ext": row.extension,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, found: usize) -> io::Result<()> {
        if self.cfg.show_summary {
            let obj = serde_json::json!({
                "type": "summary",
                "found": found,
            });
            writeln!(self.err, "{}", obj)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
