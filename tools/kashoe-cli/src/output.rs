//! Terminal rendering for `kashoe`.
//!
//! Everything human-facing goes through [`Output`]; with `--json` only the
//! machine-readable payload (and errors, as JSON on stderr) is printed.

use std::borrow::Cow;
use std::time::Duration;

use console::{pad_str, style, Alignment, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use kashoe_commerce::catalog::EventStatus;

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Done,
    Caution,
    Failure,
    Trace,
}

impl Tone {
    fn mark(self) -> StyledObject<&'static str> {
        match self {
            Tone::Info => style("ℹ").blue(),
            Tone::Done => style("✓").green(),
            Tone::Caution => style("⚠").yellow(),
            Tone::Failure => style("✗").red(),
            Tone::Trace => style("→").dim(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Caution | Tone::Failure | Tone::Trace)
    }
}

/// Output handler shared by every command.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Whether `--json` was given.
    pub fn is_json(&self) -> bool {
        self.json
    }

    fn say(&self, tone: Tone, msg: &str) {
        if self.json {
            if tone == Tone::Failure {
                eprintln!("{}", serde_json::json!({ "error": msg }));
            }
            return;
        }
        if tone == Tone::Trace && !self.verbose {
            return;
        }

        let body = match tone {
            Tone::Failure => style(msg).red().to_string(),
            Tone::Trace => style(msg).dim().to_string(),
            _ => msg.to_string(),
        };
        if tone.to_stderr() {
            eprintln!("{} {}", tone.mark(), body);
        } else {
            println!("{} {}", tone.mark(), body);
        }
    }

    pub fn info(&self, msg: &str) {
        self.say(Tone::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.say(Tone::Done, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.say(Tone::Caution, msg);
    }

    /// Also printed in JSON mode, as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        self.say(Tone::Failure, msg);
    }

    /// Only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        self.say(Tone::Trace, msg);
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// `[2/3] Seeding events...`
    pub fn step(&self, current: usize, total: usize, msg: &str) {
        if !self.json {
            println!("{} {}", style(format!("[{}/{}]", current, total)).dim(), msg);
        }
    }

    /// Indented `key: value` detail line.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Pretty-print a payload. Printed whatever the mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{}", text),
            Err(e) => tracing::warn!(error = %e, "could not render json output"),
        }
    }

    /// Start a table: prints the column titles and returns a row printer.
    pub fn table(&self, columns: &[(&str, usize)]) -> Table {
        let table = Table {
            widths: columns.iter().map(|(_, width)| *width).collect(),
            hidden: self.json,
        };
        let titles: Vec<String> = columns.iter().map(|(title, _)| style(*title).bold().to_string()).collect();
        table.print(&titles);
        table
    }

    /// Bar for a known number of items; `noun` labels the count.
    pub fn progress(&self, len: u64, noun: &str) -> ProgressBar {
        self.bar(
            ProgressBar::new(len),
            ProgressStyle::default_bar(),
            "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {prefix}: {wide_msg}",
            noun,
        )
    }

    /// Spinner while a request is in flight.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        let pb = self.bar(
            ProgressBar::new_spinner(),
            ProgressStyle::default_spinner(),
            "{spinner:.green} {prefix}",
            msg,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn bar(&self, pb: ProgressBar, fallback: ProgressStyle, template: &str, prefix: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }
        let style = fallback.clone().template(template).unwrap_or(fallback).progress_chars("=> ");
        pb.set_style(style);
        pb.set_prefix(prefix.to_string());
        pb
    }
}

/// Fixed-width rows under an [`Output::table`] header.
#[derive(Debug)]
pub struct Table {
    widths: Vec<usize>,
    hidden: bool,
}

impl Table {
    /// Print one row. Cells wider than their column are cut with `…`;
    /// styled cells are measured without their colour codes.
    pub fn row<S: AsRef<str>>(&self, cells: &[S]) {
        self.print(cells);
    }

    fn print<S: AsRef<str>>(&self, cells: &[S]) {
        if !self.hidden {
            println!("  {}", self.render(cells));
        }
    }

    fn render<S: AsRef<str>>(&self, cells: &[S]) -> String {
        cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, width)| fit(cell.as_ref(), *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }
}

fn fit(text: &str, width: usize) -> Cow<'_, str> {
    pad_str(text, width, Alignment::Left, Some("…"))
}

/// Coloured label for an event status.
pub fn status_badge(status: EventStatus) -> String {
    let label = status.as_str();
    match status {
        EventStatus::Upcoming => style(label).green().to_string(),
        EventStatus::Ongoing => style(label).yellow().to_string(),
        EventStatus::Completed => style(label).dim().to_string(),
        EventStatus::Cancelled => style(label).red().to_string(),
    }
}

/// Coloured stock count; out-of-stock products stand out.
pub fn stock_badge(stock: i64) -> String {
    if stock > 0 {
        style(stock.to_string()).green().to_string()
    } else {
        style("out of stock").red().to_string()
    }
}
