//! Terminal output for CLI handlers.
//!
//! Every helper has two renderings: an indented, colored line for people, and
//! a single JSON object `{"type": ..., "payload": ...}` on stdout when
//! `--json` is set. `--quiet` drops informational lines but keeps warnings
//! and errors.

use std::fmt::Display;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

/// Global output flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static SETTINGS: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);

fn settings() -> OutputConfig {
    *SETTINGS
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .read()
}

/// How a line behaves under `--quiet`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Always,
}

/// Print `payload` as JSON, or call `human` unless quiet mode hides it.
fn emit(kind: &str, payload: Value, level: Level, human: impl FnOnce()) {
    let config = settings();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if level == Level::Always || !config.quiet {
        human();
    }
}

fn message(text: &str) -> Value {
    json!({ "message": text })
}

/// Apply the global `--json`, `--quiet` and `-v` flags.
pub fn configure(config: OutputConfig) {
    *SETTINGS
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    settings().json
}

#[must_use]
pub fn verbosity() -> u8 {
    settings().verbose
}

pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "sarwatch", "version": version }),
        Level::Info,
        || println!("{} {}\n", "sarwatch".bold(), version.dimmed()),
    );
}

/// Labeled value, label column padded to 14.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        Level::Info,
        || println!("  {:<14} {}", label.dimmed(), value),
    );
}

pub fn section(title: &str) {
    emit("section", json!({ "title": title }), Level::Info, || {
        println!("\n{}", title.bold());
    });
}

pub fn success(text: &str) {
    emit("success", message(text), Level::Info, || {
        println!("  {} {}", "✓".green(), text);
    });
}

/// Shown in quiet mode too.
pub fn warning(text: &str) {
    emit("warning", message(text), Level::Always, || {
        println!("  {} {}", "⚠".yellow(), text);
    });
}

/// Written to stderr in both renderings.
pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": message(text) }));
    } else {
        eprintln!("  {} {}", "×".red(), text);
    }
}

pub fn note(text: &str) {
    emit("note", message(text), Level::Info, || {
        println!("  {}", text.dimmed());
    });
}

pub fn hint(text: &str) {
    emit("hint", message(text), Level::Info, || {
        println!("  {}: {}", "hint".cyan().dimmed(), text.dimmed());
    });
}

/// A step that is starting, e.g. "Downloading S1A_...zip...".
pub fn action(verb: &str, target: &str) {
    emit(
        "action",
        json!({ "verb": verb, "target": target, "status": "in_progress" }),
        Level::Info,
        || println!("  {} {}...", verb.bold().cyan(), target),
    );
}

pub fn action_done(verb: &str, target: &str) {
    emit(
        "action",
        json!({ "verb": verb, "target": target, "status": "done" }),
        Level::Info,
        || println!("  {} {} {}", "✓".green(), verb.bold().green(), target),
    );
}

/// Indented block such as a rendered table.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), Level::Info, || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Structured command result, printed as-is.
pub fn json_output(value: Value) {
    println!("{value}");
}

pub fn highlight(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.cyan().to_string()
    }
}

pub fn muted(value: impl Display) -> String {
    if is_json() {
        value.to_string()
    } else {
        value.dimmed().to_string()
    }
}

fn hidden_in(config: OutputConfig) -> bool {
    config.json || config.quiet
}

fn spinner_style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_strings(SPINNER_FRAMES)
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Running spinner; hidden in JSON or quiet mode.
pub fn spinner(text: &str) -> ProgressBar {
    let pb = if hidden_in(settings()) {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style("  {spinner:.cyan} {msg}"));
        pb.enable_steady_tick(TICK);
        pb
    };
    pb.set_message(text.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, text: &str) {
    finish_spinner(pb, "spinner_success", text, Level::Info, "✓".green().to_string());
}

pub fn spinner_fail(pb: &ProgressBar, text: &str) {
    finish_spinner(pb, "spinner_fail", text, Level::Always, "×".red().to_string());
}

fn finish_spinner(pb: &ProgressBar, kind: &str, text: &str, level: Level, mark: String) {
    let config = settings();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": message(text) }));
        pb.finish_and_clear();
    } else if level == Level::Info && config.quiet {
        pb.finish_and_clear();
    } else {
        pb.finish_with_message(format!("{mark} {text}"));
    }
}

/// Byte progress for a download. Without a known total it renders as a
/// spinner with a byte counter.
pub fn transfer_bar(label: &str, total: Option<u64>) -> ProgressBar {
    if hidden_in(settings()) {
        return ProgressBar::hidden();
    }

    let pb = match total {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "  {msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(spinner_style("  {spinner:.cyan} {msg} {bytes} ({bytes_per_sec})"));
            pb.enable_steady_tick(TICK);
            pb
        }
    };
    pb.set_message(label.to_string());
    pb
}
