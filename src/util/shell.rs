//! Centralized terminal output.
//!
//! Everything the tool prints goes through [`Shell`]:
//! - Status lines, right-aligned in a 12 character column (`   Compiling ...`)
//! - Diagnostics tagged with the tool name (`prjctmkr: not a file: x.c`)
//! - JSON events, one per line, when machine-readable output is selected
//!
//! Human and JSON output are mutually exclusive. All output goes to stdout so
//! it interleaves in order with the compiler's own output.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crate::builder::events::BuildEvent;
use crate::util::diagnostic::PROGRAM_NAME;

/// Shell output mode - Human and Json are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMode {
    /// Human-readable output with optional colors.
    Human {
        verbosity: Verbosity,
        color: ColorChoice,
    },
    /// Machine-readable JSON output only.
    Json,
}

impl Default for ShellMode {
    fn default() -> Self {
        ShellMode::Human {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
        }
    }
}

/// Output verbosity level (Human mode only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: diagnostics only
    Quiet,
    #[default]
    Normal,
    /// --verbose: also debug logging
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Finished,
    Removed,

    // In-progress statuses (cyan)
    Compiling,

    // Warning statuses (yellow)
    Skipped,
    Warning,

    // Error status (red)
    Error,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Finished => "Finished",
            Status::Removed => "Removed",
            Status::Compiling => "Compiling",
            Status::Skipped => "Skipped",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Finished | Status::Removed => "\x1b[1;32m",
            Status::Compiling => "\x1b[1;36m",
            Status::Skipped | Status::Warning => "\x1b[1;33m",
            Status::Error => "\x1b[1;31m",
        }
    }

    fn width(&self) -> usize {
        12
    }
}

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    mode: ShellMode,
    use_color: bool,
}

impl Shell {
    pub fn new(mode: ShellMode) -> Self {
        let use_color = match &mode {
            ShellMode::Json => false,
            ShellMode::Human { color, .. } => match color {
                ColorChoice::Auto => io::stdout().is_terminal(),
                ColorChoice::Always => true,
                ColorChoice::Never => false,
            },
        };

        Shell { mode, use_color }
    }

    /// Create a shell from CLI flags.
    ///
    /// JSON mode takes precedence over quiet/verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice, json: bool) -> Self {
        let mode = if json {
            ShellMode::Json
        } else {
            let verbosity = if quiet {
                Verbosity::Quiet
            } else if verbose {
                Verbosity::Verbose
            } else {
                Verbosity::Normal
            };
            ShellMode::Human { verbosity, color }
        };

        Shell::new(mode)
    }

    /// A shell that never colors, for tests and piped output.
    pub fn plain() -> Self {
        Shell::new(ShellMode::Human {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Never,
        })
    }

    pub fn is_quiet(&self) -> bool {
        matches!(
            self.mode,
            ShellMode::Human {
                verbosity: Verbosity::Quiet,
                ..
            }
        )
    }

    pub fn is_json(&self) -> bool {
        matches!(self.mode, ShellMode::Json)
    }

    /// Print a status line.
    ///
    /// Format: `{status:>12} {message}`. Ignored in quiet and JSON mode.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_json() || self.is_quiet() {
            return;
        }

        println!("{} {}", self.format_status(status), msg);
    }

    /// Print an error diagnostic.
    pub fn error(&self, msg: impl Display) {
        self.diagnostic(Status::Error, None, msg);
    }

    /// Print a warning diagnostic.
    pub fn warn(&self, msg: impl Display) {
        self.diagnostic(Status::Warning, None, msg);
    }

    /// Print a diagnostic for a file left out of a batch.
    pub fn skipped(&self, msg: impl Display) {
        self.diagnostic(Status::Skipped, None, msg);
    }

    /// Print a diagnostic for an operand dropped by an extension filter.
    pub fn rejected(&self, extension: &str, path: impl Display) {
        self.diagnostic(
            Status::Skipped,
            Some(&format!("[*{}]", extension)),
            format!("rejecting {}", path),
        );
    }

    /// Print a tool-tagged diagnostic.
    ///
    /// Diagnostics survive quiet mode. In JSON mode they become `diagnostic`
    /// events.
    fn diagnostic(&self, status: Status, scope: Option<&str>, msg: impl Display) {
        if self.is_json() {
            self.event(&BuildEvent::Diagnostic {
                level: status.as_str().to_lowercase(),
                message: msg.to_string(),
            });
            return;
        }

        println!("{} {}", self.format_tag(status, scope), msg);
    }

    /// Print a JSON event to stdout.
    ///
    /// Only works in JSON mode; silently ignored in human mode.
    pub fn event(&self, event: &BuildEvent) {
        if !self.is_json() {
            return;
        }

        if let Some(line) = render_event(event) {
            println!("{}", line);
            if let Err(e) = io::stdout().flush() {
                tracing::debug!("failed to flush stdout: {}", e);
            }
        }
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        let width = status.width();

        if self.use_color {
            let color = status.color_code();
            format!("{}{:>width$}\x1b[0m", color, text, width = width)
        } else {
            format!("{:>width$}", text, width = width)
        }
    }

    fn format_tag(&self, status: Status, scope: Option<&str>) -> String {
        let tag = match scope {
            Some(scope) => format!("{} {}:", PROGRAM_NAME, scope),
            None => format!("{}:", PROGRAM_NAME),
        };

        if self.use_color {
            format!("{}{}\x1b[0m", status.color_code(), tag)
        } else {
            tag
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(ShellMode::default())
    }
}

/// Serialize an event to a single JSON line.
///
/// A serialization failure is logged and yields `None`, so no partial or
/// empty line is ever printed.
fn render_event(event: &BuildEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(line) => Some(line),
        Err(e) => {
            tracing::warn!("failed to serialize build event: {}", e);
            None
        }
    }
}

/// Format a duration in a human-readable way.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}
