//! CLI definitions using clap.

use clap::{Parser, ValueEnum};

use prjctmkr::core::Request;
use prjctmkr::util::config::COMPILER_ENV;
use prjctmkr::util::shell::{ColorChoice, Shell};

/// prjctmkr - compiles .c files in nested folders, meant to be used with make
#[derive(Parser)]
#[command(name = "prjctmkr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation code: b t c B T C, h for help, s for the example structure
    #[arg(value_name = "OPERATION")]
    pub operation: Option<Request>,

    /// Files the operation applies to
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    /// Output format for build events
    #[arg(long, value_enum, default_value_t = MessageFormat::Human, value_name = "FMT")]
    pub message_format: MessageFormat,

    /// Compile command template
    #[arg(long, env = COMPILER_ENV, value_name = "COMMAND")]
    pub compiler: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    Human,
    Json,
}

impl Cli {
    pub fn shell(&self) -> Shell {
        Shell::from_flags(
            self.quiet,
            self.verbose,
            self.color,
            self.message_format == MessageFormat::Json,
        )
    }
}
