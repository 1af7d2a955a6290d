//! Compile command configuration.
//!
//! The only configurable setting is the compile command template. It is
//! resolved from, highest precedence first:
//! 1. An explicit value (the `--compiler` flag)
//! 2. The `PRJCTMKR` environment variable
//! 3. [`DEFAULT_COMPILE`]

use thiserror::Error;

/// Environment variable overriding the compile command.
pub const COMPILER_ENV: &str = "PRJCTMKR";

/// Compile command used when nothing overrides it.
pub const DEFAULT_COMPILE: &str = "cc68x -g";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("compile command is empty (check --compiler or $PRJCTMKR)")]
    EmptyCompileCommand,
}

/// A compiler program followed by its fixed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTemplate {
    raw: String,
}

impl CompileTemplate {
    /// Parse a template such as `"gcc -g -Wall"`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(ConfigError::EmptyCompileCommand);
        }
        Ok(CompileTemplate { raw })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The compiler program.
    pub fn program(&self) -> &str {
        self.raw.split_whitespace().next().unwrap_or(&self.raw)
    }

    /// The fixed flags following the program.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.raw.split_whitespace().skip(1)
    }
}

impl Default for CompileTemplate {
    fn default() -> Self {
        CompileTemplate {
            raw: DEFAULT_COMPILE.to_string(),
        }
    }
}

/// Resolved configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub compile: CompileTemplate,
}

impl Config {
    /// Resolve from an explicit override, falling back to the default.
    ///
    /// The binary passes the flag and environment already merged by clap.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let compile = match explicit {
            Some(raw) => CompileTemplate::new(raw)?,
            None => CompileTemplate::default(),
        };
        Ok(Config { compile })
    }
}
