//! Build context.
//!
//! The context carries the project root explicitly. Every path an operation
//! touches is resolved against it (or against a folder derived from it); the
//! process-wide working directory is never changed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{CompileTemplate, Config};
use crate::util::shell::Shell;

/// Folder receiving objects built from application sources.
pub const BUILD_FOLDER: &str = "build";

/// Folder holding test sources and their objects.
pub const TESTS_FOLDER: &str = "tests";

/// Everything an operation needs to know about the project it runs in.
#[derive(Debug)]
pub struct BuildContext {
    root: PathBuf,
    compile: CompileTemplate,
    shell: Shell,
}

impl BuildContext {
    pub fn new(root: impl Into<PathBuf>, config: Config, shell: Shell) -> Self {
        BuildContext {
            root: root.into(),
            compile: config.compile,
            shell,
        }
    }

    /// Use the current working directory as the project root.
    pub fn from_cwd(config: Config, shell: Shell) -> Result<Self> {
        let root = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::new(root, config, shell))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/build`.
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_FOLDER)
    }

    /// `<root>/tests`.
    pub fn tests_dir(&self) -> PathBuf {
        self.root.join(TESTS_FOLDER)
    }

    pub fn compile_template(&self) -> &CompileTemplate {
        &self.compile
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }
}
