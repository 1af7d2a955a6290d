//! External compiler invocation.
//!
//! Each source file is compiled by one blocking run of the configured compiler:
//! `<template> -c <source> -o <object>`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::util::config::CompileTemplate;
use crate::util::process::{find_executable, ProcessBuilder};

/// A single compile command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileInvocation {
    /// The template the command was built from.
    pub template: CompileTemplate,
    /// Source path, relative to `cwd` or absolute.
    pub source: String,
    /// Object path, relative to `cwd` or absolute.
    pub object: PathBuf,
    /// Directory the compiler runs in.
    pub cwd: PathBuf,
}

impl CompileInvocation {
    pub fn new(
        template: &CompileTemplate,
        source: impl Into<String>,
        object: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        CompileInvocation {
            template: template.clone(),
            source: source.into(),
            object: object.into(),
            cwd: cwd.into(),
        }
    }

    /// Arguments following the program.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.template.flags().map(str::to_string).collect();
        args.push("-c".to_string());
        args.push(self.source.clone());
        args.push("-o".to_string());
        args.push(self.object.to_string_lossy().into_owned());
        args
    }

    /// The command line as shown to the user.
    pub fn command_line(&self) -> String {
        format!(
            "{} -c {} -o {}",
            self.template.as_str(),
            self.source,
            self.object.display()
        )
    }

    fn process(&self) -> ProcessBuilder {
        ProcessBuilder::new(self.template.program())
            .args(self.args())
            .cwd(&self.cwd)
    }
}

/// How a compiler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileStatus {
    /// `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CompileStatus {
    pub fn success() -> Self {
        CompileStatus { exit_code: Some(0) }
    }

    pub fn exited(code: i32) -> Self {
        CompileStatus {
            exit_code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs compile commands.
///
/// An `Err` means the compiler could not be run at all; a compiler that ran and
/// failed is reported through [`CompileStatus`].
pub trait Compiler {
    fn compile(&mut self, invocation: &CompileInvocation) -> Result<CompileStatus>;
}

/// Runs the compiler as a child process, passing its output through.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCompiler;

impl ProcessCompiler {
    pub fn new() -> Self {
        ProcessCompiler
    }
}

fn is_bare_name(program: &str) -> bool {
    Path::new(program).components().count() == 1
}

impl Compiler for ProcessCompiler {
    fn compile(&mut self, invocation: &CompileInvocation) -> Result<CompileStatus> {
        let program = invocation.template.program();
        if is_bare_name(program) && find_executable(program).is_none() {
            bail!("compiler `{}` not found in PATH", program);
        }

        let status = invocation.process().status()?;
        Ok(CompileStatus {
            exit_code: status.code(),
        })
    }
}
