//! High-level operations.
//!
//! Each operation validates its operand list, resolves the output folders
//! against the project root, and drives the builder.

pub mod build;
pub mod clean;

use anyhow::Result;

use crate::builder::compiler::Compiler;
use crate::builder::context::BuildContext;
use crate::builder::executor::{Executor, Report};
use crate::core::operation::Operation;
use crate::core::path::path_names;
use crate::util::diagnostic::UsageError;

pub use build::{build, build_all, tests_all};
pub use clean::{clean, clean_all};

/// Run `operation` on `operands`.
///
/// Usage errors (wrong operand count, invalid operand, missing tests folder)
/// are reported and turn the operation into a no-op; the returned report is
/// marked aborted. Only failures that leave the tool unable to do anything
/// (an output folder that cannot be created, an unreadable folder) are
/// returned as errors.
pub fn run_operation<I, S>(
    ctx: &BuildContext,
    compiler: &mut dyn Compiler,
    operation: Operation,
    operands: I,
) -> Result<Report>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut exec = Executor::new(ctx, compiler, operation);
    let operands: Vec<String> = operands.into_iter().map(Into::into).collect();

    let result = operation
        .check_operands(operands.len())
        .and_then(|()| Ok(path_names(operands)?))
        .map_err(anyhow::Error::from)
        .and_then(|files| match operation {
            Operation::Build => build(&mut exec, files),
            Operation::Tests => build::tests(&mut exec, files),
            Operation::Clean => clean(&mut exec, files),
            Operation::BuildAll => build_all(&mut exec),
            Operation::TestsAll => tests_all(&mut exec),
            Operation::CleanAll => clean_all(&mut exec),
        });

    if let Err(e) = result {
        match e.downcast_ref::<UsageError>() {
            Some(usage) => {
                ctx.shell().error(usage);
                exec.abort();
            }
            None => return Err(e),
        }
    }

    Ok(exec.finish())
}
