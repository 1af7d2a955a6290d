//! Build driver.
//!
//! This module runs the external compiler once per source file and walks the
//! project tree for whole-tree builds.

pub mod compiler;
pub mod context;
pub mod events;
pub mod executor;
pub mod traverse;

pub use compiler::{CompileInvocation, CompileStatus, Compiler, ProcessCompiler};
pub use context::BuildContext;
pub use events::BuildEvent;
pub use executor::{Executor, Report};
pub use traverse::traverse;
