//! Core data structures for prjctmkr.
//!
//! This module contains the foundational types used throughout the tool:
//! - Path names and the text operations on them
//! - Filesystem role classification
//! - The operand filter
//! - Operation codes

pub mod classify;
pub mod filter;
pub mod operation;
pub mod path;

pub use classify::FileRole;
pub use operation::{Arity, Operation, Request};
pub use path::{PathError, PathName};
