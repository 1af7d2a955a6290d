//! Operation codes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::util::diagnostic::UsageError;

/// One of the six build operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Build,
    Tests,
    Clean,
    BuildAll,
    TestsAll,
    CleanAll,
}

/// Whether an operation takes explicit file operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// At least one operand is required.
    Targeted,
    /// Operands are forbidden; targets are discovered by enumeration.
    WholeTree,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Build,
        Operation::BuildAll,
        Operation::Tests,
        Operation::TestsAll,
        Operation::Clean,
        Operation::CleanAll,
    ];

    /// The single-character code selecting this operation.
    pub fn code(self) -> char {
        match self {
            Operation::Build => 'b',
            Operation::Tests => 't',
            Operation::Clean => 'c',
            Operation::BuildAll => 'B',
            Operation::TestsAll => 'T',
            Operation::CleanAll => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Build => "build",
            Operation::Tests => "tests",
            Operation::Clean => "clean",
            Operation::BuildAll => "buildall",
            Operation::TestsAll => "testsall",
            Operation::CleanAll => "cleanall",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Build | Operation::Tests | Operation::Clean => Arity::Targeted,
            Operation::BuildAll | Operation::TestsAll | Operation::CleanAll => Arity::WholeTree,
        }
    }

    /// Validate the number of operands against this operation's arity.
    pub fn check_operands(self, count: usize) -> Result<(), UsageError> {
        match (self.arity(), count) {
            (Arity::Targeted, 0) => Err(UsageError::MissingOperands { operation: self }),
            (Arity::WholeTree, n) if n > 0 => Err(UsageError::UnexpectedOperands {
                operation: self,
                count: n,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the user asked the tool to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Operation(Operation),
    Help,
    Structure,
}

impl FromStr for Request {
    type Err = std::convert::Infallible;

    /// Unrecognised requests fall back to help.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Ok(match code {
                's' | 'S' => Request::Structure,
                c => Operation::from_code(c)
                    .map(Request::Operation)
                    .unwrap_or(Request::Help),
            });
        }

        let request = match s.to_ascii_lowercase().as_str() {
            "structure" => Request::Structure,
            name => Operation::ALL
                .into_iter()
                .find(|op| op.name() == name)
                .map(Request::Operation)
                .unwrap_or(Request::Help),
        };
        Ok(request)
    }
}
