//! Construction-time type errors.

use std::fmt;

use crate::TypeDescriptor;

/// Which descriptor relation failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Check {
    /// Two operands must require the same context (or either is `Simple`).
    Match,
    /// A loop condition must accept the state its body produces.
    Accept,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Match => write!(f, "match"),
            Check::Accept => write!(f, "accept"),
        }
    }
}

/// Two descriptors failed a compatibility check.
///
/// Returned by combinators before any expression is built, so a mismatch
/// never leaves a partially constructed expression behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("type mismatch ({check} check): expected `{expected}`, found `{found}`")]
pub struct TypeMismatch {
    pub check: Check,
    pub expected: TypeDescriptor,
    pub found: TypeDescriptor,
}

impl TypeMismatch {
    pub fn new(check: Check, expected: TypeDescriptor, found: TypeDescriptor) -> Self {
        TypeMismatch {
            check,
            expected,
            found,
        }
    }
}
