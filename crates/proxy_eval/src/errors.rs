//! Evaluation errors.
//!
//! Construction-time failures are [`TypeMismatch`]es from `proxy_types`;
//! everything raised while an expression runs is an [`EvalError`].
//! [`ProxyError`] unifies both for host code that builds and evaluates in
//! one place.

use proxy_types::{TypeDescriptor, TypeMismatch};

/// Result of evaluating an expression.
pub type EvalResult<T> = Result<T, EvalError>;

/// Error raised while evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An erased context did not hold the type an expression reads.
    #[error("context cast failed: expected `{expected}`, found `{found}`")]
    ContextCast {
        expected: TypeDescriptor,
        found: TypeDescriptor,
    },

    /// A combinator's internal invariant was broken.
    ///
    /// Construction-time checks should make this unreachable; it is kept
    /// apart from ordinary failures so hosts can treat it as fatal.
    #[error("contract violation in {operation}: expected `{expected}`, found `{found}`")]
    ContractViolation {
        operation: &'static str,
        expected: TypeDescriptor,
        found: TypeDescriptor,
    },

    /// A composed operation failed.
    #[error("{message}")]
    Failed { message: String },
}

impl EvalError {
    pub fn failed(message: impl Into<String>) -> Self {
        EvalError::Failed {
            message: message.into(),
        }
    }

    pub fn is_contract_violation(&self) -> bool {
        matches!(self, EvalError::ContractViolation { .. })
    }
}

/// Any error the engine can produce, construction or evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[cfg(test)]
mod tests;
