//! Proxy Eval - typed lazy expressions over an opaque context.
//!
//! An expression is a deferred computation from a context `C` to a value
//! `T`, tagged with the [`TypeDescriptor`] of the context it reads.
//! Expressions are built bottom-up and evaluated later, any number of times,
//! against concrete contexts.
//!
//! # Architecture
//!
//! - [`Expr`]: the base expression, built from a literal or a function.
//! - [`OptionalExpr`]: explicit widening of a value into `Some`.
//! - [`RangeExpr`] / [`IteratorExpr`]: lazy sequences, with one-way
//!   narrowing from range to iterator and the shared [`SequenceExpr`]
//!   capability.
//! - [`conditional`] / [`while_loop`]: combinators that check their
//!   operands' descriptors once, at construction.
//! - [`AnyContext`]: the erased context hosts use when types are only known
//!   at runtime, with [`while_loop_any`] as its loop form.
//! - [`Proxy`]: the closed set of specializations for one payload type.
//!
//! # Errors
//!
//! Construction fails with [`TypeMismatch`]; evaluation fails with
//! [`EvalError`]. [`ProxyError`] covers both.

mod combinators;
mod context;
pub mod errors;
mod expr;
mod optional;
mod proxy;
mod sequence;
mod stack;
mod tracing_setup;

pub use combinators::{conditional, while_loop};
pub use context::{while_loop_any, AnyContext};
pub use errors::{EvalError, EvalResult, ProxyError};
pub use expr::Expr;
pub use optional::OptionalExpr;
pub use proxy::Proxy;
pub use sequence::{
    IteratorExpr, IteratorValue, RangeExpr, RangeValue, SequenceExpr, SequenceKind,
};
pub use stack::ensure_sufficient_stack;
pub use tracing_setup::init_tracing;

// Re-export descriptor types so hosts need a single dependency.
pub use proxy_types::{
    Check, DescriptorKind, ProxyKind, TypeDescriptor, TypeMismatch, TypeNames,
    TypeNamesBuilder,
};
