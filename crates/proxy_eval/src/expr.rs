//! Deferred computations over a context.
//!
//! An [`Expr<C, T>`] pairs a pure function from `&C` to `T` with the
//! [`TypeDescriptor`] of the context it reads. Expressions are immutable
//! and share their function behind an `Arc`, so cloning is cheap and the
//! same expression can be evaluated from many threads at once.

use std::fmt;
use std::sync::Arc;

use proxy_types::TypeDescriptor;

use crate::errors::EvalResult;
use crate::stack::ensure_sufficient_stack;

type EvalFn<C, T> = dyn Fn(&C) -> EvalResult<T> + Send + Sync;

/// A deferred, type-checked computation from a context `C` to a value `T`.
pub struct Expr<C, T> {
    eval: Arc<EvalFn<C, T>>,
    source: TypeDescriptor,
}

impl<C: 'static, T: 'static> Expr<C, T> {
    /// Build an expression with an explicit source descriptor.
    ///
    /// Combinators use this to attach the descriptor they computed from
    /// their operands.
    pub(crate) fn with_source<F>(source: TypeDescriptor, eval: F) -> Self
    where
        F: Fn(&C) -> EvalResult<T> + Send + Sync + 'static,
    {
        Expr {
            eval: Arc::new(eval),
            source,
        }
    }

    /// Wrap a fallible function of the context.
    pub fn new<F>(eval: F) -> Self
    where
        F: Fn(&C) -> EvalResult<T> + Send + Sync + 'static,
    {
        Self::with_source(TypeDescriptor::of::<C>(), eval)
    }

    /// Wrap an infallible function of the context.
    pub fn from_fn<F>(eval: F) -> Self
    where
        F: Fn(&C) -> T + Send + Sync + 'static,
    {
        Self::new(move |ctx| Ok(eval(ctx)))
    }

    /// A context-independent expression that always yields `value`.
    pub fn literal(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::with_source(TypeDescriptor::simple(), move |_| Ok(value.clone()))
    }

    /// Run the computation against `context`.
    pub fn evaluate(&self, context: &C) -> EvalResult<T> {
        ensure_sufficient_stack(|| (self.eval)(context))
    }

    /// The context type this expression requires.
    #[inline]
    pub fn source_type(&self) -> &TypeDescriptor {
        &self.source
    }

    /// Post-compose a pure function. The source descriptor is unchanged.
    pub fn map<U, F>(&self, f: F) -> Expr<C, U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let inner = self.clone();
        Expr::with_source(self.source, move |ctx| inner.evaluate(ctx).map(&f))
    }

    /// Post-compose a fallible function. The source descriptor is unchanged.
    pub fn try_map<U, F>(&self, f: F) -> Expr<C, U>
    where
        U: 'static,
        F: Fn(T) -> EvalResult<U> + Send + Sync + 'static,
    {
        let inner = self.clone();
        Expr::with_source(self.source, move |ctx| inner.evaluate(ctx).and_then(&f))
    }
}

impl<C, T> Clone for Expr<C, T> {
    fn clone(&self) -> Self {
        Expr {
            eval: Arc::clone(&self.eval),
            source: self.source,
        }
    }
}

impl<C, T> fmt::Debug for Expr<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
