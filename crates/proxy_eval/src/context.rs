//! Erased contexts for hosts that only know types at runtime.
//!
//! A binding layer cannot name every context type statically, so it
//! evaluates `Expr<AnyContext, T>`. Leaves that read the context are built
//! with [`Expr::for_context`], which records the concrete type they need
//! and downcasts on every evaluation. Combinators then compare those
//! descriptors at construction time exactly as they do for typed contexts.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use proxy_types::{TypeDescriptor, TypeMismatch};

use crate::errors::{EvalError, EvalResult};
use crate::expr::Expr;

/// A cheaply clonable, type-erased context value.
#[derive(Clone)]
pub struct AnyContext {
    value: Arc<dyn Any + Send + Sync>,
    descriptor: TypeDescriptor,
}

impl AnyContext {
    /// Erase `value`. Wrapping an `AnyContext` yields it back unchanged.
    pub fn new<C: Any + Send + Sync>(value: C) -> Self {
        if let Some(ctx) = (&value as &dyn Any).downcast_ref::<AnyContext>() {
            return ctx.clone();
        }
        AnyContext {
            value: Arc::new(value),
            descriptor: TypeDescriptor::of::<C>(),
        }
    }

    /// Descriptor of the value held.
    #[inline]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn is<C: Any>(&self) -> bool {
        (*self.value).is::<C>()
    }

    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        (*self.value).downcast_ref::<C>()
    }

    /// Reinterpret the context as `C`, failing loudly on mismatch.
    pub fn cast<C: Any>(&self) -> EvalResult<&C> {
        self.downcast_ref::<C>()
            .ok_or_else(|| EvalError::ContextCast {
                expected: TypeDescriptor::of::<C>(),
                found: self.descriptor,
            })
    }
}

impl fmt::Debug for AnyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyContext({})", self.descriptor)
    }
}

impl<T: 'static> Expr<AnyContext, T> {
    /// A leaf reading an erased context that must hold an `S`.
    ///
    /// The source descriptor is `S`'s, so combinators reject mixing it with
    /// leaves that read a different type.
    pub fn for_context<S, F>(eval: F) -> Self
    where
        S: Any,
        F: Fn(&S) -> EvalResult<T> + Send + Sync + 'static,
    {
        Expr::with_source(TypeDescriptor::of::<S>(), move |ctx: &AnyContext| {
            eval(ctx.cast::<S>()?)
        })
    }
}

/// [`while_loop`](crate::while_loop) over an erased context.
///
/// Each pass erases the body's result and hands it to the condition as the
/// next context. On exit the final state is reinterpreted as `T`; the
/// accept check at construction makes a failure there a broken invariant,
/// reported as [`EvalError::ContractViolation`].
#[tracing::instrument(level = "trace", skip_all, fields(
    condition = %condition.source_type(),
    body = %body.source_type(),
))]
pub fn while_loop_any<T>(
    condition: &Expr<AnyContext, bool>,
    body: &Expr<AnyContext, T>,
) -> Result<Expr<AnyContext, T>, TypeMismatch>
where
    T: Clone + Send + Sync + 'static,
{
    let required = *condition.source_type();
    required.check_match(body.source_type())?;
    required.check_accept(&TypeDescriptor::of::<T>())?;

    let condition = condition.clone();
    let body = body.clone();
    Ok(Expr::with_source(required, move |ctx: &AnyContext| {
        let mut state = ctx.clone();
        let mut passes: u64 = 0;
        while condition.evaluate(&state)? {
            state = AnyContext::new(body.evaluate(&state)?);
            passes = passes.saturating_add(1);
        }
        tracing::trace!(passes, "while loop exited");
        finish_loop(&state)
    }))
}

fn finish_loop<T: Clone + 'static>(state: &AnyContext) -> EvalResult<T> {
    // `AnyContext::new` flattens nested contexts, so an erased result type
    // is the state itself rather than its payload.
    if let Some(value) = (state as &dyn Any).downcast_ref::<T>() {
        return Ok(value.clone());
    }
    match state.downcast_ref::<T>() {
        Some(value) => Ok(value.clone()),
        None => {
            let expected = TypeDescriptor::of::<T>();
            tracing::error!(
                %expected,
                found = %state.descriptor(),
                "while loop state cannot be read back as its result type"
            );
            Err(EvalError::ContractViolation {
                operation: "while_loop",
                expected,
                found: *state.descriptor(),
            })
        }
    }
}
