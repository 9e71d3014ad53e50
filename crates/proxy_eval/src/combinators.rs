//! Generic combinators over expressions of any payload type.
//!
//! Both combinators check their operands' descriptors once, when they are
//! called. A failed check returns [`TypeMismatch`] before any expression is
//! built, and no operand is ever evaluated during construction.

use proxy_types::{TypeDescriptor, TypeMismatch};

use crate::expr::Expr;

/// Evaluate `condition`, then exactly one of the two branches.
///
/// The branch not taken is never evaluated. Each branch is checked against
/// the condition only, and the result carries the then-branch's descriptor.
#[tracing::instrument(level = "trace", skip_all, fields(
    condition = %condition.source_type(),
    then_branch = %then_branch.source_type(),
    else_branch = %else_branch.source_type(),
))]
pub fn conditional<C, T>(
    condition: &Expr<C, bool>,
    then_branch: &Expr<C, T>,
    else_branch: &Expr<C, T>,
) -> Result<Expr<C, T>, TypeMismatch>
where
    C: 'static,
    T: 'static,
{
    let required = condition.source_type();
    required.check_match(then_branch.source_type())?;
    required.check_match(else_branch.source_type())?;

    let source = *then_branch.source_type();

    let condition = condition.clone();
    let then_branch = then_branch.clone();
    let else_branch = else_branch.clone();
    Ok(Expr::with_source(source, move |ctx| {
        if condition.evaluate(ctx)? {
            then_branch.evaluate(ctx)
        } else {
            else_branch.evaluate(ctx)
        }
    }))
}

/// Apply `body` to the loop state for as long as `condition` holds.
///
/// The loop state starts as a copy of the context and has exactly one type,
/// `T`, for both operands. The engine does not bound the number of passes:
/// a condition that never turns false loops forever, so callers that need a
/// cap must encode it in the state and the condition.
#[tracing::instrument(level = "trace", skip_all, fields(
    condition = %condition.source_type(),
    body = %body.source_type(),
))]
pub fn while_loop<T>(
    condition: &Expr<T, bool>,
    body: &Expr<T, T>,
) -> Result<Expr<T, T>, TypeMismatch>
where
    T: Clone + 'static,
{
    let required = *condition.source_type();
    required.check_match(body.source_type())?;
    required.check_accept(&TypeDescriptor::of::<T>())?;

    let condition = condition.clone();
    let body = body.clone();
    Ok(Expr::with_source(required, move |ctx: &T| {
        let mut state = ctx.clone();
        let mut passes: u64 = 0;
        while condition.evaluate(&state)? {
            state = body.evaluate(&state)?;
            passes = passes.saturating_add(1);
        }
        tracing::trace!(passes, "while loop exited");
        Ok(state)
    }))
}
