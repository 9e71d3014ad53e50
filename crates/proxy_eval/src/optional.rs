//! Optional expressions.
//!
//! Widening is one-directional and always explicit: a plain expression or a
//! literal becomes an optional expression through [`Expr::optional`] or
//! [`Expr::present`]; nothing converts back.

use crate::expr::Expr;

/// An expression producing an optional value.
pub type OptionalExpr<C, T> = Expr<C, Option<T>>;

impl<C: 'static, T: 'static> Expr<C, T> {
    /// Widen to an optional expression whose result is always `Some`.
    ///
    /// The source descriptor is inherited.
    pub fn optional(&self) -> OptionalExpr<C, T> {
        self.map(Some)
    }
}

impl<C: 'static, T: Clone + Send + Sync + 'static> Expr<C, Option<T>> {
    /// A context-independent optional expression that always yields
    /// `Some(value)`.
    pub fn present(value: T) -> Self {
        Expr::literal(Some(value))
    }
}
