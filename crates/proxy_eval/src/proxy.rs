//! The closed set of expression specializations for one payload type.
//!
//! A binding layer registers four proxy classes per payload `T`: scalar,
//! optional, iterator and range. [`Proxy`] holds any one of them behind a
//! single type, tagged by [`ProxyKind`].

use proxy_types::{ProxyKind, TypeDescriptor};

use crate::expr::Expr;
use crate::optional::OptionalExpr;
use crate::sequence::{IteratorExpr, RangeExpr, SequenceExpr};

/// One of the four specializations over payload `T`.
#[derive(Clone, Debug)]
pub enum Proxy<C, T> {
    Scalar(Expr<C, T>),
    Optional(OptionalExpr<C, T>),
    Iterator(IteratorExpr<C, T>),
    Range(RangeExpr<C, T>),
}

impl<C: 'static, T: 'static> Proxy<C, T> {
    pub fn kind(&self) -> ProxyKind {
        match self {
            Proxy::Scalar(_) => ProxyKind::Scalar,
            Proxy::Optional(_) => ProxyKind::Optional,
            Proxy::Iterator(_) => ProxyKind::Iterator,
            Proxy::Range(_) => ProxyKind::Range,
        }
    }

    /// The context type the wrapped expression requires.
    pub fn source_type(&self) -> &TypeDescriptor {
        match self {
            Proxy::Scalar(expr) => expr.source_type(),
            Proxy::Optional(expr) => expr.source_type(),
            Proxy::Iterator(expr) => expr.source_type(),
            Proxy::Range(expr) => expr.source_type(),
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.kind().is_sequence()
    }

    /// The sequence capability, for iterator and range proxies only.
    pub fn as_sequence(&self) -> Option<&dyn SequenceExpr<Item = T>> {
        match self {
            Proxy::Iterator(expr) => Some(expr as &dyn SequenceExpr<Item = T>),
            Proxy::Range(expr) => Some(expr as &dyn SequenceExpr<Item = T>),
            Proxy::Scalar(_) | Proxy::Optional(_) => None,
        }
    }
}
