//! Lazy sequences and the expressions that produce them.
//!
//! Two payload shapes are supported:
//!
//! - [`RangeValue`]: finite and random-access. Elements are computed on
//!   demand from an index function.
//! - [`IteratorValue`]: forward-only and restartable. Every call to
//!   [`IteratorValue::iter`] starts a fresh pass.
//!
//! Both share their producer behind an `Arc`, so cloning a sequence never
//! copies elements. A range narrows into an iterator; there is no way back.

use std::fmt;
use std::sync::Arc;

use proxy_types::{ProxyKind, TypeDescriptor};

use crate::expr::Expr;

type IndexFn<T> = dyn Fn(usize) -> T + Send + Sync;
type ProduceFn<T> = dyn Fn() -> Box<dyn Iterator<Item = T> + Send> + Send + Sync;

// RangeValue

/// A lazy, random-access sequence of known length.
pub struct RangeValue<T> {
    len: usize,
    at: Arc<IndexFn<T>>,
}

impl<T: 'static> RangeValue<T> {
    /// A range whose element `i` is `at(i)` for `i < len`.
    pub fn from_fn<F>(len: usize, at: F) -> Self
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        RangeValue {
            len,
            at: Arc::new(at),
        }
    }

    /// A range over owned elements.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone + Send + Sync,
    {
        let items: Arc<[T]> = items.into();
        Self::from_fn(items.len(), move |i| items[i].clone())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        (index < self.len).then(|| (self.at)(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(|i| (self.at)(i))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// View this range as a forward-only iterator over the same elements.
    pub fn to_iterator(&self) -> IteratorValue<T> {
        let len = self.len;
        let at = Arc::clone(&self.at);
        IteratorValue::from_fn(move || {
            let at = Arc::clone(&at);
            (0..len).map(move |i| at(i))
        })
    }
}

impl<T> Clone for RangeValue<T> {
    fn clone(&self) -> Self {
        RangeValue {
            len: self.len,
            at: Arc::clone(&self.at),
        }
    }
}

impl<T: PartialEq + 'static> PartialEq for RangeValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for RangeValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + Send + Sync + 'static> FromIterator<T> for RangeValue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

// IteratorValue

/// A lazy, restartable, forward-only sequence.
pub struct IteratorValue<T> {
    produce: Arc<ProduceFn<T>>,
}

impl<T: 'static> IteratorValue<T> {
    /// An iterator whose every pass is a fresh `produce()`.
    pub fn from_fn<F, I>(produce: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        IteratorValue {
            produce: Arc::new(move || {
                Box::new(produce().into_iter()) as Box<dyn Iterator<Item = T> + Send>
            }),
        }
    }

    /// An iterator over owned elements.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone + Send + Sync,
    {
        let items: Arc<[T]> = items.into();
        Self::from_fn(move || {
            let items = Arc::clone(&items);
            let len = items.len();
            (0..len).map(move |i| items[i].clone())
        })
    }

    /// Start a new pass over the sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = T> + Send> {
        (self.produce)()
    }

    /// Lazily transform every element.
    pub fn map<U, F>(&self, f: F) -> IteratorValue<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        IteratorValue::from_fn(move || {
            let f = Arc::clone(&f);
            source.iter().map(move |item| f(item))
        })
    }

    /// Lazily keep the elements matching `predicate`.
    pub fn filter<P>(&self, predicate: P) -> IteratorValue<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = self.clone();
        let predicate = Arc::new(predicate);
        IteratorValue::from_fn(move || {
            let predicate = Arc::clone(&predicate);
            source.iter().filter(move |item| predicate(item))
        })
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Clone for IteratorValue<T> {
    fn clone(&self) -> Self {
        IteratorValue {
            produce: Arc::clone(&self.produce),
        }
    }
}

impl<T> fmt::Debug for IteratorValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IteratorValue").finish_non_exhaustive()
    }
}

impl<T: 'static> From<RangeValue<T>> for IteratorValue<T> {
    fn from(range: RangeValue<T>) -> Self {
        range.to_iterator()
    }
}

// Sequence expressions

/// An expression producing a [`RangeValue`].
pub type RangeExpr<C, T> = Expr<C, RangeValue<T>>;

/// An expression producing an [`IteratorValue`].
pub type IteratorExpr<C, T> = Expr<C, IteratorValue<T>>;

/// Which lazy sequence a [`SequenceExpr`] produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Iterator,
    Range,
}

impl From<SequenceKind> for ProxyKind {
    fn from(kind: SequenceKind) -> Self {
        match kind {
            SequenceKind::Iterator => ProxyKind::Iterator,
            SequenceKind::Range => ProxyKind::Range,
        }
    }
}

/// Capability shared by iterator and range expressions over `Item`.
///
/// Used to classify expressions, never to evaluate them.
pub trait SequenceExpr {
    type Item;

    fn sequence_kind(&self) -> SequenceKind;

    fn sequence_source(&self) -> &TypeDescriptor;
}

impl<C: 'static, T: 'static> SequenceExpr for RangeExpr<C, T> {
    type Item = T;

    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::Range
    }

    fn sequence_source(&self) -> &TypeDescriptor {
        self.source_type()
    }
}

impl<C: 'static, T: 'static> SequenceExpr for IteratorExpr<C, T> {
    type Item = T;

    fn sequence_kind(&self) -> SequenceKind {
        SequenceKind::Iterator
    }

    fn sequence_source(&self) -> &TypeDescriptor {
        self.source_type()
    }
}

impl<C: 'static, T: 'static> Expr<C, RangeValue<T>> {
    /// Narrow a range expression into an iterator expression.
    ///
    /// The source descriptor is inherited; evaluation runs the range
    /// expression and views its result as an iterator.
    pub fn narrow(&self) -> IteratorExpr<C, T> {
        self.map(|range: RangeValue<T>| range.to_iterator())
    }
}

#[cfg(test)]
mod tests;
