//! Host-visible names for proxy classes.
//!
//! A binding layer exposes one proxy class per specialization of each
//! payload type (`IntProxy`, `OptionalIntProxy`, `IntIteratorProxy`, ...).
//! [`TypeNames`] maps payload types to the base name used in those class
//! names, falling back to the short Rust type name.

use std::any::{type_name, TypeId};
use std::borrow::Cow;
use std::fmt;

use rustc_hash::FxHashMap;

/// The closed set of expression specializations for one payload type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProxyKind {
    Scalar,
    Optional,
    Iterator,
    Range,
}

impl ProxyKind {
    /// Iterator and range proxies produce lazy sequences.
    pub fn is_sequence(self) -> bool {
        matches!(self, ProxyKind::Iterator | ProxyKind::Range)
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyKind::Scalar => write!(f, "scalar"),
            ProxyKind::Optional => write!(f, "optional"),
            ProxyKind::Iterator => write!(f, "iterator"),
            ProxyKind::Range => write!(f, "range"),
        }
    }
}

/// Strip module paths from every segment of a Rust type name.
///
/// `alloc::vec::Vec<core::option::Option<i32>>` becomes `Vec<Option<i32>>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    // Start of the path segment currently being written to `out`.
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*' => {
                out.push(ch);
                segment_start = out.len();
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Registry of host-visible payload type names.
#[derive(Clone, Debug, Default)]
pub struct TypeNames {
    names: FxHashMap<TypeId, String>,
}

impl TypeNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TypeNamesBuilder {
        TypeNamesBuilder {
            names: TypeNames::new(),
        }
    }

    /// Register the host name for `T`, returning the name it replaces.
    pub fn insert<T: ?Sized + 'static>(&mut self, name: impl Into<String>) -> Option<String> {
        self.names.insert(TypeId::of::<T>(), name.into())
    }

    /// The registered name for `T`, or its short Rust type name.
    pub fn name_of<T: ?Sized + 'static>(&self) -> Cow<'_, str> {
        match self.names.get(&TypeId::of::<T>()) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(short_type_name(type_name::<T>())),
        }
    }

    /// Class name of the `kind` proxy over payload `T`.
    pub fn proxy_name<T: ?Sized + 'static>(&self, kind: ProxyKind) -> String {
        let base = self.name_of::<T>();
        match kind {
            ProxyKind::Scalar => format!("{base}Proxy"),
            ProxyKind::Optional => format!("Optional{base}Proxy"),
            ProxyKind::Iterator => format!("{base}IteratorProxy"),
            ProxyKind::Range => format!("{base}RangeProxy"),
        }
    }

    /// Class name of the sequence capability shared by the iterator and
    /// range proxies over payload `T`.
    pub fn sequence_proxy_name<T: ?Sized + 'static>(&self) -> String {
        format!("{}SequenceProxy", self.name_of::<T>())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builder for a [`TypeNames`] registry.
pub struct TypeNamesBuilder {
    names: TypeNames,
}

impl TypeNamesBuilder {
    /// Register the host name for `T`. Later registrations win.
    #[must_use]
    pub fn name<T: ?Sized + 'static>(mut self, name: impl Into<String>) -> Self {
        self.names.insert::<T>(name);
        self
    }

    pub fn build(self) -> TypeNames {
        self.names
    }
}
