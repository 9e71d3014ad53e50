//! Runtime descriptors for the context type an expression requires.
//!
//! A descriptor carries two identifying slots (the `TypeId` and the
//! `type_name` of the context) plus a [`DescriptorKind`] tag. Identity
//! compares the kind and the `TypeId`; the name is only used for display.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Check, TypeMismatch};
use crate::names::short_type_name;

/// Whether a descriptor depends on the context at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// Context-independent. Matches every other descriptor.
    Simple,
    /// Requires a context of one specific type.
    Concrete,
}

/// Describes the context type an expression requires.
#[derive(Copy, Clone)]
pub struct TypeDescriptor {
    type_id: Option<TypeId>,
    type_name: Option<&'static str>,
    kind: DescriptorKind,
}

impl TypeDescriptor {
    /// The context-independent descriptor carried by literals.
    pub const fn simple() -> Self {
        TypeDescriptor {
            type_id: None,
            type_name: None,
            kind: DescriptorKind::Simple,
        }
    }

    /// Descriptor for a context of type `C`.
    pub fn of<C: ?Sized + 'static>() -> Self {
        TypeDescriptor {
            type_id: Some(TypeId::of::<C>()),
            type_name: Some(type_name::<C>()),
            kind: DescriptorKind::Concrete,
        }
    }

    #[inline]
    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        self.kind == DescriptorKind::Simple
    }

    /// The `TypeId` of the required context, `None` for `Simple`.
    #[inline]
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// The full Rust type name of the required context, `None` for `Simple`.
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// Whether this descriptor names exactly the type `C`.
    pub fn is<C: ?Sized + 'static>(&self) -> bool {
        self.type_id == Some(TypeId::of::<C>())
    }

    /// Symmetric compatibility: same concrete type, or either side `Simple`.
    pub fn matches(&self, other: &TypeDescriptor) -> bool {
        self.is_simple() || other.is_simple() || self.type_id == other.type_id
    }

    /// Check that two operands can be evaluated against the same context.
    pub fn check_match(&self, other: &TypeDescriptor) -> Result<(), TypeMismatch> {
        if self.matches(other) {
            Ok(())
        } else {
            tracing::debug!(expected = %self, found = %other, "descriptor match failed");
            Err(TypeMismatch::new(Check::Match, *self, *other))
        }
    }

    /// Whether a value described by `produced` can be fed back into an
    /// expression requiring `self`.
    ///
    /// Only type identity is accepted: a `Simple` requirement says nothing
    /// about the type of the loop state, so it is rejected.
    pub fn accepts(&self, produced: &TypeDescriptor) -> bool {
        !self.is_simple() && !produced.is_simple() && self.type_id == produced.type_id
    }

    /// Check that loop state of type `produced` stays a valid context for
    /// the next evaluation of an expression requiring `self`.
    pub fn check_accept(&self, produced: &TypeDescriptor) -> Result<(), TypeMismatch> {
        if self.accepts(produced) {
            Ok(())
        } else {
            tracing::debug!(expected = %self, found = %produced, "loop state not accepted");
            Err(TypeMismatch::new(Check::Accept, *self, *produced))
        }
    }

    /// The more specific of two matching descriptors.
    ///
    /// Callers must have run [`check_match`](Self::check_match) first; for
    /// two concrete descriptors the result is `self`.
    pub fn unify(&self, other: &TypeDescriptor) -> TypeDescriptor {
        if self.is_simple() {
            *other
        } else {
            *self
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.type_id == other.type_id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.type_id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name {
            Some(name) if !self.is_simple() => f.write_str(&short_type_name(name)),
            _ => f.write_str("simple"),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({self})")
    }
}
