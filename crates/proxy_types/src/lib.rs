//! Proxy Types - runtime type descriptors for lazy proxy expressions.
//!
//! Every expression records the context type it requires as a
//! [`TypeDescriptor`]. Combinators compare descriptors once, when they build
//! a new expression, so evaluation never has to re-check compatibility.
//!
//! # Matching rules
//!
//! - A `Simple` descriptor is context-independent and matches anything.
//! - Two `Concrete` descriptors match iff they name the same type.
//! - Loop state is accepted only when the condition's descriptor names
//!   exactly the type the loop body produces.
//!
//! The crate also carries [`TypeNames`], the registry hosts use to name the
//! proxy classes they expose for each payload type.

mod descriptor;
mod error;
mod names;

pub use descriptor::{DescriptorKind, TypeDescriptor};
pub use error::{Check, TypeMismatch};
pub use names::{short_type_name, ProxyKind, TypeNames, TypeNamesBuilder};
