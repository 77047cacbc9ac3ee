//! The two clone contracts a leaf entity can offer.
//!
//! - [`TypedClone`] returns the receiver's own concrete type. No casts, but it is
//!   a bespoke interface that generic code will not look for.
//! - [`UntypedClone`] returns an opaque `Box<dyn Any>`. It is object-safe and has
//!   the familiar "clone into a box" shape, but the static type is gone and the
//!   caller has to downcast (see [`downcast_clone`]). Whether the copy is shallow
//!   or deep is left to each implementor.
//!
//! Both are pure: they allocate a new value and never touch the receiver.

use core::any::Any;

use crate::error::{DomainError, DomainResult};

/// Clone whose result is statically typed as `T` (normally `Self`).
pub trait TypedClone<T> {
    fn typed_clone(&self) -> T;
}

/// Clone whose result is an opaque handle.
pub trait UntypedClone {
    fn clone_untyped(&self) -> Box<dyn Any>;
}

/// Untyped-clone `source` and downcast the result to `T`.
///
/// Fails with [`DomainError::TypeMismatch`] when `source` does not clone into a `T`.
pub fn downcast_clone<T: Any>(source: &dyn UntypedClone) -> DomainResult<T> {
    source
        .clone_untyped()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| DomainError::type_mismatch::<T>())
}
