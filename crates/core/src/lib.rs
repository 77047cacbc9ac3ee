//! `fleet-core` — domain foundation building blocks.
//!
//! Identifiers, the `Entity` trait, the error model and the two clone contracts.
//! No IO lives here.

pub mod clone;
pub mod entity;
pub mod error;
pub mod id;

pub use clone::{TypedClone, UntypedClone, downcast_clone};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
