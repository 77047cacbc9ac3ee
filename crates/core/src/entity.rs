//! Entity trait: identity + a human-readable name.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the entity name.
    fn name(&self) -> &str;

    /// Name of the concrete type, as used in the display format.
    fn type_name(&self) -> &'static str;
}
