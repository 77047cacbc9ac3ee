//! Field groups shared by every vehicle, composed instead of inherited.
//!
//! Each group renders its own slice of the display format, so a leaf only has to
//! wrap the shared part and append its own attribute.

use fleet_core::EntityId;

/// Identity fields common to all entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityFields {
    id: EntityId,
    name: String,
}

impl EntityFields {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Field-for-field copy; the id is kept, not regenerated.
    pub fn copy_of(other: &EntityFields) -> Self {
        Self {
            id: other.id,
            name: other.name.clone(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for EntityFields {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Id={}, Name={}", self.id, self.name)
    }
}

/// Entity fields plus a maximum speed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleFields {
    entity: EntityFields,
    max_speed: i32,
}

impl VehicleFields {
    pub fn new(id: EntityId, name: impl Into<String>, max_speed: i32) -> Self {
        Self {
            entity: EntityFields::new(id, name),
            max_speed,
        }
    }

    pub fn copy_of(other: &VehicleFields) -> Self {
        Self {
            entity: EntityFields::copy_of(&other.entity),
            max_speed: other.max_speed,
        }
    }

    pub fn entity(&self) -> &EntityFields {
        &self.entity
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }
}

impl core::fmt::Display for VehicleFields {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, MaxSpeed={}", self.entity, self.max_speed)
    }
}

/// A vehicle: any entity carrying [`VehicleFields`].
pub trait Vehicle: fleet_core::Entity {
    fn vehicle_fields(&self) -> &VehicleFields;

    fn max_speed(&self) -> i32 {
        self.vehicle_fields().max_speed()
    }
}
