use core::any::Any;

use fleet_core::{Entity, EntityId, TypedClone, UntypedClone};

use crate::fields::{Vehicle, VehicleFields};

/// Cargo truck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Truck {
    vehicle: VehicleFields,
    capacity_kg: i32,
}

impl Truck {
    pub fn new(id: EntityId, name: impl Into<String>, max_speed: i32, capacity_kg: i32) -> Self {
        Self {
            vehicle: VehicleFields::new(id, name, max_speed),
            capacity_kg,
        }
    }

    /// Build a new truck with every field copied from `other`.
    pub fn copy_of(other: &Truck) -> Self {
        Self {
            vehicle: VehicleFields::copy_of(&other.vehicle),
            capacity_kg: other.capacity_kg,
        }
    }

    pub fn capacity_kg(&self) -> i32 {
        self.capacity_kg
    }
}

impl Entity for Truck {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        self.vehicle.entity().id()
    }

    fn name(&self) -> &str {
        self.vehicle.entity().name()
    }

    fn type_name(&self) -> &'static str {
        "Truck"
    }
}

impl Vehicle for Truck {
    fn vehicle_fields(&self) -> &VehicleFields {
        &self.vehicle
    }
}

impl TypedClone<Truck> for Truck {
    fn typed_clone(&self) -> Truck {
        Truck::copy_of(self)
    }
}

impl UntypedClone for Truck {
    fn clone_untyped(&self) -> Box<dyn Any> {
        Box::new(self.typed_clone())
    }
}

impl core::fmt::Display for Truck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}({}, CapacityKg={})",
            self.type_name(),
            self.vehicle,
            self.capacity_kg
        )
    }
}
