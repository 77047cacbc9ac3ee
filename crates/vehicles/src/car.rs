use core::any::Any;

use fleet_core::{Entity, EntityId, TypedClone, UntypedClone};

use crate::fields::{Vehicle, VehicleFields};

/// Passenger car.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    vehicle: VehicleFields,
    seats: i32,
}

impl Car {
    pub fn new(id: EntityId, name: impl Into<String>, max_speed: i32, seats: i32) -> Self {
        Self {
            vehicle: VehicleFields::new(id, name, max_speed),
            seats,
        }
    }

    /// Build a new car with every field copied from `other`.
    pub fn copy_of(other: &Car) -> Self {
        Self {
            vehicle: VehicleFields::copy_of(&other.vehicle),
            seats: other.seats,
        }
    }

    pub fn seats(&self) -> i32 {
        self.seats
    }
}

impl Entity for Car {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        self.vehicle.entity().id()
    }

    fn name(&self) -> &str {
        self.vehicle.entity().name()
    }

    fn type_name(&self) -> &'static str {
        "Car"
    }
}

impl Vehicle for Car {
    fn vehicle_fields(&self) -> &VehicleFields {
        &self.vehicle
    }
}

impl TypedClone<Car> for Car {
    fn typed_clone(&self) -> Car {
        Car::copy_of(self)
    }
}

impl UntypedClone for Car {
    fn clone_untyped(&self) -> Box<dyn Any> {
        Box::new(self.typed_clone())
    }
}

impl core::fmt::Display for Car {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({}, Seats={})", self.type_name(), self.vehicle, self.seats)
    }
}
