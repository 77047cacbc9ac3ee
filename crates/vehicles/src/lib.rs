//! Vehicle domain module.
//!
//! Entities are flat structs built from shared field groups; both leaves offer
//! the typed and the untyped clone contract from `fleet-core`.

pub mod car;
pub mod fields;
pub mod truck;

pub use car::Car;
pub use fields::{EntityFields, Vehicle, VehicleFields};
pub use truck::Truck;

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::Any;
    use fleet_core::{Entity, EntityId, UntypedClone};

    fn id_of<E: Entity<Id = EntityId>>(entity: &E) -> EntityId {
        *entity.id()
    }

    #[test]
    fn mixed_fleet_clones_through_trait_objects() {
        let car = Car::new(EntityId::new(), "Coupe", 240, 4);
        let truck = Truck::new(EntityId::new(), "Hauler", 140, 12000);
        let fleet: Vec<Box<dyn UntypedClone>> =
            vec![Box::new(car.clone()), Box::new(truck.clone())];

        let copies: Vec<Box<dyn Any>> = fleet.iter().map(|v| v.clone_untyped()).collect();

        assert_eq!(copies[0].downcast_ref::<Car>(), Some(&car));
        assert!(copies[0].downcast_ref::<Truck>().is_none());
        assert_eq!(copies[1].downcast_ref::<Truck>(), Some(&truck));
        assert!(copies[1].downcast_ref::<Car>().is_none());
    }

    #[test]
    fn downcast_clone_accepts_dyn_receiver() {
        let truck = Truck::new(EntityId::new(), "Hauler", 140, 12000);
        let source: &dyn UntypedClone = &truck;

        let copy: Truck = fleet_core::downcast_clone(source).unwrap();
        assert_eq!(copy, truck);
        assert!(fleet_core::downcast_clone::<Car>(source).is_err());
    }

    #[test]
    fn leaves_expose_entity_ids() {
        let id = EntityId::new();
        assert_eq!(id_of(&Car::new(id, "Coupe", 240, 4)), id);
        assert_eq!(id_of(&Truck::new(id, "Hauler", 140, 12000)), id);
    }
}
