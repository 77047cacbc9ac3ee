use core::any::Any;
use core::fmt::Display;

use fleet_core::{DomainResult, Entity, EntityId, TypedClone, UntypedClone, downcast_clone};
use fleet_vehicles::{Car, Truck};

/// Closing summary of what each contract buys and costs.
pub const TRADEOFFS: [&str; 4] = [
    "TypedClone<T> advantages: type-safe return T, no downcast, clear contract.",
    "TypedClone<T> disadvantages: not standard, generic code won't look for it.",
    "UntypedClone advantages: familiar Box<dyn Any> shape, usable as a trait object.",
    "UntypedClone disadvantages: returns Box<dyn Any>, requires a downcast; unclear shallow/deep contract.",
];

pub fn sample_car() -> Car {
    Car::new(EntityId::new(), "Coupe", 240, 4)
}

pub fn sample_truck() -> Truck {
    Truck::new(EntityId::new(), "Hauler", 140, 12000)
}

/// An original together with one clone from each contract.
#[derive(Debug)]
pub struct CloneReport<T> {
    original: T,
    typed: T,
    untyped: T,
}

impl<T> CloneReport<T>
where
    T: Entity<Id = EntityId> + TypedClone<T> + UntypedClone + Display + Any,
{
    pub fn capture(original: T) -> DomainResult<Self> {
        let typed = original.typed_clone();
        let untyped: T = downcast_clone(&original)?;

        tracing::debug!(
            entity = original.type_name(),
            id = %original.id(),
            "cloned through typed and untyped contracts"
        );

        Ok(Self {
            original,
            typed,
            untyped,
        })
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn typed(&self) -> &T {
        &self.typed
    }

    pub fn untyped(&self) -> &T {
        &self.untyped
    }

    /// Whether the typed clone is the original instance.
    ///
    /// Always false: the report owns the original and each clone as separate
    /// values, so they can never share an address.
    pub fn same_instance_typed(&self) -> bool {
        core::ptr::eq(&self.original, &self.typed)
    }

    /// Same as [`Self::same_instance_typed`], for the untyped clone.
    pub fn same_instance_untyped(&self) -> bool {
        core::ptr::eq(&self.original, &self.untyped)
    }

    /// Output block for this report, ending with a blank separator line.
    pub fn lines(&self) -> Vec<String> {
        let label = self.original.type_name();
        vec![
            format!("{label} Original:     {}", self.original),
            format!("{label} TypedClone:   {}", self.typed),
            format!("{label} UntypedClone: {}", self.untyped),
            format!("Same instance typed:   {}", self.same_instance_typed()),
            format!("Same instance untyped: {}", self.same_instance_untyped()),
            String::new(),
        ]
    }
}

/// Full demo output: car block, truck block, then the tradeoff summary.
pub fn render() -> DomainResult<Vec<String>> {
    let mut lines = CloneReport::capture(sample_car())?.lines();
    lines.extend(CloneReport::capture(sample_truck())?.lines());
    lines.extend(TRADEOFFS.iter().map(|line| line.to_string()));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_never_reports_same_instance() {
        let report = CloneReport::capture(sample_car()).unwrap();
        assert!(!report.same_instance_typed());
        assert!(!report.same_instance_untyped());
    }

    #[test]
    fn clones_match_original() {
        let report = CloneReport::capture(sample_truck()).unwrap();
        assert_eq!(report.typed(), report.original());
        assert_eq!(report.untyped(), report.original());
    }

    #[test]
    fn lines_label_with_type_name() {
        let car = sample_car();
        let expected = car.to_string();
        let lines = CloneReport::capture(car).unwrap().lines();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], format!("Car Original:     {expected}"));
        assert_eq!(lines[1], format!("Car TypedClone:   {expected}"));
        assert_eq!(lines[2], format!("Car UntypedClone: {expected}"));
        assert_eq!(lines[3], "Same instance typed:   false");
        assert_eq!(lines[4], "Same instance untyped: false");
        assert!(lines[5].is_empty());
    }

    #[test]
    fn samples_get_fresh_ids() {
        assert_ne!(sample_car().id(), sample_car().id());
    }
}
