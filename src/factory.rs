// Factory: pick a vehicle variant from a string tag.

use crate::dispatch::Capability;
use crate::error::{Error, Result};
use std::str::FromStr;
use tracing::{debug, warn};

// ============================================================================
// Contract and variants
// ============================================================================

pub trait Vehicle {
    fn name(&self) -> &str;
    fn drive(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car;

impl Vehicle for Car {
    fn name(&self) -> &str {
        "Car"
    }

    fn drive(&self) -> String {
        "Driving a car on four wheels".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bike;

impl Vehicle for Bike {
    fn name(&self) -> &str {
        "Bike"
    }

    fn drive(&self) -> String {
        "Riding a bike on two wheels".to_string()
    }
}

impl Capability for dyn Vehicle {
    type Input = ();
    type Output = String;

    fn invoke(&self, _input: ()) -> String {
        self.drive()
    }
}

// ============================================================================
// Tag selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Bike,
}

impl FromStr for VehicleKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "car" => Ok(VehicleKind::Car),
            "bike" => Ok(VehicleKind::Bike),
            other => Err(Error::unsupported_variant(other)),
        }
    }
}

pub struct VehicleFactory;

impl VehicleFactory {
    pub fn create(tag: &str) -> Result<Box<dyn Vehicle>> {
        let kind = tag.parse::<VehicleKind>().map_err(|err| {
            warn!(tag, "rejected vehicle tag");
            err
        })?;
        Ok(Self::build(kind))
    }

    pub fn build(kind: VehicleKind) -> Box<dyn Vehicle> {
        debug!(?kind, "building vehicle");
        match kind {
            VehicleKind::Car => Box::new(Car),
            VehicleKind::Bike => Box::new(Bike),
        }
    }
}

// ============================================================================
// Enum dispatch (no heap allocation)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyVehicle {
    Car(Car),
    Bike(Bike),
}

impl AnyVehicle {
    pub fn new(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Car => AnyVehicle::Car(Car),
            VehicleKind::Bike => AnyVehicle::Bike(Bike),
        }
    }
}

impl Vehicle for AnyVehicle {
    fn name(&self) -> &str {
        match self {
            AnyVehicle::Car(car) => car.name(),
            AnyVehicle::Bike(bike) => bike.name(),
        }
    }

    fn drive(&self) -> String {
        match self {
            AnyVehicle::Car(car) => car.drive(),
            AnyVehicle::Bike(bike) => bike.drive(),
        }
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo() -> Result<()> {
    for tag in ["car", "bike"] {
        let vehicle = VehicleFactory::create(tag)?;
        println!("{:>5} -> {}: {}", tag, vehicle.name(), vehicle.drive());
    }

    match VehicleFactory::create("boat") {
        Ok(vehicle) => println!(" boat -> {}", vehicle.name()),
        Err(err) => println!(" boat -> error: {err}"),
    }

    let vehicle = AnyVehicle::new(VehicleKind::Bike);
    println!("Enum-based factory: {}", vehicle.drive());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_create_car() {
        let vehicle = VehicleFactory::create("car").unwrap();
        assert_eq!(vehicle.name(), "Car");
        assert_eq!(vehicle.drive(), Car.drive());
    }

    #[test]
    fn test_create_bike() {
        let vehicle = VehicleFactory::create("bike").unwrap();
        assert_eq!(vehicle.name(), "Bike");
        assert_eq!(vehicle.drive(), Bike.drive());
    }

    #[test]
    fn test_create_unsupported() {
        let err = VehicleFactory::create("truck").err().unwrap();
        match err {
            Error::UnsupportedVariant { tag } => assert_eq!(tag, "truck"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tags_are_exact() {
        assert!(VehicleFactory::create("Car").is_err());
        assert!(VehicleFactory::create(" bike").is_err());
        assert!(VehicleFactory::create("").is_err());
    }

    #[test]
    fn test_enum_dispatch_matches_trait_objects() {
        for kind in [VehicleKind::Car, VehicleKind::Bike] {
            let boxed = VehicleFactory::build(kind);
            let unboxed = AnyVehicle::new(kind);
            assert_eq!(boxed.drive(), unboxed.drive());
            assert_eq!(boxed.name(), unboxed.name());
        }
    }

    proptest! {
        #[test]
        fn prop_unknown_tags_rejected(tag in "\\PC*") {
            prop_assume!(tag != "car" && tag != "bike");
            let is_unsupported = matches!(
                VehicleFactory::create(&tag),
                Err(Error::UnsupportedVariant { .. })
            );
            prop_assert!(is_unsupported);
        }
    }
}
