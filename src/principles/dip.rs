//! Dependency inversion: the car is assembled from parts handed to it.

use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Action, Console, Demo};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheels {
    count: u8,
}

impl Wheels {
    pub fn new(count: u8) -> Self {
        Self { count }
    }
}

impl Action for Wheels {
    fn action(&self, console: &dyn Console) {
        console.log(&format!("{} wheels are rolling", self.count));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    kind: String,
}

impl Engine {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl Action for Engine {
    fn action(&self, console: &dyn Console) {
        console.log(&format!("{} engine is running", self.kind));
    }
}

/// Flawed: builds its own concrete parts, so swapping one means editing the car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigidCar {
    wheels: Wheels,
    engine: Engine,
}

impl RigidCar {
    pub fn new() -> Self {
        Self {
            wheels: Wheels::new(4),
            engine: Engine::new("V6"),
        }
    }

    pub fn action(&self, console: &dyn Console) {
        self.wheels.action(console);
        self.engine.action(console);
    }
}

impl Default for RigidCar {
    fn default() -> Self {
        Self::new()
    }
}

/// Improved: only knows its parts can perform an `Action`.
pub struct Car {
    wheels: Box<dyn Action>,
    engine: Box<dyn Action>,
}

impl Car {
    pub fn new(wheels: Box<dyn Action>, engine: Box<dyn Action>) -> Self {
        Self { wheels, engine }
    }

    pub fn action(&self, console: &dyn Console) {
        self.wheels.action(console);
        self.engine.action(console);
    }
}

pub struct DipDemo {
    wheel_count: u8,
    engine: String,
}

impl DipDemo {
    pub fn new(wheel_count: u8, engine: impl Into<String>) -> Self {
        Self {
            wheel_count,
            engine: engine.into(),
        }
    }
}

impl Demo for DipDemo {
    fn principle(&self) -> Principle {
        Principle::Dip
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Flawed, Variant::Improved]
    }

    fn run(&self, variant: Variant, console: &dyn Console) -> Result<()> {
        match variant {
            Variant::Flawed => RigidCar::new().action(console),
            Variant::Improved => {
                let car = Car::new(
                    Box::new(Wheels::new(self.wheel_count)),
                    Box::new(Engine::new(self.engine.clone())),
                );
                car.action(console);
            }
        }
        Ok(())
    }
}
