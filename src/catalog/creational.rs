//! # Creational Patterns / 创建型模式
//!
//! Factory, abstract factory, builder, prototype and singleton.
//!
//! 工厂、抽象工厂、建造者、原型和单例模式。

use anyhow::{Result, bail, ensure};

/// Vehicles the factory knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vehicle {
    TwoWheeler,
    FourWheeler,
}

impl Vehicle {
    fn describe(self) -> &'static str {
        match self {
            Vehicle::TwoWheeler => "I am two wheeler",
            Vehicle::FourWheeler => "I am four wheeler",
        }
    }
}

struct VehicleFactory;

impl VehicleFactory {
    fn create(wheels: u8) -> Result<Vehicle> {
        match wheels {
            2 => Ok(Vehicle::TwoWheeler),
            4 => Ok(Vehicle::FourWheeler),
            other => bail!("no vehicle with {other} wheels"),
        }
    }
}

pub fn factory() -> Result<Vec<String>> {
    [2, 4]
        .into_iter()
        .map(|wheels| Ok(VehicleFactory::create(wheels)?.describe().to_string()))
        .collect()
}

trait VehicleFamily {
    fn name(&self) -> &'static str;
    fn car(&self) -> &'static str;
    fn bike(&self) -> &'static str;
}

struct EconomyFamily;
struct LuxuryFamily;

impl VehicleFamily for EconomyFamily {
    fn name(&self) -> &'static str {
        "Economy"
    }
    fn car(&self) -> &'static str {
        "Hatchback"
    }
    fn bike(&self) -> &'static str {
        "Scooter"
    }
}

impl VehicleFamily for LuxuryFamily {
    fn name(&self) -> &'static str {
        "Luxury"
    }
    fn car(&self) -> &'static str {
        "Sedan"
    }
    fn bike(&self) -> &'static str {
        "Cruiser"
    }
}

pub fn abstract_factory() -> Result<Vec<String>> {
    let families: [&dyn VehicleFamily; 2] = [&EconomyFamily, &LuxuryFamily];
    Ok(families
        .iter()
        .flat_map(|family| {
            [
                format!("{} factory built a {} car", family.name(), family.car()),
                format!("{} factory built a {} bike", family.name(), family.bike()),
            ]
        })
        .collect())
}

#[derive(Debug)]
struct BuiltVehicle {
    color: String,
    wheels: u8,
    engine: String,
}

#[derive(Debug, Default)]
struct VehicleBuilder {
    color: Option<String>,
    wheels: Option<u8>,
    engine: Option<String>,
}

impl VehicleBuilder {
    fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    fn wheels(mut self, wheels: u8) -> Self {
        self.wheels = Some(wheels);
        self
    }

    fn engine(mut self, engine: &str) -> Self {
        self.engine = Some(engine.to_string());
        self
    }

    fn build(self) -> Result<BuiltVehicle> {
        let Some(wheels) = self.wheels else {
            bail!("a vehicle needs wheels");
        };
        Ok(BuiltVehicle {
            color: self.color.unwrap_or_else(|| "White".to_string()),
            wheels,
            engine: self.engine.unwrap_or_else(|| "Electric".to_string()),
        })
    }
}

pub fn builder() -> Result<Vec<String>> {
    let mut out = Vec::new();

    let car = VehicleBuilder::default().color("Blue").wheels(4).engine("V6").build()?;
    let bike = VehicleBuilder::default().wheels(2).build()?;
    for vehicle in [car, bike] {
        out.push(format!(
            "Built a {} vehicle with {} wheels and a {} engine",
            vehicle.color, vehicle.wheels, vehicle.engine
        ));
    }

    if let Err(e) = VehicleBuilder::default().color("Green").build() {
        out.push(format!("Builder refused: {e}"));
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CarPrototype {
    model: String,
    color: String,
    doors: u8,
}

pub fn prototype() -> Result<Vec<String>> {
    let original = CarPrototype {
        model: "Sedan".to_string(),
        color: "Red".to_string(),
        doors: 4,
    };

    let mut copy = original.clone();
    copy.color = "Blue".to_string();
    ensure!(copy.doors == original.doors, "clone lost its doors");

    Ok(vec![
        format!("Prototype: {} {} with {} doors", original.color, original.model, original.doors),
        format!("Clone: {} {} with {} doors", copy.color, copy.model, copy.doors),
        format!("Prototype is still {}", original.color),
    ])
}

/// The one vehicle of the program. Constructed once by the caller and lent
/// out by reference instead of living in a global.
struct SoleVehicle {
    color: &'static str,
}

struct Driver<'a> {
    vehicle: &'a SoleVehicle,
}

pub fn singleton() -> Result<Vec<String>> {
    let vehicle = SoleVehicle { color: "Red" };
    let first = Driver { vehicle: &vehicle };
    let second = Driver { vehicle: &vehicle };

    ensure!(
        std::ptr::eq(first.vehicle, second.vehicle),
        "drivers received different vehicles"
    );

    Ok(vec![
        format!("This is a {} vehicle", first.vehicle.color),
        format!("This is still a {} vehicle", second.vehicle.color),
    ])
}
