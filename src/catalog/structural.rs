//! # Structural Patterns / 结构型模式
//!
//! Adapter, bridge, composite, decorator, facade, flyweight and proxy.
//!
//! 适配器、桥接、组合、装饰器、外观、享元和代理模式。

use anyhow::{Result, ensure};
use std::collections::BTreeMap;
use std::sync::Arc;

trait Refuel {
    fn refuel(&mut self, litres: u32) -> String;
}

struct PetrolCar {
    tank: u32,
}

impl Refuel for PetrolCar {
    fn refuel(&mut self, litres: u32) -> String {
        self.tank += litres;
        format!("Petrol car refuelled with {litres} litres, tank at {}", self.tank)
    }
}

/// Electric cars charge in kWh; they know nothing about litres.
struct ElectricCar {
    battery_kwh: u32,
}

impl ElectricCar {
    fn charge(&mut self, kwh: u32) -> u32 {
        self.battery_kwh += kwh;
        self.battery_kwh
    }
}

struct ChargingAdapter<'a> {
    car: &'a mut ElectricCar,
}

impl Refuel for ChargingAdapter<'_> {
    fn refuel(&mut self, litres: u32) -> String {
        // 1 litre of petrol ~ 9 kWh
        let kwh = litres * 9;
        let level = self.car.charge(kwh);
        format!("Electric car charged with {kwh} kWh for a {litres} litre request, battery at {level}")
    }
}

pub fn adapter() -> Result<Vec<String>> {
    let mut petrol = PetrolCar { tank: 10 };
    let mut electric = ElectricCar { battery_kwh: 20 };
    let mut charger = ChargingAdapter { car: &mut electric };

    let pumps: [&mut dyn Refuel; 2] = [&mut petrol, &mut charger];
    Ok(pumps.into_iter().map(|pump| pump.refuel(5)).collect())
}

trait Workshop {
    fn work(&self, vehicle: &str) -> String;
}

struct Produce;
struct Assemble;

impl Workshop for Produce {
    fn work(&self, vehicle: &str) -> String {
        format!("{vehicle} produced")
    }
}

impl Workshop for Assemble {
    fn work(&self, vehicle: &str) -> String {
        format!("{vehicle} assembled")
    }
}

/// Abstraction side of the bridge: any vehicle paired with any workshops.
struct Manufacturing<'a> {
    vehicle: &'static str,
    workshops: Vec<&'a dyn Workshop>,
}

impl Manufacturing<'_> {
    fn manufacture(&self) -> Vec<String> {
        self.workshops.iter().map(|w| w.work(self.vehicle)).collect()
    }
}

pub fn bridge() -> Result<Vec<String>> {
    let workshops: [&dyn Workshop; 2] = [&Produce, &Assemble];
    let lines = ["Car", "Bike"]
        .into_iter()
        .flat_map(|vehicle| {
            Manufacturing {
                vehicle,
                workshops: workshops.to_vec(),
            }
            .manufacture()
        })
        .collect();
    Ok(lines)
}

enum Part {
    Component { name: &'static str, price: u32 },
    Assembly { name: &'static str, parts: Vec<Part> },
}

impl Part {
    fn price(&self) -> u32 {
        match self {
            Part::Component { price, .. } => *price,
            Part::Assembly { parts, .. } => parts.iter().map(Part::price).sum(),
        }
    }

    fn describe(&self, depth: usize, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            Part::Component { name, price } => out.push(format!("{indent}{name}: {price}")),
            Part::Assembly { name, parts } => {
                out.push(format!("{indent}{name}: {}", self.price()));
                for part in parts {
                    part.describe(depth + 1, out);
                }
            }
        }
    }
}

pub fn composite() -> Result<Vec<String>> {
    let wheel = || Part::Component {
        name: "Wheel",
        price: 100,
    };
    let car = Part::Assembly {
        name: "Car",
        parts: vec![
            Part::Component {
                name: "Engine",
                price: 2000,
            },
            Part::Assembly {
                name: "Wheel set",
                parts: vec![wheel(), wheel(), wheel(), wheel()],
            },
            Part::Component {
                name: "Body",
                price: 1500,
            },
        ],
    };

    ensure!(car.price() == 3900, "car price does not add up");
    let mut out = Vec::new();
    car.describe(0, &mut out);
    Ok(out)
}

trait Equipped {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

struct BaseCar;

impl Equipped for BaseCar {
    fn description(&self) -> String {
        "Basic car".to_string()
    }
    fn cost(&self) -> u32 {
        10_000
    }
}

struct WithExtra {
    inner: Box<dyn Equipped>,
    extra: &'static str,
    price: u32,
}

impl Equipped for WithExtra {
    fn description(&self) -> String {
        format!("{} + {}", self.inner.description(), self.extra)
    }
    fn cost(&self) -> u32 {
        self.inner.cost() + self.price
    }
}

pub fn decorator() -> Result<Vec<String>> {
    let mut car: Box<dyn Equipped> = Box::new(BaseCar);
    let mut out = vec![format!("{} costs {}", car.description(), car.cost())];

    for (extra, price) in [("air conditioning", 1_200), ("sunroof", 800)] {
        car = Box::new(WithExtra {
            inner: car,
            extra,
            price,
        });
        out.push(format!("{} costs {}", car.description(), car.cost()));
    }
    Ok(out)
}

struct Battery;
struct Ignition;
struct Dashboard;

impl Battery {
    fn power_on(&self) -> &'static str {
        "Battery powered on"
    }
}

impl Ignition {
    fn crank(&self) -> &'static str {
        "Engine cranked"
    }
}

impl Dashboard {
    fn light_up(&self) -> &'static str {
        "Dashboard lights on"
    }
}

/// One call for the driver instead of three subsystems.
struct StartButton {
    battery: Battery,
    ignition: Ignition,
    dashboard: Dashboard,
}

impl StartButton {
    fn press(&self) -> Vec<String> {
        let mut steps: Vec<String> = [
            self.battery.power_on(),
            self.ignition.crank(),
            self.dashboard.light_up(),
        ]
        .into_iter()
        .map(str::to_string)
        .collect();
        steps.push("Vehicle ready to drive".to_string());
        steps
    }
}

pub fn facade() -> Result<Vec<String>> {
    let button = StartButton {
        battery: Battery,
        ignition: Ignition,
        dashboard: Dashboard,
    };
    Ok(button.press())
}

/// Intrinsic state, shared by every vehicle of the same model.
#[derive(Debug)]
struct Model {
    name: &'static str,
    color: &'static str,
}

#[derive(Default)]
struct ModelCache {
    models: BTreeMap<(&'static str, &'static str), Arc<Model>>,
}

impl ModelCache {
    fn get(&mut self, name: &'static str, color: &'static str) -> Arc<Model> {
        self.models
            .entry((name, color))
            .or_insert_with(|| Arc::new(Model { name, color }))
            .clone()
    }
}

pub fn flyweight() -> Result<Vec<String>> {
    let mut cache = ModelCache::default();
    let placements = [
        ("Sedan", "Red", (0, 0)),
        ("Sedan", "Red", (5, 0)),
        ("Truck", "Grey", (10, 3)),
    ];

    let vehicles: Vec<(Arc<Model>, (i32, i32))> = placements
        .into_iter()
        .map(|(name, color, position)| (cache.get(name, color), position))
        .collect();

    ensure!(
        Arc::ptr_eq(&vehicles[0].0, &vehicles[1].0),
        "identical models were not shared"
    );

    let mut out: Vec<String> = vehicles
        .iter()
        .map(|(model, (x, y))| format!("Rendering {} {} at ({x}, {y})", model.color, model.name))
        .collect();
    out.push(format!(
        "{} vehicles share {} models",
        vehicles.len(),
        cache.models.len()
    ));
    Ok(out)
}

trait Drive {
    fn drive(&self) -> String;
}

struct Car;

impl Drive for Car {
    fn drive(&self) -> String {
        "Car has been driven".to_string()
    }
}

struct DriverGate<'a> {
    driver_age: u8,
    car: &'a dyn Drive,
}

impl Drive for DriverGate<'_> {
    fn drive(&self) -> String {
        if self.driver_age < 18 {
            format!("Driver aged {} is too young to drive", self.driver_age)
        } else {
            format!("{} by driver aged {}", self.car.drive(), self.driver_age)
        }
    }
}

pub fn proxy() -> Result<Vec<String>> {
    let car = Car;
    Ok([16, 25]
        .into_iter()
        .map(|driver_age| DriverGate { driver_age, car: &car }.drive())
        .collect())
}
