//! # Behavioral Patterns / 行为型模式
//!
//! Chain of responsibility, command, interpreter, iterator, mediator, memento,
//! observer, state, strategy, template method and visitor, told with vehicles.
//!
//! 以车辆为主题的责任链、命令、解释器、迭代器、中介者、备忘录、
//! 观察者、状态、策略、模板方法和访问者模式。

use anyhow::{Result, anyhow, bail, ensure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceRequest {
    Wash,
    EngineRepair,
    Inspection,
    Paint,
}

impl ServiceRequest {
    fn label(self) -> &'static str {
        match self {
            ServiceRequest::Wash => "wash",
            ServiceRequest::EngineRepair => "engine repair",
            ServiceRequest::Inspection => "safety inspection",
            ServiceRequest::Paint => "paint job",
        }
    }
}

/// A link in the service chain. Each handler either takes the request or
/// passes it on to the next one.
struct ServiceDesk {
    staff: &'static str,
    handles: ServiceRequest,
    next: Option<Box<ServiceDesk>>,
}

impl ServiceDesk {
    fn new(staff: &'static str, handles: ServiceRequest) -> Self {
        Self {
            staff,
            handles,
            next: None,
        }
    }

    fn then(mut self, next: ServiceDesk) -> Self {
        self.next = Some(Box::new(match self.next.take() {
            Some(existing) => (*existing).then(next),
            None => next,
        }));
        self
    }

    fn handle(&self, request: ServiceRequest) -> String {
        if request == self.handles {
            format!("{} handled the {}", self.staff, request.label())
        } else if let Some(next) = &self.next {
            next.handle(request)
        } else {
            format!("Nobody could handle the {}", request.label())
        }
    }
}

pub fn chain_of_responsibility() -> Result<Vec<String>> {
    let chain = ServiceDesk::new("Washer", ServiceRequest::Wash)
        .then(ServiceDesk::new("Mechanic", ServiceRequest::EngineRepair))
        .then(ServiceDesk::new("Inspector", ServiceRequest::Inspection));

    Ok([
        ServiceRequest::Wash,
        ServiceRequest::EngineRepair,
        ServiceRequest::Inspection,
        ServiceRequest::Paint,
    ]
    .into_iter()
    .map(|request| chain.handle(request))
    .collect())
}

#[derive(Debug, Default)]
struct Car {
    engine_on: bool,
    lights_on: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    StartEngine,
    StopEngine,
    LightsOn,
}

impl Command {
    fn execute(self, car: &mut Car) -> &'static str {
        match self {
            Command::StartEngine => {
                car.engine_on = true;
                "Engine started"
            }
            Command::StopEngine => {
                car.engine_on = false;
                "Engine stopped"
            }
            Command::LightsOn => {
                car.lights_on = true;
                "Lights switched on"
            }
        }
    }

    fn undo(self, car: &mut Car) -> &'static str {
        match self {
            Command::StartEngine => Command::StopEngine.execute(car),
            Command::StopEngine => Command::StartEngine.execute(car),
            Command::LightsOn => {
                car.lights_on = false;
                "Lights switched off"
            }
        }
    }
}

#[derive(Default)]
struct RemoteKey {
    history: Vec<Command>,
}

impl RemoteKey {
    fn press(&mut self, command: Command, car: &mut Car) -> String {
        self.history.push(command);
        format!("Remote: {}", command.execute(car))
    }

    fn undo(&mut self, car: &mut Car) -> String {
        match self.history.pop() {
            Some(command) => format!("Undo: {}", command.undo(car)),
            None => "Undo: nothing to undo".to_string(),
        }
    }
}

pub fn command() -> Result<Vec<String>> {
    let mut car = Car::default();
    let mut key = RemoteKey::default();

    let out = vec![
        key.press(Command::StartEngine, &mut car),
        key.press(Command::LightsOn, &mut car),
        key.undo(&mut car),
        key.undo(&mut car),
        key.undo(&mut car),
    ];
    ensure!(!car.engine_on && !car.lights_on, "undo left the car running");
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Instruction {
    Accelerate(u32),
    Brake(u32),
}

fn parse_program(program: &str) -> Result<Vec<Instruction>> {
    let mut tokens = program.split_whitespace();
    let mut instructions = Vec::new();

    while let Some(word) = tokens.next() {
        let amount: u32 = tokens
            .next()
            .ok_or_else(|| anyhow!("'{word}' needs an amount"))?
            .parse()
            .map_err(|_| anyhow!("'{word}' needs a numeric amount"))?;
        instructions.push(match word {
            "accelerate" => Instruction::Accelerate(amount),
            "brake" => Instruction::Brake(amount),
            other => bail!("unknown instruction '{other}'"),
        });
    }
    Ok(instructions)
}

fn interpret(instructions: &[Instruction]) -> u32 {
    instructions.iter().fold(0, |speed, instruction| match instruction {
        Instruction::Accelerate(amount) => speed + amount,
        Instruction::Brake(amount) => speed.saturating_sub(*amount),
    })
}

pub fn interpreter() -> Result<Vec<String>> {
    let programs = [
        "accelerate 30 brake 10 accelerate 5",
        "accelerate 20 brake 50",
        "reverse 5",
    ];

    Ok(programs
        .into_iter()
        .map(|program| match parse_program(program) {
            Ok(instructions) => {
                format!("Program '{program}' ends at {} km/h", interpret(&instructions))
            }
            Err(e) => format!("Program '{program}' rejected: {e}"),
        })
        .collect())
}

struct Fleet {
    vehicles: Vec<(&'static str, bool)>,
}

/// Walks the fleet, skipping vehicles that are in the workshop.
struct AvailableVehicles<'a> {
    fleet: &'a Fleet,
    position: usize,
}

impl<'a> Iterator for AvailableVehicles<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(name, available)) = self.fleet.vehicles.get(self.position) {
            self.position += 1;
            if available {
                return Some(name);
            }
        }
        None
    }
}

impl Fleet {
    fn available(&self) -> AvailableVehicles<'_> {
        AvailableVehicles {
            fleet: self,
            position: 0,
        }
    }
}

pub fn iterator() -> Result<Vec<String>> {
    let fleet = Fleet {
        vehicles: vec![("Bus", true), ("Van", false), ("Taxi", true), ("Truck", true)],
    };

    let mut out: Vec<String> = fleet
        .available()
        .enumerate()
        .map(|(i, name)| format!("Available vehicle {}: {name}", i + 1))
        .collect();
    out.push(format!("{} of {} vehicles available", fleet.available().count(), fleet.vehicles.len()));
    Ok(out)
}

/// Vehicles never talk to each other; they ask the controller.
#[derive(Default)]
struct IntersectionControl {
    occupied_by: Option<&'static str>,
}

impl IntersectionControl {
    fn request_crossing(&mut self, vehicle: &'static str) -> String {
        match self.occupied_by {
            Some(current) => format!("{vehicle} waits while {current} crosses"),
            None => {
                self.occupied_by = Some(vehicle);
                format!("{vehicle} is cleared to cross")
            }
        }
    }

    fn leave(&mut self, vehicle: &'static str) -> String {
        if self.occupied_by == Some(vehicle) {
            self.occupied_by = None;
        }
        format!("{vehicle} has left the intersection")
    }
}

pub fn mediator() -> Result<Vec<String>> {
    let mut control = IntersectionControl::default();
    Ok(vec![
        control.request_crossing("Ambulance"),
        control.request_crossing("Truck"),
        control.leave("Ambulance"),
        control.request_crossing("Truck"),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SeatSettings {
    height: u8,
    recline: u8,
}

/// Snapshot the seat hands out; only the seat can read it back.
struct SeatMemento(SeatSettings);

struct DriverSeat {
    settings: SeatSettings,
}

impl DriverSeat {
    fn save(&self) -> SeatMemento {
        SeatMemento(self.settings.clone())
    }

    fn restore(&mut self, memento: &SeatMemento) {
        self.settings = memento.0.clone();
    }

    fn describe(&self) -> String {
        format!(
            "Seat height {} recline {}",
            self.settings.height, self.settings.recline
        )
    }
}

pub fn memento() -> Result<Vec<String>> {
    let mut seat = DriverSeat {
        settings: SeatSettings {
            height: 3,
            recline: 10,
        },
    };
    let mut out = vec![format!("Saved: {}", seat.describe())];
    let saved = seat.save();

    seat.settings = SeatSettings {
        height: 7,
        recline: 25,
    };
    out.push(format!("Changed: {}", seat.describe()));

    seat.restore(&saved);
    out.push(format!("Restored: {}", seat.describe()));
    Ok(out)
}

trait SpeedObserver {
    fn on_speed(&self, speed: u32, out: &mut Vec<String>);
}

struct Speedometer;
struct OverspeedAlarm {
    limit: u32,
}

impl SpeedObserver for Speedometer {
    fn on_speed(&self, speed: u32, out: &mut Vec<String>) {
        out.push(format!("Speedometer shows {speed} km/h"));
    }
}

impl SpeedObserver for OverspeedAlarm {
    fn on_speed(&self, speed: u32, out: &mut Vec<String>) {
        if speed > self.limit {
            out.push(format!("Alarm: {speed} km/h exceeds the {} km/h limit", self.limit));
        }
    }
}

#[derive(Default)]
struct SpeedSensor<'a> {
    observers: Vec<&'a dyn SpeedObserver>,
}

impl<'a> SpeedSensor<'a> {
    fn subscribe(&mut self, observer: &'a dyn SpeedObserver) {
        self.observers.push(observer);
    }

    fn publish(&self, speed: u32, out: &mut Vec<String>) {
        for observer in &self.observers {
            observer.on_speed(speed, out);
        }
    }
}

pub fn observer() -> Result<Vec<String>> {
    let speedometer = Speedometer;
    let alarm = OverspeedAlarm { limit: 100 };
    let mut sensor = SpeedSensor::default();
    sensor.subscribe(&speedometer);
    sensor.subscribe(&alarm);

    let mut out = Vec::new();
    for speed in [60, 120] {
        sensor.publish(speed, &mut out);
    }
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gear {
    Parked,
    Driving,
    Reversing,
}

impl Gear {
    fn shift(self, to: Gear) -> Result<Gear> {
        match (self, to) {
            (Gear::Parked, Gear::Driving | Gear::Reversing) => Ok(to),
            (Gear::Driving | Gear::Reversing, Gear::Parked) => Ok(to),
            (from, to) => bail!("cannot shift from {from:?} to {to:?}"),
        }
    }
}

pub fn state() -> Result<Vec<String>> {
    let mut gear = Gear::Parked;
    let mut out = Vec::new();

    for target in [Gear::Driving, Gear::Reversing, Gear::Parked, Gear::Reversing] {
        match gear.shift(target) {
            Ok(next) => {
                out.push(format!("Shifted from {gear:?} to {next:?}"));
                gear = next;
            }
            Err(e) => out.push(format!("Refused: {e}")),
        }
    }
    Ok(out)
}

trait RoutePlanner {
    fn name(&self) -> &'static str;
    fn minutes(&self, km: u32) -> u32;
}

struct Motorway;
struct ScenicRoad;

impl RoutePlanner for Motorway {
    fn name(&self) -> &'static str {
        "motorway"
    }
    fn minutes(&self, km: u32) -> u32 {
        km * 60 / 100
    }
}

impl RoutePlanner for ScenicRoad {
    fn name(&self) -> &'static str {
        "scenic road"
    }
    fn minutes(&self, km: u32) -> u32 {
        km * 60 / 50
    }
}

pub fn strategy() -> Result<Vec<String>> {
    let planners: [&dyn RoutePlanner; 2] = [&Motorway, &ScenicRoad];
    Ok(planners
        .iter()
        .map(|planner| {
            format!(
                "150 km by {} takes {} minutes",
                planner.name(),
                planner.minutes(150)
            )
        })
        .collect())
}

/// The assembly line is fixed; vehicles only fill in the steps.
trait AssemblyLine {
    fn kind(&self) -> &'static str;
    fn wheels(&self) -> u8;

    fn paint(&self) -> Option<&'static str> {
        None
    }

    fn assemble(&self) -> Vec<String> {
        let mut steps = vec![
            format!("{}: frame built", self.kind()),
            format!("{}: {} wheels fitted", self.kind(), self.wheels()),
        ];
        if let Some(color) = self.paint() {
            steps.push(format!("{}: painted {color}", self.kind()));
        }
        steps.push(format!("{}: ready", self.kind()));
        steps
    }
}

struct CarLine;
struct BikeLine;

impl AssemblyLine for CarLine {
    fn kind(&self) -> &'static str {
        "Car"
    }
    fn wheels(&self) -> u8 {
        4
    }
    fn paint(&self) -> Option<&'static str> {
        Some("Silver")
    }
}

impl AssemblyLine for BikeLine {
    fn kind(&self) -> &'static str {
        "Bike"
    }
    fn wheels(&self) -> u8 {
        2
    }
}

pub fn template_method() -> Result<Vec<String>> {
    let mut out = CarLine.assemble();
    out.extend(BikeLine.assemble());
    Ok(out)
}

enum RoadUser {
    Car { passengers: u8 },
    Truck { axles: u8 },
    Motorbike,
}

trait RoadUserVisitor {
    fn visit_car(&mut self, passengers: u8);
    fn visit_truck(&mut self, axles: u8);
    fn visit_motorbike(&mut self);
}

impl RoadUser {
    fn accept(&self, visitor: &mut dyn RoadUserVisitor) {
        match self {
            RoadUser::Car { passengers } => visitor.visit_car(*passengers),
            RoadUser::Truck { axles } => visitor.visit_truck(*axles),
            RoadUser::Motorbike => visitor.visit_motorbike(),
        }
    }
}

#[derive(Default)]
struct TollBooth {
    total: u32,
    lines: Vec<String>,
}

impl RoadUserVisitor for TollBooth {
    fn visit_car(&mut self, passengers: u8) {
        let toll = if passengers >= 3 { 2 } else { 5 };
        self.total += toll;
        self.lines.push(format!("Car with {passengers} passengers pays {toll}"));
    }

    fn visit_truck(&mut self, axles: u8) {
        let toll = u32::from(axles) * 4;
        self.total += toll;
        self.lines.push(format!("Truck with {axles} axles pays {toll}"));
    }

    fn visit_motorbike(&mut self) {
        self.total += 1;
        self.lines.push("Motorbike pays 1".to_string());
    }
}

#[derive(Default)]
struct WheelCounter {
    wheels: u32,
}

impl RoadUserVisitor for WheelCounter {
    fn visit_car(&mut self, _passengers: u8) {
        self.wheels += 4;
    }

    fn visit_truck(&mut self, axles: u8) {
        self.wheels += u32::from(axles) * 2;
    }

    fn visit_motorbike(&mut self) {
        self.wheels += 2;
    }
}

pub fn visitor() -> Result<Vec<String>> {
    let traffic = [
        RoadUser::Car { passengers: 1 },
        RoadUser::Truck { axles: 3 },
        RoadUser::Car { passengers: 4 },
        RoadUser::Motorbike,
    ];

    let mut booth = TollBooth::default();
    let mut counter = WheelCounter::default();
    for user in &traffic {
        user.accept(&mut booth);
        user.accept(&mut counter);
    }

    let mut out = booth.lines;
    out.push(format!("Toll collected: {}", booth.total));
    out.push(format!("Wheels counted: {}", counter.wheels));
    Ok(out)
}
