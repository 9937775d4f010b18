//! Reference coefficients of the model. They are treated as given data.
use crate::{Location, ModalSplit, Mode, ProjectType, Region};

/// average number of persons per vehicle
pub static VEHICLE_OCCUPANCY: f64 = 1.5;
/// average number of passengers per bus
pub static BUS_PASSENGERS: f64 = 40.0;
/// share of car emissions attributable to congestion
pub static CONGESTION_SHARE: f64 = 0.15;
/// km driven per year by an average car
pub static KM_PER_CAR_YEAR: f64 = 15000.0;
pub static BIKE_SPEED_KMH: f64 = 15.0;
pub static WALK_SPEED_KMH: f64 = 5.0;
/// USD of avoided healthcare cost per hour of active travel
pub static HEALTHCARE_USD_PER_ACTIVE_HOUR: f64 = 3.5;
/// kg of PM2.5 captured per tree per year
pub static TREE_PM25_KG: f64 = 0.1;
/// kg of PM2.5 captured per m² of greenspace per year
pub static GREENSPACE_PM25_KG: f64 = 0.0002;
/// kg CO2 sequestered per m² of greenspace per year
pub static GREENSPACE_CO2_KG: f64 = 0.005;
/// kg CO2 avoided per m² of permeable pavement per year
pub static PERMEABLE_PAVEMENT_CO2_KG: f64 = 0.002;
/// multiplier of the indirect factor for projects that reshape land use
pub static LAND_USE_MULTIPLIER: f64 = 1.5;
pub static DAYS_PER_YEAR: f64 = 365.0;

/// Coefficients that depend on the [`ProjectType`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectFactors {
    /// kg CO2e per m² built
    pub construction: f64,
    /// kg CO2e per m² per year
    pub maintenance: f64,
    /// default change, in percentage points, of the modal split
    pub shift: ModalSplit,
}

impl ProjectFactors {
    pub fn new(project_type: ProjectType) -> Self {
        let (construction, maintenance, [car, transit, bike, walk]) = match project_type {
            ProjectType::BikeLane => (35.0, 2.0, [-5.0, 0.0, 5.0, 0.0]),
            ProjectType::ProtectedBikeLane => (45.0, 3.0, [-10.0, 0.0, 10.0, 0.0]),
            ProjectType::CycleTrack => (70.0, 5.0, [-12.0, -1.0, 12.0, 1.0]),
            ProjectType::Sidewalk => (60.0, 3.0, [-3.0, 0.0, 0.0, 3.0]),
            ProjectType::PedestrianPlaza => (85.0, 4.0, [-7.0, 1.0, 1.0, 5.0]),
            ProjectType::BusLane => (90.0, 6.0, [-8.0, 8.0, 0.0, 0.0]),
            ProjectType::BrtCorridor => (120.0, 8.0, [-15.0, 12.0, 1.0, 2.0]),
            ProjectType::CompleteStreet => (150.0, 10.0, [-15.0, 5.0, 5.0, 5.0]),
            ProjectType::TransitHub => (200.0, 15.0, [-18.0, 15.0, 1.0, 2.0]),
            ProjectType::RoadDiet => (40.0, 3.0, [-10.0, 3.0, 4.0, 3.0]),
        };
        Self {
            construction,
            maintenance,
            shift: ModalSplit {
                car,
                transit,
                bike,
                walk,
            },
        }
    }
}

/// kg CO2e per passenger-km
pub fn mode_emission_factor(mode: Mode) -> f64 {
    match mode {
        Mode::Car => 0.251,
        // bus transit average
        Mode::Transit => 0.046,
        Mode::Bike | Mode::Walk => 0.0,
    }
}

/// kcal burned per hour of active travel
pub fn calorie_factor(mode: Mode) -> f64 {
    match mode {
        Mode::Bike => 400.0,
        Mode::Walk => 300.0,
        Mode::Car | Mode::Transit => 0.0,
    }
}

/// kg CO2 sequestered per tree per year
pub fn tree_sequestration_factor(region: Region) -> f64 {
    match region {
        Region::Northeast => 21.8,
        Region::Midwest => 20.5,
        Region::South => 22.6,
        Region::West => 19.7,
        Region::Pacific => 23.2,
        Region::International => 21.0,
    }
}

/// Base share of the direct reduction that is added as long-term indirect reduction
pub fn indirect_factor(location: Location) -> f64 {
    match location {
        Location::Urban => 0.5,
        Location::Suburban | Location::Mixed => 0.3,
        Location::Rural => 0.1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Car,
    Bus,
}

/// Air pollutant emissions in grams per vehicle-km
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantFactors {
    pub pm25: f64,
    pub nox: f64,
    pub voc: f64,
}

impl PollutantFactors {
    pub fn new(class: VehicleClass) -> Self {
        match class {
            VehicleClass::Car => PollutantFactors {
                pm25: 0.03,
                nox: 0.40,
                voc: 0.15,
            },
            VehicleClass::Bus => PollutantFactors {
                pm25: 0.20,
                nox: 2.30,
                voc: 0.50,
            },
        }
    }
}
