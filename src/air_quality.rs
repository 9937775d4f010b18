use serde::{Deserialize, Serialize};

use crate::tables::{
    PollutantFactors, VehicleClass, BUS_PASSENGERS, DAYS_PER_YEAR, GREENSPACE_PM25_KG,
    TREE_PM25_KG,
};
use crate::{ModalSplit, ProjectParameters};

/// Yearly reduction of air pollutants, in kg
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityImprovement {
    pub pm25_kg_per_year: f64,
    pub nox_kg_per_year: f64,
    pub voc_kg_per_year: f64,
}

/// Daily vehicle-km of cars and of buses for a given split
fn vehicle_km(params: &ProjectParameters, split: &ModalSplit) -> (f64, f64) {
    let car = params.daily_traffic_vehicles * (split.car / 100.0) * params.avg_trip_length_km;
    let bus = params.person_trips_per_day() * (split.transit / 100.0) * params.avg_trip_length_km
        / BUS_PASSENGERS;
    (car, bus)
}

/// Returns the [`AirQualityImprovement`] of a project: pollutants avoided by fewer car
/// and bus km, plus what trees and greenspace capture (PM2.5 only).
pub fn air_quality_improvement(params: &ProjectParameters) -> AirQualityImprovement {
    let (car_before, bus_before) = vehicle_km(params, &params.modal_split_before);
    let (car_after, bus_after) = vehicle_km(params, &params.modal_split_after);
    let car_km = car_before - car_after;
    let bus_km = bus_before - bus_after;

    let car = PollutantFactors::new(VehicleClass::Car);
    let bus = PollutantFactors::new(VehicleClass::Bus);
    // g/day -> kg/year
    let yearly_kg =
        |car_g: f64, bus_g: f64| (car_km * car_g + bus_km * bus_g) * DAYS_PER_YEAR / 1000.0;

    let green_pm25 =
        params.tree_count * TREE_PM25_KG + params.greenspace_area_sq_m * GREENSPACE_PM25_KG;

    AirQualityImprovement {
        pm25_kg_per_year: yearly_kg(car.pm25, bus.pm25) + green_pm25,
        nox_kg_per_year: yearly_kg(car.nox, bus.nox),
        voc_kg_per_year: yearly_kg(car.voc, bus.voc),
    }
}
