use serde::{Deserialize, Serialize};

use crate::tables::{
    calorie_factor, BIKE_SPEED_KMH, DAYS_PER_YEAR, HEALTHCARE_USD_PER_ACTIVE_HOUR, WALK_SPEED_KMH,
};
use crate::{Mode, ProjectParameters};

/// Yearly public-health benefits of additional cycling and walking
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HealthBenefits {
    pub active_travel_hours_per_year: f64,
    pub calories_per_year: f64,
    pub healthcare_savings_per_year_usd: f64,
}

/// Additional hours per day spent on `mode`
fn additional_hours(params: &ProjectParameters, mode: Mode, speed_kmh: f64) -> f64 {
    let shift = params.modal_split_after.get(mode) - params.modal_split_before.get(mode);
    let trips = params.person_trips_per_day() * shift / 100.0;
    trips * params.avg_trip_length_km / speed_kmh
}

/// Returns the [`HealthBenefits`] of a project. A shift away from active modes
/// yields negative benefits.
pub fn health_benefits(params: &ProjectParameters) -> HealthBenefits {
    let bike_hours = additional_hours(params, Mode::Bike, BIKE_SPEED_KMH);
    let walk_hours = additional_hours(params, Mode::Walk, WALK_SPEED_KMH);

    let hours = bike_hours + walk_hours;
    let calories =
        bike_hours * calorie_factor(Mode::Bike) + walk_hours * calorie_factor(Mode::Walk);
    let savings = hours * HEALTHCARE_USD_PER_ACTIVE_HOUR;

    HealthBenefits {
        active_travel_hours_per_year: hours * DAYS_PER_YEAR,
        calories_per_year: calories * DAYS_PER_YEAR,
        healthcare_savings_per_year_usd: savings * DAYS_PER_YEAR,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ModalSplit;

    #[test]
    fn bike_and_walk() {
        let params = ProjectParameters {
            modal_split_before: ModalSplit::new(70.0, 15.0, 5.0, 10.0),
            modal_split_after: ModalSplit::new(55.0, 15.0, 15.0, 15.0),
            ..Default::default()
        };
        let r = health_benefits(&params);
        // 1500 bike trips * 5 km / 15 km/h = 500 h; 750 walk trips * 5 km / 5 km/h = 750 h
        assert!((r.active_travel_hours_per_year - 1250.0 * 365.0).abs() < 1e-6);
        assert!((r.calories_per_year - (500.0 * 400.0 + 750.0 * 300.0) * 365.0).abs() < 1e-4);
        assert!((r.healthcare_savings_per_year_usd - 1250.0 * 3.5 * 365.0).abs() < 1e-6);
    }

    #[test]
    fn less_walking_is_negative() {
        let params = ProjectParameters {
            modal_split_before: ModalSplit::new(70.0, 15.0, 5.0, 10.0),
            modal_split_after: ModalSplit::new(75.0, 15.0, 5.0, 5.0),
            ..Default::default()
        };
        assert!(health_benefits(&params).active_travel_hours_per_year < 0.0);
    }
}
