use serde::{Deserialize, Serialize};

use crate::tables::{
    self, ProjectFactors, CONGESTION_SHARE, DAYS_PER_YEAR, KM_PER_CAR_YEAR, LAND_USE_MULTIPLIER,
};
use crate::{ModalSplit, Mode, ProjectParameters, ProjectType};

/// Reduction of greenhouse gases, in kg CO2e
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GhgReduction {
    pub daily_kg_co2e: f64,
    pub annual_kg_co2e: f64,
    pub lifetime_kg_co2e: f64,
    /// cars removed from the road for a year
    pub car_equivalent: f64,
    pub tree_equivalent: f64,
}

/// Emissions per mode in kg CO2e per day
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ModeEmissions {
    pub car: f64,
    pub transit: f64,
    pub bike: f64,
    pub walk: f64,
}

impl ModeEmissions {
    pub fn get(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Car => self.car,
            Mode::Transit => self.transit,
            Mode::Bike => self.bike,
            Mode::Walk => self.walk,
        }
    }

    pub fn total(&self) -> f64 {
        self.car + self.transit + self.bike + self.walk
    }
}

/// Returns the daily emissions per mode of the trips of `params` distributed according to `split`
pub fn mode_emissions(params: &ProjectParameters, split: &ModalSplit) -> ModeEmissions {
    let person_trips = params.person_trips_per_day();
    let emissions = |mode: Mode| {
        let person_km = person_trips * (split.get(mode) / 100.0) * params.avg_trip_length_km;
        person_km * tables::mode_emission_factor(mode)
    };
    ModeEmissions {
        car: emissions(Mode::Car),
        transit: emissions(Mode::Transit),
        bike: emissions(Mode::Bike),
        walk: emissions(Mode::Walk),
    }
}

/// Embodied emissions of building the project, in kg CO2e
pub fn construction_emissions(params: &ProjectParameters) -> f64 {
    params.area_sq_m() * ProjectFactors::new(params.project_type).construction
}

/// Emissions of maintaining the project over its lifetime, in kg CO2e
pub fn maintenance_emissions(params: &ProjectParameters) -> f64 {
    params.area_sq_m()
        * ProjectFactors::new(params.project_type).maintenance
        * params.project_lifetime_years
}

fn indirect_factor(params: &ProjectParameters) -> f64 {
    let factor = tables::indirect_factor(params.location);
    match params.project_type {
        ProjectType::CompleteStreet | ProjectType::TransitHub => factor * LAND_USE_MULTIPLIER,
        _ => factor,
    }
}

/// Returns the [`GhgReduction`] of a project. Negative values are valid and mean
/// that the project emits more than it avoids.
pub fn ghg_reduction(params: &ProjectParameters) -> GhgReduction {
    let before = mode_emissions(params, &params.modal_split_before);
    let after = mode_emissions(params, &params.modal_split_after);
    let direct = before.total() - after.total();

    let congestion_benefit =
        before.car * (params.congestion_reduction_percent / 100.0) * CONGESTION_SHARE;

    let construction = if params.include_construction {
        construction_emissions(params)
    } else {
        0.0
    };
    let maintenance = if params.include_maintenance {
        maintenance_emissions(params)
    } else {
        0.0
    };
    let indirect = if params.include_indirect {
        direct * params.project_lifetime_years * indirect_factor(params)
    } else {
        0.0
    };

    let daily = direct + congestion_benefit;
    let annual = daily * DAYS_PER_YEAR;
    let lifetime = annual * params.project_lifetime_years + indirect - construction - maintenance;

    let car_equivalent = lifetime / (tables::mode_emission_factor(Mode::Car) * KM_PER_CAR_YEAR);
    // the lifetime is discounted a second time here; kept as published
    let tree_equivalent = lifetime
        / (tables::tree_sequestration_factor(params.region) * params.project_lifetime_years);

    GhgReduction {
        daily_kg_co2e: daily,
        annual_kg_co2e: annual,
        lifetime_kg_co2e: lifetime,
        car_equivalent,
        tree_equivalent,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn direct_only() -> ProjectParameters {
        ProjectParameters {
            modal_split_before: ModalSplit::new(70.0, 15.0, 5.0, 10.0),
            modal_split_after: ModalSplit::new(60.0, 15.0, 15.0, 10.0),
            congestion_reduction_percent: 0.0,
            include_construction: false,
            include_maintenance: false,
            include_indirect: false,
            ..Default::default()
        }
    }

    #[test]
    fn mode_emissions_before() {
        let params = direct_only();
        let before = mode_emissions(&params, &params.modal_split_before);
        // 15000 trips * 70% * 5 km * 0.251
        assert!((before.car - 13177.5).abs() < 1e-6);
        // 15000 trips * 15% * 5 km * 0.046
        assert!((before.transit - 517.5).abs() < 1e-6);
        assert_eq!(before.bike, 0.0);
        assert_eq!(before.walk, 0.0);
    }

    #[test]
    fn daily_is_direct_reduction() {
        let r = ghg_reduction(&direct_only());
        assert!((r.daily_kg_co2e - 1882.5).abs() < 1e-6);
        assert!((r.annual_kg_co2e - 1882.5 * 365.0).abs() < 1e-6);
        assert!((r.lifetime_kg_co2e - 1882.5 * 365.0 * 20.0).abs() < 1e-3);
    }

    #[test]
    fn congestion() {
        let params = ProjectParameters {
            congestion_reduction_percent: 10.0,
            ..direct_only()
        };
        let r = ghg_reduction(&params);
        // 13177.5 * 10% * 15%
        assert!((r.daily_kg_co2e - (1882.5 + 197.6625)).abs() < 1e-6);
    }

    #[test]
    fn construction_and_maintenance() {
        let params = ProjectParameters {
            include_construction: true,
            include_maintenance: true,
            ..direct_only()
        };
        // 15000 m² * 35 and 15000 m² * 2 * 20 years
        assert_eq!(construction_emissions(&params), 525000.0);
        assert_eq!(maintenance_emissions(&params), 600000.0);
        let r = ghg_reduction(&params);
        let expected = 1882.5 * 365.0 * 20.0 - 525000.0 - 600000.0;
        assert!((r.lifetime_kg_co2e - expected).abs() < 1e-3);
    }

    #[test]
    fn indirect_multiplier() {
        let urban = ProjectParameters {
            include_indirect: true,
            ..direct_only()
        };
        let complete_street = ProjectParameters {
            project_type: ProjectType::CompleteStreet,
            ..urban.clone()
        };
        let base = 1882.5 * 365.0 * 20.0;
        let urban_indirect = ghg_reduction(&urban).lifetime_kg_co2e - base;
        let street_indirect = ghg_reduction(&complete_street).lifetime_kg_co2e - base;
        // 1882.5 * 20 years * 0.5
        assert!((urban_indirect - 18825.0).abs() < 1e-3);
        assert!((street_indirect - 18825.0 * 1.5).abs() < 1e-3);
    }

    #[test]
    fn net_negative_is_valid() {
        let params = ProjectParameters {
            project_type: ProjectType::TransitHub,
            modal_split_after: ModalSplit::new(70.0, 15.0, 5.0, 10.0),
            include_construction: true,
            ..direct_only()
        };
        let r = ghg_reduction(&params);
        assert_eq!(r.daily_kg_co2e, 0.0);
        assert_eq!(r.lifetime_kg_co2e, -3000000.0);
        assert!(r.car_equivalent < 0.0);
    }

    #[test]
    fn equivalents() {
        let r = ghg_reduction(&direct_only());
        assert!((r.car_equivalent - r.lifetime_kg_co2e / (0.251 * 15000.0)).abs() < 1e-9);
        assert!((r.tree_equivalent - r.lifetime_kg_co2e / (21.8 * 20.0)).abs() < 1e-9);
    }
}
