use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::{apply_default_shift, Location, ModalSplit, ProjectType, Region};

/// The physical and behavioural parameters of a project, the sole input of
/// [`crate::compute_impacts`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParameters {
    pub project_type: ProjectType,
    pub length_km: f64,
    pub width_m: f64,
    pub location: Location,
    pub region: Region,
    /// vehicles per day
    pub daily_traffic_vehicles: f64,
    pub avg_trip_length_km: f64,
    /// % of the daily traffic during the peak hour
    pub peak_hour_percent: f64,
    pub congestion_reduction_percent: f64,
    pub modal_split_before: ModalSplit,
    pub modal_split_after: ModalSplit,
    pub tree_count: f64,
    pub greenspace_area_sq_m: f64,
    pub permeable_pavement_area_sq_m: f64,
    pub project_lifetime_years: f64,
    pub include_construction: bool,
    pub include_maintenance: bool,
    pub include_indirect: bool,
}

impl Default for ProjectParameters {
    fn default() -> Self {
        let project_type = ProjectType::BikeLane;
        let modal_split_before = ModalSplit::new(70.0, 15.0, 5.0, 10.0);
        Self {
            project_type,
            length_km: 5.0,
            width_m: 3.0,
            location: Location::Urban,
            region: Region::Northeast,
            daily_traffic_vehicles: 10000.0,
            avg_trip_length_km: 5.0,
            peak_hour_percent: 15.0,
            congestion_reduction_percent: 10.0,
            modal_split_before,
            modal_split_after: apply_default_shift(modal_split_before, project_type),
            tree_count: 50.0,
            greenspace_area_sq_m: 500.0,
            permeable_pavement_area_sq_m: 200.0,
            project_lifetime_years: 20.0,
            include_construction: true,
            include_maintenance: true,
            include_indirect: true,
        }
    }
}

impl ProjectParameters {
    /// Footprint of the project in m²
    pub fn area_sq_m(&self) -> f64 {
        self.length_km * 1000.0 * self.width_m
    }

    /// Number of person trips per day on the corridor
    pub fn person_trips_per_day(&self) -> f64 {
        self.daily_traffic_vehicles * crate::tables::VEHICLE_OCCUPANCY
    }

    /// Overrides the fields present in `record`.
    /// When the record has no "after" split, "after" is the default shift of the
    /// resulting "before" split and project type.
    pub fn hydrate(mut self, record: &ProjectRecord) -> Self {
        macro_rules! set {
            ($($field:ident),*) => {
                $(if let Some(value) = record.$field {
                    self.$field = value;
                })*
            };
        }
        set!(
            project_type,
            length_km,
            width_m,
            location,
            region,
            daily_traffic_vehicles,
            avg_trip_length_km,
            peak_hour_percent,
            congestion_reduction_percent,
            modal_split_before,
            modal_split_after,
            tree_count,
            greenspace_area_sq_m,
            permeable_pavement_area_sq_m,
            project_lifetime_years,
            include_construction,
            include_maintenance,
            include_indirect
        );
        if record.modal_split_after.is_none() {
            self.modal_split_after =
                apply_default_shift(self.modal_split_before, self.project_type);
        }
        self
    }
}

/// A persisted project, as stored by the caller. Every field is optional;
/// absent fields keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(alias = "type")]
    pub project_type: Option<ProjectType>,
    #[serde(alias = "length")]
    pub length_km: Option<f64>,
    #[serde(alias = "width")]
    pub width_m: Option<f64>,
    pub location: Option<Location>,
    pub region: Option<Region>,
    #[serde(alias = "dailyTraffic")]
    pub daily_traffic_vehicles: Option<f64>,
    #[serde(alias = "avgTripLength")]
    pub avg_trip_length_km: Option<f64>,
    pub peak_hour_percent: Option<f64>,
    pub congestion_reduction_percent: Option<f64>,
    pub modal_split_before: Option<ModalSplit>,
    pub modal_split_after: Option<ModalSplit>,
    pub tree_count: Option<f64>,
    #[serde(alias = "greenspaceArea")]
    pub greenspace_area_sq_m: Option<f64>,
    #[serde(alias = "permPavementArea")]
    pub permeable_pavement_area_sq_m: Option<f64>,
    #[serde(alias = "projectLifetime")]
    pub project_lifetime_years: Option<f64>,
    pub include_construction: Option<bool>,
    pub include_maintenance: Option<bool>,
    pub include_indirect: Option<bool>,
}

/// Loads a [`ProjectRecord`] from a JSON file
/// # Error
/// Errors if the file cannot be read or is not a valid record
pub fn load_project_record(path: &str) -> Result<ProjectRecord, Box<dyn Error>> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
