use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::{
    apply_default_shift, ImpactResults, Location, ModalSplit, Mode, ProjectParameters,
    ProjectType, Region,
};

fn fixed(value: f64) -> String {
    format!("{value:.2}")
}

/// Returns the impact analysis of a project as a sectioned CSV: project details,
/// modal split changes, and one section per impact, with values to 2 decimals.
/// Sections are separated by an empty line.
/// # Error
/// Errors if writing the CSV fails
pub fn csv(
    params: &ProjectParameters,
    results: &ImpactResults,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let before = params.modal_split_before;
    let after = params.modal_split_after;

    let details: Vec<Vec<String>> = vec![
        vec!["PROJECT DETAILS".to_string()],
        vec!["Project Type".into(), params.project_type.label().into()],
        vec!["Length (km)".into(), params.length_km.to_string()],
        vec!["Width (m)".into(), params.width_m.to_string()],
        vec!["Area (sq m)".into(), params.area_sq_m().to_string()],
        vec!["Location".into(), params.location.label().into()],
        vec!["Region".into(), params.region.label().into()],
    ];
    let mut modal_split: Vec<Vec<String>> = vec![
        vec!["MODAL SPLIT CHANGES".to_string()],
        vec![
            "Mode".into(),
            "Before (%)".into(),
            "After (%)".into(),
            "Change (%)".into(),
        ],
    ];
    modal_split.extend(Mode::ALL.into_iter().map(|mode| {
        vec![
            mode.label().to_string(),
            before.get(mode).to_string(),
            after.get(mode).to_string(),
            (after.get(mode) - before.get(mode)).to_string(),
        ]
    }));

    let ghg = &results.ghg;
    let air = &results.air_quality;
    let health = &results.health;
    let sequestration = &results.sequestration;
    let impacts: [(&str, Vec<(&str, f64)>); 5] = [
        (
            "GREENHOUSE GAS REDUCTIONS",
            vec![
                ("Daily (kg CO2e)", ghg.daily_kg_co2e),
                ("Annual (kg CO2e)", ghg.annual_kg_co2e),
                ("Project Lifetime (kg CO2e)", ghg.lifetime_kg_co2e),
                ("Equivalent Cars Removed", ghg.car_equivalent),
                ("Equivalent Trees Planted", ghg.tree_equivalent),
            ],
        ),
        (
            "AIR QUALITY IMPROVEMENTS (ANNUAL)",
            vec![
                ("PM2.5 Reduction (kg)", air.pm25_kg_per_year),
                ("NOx Reduction (kg)", air.nox_kg_per_year),
                ("VOC Reduction (kg)", air.voc_kg_per_year),
            ],
        ),
        (
            "HEALTH BENEFITS (ANNUAL)",
            vec![
                ("Active Travel Hours", health.active_travel_hours_per_year),
                ("Calories Burned", health.calories_per_year),
                (
                    "Healthcare Cost Savings ($)",
                    health.healthcare_savings_per_year_usd,
                ),
            ],
        ),
        (
            "CARBON SEQUESTRATION",
            vec![
                ("Annual (kg CO2)", sequestration.annual_kg_co2),
                ("Project Lifetime (kg CO2)", sequestration.lifetime_kg_co2),
            ],
        ),
        (
            "TOTAL CLIMATE BENEFIT",
            vec![(
                "Total Lifetime GHG Benefit (kg CO2e)",
                results.total_lifetime_benefit_kg_co2e(),
            )],
        ),
    ];

    let mut sections = vec![
        vec![vec!["Climate Impact Analysis Results".to_string()]],
        details,
        modal_split,
    ];
    sections.extend(impacts.into_iter().map(|(title, values)| {
        std::iter::once(vec![title.to_string()])
            .chain(
                values
                    .into_iter()
                    .map(|(name, value)| vec![name.to_string(), fixed(value)]),
            )
            .collect::<Vec<_>>()
    }));

    let mut builder = ::csv::WriterBuilder::new();
    builder
        .flexible(true)
        .terminator(::csv::Terminator::Any(b'\n'));
    let mut wtr = builder.from_writer(vec![]);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            // separator line, written past the csv writer
            let mut buf = wtr.into_inner().map_err(|e| e.into_error())?;
            buf.push(b'\n');
            wtr = builder.from_writer(buf);
        }
        for row in section {
            wtr.write_record(row)?;
        }
    }
    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}

/// A project as a flat CSV record, used for batch runs.
/// Empty "after" columns are derived from the default shift of the project type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    pub name: String,
    pub project_type: ProjectType,
    pub length_km: f64,
    pub width_m: f64,
    pub location: Location,
    pub region: Region,
    pub daily_traffic_vehicles: f64,
    pub avg_trip_length_km: f64,
    pub peak_hour_percent: f64,
    pub congestion_reduction_percent: f64,
    pub before_car: f64,
    pub before_transit: f64,
    pub before_bike: f64,
    pub before_walk: f64,
    pub after_car: Option<f64>,
    pub after_transit: Option<f64>,
    pub after_bike: Option<f64>,
    pub after_walk: Option<f64>,
    pub tree_count: f64,
    pub greenspace_area_sq_m: f64,
    pub permeable_pavement_area_sq_m: f64,
    pub project_lifetime_years: f64,
    pub include_construction: bool,
    pub include_maintenance: bool,
    pub include_indirect: bool,
}

impl From<&ScenarioRow> for ProjectParameters {
    fn from(row: &ScenarioRow) -> Self {
        let before = ModalSplit::new(
            row.before_car,
            row.before_transit,
            row.before_bike,
            row.before_walk,
        );
        let after = match (row.after_car, row.after_transit, row.after_bike, row.after_walk) {
            (Some(car), Some(transit), Some(bike), Some(walk)) => {
                ModalSplit::new(car, transit, bike, walk)
            }
            _ => apply_default_shift(before, row.project_type),
        };
        ProjectParameters {
            project_type: row.project_type,
            length_km: row.length_km,
            width_m: row.width_m,
            location: row.location,
            region: row.region,
            daily_traffic_vehicles: row.daily_traffic_vehicles,
            avg_trip_length_km: row.avg_trip_length_km,
            peak_hour_percent: row.peak_hour_percent,
            congestion_reduction_percent: row.congestion_reduction_percent,
            modal_split_before: before,
            modal_split_after: after,
            tree_count: row.tree_count,
            greenspace_area_sq_m: row.greenspace_area_sq_m,
            permeable_pavement_area_sq_m: row.permeable_pavement_area_sq_m,
            project_lifetime_years: row.project_lifetime_years,
            include_construction: row.include_construction,
            include_maintenance: row.include_maintenance,
            include_indirect: row.include_indirect,
        }
    }
}

/// The impacts of a [`ScenarioRow`] as a flat CSV record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub name: String,
    pub area_sq_m: f64,
    pub ghg_daily_kg_co2e: f64,
    pub ghg_annual_kg_co2e: f64,
    pub ghg_lifetime_kg_co2e: f64,
    pub car_equivalent: f64,
    pub tree_equivalent: f64,
    pub pm25_kg_per_year: f64,
    pub nox_kg_per_year: f64,
    pub voc_kg_per_year: f64,
    pub active_travel_hours_per_year: f64,
    pub calories_per_year: f64,
    pub healthcare_savings_per_year_usd: f64,
    pub sequestration_annual_kg_co2: f64,
    pub sequestration_lifetime_kg_co2: f64,
    pub total_lifetime_benefit_kg_co2e: f64,
}

impl ResultRow {
    pub fn new(name: String, params: &ProjectParameters, results: &ImpactResults) -> Self {
        Self {
            name,
            area_sq_m: params.area_sq_m(),
            ghg_daily_kg_co2e: results.ghg.daily_kg_co2e,
            ghg_annual_kg_co2e: results.ghg.annual_kg_co2e,
            ghg_lifetime_kg_co2e: results.ghg.lifetime_kg_co2e,
            car_equivalent: results.ghg.car_equivalent,
            tree_equivalent: results.ghg.tree_equivalent,
            pm25_kg_per_year: results.air_quality.pm25_kg_per_year,
            nox_kg_per_year: results.air_quality.nox_kg_per_year,
            voc_kg_per_year: results.air_quality.voc_kg_per_year,
            active_travel_hours_per_year: results.health.active_travel_hours_per_year,
            calories_per_year: results.health.calories_per_year,
            healthcare_savings_per_year_usd: results.health.healthcare_savings_per_year_usd,
            sequestration_annual_kg_co2: results.sequestration.annual_kg_co2,
            sequestration_lifetime_kg_co2: results.sequestration.lifetime_kg_co2,
            total_lifetime_benefit_kg_co2e: results.total_lifetime_benefit_kg_co2e(),
        }
    }
}

/// Computes a [`ResultRow`] per [`ScenarioRow`] of a CSV
/// # Error
/// Errors if a row cannot be parsed
pub fn run_batch(data: &[u8]) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    crate::csv::deserialize::<ScenarioRow>(data)
        .map(|row| -> Result<ResultRow, Box<dyn Error>> {
            let row = row?;
            let params = ProjectParameters::from(&row);
            let results = crate::compute_impacts(&params);
            let total = results.total_lifetime_benefit_kg_co2e();
            log::debug!("{}: {total:.2} kg CO2e", row.name);
            Ok(ResultRow::new(row.name, &params, &results))
        })
        .collect()
}
