use serde::{Deserialize, Serialize};

use crate::tables::{tree_sequestration_factor, GREENSPACE_CO2_KG, PERMEABLE_PAVEMENT_CO2_KG};
use crate::ProjectParameters;

/// CO2 removed by green infrastructure, in kg
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CarbonSequestration {
    pub annual_kg_co2: f64,
    pub lifetime_kg_co2: f64,
}

/// kg CO2 per year sequestered by the project's trees alone
pub fn tree_sequestration(params: &ProjectParameters) -> f64 {
    params.tree_count * tree_sequestration_factor(params.region)
}

/// Returns the [`CarbonSequestration`] of a project's trees, greenspace and
/// permeable pavement. It does not depend on traffic.
pub fn carbon_sequestration(params: &ProjectParameters) -> CarbonSequestration {
    let annual = tree_sequestration(params)
        + params.greenspace_area_sq_m * GREENSPACE_CO2_KG
        + params.permeable_pavement_area_sq_m * PERMEABLE_PAVEMENT_CO2_KG;
    CarbonSequestration {
        annual_kg_co2: annual,
        lifetime_kg_co2: annual * params.project_lifetime_years,
    }
}
