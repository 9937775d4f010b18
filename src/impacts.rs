use serde::{Deserialize, Serialize};

use crate::{
    air_quality_improvement, carbon_sequestration, construction_emissions, ghg_reduction,
    health_benefits, maintenance_emissions, mode_emissions, AirQualityImprovement,
    CarbonSequestration, GhgReduction, HealthBenefits, ModeEmissions, ProjectParameters,
};

/// All impacts of a project. It is always computed as a whole from a
/// [`ProjectParameters`] snapshot via [`compute_impacts`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResults {
    pub ghg: GhgReduction,
    pub air_quality: AirQualityImprovement,
    pub health: HealthBenefits,
    pub sequestration: CarbonSequestration,
}

impl ImpactResults {
    /// Lifetime GHG reduction plus lifetime sequestration, in kg CO2e
    pub fn total_lifetime_benefit_kg_co2e(&self) -> f64 {
        self.ghg.lifetime_kg_co2e + self.sequestration.lifetime_kg_co2
    }
}

/// Computes all impacts of `params`
pub fn compute_impacts(params: &ProjectParameters) -> ImpactResults {
    ImpactResults {
        ghg: ghg_reduction(params),
        air_quality: air_quality_improvement(params),
        health: health_benefits(params),
        sequestration: carbon_sequestration(params),
    }
}

/// Lifecycle view of the GHG balance of a project, in kg CO2e.
/// Construction and maintenance are reported even when they are excluded from
/// [`GhgReduction::lifetime_kg_co2e`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleBreakdown {
    pub construction_kg_co2e: f64,
    pub maintenance_kg_co2e: f64,
    /// annual reduction over the lifetime
    pub operational_savings_kg_co2e: f64,
    pub net_benefit_kg_co2e: f64,
}

impl LifecycleBreakdown {
    pub fn new(params: &ProjectParameters, results: &ImpactResults) -> Self {
        Self {
            construction_kg_co2e: construction_emissions(params),
            maintenance_kg_co2e: maintenance_emissions(params),
            operational_savings_kg_co2e: results.ghg.annual_kg_co2e
                * params.project_lifetime_years,
            net_benefit_kg_co2e: results.ghg.lifetime_kg_co2e,
        }
    }
}

/// Daily emissions per mode, before and after the project
pub fn emissions_breakdown(params: &ProjectParameters) -> (ModeEmissions, ModeEmissions) {
    (
        mode_emissions(params, &params.modal_split_before),
        mode_emissions(params, &params.modal_split_after),
    )
}
