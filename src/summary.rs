use std::error::Error;

use itertools::Itertools;
use num_format::{Locale, ToFormattedString};
use tinytemplate::TinyTemplate;

use crate::format::{format_number, EmissionRating};
use crate::{ImpactResults, LifecycleBreakdown, Mode, ProjectParameters};

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/summary_template.md"
));
static TEMPLATE_NAME: &'static str = "t";

#[derive(serde::Serialize)]
pub struct Context {
    pub date: String,
    pub project_type: String,
    pub project_type_lower: String,
    pub area: String,
    pub location: String,
    pub region: String,
    pub modal_changes: String,
    pub lifetime: String,
    pub ghg_lifetime: String,
    pub rating: EmissionRating,
    pub sequestration_lifetime: String,
    pub pm25: String,
    pub active_hours: String,
    pub healthcare_savings: String,
    pub car_equivalent: String,
    pub tree_equivalent: String,
    pub construction: String,
    pub maintenance: String,
    pub operational_savings: String,
    pub net_benefit: String,
    pub total_benefit: String,
}

fn thousands(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

impl Context {
    pub fn new(params: &ProjectParameters, results: &ImpactResults, date: &str) -> Self {
        let lifecycle = LifecycleBreakdown::new(params, results);
        let before = params.modal_split_before;
        let after = params.modal_split_after;
        let modal_changes = Mode::ALL
            .iter()
            .map(|mode| {
                let change = after.get(*mode) - before.get(*mode);
                format!("{} {change:+}%", mode.label().to_lowercase())
            })
            .join(", ");

        Self {
            date: date.to_string(),
            project_type: params.project_type.label().to_string(),
            project_type_lower: params.project_type.label().to_lowercase(),
            area: thousands(params.area_sq_m()),
            location: params.location.label().to_string(),
            region: params.region.label().to_string(),
            modal_changes,
            lifetime: params.project_lifetime_years.to_string(),
            ghg_lifetime: format_number(results.ghg.lifetime_kg_co2e, 0),
            rating: EmissionRating::of(results.ghg.lifetime_kg_co2e),
            sequestration_lifetime: format_number(results.sequestration.lifetime_kg_co2, 0),
            pm25: format!("{:.1}", results.air_quality.pm25_kg_per_year),
            active_hours: format_number(results.health.active_travel_hours_per_year, 0),
            healthcare_savings: format_number(results.health.healthcare_savings_per_year_usd, 0),
            car_equivalent: format_number(results.ghg.car_equivalent, 0),
            tree_equivalent: format_number(results.ghg.tree_equivalent, 0),
            construction: thousands(lifecycle.construction_kg_co2e),
            maintenance: thousands(lifecycle.maintenance_kg_co2e),
            operational_savings: thousands(lifecycle.operational_savings_kg_co2e),
            net_benefit: thousands(lifecycle.net_benefit_kg_co2e),
            total_benefit: thousands(results.total_lifetime_benefit_kg_co2e()),
        }
    }
}

/// Renders the markdown summary of a project, dated `date`
/// # Error
/// Errors if the template cannot be rendered
pub fn render(
    params: &ProjectParameters,
    results: &ImpactResults,
    date: &str,
) -> Result<String, Box<dyn Error>> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    Ok(tt.render(TEMPLATE_NAME, &Context::new(params, results, date))?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{compute_impacts, ProjectRecord, ProjectType, Session};

    #[test]
    fn default_project() {
        let params = ProjectParameters::default();
        let results = compute_impacts(&params);
        let summary = render(&params, &results, "2024-05-01").unwrap();

        assert!(summary.starts_with("# Climate impact of the Bike Lane project"));
        assert!(summary.contains("_Computed on 2024-05-01._"));
        assert!(summary.contains("This bike lane project (15,000 m², Urban Core, Northeast)"));
        assert!(summary.contains("car -5%, transit +0%, bicycle +5%, walking +0%"));
        assert!(summary.contains("| Construction emissions | 525,000 |"));
        assert!(summary.contains("| Maintenance emissions over 20 years | 600,000 |"));
        assert!(summary.contains(&format!(
            "**Total lifetime climate benefit: {} kg CO2e**",
            thousands(results.total_lifetime_benefit_kg_co2e())
        )));
        assert!(!summary.contains('{'));
    }

    #[test]
    fn hydrated_project_uses_its_shift() {
        let record = ProjectRecord {
            project_type: Some(ProjectType::TransitHub),
            ..Default::default()
        };
        let session = Session::from_record(&record);
        let summary = render(session.parameters(), &session.results(), "2024-05-01").unwrap();
        assert!(summary.contains("Transit Hub"));
        assert!(summary.contains("car -18%, transit +15%"));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(1_234_567.4), "1,234,567");
        assert_eq!(thousands(-525_000.0), "-525,000");
    }
}
