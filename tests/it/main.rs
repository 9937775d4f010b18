use climate_impact::*;

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn scenario() -> ProjectParameters {
    ProjectParameters {
        daily_traffic_vehicles: 10000.0,
        avg_trip_length_km: 5.0,
        modal_split_before: ModalSplit::new(70.0, 15.0, 5.0, 10.0),
        modal_split_after: ModalSplit::new(60.0, 15.0, 15.0, 10.0),
        congestion_reduction_percent: 0.0,
        include_construction: false,
        include_maintenance: false,
        include_indirect: false,
        ..Default::default()
    }
}

/// Verifies the daily reduction of a 10% car-to-bike shift on a 10000 vehicle/day corridor:
/// before = 15000 trips * 5 km * (70% * 0.251 + 15% * 0.046) = 13695 kg CO2e
/// after  = 15000 trips * 5 km * (60% * 0.251 + 15% * 0.046) = 11812.5 kg CO2e
#[test]
fn acceptance_daily_reduction() {
    let params = scenario();
    let (before, after) = emissions_breakdown(&params);

    let accepted_error = 1e-9;
    assert!(abs_difference(before.total(), 13695.0) / 13695.0 < accepted_error);
    assert!(abs_difference(after.total(), 11812.5) / 11812.5 < accepted_error);

    let results = compute_impacts(&params);
    let expected = before.total() - after.total();
    assert_eq!(results.ghg.daily_kg_co2e, expected);
    assert!(abs_difference(results.ghg.daily_kg_co2e, 1882.5) / 1882.5 < accepted_error);
}

#[test]
fn idempotence() {
    let params = ProjectParameters::default();
    let first = compute_impacts(&params);
    let second = compute_impacts(&params);
    assert_eq!(first, second);
    assert_eq!(
        first.total_lifetime_benefit_kg_co2e().to_bits(),
        second.total_lifetime_benefit_kg_co2e().to_bits()
    );
}

#[test]
fn zero_traffic() {
    let params = ProjectParameters {
        daily_traffic_vehicles: 0.0,
        include_construction: false,
        include_maintenance: false,
        ..Default::default()
    };
    let results = compute_impacts(&params);

    assert_eq!(results.ghg, GhgReduction::default());
    assert_eq!(results.air_quality.nox_kg_per_year, 0.0);
    assert_eq!(results.air_quality.voc_kg_per_year, 0.0);
    // only what trees and greenspace capture
    assert_eq!(
        results.air_quality.pm25_kg_per_year,
        params.tree_count * 0.1 + params.greenspace_area_sq_m * 0.0002
    );
    assert_eq!(results.health, HealthBenefits::default());

    // sequestration does not depend on traffic
    assert_eq!(
        results.sequestration,
        compute_impacts(&ProjectParameters::default()).sequestration
    );
}

#[test]
fn zero_traffic_without_green_infrastructure() {
    let params = ProjectParameters {
        daily_traffic_vehicles: 0.0,
        tree_count: 0.0,
        greenspace_area_sq_m: 0.0,
        ..Default::default()
    };
    let results = compute_impacts(&params);
    assert_eq!(results.air_quality, AirQualityImprovement::default());
    // embodied emissions remain
    assert_eq!(results.ghg.daily_kg_co2e, 0.0);
    assert_eq!(results.ghg.lifetime_kg_co2e, -(525000.0 + 600000.0));
}

#[test]
fn area_derivation() {
    let mut session = Session::default();
    session.update(|p| {
        p.length_km = 5.0;
        p.width_m = 3.0;
    });
    assert_eq!(session.parameters().area_sq_m(), 15000.0);

    session.update(|p| p.length_km = 2.0);
    assert_eq!(session.parameters().area_sq_m(), 6000.0);
}

#[test]
fn tree_monotonicity() {
    let params = ProjectParameters {
        region: Region::Northeast,
        tree_count: 50.0,
        ..Default::default()
    };
    assert_eq!(tree_sequestration(&params), 1090.0);

    let more = ProjectParameters {
        tree_count: 51.0,
        ..params.clone()
    };
    assert!(
        carbon_sequestration(&more).annual_kg_co2 > carbon_sequestration(&params).annual_kg_co2
    );
}

#[test]
fn redistribution_with_zero_others() {
    let split = ModalSplit::new(100.0, 0.0, 0.0, 0.0).redistribute(Mode::Car, 40.0);
    assert_eq!(split, ModalSplit::new(40.0, 20.0, 20.0, 20.0));
}

#[test]
fn split_invariant_over_session_edits() {
    let mut session = Session::default();
    for mode in Mode::ALL {
        for value in [0.0, 12.0, 33.0, 50.0, 87.0, 100.0] {
            session.edit_before(mode, value);
            session.edit_after(mode, 100.0 - value);
            let params = session.parameters();
            assert!(abs_difference(params.modal_split_before.sum(), 100.0) <= 1.0);
            assert!(abs_difference(params.modal_split_after.sum(), 100.0) <= 1.0);
        }
    }
}

#[test]
fn every_project_type_computes() {
    for project_type in ProjectType::ALL {
        for location in Location::ALL {
            for region in Region::ALL {
                let mut session = Session::default();
                session.set_project_type(project_type);
                session.update(|p| {
                    p.location = location;
                    p.region = region;
                });
                let results = session.results();
                assert!(results.total_lifetime_benefit_kg_co2e().is_finite());
            }
        }
    }
}

#[test]
fn hydrated_project() {
    let record: ProjectRecord = serde_json::from_str(
        r#"{
            "type": "brt-corridor",
            "length": 8,
            "width": 7,
            "location": "suburban",
            "region": "south",
            "dailyTraffic": 25000,
            "modalSplitBefore": {"car": 80, "transit": 12, "bike": 3, "walk": 5}
        }"#,
    )
    .unwrap();
    let session = Session::from_record(&record);
    let params = session.parameters();
    assert_eq!(params.area_sq_m(), 56000.0);
    assert!(!session.after_edited());
    // -15, +12, +1, +2
    assert_eq!(params.modal_split_after, ModalSplit::new(65.0, 24.0, 4.0, 7.0));

    let results = session.results();
    assert!(results.ghg.daily_kg_co2e > 0.0);
}
