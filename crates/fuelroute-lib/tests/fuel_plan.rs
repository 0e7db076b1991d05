mod common;

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::station;
use fuelroute_lib::{build_corridor, plan_stops, Error, StateCode, VehicleProfile};

fn cross_country_candidates() -> HashMap<StateCode, fuelroute_lib::FuelStation> {
    HashMap::from([
        (StateCode::NY, station("Empire Fuel", StateCode::NY, 350)),
        (StateCode::PA, station("Keystone Stop", StateCode::PA, 330)),
        (StateCode::OH, station("Buckeye Travel", StateCode::OH, 320)),
        (StateCode::KY, station("Bluegrass Gas", StateCode::KY, 310)),
        (StateCode::MO, station("Gateway Fuel", StateCode::MO, 300)),
        (StateCode::KS, station("Prairie Pump", StateCode::KS, 290)),
        (StateCode::CO, station("Rockies Fuel", StateCode::CO, 335)),
        (StateCode::AZ, station("Desert Stop", StateCode::AZ, 340)),
        (StateCode::CA, station("Pacific Fuel", StateCode::CA, 400)),
    ])
}

#[test]
fn cross_country_plan_matches_expected_legs_and_totals() {
    let corridor = build_corridor(StateCode::NY, StateCode::CA, &HashSet::new()).unwrap();
    let plan = plan_stops(
        2797.18,
        &corridor,
        &cross_country_candidates(),
        &VehicleProfile::default(),
    )
    .unwrap();

    // Five full 500-mile legs plus one 297.18-mile remainder.
    assert_eq!(plan.stop_count(), 6);
    for stop in &plan.stops[..5] {
        assert_eq!(stop.segment_distance_miles, dec!(500));
        assert_eq!(stop.gallons_purchased, dec!(50.00));
    }
    assert_eq!(plan.stops[5].segment_distance_miles, dec!(297.18));
    assert_eq!(plan.stops[5].gallons_purchased, dec!(29.72));

    assert_eq!(plan.total_gallons, dec!(279.72));

    // Each leg's midpoint lands in the proportionally owning state.
    let chosen: Vec<StateCode> = plan.stops.iter().map(|stop| stop.station.state).collect();
    assert_eq!(
        chosen,
        vec![
            StateCode::NY,
            StateCode::OH,
            StateCode::MO,
            StateCode::KS,
            StateCode::AZ,
            StateCode::CA,
        ]
    );

    // Cost figures stay consistent to the cent.
    let recomputed: Decimal = plan
        .stops
        .iter()
        .map(|stop| (stop.gallons_purchased * stop.station.price_per_gallon).round_dp(2))
        .sum();
    assert_eq!(plan.total_cost_usd, recomputed);
    assert_eq!(plan.total_cost_usd, dec!(918.88));
}

#[test]
fn short_trip_is_a_single_leg() {
    let corridor = build_corridor(StateCode::NY, StateCode::NJ, &HashSet::new()).unwrap();
    let candidates = HashMap::from([(StateCode::NJ, station("Garden Fuel", StateCode::NJ, 300))]);
    let plan = plan_stops(100.55, &corridor, &candidates, &VehicleProfile::default()).unwrap();

    assert_eq!(plan.stop_count(), 1);
    assert_eq!(plan.stops[0].segment_distance_miles, dec!(100.55));
    assert_eq!(plan.stops[0].gallons_purchased, dec!(10.06));
    assert_eq!(plan.stops[0].cost_usd, dec!(30.18));
    assert_eq!(plan.total_cost_usd, dec!(30.18));
}

#[test]
fn exact_range_trip_has_no_remainder_leg() {
    let corridor = build_corridor(StateCode::NY, StateCode::PA, &HashSet::new()).unwrap();
    let candidates = HashMap::from([(StateCode::PA, station("Keystone", StateCode::PA, 320))]);
    let plan = plan_stops(500.0, &corridor, &candidates, &VehicleProfile::default()).unwrap();

    assert_eq!(plan.stop_count(), 1);
    assert_eq!(plan.stops[0].segment_distance_miles, dec!(500));
    assert_eq!(plan.stops[0].gallons_purchased, dec!(50.00));
}

#[test]
fn empty_catalog_fails_without_partial_plan() {
    let corridor = build_corridor(StateCode::NY, StateCode::CA, &HashSet::new()).unwrap();
    let result = plan_stops(
        2797.18,
        &corridor,
        &HashMap::new(),
        &VehicleProfile::default(),
    );
    assert!(matches!(result, Err(Error::NoStationAvailable { .. })));
}

#[test]
fn missing_owner_state_falls_back_along_the_corridor() {
    // NY -> OH corridor is NY > PA > OH; only NY has a candidate.
    let corridor = build_corridor(StateCode::NY, StateCode::OH, &HashSet::new()).unwrap();
    let candidates = HashMap::from([(StateCode::NY, station("Empire Fuel", StateCode::NY, 350))]);
    let plan = plan_stops(1200.0, &corridor, &candidates, &VehicleProfile::default()).unwrap();

    assert_eq!(plan.stop_count(), 3);
    for stop in &plan.stops {
        assert_eq!(stop.station.state, StateCode::NY);
    }
}

#[test]
fn segment_indices_are_one_based_and_sequential() {
    let corridor = build_corridor(StateCode::NY, StateCode::CA, &HashSet::new()).unwrap();
    let plan = plan_stops(
        1501.0,
        &corridor,
        &cross_country_candidates(),
        &VehicleProfile::default(),
    )
    .unwrap();
    let indices: Vec<usize> = plan.stops.iter().map(|stop| stop.segment_index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
}

#[test]
fn custom_profile_changes_leg_math() {
    let corridor = build_corridor(StateCode::NY, StateCode::PA, &HashSet::new()).unwrap();
    let candidates = HashMap::from([(StateCode::PA, station("Keystone", StateCode::PA, 400))]);
    let profile = VehicleProfile {
        max_range_miles: 300.0,
        mpg: dec!(6),
        tank_capacity_gallons: dec!(60),
    };
    let plan = plan_stops(450.0, &corridor, &candidates, &profile).unwrap();

    assert_eq!(plan.stop_count(), 2);
    assert_eq!(plan.stops[0].gallons_purchased, dec!(50.00));
    assert_eq!(plan.stops[1].gallons_purchased, dec!(25.00));
}
