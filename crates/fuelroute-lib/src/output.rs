//! Response assembly for planned trips.
//!
//! Pure reshaping of a [`TripPlan`] into the serialisable summary the API
//! layer returns, plus a plain-text rendering for terminal consumers. No
//! computation happens here beyond string formatting.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::fuel::FuelStop;
use crate::geo::GeoPoint;
use crate::routing::TripPlan;

/// Trip-level headline figures.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOverview {
    pub start_state: String,
    pub end_state: String,
    pub total_distance_miles: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration_hours: Option<f64>,
    /// Full state names joined with `>` in traversal order.
    pub states_traveled: String,
    pub number_of_fuel_stops: usize,
}

/// Customer-facing cost summary.
#[derive(Debug, Clone, Serialize)]
pub struct FuelCostSummary {
    pub total_fuel_cost_usd: Decimal,
    /// Whole-trip gallons figure (`total distance / mpg`), independent of
    /// the per-stop sum.
    pub total_gallons_needed: Decimal,
    pub vehicle_mpg: Decimal,
    pub max_range_miles: f64,
    pub tank_capacity_gallons: Decimal,
    /// One running-total line per stop.
    pub fuel_stops_breakdown: Vec<String>,
}

/// Geometry payload for map rendering.
#[derive(Debug, Clone, Serialize)]
pub struct MapData {
    /// Simplified route as lon/lat points.
    pub route_points: Vec<GeoPoint>,
    /// The same geometry re-encoded as a polyline.
    pub encoded_polyline: String,
}

/// Full response shape: developer detail plus customer summary.
#[derive(Debug, Clone, Serialize)]
pub struct TripSummary {
    pub route_summary: RouteOverview,
    pub fuel_cost_summary: FuelCostSummary,
    pub detailed_fuel_stops: Vec<FuelStop>,
    /// One sentence per stop, customer wording.
    pub route_plan_explanation: Vec<String>,
    pub map_data: MapData,
}

impl TripSummary {
    /// Assemble the summary shapes from a planned trip.
    pub fn from_plan(plan: &TripPlan) -> Result<Self> {
        if plan.fuel_plan.stops.is_empty() && plan.fuel_plan.total_distance_miles > Decimal::ZERO
        {
            return Err(Error::EmptyFuelPlan);
        }

        let states_traveled = plan
            .corridor
            .states()
            .iter()
            .map(|state| state.full_name())
            .collect::<Vec<_>>()
            .join(" > ");

        let mut breakdown = Vec::with_capacity(plan.fuel_plan.stops.len());
        let mut explanation = Vec::with_capacity(plan.fuel_plan.stops.len());
        let mut miles_so_far = Decimal::ZERO;
        for stop in &plan.fuel_plan.stops {
            miles_so_far += stop.segment_distance_miles;
            breakdown.push(format!(
                "After {:.0} mi: {}, {} (${:.2})",
                miles_so_far,
                stop.station.state.full_name(),
                stop.station.station_name,
                stop.cost_usd,
            ));
            explanation.push(format!(
                "Drive {:.2} miles, stop in {} at {}, buy {:.2} gallons for ${:.2}.",
                stop.segment_distance_miles,
                stop.station.state.full_name(),
                stop.station.station_name,
                stop.gallons_purchased,
                stop.cost_usd,
            ));
        }

        let total_gallons_needed =
            (plan.fuel_plan.total_distance_miles / plan.profile.mpg).round_dp(2);

        Ok(Self {
            route_summary: RouteOverview {
                start_state: plan.corridor.start().full_name().to_string(),
                end_state: plan.corridor.end().full_name().to_string(),
                total_distance_miles: plan.fuel_plan.total_distance_miles,
                estimated_duration_hours: plan.duration_hours.map(|hours| {
                    (hours * 100.0).round() / 100.0
                }),
                states_traveled,
                number_of_fuel_stops: plan.fuel_plan.stop_count(),
            },
            fuel_cost_summary: FuelCostSummary {
                total_fuel_cost_usd: plan.fuel_plan.total_cost_usd,
                total_gallons_needed,
                vehicle_mpg: plan.profile.mpg,
                max_range_miles: plan.profile.max_range_miles,
                tank_capacity_gallons: plan.profile.tank_capacity_gallons,
                fuel_stops_breakdown: breakdown,
            },
            detailed_fuel_stops: plan.fuel_plan.stops.clone(),
            route_plan_explanation: explanation,
            map_data: MapData {
                route_points: plan.geometry.points().to_vec(),
                encoded_polyline: plan.simplified_polyline.clone(),
            },
        })
    }

    /// Render the summary as plain text.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Trip: {} -> {} ({} miles, {} stops)",
            self.route_summary.start_state,
            self.route_summary.end_state,
            self.route_summary.total_distance_miles,
            self.route_summary.number_of_fuel_stops,
        );
        if let Some(hours) = self.route_summary.estimated_duration_hours {
            let _ = writeln!(buffer, "Estimated driving time: {hours} hours");
        }
        let _ = writeln!(buffer, "States: {}", self.route_summary.states_traveled);
        for line in &self.route_plan_explanation {
            let _ = writeln!(buffer, "  {line}");
        }
        let _ = writeln!(
            buffer,
            "Total: {:.2} gallons, ${:.2}",
            self.fuel_cost_summary.total_gallons_needed,
            self.fuel_cost_summary.total_fuel_cost_usd,
        );
        buffer
    }
}
