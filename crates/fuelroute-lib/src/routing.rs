//! Trip planning orchestrator.
//!
//! Ties the pipeline together: decode the upstream polyline, simplify the
//! geometry, build the state corridor, query the station catalog, and run
//! the fuel-stop optimizer. Each step is pure; the catalog lookup is the
//! only collaborator boundary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::StationCatalog;
use crate::corridor::{build_corridor, StateCorridor};
use crate::error::Result;
use crate::fuel::{plan_stops, FuelPlan, VehicleProfile};
use crate::geo::RouteGeometry;
use crate::polyline;
use crate::simplify::{simplify, DEFAULT_TOLERANCE};
use crate::states::StateCode;

/// Raw routing result supplied by the upstream routing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingResult {
    /// Total driving distance in miles.
    pub total_distance_miles: f64,
    /// Estimated driving time in hours, when known.
    #[serde(default)]
    pub duration_hours: Option<f64>,
    /// Route geometry as a Google-style encoded polyline.
    pub encoded_polyline: String,
    /// States the routing result claims the route crosses. May be
    /// incomplete or unordered; used only to grade the corridor.
    #[serde(default)]
    pub hinted_states: Vec<StateCode>,
}

/// A complete route-plan request.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub routing: RoutingResult,
    pub start_state: StateCode,
    pub end_state: StateCode,
    pub profile: VehicleProfile,
    /// Simplification tolerance in degrees.
    pub tolerance: f64,
}

impl TripRequest {
    /// Build a request with the default vehicle profile and tolerance.
    pub fn new(routing: RoutingResult, start_state: StateCode, end_state: StateCode) -> Self {
        Self {
            routing,
            start_state,
            end_state,
            profile: VehicleProfile::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Everything the assembling layer needs for one planned trip.
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    /// Simplified route geometry, start-to-end order.
    pub geometry: RouteGeometry,
    /// The simplified geometry re-encoded for transport.
    pub simplified_polyline: String,
    pub corridor: StateCorridor,
    pub fuel_plan: FuelPlan,
    pub profile: VehicleProfile,
    pub duration_hours: Option<f64>,
}

/// Plan a trip from a raw routing result and a station catalog.
pub fn plan_trip(request: &TripRequest, catalog: &dyn StationCatalog) -> Result<TripPlan> {
    let decoded = polyline::decode(&request.routing.encoded_polyline)?;
    let simplified = simplify(&decoded, request.tolerance);
    tracing::debug!(
        decoded = decoded.len(),
        simplified = simplified.len(),
        tolerance = request.tolerance,
        "simplified route geometry"
    );

    let hinted: HashSet<StateCode> = request.routing.hinted_states.iter().copied().collect();
    let corridor = build_corridor(request.start_state, request.end_state, &hinted)?;

    let candidates = catalog.cheapest_per_state(corridor.states())?;
    let fuel_plan = plan_stops(
        request.routing.total_distance_miles,
        &corridor,
        &candidates,
        &request.profile,
    )?;

    let simplified_polyline = polyline::encode(&simplified);
    Ok(TripPlan {
        geometry: RouteGeometry::new(simplified),
        simplified_polyline,
        corridor,
        fuel_plan,
        profile: request.profile,
        duration_hours: request.routing.duration_hours,
    })
}
