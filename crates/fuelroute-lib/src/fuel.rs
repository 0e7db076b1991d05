//! Fuel-stop selection over a state corridor.
//!
//! The route is cut into consecutive legs bounded by the vehicle's maximum
//! range, each leg is attributed to a corridor state, and the cheapest
//! known station in that state supplies the fuel for the leg. Currency and
//! gallon figures are computed in decimal arithmetic and rounded to two
//! places, so per-stop costs always sum exactly to the plan total.

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::corridor::StateCorridor;
use crate::error::{Error, Result};
use crate::states::StateCode;

/// Fixed vehicle characteristics for a route-plan request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Maximum distance on a full tank, in miles.
    pub max_range_miles: f64,
    /// Fuel efficiency in miles per gallon.
    pub mpg: Decimal,
    /// Tank capacity in gallons. Informational only; partial fills are
    /// allowed, so it is never enforced as a purchase cap.
    pub tank_capacity_gallons: Decimal,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            max_range_miles: 500.0,
            mpg: Decimal::from(10),
            tank_capacity_gallons: Decimal::from(50),
        }
    }
}

impl VehicleProfile {
    /// Validate the profile.
    pub fn validate(&self) -> Result<()> {
        if !self.max_range_miles.is_finite() || self.max_range_miles <= 0.0 {
            return Err(Error::InvalidProfile {
                message: format!(
                    "max_range_miles must be finite and positive, got {}",
                    self.max_range_miles
                ),
            });
        }
        if self.mpg <= Decimal::ZERO {
            return Err(Error::InvalidProfile {
                message: format!("mpg must be positive, got {}", self.mpg),
            });
        }
        if self.tank_capacity_gallons <= Decimal::ZERO {
            return Err(Error::InvalidProfile {
                message: format!(
                    "tank_capacity_gallons must be positive, got {}",
                    self.tank_capacity_gallons
                ),
            });
        }
        Ok(())
    }
}

/// A fuel station record supplied by the external catalog. Treated as a
/// read-only fact; identity belongs to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStation {
    pub station_name: String,
    pub address: String,
    pub city: String,
    pub state: StateCode,
    pub price_per_gallon: Decimal,
}

/// A single planned fuel purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelStop {
    /// 1-based leg index.
    pub segment_index: usize,
    /// Distance covered since the previous stop or trip start.
    pub segment_distance_miles: Decimal,
    pub station: FuelStation,
    pub gallons_purchased: Decimal,
    pub cost_usd: Decimal,
}

/// Complete fuel plan for a route, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelPlan {
    pub stops: Vec<FuelStop>,
    pub total_distance_miles: Decimal,
    pub total_gallons: Decimal,
    pub total_cost_usd: Decimal,
}

impl FuelPlan {
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

/// Plan fuel stops for a trip of `total_distance_miles` along `corridor`.
///
/// `candidates_by_state` holds the single cheapest station known per
/// state, pre-selected by the external catalog. A trip that fits within
/// one tank yields a single leg; a zero-distance trip yields an empty
/// plan. Fails with [`Error::NoStationAvailable`] when no corridor state
/// has a candidate and at least one leg needs fuel.
pub fn plan_stops(
    total_distance_miles: f64,
    corridor: &StateCorridor,
    candidates_by_state: &HashMap<StateCode, FuelStation>,
    profile: &VehicleProfile,
) -> Result<FuelPlan> {
    profile.validate()?;

    if !total_distance_miles.is_finite() || total_distance_miles < 0.0 {
        return Err(Error::InvalidRoutingResult {
            message: format!(
                "total distance must be finite and non-negative, got {total_distance_miles}"
            ),
        });
    }

    // Normalize distances to two decimal places up front. Upstream
    // distances arrive as binary floats (100.55 is really 100.5499...),
    // and gallon rounding must behave as if the figure were exact.
    let total = decimal_miles(total_distance_miles)?;
    let range = decimal_miles(profile.max_range_miles)?;

    let mut stops = Vec::new();
    let mut total_gallons = Decimal::ZERO;
    let mut total_cost = Decimal::ZERO;

    let mut leg_start = Decimal::ZERO;
    let mut segment_index = 1;
    while leg_start < total {
        let leg_end = (leg_start + range).min(total);
        let leg_distance = leg_end - leg_start;

        let midpoint = (leg_start + leg_end) / Decimal::from(2);
        let owner_index = corridor_state_for_leg(midpoint, total, corridor);
        let station = select_station(corridor, owner_index, candidates_by_state).ok_or_else(
            || Error::NoStationAvailable {
                corridor: corridor.joined_codes(),
            },
        )?;

        let gallons = (leg_distance / profile.mpg).round_dp(2);
        let cost = (gallons * station.price_per_gallon).round_dp(2);
        total_gallons += gallons;
        total_cost += cost;

        stops.push(FuelStop {
            segment_index,
            segment_distance_miles: leg_distance,
            station: station.clone(),
            gallons_purchased: gallons,
            cost_usd: cost,
        });

        leg_start = leg_end;
        segment_index += 1;
    }

    Ok(FuelPlan {
        stops,
        total_distance_miles: total,
        total_gallons,
        total_cost_usd: total_cost,
    })
}

fn decimal_miles(miles: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(miles)
        .map(|value| value.round_dp(2))
        .ok_or_else(|| Error::InvalidRoutingResult {
            message: format!("distance {miles} is not representable as a decimal"),
        })
}

/// Map a leg midpoint onto a corridor index, assuming route distance is
/// uniformly distributed across corridor states.
///
/// This is the single place that assumption lives: a mileage-aware
/// replacement only needs to change this function.
fn corridor_state_for_leg(midpoint: Decimal, total: Decimal, corridor: &StateCorridor) -> usize {
    let scaled = midpoint / total * Decimal::from(corridor.len());
    let index = scaled.floor().to_usize().unwrap_or(0);
    index.min(corridor.len() - 1)
}

/// Pick the candidate station for a leg owned by `owner_index`.
///
/// Falls back to the nearest corridor state with a candidate, preferring
/// states already passed over states still ahead so the vehicle is never
/// planned past its range.
fn select_station<'a>(
    corridor: &StateCorridor,
    owner_index: usize,
    candidates_by_state: &'a HashMap<StateCode, FuelStation>,
) -> Option<&'a FuelStation> {
    let states = corridor.states();
    if let Some(station) = candidates_by_state.get(&states[owner_index]) {
        return Some(station);
    }

    for offset in 1..states.len() {
        if offset <= owner_index {
            if let Some(station) = candidates_by_state.get(&states[owner_index - offset]) {
                tracing::debug!(
                    owner = %states[owner_index],
                    fallback = %states[owner_index - offset],
                    "no candidate in owning state; using earlier corridor state"
                );
                return Some(station);
            }
        }
        if let Some(&state) = states.get(owner_index + offset) {
            if let Some(station) = candidates_by_state.get(&state) {
                tracing::debug!(
                    owner = %states[owner_index],
                    fallback = %state,
                    "no candidate in owning state; using later corridor state"
                );
                return Some(station);
            }
        }
    }

    None
}
