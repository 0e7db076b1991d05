//! Fuelroute library entry points.
//!
//! This crate turns a raw routing result (distance, duration, encoded
//! polyline) and a fuel-station catalog into a renderable route geometry,
//! an ordered state corridor, and a minimum-cost fuel-stop plan. Consumers
//! (CLI, API layers) should depend on the functions exported here instead
//! of reimplementing behavior; network and storage concerns stay outside.

#![deny(warnings)]

pub mod catalog;
pub mod corridor;
pub mod error;
pub mod fuel;
pub mod geo;
pub mod graph;
pub mod output;
pub mod polyline;
pub mod routing;
pub mod simplify;
pub mod states;

pub use catalog::{InMemoryCatalog, StationCatalog};
pub use corridor::{build_corridor, StateCorridor};
pub use error::{Error, Result};
pub use fuel::{plan_stops, FuelPlan, FuelStation, FuelStop, VehicleProfile};
pub use geo::{GeoPoint, RouteGeometry};
pub use graph::StateGraph;
pub use output::TripSummary;
pub use routing::{plan_trip, RoutingResult, TripPlan, TripRequest};
pub use simplify::{simplify, DEFAULT_TOLERANCE};
pub use states::{StateCode, ALL_STATES};
