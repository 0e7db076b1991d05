//! Shared pieces of the fuelroute CLI, kept in a library crate so
//! integration tests can exercise them directly.

pub mod stations;
