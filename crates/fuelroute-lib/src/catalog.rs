//! Station catalog collaborator seam.
//!
//! The core never queries storage itself; it asks a [`StationCatalog`] for
//! a snapshot of the cheapest known station per state. Retry and caching
//! policy belong to the implementor.

use std::collections::HashMap;

use crate::error::Result;
use crate::fuel::FuelStation;
use crate::states::StateCode;

/// Supplies the cheapest known fuel station per state.
pub trait StationCatalog {
    /// Return the cheapest station for each of `states` that has one.
    /// States without any known station are simply absent from the map.
    fn cheapest_per_state(&self, states: &[StateCode]) -> Result<HashMap<StateCode, FuelStation>>;
}

/// In-memory catalog over a flat station list. Backs the CLI's CSV
/// catalog and test fixtures.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    stations: Vec<FuelStation>,
}

impl InMemoryCatalog {
    pub fn new(stations: Vec<FuelStation>) -> Self {
        Self { stations }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationCatalog for InMemoryCatalog {
    fn cheapest_per_state(&self, states: &[StateCode]) -> Result<HashMap<StateCode, FuelStation>> {
        let mut cheapest: HashMap<StateCode, FuelStation> = HashMap::new();
        for station in &self.stations {
            if !states.contains(&station.state) {
                continue;
            }
            match cheapest.get(&station.state) {
                Some(existing) if existing.price_per_gallon <= station.price_per_gallon => {}
                _ => {
                    cheapest.insert(station.state, station.clone());
                }
            }
        }
        Ok(cheapest)
    }
}
