//! Station catalog loading from an OPIS-style CSV export.
//!
//! Expected columns: `Truckstop Name`, `Address`, `City`, `State`,
//! `Retail Price`. Rows missing any required field are skipped; duplicate
//! station/state pairs keep the highest listed price so the resulting
//! catalog never understates cost.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

use fuelroute_lib::{FuelStation, InMemoryCatalog, StateCode};

#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(rename = "Truckstop Name")]
    station_name: String,
    #[serde(rename = "Address", default)]
    address: String,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Retail Price")]
    retail_price: String,
}

/// Load a station catalog from `path`.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open station file {}", path.display()))?;

    let mut stations: HashMap<(String, StateCode), FuelStation> = HashMap::new();
    let mut skipped = 0usize;

    for (row_number, row) in reader.deserialize::<StationRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                tracing::warn!(row = row_number + 1, %error, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        let name = row.station_name.trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        // Non-contiguous states (AK, HI) fall out here as well.
        let Ok(state) = row.state.trim().parse::<StateCode>() else {
            skipped += 1;
            continue;
        };
        let Ok(price) = row.retail_price.trim().parse::<Decimal>() else {
            skipped += 1;
            continue;
        };

        let key = (name.to_string(), state);
        match stations.get_mut(&key) {
            Some(existing) => {
                if price > existing.price_per_gallon {
                    existing.price_per_gallon = price;
                }
            }
            None => {
                stations.insert(
                    key,
                    FuelStation {
                        station_name: name.to_string(),
                        address: row.address.trim().to_string(),
                        city: row.city.trim().to_string(),
                        state,
                        price_per_gallon: price,
                    },
                );
            }
        }
    }

    let catalog = InMemoryCatalog::new(stations.into_values().collect());
    tracing::info!(
        loaded = catalog.len(),
        skipped,
        "loaded station catalog from {}",
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelroute_lib::StationCatalog;
    use std::io::Write as _;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_stations_and_keeps_highest_duplicate_price() {
        let file = write_csv(
            "Truckstop Name,Address,City,State,Retail Price\n\
             Flying J,1 Exit Rd,Toledo,OH,3.19\n\
             Flying J,1 Exit Rd,Toledo,OH,3.39\n\
             Pilot,2 Exit Rd,Reno,NV,3.99\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let cheapest = catalog.cheapest_per_state(&[StateCode::OH]).unwrap();
        assert_eq!(
            cheapest[&StateCode::OH].price_per_gallon,
            Decimal::new(339, 2)
        );
    }

    #[test]
    fn skips_incomplete_and_non_contiguous_rows() {
        let file = write_csv(
            "Truckstop Name,Address,City,State,Retail Price\n\
             ,1 Rd,Town,OH,3.19\n\
             Northern,1 Rd,Anchorage,AK,4.59\n\
             Good,2 Rd,Austin,TX,2.99\n",
        );
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
