use rust_decimal::Decimal;

use fuelroute_lib::{FuelStation, StateCode};

/// Build a station fixture priced in cents per gallon.
pub fn station(name: &str, state: StateCode, price_cents: i64) -> FuelStation {
    FuelStation {
        station_name: name.to_string(),
        address: format!("{} Interstate Dr", price_cents),
        city: "Testville".to_string(),
        state,
        price_per_gallon: Decimal::new(price_cents, 2),
    }
}

/// One station per state, all priced identically.
pub fn uniform_candidates(
    states: &[StateCode],
    price_cents: i64,
) -> std::collections::HashMap<StateCode, FuelStation> {
    states
        .iter()
        .map(|&state| (state, station(&format!("{state} Stop"), state, price_cents)))
        .collect()
}
