use thiserror::Error;

/// Convenient result alias for the fuelroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an encoded polyline ends mid-coordinate or contains a
    /// byte outside the printable encoding alphabet.
    #[error("malformed polyline at byte {offset}: {reason}")]
    MalformedPolyline { offset: usize, reason: String },

    /// Raised when a decoded coordinate falls outside valid WGS84 bounds.
    #[error("decoded coordinate out of range: lon {lon}, lat {lat}")]
    CoordinateOutOfRange { lon: f64, lat: f64 },

    /// Raised when a state name or code is outside the contiguous-USA set.
    #[error("unknown state: {name}")]
    UnknownState { name: String },

    /// Raised when no corridor could be found between two states. The
    /// adjacency graph is connected, so this indicates a data bug rather
    /// than a user mistake.
    #[error("no state path found between {start} and {goal}")]
    NoPath { start: String, goal: String },

    /// Raised when the station catalog has no candidate for any state in
    /// the corridor.
    #[error("no fuel station available in corridor {corridor}")]
    NoStationAvailable { corridor: String },

    /// Raised when a computed fuel plan lacks any stops where at least one
    /// was required.
    #[error("fuel plan was empty")]
    EmptyFuelPlan,

    /// Raised when vehicle profile data fails validation.
    #[error("invalid vehicle profile: {message}")]
    InvalidProfile { message: String },

    /// Raised when routing-result input fails validation.
    #[error("invalid routing result: {message}")]
    InvalidRoutingResult { message: String },
}
