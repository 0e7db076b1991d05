//! Contiguous-USA state codes.
//!
//! Covers the 48 contiguous states plus DC. Alaska and Hawaii are outside
//! the corridor model (no land adjacency) and are deliberately absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Two-letter code for a contiguous US state or DC.
///
/// Variants are declared in lexical order so the derived `Ord` matches
/// lexical comparison of the codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StateCode {
    AL, AR, AZ, CA, CO, CT, DC, DE, FL, GA,
    IA, ID, IL, IN, KS, KY, LA, MA, MD, ME,
    MI, MN, MO, MS, MT, NC, ND, NE, NH, NJ,
    NM, NV, NY, OH, OK, OR, PA, RI, SC, SD,
    TN, TX, UT, VA, VT, WA, WI, WV, WY,
}

use StateCode::*;

/// Every contiguous state code plus DC, in lexical order.
pub const ALL_STATES: [StateCode; 49] = [
    AL, AR, AZ, CA, CO, CT, DC, DE, FL, GA,
    IA, ID, IL, IN, KS, KY, LA, MA, MD, ME,
    MI, MN, MO, MS, MT, NC, ND, NE, NH, NJ,
    NM, NV, NY, OH, OK, OR, PA, RI, SC, SD,
    TN, TX, UT, VA, VT, WA, WI, WV, WY,
];

impl StateCode {
    /// The two-letter abbreviation.
    pub fn as_str(self) -> &'static str {
        self.names().0
    }

    /// The full uppercase state name, e.g. `NEW YORK`.
    pub fn full_name(self) -> &'static str {
        self.names().1
    }

    fn names(self) -> (&'static str, &'static str) {
        match self {
            AL => ("AL", "ALABAMA"),
            AR => ("AR", "ARKANSAS"),
            AZ => ("AZ", "ARIZONA"),
            CA => ("CA", "CALIFORNIA"),
            CO => ("CO", "COLORADO"),
            CT => ("CT", "CONNECTICUT"),
            DC => ("DC", "DISTRICT OF COLUMBIA"),
            DE => ("DE", "DELAWARE"),
            FL => ("FL", "FLORIDA"),
            GA => ("GA", "GEORGIA"),
            IA => ("IA", "IOWA"),
            ID => ("ID", "IDAHO"),
            IL => ("IL", "ILLINOIS"),
            IN => ("IN", "INDIANA"),
            KS => ("KS", "KANSAS"),
            KY => ("KY", "KENTUCKY"),
            LA => ("LA", "LOUISIANA"),
            MA => ("MA", "MASSACHUSETTS"),
            MD => ("MD", "MARYLAND"),
            ME => ("ME", "MAINE"),
            MI => ("MI", "MICHIGAN"),
            MN => ("MN", "MINNESOTA"),
            MO => ("MO", "MISSOURI"),
            MS => ("MS", "MISSISSIPPI"),
            MT => ("MT", "MONTANA"),
            NC => ("NC", "NORTH CAROLINA"),
            ND => ("ND", "NORTH DAKOTA"),
            NE => ("NE", "NEBRASKA"),
            NH => ("NH", "NEW HAMPSHIRE"),
            NJ => ("NJ", "NEW JERSEY"),
            NM => ("NM", "NEW MEXICO"),
            NV => ("NV", "NEVADA"),
            NY => ("NY", "NEW YORK"),
            OH => ("OH", "OHIO"),
            OK => ("OK", "OKLAHOMA"),
            OR => ("OR", "OREGON"),
            PA => ("PA", "PENNSYLVANIA"),
            RI => ("RI", "RHODE ISLAND"),
            SC => ("SC", "SOUTH CAROLINA"),
            SD => ("SD", "SOUTH DAKOTA"),
            TN => ("TN", "TENNESSEE"),
            TX => ("TX", "TEXAS"),
            UT => ("UT", "UTAH"),
            VA => ("VA", "VIRGINIA"),
            VT => ("VT", "VERMONT"),
            WA => ("WA", "WASHINGTON"),
            WI => ("WI", "WISCONSIN"),
            WV => ("WV", "WEST VIRGINIA"),
            WY => ("WY", "WYOMING"),
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = Error;

    /// Parse either a two-letter code (`"ny"`) or a full state name
    /// (`"New York"`), case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        ALL_STATES
            .iter()
            .copied()
            .find(|state| normalized == state.as_str() || normalized == state.full_name())
            .ok_or(Error::UnknownState {
                name: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_full_names() {
        assert_eq!("ny".parse::<StateCode>().unwrap(), StateCode::NY);
        assert_eq!("New York".parse::<StateCode>().unwrap(), StateCode::NY);
        assert_eq!(
            " district of columbia ".parse::<StateCode>().unwrap(),
            StateCode::DC
        );
    }

    #[test]
    fn rejects_non_contiguous_states() {
        assert!("AK".parse::<StateCode>().is_err());
        assert!("Hawaii".parse::<StateCode>().is_err());
        assert!("ZZ".parse::<StateCode>().is_err());
    }

    #[test]
    fn derived_order_is_lexical() {
        for window in ALL_STATES.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[0].as_str() < window[1].as_str());
        }
    }

    #[test]
    fn full_names_round_trip() {
        for state in ALL_STATES {
            assert_eq!(state.full_name().parse::<StateCode>().unwrap(), state);
        }
    }
}
