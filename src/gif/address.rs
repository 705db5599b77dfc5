use serde::{Deserialize, Serialize};

use super::Country;

/// Location of an appraised object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street and house number
    pub street: Option<String>,

    /// Postal code
    pub zip: Option<String>,

    /// City / town
    pub city: Option<String>,

    /// Country code
    pub country: Option<Country>,

    /// Free-text designation of the location
    pub label: Option<String>,

    /// WGS84 latitude in decimal degrees
    pub latitude: Option<f64>,

    /// WGS84 longitude in decimal degrees
    pub longitude: Option<f64>,
}

impl Address {
    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
