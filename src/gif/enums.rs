//! Enumerated attribute types of the GIF model.
//!
//! Member names follow the GIF vocabulary; serialized forms use the
//! upper-case spelling the exchange format uses.

use serde::{Deserialize, Serialize};

/// Document variant / process a container belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Subset {
    /// Valuation data (process 5.7)
    #[default]
    #[serde(rename = "S5.7")]
    S5_7,
}

impl Subset {
    /// Dotted process label, e.g. `"5.7"`
    pub fn label(self) -> &'static str {
        match self {
            Subset::S5_7 => "5.7",
        }
    }
}

/// Unit used for area figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaMeasurement {
    /// Square metres
    Sqm,
    /// Square feet
    Sqft,
    /// Tsubo / pyeong (about 3.3 m²)
    Tsubo,
    /// Unit not given
    NotSpecified,
}

/// Construction state of the appraised object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstructionPhase {
    /// Construction finished
    Completed,
    /// Under construction
    InCompletion,
    /// Planned, not yet started
    Planned,
    /// Any other state
    Other,
}

/// Kind of use of an object or area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UseType {
    /// Office
    Office,
    /// Retail
    Retail,
    /// Industry, storage and halls
    Industry,
    /// Gastronomy
    Gastronomy,
    /// Hotel
    Hotel,
    /// Residential
    Residential,
    /// Leisure
    Leisure,
    /// Parking (indoor or outdoor)
    Parking,
    /// Other use (archive, cellar, ...)
    Other,
    /// Use not given
    NotSpecified,
}

/// Purpose of a valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationType1 {
    /// Valuation for a fund
    Fund,
    /// Private valuation
    Private,
    /// Court-ordered valuation
    Court,
    /// Valuation commissioned by a third person
    ThirdPerson,
}

/// Occasion of a valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationType2 {
    /// Occasion unknown
    Unknown,
    /// First valuation of the object
    FirstValuation,
    /// Repeated valuation
    Revaluation,
    /// Market valuation report
    MarketValuationReport,
}

/// Legal form of ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipType {
    /// Sole ownership of land and building
    Freehold,
    /// Hereditary building right / ground lease
    Leasehold,
    /// Partial or co-ownership
    PartOwnership,
    /// Any other form
    Other,
}

/// Location class of a retail object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetailLocationType {
    /// Prime high-street location
    HighStreet,
    /// Shopping centre
    ShoppingCentre,
    /// Out-of-town retail park
    RetailPark,
    /// Any other location
    Other,
}

/// Structural condition of the object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectCondition {
    /// Good condition
    Good,
    /// Average condition
    Average,
    /// Poor condition
    Poor,
}

/// Quality of the interior fit-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteriorQuality {
    /// High quality
    High,
    /// Medium quality
    Medium,
    /// Simple quality
    Simple,
}
