//! Field converters from the BIIS vocabulary to GIF types
//!
//! The BIIS tokens matched here are the wire contract and are compared
//! exactly (case-sensitive) unless noted otherwise. Every converter has a
//! defined result for unrecognized input:
//!
//! - enumerations either fall back to a "not specified" member or yield
//!   `None`, and never fail
//! - decimals, dates and currencies fail with a [`ConvertError`]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::error::ConvertError;
use crate::gif::{
    AreaMeasurement, ConstructionPhase, Country, Currency, InteriorQuality, ObjectCondition,
    OwnershipType, RetailLocationType, UseType, ValuationType1, ValuationType2,
};

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

impl AreaMeasurement {
    /// Map a BIIS area unit code
    pub fn from_biis(token: &str) -> Option<Self> {
        match token {
            "sqft" => Some(AreaMeasurement::Sqft),
            "qm" => Some(AreaMeasurement::Sqm),
            "tsubo" | "pyeong" => Some(AreaMeasurement::Tsubo),
            _ => None,
        }
    }
}

impl ConstructionPhase {
    /// Map a BIIS state-of-completion code
    pub fn from_biis(token: &str) -> Option<Self> {
        match token {
            "F" => Some(ConstructionPhase::Completed),
            "I" => Some(ConstructionPhase::InCompletion),
            "P" => Some(ConstructionPhase::Planned),
            "0" => Some(ConstructionPhase::Other),
            _ => None,
        }
    }
}

impl ValuationType1 {
    /// Map a BIIS `RebaseType1` token
    pub fn from_biis(token: &str) -> Option<Self> {
        match token {
            "Fondsgutachten" => Some(ValuationType1::Fund),
            "Privatgutachten" => Some(ValuationType1::Private),
            "Gerichtsgutachten" => Some(ValuationType1::Court),
            "Fremdgutachten" => Some(ValuationType1::ThirdPerson),
            _ => None,
        }
    }
}

impl ValuationType2 {
    /// Map a BIIS `RebaseType2` code
    pub fn from_biis(token: &str) -> Option<Self> {
        match token {
            "U" => Some(ValuationType2::Unknown),
            "E" => Some(ValuationType2::FirstValuation),
            "N" => Some(ValuationType2::Revaluation),
            "V" => Some(ValuationType2::MarketValuationReport),
            _ => None,
        }
    }
}

impl UseType {
    /// Map a BIIS type-of-use token
    pub fn from_biis(token: &str) -> Option<Self> {
        match token {
            "Buero" => Some(UseType::Office),
            "Handel" => Some(UseType::Retail),
            "Industrie(Lager,Hallen)" => Some(UseType::Industry),
            "Keller/Archiv" => Some(UseType::Other),
            "Gastronomie" => Some(UseType::Gastronomy),
            "Hotel" => Some(UseType::Hotel),
            "Wohnen" => Some(UseType::Residential),
            "Freizeit" => Some(UseType::Leisure),
            "Garage/TG" | "Aussenstellplaetze" => Some(UseType::Parking),
            "unbekannt" => Some(UseType::NotSpecified),
            _ => None,
        }
    }
}

impl Country {
    /// Map a BIIS country code; blank and unknown codes yield `None`
    pub fn from_biis(token: &str) -> Option<Self> {
        token.trim().parse().ok()
    }
}

// The next four types have no BIIS mapping yet. The legacy codes `U`, `E`,
// `N` and `V` are accepted and yield `None` like any other input.

impl OwnershipType {
    /// Map a BIIS `TypeOfOwnership` code (no code is mapped)
    pub fn from_biis(_token: &str) -> Option<Self> {
        None
    }
}

impl RetailLocationType {
    /// Map a BIIS `LocationQuality` code (no code is mapped)
    pub fn from_biis(_token: &str) -> Option<Self> {
        None
    }
}

impl ObjectCondition {
    /// Map a BIIS `StructuralCondition` code (no code is mapped)
    pub fn from_biis(_token: &str) -> Option<Self> {
        None
    }
}

impl InteriorQuality {
    /// Map a BIIS `FitOutQuality` code (no code is mapped)
    pub fn from_biis(_token: &str) -> Option<Self> {
        None
    }
}

/// Area unit; unknown or absent input yields [`AreaMeasurement::NotSpecified`]
pub fn area_measurement(token: Option<&str>) -> AreaMeasurement {
    token
        .and_then(AreaMeasurement::from_biis)
        .unwrap_or(AreaMeasurement::NotSpecified)
}

/// Decimal number; `None` in, `None` out
pub fn decimal(token: Option<&str>) -> Result<Option<f64>, ConvertError> {
    match token {
        Some(text) => Ok(Some(text.trim().parse::<f64>()?)),
        None => Ok(None),
    }
}

/// Case-insensitive `true` / `false`; anything else yields `None`
pub fn boolean(token: Option<&str>) -> Option<bool> {
    let token = token?;
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Construction phase; unknown input yields `None`
pub fn construction_phase(token: Option<&str>) -> Option<ConstructionPhase> {
    token.and_then(ConstructionPhase::from_biis)
}

/// Valuation purpose; unknown input yields `None`
pub fn valuation_type1(token: Option<&str>) -> Option<ValuationType1> {
    token.and_then(ValuationType1::from_biis)
}

/// Valuation occasion; unknown input yields `None`
pub fn valuation_type2(token: Option<&str>) -> Option<ValuationType2> {
    token.and_then(ValuationType2::from_biis)
}

/// Type of use; unknown or absent input yields [`UseType::NotSpecified`]
pub fn use_type(token: Option<&str>) -> UseType {
    token
        .and_then(UseType::from_biis)
        .unwrap_or(UseType::NotSpecified)
}

/// Country code; blank, absent and unknown input yields `None`
pub fn country(token: Option<&str>) -> Option<Country> {
    token.and_then(Country::from_biis)
}

/// Ownership type; always `None`
pub fn ownership_type(token: Option<&str>) -> Option<OwnershipType> {
    token.and_then(OwnershipType::from_biis)
}

/// Retail location type; always `None`
pub fn retail_location_type(token: Option<&str>) -> Option<RetailLocationType> {
    token.and_then(RetailLocationType::from_biis)
}

/// Structural condition; always `None`
pub fn condition(token: Option<&str>) -> Option<ObjectCondition> {
    token.and_then(ObjectCondition::from_biis)
}

/// Interior quality; always `None`
pub fn interior_quality(token: Option<&str>) -> Option<InteriorQuality> {
    token.and_then(InteriorQuality::from_biis)
}

/// ISO 4217 currency code
pub fn currency(text: &str) -> Result<Currency, ConvertError> {
    text.trim()
        .parse()
        .map_err(|_| ConvertError::UnknownCurrency(text.to_string()))
}

/// ISO-8601 calendar date.
///
/// Accepts `YYYY-MM-DD`, the reduced forms `YYYY-MM` and `YYYY` (first day
/// of the period) and a date-time whose time part is dropped.
pub fn date(text: &str) -> Result<NaiveDate, ConvertError> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }
    if text.contains('T') {
        return parse_date_time(text)
            .map(|dt| dt.date())
            .ok_or_else(|| ConvertError::InvalidDate(text.to_string()));
    }
    reduced_date(text).ok_or_else(|| ConvertError::InvalidDate(text.to_string()))
}

/// ISO-8601 local date-time; a bare date means midnight
pub fn date_time(text: &str) -> Result<NaiveDateTime, ConvertError> {
    let text = text.trim();
    if let Some(dt) = parse_date_time(text) {
        return Ok(dt);
    }
    if !text.contains('T') {
        if let Ok(date) = date(text) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }
    Err(ConvertError::InvalidDateTime(text.to_string()))
}

fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

fn reduced_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let year = parts.next().filter(|y| is_digits(y, 4))?.parse().ok()?;
    match (parts.next(), parts.next()) {
        (None, _) => NaiveDate::from_ymd_opt(year, 1, 1),
        (Some(month), None) if is_digits(month, 2) => {
            NaiveDate::from_ymd_opt(year, month.parse().ok()?, 1)
        }
        _ => None,
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
