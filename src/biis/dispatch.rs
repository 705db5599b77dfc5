//! Path-keyed dispatch table
//!
//! Each entry maps a canonical element path to a [`FieldAction`] naming the
//! GIF field the element's text is written to. The converter applied is
//! implied by the target field. Paths without an entry are skipped, so
//! documents carrying elements unknown to this table decode unchanged.

use std::collections::HashMap;

use super::paths;

/// Target of a mapped element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldAction {
    /// Element is observed and discarded
    Ignore,

    /// `Meta.created` (date-time)
    Created,
    /// `Valuation.expert_id`
    ExpertId,
    /// `Valuation.expert_name`
    ExpertName,

    /// `Valuation.area_measurement`
    AreaMeasurement,
    /// `Address.street`
    Street,
    /// `Address.zip`
    PostCode,
    /// `Address.city`
    City,
    /// `Address.country`; blank text leaves the field untouched
    Country,
    /// `Address.label`, copied to `Property.label`
    AddressLabel,
    /// `Valuation.owner`
    Owner,
    /// `Property.object_id_sender` and `object_id_receiver`
    ObjectId,
    /// `Address.longitude` (decimal)
    Longitude,
    /// `Address.latitude` (decimal)
    Latitude,

    /// `Valuation.currency`
    Currency,
    /// `Valuation.use_type_secondary_share` (decimal)
    UseTypeSecondaryShare,
    /// `Valuation.use_type_primary_share` (decimal)
    UseTypePrimaryShare,
    /// `Valuation.ground_lease` (boolean)
    GroundLease,
    /// `Valuation.maintenance_backlog` (boolean)
    MaintenanceBacklog,
    /// `Valuation.single_tenant` (boolean)
    SingleTenant,
    /// `Valuation.exchange_rate_date`
    ExchangeRateDate,
    /// `Valuation.valid_from`
    ValidFrom,
    /// `Valuation.change_date_for_remaining_economic_life`
    ChangeDateForRemainingEconomicLife,
    /// `Valuation.purchase_date`
    PurchaseDate,
    /// `Valuation.sale_date`
    SaleDate,
    /// `Valuation.construction_date`
    ConstructionDate,
    /// `Valuation.use_type_primary`
    UseTypePrimary,
    /// `Valuation.use_type_secondary`
    UseTypeSecondary,
    /// `Valuation.interior_quality`
    InteriorQuality,
    /// `Valuation.retail_location`
    RetailLocation,
    /// `Valuation.ownership_type`
    OwnershipType,
    /// `Valuation.condition`
    Condition,
    /// `Valuation.construction_phase`
    ConstructionPhase,
    /// `Valuation.valuation_type1`
    ValuationType1,
    /// `Valuation.valuation_type2`
    ValuationType2,
    /// `Valuation.floor_description`
    FloorDescription,
    /// `Valuation.ground_lease_remarks`
    GroundLeaseRemarks,
    /// `Valuation.note`
    Note,

    /// Decimal stored in `Valuation.key_figures` under the given name
    KeyFigure(String),
}

impl FieldAction {
    /// True for [`FieldAction::Ignore`]
    pub fn is_ignore(&self) -> bool {
        matches!(self, FieldAction::Ignore)
    }
}

/// Entries of the standard table
const STANDARD_ENTRIES: &[(&str, FieldAction)] = &[
    // header
    (paths::DATE, FieldAction::Ignore),
    (paths::COMPLETION_DATE, FieldAction::Created),
    (paths::SUPPLIER_SHORT, FieldAction::ExpertId),
    (paths::SUPPLIER_NAME, FieldAction::ExpertName),
    // general
    (paths::AREAL_UNIT, FieldAction::AreaMeasurement),
    (paths::STREET, FieldAction::Street),
    (paths::POST_CODE, FieldAction::PostCode),
    (paths::TOWN, FieldAction::City),
    (paths::COUNTRY, FieldAction::Country),
    (paths::ADDRESS_TEXT, FieldAction::AddressLabel),
    (paths::OWNER, FieldAction::Owner),
    (paths::OBJECT_NUMBER, FieldAction::ObjectId),
    (paths::LONGITUDE, FieldAction::Longitude),
    (paths::LATITUDE, FieldAction::Latitude),
    // valuation results
    (paths::CURRENCY, FieldAction::Currency),
    (paths::SHARE_ANCILLARY_USE, FieldAction::UseTypeSecondaryShare),
    (paths::SHARE_MAIN_USE, FieldAction::UseTypePrimaryShare),
    (paths::GROUND_LEASE, FieldAction::GroundLease),
    (paths::MAINTENANCE_BACKLOG, FieldAction::MaintenanceBacklog),
    (paths::SINGLE_TENANT, FieldAction::SingleTenant),
    (paths::DATE_EXCHANGE_RATE, FieldAction::ExchangeRateDate),
    (paths::DATE_OF_APPRAISAL, FieldAction::ValidFrom),
    (
        paths::DATE_OF_CHANGE_REMAINING_LIFE,
        FieldAction::ChangeDateForRemainingEconomicLife,
    ),
    (paths::DATE_OF_PURCHASE, FieldAction::PurchaseDate),
    (paths::DATE_OF_SALE, FieldAction::SaleDate),
    (paths::ANCILLARY_TYPE_OF_USE, FieldAction::UseTypeSecondary),
    (paths::FIT_OUT_QUALITY, FieldAction::InteriorQuality),
    (paths::FLOORS, FieldAction::FloorDescription),
    (paths::GROUND_LEASE_REMARKS, FieldAction::GroundLeaseRemarks),
    (paths::LOCATION_QUALITY, FieldAction::RetailLocation),
    (paths::MAIN_TYPE_OF_USE, FieldAction::UseTypePrimary),
    (paths::ORIGINAL_YEAR_OF_CONSTRUCTION, FieldAction::ConstructionDate),
    (paths::QUALITY_DATE_OF_APPRAISAL, FieldAction::Ignore),
    (paths::ADDITIONAL_INFORMATION, FieldAction::Note),
    (paths::REBASE_TYPE_1, FieldAction::ValuationType1),
    (paths::REBASE_TYPE_2, FieldAction::ValuationType2),
    (paths::STATE_OF_COMPLETION, FieldAction::ConstructionPhase),
    (paths::STRUCTURAL_CONDITION, FieldAction::Condition),
    (paths::TYPE_OF_OWNERSHIP, FieldAction::OwnershipType),
];

/// Mapping from canonical path to [`FieldAction`]
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchTable {
    entries: HashMap<String, FieldAction>,
}

impl DispatchTable {
    /// Create a table without entries
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create the standard BIIS-XML table
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for (path, action) in STANDARD_ENTRIES {
            table.insert(*path, action.clone());
        }
        table
    }

    /// Add or replace an entry, returning the table
    pub fn with_entry(mut self, path: impl Into<String>, action: FieldAction) -> Self {
        self.insert(path, action);
        self
    }

    /// Map a leaf under `ValuationResults` to a key figure of the same name
    pub fn with_key_figure(self, leaf: &str) -> Self {
        self.with_entry(paths::result_leaf(leaf), FieldAction::KeyFigure(leaf.to_string()))
    }

    /// Add or replace an entry, returning the previous action
    pub fn insert(&mut self, path: impl Into<String>, action: FieldAction) -> Option<FieldAction> {
        self.entries.insert(path.into(), action)
    }

    /// Action registered for a path
    pub fn lookup(&self, path: &str) -> Option<&FieldAction> {
        self.entries.get(path)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by path
    pub fn entries(&self) -> Vec<(&str, &FieldAction)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(path, action)| (path.as_str(), action))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}
