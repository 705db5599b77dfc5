//! Canonical paths of the BIIS-XML elements this crate maps.

// =========================================================================
// Header
// =========================================================================

/// Root element
pub const ROOT: &str = "ValXML";

/// Report date (superseded by [`DATE_OF_APPRAISAL`])
pub const DATE: &str = "ValXML/Date";

/// Creation timestamp of the report
pub const COMPLETION_DATE: &str = "ValXML/CompletionDate";

/// Short code of the data supplier
pub const SUPPLIER_SHORT: &str = "ValXML/DataSupplier/Short";

/// Name of the data supplier
pub const SUPPLIER_NAME: &str = "ValXML/DataSupplier/Name";

// =========================================================================
// General / location
// =========================================================================

/// Area unit code
pub const AREAL_UNIT: &str = "ValXML/BIISValuationData/General/ArealUnit";

/// Street
pub const STREET: &str = "ValXML/BIISValuationData/General/Address/Street";

/// Postal code
pub const POST_CODE: &str = "ValXML/BIISValuationData/General/Address/PostCode";

/// Town
pub const TOWN: &str = "ValXML/BIISValuationData/General/Address/Town";

/// Country code
pub const COUNTRY: &str = "ValXML/BIISValuationData/General/Address/Country";

/// Free-text address designation
pub const ADDRESS_TEXT: &str = "ValXML/BIISValuationData/General/Address/Text";

/// Owner
pub const OWNER: &str = "ValXML/BIISValuationData/General/Owner";

/// Object number assigned by the owner
pub const OBJECT_NUMBER: &str = "ValXML/BIISValuationData/General/ObjNoOwner";

/// WGS84 longitude
pub const LONGITUDE: &str = "ValXML/BIISValuationData/General/ObjKoWGS84Longitude";

/// WGS84 latitude
pub const LATITUDE: &str = "ValXML/BIISValuationData/General/ObjKoWGS84Latitude";

// =========================================================================
// Valuation results
// =========================================================================

/// Parent of every valuation result element
pub const RESULTS: &str = "ValXML/BIISValuationData/ValuationResults";

/// Currency code
pub const CURRENCY: &str = "ValXML/BIISValuationData/ValuationResults/Currency";

/// Share of the ancillary use
pub const SHARE_ANCILLARY_USE: &str =
    "ValXML/BIISValuationData/ValuationResults/ShareAncillaryTypeOfUse";

/// Share of the main use
pub const SHARE_MAIN_USE: &str = "ValXML/BIISValuationData/ValuationResults/ShareMainTypeOfUse";

/// Ground lease flag
pub const GROUND_LEASE: &str = "ValXML/BIISValuationData/ValuationResults/GroundLease";

/// Maintenance backlog flag
pub const MAINTENANCE_BACKLOG: &str =
    "ValXML/BIISValuationData/ValuationResults/MaintenanceBacklog";

/// Single tenant flag
pub const SINGLE_TENANT: &str = "ValXML/BIISValuationData/ValuationResults/SingleTenant";

/// Date of the exchange rate
pub const DATE_EXCHANGE_RATE: &str = "ValXML/BIISValuationData/ValuationResults/DateExchangeRate";

/// Date of appraisal
pub const DATE_OF_APPRAISAL: &str = "ValXML/BIISValuationData/ValuationResults/DateOfAppraisal";

/// Date the remaining economic life was changed
pub const DATE_OF_CHANGE_REMAINING_LIFE: &str =
    "ValXML/BIISValuationData/ValuationResults/DateOfChangeForRemainingEconomicLife";

/// Purchase date
pub const DATE_OF_PURCHASE: &str = "ValXML/BIISValuationData/ValuationResults/DateOfPurchase";

/// Sale date
pub const DATE_OF_SALE: &str = "ValXML/BIISValuationData/ValuationResults/DateOfSale";

/// Ancillary use
pub const ANCILLARY_TYPE_OF_USE: &str =
    "ValXML/BIISValuationData/ValuationResults/AncillaryTypeOfUse";

/// Fit-out quality code
pub const FIT_OUT_QUALITY: &str = "ValXML/BIISValuationData/ValuationResults/FitOutQuality";

/// Floor description
pub const FLOORS: &str = "ValXML/BIISValuationData/ValuationResults/Floors";

/// Remarks on the ground lease
pub const GROUND_LEASE_REMARKS: &str =
    "ValXML/BIISValuationData/ValuationResults/GroundLeaseRemarks";

/// Location quality code
pub const LOCATION_QUALITY: &str = "ValXML/BIISValuationData/ValuationResults/LocationQuality";

/// Main use
pub const MAIN_TYPE_OF_USE: &str = "ValXML/BIISValuationData/ValuationResults/MainTypeOfUse";

/// Original year of construction
pub const ORIGINAL_YEAR_OF_CONSTRUCTION: &str =
    "ValXML/BIISValuationData/ValuationResults/OriginalYearOfConstruction";

/// Quality date of appraisal (not mapped)
pub const QUALITY_DATE_OF_APPRAISAL: &str =
    "ValXML/BIISValuationData/ValuationResults/QualityDateOfAppraisal";

/// Additional object information
pub const ADDITIONAL_INFORMATION: &str =
    "ValXML/BIISValuationData/ValuationResults/RebaseObjAdditionalInformation";

/// Valuation purpose
pub const REBASE_TYPE_1: &str = "ValXML/BIISValuationData/ValuationResults/RebaseType1";

/// Valuation occasion
pub const REBASE_TYPE_2: &str = "ValXML/BIISValuationData/ValuationResults/RebaseType2";

/// State of completion
pub const STATE_OF_COMPLETION: &str = "ValXML/BIISValuationData/ValuationResults/StateOfCompletion";

/// Structural condition code
pub const STRUCTURAL_CONDITION: &str =
    "ValXML/BIISValuationData/ValuationResults/StructuralCondition";

/// Ownership type code
pub const TYPE_OF_OWNERSHIP: &str = "ValXML/BIISValuationData/ValuationResults/TypeOfOwnership";

/// Canonical path of a leaf directly under `ValuationResults`
pub fn result_leaf(name: &str) -> String {
    format!("{RESULTS}/{name}")
}
