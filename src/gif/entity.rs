use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    Address, AreaMeasurement, ConstructionPhase, Currency, InteriorQuality, ObjectCondition,
    OwnershipType, RetailLocationType, UseType, ValuationType1, ValuationType2,
};

/// One real-estate object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Object id assigned by the sending party
    pub object_id_sender: Option<String>,

    /// Object id used by the receiving party
    pub object_id_receiver: Option<String>,

    /// Free-text designation
    pub label: Option<String>,

    /// Valuations of this object, keyed by object id
    pub valuations: BTreeMap<String, Valuation>,
}

impl Property {
    /// Create an empty property
    pub fn new() -> Self {
        Self::default()
    }

    /// Set sender and receiver id to the same value
    pub fn set_object_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.object_id_receiver = Some(id.clone());
        self.object_id_sender = Some(id);
    }

    /// Key under which this property is stored in a [`Data`](super::Data) map
    pub fn key(&self) -> String {
        self.object_id_sender.clone().unwrap_or_default()
    }
}

/// One appraisal of a property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Short code of the appraiser / data supplier
    pub expert_id: Option<String>,

    /// Name of the appraiser / data supplier
    pub expert_name: Option<String>,

    /// Owner of the object
    pub owner: Option<String>,

    /// Currency all monetary figures are given in
    pub currency: Option<Currency>,

    /// Unit all area figures are given in
    pub area_measurement: Option<AreaMeasurement>,

    /// Main use of the object
    pub use_type_primary: Option<UseType>,

    /// Share of the main use
    pub use_type_primary_share: Option<f64>,

    /// Ancillary use of the object
    pub use_type_secondary: Option<UseType>,

    /// Share of the ancillary use
    pub use_type_secondary_share: Option<f64>,

    /// Object is built on leased land
    pub ground_lease: Option<bool>,

    /// Remarks on the ground lease
    pub ground_lease_remarks: Option<String>,

    /// Object has a maintenance backlog
    pub maintenance_backlog: Option<bool>,

    /// Object is let to a single tenant
    pub single_tenant: Option<bool>,

    /// Date of the exchange rate used
    pub exchange_rate_date: Option<NaiveDate>,

    /// Valuation date (date of appraisal)
    pub valid_from: Option<NaiveDate>,

    /// Date the remaining economic life was last changed
    pub change_date_for_remaining_economic_life: Option<NaiveDate>,

    /// Purchase date
    pub purchase_date: Option<NaiveDate>,

    /// Sale date
    pub sale_date: Option<NaiveDate>,

    /// Original construction date (often year precision only)
    pub construction_date: Option<NaiveDate>,

    /// Construction state
    pub construction_phase: Option<ConstructionPhase>,

    /// Interior fit-out quality
    pub interior_quality: Option<InteriorQuality>,

    /// Retail location class
    pub retail_location: Option<RetailLocationType>,

    /// Ownership form
    pub ownership_type: Option<OwnershipType>,

    /// Structural condition
    pub condition: Option<ObjectCondition>,

    /// Purpose of the valuation
    pub valuation_type1: Option<ValuationType1>,

    /// Occasion of the valuation
    pub valuation_type2: Option<ValuationType2>,

    /// Description of the floors
    pub floor_description: Option<String>,

    /// Additional free-text information
    pub note: Option<String>,

    /// Location of the appraised object
    pub address: Address,

    /// Additional numeric figures keyed by source name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub key_figures: BTreeMap<String, f64>,
}

impl Valuation {
    /// Create an empty valuation
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field (including the address) has been set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
