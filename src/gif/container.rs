use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Property, Subset};

/// Creator label written by this adapter
pub const CREATOR: &str = "icred with biis-xml plugin";

/// Format tag written by this adapter
pub const FORMAT: &str = "XML";

/// GIF model version produced by this adapter
pub const MODEL_VERSION: &str = "1-0.6.2";

/// Root of one decoded document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Document provenance
    pub meta: Meta,

    /// Decoded properties
    #[serde(rename = "maindata")]
    pub data: Data,
}

impl Container {
    /// Create an empty container with default metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Document provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Software that created the container
    pub creator: String,

    /// Process / subset the document belongs to
    pub process: Subset,

    /// Source format tag
    pub format: String,

    /// Model version
    pub version: String,

    /// Creation timestamp of the source document
    pub created: Option<NaiveDateTime>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            creator: CREATOR.to_string(),
            process: Subset::S5_7,
            format: FORMAT.to_string(),
            version: MODEL_VERSION.to_string(),
            created: None,
        }
    }
}

/// Decoded properties keyed by object id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Properties keyed by object id
    pub properties: BTreeMap<String, Property>,
}

impl Data {
    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when no property has been committed
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up a property by object id
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.get(id)
    }
}
