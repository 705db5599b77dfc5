//! # GIF Container Model
//!
//! The target data model shared by the exchange host. A decoded document is
//! one [`Container`] holding provenance [`Meta`] and a [`Data`] map of
//! properties; each [`Property`] holds its [`Valuation`]s, each valuation
//! holds one [`Address`].
//!
//! ```text
//! Container
//! ├── Meta (creator, process, format, version, created)
//! └── Data
//!     └── properties: object-id → Property
//!         └── valuations: object-id → Valuation
//!             └── Address
//! ```
//!
//! Every field that can be absent is an `Option`; `None` is the unset state.

mod address;
mod container;
mod country;
mod currency;
mod entity;
mod enums;


pub use address::Address;
pub use container::{Container, Data, Meta, CREATOR, FORMAT, MODEL_VERSION};
pub use country::Country;
pub use currency::Currency;
pub use entity::{Property, Valuation};
pub use enums::{
    AreaMeasurement, ConstructionPhase, InteriorQuality, ObjectCondition, OwnershipType,
    RetailLocationType, Subset, UseType, ValuationType1, ValuationType2,
};
