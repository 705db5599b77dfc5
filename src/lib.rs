//! # biis-xml - BIIS-XML Import for the GIF Exchange Model
//!
//! `biis_xml` reads BIIS-XML real-estate valuation reports and maps them
//! onto the GIF container model used by the exchange host: one
//! [`Container`](gif::Container) holding the reported property, its
//! valuation and the valuation's address.
//!
//! ## Key Features
//!
//! - **Streaming Decode**: a single pass over the document with quick-xml;
//!   memory use does not grow with the number of unmapped elements.
//!
//! - **Data-Driven Mapping**: element paths are dispatched through a
//!   [`DispatchTable`](biis::DispatchTable). Extra numeric figures are
//!   added as table entries without touching the decoder.
//!
//! - **Typed Results**: [`biis::decode`] reports every unrecognized token as a
//!   [`DecodeNote`](biis::DecodeNote) and hands back the partial container
//!   when a value cannot be converted.
//!
//! - **Host Contract**: [`plugin::BiisReader`] implements the lenient import
//!   worker expected by the exchange host.
//!
//! ## Quick Start
//!
//! ```rust
//! use biis_xml::biis::decode_str;
//! use biis_xml::gif::Currency;
//!
//! let xml = r#"<ValXML><BIISValuationData>
//!     <General><ObjNoOwner>OBJ-001</ObjNoOwner></General>
//!     <ValuationResults><Currency>EUR</Currency></ValuationResults>
//! </BIISValuationData></ValXML>"#;
//!
//! let outcome = decode_str(xml)?;
//! let property = outcome.container.data.property("OBJ-001").unwrap();
//! assert_eq!(property.valuations["OBJ-001"].currency, Some(Currency::EUR));
//! # Ok::<(), biis_xml::biis::DecodeFailure>(())
//! ```
//!
//! ## Modules
//!
//! - [`gif`]: the target container model
//! - [`biis`]: path tracking, dispatch, conversion and the decoder
//! - [`plugin`]: the exchange host contract
//! - [`report`]: human-readable decode summaries

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod biis;
pub mod gif;
pub mod plugin;
pub mod report;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::biis::{
        decode, decode_file, decode_str, BiisDecoder, BiisError, ConvertError, DecodeFailure,
        DecodeNote, DecodeOptions, DecodeOutcome, DispatchTable, FieldAction, NoteKind,
    };
    pub use crate::gif::{
        Address, Container, Country, Currency, Data, Meta, Property, Subset, Valuation,
    };
    pub use crate::plugin::{
        BiisReader, BiisXmlPlugin, ImportWorker, ImportWorkerConfiguration, Plugin,
        WorkerConfiguration, WorkerError, PARAMETER_NAME,
    };
    pub use crate::report::DecodeReport;
}
