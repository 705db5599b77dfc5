//! # BIIS-XML Decoder
//!
//! Streaming import of BIIS-XML valuation reports into the GIF container
//! model. A document describes a single property valuation:
//!
//! ```text
//! ValXML
//! ├── Date, CompletionDate
//! ├── DataSupplier (Short, Name)
//! └── BIISValuationData
//!     ├── General
//!     │   ├── ArealUnit, Owner, ObjNoOwner
//!     │   ├── ObjKoWGS84Longitude, ObjKoWGS84Latitude
//!     │   └── Address (Street, PostCode, Town, Country, Text)
//!     └── ValuationResults
//!         └── Currency, DateOfAppraisal, MainTypeOfUse, ...
//! ```
//!
//! Elements are addressed by their canonical path, the `/`-joined names
//! from the root (`ValXML/BIISValuationData/General/Address/Town`). The
//! [`DispatchTable`] maps paths to target fields; elements without an entry
//! are skipped.
//!
//! ```rust,no_run
//! use biis_xml::biis::decode_file;
//!
//! let outcome = decode_file("report.xml")?;
//! for (id, property) in &outcome.container.data.properties {
//!     println!("{}: {} valuation(s)", id, property.valuations.len());
//! }
//! # Ok::<(), biis_xml::biis::DecodeFailure>(())
//! ```

use std::io::BufRead;
use std::path::Path;

mod assembler;
pub mod convert;
mod decoder;
mod dispatch;
mod error;
mod outcome;
mod path;
pub mod paths;

#[cfg(test)]
mod tests;

pub use assembler::RecordAssembler;
pub use decoder::{BiisDecoder, DecodeOptions, DEFAULT_INPUT_BUFFER_SIZE};
pub use dispatch::{DispatchTable, FieldAction};
pub use error::{BiisError, ConvertError};
pub use outcome::{DecodeFailure, DecodeNote, DecodeOutcome, NoteKind};
pub use path::{PathTracker, PATH_SEPARATOR};

/// Decode a document from a BufRead source with the standard table
pub fn decode<R: BufRead>(reader: R) -> Result<DecodeOutcome, DecodeFailure> {
    BiisDecoder::new(reader).decode()
}

/// Decode a document held in memory
pub fn decode_str(xml: &str) -> Result<DecodeOutcome, DecodeFailure> {
    decode(xml.as_bytes())
}

/// Decode a document from a file
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodeOutcome, DecodeFailure> {
    BiisDecoder::open(path)?.decode()
}
