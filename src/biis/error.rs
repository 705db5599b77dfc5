/// Errors that can occur while converting a single source token
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Text is not a decimal number
    #[error("invalid decimal: {0}")]
    InvalidDecimal(#[from] std::num::ParseFloatError),

    /// Text is not an ISO-8601 calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Text is not an ISO-8601 date or date-time
    #[error("invalid date-time: {0}")]
    InvalidDateTime(String),

    /// Text is not a known ISO 4217 currency code
    #[error("unknown currency code: {0:?}")]
    UnknownCurrency(String),
}

/// Errors that can occur while decoding a BIIS-XML document
#[derive(Debug, thiserror::Error)]
pub enum BiisError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error reading the input stream
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Element text could not be converted to its target type
    #[error("cannot convert {token:?} at {path}: {source}")]
    Convert {
        /// Canonical path of the element
        path: String,
        /// Offending text
        token: String,
        /// Underlying conversion error
        #[source]
        source: ConvertError,
    },

    /// A mapped leaf element contains a child element
    #[error("element {path} must contain text only, found <{child}>")]
    NestedElement {
        /// Canonical path of the leaf element
        path: String,
        /// Name of the unexpected child
        child: String,
    },

    /// Stream ended inside an element
    #[error("unexpected end of document inside {path}")]
    UnexpectedEof {
        /// Canonical path of the unterminated element
        path: String,
    },
}

impl BiisError {
    /// Path of the element that caused the error, when known
    pub fn path(&self) -> Option<&str> {
        match self {
            BiisError::Convert { path, .. }
            | BiisError::NestedElement { path, .. }
            | BiisError::UnexpectedEof { path } => Some(path),
            _ => None,
        }
    }
}
