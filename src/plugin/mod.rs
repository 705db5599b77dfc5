//! # Exchange Host Contract
//!
//! The host discovers a [`Plugin`], asks it for an [`ImportWorker`], fills
//! the worker's required configuration with an input stream and calls
//! `load`. The container is then fetched with `container()` and the stream
//! released with `unload()`.
//!
//! ```rust,no_run
//! use std::fs::File;
//!
//! use biis_xml::plugin::{
//!     BiisXmlPlugin, ImportWorkerConfiguration, Plugin, WorkerConfiguration, PARAMETER_NAME,
//! };
//!
//! let plugin = BiisXmlPlugin::new();
//! let mut worker = plugin.import_worker().expect("plugin imports");
//! let config = ImportWorkerConfiguration::new()
//!     .with_stream(PARAMETER_NAME, File::open("report.xml")?);
//! worker.load(WorkerConfiguration::Import(config))?;
//! let container = worker.container().cloned();
//! worker.unload();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod reader;
mod worker;


pub use error::WorkerError;
pub use reader::BiisReader;
pub use worker::{
    ExportWorker, GenericWorkerConfiguration, ImportWorker, ImportWorkerConfiguration, InputStream,
    WorkerConfiguration,
};

/// Name of the stream parameter the reader consumes
pub const PARAMETER_NAME: &str = "biis-file";

/// Identifier of the BIIS-XML plugin
pub const PLUGIN_ID: &str = "biis.xml";

/// Version of the BIIS-XML plugin
pub const PLUGIN_VERSION: &str = "0.6";

/// Display name of the BIIS-XML plugin
pub const PLUGIN_NAME: &str = "BIIS-XML-Plugin";

/// Model version prefix this plugin supports
pub const SUPPORTED_MODEL_VERSION_PREFIX: &str = "1-0.6.";

/// A format adapter registered with the exchange host
pub trait Plugin {
    /// Unique identifier
    fn plugin_id(&self) -> &str;

    /// Plugin version
    fn plugin_version(&self) -> &str;

    /// Human-readable name
    fn plugin_name(&self) -> &str;

    /// True when the plugin can handle the given GIF model version
    fn is_model_version_supported(&self, version: &str) -> bool;

    /// A fresh import worker, or `None` when the plugin cannot import
    fn import_worker(&self) -> Option<Box<dyn ImportWorker>>;

    /// A fresh export worker, or `None` when the plugin cannot export
    fn export_worker(&self) -> Option<Box<dyn ExportWorker>>;
}

/// The BIIS-XML import plugin
#[derive(Debug, Clone, Copy, Default)]
pub struct BiisXmlPlugin;

impl BiisXmlPlugin {
    /// Create the plugin
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for BiisXmlPlugin {
    fn plugin_id(&self) -> &str {
        PLUGIN_ID
    }

    fn plugin_version(&self) -> &str {
        PLUGIN_VERSION
    }

    fn plugin_name(&self) -> &str {
        PLUGIN_NAME
    }

    fn is_model_version_supported(&self, version: &str) -> bool {
        version.starts_with(SUPPORTED_MODEL_VERSION_PREFIX)
    }

    fn import_worker(&self) -> Option<Box<dyn ImportWorker>> {
        Some(Box::new(BiisReader::new()))
    }

    fn export_worker(&self) -> Option<Box<dyn ExportWorker>> {
        None
    }
}
