//! Worker traits and configurations of the exchange host

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use super::error::WorkerError;
use crate::gif::{Container, Subset};

/// Input stream handed to an import worker
pub type InputStream = Box<dyn Read + Send>;

/// Named input streams of an import worker.
///
/// [`ImportWorker::required_configuration`] returns the slots a worker
/// reads, each unfilled; the host fills them before calling `load`.
#[derive(Default)]
pub struct ImportWorkerConfiguration {
    streams: BTreeMap<String, Option<InputStream>>,
}

impl ImportWorkerConfiguration {
    /// Create a configuration without slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an unfilled stream slot
    pub fn with_slot(mut self, name: impl Into<String>) -> Self {
        self.streams.insert(name.into(), None);
        self
    }

    /// Fill the slot `name` with a stream
    pub fn with_stream(mut self, name: impl Into<String>, stream: impl Read + Send + 'static) -> Self {
        self.set_stream(name, stream);
        self
    }

    /// Fill the slot `name` with a stream, replacing any previous one
    pub fn set_stream(&mut self, name: impl Into<String>, stream: impl Read + Send + 'static) {
        self.streams.insert(name.into(), Some(Box::new(stream)));
    }

    /// Take the stream out of slot `name`
    pub fn take_stream(&mut self, name: &str) -> Option<InputStream> {
        self.streams.get_mut(name).and_then(Option::take)
    }

    /// Names of all declared slots
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.streams.keys().map(String::as_str)
    }

    /// True when slot `name` holds a stream
    pub fn has_stream(&self, name: &str) -> bool {
        matches!(self.streams.get(name), Some(Some(_)))
    }
}

impl fmt::Debug for ImportWorkerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, stream) in &self.streams {
            map.entry(name, &if stream.is_some() { "<stream>" } else { "<empty>" });
        }
        map.finish()
    }
}

/// Plain key/value configuration used by workers without streams
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericWorkerConfiguration {
    /// Named string parameters
    pub parameters: BTreeMap<String, String>,
}

/// Configuration passed to [`ImportWorker::load`]
#[derive(Debug)]
pub enum WorkerConfiguration {
    /// Stream-based import configuration
    Import(ImportWorkerConfiguration),
    /// Any other configuration kind
    Generic(GenericWorkerConfiguration),
}

impl From<ImportWorkerConfiguration> for WorkerConfiguration {
    fn from(configuration: ImportWorkerConfiguration) -> Self {
        WorkerConfiguration::Import(configuration)
    }
}

impl From<GenericWorkerConfiguration> for WorkerConfiguration {
    fn from(configuration: GenericWorkerConfiguration) -> Self {
        WorkerConfiguration::Generic(configuration)
    }
}

/// A worker reading a foreign format into a [`Container`]
pub trait ImportWorker {
    /// Subsets this worker produces
    fn supported_subsets(&self) -> &[Subset];

    /// The stream slots this worker reads, unfilled
    fn required_configuration(&self) -> ImportWorkerConfiguration;

    /// Read the configured input.
    ///
    /// Returns `Err` only for misuse of the contract; decoding problems are
    /// not reported here.
    fn load(&mut self, configuration: WorkerConfiguration) -> Result<(), WorkerError>;

    /// Release the input; safe to call repeatedly
    fn unload(&mut self);

    /// The container built by `load`, if any
    fn container(&self) -> Option<&Container>;

    /// True when the host should render its default configuration dialog
    fn uses_default_config_gui(&self) -> bool {
        true
    }
}

/// A worker writing a [`Container`] into a foreign format
pub trait ExportWorker {
    /// Subsets this worker accepts
    fn supported_subsets(&self) -> &[Subset];

    /// Write `container` using the configured output
    fn store(
        &mut self,
        container: &Container,
        configuration: WorkerConfiguration,
    ) -> Result<(), WorkerError>;

    /// Release the output; safe to call repeatedly
    fn unload(&mut self);
}
