//! BIIS-XML import worker

use std::io::BufReader;

use log::{error, info, warn};

use super::error::WorkerError;
use super::worker::{ImportWorker, ImportWorkerConfiguration, InputStream, WorkerConfiguration};
use super::PARAMETER_NAME;
use crate::biis::{BiisDecoder, BiisError, DecodeNote, DecodeOptions, DispatchTable};
use crate::gif::{Container, Subset};

const SUBSETS: &[Subset] = &[Subset::S5_7];

enum ReaderState {
    NotLoaded,
    Open(InputStream),
    Closed,
}

/// Import worker decoding one BIIS-XML stream.
///
/// `load` runs the decoder to completion and never reports decode failures
/// to the caller: the container built up to the failing element is kept and
/// the failure is logged. [`BiisReader::last_error`] and
/// [`BiisReader::notes`] expose what went wrong.
pub struct BiisReader {
    state: ReaderState,
    table: DispatchTable,
    options: DecodeOptions,
    container: Option<Container>,
    notes: Vec<DecodeNote>,
    last_error: Option<BiisError>,
}

impl BiisReader {
    /// Create a reader using the standard dispatch table
    pub fn new() -> Self {
        Self::with_table(DispatchTable::standard())
    }

    /// Create a reader using a custom dispatch table
    pub fn with_table(table: DispatchTable) -> Self {
        Self {
            state: ReaderState::NotLoaded,
            table,
            options: DecodeOptions::default(),
            container: None,
            notes: Vec::new(),
            last_error: None,
        }
    }

    /// Use explicit reader settings
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Failure that ended the last decode early, if any
    pub fn last_error(&self) -> Option<&BiisError> {
        self.last_error.as_ref()
    }

    /// Fields whose token was not recognized
    pub fn notes(&self) -> &[DecodeNote] {
        &self.notes
    }

    /// True while the input stream is held
    pub fn is_open(&self) -> bool {
        matches!(self.state, ReaderState::Open(_))
    }

    /// Take the container out of the reader
    pub fn into_container(self) -> Option<Container> {
        self.container
    }

    fn decode_stream(&mut self) {
        let ReaderState::Open(stream) = &mut self.state else {
            return;
        };

        let reader = BufReader::with_capacity(self.options.buffer_size, stream.as_mut());
        let decoder = BiisDecoder::new(reader)
            .with_table(self.table.clone())
            .trim_text(self.options.trim_text);

        match decoder.decode() {
            Ok(outcome) => {
                info!(
                    "Loaded {} propert{} from BIIS-XML stream",
                    outcome.container.data.len(),
                    if outcome.container.data.len() == 1 { "y" } else { "ies" }
                );
                self.container = Some(outcome.container);
                self.notes = outcome.notes;
            }
            Err(failure) => {
                error!("Error reading BIIS-XML stream: {}", failure.error);
                self.container = Some(*failure.partial);
                self.notes = failure.notes;
                self.last_error = Some(failure.error);
            }
        }
    }
}

impl Default for BiisReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportWorker for BiisReader {
    fn supported_subsets(&self) -> &[Subset] {
        SUBSETS
    }

    fn required_configuration(&self) -> ImportWorkerConfiguration {
        ImportWorkerConfiguration::new().with_slot(PARAMETER_NAME)
    }

    fn load(&mut self, configuration: WorkerConfiguration) -> Result<(), WorkerError> {
        let mut configuration = match configuration {
            WorkerConfiguration::Import(configuration) => configuration,
            WorkerConfiguration::Generic(_) => {
                return Err(WorkerError::UnsupportedConfiguration(
                    "generic configuration is not allowed, use an import configuration",
                ))
            }
        };

        if !matches!(self.state, ReaderState::NotLoaded) {
            return Err(WorkerError::AlreadyLoaded);
        }

        let stream = configuration
            .take_stream(PARAMETER_NAME)
            .ok_or_else(|| WorkerError::MissingStream(PARAMETER_NAME.to_string()))?;

        self.state = ReaderState::Open(stream);
        self.decode_stream();
        Ok(())
    }

    fn unload(&mut self) {
        match self.state {
            ReaderState::Open(_) => {
                self.state = ReaderState::Closed;
                info!("Released BIIS-XML stream");
            }
            ReaderState::NotLoaded => warn!("Unloading a reader that was never loaded"),
            ReaderState::Closed => {}
        }
    }

    fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }
}
