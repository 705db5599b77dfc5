/// Errors raised by a worker for misuse of the host contract
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// The worker was loaded with a configuration kind it does not accept
    #[error("unsupported worker configuration: {0}")]
    UnsupportedConfiguration(&'static str),

    /// The configuration has no stream under the required parameter name
    #[error("missing input stream for parameter {0:?}")]
    MissingStream(String),

    /// `load` was called on a worker that has already been loaded
    #[error("worker has already been loaded")]
    AlreadyLoaded,
}
