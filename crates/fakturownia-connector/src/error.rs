use fakturownia_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// A required tool parameter is absent. The message names the field and
    /// operation ("Category ID is required for updating a category").
    #[error("{0}")]
    InvalidParams(String),

    /// The remote API answered with an error status; `message` carries the
    /// remote payload's message when one was present.
    #[error("{label} API error: {message}")]
    RemoteApi { label: &'static str, message: String },

    /// Transport-level failure without a structured payload; passed through
    /// unchanged.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// No resource handler recognized the method.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
