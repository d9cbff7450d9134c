use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised before any outbound call is attempted.
///
/// Display strings double as the user-visible JSON-RPC error messages, so
/// they are spelled exactly as API clients expect them on the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Neither the process configuration nor the call arguments produced a
    /// usable domain/token pair.
    #[error("Domain and API token are required")]
    MissingCredentials,
}
