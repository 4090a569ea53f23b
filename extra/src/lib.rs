#[cfg(feature = "error-response")]
mod error_response;
#[cfg(feature = "error-response")]
pub use error_response::ErrorResponse;

#[cfg(feature = "redacted")]
mod redacted;
#[cfg(feature = "redacted")]
pub use redacted::Redacted;
