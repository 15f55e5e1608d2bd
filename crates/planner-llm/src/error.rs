use thiserror::Error;

/// Classified failures of one model invocation.
///
/// Error text must stay free of credentials: transport errors are stripped
/// of their URL (the Gemini API key travels as a query parameter) before
/// they are stringified.
#[derive(Debug, Error)]
pub enum LLMError {
    /// No credential configured, or the upstream rejected it.
    #[error("Gemini authentication failed: {0}")]
    Auth(String),

    /// Upstream returned HTTP 429.
    #[error("Gemini rate limited the request: {0}")]
    RateLimited(String),

    /// Transport failure, timeout, or any other non-success status.
    #[error("Gemini service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The HTTP call succeeded but the response body was not a well-formed
    /// response envelope. A malformed *inner* text payload is not an error;
    /// the response parser handles that downstream.
    #[error("Malformed Gemini response: {0}")]
    MalformedUpstream(String),
}

pub type Result<T> = std::result::Result<T, LLMError>;
