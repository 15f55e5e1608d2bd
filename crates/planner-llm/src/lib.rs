//! Gemini model invocation for Focus Factory.
//!
//! One outbound HTTP call per invocation, a bounded timeout, no internal
//! retries, and a classified error taxonomy. The credential is injected at
//! construction and never appears in logs or error output.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::GeminiClient;
pub use error::{LLMError, Result};
pub use protocol::{Content, GenerationConfig};
