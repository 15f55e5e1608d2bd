pub mod file_provider;
pub mod provider;

pub use file_provider::FileSessionStorage;
pub use provider::{FocusSession, SessionStorage};
