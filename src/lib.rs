// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod language;
pub mod passage;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod time_series;
pub mod typing_policy;
pub mod typing_session;
pub mod word_generator;

pub use error::{Error, Result};
pub use typing_session::{Summary, TypingSession};
