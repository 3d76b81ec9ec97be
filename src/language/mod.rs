pub mod core;
pub mod selector;
pub mod source;

// Re-export the main types for convenience
pub use self::core::{Difficulty, Language, WordList};
pub use selector::sample_words;
pub use source::{EmbeddedWordSource, StaticWordSource, WordSource};
