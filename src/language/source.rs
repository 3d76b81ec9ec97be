use std::collections::HashMap;
use std::fmt::Debug;

use log::debug;

use super::core::{Difficulty, Language, WordList};
use crate::error::Result;

/// Capability the session core consumes to build passages
pub trait WordSource: Debug {
    /// Candidate words for the given language and difficulty, in table order
    fn fetch_words(&self, language: Language, difficulty: Difficulty) -> &[String];
}

/// Word tables compiled into the binary
#[derive(Debug, Clone)]
pub struct EmbeddedWordSource {
    tables: HashMap<(Language, Difficulty), WordList>,
}

impl EmbeddedWordSource {
    /// Parse every bundled table up front so later lookups cannot fail
    pub fn load() -> Result<Self> {
        let mut tables = HashMap::new();
        for language in Language::ALL {
            for difficulty in Difficulty::ALL {
                let list = WordList::load(language, difficulty)?;
                debug!(
                    "loaded word list {} ({} words) for {language}/{difficulty}",
                    list.name,
                    list.words.len()
                );
                tables.insert((language, difficulty), list);
            }
        }
        Ok(Self { tables })
    }
}

impl WordSource for EmbeddedWordSource {
    fn fetch_words(&self, language: Language, difficulty: Difficulty) -> &[String] {
        self.tables
            .get(&(language, difficulty))
            .map(|list| list.words.as_slice())
            .unwrap_or_default()
    }
}

/// Same pool for every language and difficulty
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for StaticWordSource {
    fn fetch_words(&self, _language: Language, _difficulty: Difficulty) -> &[String] {
        &self.words
    }
}
