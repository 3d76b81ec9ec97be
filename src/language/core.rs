use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("src/lang");

/// Languages with a bundled word table
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Tr];

    /// Human readable name shown in the header
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::En,
        }
    }
}

/// Easy draws from the common-word table, hard from the long-word table
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn toggled(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// A bundled word table as stored in `src/lang/*.json`
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    pub fn load(language: Language, difficulty: Difficulty) -> Result<Self> {
        read_word_list(&file_name(language, difficulty))
    }
}

pub fn file_name(language: Language, difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => format!("{language}.json"),
        Difficulty::Hard => format!("{language}_long.json"),
    }
}

fn read_word_list(file_name: &str) -> Result<WordList> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| Error::MissingWordList(file_name.to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| Error::WordListEncoding(file_name.to_string()))?;

    parse_word_list(file_name, file_as_str)
}

fn parse_word_list(file_name: &str, data: &str) -> Result<WordList> {
    let list: WordList = from_str(data).map_err(|source| Error::WordListFormat {
        file: file_name.to_string(),
        source,
    })?;

    if list.words.is_empty() {
        return Err(Error::EmptyWordList(file_name.to_string()));
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(file_name(Language::En, Difficulty::Easy), "en.json");
        assert_eq!(file_name(Language::Tr, Difficulty::Easy), "tr.json");
        assert_eq!(file_name(Language::En, Difficulty::Hard), "en_long.json");
        assert_eq!(file_name(Language::Tr, Difficulty::Hard), "tr_long.json");
    }

    #[test]
    fn test_all_bundled_tables_load() {
        for language in Language::ALL {
            for difficulty in Difficulty::ALL {
                let list = WordList::load(language, difficulty).unwrap();
                assert!(!list.words.is_empty());
                assert_eq!(list.size as usize, list.words.len());
            }
        }
    }

    #[test]
    fn test_english_table() {
        let list = WordList::load(Language::En, Difficulty::Easy).unwrap();
        assert_eq!(list.name, "english");
        assert!(list.words.contains(&"the".to_string()));
    }

    #[test]
    fn test_turkish_long_table_is_unicode() {
        let list = WordList::load(Language::Tr, Difficulty::Hard).unwrap();
        assert_eq!(list.name, "turkish_long");
        assert!(list.words.iter().any(|w| w.chars().count() < w.len()));
    }

    #[test]
    fn test_missing_word_list() {
        let err = read_word_list("nonexistent.json").unwrap_err();
        assert!(matches!(err, Error::MissingWordList(ref f) if f == "nonexistent.json"));
    }

    #[test]
    fn test_parse_word_list() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let list = parse_word_list("test.json", json_data).unwrap();

        assert_eq!(list.name, "test");
        assert_eq!(list.size, 3);
        assert_eq!(list.words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_parse_malformed_word_list() {
        let err = parse_word_list("bad.json", "{ \"name\": ").unwrap_err();
        assert!(matches!(err, Error::WordListFormat { .. }));
    }

    #[test]
    fn test_parse_empty_word_list() {
        let err = parse_word_list("empty.json", r#"{"name":"e","size":0,"words":[]}"#).unwrap_err();
        assert!(matches!(err, Error::EmptyWordList(_)));
    }

    #[test]
    fn test_language_display_and_toggle() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Tr.to_string(), "tr");
        assert_eq!(Language::En.toggled(), Language::Tr);
        assert_eq!(Language::Tr.label(), "Türkçe");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(Difficulty::Easy.toggled(), Difficulty::Hard);
    }

    #[test]
    fn test_enum_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Tr).unwrap(), "\"tr\"");
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }
}
