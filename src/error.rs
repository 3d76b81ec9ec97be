use thiserror::Error;

/// Failures that can surface while loading word tables or the config file.
///
/// Session operations never fail; everything here happens at start-up or
/// when preferences are written back.
#[derive(Error, Debug)]
pub enum Error {
    #[error("word list '{0}' not found")]
    MissingWordList(String),
    #[error("word list '{0}' is not valid UTF-8")]
    WordListEncoding(String),
    #[error("failed to parse word list '{file}': {source}")]
    WordListFormat {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("word list '{0}' is empty")]
    EmptyWordList(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::MissingWordList("xx.json".into()).to_string(),
            "word list 'xx.json' not found"
        );
        assert_eq!(
            Error::EmptyWordList("en.json".into()).to_string(),
            "word list 'en.json' is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_word_list_format_has_source() {
        use std::error::Error as _;

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::WordListFormat {
            file: "tr.json".into(),
            source: parse_err,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to parse word list 'tr.json'"));
    }
}
