use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::{Difficulty, Language};
use crate::session::{
    SessionConfig, DEFAULT_DURATION_SECS, DEFAULT_ENDING_DELAY_MS, DEFAULT_WORD_COUNT,
};

pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Persisted preferences; command line flags override them for one run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub duration_secs: u64,
    pub word_count: usize,
    pub language: Language,
    pub difficulty: Difficulty,
    pub tick_rate_ms: u64,
    pub ending_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            word_count: DEFAULT_WORD_COUNT,
            language: Language::default(),
            difficulty: Difficulty::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            ending_delay_ms: DEFAULT_ENDING_DELAY_MS,
        }
    }
}

impl Config {
    /// Replaces zero values that would leave a session unusable
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.duration_secs == 0 {
            warn!("config duration_secs is 0, using {}", defaults.duration_secs);
            self.duration_secs = defaults.duration_secs;
        }
        if self.word_count == 0 {
            warn!("config word_count is 0, using {}", defaults.word_count);
            self.word_count = defaults.word_count;
        }
        if self.tick_rate_ms == 0 {
            warn!("config tick_rate_ms is 0, using {}", defaults.tick_rate_ms);
            self.tick_rate_ms = defaults.tick_rate_ms;
        }
        self
    }
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            duration_secs: cfg.duration_secs,
            ending_delay_ms: cfg.ending_delay_ms,
            language: cfg.language,
            difficulty: cfg.difficulty,
        }
    }
}

pub trait ConfigStore {
    /// Stored config, or defaults when missing or unreadable
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> crate::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = crate::app_dirs::AppDirs::config_path()
            .unwrap_or_else(|| PathBuf::from("fastkey_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg.sanitized(),
            Err(err) => {
                warn!(
                    "ignoring unreadable config {}: {err}",
                    self.path.display()
                );
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Keeps the config in memory; used where nothing should touch disk
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    cfg: std::cell::RefCell<Config>,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Config {
        self.cfg.borrow().clone()
    }

    fn save(&self, cfg: &Config) -> crate::Result<()> {
        *self.cfg.borrow_mut() = cfg.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            duration_secs: 30,
            word_count: 40,
            language: Language::Tr,
            difficulty: Difficulty::Hard,
            tick_rate_ms: 50,
            ending_delay_ms: 0,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{"language": "tr", "duration_secs": 15}"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.language, Language::Tr);
        assert_eq!(cfg.duration_secs, 15);
        assert_eq!(cfg.word_count, DEFAULT_WORD_COUNT);
        assert_eq!(cfg.difficulty, Difficulty::Easy);
    }

    #[test]
    fn zero_values_load_as_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            br#"{"word_count": 0, "duration_secs": 0, "tick_rate_ms": 0, "language": "tr"}"#,
        )
        .unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.duration_secs, DEFAULT_DURATION_SECS);
        assert_eq!(cfg.word_count, DEFAULT_WORD_COUNT);
        assert_eq!(cfg.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(cfg.language, Language::Tr);
    }

    #[test]
    fn memory_store_keeps_last_save() {
        let store = MemoryConfigStore::default();
        let cfg = Config {
            language: Language::Tr,
            ..Config::default()
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn session_config_from_config() {
        let cfg = Config {
            duration_secs: 15,
            difficulty: Difficulty::Hard,
            ..Config::default()
        };
        let session = SessionConfig::from(&cfg);
        assert_eq!(session.duration_secs, 15);
        assert_eq!(session.difficulty, Difficulty::Hard);
        assert_eq!(session.ending_delay_ms, DEFAULT_ENDING_DELAY_MS);
    }
}
