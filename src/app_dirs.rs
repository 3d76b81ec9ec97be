use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "fastkey";

/// Where fastkey keeps its files
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project().map(|pd| pd.config_dir().join("config.json"))
    }

    /// Log file written with `--log`; prefers the XDG state dir
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("fastkey.log"))
        } else {
            Self::project().map(|pd| pd.data_local_dir().join("fastkey.log"))
        }
    }
}
