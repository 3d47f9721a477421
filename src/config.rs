use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_KEYS: &[&str] = &["url", "user_agent", "output"];

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct FetcherConfig {
    pub url: Option<String>,
    pub user_agent: Option<String>,
    pub output: Option<String>,
}

impl FetcherConfig {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let content = std::fs::read_to_string(path).unwrap_or_default();
            toml::from_str(&content).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::FetcherError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: String) -> crate::error::Result<()> {
        match key {
            "url" => self.url = Some(value),
            "user_agent" | "user-agent" => self.user_agent = Some(value),
            "output" => self.output = Some(value),
            _ => {
                return Err(crate::error::FetcherError::Input(format!(
                    "Unknown key '{key}'. Valid keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fetcher")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = FetcherConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(cfg, FetcherConfig::default());
    }

    #[test]
    fn garbage_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "url = [").unwrap();
        assert_eq!(FetcherConfig::load_from(&path), FetcherConfig::default());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = FetcherConfig::default();
        cfg.set("url", "https://example.test/todos/1".into()).unwrap();
        cfg.set("user-agent", "probe/1".into()).unwrap();

        cfg.save_to(&path).unwrap();

        assert_eq!(FetcherConfig::load_from(&path), cfg);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut cfg = FetcherConfig::default();
        let err = cfg.set("timeout", "5".into()).unwrap_err();
        assert!(err.to_string().contains("Valid keys: url, user_agent, output"));
    }
}
