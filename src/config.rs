use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub api_base: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_model: "gpt-3.5-turbo".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            log_file: "translator.log".to_string(),
        }
    }
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    pub fn path() -> PathBuf {
        exe_dir().join("config.json")
    }

    /// Reads `config.json` next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str::<Config>(&s).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Environment variables override whatever the file said, when set and non-empty.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(v) = non_empty("OPENAI_API_KEY") {
            self.openai_api_key = v;
        }
        if let Some(v) = non_empty("OPENAI_MODEL") {
            self.openai_model = v;
        }
        if let Some(v) = non_empty("OPENAI_BASE_URL") {
            self.api_base = v;
        }
    }

    pub fn log_path(&self) -> PathBuf {
        let p = PathBuf::from(&self.log_file);
        if p.is_absolute() {
            p
        } else {
            exe_dir().join(p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.json"));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.openai_model, "gpt-3.5-turbo");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "openai_model": "gpt-4o-mini" }"#).unwrap();

        let cfg = Config::load_from(&path);
        assert_eq!(cfg.openai_model, "gpt-4o-mini");
        assert_eq!(cfg.api_base, "https://api.openai.com/v1");
        assert!(cfg.openai_api_key.is_empty());
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", ""),
            ("OPENAI_BASE_URL", "http://localhost:1234/v1"),
        ]
        .into_iter()
        .collect();

        let mut cfg = Config {
            openai_model: "from-file".to_string(),
            ..Config::default()
        };
        cfg.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.openai_api_key, "sk-test");
        // empty values are ignored
        assert_eq!(cfg.openai_model, "from-file");
        assert_eq!(cfg.api_base, "http://localhost:1234/v1");
    }

    #[test]
    fn absolute_log_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let abs = dir.path().join("errors.log");
        let cfg = Config {
            log_file: abs.to_string_lossy().into_owned(),
            ..Config::default()
        };
        assert_eq!(cfg.log_path(), abs);
        assert!(Config::default().log_path().ends_with("translator.log"));
    }
}
