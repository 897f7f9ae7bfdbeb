//! Configuration management for the diary using the prefer crate.
//!
//! Precedence, highest first: CLI flags, environment variables
//! (`DIARY_DATA_FILE`, `DIARY_BIND`), the config file, built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DiaryError;

/// Default location of the entries file, relative to the base directory.
pub const DEFAULT_DATA_FILE: &str = "data/diary_entries.json";

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Site-wide metadata shown in page headers and titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_site_description")]
    pub description: String,
    /// Link shown on the about page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

fn default_site_title() -> String {
    "Humanity's Diary".to_string()
}

fn default_site_description() -> String {
    "A collective diary of human experiences".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: default_site_description(),
            source_url: Some("https://github.com/monkey-make-banana/human-diary".to_string()),
        }
    }
}

/// Application settings after all sources are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    /// JSON file holding the diary entries.
    pub data_file: PathBuf,
    /// Default bind address for the web server.
    pub bind: String,
    pub site: SiteConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bind: DEFAULT_BIND.to_string(),
            site: SiteConfig::default(),
        }
    }
}

impl Settings {
    /// Settings pointing at a specific data file, defaults elsewhere.
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self {
            data_file,
            ..Default::default()
        }
    }
}

/// Configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Entries file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    /// Bind address for `serve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteConfig>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Discover and load a `diary` config file in the standard locations.
    pub async fn load() -> Self {
        match prefer::load("diary").await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => Self::load_from_path(path).await.unwrap_or_else(|e| {
                    tracing::warn!("Ignoring config file: {}", e);
                    Self::default()
                }),
                None => Self::default(),
            },
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file.
    /// Format is chosen by extension: TOML, YAML, otherwise JSON.
    pub async fn load_from_path(path: &Path) -> Result<Self, DiaryError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DiaryError::io(path, e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let mut config = Self::parse(&contents, ext)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, ext: &str) -> Result<Self, DiaryError> {
        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| DiaryError::Config(format!("Failed to parse TOML config: {}", e))),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| DiaryError::Config(format!("Failed to parse YAML config: {}", e))),
            _ => serde_json::from_str(contents)
                .map_err(|e| DiaryError::Config(format!("Failed to parse JSON config: {}", e))),
        }
    }

    /// Directory relative paths are resolved against.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Apply file values onto settings, resolving relative paths against `base_dir`.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref data_file) = self.data_file {
            settings.data_file = resolve_path(data_file, base_dir);
        } else {
            settings.data_file = base_dir.join(DEFAULT_DATA_FILE);
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref site) = self.site {
            settings.site = site.clone();
        }
    }
}

fn resolve_path(path: &str, base_dir: &Path) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Options for loading settings, from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
    /// Entries file (--data flag).
    pub data_file: Option<PathBuf>,
}

/// Environment overrides.
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    data_file: Option<String>,
    bind: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            data_file: std::env::var("DIARY_DATA_FILE").ok().filter(|s| !s.is_empty()),
            bind: std::env::var("DIARY_BIND").ok().filter(|s| !s.is_empty()),
        }
    }
}

/// Load config from file sources.
async fn load_file_config(options: &LoadOptions) -> Config {
    if let Some(ref config_path) = options.config_path {
        return Config::load_from_path(config_path)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load {}: {}", config_path.display(), e);
                Config::default()
            });
    }
    Config::load().await
}

/// Load settings from config file, environment and CLI options.
pub async fn load_settings_with_options(options: LoadOptions) -> Settings {
    let config = load_file_config(&options).await;
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_settings(&config, &options, EnvOverrides::from_env(), &cwd)
}

fn resolve_settings(
    config: &Config,
    options: &LoadOptions,
    env: EnvOverrides,
    cwd: &Path,
) -> Settings {
    let base_dir = if options.use_cwd {
        cwd.to_path_buf()
    } else {
        config.base_dir().unwrap_or_else(|| cwd.to_path_buf())
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(data_file) = env.data_file {
        tracing::debug!("Using DIARY_DATA_FILE from environment: {}", data_file);
        settings.data_file = resolve_path(&data_file, cwd);
    }
    if let Some(bind) = env.bind {
        tracing::debug!("Using DIARY_BIND from environment: {}", bind);
        settings.bind = bind;
    }

    // --data takes precedence over everything else
    if let Some(ref data_file) = options.data_file {
        settings.data_file = if data_file.is_absolute() {
            data_file.clone()
        } else {
            cwd.join(data_file)
        };
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config = Config::parse(
            r#"
data_file = "entries.json"
bind = "0.0.0.0:8080"

[site]
title = "My Diary"
"#,
            "toml",
        )
        .unwrap();

        assert_eq!(config.data_file.as_deref(), Some("entries.json"));
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0:8080"));
        let site = config.site.unwrap();
        assert_eq!(site.title, "My Diary");
        assert_eq!(site.description, "A collective diary of human experiences");
        assert_eq!(site.source_url, None);
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = Config::parse("bind: \"9000\"\n", "yml").unwrap();
        assert_eq!(yaml.bind.as_deref(), Some("9000"));

        let json = Config::parse(r#"{"data_file": "/srv/entries.json"}"#, "json").unwrap();
        assert_eq!(json.data_file.as_deref(), Some("/srv/entries.json"));

        assert!(matches!(
            Config::parse("not = [valid", "toml"),
            Err(DiaryError::Config(_))
        ));
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let config = Config {
            data_file: Some("entries.json".to_string()),
            source_path: Some(PathBuf::from("/etc/diary/diary.toml")),
            ..Default::default()
        };
        let settings = resolve_settings(
            &config,
            &LoadOptions::default(),
            EnvOverrides::default(),
            Path::new("/home/me"),
        );
        assert_eq!(settings.data_file, PathBuf::from("/etc/diary/entries.json"));
        assert_eq!(settings.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_use_cwd_option() {
        let config = Config {
            source_path: Some(PathBuf::from("/etc/diary/diary.toml")),
            ..Default::default()
        };
        let options = LoadOptions {
            use_cwd: true,
            ..Default::default()
        };
        let settings =
            resolve_settings(&config, &options, EnvOverrides::default(), Path::new("/srv"));
        assert_eq!(settings.data_file, PathBuf::from("/srv").join(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_precedence() {
        let config = Config {
            data_file: Some("file.json".to_string()),
            bind: Some("1111".to_string()),
            ..Default::default()
        };
        let env = EnvOverrides {
            data_file: Some("env.json".to_string()),
            bind: Some("2222".to_string()),
        };
        let options = LoadOptions {
            data_file: Some(PathBuf::from("flag.json")),
            ..Default::default()
        };
        let settings = resolve_settings(&config, &options, env, Path::new("/w"));
        assert_eq!(settings.data_file, PathBuf::from("/w/flag.json"));
        assert_eq!(settings.bind, "2222");
    }
}
