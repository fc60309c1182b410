//! Configuration files and option merging.
//!
//! Configuration is INI-style: `[section]` headers followed by `key = value`
//! lines. Every named section inherits unset keys from `[DEFAULT]`, and
//! options given on the command line win over both.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_SECTION: &str = "DEFAULT";

const CONFIG_NAME: &str = "mattersend";

/// Destination options a message is built from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageOptions {
    pub url: Option<String>,
    pub channel: Option<String>,
    pub username: Option<String>,
    pub icon: Option<String>,
}

impl MessageOptions {
    /// Merge two option sets; values set in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            url: other.url.clone().or_else(|| self.url.clone()),
            channel: other.channel.clone().or_else(|| self.channel.clone()),
            username: other.username.clone().or_else(|| self.username.clone()),
            icon: other.icon.clone().or_else(|| self.icon.clone()),
        }
    }

    fn from_section(section: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| section.get(key).cloned();
        Self {
            url: get("url"),
            channel: get("channel"),
            username: get("username"),
            icon: get("icon"),
        }
    }
}

/// Parsed configuration: section name to key/value pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    /// Parse INI text. Keys are lowercased and values trimmed; lines
    /// before the first header belong to `DEFAULT`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for lines that are neither a header,
    /// a comment, nor a `key = value` / `key: value` pair.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current = DEFAULT_SECTION.to_string();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = name.trim().to_string();
                config.sections.entry(current.clone()).or_default();
                continue;
            }
            let Some(split) = line.find(['=', ':']) else {
                return Err(Error::config(format!(
                    "Invalid configuration line {}: {line}",
                    number + 1
                )));
            };
            let key = line[..split].trim().to_lowercase();
            let value = line[split + 1..].trim().to_string();
            config
                .sections
                .entry(current.clone())
                .or_default()
                .insert(key, value);
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::config(format!("Failed to read config {}: {err}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|err| Error::config(format!("{}: {err}", path.display())))
    }

    /// Overlay `other` on top of this configuration, key by key.
    pub fn merge(&mut self, other: Self) {
        for (name, entries) in other.sections {
            self.sections.entry(name).or_default().extend(entries);
        }
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Options of `name`, with unset keys taken from `DEFAULT`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a named section does not exist.
    pub fn section(&self, name: &str) -> Result<MessageOptions> {
        let defaults = self
            .sections
            .get(DEFAULT_SECTION)
            .map(MessageOptions::from_section)
            .unwrap_or_default();
        if name == DEFAULT_SECTION {
            return Ok(defaults);
        }
        let section = self
            .sections
            .get(name)
            .ok_or_else(|| Error::config(format!("No section: '{name}'")))?;
        Ok(defaults.union(&MessageOptions::from_section(section)))
    }
}

/// System-wide then per-user configuration file.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(format!("/etc/{CONFIG_NAME}.conf"))];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{CONFIG_NAME}.conf")));
    }
    paths
}

/// Load configuration from an explicit file, or merge whichever default
/// files exist.
///
/// # Errors
///
/// Returns a configuration error if the explicit file is missing, or if
/// any file that exists cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }
    load_config_paths(&default_config_paths())
}

/// Merge the files in `paths` that exist; later files win.
///
/// # Errors
///
/// Returns a configuration error if an existing file cannot be parsed.
pub fn load_config_paths(paths: &[PathBuf]) -> Result<Config> {
    let mut config = Config::default();
    for path in paths.iter().filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "loading config");
        config.merge(Config::load(path)?);
    }
    Ok(config)
}
