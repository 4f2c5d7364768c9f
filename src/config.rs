//! TOML configuration: normalization options and enabled blacklists.
//!
//! ```toml
//! [options]
//! append_year = true
//! append_extension = false
//! strip_release_group = true
//!
//! [blacklists]
//! Source = true
//! Encoding = true
//! Resolution = true
//! ```
//!
//! An empty or missing `[blacklists]` table enables every category. Keys
//! name categories case-insensitively, `"*"` enables all of them, and keys
//! naming no category are ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::normalize::{CategorySet, NormalizeOptions};
use crate::Error;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsSection {
    pub append_year: bool,
    pub append_extension: bool,
    pub strip_release_group: bool,
}

impl Default for OptionsSection {
    fn default() -> Self {
        let defaults = NormalizeOptions::default();
        Self {
            append_year: defaults.append_year,
            append_extension: defaults.append_extension,
            strip_release_group: defaults.strip_release_group,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub options: OptionsSection,
    pub blacklists: BTreeMap<String, bool>,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `explicit`, else from the XDG config home, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path()? {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// The enabled blacklist categories.
    pub fn categories(&self) -> CategorySet {
        if self.blacklists.is_empty() {
            return CategorySet::all();
        }

        let flags = self.blacklists.iter().map(|(k, v)| (k.as_str(), *v));
        let (set, unknown) = CategorySet::from_flags(flags);
        for key in unknown {
            warn!(key, "ignoring unknown blacklist category");
        }
        set
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            append_year: self.options.append_year,
            append_extension: self.options.append_extension,
            strip_release_group: self.options.strip_release_group,
            categories: self.categories(),
        }
    }
}

/// `$XDG_CONFIG_HOME/moviename/config.toml`, when it exists.
pub fn default_path() -> Result<Option<PathBuf>, Error> {
    let dirs = xdg::BaseDirectories::with_prefix("moviename")
        .map_err(|e| Error::Config(e.to_string()))?;
    Ok(dirs.find_config_file(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Category;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.normalize_options(), NormalizeOptions::default());
    }

    #[test]
    fn test_options_section() {
        let config = Config::from_toml_str(
            r#"
            [options]
            append_year = false
            append_extension = true
            "#,
        )
        .unwrap();
        let options = config.normalize_options();
        assert!(!options.append_year);
        assert!(options.append_extension);
        assert!(options.strip_release_group);
    }

    #[test]
    fn test_blacklists_section() {
        let config = Config::from_toml_str(
            r#"
            [blacklists]
            source = true
            Encoding = true
            Codecs = true
            "#,
        )
        .unwrap();
        let categories = config.categories();
        assert!(categories.is_enabled(Category::Source));
        assert!(categories.is_enabled(Category::Encoding));
        assert!(!categories.is_enabled(Category::Subs));
    }

    #[test]
    fn test_wildcard_key() {
        let config = Config::from_toml_str(
            r#"
            [blacklists]
            "*" = true
            Subs = false
            "#,
        )
        .unwrap();
        assert_eq!(config.categories(), CategorySet::all());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[options]\nappend_year = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[options]\nappend_extension = true").unwrap();

        let config = Config::discover(Some(file.path())).unwrap();
        assert!(config.options.append_extension);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/moviename.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
