//! Dashboard configuration.
//!
//! The configuration is a TOML file. It is looked up in this order:
//! 1. an explicit path (the `--config` flag)
//! 2. the `DEMOG_CONFIG` environment variable
//! 3. `config.toml` in the platform configuration directory
//!
//! A missing file at step 2 or 3 falls back to defaults; an explicit path
//! must exist. A malformed file is always an error.
//!
//! ```toml
//! data_dir = "data"
//!
//! [files]
//! symposium = "Symposia_2018.csv"
//!
//! [hiring]
//! default_stage = "short-list"
//!
//! [display]
//! dark_mode = true
//! chart_height = 400.0
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use demog_model::Variant;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "DEMOG_CONFIG";

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "demog";
const APP_NAME: &str = "Demographics Dashboard";
const CONFIG_FILENAME: &str = "config.toml";

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding one input file per variant.
    pub data_dir: PathBuf,
    pub files: FileOverrides,
    pub hiring: HiringSettings,
    pub display: DisplaySettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: FileOverrides::default(),
            hiring: HiringSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Per-variant file name overrides, relative to `data_dir` unless absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub science_evaluation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_staff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_promotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symposium: Option<String>,
}

impl FileOverrides {
    pub fn get(&self, variant: Variant) -> Option<&str> {
        let name = match variant {
            Variant::Hiring => &self.hiring,
            Variant::ScienceEvaluation => &self.science_evaluation,
            Variant::ResearchStaff => &self.research_staff,
            Variant::RenewalPromotion => &self.renewal_promotion,
            Variant::Symposium => &self.symposium,
        };
        name.as_deref()
    }
}

/// Hiring panel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringSettings {
    /// Initial value of the "Hiring Stage" dropdown.
    pub default_stage: String,
}

impl Default for HiringSettings {
    fn default() -> Self {
        Self {
            default_stage: Variant::Hiring.spec().default_key.to_string(),
        }
    }
}

/// Display preferences shared by the surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Chart plot height in points.
    pub chart_height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            chart_height: 350.0,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from TOML text; `path` is used in errors.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| DashboardError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Locate and load the configuration.
    ///
    /// Returns the configuration and the file it came from, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        resolve_with(
            explicit,
            std::env::var_os(CONFIG_ENV_VAR),
            default_config_path(),
        )
    }

    /// Full path of the input file for `variant`.
    pub fn file_path(&self, variant: Variant) -> PathBuf {
        let name = self
            .files
            .get(variant)
            .unwrap_or(variant.spec().file_name);
        self.data_dir.join(name)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DashboardError::Config {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }
}

/// `config.toml` in the platform configuration directory.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn resolve_with(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    platform: Option<PathBuf>,
) -> Result<(DashboardConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((DashboardConfig::load(path)?, Some(path.to_path_buf())));
    }

    let discovered = env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .into_iter()
        .chain(platform);
    for path in discovered {
        match fs::read_to_string(&path) {
            Ok(content) => {
                let config = DashboardConfig::from_toml_str(&content, &path)?;
                tracing::info!(path = %path.display(), "loaded configuration");
                return Ok((config, Some(path)));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file");
            }
            Err(source) => return Err(DashboardError::ConfigRead { path, source }),
        }
    }

    Ok((DashboardConfig::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.hiring.default_stage, "pool");
        assert_eq!(
            config.file_path(Variant::Symposium),
            PathBuf::from("data").join("Symposia.csv")
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = DashboardConfig::from_toml_str(
            "data_dir = \"/srv/stats\"\n[files]\nresearch-staff = \"staff.csv\"\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(
            config.file_path(Variant::ResearchStaff),
            PathBuf::from("/srv/stats/staff.csv")
        );
        assert_eq!(
            config.file_path(Variant::Hiring),
            PathBuf::from("/srv/stats/SRC_stats_2012.csv")
        );
        assert_eq!(config.display, DisplaySettings::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let err = DashboardConfig::from_toml_str("data_dir = [", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, DashboardError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_round_trip() {
        let mut config = DashboardConfig::default();
        config.hiring.default_stage = "hire".to_string();
        config.display.dark_mode = true;
        let text = config.to_toml_string().unwrap();
        let parsed = DashboardConfig::from_toml_str(&text, Path::new("x.toml")).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_resolve_explicit_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = resolve_with(Some(&missing), None, None).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigRead { .. }));
    }

    #[test]
    fn test_resolve_env_before_platform() {
        let dir = TempDir::new().unwrap();
        let env_path = dir.path().join("env.toml");
        let platform_path = dir.path().join("platform.toml");
        fs::write(&env_path, "[hiring]\ndefault_stage = \"hire\"\n").unwrap();
        fs::write(&platform_path, "[hiring]\ndefault_stage = \"short-list\"\n").unwrap();

        let (config, source) = resolve_with(
            None,
            Some(env_path.clone().into_os_string()),
            Some(platform_path),
        )
        .unwrap();
        assert_eq!(config.hiring.default_stage, "hire");
        assert_eq!(source, Some(env_path));
    }

    #[test]
    fn test_resolve_missing_files_fall_back() {
        let dir = TempDir::new().unwrap();
        let (config, source) = resolve_with(
            None,
            Some(dir.path().join("a.toml").into_os_string()),
            Some(dir.path().join("b.toml")),
        )
        .unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert!(source.is_none());
    }
}
