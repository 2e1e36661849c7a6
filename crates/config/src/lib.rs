//! Configuration models and loaders for the Space Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Named orbital scenario parsed from preset catalogs.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrbitalPreset {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub radius_km: f64,
    pub central_mass_kg: f64,
    pub orbital_mass_kg: f64,
}

/// Angle mode the scientific calculator starts in.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngleModeSetting {
    #[default]
    #[serde(alias = "deg")]
    Degrees,
    #[serde(alias = "rad")]
    Radians,
}

/// Shell defaults read from `settings.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub angle_mode: AngleModeSetting,
    pub default_category: String,
    pub presets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            angle_mode: AngleModeSetting::Degrees,
            default_category: "basic".to_string(),
            presets_dir: PathBuf::from("configs/presets"),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load orbital presets from a YAML file, a single TOML file, or a directory of TOML files.
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<OrbitalPreset>, ConfigError> {
    load_records(path)
}

/// Find a preset by name (case-insensitive).
pub fn find_preset<'a>(presets: &'a [OrbitalPreset], name: &str) -> Option<&'a OrbitalPreset> {
    presets
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Load shell settings from a TOML file. Missing keys take their defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Like [`load_settings`], but a missing file yields [`Settings::default`].
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
