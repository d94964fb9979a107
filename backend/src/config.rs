//! Classification configuration.
//!
//! Thresholds, age buckets, the capex plan and the notification ordering are
//! all injected through [`FleetConfig`], usually read from a `fleet.toml` file.
//! Every field has a serde default, so an empty file yields
//! `FleetConfig::default()`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, FleetError, FleetResult};

/// Margins (in years) before economic life at which an asset needs action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    #[serde(default = "default_rejuvenation_margin")]
    pub rejuvenation_margin_years: u32,
    #[serde(default = "default_replacement_margin")]
    pub replacement_margin_years: u32,
}

fn default_rejuvenation_margin() -> u32 {
    2
}

fn default_replacement_margin() -> u32 {
    1
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            rejuvenation_margin_years: default_rejuvenation_margin(),
            replacement_margin_years: default_replacement_margin(),
        }
    }
}

/// Half-open age range `[min_years, max_years)`. `max_years = None` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucket {
    pub label: String,
    pub min_years: u32,
    #[serde(default)]
    pub max_years: Option<u32>,
}

impl AgeBucket {
    pub fn new(label: impl Into<String>, min_years: u32, max_years: Option<u32>) -> Self {
        Self {
            label: label.into(),
            min_years,
            max_years,
        }
    }

    pub fn contains(&self, age_years: u32) -> bool {
        age_years >= self.min_years && self.max_years.map_or(true, |max| age_years < max)
    }

    fn overlaps(&self, other: &AgeBucket) -> bool {
        let self_below_other = self.max_years.is_some_and(|max| max <= other.min_years);
        let other_below_self = other.max_years.is_some_and(|max| max <= self.min_years);
        !(self_below_other || other_below_self)
    }
}

/// One period of the capex projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapexPlanPoint {
    pub label: String,
    pub value: f64,
}

impl CapexPlanPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Order in which notifications are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationOrder {
    /// Input (registration) order of the matching assets.
    #[default]
    Registration,
    /// Stable sort: critical, then warning, then muted.
    Severity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub order: NotificationOrder,
}

/// Complete classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub thresholds: ClassificationThresholds,
    #[serde(default = "default_age_buckets")]
    pub age_buckets: Vec<AgeBucket>,
    #[serde(default = "default_capex_plan")]
    pub capex_plan: Vec<CapexPlanPoint>,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// `[0,15) [15,25) [25,30) [30,∞)`, youngest to oldest.
pub fn default_age_buckets() -> Vec<AgeBucket> {
    vec![
        AgeBucket::new("0 - 15 years", 0, Some(15)),
        AgeBucket::new("15 - 25 years", 15, Some(25)),
        AgeBucket::new("25 - 30 years", 25, Some(30)),
        AgeBucket::new("> 30 years", 30, None),
    ]
}

fn default_capex_plan() -> Vec<CapexPlanPoint> {
    vec![
        CapexPlanPoint::new("Jan", 22.0),
        CapexPlanPoint::new("Mar", 38.0),
        CapexPlanPoint::new("May", 28.0),
        CapexPlanPoint::new("Jul", 44.0),
        CapexPlanPoint::new("Sep", 32.0),
        CapexPlanPoint::new("Nov", 54.0),
    ]
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            thresholds: ClassificationThresholds::default(),
            age_buckets: default_age_buckets(),
            capex_plan: default_capex_plan(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl FleetConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> FleetResult<Self> {
        let config: FleetConfig =
            toml::from_str(content).map_err(|e| FleetError::from(e).with_operation("parse_config"))?;
        config.validate()?;
        Ok(config)
    }

    /// Load fleet configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(FleetConfig)` if the file was read, parsed and validated
    /// * `Err(FleetError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> FleetResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FleetError::io_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("load_config").with_details(path.display().to_string()),
            )
        })?;

        log::debug!("Loaded fleet config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Locate `fleet.toml` relative to `root`.
    ///
    /// Searches, in order:
    /// 1. `root`
    /// 2. `root/backend/`
    /// 3. The parent of `root`
    pub fn find_in(root: &Path) -> Option<PathBuf> {
        let search_paths = [
            root.join("fleet.toml"),
            root.join("backend").join("fleet.toml"),
            root.join("..").join("fleet.toml"),
        ];

        search_paths.into_iter().find(|path| path.exists())
    }

    /// Load the first `fleet.toml` found under `root`.
    ///
    /// Returns `Ok(None)` only when no file exists. A file that exists but
    /// fails to read, parse or validate is an error.
    pub fn from_search_root(root: &Path) -> FleetResult<Option<Self>> {
        match Self::find_in(root) {
            Some(path) => Self::from_file(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Load fleet configuration from the default location (the current
    /// directory, see [`FleetConfig::find_in`]).
    pub fn from_default_location() -> FleetResult<Option<Self>> {
        Self::from_search_root(Path::new("."))
    }

    /// Check bucket ranges and capex values. Gaps between buckets are allowed;
    /// overlaps are not.
    pub fn validate(&self) -> FleetResult<()> {
        for bucket in &self.age_buckets {
            if let Some(max) = bucket.max_years {
                if max <= bucket.min_years {
                    return Err(FleetError::configuration_with_context(
                        format!(
                            "Age bucket '{}' is empty: min_years={} max_years={}",
                            bucket.label, bucket.min_years, max
                        ),
                        ErrorContext::new("validate_config").with_field("age_buckets"),
                    ));
                }
            }
        }

        for point in &self.capex_plan {
            if !point.value.is_finite() || point.value < 0.0 {
                return Err(FleetError::configuration_with_context(
                    format!(
                        "Capex value for '{}' must be finite and non-negative, got {}",
                        point.label, point.value
                    ),
                    ErrorContext::new("validate_config").with_field("capex_plan"),
                ));
            }
        }

        for (i, a) in self.age_buckets.iter().enumerate() {
            for b in &self.age_buckets[i + 1..] {
                if a.overlaps(b) {
                    return Err(FleetError::configuration_with_context(
                        format!("Age buckets '{}' and '{}' overlap", a.label, b.label),
                        ErrorContext::new("validate_config").with_field("age_buckets"),
                    ));
                }
            }
        }

        Ok(())
    }
}
