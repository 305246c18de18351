//! Configuration handling for the form

use crate::validation::{BandThresholds, NamePolicy, PhonePolicy, RatingRange, ValidationRules};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration, read from `config.json` in the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Name/surname character policy
    pub name_policy: Option<NamePolicy>,
    /// Phone acceptance policy
    pub phone_policy: Option<PhonePolicy>,
    /// Lowest slider value
    pub rating_min: Option<u8>,
    /// Highest slider value
    pub rating_max: Option<u8>,
    /// Initial slider value
    pub rating_default: Option<u8>,
    /// Average from which the medium band starts (inclusive)
    pub medium_from: Option<u32>,
    /// Average from which the high band starts (inclusive)
    pub high_from: Option<u32>,
    /// How long the confirmation stays visible, in milliseconds
    pub notice_ms: Option<u64>,
    /// Copy every submission to the clipboard as JSON
    pub copy_on_submit: Option<bool>,
}

/// Resolved settings with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub rules: ValidationRules,
    pub range: RatingRange,
    pub default_rating: u8,
    pub thresholds: BandThresholds,
    pub notice_duration: Duration,
    pub copy_on_submit: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        FormConfig::default().settings()
    }
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply defaults and reject inconsistent values
    pub fn settings(&self) -> FormSettings {
        let range = match (self.rating_min, self.rating_max) {
            (None, None) => RatingRange::DEFAULT,
            (min, max) => RatingRange::new(
                min.unwrap_or(RatingRange::DEFAULT.min),
                max.unwrap_or(RatingRange::DEFAULT.max),
            )
            .unwrap_or_else(|| {
                tracing::warn!(?min, ?max, "invalid rating range, using default");
                RatingRange::DEFAULT
            }),
        };

        let default_rating = range.clamp(
            self.rating_default
                .unwrap_or(range.min + (range.max - range.min) / 2),
        );

        let thresholds = BandThresholds::new(
            self.medium_from
                .unwrap_or(BandThresholds::DEFAULT.medium_from),
            self.high_from.unwrap_or(BandThresholds::DEFAULT.high_from),
        )
        .unwrap_or_else(|| {
            tracing::warn!(
                medium_from = ?self.medium_from,
                high_from = ?self.high_from,
                "invalid band thresholds, using default"
            );
            BandThresholds::DEFAULT
        });

        FormSettings {
            rules: ValidationRules {
                name: self.name_policy.unwrap_or_default(),
                phone: self.phone_policy.unwrap_or_default(),
            },
            range,
            default_rating,
            thresholds,
            notice_duration: self
                .notice_ms
                .map(Duration::from_millis)
                .unwrap_or(crate::state::Notifier::DEFAULT_DURATION),
            copy_on_submit: self.copy_on_submit.unwrap_or(false),
        }
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
    }
}
