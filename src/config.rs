//! # Run configuration
//!
//! Raw, possibly incomplete inputs for a monitoring run, as read from a TOML file or the
//! command line, and the rules that turn them into validated
//! [`MonitorParams`](crate::monitor::MonitorParams).
//!
//! ## File format
//!
//! Every key is optional:
//!
//! ```toml
//! mode = "synthetic"      # or "tle"
//! object_count = 6
//! seed = 7
//! threshold_km = 350.0
//! future_steps = 18
//! # tle_file = "stations.tle"
//! # tle_text = "..."
//! ```
//!
//! ## Defaulting rules
//! -----------------
//! | field          | default | resolution                                     |
//! |----------------|---------|------------------------------------------------|
//! | `mode`         | synthetic, or tle when a TLE input is given | unknown string is an error |
//! | `object_count` | 4       | missing, zero or negative ⇒ default            |
//! | `seed`         | 42      | missing or zero ⇒ default                      |
//! | `threshold_km` | 350     | missing, zero or NaN ⇒ default; negative or infinite ⇒ error |
//! | `future_steps` | 18      | missing ⇒ default                              |
//!
//! A relative `tle_file` in a configuration file is resolved against the directory of
//! that file. One given on the command line is resolved against the working directory.
use std::{fmt, str::FromStr};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    constants::{
        Kilometer, DEFAULT_FUTURE_STEPS, DEFAULT_OBJECT_COUNT, DEFAULT_SEED, DEFAULT_THRESHOLD_KM,
    },
    monitor::{MonitorParams, TrajectorySource},
    proxorbit_errors::ProxOrbitError,
};

/// Which trajectory source a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    #[default]
    #[serde(alias = "sim")]
    Synthetic,
    #[serde(alias = "tle-text")]
    Tle,
}

impl FromStr for SourceMode {
    type Err = ProxOrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "synthetic" | "sim" => Ok(SourceMode::Synthetic),
            "tle" | "tle-text" => Ok(SourceMode::Tle),
            _ => Err(ProxOrbitError::UnknownSourceMode(s.to_string())),
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Synthetic => write!(f, "synthetic"),
            SourceMode::Tle => write!(f, "tle"),
        }
    }
}

/// Unvalidated run inputs; see the module docs for the defaulting rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    pub mode: Option<SourceMode>,
    pub object_count: Option<i64>,
    pub seed: Option<i64>,
    pub tle_file: Option<Utf8PathBuf>,
    pub tle_text: Option<String>,
    pub threshold_km: Option<f64>,
    pub future_steps: Option<usize>,
}

impl MonitorConfig {
    /// Read a TOML configuration file.
    ///
    /// A relative `tle_file` is rewritten against the parent directory of `path`.
    pub fn load(path: &Utf8Path) -> Result<Self, ProxOrbitError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(tle_file), Some(dir)) = (&config.tle_file, path.parent()) {
            if tle_file.is_relative() {
                config.tle_file = Some(dir.join(tle_file));
            }
        }
        info!(path = %path, "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ProxOrbitError> {
        Ok(toml::from_str(content)?)
    }

    /// Fields set in `other` replace the ones in `self`.
    pub fn merge(mut self, other: MonitorConfig) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $( if other.$field.is_some() { self.$field = other.$field; } )*
            };
        }
        take!(mode, object_count, seed, tle_file, tle_text, threshold_km, future_steps);
        self
    }

    /// Effective mode: explicit, else `tle` when a TLE input is present, else `synthetic`.
    pub fn effective_mode(&self) -> SourceMode {
        self.mode.unwrap_or(if self.tle_file.is_some() || self.tle_text.is_some() {
            SourceMode::Tle
        } else {
            SourceMode::Synthetic
        })
    }

    /// Apply the defaulting rules and validate.
    ///
    /// In TLE mode the text comes from `tle_text` when set, otherwise from `tle_file`,
    /// otherwise it is empty (which yields an empty trajectory set, not an error).
    pub fn resolve(&self) -> Result<MonitorParams, ProxOrbitError> {
        let source = match self.effective_mode() {
            SourceMode::Synthetic => TrajectorySource::Synthetic {
                object_count: resolve_object_count(self.object_count),
                seed: resolve_seed(self.seed),
            },
            SourceMode::Tle => {
                let text = match (&self.tle_text, &self.tle_file) {
                    (Some(text), _) => text.clone(),
                    (None, Some(path)) => {
                        debug!(path = %path, "reading TLE file");
                        std::fs::read_to_string(path)?
                    }
                    (None, None) => String::new(),
                };
                TrajectorySource::TleText(text)
            }
        };

        MonitorParams::builder()
            .source(source)
            .threshold_km(resolve_threshold(self.threshold_km))
            .future_steps(self.future_steps.unwrap_or(DEFAULT_FUTURE_STEPS))
            .build()
    }
}

/// Missing, zero or negative counts fall back to the default.
pub fn resolve_object_count(raw: Option<i64>) -> usize {
    match raw {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_OBJECT_COUNT),
        _ => DEFAULT_OBJECT_COUNT,
    }
}

/// Missing or zero seeds fall back to the default.
pub fn resolve_seed(raw: Option<i64>) -> i64 {
    match raw {
        Some(0) | None => DEFAULT_SEED,
        Some(s) => s,
    }
}

/// Missing, zero or NaN thresholds fall back to the default. Negative and infinite values
/// are passed through so that [`MonitorParams`] validation rejects them.
pub fn resolve_threshold(raw: Option<f64>) -> Kilometer {
    match raw {
        Some(t) if t != 0.0 && !t.is_nan() => t,
        _ => DEFAULT_THRESHOLD_KM,
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn test_empty_config_resolves_to_defaults() {
        let params = MonitorConfig::default().resolve().unwrap();
        assert_eq!(params, MonitorParams::default());

        let parsed = MonitorConfig::from_toml_str("").unwrap();
        assert_eq!(parsed, MonitorConfig::default());
    }

    #[test]
    fn test_defaulting_rules() {
        assert_eq!(resolve_object_count(None), 4);
        assert_eq!(resolve_object_count(Some(0)), 4);
        assert_eq!(resolve_object_count(Some(-3)), 4);
        assert_eq!(resolve_object_count(Some(9)), 9);

        assert_eq!(resolve_seed(None), 42);
        assert_eq!(resolve_seed(Some(0)), 42);
        assert_eq!(resolve_seed(Some(-7)), -7);

        assert_eq!(resolve_threshold(None), 350.0);
        assert_eq!(resolve_threshold(Some(0.0)), 350.0);
        assert_eq!(resolve_threshold(Some(f64::NAN)), 350.0);
        assert_eq!(resolve_threshold(Some(120.0)), 120.0);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        for bad in [-1.0, f64::INFINITY] {
            let config = MonitorConfig {
                threshold_km: Some(bad),
                ..Default::default()
            };
            assert!(matches!(
                config.resolve(),
                Err(ProxOrbitError::InvalidMonitorParameter(_))
            ));
        }
    }

    #[test]
    fn test_source_mode_parsing() {
        assert_eq!("synthetic".parse::<SourceMode>().unwrap(), SourceMode::Synthetic);
        assert_eq!(" TLE ".parse::<SourceMode>().unwrap(), SourceMode::Tle);
        assert_eq!(
            "radar".parse::<SourceMode>(),
            Err(ProxOrbitError::UnknownSourceMode("radar".into()))
        );

        let bad = MonitorConfig::from_toml_str("mode = \"radar\"");
        assert!(matches!(bad, Err(ProxOrbitError::ConfigParseError(_))));
    }

    #[test]
    fn test_toml_fields() {
        let config = MonitorConfig::from_toml_str(
            r#"
            mode = "synthetic"
            object_count = 6
            seed = 7
            threshold_km = 500.0
            future_steps = 10
            "#,
        )
        .unwrap();
        let params = config.resolve().unwrap();
        assert_eq!(
            params.source,
            TrajectorySource::Synthetic {
                object_count: 6,
                seed: 7
            }
        );
        assert_eq!(params.threshold_km, 500.0);
        assert_eq!(params.future_steps, 10);
    }

    #[test]
    fn test_tle_mode_inference_and_merge() {
        let base = MonitorConfig {
            object_count: Some(8),
            ..Default::default()
        };
        let overrides = MonitorConfig {
            tle_text: Some("ISS\n1 x\n2 25544 51.64".into()),
            ..Default::default()
        };
        let merged = base.merge(overrides);
        assert_eq!(merged.object_count, Some(8));
        assert_eq!(merged.effective_mode(), SourceMode::Tle);
        assert!(matches!(
            merged.resolve().unwrap().source,
            TrajectorySource::TleText(_)
        ));
    }

    #[test]
    fn test_missing_tle_file() {
        let config = MonitorConfig {
            mode: Some(SourceMode::Tle),
            tle_file: Some("does/not/exist.tle".into()),
            ..Default::default()
        };
        assert!(matches!(config.resolve(), Err(ProxOrbitError::IoError(_))));
    }
}
