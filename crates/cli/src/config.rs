//! Pipeline configuration

use anyhow::Result;
use forecast_lib::PipelineConfig;
use serde::Deserialize;

/// Pipeline settings loaded from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    /// Outlier band width in standard deviations
    #[serde(default = "default_sigma_threshold")]
    pub sigma_threshold: f64,

    /// Whether the pipeline keeps running after a validation failure
    #[serde(default = "default_continue_on_validation_failure")]
    pub continue_on_validation_failure: bool,
}

fn default_sigma_threshold() -> f64 {
    2.0
}

fn default_continue_on_validation_failure() -> bool {
    true
}

impl PipelineSettings {
    /// Load settings from FORECAST_-prefixed environment variables
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("FORECAST"))
            .build()?;

        Ok(settings
            .try_deserialize()
            .unwrap_or_else(|_| PipelineSettings {
                sigma_threshold: default_sigma_threshold(),
                continue_on_validation_failure: default_continue_on_validation_failure(),
            }))
    }

    /// Apply command-line overrides on top of the loaded settings
    pub fn with_overrides(
        mut self,
        sigma: Option<f64>,
        continue_on_validation_failure: Option<bool>,
    ) -> Self {
        if let Some(sigma) = sigma {
            self.sigma_threshold = sigma;
        }
        if let Some(policy) = continue_on_validation_failure {
            self.continue_on_validation_failure = policy;
        }
        self
    }
}

impl From<PipelineSettings> for PipelineConfig {
    fn from(settings: PipelineSettings) -> Self {
        Self {
            sigma_threshold: settings.sigma_threshold,
            continue_on_validation_failure: settings.continue_on_validation_failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PipelineSettings {
            sigma_threshold: default_sigma_threshold(),
            continue_on_validation_failure: default_continue_on_validation_failure(),
        };
        assert_eq!(settings.sigma_threshold, 2.0);
        assert!(settings.continue_on_validation_failure);
    }

    #[test]
    fn test_overrides_apply() {
        let settings = PipelineSettings {
            sigma_threshold: 2.0,
            continue_on_validation_failure: true,
        }
        .with_overrides(Some(1.5), Some(false));

        assert_eq!(settings.sigma_threshold, 1.5);
        assert!(!settings.continue_on_validation_failure);
    }

    #[test]
    fn test_none_overrides_keep_settings() {
        let settings = PipelineSettings {
            sigma_threshold: 3.0,
            continue_on_validation_failure: false,
        }
        .with_overrides(None, None);

        assert_eq!(settings.sigma_threshold, 3.0);
        assert!(!settings.continue_on_validation_failure);
    }
}
