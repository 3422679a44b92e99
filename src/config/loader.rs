//! Policy loading and override merging.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::ShiftPolicy;

impl ShiftPolicy {
    /// Loads a policy from a YAML file.
    ///
    /// Fields absent from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PolicyNotFound`] when the file does not exist
    /// and [`EngineError::PolicyParseError`] when it is not valid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ShiftPolicy;
    ///
    /// let policy = ShiftPolicy::load("./config/policy.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        let policy: ShiftPolicy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        policy.validate()?;
        Ok(policy)
    }

    /// Builds a policy from an optional JSON override string.
    ///
    /// `None`, an empty string, or an unparsable string all fall back to the
    /// default policy; a parse failure is logged at warn level rather than
    /// rejected, matching how override strings arrive alongside uploads.
    /// Fields absent from the overrides take their default values.
    pub fn from_overrides(overrides: Option<&str>) -> Self {
        let Some(raw) = overrides.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str::<ShiftPolicy>(raw) {
            Ok(policy) => match policy.validate() {
                Ok(()) => policy,
                Err(e) => {
                    warn!(error = %e, "Invalid policy overrides, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(error = %e, "Unparsable policy overrides, using defaults");
                Self::default()
            }
        }
    }

    /// Checks that the policy's fields are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] for negative grace thresholds
    /// and [`EngineError::InvalidTime`] for malformed window bounds.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tardy_minutes < 0 {
            return Err(EngineError::InvalidPolicy {
                field: "tardy_minutes".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        if self.early_minutes < 0 {
            return Err(EngineError::InvalidPolicy {
                field: "early_minutes".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        self.am.bounds()?;
        self.pm.bounds()?;
        Ok(())
    }
}
