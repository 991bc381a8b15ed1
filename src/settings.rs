//! # Settings Module
//!
//! ## Purpose
//! Holds the numeric constants the rate constant calculator treats as configuration:
//! the two gas constants, the Arrhenius reference temperature, the collision factor
//! of falloff expressions and the pressure tolerance of PLOG tables.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "rc_cal": 1.98720425864083,
//!   "rc_atm": 82.0573661,
//!   "t_ref": 1.0,
//!   "collid_factor": 1.0,
//!   "plog_tolerance": 0.001
//! }
//! ```
//! Missing fields fall back to their defaults.
//!
//! ## Usage Pattern
//! ```rust
//! use KiTP::settings::RateSettings;
//!
//! let settings = RateSettings::from_json_str(r#"{"t_ref": 298.0}"#).unwrap();
//! assert_eq!(settings.t_ref, 298.0);
//! assert_eq!(settings.collid_factor, 1.0);
//! ```

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// gas constant in cal/(mol*K)
pub const RC_CAL: f64 = 1.98720425864083;
/// gas constant in cm^3*atm/(mol*K)
pub const RC_ATM: f64 = 82.0573661;
/// tolerance used to decide that a requested pressure coincides with a PLOG pressure
pub const PLOG_TOLERANCE: f64 = 1.0e-3;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid settings value: {0}")]
    Invalid(String),
}

/// Constants used by every evaluator of the crate.
///
/// # Fields
/// * `rc_cal` - gas constant in cal/(mol*K), used in the Arrhenius exponent
/// * `rc_atm` - gas constant in cm^3*atm/(mol*K), used to convert pressure to concentration [M]
/// * `t_ref` - reference temperature of the Arrhenius expression A*(T/T_ref)^n*exp(-Ea/RT)
/// * `collid_factor` - buffer gas collision efficiency multiplying the reduced pressure
/// * `plog_tolerance` - absolute tolerance for matching a pressure to a PLOG table entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSettings {
    pub rc_cal: f64,
    pub rc_atm: f64,
    pub t_ref: f64,
    pub collid_factor: f64,
    pub plog_tolerance: f64,
}

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            rc_cal: RC_CAL,
            rc_atm: RC_ATM,
            t_ref: 1.0,
            collid_factor: 1.0,
            plog_tolerance: PLOG_TOLERANCE,
        }
    }
}

impl RateSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: RateSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a JSON file; fields absent from the file keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&content)?;
        info!("rate settings loaded from '{}'", path.as_ref().display());
        Ok(settings)
    }

    /// Rejects constants that would make every rate constant NaN or infinite.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("rc_cal", self.rc_cal),
            ("rc_atm", self.rc_atm),
            ("t_ref", self.t_ref),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !(self.collid_factor.is_finite() && self.collid_factor >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "collid_factor must be non-negative, got {}",
                self.collid_factor
            )));
        }
        if !(self.plog_tolerance.is_finite() && self.plog_tolerance >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "plog_tolerance must be non-negative, got {}",
                self.plog_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = RateSettings::default();
        assert_eq!(settings.rc_cal, RC_CAL);
        assert_eq!(settings.rc_atm, RC_ATM);
        assert_eq!(settings.t_ref, 1.0);
        assert_eq!(settings.collid_factor, 1.0);
        assert_eq!(settings.plog_tolerance, 1.0e-3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = RateSettings::from_json_str(r#"{"collid_factor": 2.5}"#).unwrap();
        assert_eq!(settings.collid_factor, 2.5);
        assert_eq!(settings.rc_cal, RC_CAL);
        assert_eq!(settings.t_ref, 1.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let res = RateSettings::from_json_str(r#"{"rc_atm": 0.0}"#);
        assert!(matches!(res, Err(SettingsError::Invalid(_))));
        let res = RateSettings::from_json_str(r#"{"plog_tolerance": -1.0}"#);
        assert!(matches!(res, Err(SettingsError::Invalid(_))));
        let res = RateSettings::from_json_str("not json");
        assert!(matches!(res, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"t_ref": 300.0, "rc_cal": 1.987}}"#).unwrap();
        let settings = RateSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.t_ref, 300.0);
        assert_eq!(settings.rc_cal, 1.987);
        assert_eq!(settings.rc_atm, RC_ATM);

        let missing = RateSettings::from_json_file("no_such_settings_file.json");
        assert!(matches!(missing, Err(SettingsError::Io(_))));
    }
}
