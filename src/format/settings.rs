use crate::error::QuantityError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of decimals an `f64` can meaningfully carry.
const MAX_DECIMALS: usize = 17;

/// Numeric formatting options shared by every output dialect.
///
/// Every finite number renders with `decimals + 1` significant digits (one
/// before the point in scientific notation, `decimals` after it). Numbers
/// whose magnitude falls in `[fixed_lower_bound, fixed_upper_bound)` (and
/// zero) use fixed notation; everything else uses scientific notation.
///
/// ```toml
/// decimals = 15
/// fixed_lower_bound = 0.001
/// fixed_upper_bound = 1000000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSettings {
    pub decimals: usize,
    pub fixed_lower_bound: f64,
    pub fixed_upper_bound: f64,
}

impl FormatSettings {
    pub const DEFAULT: Self = Self {
        decimals: 15,
        fixed_lower_bound: 1e-3,
        fixed_upper_bound: 1e6,
    };

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, QuantityError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, QuantityError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading format settings");

        let text = fs::read_to_string(path).map_err(|source| QuantityError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "rejected format settings");
        })
    }

    pub fn validate(&self) -> Result<(), QuantityError> {
        if self.decimals > MAX_DECIMALS {
            return Err(QuantityError::InvalidSettings(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }

        let bounds_usable = self.fixed_lower_bound.is_finite()
            && self.fixed_upper_bound.is_finite()
            && self.fixed_lower_bound > 0.0
            && self.fixed_lower_bound < self.fixed_upper_bound;
        if !bounds_usable {
            return Err(QuantityError::InvalidSettings(format!(
                "fixed-notation window [{}, {}) must be positive and ordered",
                self.fixed_lower_bound, self.fixed_upper_bound
            )));
        }

        Ok(())
    }
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = FormatSettings::from_toml_str("decimals = 6").unwrap();
        assert_eq!(settings.decimals, 6);
        assert_eq!(settings.fixed_lower_bound, 1e-3);
        assert_eq!(settings.fixed_upper_bound, 1e6);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        assert!(matches!(
            FormatSettings::from_toml_str("decimals = 40"),
            Err(QuantityError::InvalidSettings(_))
        ));
        assert!(matches!(
            FormatSettings::from_toml_str("fixed_lower_bound = 10.0\nfixed_upper_bound = 1.0"),
            Err(QuantityError::InvalidSettings(_))
        ));
        assert!(matches!(
            FormatSettings::from_toml_str("precision = 3"),
            Err(QuantityError::Settings(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "decimals = 3\nfixed_upper_bound = 1000.0").unwrap();

        let settings = FormatSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.decimals, 3);
        assert_eq!(settings.fixed_upper_bound, 1000.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FormatSettings::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(QuantityError::Io { .. })));
    }
}
