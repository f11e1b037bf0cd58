//! Site-settings sections and payload validation.
//!
//! Settings are stored one row per section with a free-form JSON document.
//! The set of sections is closed; unknown section names are rejected.

use crate::error::CoreError;

/// The three editable settings sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    /// Site-wide general settings (titles, hero copy, contact links).
    General,
    /// Color theme tokens.
    Theme,
    /// Font family and sizing tokens.
    Typography,
}

/// Valid section name values.
const VALID_SECTIONS: &[&str] = &["general", "theme", "typography"];

impl SettingsSection {
    /// Parse from the stored `section` column / URL path segment.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "general" => Ok(Self::General),
            "theme" => Ok(Self::Theme),
            "typography" => Ok(Self::Typography),
            other => Err(CoreError::Validation(format!(
                "Unknown settings section '{other}'. Must be one of: {}",
                VALID_SECTIONS.join(", ")
            ))),
        }
    }

    /// Stored name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Theme => "theme",
            Self::Typography => "typography",
        }
    }
}

/// Validate a settings payload: it must be a JSON object.
///
/// Individual keys are section-specific and edited as an opaque document;
/// only the top-level shape is enforced here.
pub fn validate_settings_payload(data: &serde_json::Value) -> Result<(), CoreError> {
    if data.is_object() {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Settings payload must be a JSON object".into(),
        ))
    }
}
