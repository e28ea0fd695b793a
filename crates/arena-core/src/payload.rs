//! Import payload schema, validation, and the import error taxonomy.
//!
//! Parsing runs in three stages, each with its own failure mode:
//! raw text to JSON (`Malformed`), JSON to `ImportPayload` (`Schema`),
//! then range checks (`OutOfRange`, `NonFinite`, `EmptyTargets`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::state::ArenaConfig;
use crate::target::TargetDraft;

/// Arena block of an import payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaDimensions {
    pub width: f64,
    pub height: f64,
}

/// External arena description. Targets carry no identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPayload {
    pub arena: ArenaDimensions,
    #[serde(rename = "coverageRadius")]
    pub coverage_radius: f64,
    pub targets: Vec<TargetDraft>,
}

/// Schema violations in an import payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("payload does not match schema: {0}")]
    Schema(String),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be a finite number")]
    NonFinite { field: String },
    #[error("targets must contain at least 1 entry")]
    EmptyTargets,
}

/// Everything that can go wrong between a payload source and the store.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("payload source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ImportPayload {
    /// Parse and validate payload text.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::SourceUnavailable(
                "payload source is empty".to_string(),
            ));
        }
        let value: serde_json::Value = serde_json::from_str(text).map_err(ImportError::Malformed)?;
        let payload: ImportPayload = serde_json::from_value(value)
            .map_err(|e| ValidationError::Schema(e.to_string()))?;
        payload.validate()?;
        Ok(payload)
    }

    /// Check numeric ranges and the minimum target count.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range(
            "arena.width",
            self.arena.width,
            IMPORT_DIMENSION_MIN,
            IMPORT_DIMENSION_MAX,
        )?;
        check_range(
            "arena.height",
            self.arena.height,
            IMPORT_DIMENSION_MIN,
            IMPORT_DIMENSION_MAX,
        )?;
        check_range(
            "coverageRadius",
            self.coverage_radius,
            IMPORT_RADIUS_MIN,
            IMPORT_RADIUS_MAX,
        )?;

        if self.targets.len() < IMPORT_MIN_TARGETS {
            return Err(ValidationError::EmptyTargets);
        }

        for (index, target) in self.targets.iter().enumerate() {
            check_finite(|| format!("targets[{index}].x"), target.x)?;
            check_finite(|| format!("targets[{index}].y"), target.y)?;
        }

        Ok(())
    }

    /// Arena configuration this payload installs.
    pub fn arena_config(&self) -> ArenaConfig {
        ArenaConfig {
            width: self.arena.width,
            height: self.arena.height,
            coverage_radius: self.coverage_radius,
        }
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    check_finite(|| field.to_string(), value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn check_finite(field: impl FnOnce() -> String, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field: field() })
    }
}
