// ABOUTME: Validation events emitted by rules against a model.
// ABOUTME: Each event names its validator, severity, subject shape, and message.

use crate::types::ShapeId;
use serde::Serialize;
use std::fmt;

/// How serious a validation event is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Reported but explicitly suppressed by the model author.
    Suppressed,
    /// Informational only.
    Note,
    /// Non-fatal; the host decides whether warnings fail a build.
    Warning,
    /// Likely a mistake that should be suppressed deliberately if intended.
    Danger,
    /// The model is invalid.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Suppressed => "SUPPRESSED",
            Severity::Note => "NOTE",
            Severity::Warning => "WARNING",
            Severity::Danger => "DANGER",
            Severity::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// A single finding reported against a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationEvent {
    pub id: String,
    pub severity: Severity,
    pub shape_id: ShapeId,
    pub message: String,
}

impl ValidationEvent {
    /// Create a warning event, auto-logging it via tracing.
    pub fn warning(id: impl Into<String>, shape_id: ShapeId, message: impl Into<String>) -> Self {
        let event = Self {
            id: id.into(),
            severity: Severity::Warning,
            shape_id,
            message: message.into(),
        };
        tracing::warn!(shape = %event.shape_id, validator = %event.id, "{}", event.message);
        event
    }
}

impl fmt::Display for ValidationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} | {}",
            self.severity, self.shape_id, self.message, self.id
        )
    }
}
