// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error and diagnostic types for manifest data sources.
//!
//! Every failure is terminal for the read that produced it. Errors are surfaced to the
//! caller as [`Diagnostic`]s, which carry a summary, a detail message and, for
//! validation failures, the path of the offending attribute.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Severity of a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Aborts the operation
    Error,
    /// Reported to the user but does not abort
    Warning,
}

/// A single problem reported back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Error or warning
    pub severity: Severity,
    /// Short, human readable summary
    pub summary: String,
    /// Longer explanation
    pub detail: String,
    /// Path of the attribute the diagnostic refers to, e.g. `spec.filters[0].grep.regex`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic that is not tied to an attribute.
    #[must_use]
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// Creates an error diagnostic for the attribute at `path`.
    #[must_use]
    pub fn attribute_error(
        path: impl fmt::Display,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            attribute: Some(path.to_string()),
            ..Self::error(summary, detail)
        }
    }

    /// Creates a warning diagnostic for the attribute at `path`.
    #[must_use]
    pub fn attribute_warning(
        path: impl fmt::Display,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::attribute_error(path, summary, detail)
        }
    }

    /// Returns `true` for error diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        match &self.attribute {
            Some(path) => write!(f, "{severity}: {} ({path}): {}", self.summary, self.detail),
            None => write!(f, "{severity}: {}: {}", self.summary, self.detail),
        }
    }
}

/// Returns `true` if any diagnostic in the slice is an error.
#[must_use]
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

/// Wraps any error as an error diagnostic with the given summary.
///
/// The full source chain is flattened into the detail message.
#[must_use]
pub fn error_diagnostic(summary: &str, err: &(dyn std::error::Error + 'static)) -> Diagnostic {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    Diagnostic::error(summary, detail)
}

/// Errors that can occur while reading a manifest data source.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The configuration could not be decoded into the typed model.
    ///
    /// Happens when the configuration has not been validated against the schema,
    /// or when a required attribute is missing.
    #[error("Unable to decode {kind} configuration")]
    Decode {
        /// CRD kind of the data source
        kind: String,
        /// Underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The spec could not be converted into its document representation.
    #[error("Unable to encode {kind} spec")]
    Encode {
        /// CRD kind of the data source
        kind: String,
        /// Underlying encoding error
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be marshaled to YAML.
    #[error("Unable to marshal {kind} to YAML")]
    Marshal {
        /// CRD kind of the data source
        kind: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration failed schema validation.
    #[error("Invalid configuration for {type_name} ({} diagnostic(s))", .diagnostics.len())]
    InvalidConfiguration {
        /// Data source type name
        type_name: String,
        /// Diagnostics produced by validation
        diagnostics: Vec<Diagnostic>,
    },

    /// No data source is registered under the requested type name.
    #[error("Unknown data source type '{type_name}'")]
    UnknownDataSource {
        /// Requested type name
        type_name: String,
    },
}

impl ManifestError {
    /// Converts the error into the diagnostics reported to the caller.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::InvalidConfiguration { diagnostics, .. } => diagnostics.clone(),
            Self::Decode { .. } => vec![error_diagnostic("Unable to decode configuration", self)],
            Self::Encode { .. } => vec![error_diagnostic("Unable to encode spec", self)],
            Self::Marshal { .. } => vec![error_diagnostic("Unable to marshal YAML", self)],
            Self::UnknownDataSource { .. } => vec![error_diagnostic("Unknown data source", self)],
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
