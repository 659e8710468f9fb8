// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Data source registration.
//!
//! The [`Provider`] owns one instance of every manifest data source, keyed by its type
//! name, and runs the same sequence the hosting framework would for a data source read:
//! schema validation first, then `Read`. Error diagnostics abort the read before any
//! YAML is produced; warnings are passed through with the result.

use crate::constants::DEFAULT_PROVIDER_TYPE_NAME;
use crate::crd::data_sources;
use crate::errors::{has_errors, Diagnostic, ManifestError};
use crate::manifest::{DataSource, ReadResponse};
use crate::schema::Schema;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Registry of manifest data sources.
pub struct Provider {
    type_name: String,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl Provider {
    /// Creates a provider registering every data source under `type_name`.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let data_sources: BTreeMap<String, Box<dyn DataSource>> = data_sources()
            .into_iter()
            .map(|ds| (ds.metadata(&type_name), ds))
            .collect();

        debug!(
            provider = %type_name,
            count = data_sources.len(),
            "Registered manifest data sources"
        );

        Self {
            type_name,
            data_sources,
        }
    }

    /// Provider type name, e.g. `k8s`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Sorted type names of all registered data sources.
    #[must_use]
    pub fn data_source_names(&self) -> Vec<&str> {
        self.data_sources.keys().map(String::as_str).collect()
    }

    /// Looks up a data source by type name.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnknownDataSource`] if nothing is registered under the name.
    pub fn data_source(&self, type_name: &str) -> Result<&dyn DataSource, ManifestError> {
        self.data_sources
            .get(type_name)
            .map(|data_source| data_source.as_ref())
            .ok_or_else(|| ManifestError::UnknownDataSource {
                type_name: type_name.to_string(),
            })
    }

    /// Schema of a data source.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnknownDataSource`] for unknown type names.
    pub fn schema(&self, type_name: &str) -> Result<Schema, ManifestError> {
        Ok(self.data_source(type_name)?.schema())
    }

    /// Validates a configuration without reading it.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::UnknownDataSource`] for unknown type names.
    pub fn validate(&self, type_name: &str, config: &Value) -> Result<Vec<Diagnostic>, ManifestError> {
        Ok(self.data_source(type_name)?.validate(config))
    }

    /// Validates the configuration and, if it is valid, reads the data source.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidConfiguration`] if validation reports errors,
    /// [`ManifestError::UnknownDataSource`] for unknown type names, or the read error.
    pub fn read_data_source(
        &self,
        type_name: &str,
        config: &Value,
    ) -> Result<ReadResponse, ManifestError> {
        let data_source = self.data_source(type_name)?;

        let diagnostics = data_source.validate(config);
        if has_errors(&diagnostics) {
            warn!(
                data_source = %type_name,
                errors = diagnostics.iter().filter(|d| d.is_error()).count(),
                "Configuration failed validation"
            );
            return Err(ManifestError::InvalidConfiguration {
                type_name: type_name.to_string(),
                diagnostics,
            });
        }

        for diagnostic in &diagnostics {
            warn!(data_source = %type_name, "{diagnostic}");
        }

        let mut response = data_source.read(config)?;
        response.warnings = diagnostics;

        info!(data_source = %type_name, "Read manifest data source");
        Ok(response)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER_TYPE_NAME)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
