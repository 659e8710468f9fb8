// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Manifest data sources.
//!
//! A manifest data source exposes one CRD kind as a read-only data source with three
//! operations:
//!
//! - **Metadata** - the data source type name
//! - **Schema** - the static attribute tree (`metadata`, `spec`, computed `yaml`)
//! - **Read** - decodes the configuration, stamps the fixed `apiVersion`/`kind` and
//!   stores the YAML rendering of the object in the `yaml` attribute
//!
//! All kinds share the single generic implementation [`ManifestDataSource`]; a kind only
//! declares its constants, metadata scope and spec type through [`ManifestKind`].
//! Data sources hold no state, so reads are independent and may run concurrently.
//!
//! # Example
//!
//! ```rust
//! use fluentbit_manifests::crd::FilterManifest;
//! use fluentbit_manifests::manifest::{DataSource, ManifestDataSource};
//! use serde_json::json;
//!
//! let data_source = ManifestDataSource::<FilterManifest>::new();
//! let response = data_source
//!     .read(&json!({
//!         "metadata": { "name": "x", "namespace": "logging" },
//!         "spec": { "match": "*.logs" }
//!     }))
//!     .unwrap();
//! assert!(response.yaml.contains("kind: Filter"));
//! ```

use crate::constants::{
    API_GROUP, API_VERSION, METADATA_ATTRIBUTE, SPEC_ATTRIBUTE, TYPE_NAME_GROUP_INFIX,
    TYPE_NAME_MANIFEST_SUFFIX, YAML_ATTRIBUTE,
};
use crate::errors::{Diagnostic, ManifestError};
use crate::metadata::ManifestMetadata;
use crate::schema::{describe, Attribute, AttributeValue, Schema};
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::{debug, error};

/// Compile-time description of one CRD kind.
pub trait ManifestKind: Send + Sync + 'static {
    /// CRD kind, e.g. `ClusterFilter`
    const KIND: &'static str;

    /// Snake case name used in the data source type name, e.g. `cluster_filter`
    const TYPE_NAME_SUFFIX: &'static str;

    /// Description of the data source
    const DESCRIPTION: &'static str;

    /// Cluster-scoped or namespaced metadata
    type Metadata: ManifestMetadata;

    /// Typed spec
    type Spec: AttributeValue + Serialize + DeserializeOwned + Send + Sync;
}

/// Decoded configuration of a manifest data source.
#[derive(Clone, Debug, Deserialize)]
pub struct ManifestModel<M, S> {
    /// Object metadata
    pub metadata: M,
    /// Optional spec
    pub spec: Option<S>,
}

/// Result of a successful read.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadResponse {
    /// The configuration echoed back with the computed `yaml` attribute set
    pub state: Value,
    /// The rendered manifest
    pub yaml: String,
    /// Non-fatal diagnostics collected before the read
    pub warnings: Vec<Diagnostic>,
}

/// Operations every manifest data source offers.
pub trait DataSource: Send + Sync {
    /// Data source type name for the given provider type name.
    fn metadata(&self, provider_type_name: &str) -> String;

    /// Static schema of the data source.
    fn schema(&self) -> Schema;

    /// CRD kind rendered by this data source.
    fn kind(&self) -> &'static str;

    /// Validates a configuration against [`DataSource::schema`].
    fn validate(&self, config: &Value) -> Vec<Diagnostic> {
        self.schema().validate(config)
    }

    /// Decodes the configuration and renders it as a YAML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Decode`] if the configuration does not fit the model,
    /// and [`ManifestError::Encode`]/[`ManifestError::Marshal`] if serialization fails.
    /// No partial output is produced on error.
    fn read(&self, config: &Value) -> Result<ReadResponse, ManifestError>;
}

/// Generic manifest data source for the kind `K`.
pub struct ManifestDataSource<K> {
    kind: PhantomData<fn() -> K>,
}

impl<K: ManifestKind> ManifestDataSource<K> {
    /// Creates the data source.
    #[must_use]
    pub fn new() -> Self {
        Self { kind: PhantomData }
    }

    /// Boxed data source, for registration.
    #[must_use]
    pub fn boxed() -> Box<dyn DataSource> {
        Box::new(Self::new())
    }
}

impl<K: ManifestKind> Default for ManifestDataSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Data source type name: `<provider>_fluentbit_fluent_io_<suffix>_v1alpha2_manifest`.
#[must_use]
pub fn type_name(provider_type_name: &str, suffix: &str) -> String {
    format!(
        "{provider_type_name}_{TYPE_NAME_GROUP_INFIX}_{suffix}_{API_VERSION}_{TYPE_NAME_MANIFEST_SUFFIX}"
    )
}

/// API resource of the kind `K`.
#[must_use]
pub fn api_resource<K: ManifestKind>() -> ApiResource {
    ApiResource::from_gvk(&GroupVersionKind::gvk(API_GROUP, API_VERSION, K::KIND))
}

/// Builds the Kubernetes object for a decoded model.
///
/// # Errors
///
/// Returns [`ManifestError::Encode`] if the spec cannot be serialized.
pub fn to_object<K: ManifestKind>(
    model: &ManifestModel<K::Metadata, K::Spec>,
) -> Result<DynamicObject, ManifestError> {
    let object = model
        .metadata
        .apply(DynamicObject::new(model.metadata.name(), &api_resource::<K>()));

    let data = match &model.spec {
        Some(spec) => {
            let spec = serde_json::to_value(spec).map_err(|source| ManifestError::Encode {
                kind: K::KIND.to_string(),
                source,
            })?;
            json!({ SPEC_ATTRIBUTE: spec })
        }
        None => json!({}),
    };

    Ok(object.data(data))
}

/// Renders a decoded model as a YAML manifest.
///
/// # Errors
///
/// Returns [`ManifestError::Encode`] or [`ManifestError::Marshal`] if serialization fails.
pub fn to_yaml<K: ManifestKind>(
    model: &ManifestModel<K::Metadata, K::Spec>,
) -> Result<String, ManifestError> {
    let object = to_object::<K>(model)?;
    serde_yaml::to_string(&object).map_err(|source| ManifestError::Marshal {
        kind: K::KIND.to_string(),
        source,
    })
}

impl<K: ManifestKind> DataSource for ManifestDataSource<K> {
    fn metadata(&self, provider_type_name: &str) -> String {
        type_name(provider_type_name, K::TYPE_NAME_SUFFIX)
    }

    fn schema(&self) -> Schema {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            YAML_ATTRIBUTE.to_string(),
            Attribute::computed_string("The generated manifest in YAML format."),
        );
        attributes.insert(
            METADATA_ATTRIBUTE.to_string(),
            Attribute::for_type::<K::Metadata>("Data that helps uniquely identify this object."),
        );
        attributes.insert(
            SPEC_ATTRIBUTE.to_string(),
            Attribute::for_type::<Option<K::Spec>>(format!(
                "Desired state of the {} resource.",
                K::KIND
            )),
        );

        Schema {
            description: describe(&[K::DESCRIPTION]),
            attributes,
        }
    }

    fn kind(&self) -> &'static str {
        K::KIND
    }

    fn read(&self, config: &Value) -> Result<ReadResponse, ManifestError> {
        debug!(kind = K::KIND, "Reading manifest data source");

        let model: ManifestModel<K::Metadata, K::Spec> = serde_json::from_value(config.clone())
            .map_err(|source| ManifestError::Decode {
                kind: K::KIND.to_string(),
                source,
            })?;

        let yaml = to_yaml::<K>(&model).inspect_err(|e| {
            error!(kind = K::KIND, name = model.metadata.name(), "Failed to render manifest: {e}");
        })?;

        let mut state = config.clone();
        if let Some(object) = state.as_object_mut() {
            object.insert(YAML_ATTRIBUTE.to_string(), Value::String(yaml.clone()));
        }

        debug!(
            kind = K::KIND,
            name = model.metadata.name(),
            bytes = yaml.len(),
            "Rendered manifest"
        );

        Ok(ReadResponse {
            state,
            yaml,
            warnings: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod manifest_tests;
