// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Object metadata for cluster-scoped and namespaced manifests.

use crate::constants::{
    DNS_LABEL_PATTERN, DNS_SUBDOMAIN_PATTERN, MAX_NAMESPACE_LENGTH, MAX_NAME_LENGTH,
    QUALIFIED_NAME_PATTERN,
};
use crate::schema::{AttributeValue, Validator};
use kube::core::DynamicObject;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

fn subdomain() -> Validator {
    Validator::RegexMatches {
        pattern: DNS_SUBDOMAIN_PATTERN,
        message: "must be a lowercase RFC 1123 subdomain",
    }
}

fn label() -> Validator {
    Validator::RegexMatches {
        pattern: DNS_LABEL_PATTERN,
        message: "must be a lowercase RFC 1123 label",
    }
}

fn key_validator() -> Validator {
    Validator::MapKeysMatch {
        pattern: QUALIFIED_NAME_PATTERN,
        message: "must be a qualified name with an optional DNS subdomain prefix",
    }
}

crate::tf_object! {
    /// Data that helps uniquely identify this object.
    pub struct ClusterMetadata {
        /// Unique identifier for this object. More info: http://kubernetes.io/docs/user-guide/identifiers#names
        name: String => "name" [
            Validator::LengthAtLeast { min: 1 },
            Validator::LengthAtMost { max: MAX_NAME_LENGTH },
            subdomain(),
        ],
        /// Map of string keys and values that can be used to organize and categorize (scope and select) objects.
        labels: Option<BTreeMap<String, String>> => "labels" [key_validator()],
        /// Unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata.
        annotations: Option<BTreeMap<String, String>> => "annotations" [key_validator()],
    }
}

crate::tf_object! {
    /// Data that helps uniquely identify this object.
    pub struct NamespacedMetadata {
        /// Unique identifier for this object. More info: http://kubernetes.io/docs/user-guide/identifiers#names
        name: String => "name" [
            Validator::LengthAtLeast { min: 1 },
            Validator::LengthAtMost { max: MAX_NAME_LENGTH },
            subdomain(),
        ],
        /// Namespace that defines the space within which each name must be unique. More info: http://kubernetes.io/docs/user-guide/namespaces
        namespace: String => "namespace" [
            Validator::LengthAtLeast { min: 1 },
            Validator::LengthAtMost { max: MAX_NAMESPACE_LENGTH },
            label(),
        ],
        /// Map of string keys and values that can be used to organize and categorize (scope and select) objects.
        labels: Option<BTreeMap<String, String>> => "labels" [key_validator()],
        /// Unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata.
        annotations: Option<BTreeMap<String, String>> => "annotations" [key_validator()],
    }
}

/// Metadata of a manifest, cluster-scoped or namespaced.
pub trait ManifestMetadata: AttributeValue + DeserializeOwned + Send + Sync {
    /// Object name.
    fn name(&self) -> &str;

    /// Copies namespace, labels and annotations onto the object.
    fn apply(&self, object: DynamicObject) -> DynamicObject;
}

impl ManifestMetadata for ClusterMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, mut object: DynamicObject) -> DynamicObject {
        object.metadata.labels.clone_from(&self.labels);
        object.metadata.annotations.clone_from(&self.annotations);
        object
    }
}

impl ManifestMetadata for NamespacedMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, object: DynamicObject) -> DynamicObject {
        let mut object = object.within(&self.namespace);
        object.metadata.labels.clone_from(&self.labels);
        object.metadata.annotations.clone_from(&self.annotations);
        object
    }
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod metadata_tests;
