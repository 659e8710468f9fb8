// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use fluentbit_manifests::manifest::ReadResponse;
use fluentbit_manifests::provider::Provider;
use kube::core::DynamicObject;
use serde_json::{json, Value};

/// Full type name of a data source for the default provider
pub fn type_name(suffix: &str) -> String {
    format!("k8s_fluentbit_fluent_io_{suffix}_v1alpha2_manifest")
}

/// Validate and read a data source through the default provider
pub fn read(suffix: &str, config: &Value) -> ReadResponse {
    Provider::default()
        .read_data_source(&type_name(suffix), config)
        .unwrap_or_else(|e| panic!("read of {suffix} failed: {:?}", e.diagnostics()))
}

/// Parse rendered YAML back into a Kubernetes object
pub fn parse_object(yaml: &str) -> DynamicObject {
    serde_yaml::from_str(yaml).expect("rendered YAML should be a Kubernetes object")
}

/// Metadata for a cluster-scoped or namespaced test object
pub fn metadata(name: &str, namespaced: bool) -> Value {
    if namespaced {
        json!({ "name": name, "namespace": "logging" })
    } else {
        json!({ "name": name })
    }
}
