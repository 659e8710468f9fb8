// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # fluentbit-manifests - Fluent Bit CRD manifest data sources
//!
//! This library exposes the `fluentbit.fluent.io/v1alpha2` Custom Resource Definitions as
//! read-only Terraform "manifest" data sources. Each data source accepts a configuration
//! matching one CRD, stamps the fixed `apiVersion`/`kind` and renders the object as a
//! YAML document, ready to be applied by a generic manifest resource.
//!
//! ## Modules
//!
//! - [`tf_object`] - generator macro for typed models and their schema attributes
//! - [`schema`] - schema tree, validators and configuration validation
//! - [`metadata`] - cluster-scoped and namespaced object metadata
//! - [`plugins`] - Fluent Bit plugin configuration blocks
//! - [`crd`] - the CRD kinds and their data sources
//! - [`manifest`] - the generic data source (`Metadata`, `Schema`, `Read`)
//! - [`provider`] - data source registration and validated reads
//! - [`errors`] - errors and diagnostics
//!
//! ## Example
//!
//! ```rust
//! use fluentbit_manifests::provider::Provider;
//! use serde_json::json;
//!
//! let provider = Provider::default();
//! let response = provider
//!     .read_data_source(
//!         "k8s_fluentbit_fluent_io_filter_v1alpha2_manifest",
//!         &json!({
//!             "metadata": { "name": "x", "namespace": "logging" },
//!             "spec": { "match": "*.logs" }
//!         }),
//!     )
//!     .unwrap();
//!
//! assert!(response.yaml.contains("apiVersion: fluentbit.fluent.io/v1alpha2"));
//! assert!(response.yaml.contains("kind: Filter"));
//! ```

#[macro_use]
pub mod tf_object;

pub mod constants;
pub mod crd;
pub mod errors;
pub mod manifest;
pub mod metadata;
pub mod plugins;
pub mod provider;
pub mod schema;
