// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Fluent Bit manifest data sources.
//!
//! This module contains the API coordinates of the `fluentbit.fluent.io` CRDs, the
//! Terraform type naming scheme and the patterns shared by attribute validators.

// ============================================================================
// API Constants
// ============================================================================

/// API group for all Fluent Bit CRDs
pub const API_GROUP: &str = "fluentbit.fluent.io";

/// API version for all Fluent Bit CRDs
pub const API_VERSION: &str = "v1alpha2";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "fluentbit.fluent.io/v1alpha2";

/// Kind name for `ClusterFilter` resource
pub const KIND_CLUSTER_FILTER: &str = "ClusterFilter";

/// Kind name for `Filter` resource
pub const KIND_FILTER: &str = "Filter";

/// Kind name for `ClusterFluentBitConfig` resource
pub const KIND_CLUSTER_FLUENT_BIT_CONFIG: &str = "ClusterFluentBitConfig";

/// Kind name for `FluentBitConfig` resource
pub const KIND_FLUENT_BIT_CONFIG: &str = "FluentBitConfig";

/// Kind name for `ClusterInput` resource
pub const KIND_CLUSTER_INPUT: &str = "ClusterInput";

/// Kind name for `ClusterOutput` resource
pub const KIND_CLUSTER_OUTPUT: &str = "ClusterOutput";

/// Kind name for `Output` resource
pub const KIND_OUTPUT: &str = "Output";

/// Kind name for `ClusterParser` resource
pub const KIND_CLUSTER_PARSER: &str = "ClusterParser";

/// Kind name for `Parser` resource
pub const KIND_PARSER: &str = "Parser";

/// Kind name for `ClusterMultilineParser` resource
pub const KIND_CLUSTER_MULTILINE_PARSER: &str = "ClusterMultilineParser";

/// Kind name for `MultilineParser` resource
pub const KIND_MULTILINE_PARSER: &str = "MultilineParser";

// ============================================================================
// Terraform Naming
// ============================================================================

/// Provider type name used when none is configured
pub const DEFAULT_PROVIDER_TYPE_NAME: &str = "k8s";

/// Infix placed between the provider name and the CRD suffix.
///
/// Derived from the API group with dots replaced by underscores.
pub const TYPE_NAME_GROUP_INFIX: &str = "fluentbit_fluent_io";

/// Trailing part of every data source type name
pub const TYPE_NAME_MANIFEST_SUFFIX: &str = "manifest";

/// Name of the computed attribute holding the rendered document
pub const YAML_ATTRIBUTE: &str = "yaml";

/// Name of the metadata attribute
pub const METADATA_ATTRIBUTE: &str = "metadata";

/// Name of the spec attribute
pub const SPEC_ATTRIBUTE: &str = "spec";

// ============================================================================
// Validator Patterns
// ============================================================================

/// Accepted values for `retry_limit` attributes.
pub const RETRY_LIMIT_PATTERN: &str = r"^(false|no_limits|no_retries|[1-9][0-9]*)$";

/// Fluent Bit size values such as `5M` or `32KB`.
pub const SIZE_PATTERN: &str = r"^\d+(k|K|KB|kb|m|M|MB|mb|g|G|GB|gb)?$";

/// Kubernetes object names (RFC 1123 subdomain)
pub const DNS_SUBDOMAIN_PATTERN: &str =
    r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";

/// Kubernetes namespace names (RFC 1123 label)
pub const DNS_LABEL_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";

/// Label and annotation keys: optional DNS prefix followed by a qualified name
pub const QUALIFIED_NAME_PATTERN: &str = r"^([a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*/)?[A-Za-z0-9]([-A-Za-z0-9_.]{0,61}[A-Za-z0-9])?$";

/// Maximum length of an object name
pub const MAX_NAME_LENGTH: usize = 253;

/// Maximum length of a namespace name
pub const MAX_NAMESPACE_LENGTH: usize = 63;

/// Lowest valid TCP/UDP port
pub const MIN_PORT: i64 = 1;

/// Highest valid TCP/UDP port
pub const MAX_PORT: i64 = 65535;

/// Fluent Bit log levels
pub const LOG_LEVELS: &[&str] = &["off", "error", "warning", "info", "debug", "trace"];
