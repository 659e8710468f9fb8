// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Objects and validators shared by several plugins.

use crate::constants::{LOG_LEVELS, MAX_PORT, MIN_PORT, RETRY_LIMIT_PATTERN, SIZE_PATTERN};
use crate::schema::Validator;
use std::collections::BTreeMap;

/// `retry_limit` must be `false`, `no_limits`, `no_retries` or a positive integer.
#[must_use]
pub fn retry_limit() -> Validator {
    Validator::RegexMatches {
        pattern: RETRY_LIMIT_PATTERN,
        message: "value must be false, no_limits, no_retries or a positive integer without leading zeros",
    }
}

/// TCP/UDP port in `[1, 65535]`.
#[must_use]
pub fn port() -> Validator {
    Validator::Int64Between {
        min: MIN_PORT,
        max: MAX_PORT,
    }
}

/// Fluent Bit log level.
#[must_use]
pub fn log_level() -> Validator {
    Validator::OneOf { values: LOG_LEVELS }
}

/// Fluent Bit size such as `5M`.
#[must_use]
pub fn size() -> Validator {
    Validator::RegexMatches {
        pattern: SIZE_PATTERN,
        message: "value must be a size such as 32k, 5M or 1GB",
    }
}

/// `on` / `off` switch.
#[must_use]
pub fn on_off() -> Validator {
    Validator::OneOf {
        values: &["on", "off"],
    }
}

/// Chunk storage backend.
#[must_use]
pub fn storage_type() -> Validator {
    Validator::OneOf {
        values: &["filesystem", "memory"],
    }
}

/// Non-negative integer.
#[must_use]
pub fn non_negative() -> Validator {
    Validator::Int64AtLeast { min: 0 }
}

crate::tf_object! {
    /// Selects a key of a secret in the pod's namespace.
    pub struct SecretKeySelector {
        /// The key of the secret to select from. Must be a valid secret key.
        key: String => "key",
        /// Name of the referent.
        name: Option<String> => "name",
        /// Specify whether the Secret or its key must be defined.
        optional: Option<bool> => "optional",
    }
}

crate::tf_object! {
    /// ValueSource represents a source for the value of a secret.
    pub struct ValueSource {
        /// Selects a key of a secret in the pod's namespace.
        secret_key_ref: Option<SecretKeySelector> => "secretKeyRef",
    }
}

crate::tf_object! {
    /// Secret defines the key of a value.
    pub struct Secret {
        /// ValueSource represents a source for the value of a secret.
        value_from: Option<ValueSource> => "valueFrom",
    }
}

crate::tf_object! {
    /// Selects a key from a ConfigMap.
    pub struct ConfigMapKeySelector {
        /// The key to select.
        key: String => "key",
        /// Name of the referent.
        name: Option<String> => "name",
        /// Specify whether the ConfigMap or its key must be defined.
        optional: Option<bool> => "optional",
    }
}

crate::tf_object! {
    /// A label selector requirement is a selector that contains values, a key, and an operator
    /// that relates the key and values.
    pub struct LabelSelectorRequirement {
        /// The label key that the selector applies to.
        key: String => "key",
        /// Operator represents a key's relationship to a set of values.
        /// Valid operators are In, NotIn, Exists and DoesNotExist.
        operator: String => "operator" [Validator::OneOf {
            values: &["In", "NotIn", "Exists", "DoesNotExist"],
        }],
        /// An array of string values. If the operator is In or NotIn,
        /// the values array must be non-empty.
        values: Option<Vec<String>> => "values",
    }
}

crate::tf_object! {
    /// Label selector to match Kubernetes resources.
    ///
    /// The result of matchLabels and matchExpressions are ANDed. An empty label
    /// selector matches all objects.
    pub struct LabelSelector {
        /// Map of {key,value} pairs. A single {key,value} in the matchLabels map is equivalent
        /// to an element of matchExpressions whose operator is In.
        match_labels: Option<BTreeMap<String, String>> => "matchLabels",
        /// List of label selector requirements. All requirements must be satisfied.
        match_expressions: Option<Vec<LabelSelectorRequirement>> => "matchExpressions",
    }
}
