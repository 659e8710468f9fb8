// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the object generator macro.

#[cfg(test)]
mod tests {
    use crate::schema::{AttributeKind, AttributeValue, Validator};
    use serde_json::json;
    use std::collections::BTreeMap;

    crate::tf_object! {
        /// Inner object.
        pub struct Inner {
            /// Listen port.
            port: Option<i64> => "port" [Validator::Int64Between { min: 1, max: 65535 }],
        }
    }

    crate::tf_object! {
        /// Sample object.
        pub struct Sample {
            /// Match pattern.
            ///
            /// Second line.
            r#match: String => "match",
            /// Kubernetes URL.
            kube_url: Option<String> => "kubeURL",
            keep_log: Option<bool> => "keepLog",
            inner: Option<Inner> => "inner",
            items: Option<Vec<Inner>> => "items",
            labels: Option<BTreeMap<String, String>> => "labels",
        }
    }

    #[test]
    fn test_attributes_use_field_names() {
        let attributes = Sample::attributes();
        let names: Vec<&str> = attributes.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["inner", "items", "keep_log", "kube_url", "labels", "match"]
        );
    }

    #[test]
    fn test_required_follows_option() {
        let attributes = Sample::attributes();
        assert!(attributes["match"].required);
        assert!(attributes["kube_url"].optional);
        assert_eq!(attributes["keep_log"].kind, AttributeKind::Bool);
    }

    #[test]
    fn test_descriptions_come_from_docs() {
        let attributes = Sample::attributes();
        assert_eq!(attributes["match"].description, "Match pattern. Second line.");
        assert_eq!(attributes["keep_log"].description, "");
    }

    #[test]
    fn test_validators_attached() {
        let attributes = Inner::attributes();
        assert_eq!(
            attributes["port"].validators,
            vec![Validator::Int64Between { min: 1, max: 65535 }]
        );
    }

    #[test]
    fn test_nested_kinds() {
        let attributes = Sample::attributes();
        assert!(matches!(attributes["inner"].kind, AttributeKind::Object { .. }));
        assert!(attributes["items"].nested().is_some());
        assert!(matches!(
            Sample::attribute_kind(),
            AttributeKind::Object { .. }
        ));
    }

    #[test]
    fn test_deserialize_snake_case_serialize_crd_names() {
        let sample: Sample = serde_json::from_value(json!({
            "match": "*.logs",
            "kube_url": "https://kubernetes.default.svc:443",
            "keep_log": null,
            "items": [ { "port": 24224 } ]
        }))
        .unwrap();

        assert_eq!(sample.r#match, "*.logs");
        assert!(sample.keep_log.is_none());

        let out = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            out,
            json!({
                "match": "*.logs",
                "kubeURL": "https://kubernetes.default.svc:443",
                "items": [ { "port": 24224 } ]
            })
        );
    }

    #[test]
    fn test_missing_required_field_fails_to_decode() {
        let result = serde_json::from_value::<Sample>(json!({ "kube_url": "x" }));
        assert!(result.is_err());
    }
}
