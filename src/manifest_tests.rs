// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the generic manifest data source.

#[cfg(test)]
mod tests {
    use crate::crd::{ClusterFilterManifest, ClusterInputManifest, FilterManifest};
    use crate::errors::ManifestError;
    use crate::manifest::*;
    use crate::schema::AttributeKind;
    use serde_json::json;

    fn yaml(text: &str) -> serde_yaml::Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_metadata_type_name() {
        let ds = ManifestDataSource::<ClusterFilterManifest>::new();
        assert_eq!(
            ds.metadata("k8s"),
            "k8s_fluentbit_fluent_io_cluster_filter_v1alpha2_manifest"
        );
        assert_eq!(
            ds.metadata("kubernetes"),
            "kubernetes_fluentbit_fluent_io_cluster_filter_v1alpha2_manifest"
        );
    }

    #[test]
    fn test_schema_top_level_attributes() {
        let schema = ManifestDataSource::<FilterManifest>::new().schema();

        let yaml = &schema.attributes["yaml"];
        assert!(yaml.computed);
        assert!(!yaml.optional);
        assert_eq!(yaml.kind, AttributeKind::String);

        assert!(schema.attributes["metadata"].required);
        assert!(schema.attributes["spec"].optional);
        assert_eq!(schema.attributes.len(), 3);
    }

    #[test]
    fn test_read_filter_example() {
        let ds = ManifestDataSource::<FilterManifest>::new();
        let response = ds
            .read(&json!({
                "metadata": { "name": "x", "namespace": "logging" },
                "spec": { "match": "*.logs" }
            }))
            .unwrap();

        let doc = yaml(&response.yaml);
        assert_eq!(doc["apiVersion"], yaml("fluentbit.fluent.io/v1alpha2"));
        assert_eq!(doc["kind"], yaml("Filter"));
        assert_eq!(doc["metadata"]["name"], yaml("x"));
        assert_eq!(doc["metadata"]["namespace"], yaml("logging"));
        assert_eq!(doc["spec"]["match"], serde_yaml::Value::from("*.logs"));
        assert!(doc["spec"].get("filters").is_none());
        assert!(response.yaml.contains("kind: Filter\n"));
    }

    #[test]
    fn test_read_echoes_state_with_yaml() {
        let ds = ManifestDataSource::<ClusterInputManifest>::new();
        let config = json!({
            "metadata": { "name": "tail" },
            "spec": { "tail": { "path": "/var/log/containers/*.log" } }
        });

        let response = ds.read(&config).unwrap();
        assert_eq!(response.state["metadata"], config["metadata"]);
        assert_eq!(response.state["spec"], config["spec"]);
        assert_eq!(response.state["yaml"], json!(response.yaml));
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_read_is_deterministic() {
        let ds = ManifestDataSource::<ClusterFilterManifest>::new();
        let config = json!({
            "metadata": {
                "name": "kubernetes",
                "labels": { "z": "1", "a": "2" }
            },
            "spec": {
                "match": "kube.*",
                "filters": [
                    { "kubernetes": { "kube_url": "https://kubernetes.default.svc:443", "labels": false } },
                    { "nest": { "operation": "lift", "nested_under": "kubernetes" } }
                ]
            }
        });

        let first = ds.read(&config).unwrap().yaml;
        let second = ds.read(&config).unwrap().yaml;
        assert_eq!(first, second);

        let doc = yaml(&first);
        let keys: Vec<&str> = doc["metadata"]["labels"]
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(serde_yaml::Value::as_str)
            .collect();
        assert_eq!(keys, vec!["a", "z"]);
    }

    #[test]
    fn test_read_omits_unset_fields() {
        let ds = ManifestDataSource::<ClusterFilterManifest>::new();
        let response = ds
            .read(&json!({
                "metadata": { "name": "grep" },
                "spec": {
                    "filters": [{ "grep": { "regex": "level error" } }]
                }
            }))
            .unwrap();

        let doc = yaml(&response.yaml);
        let grep = &doc["spec"]["filters"][0]["grep"];
        assert_eq!(grep["regex"], yaml("level error"));
        assert!(grep.get("exclude").is_none());
        assert!(grep.get("retryLimit").is_none());
        assert!(doc["spec"].get("match").is_none());
        assert!(doc["metadata"].get("labels").is_none());
        assert!(!response.yaml.contains("null"));
    }

    #[test]
    fn test_read_without_spec() {
        let ds = ManifestDataSource::<ClusterInputManifest>::new();
        let response = ds.read(&json!({ "metadata": { "name": "empty" } })).unwrap();

        let doc = yaml(&response.yaml);
        assert_eq!(doc["kind"], yaml("ClusterInput"));
        assert!(doc.get("spec").is_none());
    }

    #[test]
    fn test_read_uses_crd_field_names() {
        let ds = ManifestDataSource::<ClusterFilterManifest>::new();
        let response = ds
            .read(&json!({
                "metadata": { "name": "k8s" },
                "spec": {
                    "match_regex": "^kube",
                    "log_level": "debug",
                    "filters": [{ "kubernetes": { "kube_url": "https://k8s", "kubelet_port": 10250 } }]
                }
            }))
            .unwrap();

        let doc = yaml(&response.yaml);
        assert_eq!(doc["spec"]["matchRegex"], yaml("^kube"));
        assert_eq!(doc["spec"]["logLevel"], yaml("debug"));
        let kubernetes = &doc["spec"]["filters"][0]["kubernetes"];
        assert_eq!(kubernetes["kubeURL"], yaml("https://k8s"));
        assert_eq!(kubernetes["kubeletPort"], yaml("10250"));
    }

    #[test]
    fn test_read_decode_failure() {
        let ds = ManifestDataSource::<FilterManifest>::new();
        let err = ds
            .read(&json!({ "metadata": { "name": "x" }, "spec": {} }))
            .unwrap_err();

        assert!(matches!(err, ManifestError::Decode { ref kind, .. } if kind == "Filter"));
        assert_eq!(err.diagnostics()[0].summary, "Unable to decode configuration");
    }

    #[test]
    fn test_read_rejects_wrong_types() {
        let ds = ManifestDataSource::<FilterManifest>::new();
        let err = ds
            .read(&json!({
                "metadata": { "name": "x", "namespace": "default" },
                "spec": { "match": 42 }
            }))
            .unwrap_err();

        assert!(matches!(err, ManifestError::Decode { .. }));
    }
}
