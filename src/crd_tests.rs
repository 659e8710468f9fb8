// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the CRD catalogue.

#[cfg(test)]
mod tests {
    use crate::crd::*;
    use crate::manifest::{DataSource, ManifestDataSource, ManifestKind};
    use crate::plugins::common::LabelSelector;
    use serde_json::json;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_data_sources_cover_every_kind() {
        let kinds: BTreeSet<&str> = data_sources().iter().map(|ds| ds.kind()).collect();

        let expected: BTreeSet<&str> = [
            "ClusterFilter",
            "Filter",
            "ClusterFluentBitConfig",
            "FluentBitConfig",
            "ClusterInput",
            "ClusterOutput",
            "Output",
            "ClusterParser",
            "Parser",
            "ClusterMultilineParser",
            "MultilineParser",
        ]
        .into_iter()
        .collect();

        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_type_names_are_unique() {
        let names: Vec<String> = data_sources().iter().map(|ds| ds.metadata("k8s")).collect();
        let unique: BTreeSet<&String> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_type_name_suffixes() {
        assert_eq!(ClusterFilterManifest::TYPE_NAME_SUFFIX, "cluster_filter");
        assert_eq!(FilterManifest::TYPE_NAME_SUFFIX, "filter");
        assert_eq!(
            ClusterFluentBitConfigManifest::TYPE_NAME_SUFFIX,
            "cluster_fluent_bit_config"
        );
        assert_eq!(ClusterInputManifest::TYPE_NAME_SUFFIX, "cluster_input");
        assert_eq!(
            ClusterMultilineParserManifest::TYPE_NAME_SUFFIX,
            "cluster_multiline_parser"
        );
    }

    #[test]
    fn test_description_comes_from_docs() {
        assert_eq!(
            ClusterFilterManifest::DESCRIPTION.trim(),
            "ClusterFilter defines a cluster-wide Filter configuration."
        );

        let schema = ManifestDataSource::<ClusterFilterManifest>::new().schema();
        assert_eq!(
            schema.description,
            "ClusterFilter defines a cluster-wide Filter configuration."
        );
    }

    #[test]
    fn test_cluster_kinds_have_no_namespace_attribute() {
        let schema = ManifestDataSource::<ClusterInputManifest>::new().schema();
        let metadata = schema.attributes["metadata"].nested().unwrap();
        assert!(metadata.contains_key("name"));
        assert!(!metadata.contains_key("namespace"));

        let schema = ManifestDataSource::<ParserManifest>::new().schema();
        let metadata = schema.attributes["metadata"].nested().unwrap();
        assert!(metadata["namespace"].required);
    }

    #[test]
    fn test_service_http_port_is_validated() {
        let ds = ManifestDataSource::<ClusterFluentBitConfigManifest>::new();

        let diags = ds.validate(&json!({
            "metadata": { "name": "fluent-bit-config" },
            "spec": { "service": { "http_port": 70000 } }
        }));

        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("spec.service.http_port")
        );
    }

    #[test]
    fn test_storage_sync_mode() {
        let ds = ManifestDataSource::<ClusterFluentBitConfigManifest>::new();

        let ok = ds.validate(&json!({
            "metadata": { "name": "cfg" },
            "spec": { "service": { "storage": { "sync": "full", "checksum": "on" } } }
        }));
        assert!(ok.is_empty());

        let bad = ds.validate(&json!({
            "metadata": { "name": "cfg" },
            "spec": { "service": { "storage": { "sync": "eventually" } } }
        }));
        assert_eq!(bad.len(), 1);
        assert_eq!(
            bad[0].attribute.as_deref(),
            Some("spec.service.storage.sync")
        );
    }

    #[test]
    fn test_fluent_bit_config_spec_serializes_crd_names() {
        let mut match_labels = BTreeMap::new();
        match_labels.insert(
            "fluentbit.fluent.io/enabled".to_string(),
            "true".to_string(),
        );

        let spec = FluentBitConfigSpec {
            service: Some(Service {
                flush_seconds: Some(1.5),
                http_server: Some(true),
                ..Default::default()
            }),
            input_selector: Some(LabelSelector {
                match_labels: Some(match_labels),
                match_expressions: None,
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "service": { "flushSeconds": 1.5, "httpServer": true },
                "inputSelector": {
                    "matchLabels": { "fluentbit.fluent.io/enabled": "true" }
                }
            })
        );
    }

    #[test]
    fn test_namespaced_config_spec_has_cluster_selectors() {
        let attributes = NamespacedFluentBitConfigSpec::attributes();
        assert!(attributes.contains_key("cluster_parser_selector"));
        assert!(attributes.contains_key("cluster_multiline_parser_selector"));
        assert!(!attributes.contains_key("service"));
    }
}
