// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the provider registry.

#[cfg(test)]
mod tests {
    use crate::errors::{ManifestError, Severity};
    use crate::provider::*;
    use serde_json::json;

    const FILTER: &str = "k8s_fluentbit_fluent_io_filter_v1alpha2_manifest";
    const CLUSTER_FILTER: &str = "k8s_fluentbit_fluent_io_cluster_filter_v1alpha2_manifest";
    const CLUSTER_INPUT: &str = "k8s_fluentbit_fluent_io_cluster_input_v1alpha2_manifest";

    #[test]
    fn test_default_provider_name() {
        let provider = Provider::default();
        assert_eq!(provider.type_name(), "k8s");
        assert_eq!(provider.data_source_names().len(), 11);
        assert!(provider.data_source_names().contains(&FILTER));
    }

    #[test]
    fn test_data_source_names_are_sorted() {
        let provider = Provider::new("custom");
        let names = provider.data_source_names();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.iter().all(|name| name.starts_with("custom_fluentbit_fluent_io_")));
    }

    #[test]
    fn test_unknown_data_source() {
        let provider = Provider::default();
        let err = provider.schema("k8s_nope").unwrap_err();
        assert!(matches!(err, ManifestError::UnknownDataSource { .. }));
    }

    #[test]
    fn test_read_filter_example() {
        let provider = Provider::default();
        let response = provider
            .read_data_source(
                FILTER,
                &json!({
                    "metadata": { "name": "x", "namespace": "logging" },
                    "spec": { "match": "*.logs" }
                }),
            )
            .unwrap();

        assert!(response.yaml.contains("kind: Filter"));
        assert!(!response.yaml.contains("filters"));
    }

    #[test]
    fn test_retry_limit_rejected_before_read() {
        let provider = Provider::default();
        let config = |retry_limit: &str| {
            json!({
                "metadata": { "name": "grep" },
                "spec": { "filters": [{ "grep": { "regex": "x", "retry_limit": retry_limit } }] }
            })
        };

        let err = provider
            .read_data_source(CLUSTER_FILTER, &config("007"))
            .unwrap_err();
        let diags = err.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("spec.filters[0].grep.retry_limit")
        );

        for accepted in ["no_limits", "no_retries", "false", "5"] {
            assert!(provider
                .read_data_source(CLUSTER_FILTER, &config(accepted))
                .is_ok());
        }
    }

    #[test]
    fn test_port_rejected_before_read() {
        let provider = Provider::default();
        for port in [0, 65536, -1] {
            let err = provider
                .read_data_source(
                    CLUSTER_INPUT,
                    &json!({
                        "metadata": { "name": "forward" },
                        "spec": { "forward": { "port": port } }
                    }),
                )
                .unwrap_err();
            assert!(matches!(err, ManifestError::InvalidConfiguration { .. }));
        }

        assert!(provider
            .read_data_source(
                CLUSTER_INPUT,
                &json!({
                    "metadata": { "name": "forward" },
                    "spec": { "forward": { "port": 24224 } }
                }),
            )
            .is_ok());
    }

    #[test]
    fn test_setting_yaml_is_rejected() {
        let provider = Provider::default();
        let err = provider
            .read_data_source(
                CLUSTER_INPUT,
                &json!({ "metadata": { "name": "x" }, "yaml": "kind: Pod" }),
            )
            .unwrap_err();

        let diags = err.diagnostics();
        assert_eq!(diags[0].attribute.as_deref(), Some("yaml"));
        assert_eq!(
            diags[0].summary,
            "Invalid Configuration for Read-Only Attribute"
        );
    }

    #[test]
    fn test_warnings_do_not_block_read() {
        let provider = Provider::default();
        let response = provider
            .read_data_source(
                CLUSTER_FILTER,
                &json!({
                    "metadata": { "name": "records" },
                    "spec": { "filters": [{ "record_modifier": { "whitelist_keys": ["log"] } }] }
                }),
            )
            .unwrap();

        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.warnings[0].severity, Severity::Warning);
        assert!(response.yaml.contains("whitelistKeys"));
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let provider = Provider::default();
        let diags = provider
            .validate(
                FILTER,
                &json!({
                    "metadata": { "name": "Bad_Name" },
                    "spec": { "log_level": "verbose", "unknown": true }
                }),
            )
            .unwrap();

        let mut paths: Vec<&str> = diags
            .iter()
            .filter_map(|d| d.attribute.as_deref())
            .collect();
        paths.sort_unstable();
        assert_eq!(
            paths,
            vec![
                "metadata.name",
                "metadata.namespace",
                "spec.log_level",
                "spec.unknown"
            ]
        );
    }
}
