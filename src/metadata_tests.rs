// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for manifest metadata.

#[cfg(test)]
mod tests {
    use crate::metadata::*;
    use crate::schema::{AttributeValue, Schema};
    use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn metadata_schema<M: AttributeValue>() -> Schema {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            "metadata".to_string(),
            crate::schema::Attribute::for_type::<M>("metadata"),
        );
        Schema {
            description: "test".to_string(),
            attributes,
        }
    }

    fn resource() -> ApiResource {
        ApiResource::from_gvk(&GroupVersionKind::gvk(
            "fluentbit.fluent.io",
            "v1alpha2",
            "Filter",
        ))
    }

    #[test]
    fn test_namespaced_requires_namespace() {
        let schema = metadata_schema::<NamespacedMetadata>();

        let diags = schema.validate(&json!({ "metadata": { "name": "x" } }));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("metadata.namespace"));
    }

    #[test]
    fn test_cluster_rejects_namespace() {
        let schema = metadata_schema::<ClusterMetadata>();

        let diags = schema.validate(&json!({
            "metadata": { "name": "x", "namespace": "logging" }
        }));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].summary, "Unsupported Argument");
    }

    #[test]
    fn test_name_must_be_dns_subdomain() {
        let schema = metadata_schema::<ClusterMetadata>();

        assert!(schema
            .validate(&json!({ "metadata": { "name": "kube-logs.v2" } }))
            .is_empty());
        assert!(!schema
            .validate(&json!({ "metadata": { "name": "Kube_Logs" } }))
            .is_empty());
        assert!(!schema.validate(&json!({ "metadata": { "name": "" } })).is_empty());
    }

    #[test]
    fn test_label_keys_validated() {
        let schema = metadata_schema::<ClusterMetadata>();

        assert!(schema
            .validate(&json!({
                "metadata": {
                    "name": "x",
                    "labels": { "app.kubernetes.io/name": "fluent-bit" }
                }
            }))
            .is_empty());
        let diags = schema.validate(&json!({
            "metadata": { "name": "x", "labels": { "-bad": "v" } }
        }));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_apply_namespaced() {
        let metadata = NamespacedMetadata {
            name: "x".to_string(),
            namespace: "logging".to_string(),
            labels: Some(BTreeMap::from([("app".to_string(), "fb".to_string())])),
            annotations: None,
        };

        let object = metadata.apply(DynamicObject::new(metadata.name(), &resource()));
        assert_eq!(object.metadata.name.as_deref(), Some("x"));
        assert_eq!(object.metadata.namespace.as_deref(), Some("logging"));
        assert_eq!(object.metadata.labels.unwrap()["app"], "fb");
        assert!(object.metadata.annotations.is_none());
    }

    #[test]
    fn test_apply_cluster_has_no_namespace() {
        let metadata = ClusterMetadata {
            name: "x".to_string(),
            ..Default::default()
        };

        let object = metadata.apply(DynamicObject::new(metadata.name(), &resource()));
        assert!(object.metadata.namespace.is_none());
        assert!(object.metadata.labels.is_none());
    }
}
