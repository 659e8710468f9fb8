// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for plugin configuration blocks.

#[cfg(test)]
mod tests {
    use crate::plugins::common::*;
    use crate::plugins::filter::*;
    use crate::plugins::input::*;
    use crate::plugins::output::*;
    use crate::plugins::parser::*;
    use crate::schema::{Attribute, AttributeValue, Schema};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn spec_schema<T: AttributeValue>() -> Schema {
        let mut attributes = BTreeMap::new();
        attributes.insert("spec".to_string(), Attribute::for_type::<T>("spec"));
        Schema {
            description: "test".to_string(),
            attributes,
        }
    }

    #[test]
    fn test_retry_limit_validator() {
        let schema = spec_schema::<Grep>();

        for rejected in ["007", "0", "-1", "unlimited", ""] {
            let diags = schema.validate(&json!({ "spec": { "retry_limit": rejected } }));
            assert_eq!(diags.len(), 1, "{rejected} should be rejected");
            assert_eq!(diags[0].attribute.as_deref(), Some("spec.retry_limit"));
        }

        for accepted in ["false", "no_limits", "no_retries", "1", "10"] {
            let diags = schema.validate(&json!({ "spec": { "retry_limit": accepted } }));
            assert!(diags.is_empty(), "{accepted} should be accepted");
        }
    }

    #[test]
    fn test_input_ports_in_range() {
        let schema = spec_schema::<InputSpec>();

        let diags = schema.validate(&json!({ "spec": { "forward": { "port": 0 } } }));
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].detail,
            "Attribute spec.forward.port value must be between 1 and 65535, got: 0"
        );

        let diags = schema.validate(&json!({
            "spec": {
                "http": { "port": 65535 },
                "tcp": { "port": 1 },
                "syslog": { "port": 65536 }
            }
        }));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("spec.syslog.port"));
    }

    #[test]
    fn test_log_level_enum() {
        let schema = spec_schema::<FilterSpec>();

        for level in ["off", "error", "warning", "info", "debug", "trace"] {
            assert!(schema
                .validate(&json!({ "spec": { "log_level": level } }))
                .is_empty());
        }

        let diags = schema.validate(&json!({ "spec": { "log_level": "warn" } }));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_lua_requires_script_or_code() {
        let schema = spec_schema::<FilterSpec>();
        let config = |lua| json!({ "spec": { "filters": [{ "lua": lua }] } });

        let neither = schema.validate(&config(json!({ "call": "cb" })));
        assert_eq!(neither.len(), 1);
        assert_eq!(
            neither[0].attribute.as_deref(),
            Some("spec.filters[0].lua")
        );

        let both = schema.validate(&config(json!({
            "call": "cb",
            "code": "function cb() end",
            "script": { "key": "filter.lua", "name": "lua-scripts" }
        })));
        assert_eq!(both.len(), 1);

        let code = schema.validate(&config(json!({ "call": "cb", "code": "function cb() end" })));
        assert!(code.is_empty());
    }

    #[test]
    fn test_lua_call_is_required() {
        let schema = spec_schema::<FilterSpec>();
        let diags = schema.validate(&json!({
            "spec": { "filters": [{ "lua": { "code": "x" } }] }
        }));

        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("spec.filters[0].lua.call")
        );
        assert_eq!(diags[0].summary, "Missing Required Attribute");
    }

    #[test]
    fn test_filter_spec_serialization_omits_unset() {
        let spec = FilterSpec {
            r#match: Some("*.logs".to_string()),
            ..Default::default()
        };

        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({ "match": "*.logs" }));
    }

    #[test]
    fn test_filter_item_renames() {
        let item: FilterItem = serde_json::from_value(json!({
            "record_modifier": { "records": ["cluster prod"], "remove_keys": ["stream"] },
            "rewrite_tag": { "rules": ["$level ^(error)$ error.$TAG false"], "emitter_name": "re_emitted" }
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "recordModifier": { "records": ["cluster prod"], "removeKeys": ["stream"] },
                "rewriteTag": {
                    "rules": ["$level ^(error)$ error.$TAG false"],
                    "emitterName": "re_emitted"
                }
            })
        );
    }

    #[test]
    fn test_modify_conditions_and_rules() {
        let mut set = BTreeMap::new();
        set.insert("env".to_string(), "prod".to_string());

        let modify = Modify {
            conditions: Some(vec![ModifyCondition {
                key_exists: Some("kubernetes".to_string()),
                ..Default::default()
            }]),
            rules: Some(vec![ModifyRule {
                set: Some(set),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&modify).unwrap(),
            json!({
                "conditions": [{ "keyExists": "kubernetes" }],
                "rules": [{ "set": { "env": "prod" } }]
            })
        );
    }

    #[test]
    fn test_secret_value_from() {
        let schema = spec_schema::<Secret>();
        let diags = schema.validate(&json!({
            "spec": { "value_from": { "secret_key_ref": { "name": "es" } } }
        }));

        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("spec.value_from.secret_key_ref.key")
        );

        let secret: Secret = serde_json::from_value(json!({
            "value_from": { "secret_key_ref": { "name": "es", "key": "password" } }
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&secret).unwrap(),
            json!({ "valueFrom": { "secretKeyRef": { "key": "password", "name": "es" } } })
        );
    }

    #[test]
    fn test_label_selector_operator() {
        let schema = spec_schema::<LabelSelector>();
        let diags = schema.validate(&json!({
            "spec": {
                "match_expressions": [
                    { "key": "app", "operator": "In", "values": ["fluent-bit"] },
                    { "key": "tier", "operator": "Equals" }
                ]
            }
        }));

        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].attribute.as_deref(),
            Some("spec.match_expressions[1].operator")
        );
    }

    #[test]
    fn test_output_total_limit_size() {
        let schema = spec_schema::<OutputSpec>();

        assert!(schema
            .validate(&json!({ "spec": { "total_limit_size": "10G" } }))
            .is_empty());
        assert_eq!(
            schema
                .validate(&json!({ "spec": { "total_limit_size": "ten gigs" } }))
                .len(),
            1
        );
    }

    #[test]
    fn test_loki_requires_host() {
        let schema = spec_schema::<OutputSpec>();
        let diags = schema.validate(&json!({ "spec": { "loki": { "port": 3100 } } }));

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("spec.loki.host"));
    }

    #[test]
    fn test_null_output_renders_empty_object() {
        let spec = OutputSpec {
            r#match: Some("*".to_string()),
            null: Some(Null {}),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({ "match": "*", "null": {} })
        );
    }

    #[test]
    fn test_parser_spec_regex_time_offset() {
        let schema = spec_schema::<ParserSpec>();

        assert!(schema
            .validate(&json!({ "spec": { "regex": { "regex": "^(?<x>.*)$", "time_offset": "+0200" } } }))
            .is_empty());
        assert_eq!(
            schema
                .validate(&json!({ "spec": { "regex": { "time_offset": "2h" } } }))
                .len(),
            1
        );
    }

    #[test]
    fn test_multiline_parser_rules() {
        let schema = spec_schema::<MultilineParserSpec>();

        let diags = schema.validate(&json!({ "spec": { "type": "regex", "rules": [] } }));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].attribute.as_deref(), Some("spec.rules"));

        let spec: MultilineParserSpec = serde_json::from_value(json!({
            "type": "regex",
            "flush_timeout": 1000,
            "rules": [
                { "start": "start_state", "regex": "/^\\d{4}/", "next": "cont" },
                { "start": "cont", "regex": "/^\\s+/", "next": "cont" }
            ]
        }))
        .unwrap();
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["flushTimeout"], json!(1000));
        assert_eq!(value["rules"][0]["start"], json!("start_state"));
    }

    #[test]
    fn test_tail_db_sync() {
        let schema = spec_schema::<InputSpec>();

        assert!(schema
            .validate(&json!({ "spec": { "tail": { "db_sync": "Normal" } } }))
            .is_empty());
        assert_eq!(
            schema
                .validate(&json!({ "spec": { "tail": { "db_sync": "always" } } }))
                .len(),
            1
        );
    }
}
