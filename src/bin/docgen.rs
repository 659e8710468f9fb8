// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Data Source Markdown Documentation Generator
//!
//! Generates markdown reference documentation from the data source schemas.
//! This ensures the documentation in docs/data-sources.md is always in sync with the code.
//!
//! Usage:
//!   cargo run --bin docgen > docs/data-sources.md

use fluentbit_manifests::constants::API_GROUP_VERSION;
use fluentbit_manifests::provider::Provider;
use fluentbit_manifests::schema::{Attribute, AttributeKind};
use std::collections::BTreeMap;

const ROOT_TITLE: &str = "Attributes";

fn main() {
    let provider = Provider::default();

    println!("# Data Source Reference");
    println!();
    println!(
        "This document describes the manifest data sources for the `{API_GROUP_VERSION}` CRDs."
    );
    println!();
    println!("> **Note**: This file is AUTO-GENERATED from the data source schemas");
    println!("> DO NOT EDIT MANUALLY - Run `cargo run --bin docgen` to regenerate");
    println!();

    println!("## Table of Contents");
    println!();
    for name in provider.data_source_names() {
        println!("- [{name}](#{name})");
    }
    println!();

    for name in provider.data_source_names() {
        let Ok(data_source) = provider.data_source(name) else {
            continue;
        };
        let schema = data_source.schema();

        println!("## {name}");
        println!();
        println!("**Kind**: `{}`", data_source.kind());
        println!();
        println!("{}", schema.description);
        println!();

        let mut sections = Vec::new();
        print_attributes(ROOT_TITLE, &schema.attributes, &mut sections);
        while let Some((title, attributes)) = sections.pop() {
            print_attributes(&title, attributes, &mut sections);
        }

        println!("---");
        println!();
    }
}

/// Prints one attribute table and queues nested objects for their own tables.
fn print_attributes<'a>(
    title: &str,
    attributes: &'a BTreeMap<String, Attribute>,
    sections: &mut Vec<(String, &'a BTreeMap<String, Attribute>)>,
) {
    println!("### {title}");
    println!();
    println!("| Attribute | Type | Required | Description |");
    println!("| --------- | ---- | -------- | ----------- |");

    let mut nested = Vec::new();
    for (name, attribute) in attributes {
        let required = if attribute.required {
            "Yes"
        } else if attribute.computed {
            "Computed"
        } else {
            "No"
        };
        println!(
            "| `{name}` | {} | {required} | {} |",
            attribute.kind.type_name(),
            get_description(attribute)
        );

        if let Some(children) = attribute.nested() {
            if !children.is_empty() {
                let path = if title == ROOT_TITLE {
                    name.clone()
                } else {
                    format!("{title}.{name}")
                };
                nested.push((path, children));
            }
        }
    }
    println!();

    // Reverse so the stack pops them in alphabetical order
    sections.extend(nested.into_iter().rev());
}

fn get_description(attribute: &Attribute) -> String {
    let mut description = attribute.description.clone();
    for validator in &attribute.validators {
        description.push_str(&format!(" _Constraint: {}._", validator.describe()));
    }
    if let AttributeKind::List { .. } | AttributeKind::Map { .. } = attribute.kind {
        if attribute.nested().is_some() {
            description.push_str(" _See nested table._");
        }
    }
    // Escape pipe characters in descriptions for markdown tables
    description.replace('|', "\\|").replace('\n', " ")
}
