// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Declarative schema tree for manifest data sources.
//!
//! A [`Schema`] is pure data: a tree of [`Attribute`]s, each with a kind, a description,
//! required/optional/computed flags and a list of [`Validator`]s. [`Schema::validate`]
//! runs those validators against a JSON configuration the same way a hosting Terraform
//! framework would, before any data source logic executes.
//!
//! Typed models map onto the tree through [`AttributeValue`], which is implemented for
//! the scalar and collection types used in models and generated for every object by
//! [`tf_object!`](crate::tf_object).

use crate::errors::Diagnostic;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The value type of an attribute.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int64,
    /// 64-bit float
    Float64,
    /// Ordered list of elements of one kind
    List {
        /// Element kind
        element: Box<AttributeKind>,
    },
    /// String-keyed map of values of one kind
    Map {
        /// Value kind
        element: Box<AttributeKind>,
    },
    /// Nested object with its own attributes
    Object {
        /// Nested attributes keyed by name
        attributes: BTreeMap<String, Attribute>,
    },
}

impl AttributeKind {
    /// Short type name used in diagnostics and documentation.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::String => "String".to_string(),
            Self::Bool => "Boolean".to_string(),
            Self::Int64 | Self::Float64 => "Number".to_string(),
            Self::List { element } => format!("List of {}", element.type_name()),
            Self::Map { element } => format!("Map of {}", element.type_name()),
            Self::Object { .. } => "Attributes".to_string(),
        }
    }
}

/// A single schema attribute.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    /// Value type
    #[serde(flatten)]
    pub kind: AttributeKind,
    /// Human readable description
    pub description: String,
    /// Must be set in configuration
    pub required: bool,
    /// May be set in configuration
    pub optional: bool,
    /// Set by the data source
    pub computed: bool,
    /// Constraints checked during validation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    /// Builds an attribute whose kind and required-ness follow the model type `T`.
    #[must_use]
    pub fn for_type<T: AttributeValue>(description: impl Into<String>) -> Self {
        let required = T::required();
        Self {
            kind: T::attribute_kind(),
            description: description.into(),
            required,
            optional: !required,
            computed: false,
            validators: Vec::new(),
        }
    }

    /// Builds a computed-only string attribute.
    #[must_use]
    pub fn computed_string(description: impl Into<String>) -> Self {
        Self {
            kind: AttributeKind::String,
            description: description.into(),
            required: false,
            optional: false,
            computed: true,
            validators: Vec::new(),
        }
    }

    /// Attaches validators.
    #[must_use]
    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators.extend(validators);
        self
    }

    /// Nested attributes, for object attributes.
    #[must_use]
    pub fn nested(&self) -> Option<&BTreeMap<String, Attribute>> {
        match &self.kind {
            AttributeKind::Object { attributes } => Some(attributes),
            AttributeKind::List { element } | AttributeKind::Map { element } => match &**element {
                AttributeKind::Object { attributes } => Some(attributes),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Declarative constraint on an attribute value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "validator", rename_all = "snake_case")]
pub enum Validator {
    /// String must match the regular expression
    RegexMatches {
        /// Regular expression
        pattern: &'static str,
        /// Explanation shown when the value does not match
        message: &'static str,
    },
    /// String must be one of the listed values
    OneOf {
        /// Accepted values
        values: &'static [&'static str],
    },
    /// Integer must lie in `[min, max]`
    Int64Between {
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },
    /// Integer must be at least `min`
    Int64AtLeast {
        /// Inclusive lower bound
        min: i64,
    },
    /// String or collection must have at least `min` characters or elements
    LengthAtLeast {
        /// Inclusive lower bound
        min: usize,
    },
    /// String or collection must have at most `max` characters or elements
    LengthAtMost {
        /// Inclusive upper bound
        max: usize,
    },
    /// Every map key must match the regular expression
    MapKeysMatch {
        /// Regular expression
        pattern: &'static str,
        /// Explanation shown when a key does not match
        message: &'static str,
    },
    /// Exactly one of the named nested attributes must be set
    ExactlyOneOf {
        /// Nested attribute names
        attributes: &'static [&'static str],
    },
    /// Setting the attribute produces a warning
    Deprecated {
        /// Replacement hint
        message: &'static str,
    },
}

const INVALID_VALUE: &str = "Invalid Attribute Value";

impl Validator {
    /// Human readable constraint description, used in documentation.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::RegexMatches { message, .. } | Self::MapKeysMatch { message, .. } => {
                (*message).to_string()
            }
            Self::OneOf { values } => format!("must be one of: {}", quote_all(values)),
            Self::Int64Between { min, max } => format!("must be between {min} and {max}"),
            Self::Int64AtLeast { min } => format!("must be at least {min}"),
            Self::LengthAtLeast { min } => format!("length must be at least {min}"),
            Self::LengthAtMost { max } => format!("length must be at most {max}"),
            Self::ExactlyOneOf { attributes } => {
                format!("exactly one of {} must be set", quote_all(attributes))
            }
            Self::Deprecated { message } => format!("deprecated: {message}"),
        }
    }

    /// Checks `value` (already known to be of the attribute's kind).
    pub fn validate(&self, path: &AttributePath, value: &Value) -> Option<Diagnostic> {
        match self {
            Self::RegexMatches { pattern, message } => {
                let text = value.as_str()?;
                match compile(pattern, path) {
                    Ok(re) if re.is_match(text) => None,
                    Ok(_) => Some(Diagnostic::attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("Attribute {path} {message}, got: {text}"),
                    )),
                    Err(diag) => Some(diag),
                }
            }
            Self::OneOf { values } => {
                let text = value.as_str()?;
                if values.contains(&text) {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path,
                        INVALID_VALUE,
                        format!(
                            "Attribute {path} value must be one of: [{}], got: \"{text}\"",
                            quote_all(values)
                        ),
                    ))
                }
            }
            Self::Int64Between { min, max } => {
                let number = value.as_i64()?;
                if (*min..=*max).contains(&number) {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("Attribute {path} value must be between {min} and {max}, got: {number}"),
                    ))
                }
            }
            Self::Int64AtLeast { min } => {
                let number = value.as_i64()?;
                if number >= *min {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("Attribute {path} value must be at least {min}, got: {number}"),
                    ))
                }
            }
            Self::LengthAtLeast { min } => {
                let length = value_length(value)?;
                if length >= *min {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path,
                        "Invalid Attribute Value Length",
                        format!("Attribute {path} length must be at least {min}, got: {length}"),
                    ))
                }
            }
            Self::LengthAtMost { max } => {
                let length = value_length(value)?;
                if length <= *max {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path,
                        "Invalid Attribute Value Length",
                        format!("Attribute {path} length must be at most {max}, got: {length}"),
                    ))
                }
            }
            Self::MapKeysMatch { pattern, message } => {
                let map = value.as_object()?;
                let re = match compile(pattern, path) {
                    Ok(re) => re,
                    Err(diag) => return Some(diag),
                };
                let bad = map.keys().find(|key| !re.is_match(key))?;
                Some(Diagnostic::attribute_error(
                    path.key(bad),
                    INVALID_VALUE,
                    format!("Attribute {path} key {message}, got: {bad}"),
                ))
            }
            Self::ExactlyOneOf { attributes } => {
                let map = value.as_object()?;
                let set = attributes
                    .iter()
                    .filter(|name| map.get(**name).is_some_and(|v| !v.is_null()))
                    .count();
                if set == 1 {
                    None
                } else {
                    Some(Diagnostic::attribute_error(
                        path,
                        "Invalid Attribute Combination",
                        format!(
                            "Exactly one of these attributes must be configured: [{}], got: {set}",
                            quote_all(attributes)
                        ),
                    ))
                }
            }
            Self::Deprecated { message } => Some(Diagnostic::attribute_warning(
                path,
                "Deprecated Attribute",
                format!("Attribute {path} is deprecated: {message}"),
            )),
        }
    }
}

fn quote_all(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn compile(pattern: &str, path: &AttributePath) -> Result<Regex, Diagnostic> {
    Regex::new(pattern).map_err(|e| {
        Diagnostic::attribute_error(path, "Invalid Validator", format!("pattern {pattern}: {e}"))
    })
}

fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Dotted path to an attribute inside a configuration, e.g. `spec.filters[0].grep`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributePath(String);

impl AttributePath {
    /// The empty path (schema root).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a nested attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Path of a list element.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Path of a map value.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}[\"{key}\"]", self.0))
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level schema of a data source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schema {
    /// Data source description
    pub description: String,
    /// Top-level attributes keyed by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Validates a configuration object against this schema.
    ///
    /// Returns every problem found; an empty vector means the configuration is valid.
    /// `null` values are treated as unset.
    #[must_use]
    pub fn validate(&self, config: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        validate_object(
            &self.attributes,
            config,
            &AttributePath::root(),
            &mut diagnostics,
        );
        diagnostics
    }
}

fn validate_object(
    attributes: &BTreeMap<String, Attribute>,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(object) = value.as_object() else {
        diagnostics.push(type_mismatch(path, "object", value));
        return;
    };

    for key in object.keys().filter(|key| !attributes.contains_key(*key)) {
        diagnostics.push(Diagnostic::attribute_error(
            path.attribute(key),
            "Unsupported Argument",
            format!("An argument named \"{key}\" is not expected here."),
        ));
    }

    for (name, attribute) in attributes {
        let attribute_path = path.attribute(name);
        match object.get(name).filter(|v| !v.is_null()) {
            None if attribute.required => diagnostics.push(Diagnostic::attribute_error(
                &attribute_path,
                "Missing Required Attribute",
                format!("The argument \"{name}\" is required, but no definition was found."),
            )),
            None => {}
            Some(_) if attribute.computed && !attribute.optional => {
                diagnostics.push(Diagnostic::attribute_error(
                    &attribute_path,
                    "Invalid Configuration for Read-Only Attribute",
                    format!("Cannot set value for this attribute as the provider will compute it: {name}"),
                ));
            }
            Some(v) => {
                if validate_value(&attribute.kind, v, &attribute_path, diagnostics) {
                    diagnostics.extend(
                        attribute
                            .validators
                            .iter()
                            .filter_map(|validator| validator.validate(&attribute_path, v)),
                    );
                }
            }
        }
    }
}

/// Checks `value` against `kind`, recursing into collections and objects.
///
/// Returns `false` if the value itself has the wrong type.
fn validate_value(
    kind: &AttributeKind,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Vec<Diagnostic>,
) -> bool {
    let matches = match kind {
        AttributeKind::String => value.is_string(),
        AttributeKind::Bool => value.is_boolean(),
        AttributeKind::Int64 => value.as_i64().is_some(),
        AttributeKind::Float64 => value.is_number(),
        AttributeKind::List { element } => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if item.is_null() {
                        diagnostics.push(Diagnostic::attribute_error(
                            path.index(i),
                            INVALID_VALUE,
                            "List elements must not be null",
                        ));
                    } else {
                        validate_value(element, item, &path.index(i), diagnostics);
                    }
                }
                true
            }
            None => false,
        },
        AttributeKind::Map { element } => match value.as_object() {
            Some(map) => {
                for (key, item) in map {
                    if item.is_null() {
                        diagnostics.push(Diagnostic::attribute_error(
                            path.key(key),
                            INVALID_VALUE,
                            "Map values must not be null",
                        ));
                    } else {
                        validate_value(element, item, &path.key(key), diagnostics);
                    }
                }
                true
            }
            None => false,
        },
        AttributeKind::Object { attributes } => {
            if value.is_object() {
                validate_object(attributes, value, path, diagnostics);
                true
            } else {
                false
            }
        }
    };

    if !matches {
        diagnostics.push(type_mismatch(path, &kind.type_name(), value));
    }
    matches
}

fn type_mismatch(path: &AttributePath, expected: &str, value: &Value) -> Diagnostic {
    let got = match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    };
    Diagnostic::attribute_error(
        path,
        "Incorrect Attribute Type",
        format!("Attribute {path} expected {expected}, got: {got}"),
    )
}

/// Maps a model field type onto the schema.
///
/// Non-`Option` types are required attributes; `Option<T>` makes `T` optional and is
/// omitted from rendered documents when unset.
pub trait AttributeValue {
    /// Schema kind of this type.
    fn attribute_kind() -> AttributeKind;

    /// Whether the attribute must be configured.
    fn required() -> bool {
        true
    }

    /// Whether the value is omitted when serialized.
    fn is_unset(&self) -> bool {
        false
    }
}

impl AttributeValue for String {
    fn attribute_kind() -> AttributeKind {
        AttributeKind::String
    }
}

impl AttributeValue for bool {
    fn attribute_kind() -> AttributeKind {
        AttributeKind::Bool
    }
}

impl AttributeValue for i64 {
    fn attribute_kind() -> AttributeKind {
        AttributeKind::Int64
    }
}

impl AttributeValue for f64 {
    fn attribute_kind() -> AttributeKind {
        AttributeKind::Float64
    }
}

impl<T: AttributeValue> AttributeValue for Vec<T> {
    fn attribute_kind() -> AttributeKind {
        AttributeKind::List {
            element: Box::new(T::attribute_kind()),
        }
    }
}

impl<T: AttributeValue> AttributeValue for BTreeMap<String, T> {
    fn attribute_kind() -> AttributeKind {
        AttributeKind::Map {
            element: Box::new(T::attribute_kind()),
        }
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn attribute_kind() -> AttributeKind {
        T::attribute_kind()
    }

    fn required() -> bool {
        false
    }

    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

/// Terraform attribute name for a Rust field name (strips the raw identifier prefix).
#[must_use]
pub fn attribute_name(field: &str) -> String {
    field.trim_start_matches("r#").to_string()
}

/// Joins doc comment lines into a single-line description.
#[must_use]
pub fn describe(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod schema_tests;
