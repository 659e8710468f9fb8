// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Object generator macro.
//!
//! Every CRD object is described once, as a field table, and [`tf_object!`] turns that
//! table into both halves a data source needs:
//!
//! - a typed model struct that deserializes from the Terraform configuration (snake_case
//!   attribute names) and serializes to the CRD document (the CRD's own field names),
//!   omitting unset optional fields
//! - the matching schema attributes, with descriptions taken from the field docs and
//!   the listed validators

/// Generates a model struct and its schema attributes from a field table.
///
/// Each field is written as `name: Type => "crdFieldName" [validators...]`. The
/// validator list is optional. `Option<T>` fields are optional attributes; any other
/// type is required.
///
/// # Example
///
/// ```ignore
/// tf_object! {
///     /// The Grep filter keeps or drops records based on a pattern.
///     pub struct Grep {
///         /// Keep records which field matches the regular expression.
///         regex: Option<String> => "regex",
///         /// Retry limit of the plugin.
///         retry_limit: Option<String> => "retryLimit" [retry_limit()],
///     }
/// }
/// ```
#[macro_export]
macro_rules! tf_object {
    (
        $(#[doc = $struct_doc:literal])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty => $crd_name:literal $([ $($validator:expr),* $(,)? ])?
            ),* $(,)?
        }
    ) => {
        $(#[doc = $struct_doc])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(
                    rename(serialize = $crd_name),
                    skip_serializing_if = "crate::schema::AttributeValue::is_unset"
                )]
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Schema attributes of this object, keyed by attribute name.
            #[must_use]
            pub fn attributes(
            ) -> ::std::collections::BTreeMap<::std::string::String, $crate::schema::Attribute> {
                #[allow(unused_mut)]
                let mut attributes = ::std::collections::BTreeMap::new();
                $(
                    attributes.insert(
                        $crate::schema::attribute_name(stringify!($field)),
                        $crate::schema::Attribute::for_type::<$ty>($crate::schema::describe(&[
                            $($doc),*
                        ]))
                        $(.with_validators(vec![$($validator),*]))?,
                    );
                )*
                attributes
            }
        }

        impl $crate::schema::AttributeValue for $name {
            fn attribute_kind() -> $crate::schema::AttributeKind {
                $crate::schema::AttributeKind::Object {
                    attributes: Self::attributes(),
                }
            }
        }
    };
}

#[cfg(test)]
#[path = "tf_object_tests.rs"]
mod tf_object_tests;
