// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Fluent Bit plugin configuration blocks.
//!
//! Every block is declared once with [`tf_object!`](crate::tf_object), which yields the
//! typed model used by `Read` and the schema attributes used for validation.
//!
//! - [`common`] - secrets, selectors and shared validators
//! - [`filter`] - filter plugins (`ClusterFilter`, `Filter`)
//! - [`input`] - input plugins (`ClusterInput`)
//! - [`output`] - output plugins (`ClusterOutput`, `Output`)
//! - [`parser`] - parser definitions (`ClusterParser`, `Parser`, multiline parsers)

pub mod common;
pub mod filter;
pub mod input;
pub mod output;
pub mod parser;

#[cfg(test)]
mod mod_tests;
