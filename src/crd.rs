// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definitions of the `fluentbit.fluent.io/v1alpha2` API.
//!
//! This module declares every CRD kind exposed as a manifest data source, along with the
//! specs that are not plugin blocks (`ClusterFluentBitConfig`, `FluentBitConfig`).
//!
//! # Resource Types
//!
//! ## Cluster-scoped
//!
//! - [`ClusterFilterManifest`] - `ClusterFilter`
//! - [`ClusterFluentBitConfigManifest`] - `ClusterFluentBitConfig`
//! - [`ClusterInputManifest`] - `ClusterInput`
//! - [`ClusterOutputManifest`] - `ClusterOutput`
//! - [`ClusterParserManifest`] - `ClusterParser`
//! - [`ClusterMultilineParserManifest`] - `ClusterMultilineParser`
//!
//! ## Namespaced
//!
//! - [`FilterManifest`] - `Filter`
//! - [`FluentBitConfigManifest`] - `FluentBitConfig`
//! - [`OutputManifest`] - `Output`
//! - [`ParserManifest`] - `Parser`
//! - [`MultilineParserManifest`] - `MultilineParser`
//!
//! # Example
//!
//! ```rust
//! use fluentbit_manifests::crd::{data_sources, ClusterInputManifest};
//! use fluentbit_manifests::manifest::ManifestKind;
//!
//! assert_eq!(ClusterInputManifest::KIND, "ClusterInput");
//! assert_eq!(data_sources().len(), 11);
//! ```

use crate::constants::{
    KIND_CLUSTER_FILTER, KIND_CLUSTER_FLUENT_BIT_CONFIG, KIND_CLUSTER_INPUT,
    KIND_CLUSTER_MULTILINE_PARSER, KIND_CLUSTER_OUTPUT, KIND_CLUSTER_PARSER, KIND_FILTER,
    KIND_FLUENT_BIT_CONFIG, KIND_MULTILINE_PARSER, KIND_OUTPUT, KIND_PARSER,
};
use crate::manifest::{DataSource, ManifestDataSource, ManifestKind};
use crate::metadata::{ClusterMetadata, NamespacedMetadata};
use crate::plugins::common::{
    log_level, non_negative, on_off, port, size, storage_type, LabelSelector,
};
use crate::plugins::filter::FilterSpec;
use crate::plugins::input::InputSpec;
use crate::plugins::output::OutputSpec;
use crate::plugins::parser::{MultilineParserSpec, ParserSpec};
use crate::schema::Validator;

crate::tf_object! {
    /// Storage configures the buffering of chunks on the filesystem.
    pub struct Storage {
        /// Select an optional location in the file system to store streams and chunks of data/
        path: Option<String> => "path",
        /// Configure the synchronization mode used to store the data into the file system
        sync: Option<String> => "sync" [Validator::OneOf { values: &["normal", "full"] }],
        /// Enable the data integrity check when writing and reading data from the filesystem
        checksum: Option<String> => "checksum" [on_off()],
        /// This option configure a hint of maximum value of memory to use when processing these records
        backlog_mem_limit: Option<String> => "backlogMemLimit" [size()],
        /// If the input plugin has enabled filesystem storage type,
        /// this property sets the maximum number of Chunks that can be up in memory
        max_chunks_up: Option<i64> => "maxChunksUp" [non_negative()],
        /// If http_server option has been enabled in the main Service configuration section,
        /// this option registers a new endpoint where internal metrics of the storage layer can be consumed
        metrics: Option<String> => "metrics" [on_off()],
        /// When enabled, irrecoverable chunks will be deleted during runtime, and any other irrecoverable chunk located in the configured storage path directory will be deleted when Fluent-Bit starts.
        delete_irrecoverable_chunks: Option<String> => "deleteIrrecoverableChunks" [on_off()],
    }
}

crate::tf_object! {
    /// Service defines the global behaviour of the Fluent-Bit engine.
    pub struct Service {
        /// If true go to background on start
        daemon: Option<bool> => "daemon",
        /// Interval to flush output
        flush_seconds: Option<f64> => "flushSeconds",
        /// Wait time on exit
        grace_seconds: Option<i64> => "graceSeconds" [non_negative()],
        /// the error count to meet the unhealthy requirement, this is a sum for all output plugins in a defined HC_Period
        hc_errors_count: Option<i64> => "hcErrorsCount" [non_negative()],
        /// the retry failure count to meet the unhealthy requirement, this is a sum for all output plugins in a defined HC_Period
        hc_retry_failure_count: Option<i64> => "hcRetryFailureCount" [non_negative()],
        /// The time period by second to count the error and retry failure data point
        hc_period: Option<i64> => "hcPeriod" [non_negative()],
        /// enable Health check feature at http://127.0.0.1:2020/api/v1/health Note: Enabling this will not automatically configure kubernetes to use fluentbit's healthcheck endpoint
        health_check: Option<bool> => "healthCheck",
        /// Address to listen
        http_listen: Option<String> => "httpListen",
        /// Port to listen
        http_port: Option<i64> => "httpPort" [port()],
        /// If true enable statistics HTTP server
        http_server: Option<bool> => "httpServer",
        /// File to log diagnostic output
        log_file: Option<String> => "logFile",
        /// Diagnostic level (error/warning/info/debug/trace)
        log_level: Option<String> => "logLevel" [log_level()],
        /// Optional 'parsers' config file (can be multiple)
        parsers_file: Option<String> => "parsersFile",
        /// backward compatible
        parsers_files: Option<Vec<String>> => "parsersFiles",
        /// Configure a global environment for the storage layer in Service.
        /// It is recommended to configure the volume and volumeMount separately for this storage.
        /// The hostPath type should be used for that Volume in Fluentbit daemon set.
        storage: Option<Storage> => "storage",
        /// Per-namespace re-emitter configuration
        emitter_name: Option<String> => "emitterName",
        /// Memory buffer limit of the re-emitter
        emitter_mem_buf_limit: Option<String> => "emitterMemBufLimit" [size()],
        /// Storage type of the re-emitter
        emitter_storage_type: Option<String> => "emitterStorageType" [storage_type()],
        /// If true enable reloading via HTTP
        hot_reload: Option<bool> => "hotReload",
    }
}

crate::tf_object! {
    /// FluentBitConfigSpec defines the desired state of ClusterFluentBitConfig
    pub struct FluentBitConfigSpec {
        /// Service defines the global behaviour of the Fluent-Bit engine.
        service: Option<Service> => "service",
        /// Select input plugins
        input_selector: Option<LabelSelector> => "inputSelector",
        /// Select filter plugins
        filter_selector: Option<LabelSelector> => "filterSelector",
        /// Select output plugins
        output_selector: Option<LabelSelector> => "outputSelector",
        /// Select parser plugins
        parser_selector: Option<LabelSelector> => "parserSelector",
        /// Select multiline parser plugins
        multiline_parser_selector: Option<LabelSelector> => "multilineParserSelector",
        /// If namespace is defined, then the configmap and secret for fluent-bit is in this namespace.
        /// If it is not defined, it is in the namespace of the fluentd-operator
        namespace: Option<String> => "namespace",
        /// ConfigFileFormat defines the format of the config file, default is "classic",
        /// available options are "classic" and "yaml"
        config_file_format: Option<String> => "configFileFormat" [Validator::OneOf {
            values: &["classic", "yaml"],
        }],
    }
}

crate::tf_object! {
    /// NamespacedFluentBitConfigSpec defines the desired state of FluentBitConfig
    pub struct NamespacedFluentBitConfigSpec {
        /// Select filter plugins
        filter_selector: Option<LabelSelector> => "filterSelector",
        /// Select output plugins
        output_selector: Option<LabelSelector> => "outputSelector",
        /// Select parser plugins
        parser_selector: Option<LabelSelector> => "parserSelector",
        /// Select multiline parser plugins
        multiline_parser_selector: Option<LabelSelector> => "multilineParserSelector",
        /// Select cluster level parser config
        cluster_parser_selector: Option<LabelSelector> => "clusterParserSelector",
        /// Select cluster level multiline parser config
        cluster_multiline_parser_selector: Option<LabelSelector> => "clusterMultilineParserSelector",
    }
}

/// Declares marker types implementing [`ManifestKind`] and the registry of their data
/// sources.
macro_rules! manifest_kinds {
    (
        $(
            $(#[doc = $doc:literal])*
            $name:ident {
                kind: $kind:expr,
                suffix: $suffix:literal,
                metadata: $metadata:ty,
                spec: $spec:ty,
            }
        )*
    ) => {
        $(
            $(#[doc = $doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl ManifestKind for $name {
                const KIND: &'static str = $kind;
                const TYPE_NAME_SUFFIX: &'static str = $suffix;
                const DESCRIPTION: &'static str = concat!($($doc),*);
                type Metadata = $metadata;
                type Spec = $spec;
            }
        )*

        /// Every manifest data source, in declaration order.
        #[must_use]
        pub fn data_sources() -> Vec<Box<dyn DataSource>> {
            vec![$(ManifestDataSource::<$name>::boxed()),*]
        }
    };
}

manifest_kinds! {
    /// ClusterFilter defines a cluster-wide Filter configuration.
    ClusterFilterManifest {
        kind: KIND_CLUSTER_FILTER,
        suffix: "cluster_filter",
        metadata: ClusterMetadata,
        spec: FilterSpec,
    }

    /// Filter is the Schema of namespace-level filter API
    FilterManifest {
        kind: KIND_FILTER,
        suffix: "filter",
        metadata: NamespacedMetadata,
        spec: FilterSpec,
    }

    /// ClusterFluentBitConfig is the Schema for the cluster-level fluentbitconfigs API
    ClusterFluentBitConfigManifest {
        kind: KIND_CLUSTER_FLUENT_BIT_CONFIG,
        suffix: "cluster_fluent_bit_config",
        metadata: ClusterMetadata,
        spec: FluentBitConfigSpec,
    }

    /// FluentBitConfig is the Schema of namespace-level fluentbitconfig API
    FluentBitConfigManifest {
        kind: KIND_FLUENT_BIT_CONFIG,
        suffix: "fluent_bit_config",
        metadata: NamespacedMetadata,
        spec: NamespacedFluentBitConfigSpec,
    }

    /// ClusterInput is the Schema for the inputs API
    ClusterInputManifest {
        kind: KIND_CLUSTER_INPUT,
        suffix: "cluster_input",
        metadata: ClusterMetadata,
        spec: InputSpec,
    }

    /// ClusterOutput is the Schema for the cluster-level outputs API
    ClusterOutputManifest {
        kind: KIND_CLUSTER_OUTPUT,
        suffix: "cluster_output",
        metadata: ClusterMetadata,
        spec: OutputSpec,
    }

    /// Output is the schema for namespace level output API
    OutputManifest {
        kind: KIND_OUTPUT,
        suffix: "output",
        metadata: NamespacedMetadata,
        spec: OutputSpec,
    }

    /// ClusterParser is the Schema for the cluster-level parsers API
    ClusterParserManifest {
        kind: KIND_CLUSTER_PARSER,
        suffix: "cluster_parser",
        metadata: ClusterMetadata,
        spec: ParserSpec,
    }

    /// Parser is the Schema of namespace-level parser API
    ParserManifest {
        kind: KIND_PARSER,
        suffix: "parser",
        metadata: NamespacedMetadata,
        spec: ParserSpec,
    }

    /// ClusterMultilineParser is the Schema of cluster-level multiline parser API
    ClusterMultilineParserManifest {
        kind: KIND_CLUSTER_MULTILINE_PARSER,
        suffix: "cluster_multiline_parser",
        metadata: ClusterMetadata,
        spec: MultilineParserSpec,
    }

    /// MultilineParser is the Schema of namespace-level multiline parser API
    MultilineParserManifest {
        kind: KIND_MULTILINE_PARSER,
        suffix: "multiline_parser",
        metadata: NamespacedMetadata,
        spec: MultilineParserSpec,
    }
}

#[cfg(test)]
#[path = "crd_tests.rs"]
mod crd_tests;
