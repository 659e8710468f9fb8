// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Filter plugins of `ClusterFilter` and `Filter`.
//!
//! Each [`FilterItem`] holds one or more plugin blocks; Fluent Bit applies them in
//! order to every record whose tag matches the owning filter.

use super::common::{non_negative, retry_limit, size, storage_type, ConfigMapKeySelector};
use crate::schema::Validator;
use std::collections::BTreeMap;

crate::tf_object! {
    /// Aws filter plugin adds AWS EC2 instance metadata to log records.
    pub struct Aws {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Specify which version of the instance metadata service to use. Valid values are 'v1' or 'v2'.
        imds_version: Option<String> => "imdsVersion" [Validator::OneOf { values: &["v1", "v2"] }],
        /// The availability zone; for example, 'us-east-1a'. Default is true.
        az: Option<bool> => "az",
        /// The EC2 instance ID. Default is true.
        ec2_instance_id: Option<bool> => "ec2InstanceID",
        /// The EC2 instance type. Default is false.
        ec2_instance_type: Option<bool> => "ec2InstanceType",
        /// The EC2 instance private ip. Default is false.
        private_ip: Option<bool> => "privateIP",
        /// The EC2 instance image id. Default is false.
        ami_id: Option<bool> => "amiID",
        /// The account ID for current EC2 instance. Default is false.
        account_id: Option<bool> => "accountID",
        /// The hostname for current EC2 instance. Default is false.
        host_name: Option<bool> => "hostName",
        /// The VPC ID for current EC2 instance. Default is false.
        vpc_id: Option<bool> => "vpcID",
    }
}

crate::tf_object! {
    /// Grep defines Grep Filter configuration.
    pub struct Grep {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Keep records which field matches the regular expression.
        /// Value Format: FIELD REGEX
        regex: Option<String> => "regex",
        /// Exclude records which field matches the regular expression.
        /// Value Format: FIELD REGEX
        exclude: Option<String> => "exclude",
    }
}

crate::tf_object! {
    /// Kubernetes filter allows to enrich your log files with Kubernetes metadata.
    pub struct Kubernetes {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Set the buffer size for HTTP client when reading responses from Kubernetes API server.
        buffer_size: Option<String> => "bufferSize" [size()],
        /// API Server end-point.
        kube_url: Option<String> => "kubeURL",
        /// CA certificate file.
        kube_ca_file: Option<String> => "kubeCAFile",
        /// Absolute path to scan for certificate files.
        kube_ca_path: Option<String> => "kubeCAPath",
        /// Token file.
        kube_token_file: Option<String> => "kubeTokenFile",
        /// When the source records comes from Tail input plugin,
        /// this option allows to specify what's the prefix used in Tail configuration.
        kube_tag_prefix: Option<String> => "kubeTagPrefix",
        /// When enabled, it checks if the log field content is a JSON string map,
        /// if so, it append the map fields as part of the log structure.
        merge_log: Option<bool> => "mergeLog",
        /// When Merge_Log is enabled, the filter tries to assume the log field from the incoming message is a JSON string message
        /// and make a structured representation of it at the same level of the log field in the map.
        merge_log_key: Option<String> => "mergeLogKey",
        /// When Merge_Log is enabled, trim (remove possible \n or \r) field values.
        merge_log_trim: Option<bool> => "mergeLogTrim",
        /// Optional parser name to specify how to parse the data contained in the log key. Recommended use is for developers or testing only.
        merge_parser: Option<String> => "mergeParser",
        /// When Keep_Log is disabled, the log field is removed from the incoming message once it has been successfully merged.
        keep_log: Option<bool> => "keepLog",
        /// Debug level between 0 (nothing) and 4 (every detail).
        tls_debug: Option<i64> => "tlsDebug" [Validator::Int64Between { min: 0, max: 4 }],
        /// When enabled, turns on certificate validation when connecting to the Kubernetes API server.
        tls_verify: Option<bool> => "tlsVerify",
        /// When enabled, the filter reads logs coming in Journald format.
        use_journal: Option<bool> => "useJournal",
        /// When enabled, metadata will be fetched from K8s when docker_id is changed.
        cache_use_docker_id: Option<bool> => "cacheUseDockerId",
        /// Set an alternative Parser to process record Tag and extract pod_name, namespace_name, container_name and docker_id.
        regex_parser: Option<String> => "regexParser",
        /// Allow Kubernetes Pods to suggest a pre-defined Parser.
        k8s_logging_parser: Option<bool> => "k8sLoggingParser",
        /// Allow Kubernetes Pods to exclude their logs from the log processor.
        k8s_logging_exclude: Option<bool> => "k8sLoggingExclude",
        /// Include Kubernetes resource labels in the extra metadata.
        labels: Option<bool> => "labels",
        /// Include Kubernetes resource annotations in the extra metadata.
        annotations: Option<bool> => "annotations",
        /// If set, Kubernetes meta-data can be cached/pre-loaded from files in JSON format in this directory.
        kube_meta_preload_cache_dir: Option<String> => "kubeMetaPreloadCacheDir",
        /// If set, use dummy-meta data (for test/dev purposes)
        dummy_meta: Option<bool> => "dummyMeta",
        /// DNS lookup retries N times until the network start working
        dns_retries: Option<i64> => "dnsRetries" [non_negative()],
        /// DNS lookup interval between network status checks
        dns_wait_time: Option<i64> => "dnsWaitTime" [non_negative()],
        /// This is an optional feature flag to get metadata information from kubelet
        /// instead of calling Kube Server API to enhance the log.
        use_kubelet: Option<bool> => "useKubelet",
        /// kubelet port using for HTTP request, this only works when useKubelet is set to On.
        kubelet_port: Option<i64> => "kubeletPort" [super::common::port()],
        /// kubelet host using for HTTP request, this only works when Use_Kubelet set to On.
        kubelet_host: Option<String> => "kubeletHost",
        /// configurable TTL for K8s cached metadata.
        kube_meta_cache_ttl: Option<String> => "kubeMetaCacheTTL",
        /// configurable 'time to live' for the K8s token.
        kube_token_ttl: Option<String> => "kubeTokenTTL",
        /// Include Kubernetes namespace labels on every record
        namespace_labels: Option<bool> => "namespaceLabels",
        /// Include Kubernetes namespace annotations on every record
        namespace_annotations: Option<bool> => "namespaceAnnotations",
        /// Include Kubernetes owner references in the extra metadata
        owner_references: Option<bool> => "ownerReferences",
    }
}

crate::tf_object! {
    /// Lua defines Lua Filter configuration.
    pub struct Lua {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Path to the Lua script that will be used.
        script: Option<ConfigMapKeySelector> => "script",
        /// Inline LUA code instead of loading from a path via script.
        code: Option<String> => "code",
        /// Lua function name that will be triggered to do filtering.
        /// It's assumed that the function is declared inside the Script defined above.
        call: String => "call",
        /// If these keys are matched, the fields are converted to integer.
        type_int_key: Option<Vec<String>> => "typeIntKey",
        /// If these keys are matched, the fields are handled as array.
        type_array_key: Option<Vec<String>> => "typeArrayKey",
        /// If enabled, Lua script will be executed in protected mode.
        protected_mode: Option<bool> => "protectedMode",
        /// By default when the Lua script is invoked, the record timestamp is passed as a
        /// Floating number which might lead to loss precision when the data is converted back.
        time_as_table: Option<bool> => "timeAsTable",
    }
}

crate::tf_object! {
    /// Condition defines the condition in Modify filter.
    pub struct ModifyCondition {
        /// Is true if KEY exists
        key_exists: Option<String> => "keyExists",
        /// Is true if KEY does not exist
        key_does_not_exist: Option<BTreeMap<String, String>> => "keyDoesNotExist",
        /// Is true if a key matches regex KEY
        a_key_matches: Option<String> => "aKeyMatches",
        /// Is true if no key matches regex KEY
        no_key_matches: Option<String> => "noKeyMatches",
        /// Is true if KEY exists and its value is VALUE
        key_value_equals: Option<BTreeMap<String, String>> => "keyValueEquals",
        /// Is true if KEY exists and its value is not VALUE
        key_value_does_not_equal: Option<BTreeMap<String, String>> => "keyValueDoesNotEqual",
        /// Is true if key KEY exists and its value matches VALUE
        key_value_matches: Option<BTreeMap<String, String>> => "keyValueMatches",
        /// Is true if key KEY exists and its value does not match VALUE
        key_value_does_not_match: Option<BTreeMap<String, String>> => "keyValueDoesNotMatch",
        /// Is true if all keys matching KEY have values that match VALUE
        matching_keys_have_matching_values: Option<BTreeMap<String, String>> => "matchingKeysHaveMatchingValues",
        /// Is true if all keys matching KEY have values that do not match VALUE
        matching_keys_do_not_have_matching_values: Option<BTreeMap<String, String>> => "matchingKeysDoNotHaveMatchingValues",
    }
}

crate::tf_object! {
    /// Rules defines the rules in Modify filter.
    pub struct ModifyRule {
        /// Add a key/value pair with key KEY and value VALUE. If KEY already exists, this field is overwritten
        set: Option<BTreeMap<String, String>> => "set",
        /// Add a key/value pair with key KEY and value VALUE if KEY does not exist
        add: Option<BTreeMap<String, String>> => "add",
        /// Remove a key/value pair with key KEY if it exists
        remove: Option<String> => "remove",
        /// Remove all key/value pairs with key matching wildcard KEY
        remove_wildcard: Option<String> => "removeWildcard",
        /// Remove all key/value pairs with key matching regexp KEY
        remove_regex: Option<String> => "removeRegex",
        /// Rename a key/value pair with key KEY to RENAMED_KEY if KEY exists AND RENAMED_KEY does not exist
        rename: Option<BTreeMap<String, String>> => "rename",
        /// Rename a key/value pair with key KEY to RENAMED_KEY if KEY exists.
        /// If RENAMED_KEY already exists, this field is overwritten
        hard_rename: Option<BTreeMap<String, String>> => "hardRename",
        /// Copy a key/value pair with key KEY to COPIED_KEY if KEY exists AND COPIED_KEY does not exist
        copy: Option<BTreeMap<String, String>> => "copy",
        /// Copy a key/value pair with key KEY to COPIED_KEY if KEY exists.
        /// If COPIED_KEY already exists, this field is overwritten
        hard_copy: Option<BTreeMap<String, String>> => "hardCopy",
    }
}

crate::tf_object! {
    /// Modify defines Modify Filter configuration.
    pub struct Modify {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// All conditions have to be true for the rules to be applied.
        conditions: Option<Vec<ModifyCondition>> => "conditions",
        /// Rules are applied in the order they appear, with each rule operating on the result of the previous rule.
        rules: Option<Vec<ModifyRule>> => "rules",
    }
}

crate::tf_object! {
    /// Multiline Filter configuration, concatenates multiline messages.
    pub struct Multiline {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Key name that holds the content to process.
        key_content: Option<String> => "keyContent",
        /// Specify one or multiple parser definitions to apply to the content.
        /// Part of the new Multiline Core support in 1.8
        parser: String => "parser",
        /// Mode can be parser for regex concat, or partial_message to concat split docker logs.
        mode: Option<String> => "mode" [Validator::OneOf { values: &["parser", "partial_message"] }],
        /// Buffered mode concatenates records using a buffer.
        buffer: Option<bool> => "buffer",
        /// Flush timeout in milliseconds for buffered mode.
        flush_ms: Option<i64> => "flushMs" [non_negative()],
        /// Name for the emitter input instance which re-emits the completed records at the beginning of the pipeline.
        emitter_name: Option<String> => "emitterName",
        /// The storage type for the emitter input instance.
        emitter_type: Option<String> => "emitterType" [storage_type()],
        /// Set a limit on the amount of memory in MB the emitter can consume if the outputs provide backpressure.
        emitter_mem_buf_limit: Option<i64> => "emitterMemBufLimit" [non_negative()],
    }
}

crate::tf_object! {
    /// The Nest Filter plugin allows you to operate on or with nested data.
    pub struct Nest {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Select the operation nest or lift
        operation: Option<String> => "operation" [Validator::OneOf { values: &["nest", "lift"] }],
        /// Nest records which field matches the wildcard
        wildcard: Option<Vec<String>> => "wildcard",
        /// Nest records matching the Wildcard under this key
        nest_under: Option<String> => "nestUnder",
        /// Lift records nested under the Nested_under key
        nested_under: Option<String> => "nestedUnder",
        /// Prefix affected keys with this string
        add_prefix: Option<String> => "addPrefix",
        /// Remove prefix from affected keys if it matches this string
        remove_prefix: Option<String> => "removePrefix",
    }
}

crate::tf_object! {
    /// Parser defines Parser Filter configuration.
    pub struct Parser {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Specify field name in record to parse.
        key_name: Option<String> => "keyName",
        /// Specify the parser name to interpret the field.
        /// Multiple Parser entries are allowed (split by comma).
        parser: Option<String> => "parser",
        /// Keep original Key_Name field in the parsed result.
        /// If false, the field will be removed.
        preserve_key: Option<bool> => "preserveKey",
        /// Keep all other original fields in the parsed result.
        /// If false, all other original fields will be removed.
        reserve_data: Option<bool> => "reserveData",
        /// If the key is a escaped string (e.g: stringify JSON), unescape the string before to apply the parser.
        unescape_key: Option<bool> => "unescapeKey",
    }
}

crate::tf_object! {
    /// The Record Modifier Filter plugin allows to append fields or to exclude specific fields.
    pub struct RecordModifier {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Append fields. This parameter needs key and value pair.
        records: Option<Vec<String>> => "records",
        /// If the key is matched, that field is removed.
        remove_keys: Option<Vec<String>> => "removeKeys",
        /// If the key is not matched, that field is removed.
        allowlist_keys: Option<Vec<String>> => "allowlistKeys",
        /// An alias of allowlistKeys for backwards compatibility.
        whitelist_keys: Option<Vec<String>> => "whitelistKeys" [Validator::Deprecated {
            message: "use allowlist_keys instead",
        }],
        /// If set, the plugin appends uuid to each record. The value assigned becomes the key in the map.
        uuid_keys: Option<Vec<String>> => "uuidKeys",
    }
}

crate::tf_object! {
    /// RewriteTag define a rewrite_tag filter, allows to re-emit a record under a new Tag.
    pub struct RewriteTag {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Defines the matching criteria and the format of the Tag for the matching record.
        /// The Rule format have four components: KEY REGEX NEW_TAG KEEP.
        rules: Option<Vec<String>> => "rules",
        /// When the filter emits a record under the new Tag, there is an internal emitter
        /// plugin that takes care of the job. Since this emitter expose metrics as any other
        /// component of the pipeline, you can use this property to configure an optional name for it.
        emitter_name: Option<String> => "emitterName",
        /// Set a limit on the amount of memory the emitter can consume.
        emitter_mem_buf_limit: Option<String> => "emitterMemBufLimit" [size()],
        /// Define a buffering mechanism for the new records created.
        emitter_storage_type: Option<String> => "emitterStorageType" [storage_type()],
    }
}

crate::tf_object! {
    /// Throttle filter allows you to set the average rate of messages per internal,
    /// based on leaky bucket and sliding window algorithm.
    pub struct Throttle {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Rate is the amount of messages for the time.
        rate: Option<i64> => "rate" [non_negative()],
        /// Window is the amount of intervals to calculate average over.
        window: Option<i64> => "window" [non_negative()],
        /// Interval is the time interval expressed in "sleep" format. e.g. 3s, 1.5m, 0.5h, etc.
        interval: Option<String> => "interval" [Validator::RegexMatches {
            pattern: r"^\d+(\.[0-9]{0,2})?(s|m|h|d)?$",
            message: "value must be a duration such as 3s, 1.5m or 0.5h",
        }],
        /// PrintStatus represents whether to print status messages with current rate and the limits to information logs.
        print_status: Option<bool> => "printStatus",
    }
}

crate::tf_object! {
    /// Wasm Filter allows you to modify the incoming records using Wasm technology.
    pub struct Wasm {
        /// Alias for the plugin
        alias: Option<String> => "alias",
        /// RetryLimit describes how many times fluent-bit should retry to send data to a specific output.
        retry_limit: Option<String> => "retryLimit" [retry_limit()],
        /// Path to the built Wasm program that will be used.
        /// This can be a relative path against the main configuration file.
        wasm_path: Option<String> => "wasmPath",
        /// Define event format to interact with Wasm programs: msgpack or json. Default: json
        event_format: Option<String> => "eventFormat" [Validator::OneOf { values: &["json", "msgpack"] }],
        /// Wasm function name that will be triggered to do filtering.
        /// It's assumed that the function is built inside the Wasm program specified above.
        function_name: Option<String> => "functionName",
        /// Specify the whitelist of paths to be able to access paths from WASM programs.
        accessible_paths: Option<Vec<String>> => "accessiblePaths",
        /// Size of the heap size of Wasm execution. Review unit sizes for allowed values.
        wasm_heap_size: Option<String> => "wasmHeapSize" [size()],
        /// Size of the stack size of Wasm execution. Review unit sizes for allowed values.
        wasm_stack_size: Option<String> => "wasmStackSize" [size()],
    }
}

crate::tf_object! {
    /// FilterItem defines the parameters of a single filter plugin.
    pub struct FilterItem {
        /// Aws defines a Aws configuration.
        aws: Option<Aws> => "aws",
        /// Grep defines Grep Filter configuration.
        grep: Option<Grep> => "grep",
        /// Kubernetes defines Kubernetes Filter configuration.
        kubernetes: Option<Kubernetes> => "kubernetes",
        /// Lua defines Lua Filter configuration.
        lua: Option<Lua> => "lua" [Validator::ExactlyOneOf { attributes: &["script", "code"] }],
        /// Modify defines Modify Filter configuration.
        modify: Option<Modify> => "modify",
        /// Multiline defines a Multiline configuration.
        multiline: Option<Multiline> => "multiline",
        /// Nest defines Nest Filter configuration.
        nest: Option<Nest> => "nest",
        /// Parser defines Parser Filter configuration.
        parser: Option<Parser> => "parser",
        /// RecordModifier defines Record Modifier Filter configuration.
        record_modifier: Option<RecordModifier> => "recordModifier",
        /// RewriteTag defines a RewriteTag configuration.
        rewrite_tag: Option<RewriteTag> => "rewriteTag",
        /// Throttle defines a Throttle configuration.
        throttle: Option<Throttle> => "throttle",
        /// Wasm defines a Wasm configuration.
        wasm: Option<Wasm> => "wasm",
    }
}

crate::tf_object! {
    /// FilterSpec defines the desired state of ClusterFilter and Filter
    pub struct FilterSpec {
        /// A pattern to match against the tags of incoming records.
        /// It's case-sensitive and support the star (*) character as a wildcard.
        r#match: Option<String> => "match",
        /// A regular expression to match against the tags of incoming records.
        /// Use this option if you want to use the full regex syntax.
        match_regex: Option<String> => "matchRegex",
        /// Specifies the log level of the filter plugins.
        log_level: Option<String> => "logLevel" [super::common::log_level()],
        /// A set of filter plugins in order.
        filters: Option<Vec<FilterItem>> => "filters",
    }
}
