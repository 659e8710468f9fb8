// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Output plugins of `ClusterOutput` and `Output`.

use super::common::{log_level, on_off, port, retry_limit, size, Secret};
use crate::schema::Validator;
use std::collections::BTreeMap;

fn json_format() -> Validator {
    Validator::OneOf {
        values: &["msgpack", "json", "json_lines", "json_stream"],
    }
}

fn json_date_format() -> Validator {
    Validator::OneOf {
        values: &["double", "iso8601", "epoch", "java_sql_timestamp"],
    }
}

crate::tf_object! {
    /// Fluent Bit TLS settings for an output.
    pub struct Tls {
        /// Absolute path to CA certificate file
        ca_file: Option<String> => "caFile",
        /// Absolute path to scan for certificate files
        ca_path: Option<String> => "caPath",
        /// Absolute path to Certificate file
        crt_file: Option<String> => "crtFile",
        /// Absolute path to private Key file
        key_file: Option<String> => "keyFile",
        /// Optional password for tls.key_file file
        key_password: Option<Secret> => "keyPassword",
        /// Set TLS debug verbosity level. It accept the following values: 0 (No debug), 1 (Error), 2 (State change), 3 (Informational) and 4 Verbose
        debug: Option<i64> => "debug" [Validator::Int64Between { min: 0, max: 4 }],
        /// Force certificate validation
        verify: Option<bool> => "verify",
        /// Hostname to be used for TLS SNI extension
        vhost: Option<String> => "vhost",
    }
}

crate::tf_object! {
    /// The stdout output plugin allows to print to the standard output the data received through the input plugin.
    pub struct Stdout {
        /// Specify the data format to be printed. Supported formats are msgpack json, json_lines and json_stream.
        format: Option<String> => "format" [json_format()],
        /// Specify the name of the date field in output.
        json_date_key: Option<String> => "jsonDateKey",
        /// Specify the format of the date. Supported formats are double, iso8601 (eg: 2018-05-30T09:39:52.000681Z) and epoch.
        json_date_format: Option<String> => "jsonDateFormat" [json_date_format()],
    }
}

crate::tf_object! {
    /// Forward is the protocol used by Fluentd to route messages between peers.
    pub struct Forward {
        /// Target host where Fluent-Bit or Fluentd are listening for Forward messages.
        host: Option<String> => "host",
        /// TCP Port of the target service.
        port: Option<i64> => "port" [port()],
        /// Set timestamps in integer format, it enable compatibility mode for Fluentd v0.12 series.
        time_as_integer: Option<bool> => "timeAsInteger",
        /// Always send options (with "size"=count of messages)
        send_options: Option<bool> => "sendOptions",
        /// Send "chunk"-option and wait for "ack" response from server.
        /// Enables at-least-once and receiving server can control rate of traffic.
        require_ack_response: Option<bool> => "requireAckResponse",
        /// A key string known by the remote Fluentd used for authorization.
        shared_key: Option<String> => "sharedKey",
        /// Use this option to connect to Fluentd with a zero-length secret.
        empty_shared_key: Option<bool> => "emptySharedKey",
        /// Specify the username to present to a Fluentd server that enables user_auth.
        username: Option<Secret> => "username",
        /// Specify the password corresponding to the username.
        password: Option<Secret> => "password",
        /// Default value of the auto-generated certificate common name (CN).
        self_hostname: Option<String> => "selfHostname",
        /// Overwrite the tag as we transmit. This allows the receiving pipeline start fresh, or to attribute source.
        tag: Option<String> => "tag",
        /// Fluent Bit TLS settings.
        tls: Option<Tls> => "tls",
    }
}

crate::tf_object! {
    /// HTTP output plugin allows to flush your records into a HTTP endpoint.
    pub struct Http {
        /// IP address or hostname of the target HTTP Server
        host: Option<String> => "host",
        /// Basic Auth Username
        http_user: Option<Secret> => "httpUser",
        /// Basic Auth Password. Requires HTTP_User to be set
        http_password: Option<Secret> => "httpPassword",
        /// Specify an HTTP Proxy. The expected format of this value is http://host:port.
        proxy: Option<String> => "proxy",
        /// Specify an optional HTTP URI for the target web server, e.g: /something
        uri: Option<String> => "uri",
        /// Set payload compression mechanism. Option available is 'gzip'
        compress: Option<String> => "compress" [Validator::OneOf { values: &["gzip"] }],
        /// Specify the data format to be used in the HTTP request body, by default it uses msgpack.
        /// Other supported formats are json, json_stream and json_lines and gelf.
        format: Option<String> => "format" [Validator::OneOf {
            values: &["msgpack", "json", "json_stream", "json_lines", "gelf"],
        }],
        /// Specify an optional HTTP header field for the original message tag.
        header_tag: Option<String> => "headerTag",
        /// Add a HTTP header key/value pair. Multiple headers can be set.
        headers: Option<BTreeMap<String, String>> => "headers",
        /// Specify the name of the time key in the output record.
        json_date_key: Option<String> => "jsonDateKey",
        /// Specify the format of the date.
        json_date_format: Option<String> => "jsonDateFormat" [json_date_format()],
        /// TCP port of the target HTTP Server
        port: Option<i64> => "port" [port()],
        /// Fluent Bit TLS settings.
        tls: Option<Tls> => "tls",
    }
}

crate::tf_object! {
    /// The loki output plugin, allows to ingest your records into a Loki service.
    pub struct Loki {
        /// Loki hostname or IP address.
        host: String => "host",
        /// Loki TCP port
        port: Option<i64> => "port" [port()],
        /// Specify a custom HTTP URI. It must start with forward slash.
        uri: Option<String> => "uri" [Validator::RegexMatches {
            pattern: r"^/",
            message: "value must start with a forward slash",
        }],
        /// Set HTTP basic authentication user name.
        http_user: Option<Secret> => "httpUser",
        /// Password for user defined in HTTP_User
        /// Set HTTP basic authentication password
        http_password: Option<Secret> => "httpPassword",
        /// Set bearer token authentication token value.
        bearer_token: Option<Secret> => "bearerToken",
        /// Tenant ID used by default to push logs to Loki.
        /// If omitted or empty it assumes Loki is running in single-tenant mode and no X-Scope-OrgID header is sent.
        tenant_id: Option<Secret> => "tenantID",
        /// Stream labels for API request. It can be multiple comma separated of strings specifying key=value pairs.
        labels: Option<Vec<String>> => "labels",
        /// Optional list of record keys that will be placed as stream labels.
        label_keys: Option<Vec<String>> => "labelKeys",
        /// Optional list of keys to remove.
        remove_keys: Option<Vec<String>> => "removeKeys",
        /// If set to true and after extracting labels only a single key remains, the log line sent to Loki will be the value of that key in line_format.
        drop_single_key: Option<String> => "dropSingleKey" [Validator::OneOf { values: &["on", "off", "raw"] }],
        /// Format to use when flattening the record to a log line. Valid values are json or key_value.
        line_format: Option<String> => "lineFormat" [Validator::OneOf { values: &["json", "key_value"] }],
        /// If set to true, it will add all Kubernetes labels to the Stream labels.
        auto_kubernetes_labels: Option<String> => "autoKubernetesLabels" [on_off()],
        /// Specify the name of the key from the original record that contains the Tenant ID.
        tenant_id_key: Option<String> => "tenantIDKey",
        /// Fluent Bit TLS settings.
        tls: Option<Tls> => "tls",
    }
}

crate::tf_object! {
    /// Elasticsearch is the es output plugin, allows to ingest your records into an Elasticsearch database.
    pub struct Elasticsearch {
        /// IP address or hostname of the target Elasticsearch instance
        host: Option<String> => "host",
        /// TCP port of the target Elasticsearch instance
        port: Option<i64> => "port" [port()],
        /// Elasticsearch accepts new data on HTTP query path "/_bulk".
        /// But it is also possible to serve Elasticsearch behind a reverse proxy on a subpath.
        path: Option<String> => "path",
        /// Set payload compression mechanism. Option available is 'gzip'
        compress: Option<String> => "compress" [Validator::OneOf { values: &["gzip"] }],
        /// Specify the buffer size used to read the response from the Elasticsearch HTTP service.
        buffer_size: Option<String> => "bufferSize" [Validator::RegexMatches {
            pattern: r"^(\d+(k|K|KB|kb|m|M|MB|mb|g|G|GB|gb)?|False)$",
            message: "value must be a size such as 512KB, or False for unlimited",
        }],
        /// Newer versions of Elasticsearch allows setting up filters called pipelines.
        pipeline: Option<String> => "pipeline",
        /// If you are using Elastic's Elasticsearch Service you can specify the cloud_id of the cluster running.
        cloud_id: Option<String> => "cloudID",
        /// Specify the credentials to use to connect to Elastic's Elasticsearch Service running on Elastic Cloud.
        cloud_auth: Option<Secret> => "cloudAuth",
        /// Optional username credential for Elastic X-Pack access
        http_user: Option<Secret> => "httpUser",
        /// Password for user defined in HTTP_User
        http_password: Option<Secret> => "httpPassword",
        /// Index name
        index: Option<String> => "index",
        /// Type name
        r#type: Option<String> => "type",
        /// Enable Logstash format compatibility.
        logstash_format: Option<bool> => "logstashFormat",
        /// When Logstash_Format is enabled, the Index name is composed using a prefix and the date.
        logstash_prefix: Option<String> => "logstashPrefix",
        /// Time format (based on strftime) to generate the second part of the Index name.
        logstash_date_format: Option<String> => "logstashDateFormat",
        /// When Logstash_Format is enabled, each record will get a new timestamp field.
        time_key: Option<String> => "timeKey",
        /// When Logstash_Format is enabled, enabling this property sends nanosecond precision timestamps.
        time_key_nanos: Option<bool> => "timeKeyNanos",
        /// When enabled, replace field name dots with underscore, required by Elasticsearch 2.0-2.3.
        replace_dots: Option<bool> => "replaceDots",
        /// When enabled, generate _id for outgoing records.
        generate_id: Option<bool> => "generateID",
        /// When enabled print the elasticsearch API calls to stdout when elasticsearch returns an error
        trace_error: Option<bool> => "traceError",
        /// Use current time for index generation instead of message record
        current_time_index: Option<bool> => "currentTimeIndex",
        /// When enabled, mapping types is removed and Type option is ignored. Types are deprecated in APIs in v7.0.
        suppress_type_name: Option<String> => "suppressTypeName" [Validator::OneOf { values: &["On", "Off"] }],
        /// Fluent Bit TLS settings.
        tls: Option<Tls> => "tls",
    }
}

crate::tf_object! {
    /// Kafka output plugin allows to ingest your records into an Apache Kafka service.
    pub struct Kafka {
        /// Specify data format, options available: json, msgpack.
        format: Option<String> => "format" [Validator::OneOf { values: &["json", "msgpack", "gelf"] }],
        /// Optional key to store the message
        message_key: Option<String> => "messageKey",
        /// If set, the value of Message_Key_Field in the record will indicate the message key.
        message_key_field: Option<String> => "messageKeyField",
        /// Set the key to store the record timestamp
        timestamp_key: Option<String> => "timestampKey",
        /// Set the format of the record timestamp.
        timestamp_format: Option<String> => "timestampFormat" [Validator::OneOf { values: &["iso8601", "double"] }],
        /// Single or multiple list of Kafka Brokers, e.g: 192.168.1.3:9092, 192.168.1.4:9092.
        brokers: Option<String> => "brokers",
        /// Single entry or list of topics separated by comma (,) that Fluent Bit will use to send messages to Kafka.
        topics: Option<String> => "topics",
        /// If set, the record field value for this key will be used as the topic name.
        topic_key: Option<String> => "topicKey",
        /// Kafka producer properties such as request.required.acks.
        rdkafka: Option<BTreeMap<String, String>> => "rdkafka",
        /// Adds unknown topics (found in Topic_Key) to Topics.
        dynamic_topic: Option<bool> => "dynamicTopic",
        /// Fluent Bit queues data into rdkafka library, if for some reason the underlying library cannot flush the records the queue might fills up blocking new addition of records.
        queue_full_retries: Option<i64> => "queueFullRetries" [super::common::non_negative()],
    }
}

crate::tf_object! {
    /// The null output plugin just throws away events.
    pub struct Null {}
}

crate::tf_object! {
    /// OutputSpec defines the desired state of ClusterOutput and Output
    pub struct OutputSpec {
        /// A pattern to match against the tags of incoming records.
        /// It's case sensitive and support the star (*) character as a wildcard.
        r#match: Option<String> => "match",
        /// A regular expression to match against the tags of incoming records.
        /// Use this option if you want to use the full regex syntax.
        match_regex: Option<String> => "matchRegex",
        /// A user friendly alias name for this output plugin.
        /// Used in metrics for distinction of each configured output.
        alias: Option<String> => "alias",
        /// Set the plugin's logging verbosity level.
        log_level: Option<String> => "logLevel" [log_level()],
        /// RetryLimit represents configuration for the scheduler which can be set independently on each output section.
        /// This option allows to disable retries or impose a limit to try N times and then discard the data after reaching that limit.
        retry_limit: Option<String> => "retry_limit" [retry_limit()],
        /// Limit the maximum number of Chunks in the filesystem for the current output logical destination.
        total_limit_size: Option<String> => "totalLimitSize" [size()],
        /// Stdout defines Stdout Output configuration.
        stdout: Option<Stdout> => "stdout",
        /// Forward defines Forward Output configuration.
        forward: Option<Forward> => "forward",
        /// HTTP defines HTTP Output configuration.
        http: Option<Http> => "http",
        /// Loki defines Loki Output configuration.
        loki: Option<Loki> => "loki",
        /// Elasticsearch defines Elasticsearch Output configuration.
        es: Option<Elasticsearch> => "es",
        /// Kafka defines Kafka Output configuration.
        kafka: Option<Kafka> => "kafka",
        /// Null defines Null Output configuration.
        null: Option<Null> => "null",
    }
}
