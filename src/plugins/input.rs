// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Input plugins of `ClusterInput`.

use super::common::{log_level, non_negative, on_off, port, size, storage_type};
use crate::schema::Validator;

fn db_sync() -> Validator {
    Validator::OneOf {
        values: &["Extra", "Full", "Normal", "Off"],
    }
}

crate::tf_object! {
    /// The dummy input plugin, generates dummy events.
    pub struct Dummy {
        /// Tag name associated to all records comming from this plugin.
        tag: Option<String> => "tag",
        /// Dummy JSON record.
        dummy: Option<String> => "dummy",
        /// Events number generated per second.
        rate: Option<i64> => "rate" [non_negative()],
        /// Sample events to generate.
        samples: Option<i64> => "samples" [non_negative()],
    }
}

crate::tf_object! {
    /// The Tail input plugin allows to monitor one or several text files.
    pub struct Tail {
        /// Set the initial buffer size to read files data.
        buffer_chunk_size: Option<String> => "bufferChunkSize" [size()],
        /// Set the limit of the buffer size per monitored file.
        buffer_max_size: Option<String> => "bufferMaxSize" [size()],
        /// Pattern specifying a specific log files or multiple ones through the use of common wildcards.
        path: Option<String> => "path",
        /// If enabled, it appends the name of the monitored file as part of the record.
        path_key: Option<String> => "pathKey",
        /// Set one or multiple shell patterns separated by commas to exclude files matching a certain criteria.
        exclude_path: Option<String> => "excludePath",
        /// For new discovered files on start (without a database offset/position),
        /// read the content from the head of the file, not tail.
        read_from_head: Option<bool> => "readFromHead",
        /// The interval of refreshing the list of watched files in seconds.
        refresh_interval_seconds: Option<i64> => "refreshIntervalSeconds" [non_negative()],
        /// Specify the number of extra time in seconds to monitor a file once is rotated in case some pending data is flushed.
        rotate_wait_seconds: Option<i64> => "rotateWaitSeconds" [non_negative()],
        /// Ignores records which are older than this time in seconds.
        ignore_older: Option<String> => "ignoreOlder" [Validator::RegexMatches {
            pattern: r"^\d+(m|h|d)?$",
            message: "value must be a duration such as 30m, 6h or 2d",
        }],
        /// When a monitored file reach it buffer capacity due to a very long line (Buffer_Max_Size),
        /// the default behavior is to stop monitoring that file.
        /// Skip_Long_Lines alter that behavior and instruct Fluent Bit to skip long lines
        /// and continue processing other lines that fits into the buffer size.
        skip_long_lines: Option<bool> => "skipLongLines",
        /// Specify the database file to keep track of monitored files and offsets.
        db: Option<String> => "db",
        /// Set a default synchronization (I/O) method. Values: Extra, Full, Normal, Off.
        db_sync: Option<String> => "dbSync" [db_sync()],
        /// Specify that the database will be accessed only by Fluent Bit.
        db_locking: Option<bool> => "dbLocking",
        /// Set a limit of memory that Tail plugin can use when appending data to the Engine.
        mem_buf_limit: Option<String> => "memBufLimit" [size()],
        /// Specify the name of a parser to interpret the entry as a structured message.
        parser: Option<String> => "parser",
        /// When a message is unstructured (no parser applied), it's appended as a string under the key name log.
        /// This option allows to define an alternative name for that key.
        key: Option<String> => "key",
        /// Set a tag (with regex-extract fields) that will be placed on lines read.
        tag: Option<String> => "tag",
        /// Set a regex to extract fields from the file.
        tag_regex: Option<String> => "tagRegex",
        /// If enabled, the plugin will try to discover multiline messages and use the proper parsers to compose the outgoing messages.
        multiline: Option<bool> => "multiline",
        /// Wait period time in seconds to process queued multiline messages.
        multiline_flush_seconds: Option<i64> => "multilineFlushSeconds" [non_negative()],
        /// Name of the parser that matchs the beginning of a multiline message.
        parser_firstline: Option<String> => "parserFirstline",
        /// Optional-extra parser to interpret and structure multiline entries.
        parser_n: Option<Vec<String>> => "parserN",
        /// If enabled, the plugin will recombine split Docker log lines before passing them to any parser as configured above.
        docker_mode: Option<bool> => "dockerMode",
        /// Wait period time in seconds to flush queued unfinished split lines.
        docker_mode_flush_seconds: Option<i64> => "dockerModeFlushSeconds" [non_negative()],
        /// Specify an optional parser for the first line of the docker multiline mode.
        docker_mode_parser: Option<String> => "dockerModeParser",
        /// DisableInotifyWatcher will disable inotify and use the file stat watcher instead.
        disable_inotify_watcher: Option<bool> => "disableInotifyWatcher",
        /// This will help to reassembly multiline messages originally split by Docker or CRI.
        /// Specify one or Multiline Parser definition to apply to the content.
        multiline_parser: Option<String> => "multilineParser",
        /// Specify the buffering mechanism to use. It can be memory or filesystem
        storage_type: Option<String> => "storageType" [storage_type()],
        /// Specifies if the input plugin should be paused (stop ingesting new data) when the storage.max_chunks_up value is reached.
        pause_on_chunks_overlimit: Option<String> => "pauseOnChunksOverlimit" [on_off()],
        /// Skips empty lines in the log file from any further processing or output.
        skip_empty_lines: Option<bool> => "skipEmptyLines",
    }
}

crate::tf_object! {
    /// The Systemd input plugin allows to collect log messages from the Journald daemon on Linux environments.
    pub struct Systemd {
        /// The tag is used to route messages but on Systemd plugin there is an extra functionality:
        /// if the tag includes a star/wildcard, it will be expanded with the Systemd Unit file.
        tag: Option<String> => "tag",
        /// Optional path to the Systemd journal directory,
        /// if not set, the plugin will use default paths to read local-only logs.
        path: Option<String> => "path",
        /// Specify the database file to keep track of monitored files and offsets.
        db: Option<String> => "db",
        /// Set a default synchronization (I/O) method. values: Extra, Full, Normal, Off.
        db_sync: Option<String> => "dbSync" [db_sync()],
        /// Allows to perform a query over logs that contains a specific Journald key/value pairs, e.g: _SYSTEMD_UNIT=UNIT.
        systemd_filter: Option<Vec<String>> => "systemdFilter",
        /// Define the filter type when Systemd_Filter is specified multiple times. Allowed values are And and Or.
        systemd_filter_type: Option<String> => "systemdFilterType" [Validator::OneOf { values: &["And", "Or"] }],
        /// Set a maximum number of fields (keys) allowed per record.
        max_fields: Option<i64> => "maxFields" [non_negative()],
        /// When Fluent Bit starts, the Journal might have a high number of logs in the queue.
        /// In order to avoid delays and reduce memory usage, this option allows to specify the maximum number of log entries that can be processed per round.
        max_entries: Option<i64> => "maxEntries" [non_negative()],
        /// Start reading new entries. Skip entries already stored in Journald.
        read_from_tail: Option<String> => "readFromTail" [on_off()],
        /// Remove the leading underscore of the Journald field (key).
        strip_underscores: Option<String> => "stripUnderscores" [on_off()],
        /// Specify the buffering mechanism to use. It can be memory or filesystem
        storage_type: Option<String> => "storageType" [storage_type()],
        /// Specifies if the input plugin should be paused (stop ingesting new data) when the storage.max_chunks_up value is reached.
        pause_on_chunks_overlimit: Option<String> => "pauseOnChunksOverlimit" [on_off()],
    }
}

crate::tf_object! {
    /// Forward defines the in_forward Input plugin that listens to TCP socket to receive the event stream.
    pub struct Forward {
        /// Port for forward plugin instance.
        port: Option<i64> => "port" [port()],
        /// Listener network interface.
        listen: Option<String> => "listen",
        /// in_forward uses the tag value for incoming logs. If not set it uses tag from incoming log.
        tag: Option<String> => "tag",
        /// Adds the prefix to incoming event's tag
        tag_prefix: Option<String> => "tagPrefix",
        /// Specify the path to unix socket to receive a forward message. If set, Listen and port are ignnored.
        unix_path: Option<String> => "unixPath",
        /// Set the permission of unix socket file.
        unix_perm: Option<String> => "unixPerm",
        /// Specify maximum buffer memory size used to recieve a forward message.
        buffer_max_size: Option<String> => "bufferMaxSize" [size()],
        /// Set the initial buffer size to store incoming data.
        buffer_chunk_size: Option<String> => "bufferChunkSize" [size()],
        /// Threaded mechanism allows input plugin to run in a separate thread which helps to desaturate the main pipeline.
        threaded: Option<String> => "threaded",
    }
}

crate::tf_object! {
    /// The HTTP input plugin allows you to send custom records to an HTTP endpoint.
    pub struct Http {
        /// The address to listen on, default 0.0.0.0
        listen: Option<String> => "listen",
        /// The port for Fluent Bit to listen on, default 9880
        port: Option<i64> => "port" [port()],
        /// Specify the key name to overwrite a tag. If set, the tag will be overwritten by a value of the key.
        tag_key: Option<String> => "tagKey",
        /// Specify the maximum buffer size in KB to receive a JSON message, default 4M.
        buffer_max_size: Option<String> => "bufferMaxSize" [size()],
        /// This sets the chunk size for incoming incoming JSON messages.
        buffer_chunk_size: Option<String> => "bufferChunkSize" [size()],
        /// It allows to set successful response code. 200, 201 and 204 are supported, default 201.
        successful_response_code: Option<i64> => "successfulResponseCode" [Validator::Int64Between { min: 200, max: 204 }],
        /// Add an HTTP header key/value pair on success. Multiple headers can be set. Example: X-Custom custom-answer
        success_header: Option<String> => "successHeader",
    }
}

crate::tf_object! {
    /// The tcp input plugin allows to retrieve structured JSON or raw messages over a TCP network interface.
    pub struct Tcp {
        /// Listener network interface, default: 0.0.0.0
        listen: Option<String> => "listen",
        /// TCP port where listening for connections, default: 5170
        port: Option<i64> => "port" [port()],
        /// Specify the maximum buffer size in KB to receive a JSON message. If not set, the default size will be the value of Chunk_Size.
        buffer_size: Option<String> => "bufferSize" [size()],
        /// By default the buffer to store the incoming JSON messages, do not allocate the maximum memory allowed,
        /// instead it allocate memory when is required.
        chunk_size: Option<String> => "chunkSize" [size()],
        /// Specify the expected payload format. It support the options json and none.
        format: Option<String> => "format" [Validator::OneOf { values: &["json", "none"] }],
        /// When the expected Format is set to none, Fluent Bit needs a separator string to split the records. By default it uses the breakline character (LF or 0x10).
        separator: Option<String> => "separator",
    }
}

crate::tf_object! {
    /// Syslog input plugins allows to collect Syslog messages through a Unix socket server (UDP or TCP) or over the network using TCP or UDP.
    pub struct Syslog {
        /// Defines transport protocol mode: unix_udp (UDP over Unix socket), unix_tcp (TCP over Unix socket), tcp or udp
        mode: Option<String> => "mode" [Validator::OneOf { values: &["unix_udp", "unix_tcp", "tcp", "udp"] }],
        /// If Mode is set to tcp or udp, specify the network interface to bind, default: 0.0.0.0
        listen: Option<String> => "listen",
        /// If Mode is set to tcp or udp, specify the TCP port to listen for incoming connections.
        port: Option<i64> => "port" [port()],
        /// If Mode is set to unix_tcp or unix_udp, set the absolute path to the Unix socket file.
        path: Option<String> => "path",
        /// If Mode is set to unix_tcp or unix_udp, set the permission of the Unix socket file, default: 0644
        unix_perm: Option<i64> => "unixPerm" [non_negative()],
        /// Specify an alternative parser for the message. If Mode is set to tcp or udp then the default parser is syslog-rfc5424 otherwise syslog-rfc3164-local is used.
        parser: Option<String> => "parser",
        /// By default the buffer to store the incoming Syslog messages, do not allocate the maximum memory allowed, instead it allocate memory when is required.
        buffer_chunk_size: Option<String> => "bufferChunkSize" [size()],
        /// Specify the maximum buffer size to receive a Syslog message. If not set, the default size will be the value of Buffer_Chunk_Size.
        buffer_max_size: Option<String> => "bufferMaxSize" [size()],
        /// Specify the maximum socket receive buffer size. If not set, the default value is OS-dependant.
        receive_buffer_size: Option<String> => "receiveBufferSize" [size()],
    }
}

crate::tf_object! {
    /// Fluent Bit 1.9 includes additional metrics features to allow you to collect both logs and metrics with the same collector.
    /// The initial release of the Prometheus Scrape metric allows you to collect metrics from a Prometheus-based endpoint at a set interval.
    pub struct PrometheusScrapeMetrics {
        /// Tag name associated to all records comming from this plugin
        tag: Option<String> => "tag",
        /// The host of the prometheus metric endpoint that you want to scrape
        host: Option<String> => "host",
        /// The port of the promethes metric endpoint that you want to scrape
        port: Option<i64> => "port" [port()],
        /// The interval to scrape metrics, default: 10s
        scrape_interval: Option<String> => "scrapeInterval",
        /// The metrics URI endpoint, that must start with a forward slash, deflaut: /metrics
        metrics_path: Option<String> => "metricsPath" [Validator::RegexMatches {
            pattern: r"^/",
            message: "value must start with a forward slash",
        }],
    }
}

crate::tf_object! {
    /// Fluent Bit exposes its own metrics to allow you to monitor the internals of your pipeline.
    pub struct FluentBitMetrics {
        /// Tag name associated to all records comming from this plugin.
        tag: Option<String> => "tag",
        /// The rate at which metrics are collected from the host operating system. default is 2 seconds.
        scrape_interval: Option<String> => "scrapeInterval",
        /// Scrape metrics upon start, useful to avoid waiting for 'scrape_interval' for the first round of metrics.
        scrape_on_start: Option<bool> => "scrapeOnStart",
    }
}

crate::tf_object! {
    /// Provides access to the procfs and sysfs mount points.
    pub struct NodeExporterPath {
        /// The mount point used to collect process information and metrics.
        procfs: Option<String> => "procfs",
        /// The path in the filesystem used to collect system metrics.
        sysfs: Option<String> => "sysfs",
    }
}

crate::tf_object! {
    /// A plugin based on Prometheus Node Exporter to collect system / host level metrics.
    pub struct NodeExporterMetrics {
        /// Tag name associated to all records comming from this plugin.
        tag: Option<String> => "tag",
        /// The rate at which metrics are collected from the host operating system, default is 5 seconds.
        scrape_interval: Option<String> => "scrapeInterval",
        /// Provides access to the procfs and sysfs mount points.
        path: Option<NodeExporterPath> => "path",
    }
}

crate::tf_object! {
    /// InputSpec defines the desired state of ClusterInput
    pub struct InputSpec {
        /// A user friendly alias name for this input plugin.
        /// Used in metrics for distinction of each configured input.
        alias: Option<String> => "alias",
        /// Specifies the log level of the input plugin.
        log_level: Option<String> => "logLevel" [log_level()],
        /// Dummy defines Dummy Input configuration.
        dummy: Option<Dummy> => "dummy",
        /// Tail defines Tail Input configuration.
        tail: Option<Tail> => "tail",
        /// Systemd defines Systemd Input configuration.
        systemd: Option<Systemd> => "systemd",
        /// Forward defines forward input plugin configuration
        forward: Option<Forward> => "forward",
        /// HTTP defines HTTP input plugin configuration
        http: Option<Http> => "http",
        /// TCP defines the TCP input plugin configuration
        tcp: Option<Tcp> => "tcp",
        /// Syslog defines the Syslog input plugin configuration
        syslog: Option<Syslog> => "syslog",
        /// PrometheusScrapeMetrics  defines Prometheus Scrape Metrics Input configuration.
        prometheus_scrape_metrics: Option<PrometheusScrapeMetrics> => "prometheusScrapeMetrics",
        /// FluentBitMetrics defines Fluent Bit Metrics Input configuration.
        fluent_bit_metrics: Option<FluentBitMetrics> => "fluentBitMetrics",
        /// NodeExporterMetrics defines Node Exporter Metrics Input configuration.
        node_exporter_metrics: Option<NodeExporterMetrics> => "nodeExporterMetrics",
    }
}
