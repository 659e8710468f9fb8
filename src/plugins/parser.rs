// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Parser plugins of `ClusterParser`/`Parser` and the rules of
//! `ClusterMultilineParser`/`MultilineParser`.

use super::common::non_negative;
use crate::schema::Validator;

crate::tf_object! {
    /// The JSON parser is the simplest option: if the original log source is a JSON map string, it will take its structure and convert it directly to the internal binary representation.
    pub struct Json {
        /// Time_Key
        time_key: Option<String> => "timeKey",
        /// Time_Format, eg. %Y-%m-%dT%H:%M:%S %z
        time_format: Option<String> => "timeFormat",
        /// Time_Keep
        time_keep: Option<bool> => "timeKeep",
    }
}

crate::tf_object! {
    /// The regex parser allows to define a custom Ruby Regular Expression that will use a named capture feature to define which content belongs to which key name.
    pub struct Regex {
        /// The regular expression, with named captures.
        regex: Option<String> => "regex",
        /// Time_Key
        time_key: Option<String> => "timeKey",
        /// Time_Format, eg. %Y-%m-%dT%H:%M:%S %z
        time_format: Option<String> => "timeFormat",
        /// Time_Keep
        time_keep: Option<bool> => "timeKeep",
        /// Time_Offset, eg. +0200
        time_offset: Option<String> => "timeOffset" [Validator::RegexMatches {
            pattern: r"^[+-]\d{4}$",
            message: "value must be an offset such as +0200",
        }],
        /// Types, eg. response_size:integer code:string
        types: Option<String> => "types",
    }
}

crate::tf_object! {
    /// The ltsv parser allows to parse LTSV formatted texts.
    pub struct Ltsv {
        /// Time_Key
        time_key: Option<String> => "timeKey",
        /// Time_Format, eg. %Y-%m-%dT%H:%M:%S %z
        time_format: Option<String> => "timeFormat",
        /// Time_Keep
        time_keep: Option<bool> => "timeKeep",
        /// Types, eg. status:integer size:integer
        types: Option<String> => "types",
    }
}

crate::tf_object! {
    /// The logfmt parser allows to parse the logfmt format described in https://brandur.org/logfmt .
    pub struct Logfmt {
        /// Time_Key
        time_key: Option<String> => "timeKey",
        /// Time_Format, eg. %Y-%m-%dT%H:%M:%S %z
        time_format: Option<String> => "timeFormat",
        /// Time_Keep
        time_keep: Option<bool> => "timeKeep",
    }
}

crate::tf_object! {
    /// Decoder applies a decoder to a field after parsing.
    pub struct Decoder {
        /// If the content can be decoded in a structured message,
        /// append that structure message (keys and values) to the original log message.
        decode_field: Option<String> => "decodeField",
        /// Any content decoded (unstructured or structured) will be replaced in the same key/value,
        /// no extra keys are added.
        decode_field_as: Option<String> => "decodeFieldAs",
    }
}

crate::tf_object! {
    /// ParserSpec defines the desired state of ClusterParser and Parser
    pub struct ParserSpec {
        /// JSON defines json parser configuration.
        json: Option<Json> => "json",
        /// Regex defines regex parser configuration.
        regex: Option<Regex> => "regex",
        /// LTSV defines ltsv parser configuration.
        ltsv: Option<Ltsv> => "ltsv",
        /// Logfmt defines logfmt parser configuration.
        logfmt: Option<Logfmt> => "logfmt",
        /// Decoders are a built-in feature available through the Parsers file,
        /// each Parser definition can optionally set one or multiple decoders.
        decoders: Option<Vec<Decoder>> => "decoders",
    }
}

crate::tf_object! {
    /// A single state transition of a multiline parser.
    pub struct MultilineRule {
        /// State name, the first rule must be "start_state".
        start: String => "start",
        /// Regular expression matched against the current line.
        regex: String => "regex",
        /// Name of the next state.
        next: Option<String> => "next",
    }
}

crate::tf_object! {
    /// Multiline parser definition used by the tail input and the multiline filter.
    pub struct MultilineParserSpec {
        /// Set the multiline mode, for now, we support the type regex.
        r#type: Option<String> => "type" [Validator::OneOf { values: &["regex"] }],
        /// Name of a pre-defined parser that must be applied to the incoming content before applying the regex rule.
        parser: Option<String> => "parser",
        /// For an incoming structured message, specify the key that contains the data that should be processed by the regular expression and possibly concatenated.
        key_content: Option<String> => "keyContent",
        /// For a message that has been split, specify the key that holds the pattern.
        key_pattern: Option<String> => "keyPattern",
        /// For a message that has been split, specify the key that groups the fragments.
        key_group: Option<String> => "keyGroup",
        /// Timeout in milliseconds to flush a non-terminated multiline buffer. Default is set to 5 seconds.
        flush_timeout: Option<i64> => "flushTimeout" [non_negative()],
        /// Configure a rule to match a multiline pattern.
        /// The rule has a specific format described below. Multiple rules can be defined.
        rules: Option<Vec<MultilineRule>> => "rules" [Validator::LengthAtLeast { min: 1 }],
    }
}
