//! The lading Loki payloads
//!
//! This library fabricates label-tagged log entries, groups them into
//! per-label-set streams and encodes the result as Loki push requests, either
//! protobuf compressed with snappy or JSON.

#![deny(clippy::cargo)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::multiple_crate_versions)]

pub use batch::{Batch, Encoded, Encoding};
pub use config::Config;
pub use fake::{FakeKind, FakeSource, Faker};
pub use generator::{Entry, EntryGenerator};
pub use labels::{Cardinality, LabelPool, LabelSet};
pub use line::{Flog, Format, LineProducer};
pub use sink::{Metric, MetricsSink, NoopSink, Sample, Sink};

pub mod batch;
pub mod config;
pub mod fake;
pub mod generator;
pub mod labels;
pub mod line;
pub mod proto;
pub mod sink;

/// Errors produced while generating or encoding Loki payloads
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A label would be sampled from an empty list of candidates
    #[error("Label {label} has no candidate values")]
    EmptyPool {
        /// The label name with no candidates
        label: String,
    },
    /// A label required for generation is absent from the label set
    #[error("Label set is missing required label {0}")]
    MissingLabel(&'static str),
    /// The `format` label names a format the line producer does not know
    #[error("Unknown line format: {0}")]
    UnknownFormat(String),
    /// The line producer returned a line that cannot advance a byte budget
    #[error("Line producer returned an empty line for format {0}")]
    EmptyLine(line::Format),
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
    /// See [`time::error::Format`]
    #[error("Timestamp could not be formatted: {0}")]
    TimeFormat(#[from] time::error::Format),
    /// See [`time::error::Parse`]
    #[error("Timestamp could not be parsed: {0}")]
    TimeParse(#[from] time::error::Parse),
    /// A wire timestamp is outside the representable range
    #[error("Timestamp out of range: {0}")]
    TimeRange(#[from] time::error::ComponentRange),
    /// See [`prost::EncodeError`]
    #[error(transparent)]
    ProstEncode(#[from] prost::EncodeError),
    /// See [`prost::DecodeError`]
    #[error(transparent)]
    ProstDecode(#[from] prost::DecodeError),
    /// See [`snap::Error`]
    #[error("Snappy compression failed: {0}")]
    Snappy(#[from] snap::Error),
    /// Json payload could not be encoded or decoded
    #[error("Json payload could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}
