//! Observations reported by the entry generator.
//!
//! ## Metrics
//!
//! `loki_client_uncompressed_bytes`: Total bytes of generated log lines
//! `loki_client_lines`: Total generated log lines
//!
//! Both are emitted once per call to
//! [`EntryGenerator::generate`](crate::EntryGenerator::generate) and tagged
//! with the tenant.

use std::time::SystemTime;

use metrics::counter;

/// The kinds of observation emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Bytes of log line text generated, before any encoding
    ClientUncompressedBytes,
    /// Log lines generated
    ClientLines,
}

impl Metric {
    /// The metric name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Metric::ClientUncompressedBytes => "loki_client_uncompressed_bytes",
            Metric::ClientLines => "loki_client_lines",
        }
    }
}

/// A tagged, timestamped observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// What was observed
    pub metric: Metric,
    /// The observed value
    pub value: f64,
    /// When it was observed
    pub time: SystemTime,
    /// Tags, `(key, value)`
    pub tags: Vec<(String, String)>,
}

impl Sample {
    /// Create an untagged sample
    #[must_use]
    pub fn new(metric: Metric, value: f64, time: SystemTime) -> Self {
        Self {
            metric,
            value,
            time,
            tags: Vec::new(),
        }
    }

    /// Add a tag to the sample
    #[must_use]
    pub fn with_tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tags.push((key.into(), value.into()));
        self
    }
}

/// Receiver of generator observations. Implementations must not block.
pub trait Sink {
    /// Accept a group of samples taken at the same moment.
    fn push(&self, samples: &[Sample]);
}

impl<T> Sink for &T
where
    T: Sink + ?Sized,
{
    fn push(&self, samples: &[Sample]) {
        (**self).push(samples);
    }
}

/// A [`Sink`] that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn push(&self, _samples: &[Sample]) {}
}

/// A [`Sink`] forwarding samples to the `metrics` facade as counters.
#[derive(Debug, Default, Clone)]
pub struct MetricsSink {
    labels: Vec<(String, String)>,
}

impl MetricsSink {
    /// Create a sink whose counters carry `labels` in addition to each
    /// sample's own tags.
    #[must_use]
    pub fn new(labels: Vec<(String, String)>) -> Self {
        Self { labels }
    }
}

impl Sink for MetricsSink {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn push(&self, samples: &[Sample]) {
        for sample in samples {
            let mut labels = self.labels.clone();
            labels.extend(sample.tags.iter().cloned());
            counter!(sample.metric.name(), &labels).increment(sample.value as u64);
        }
    }
}
