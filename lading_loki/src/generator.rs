//! Label-tagged log entry generation.
//!
//! An [`EntryGenerator`] fabricates one batch worth of entries per call to
//! [`EntryGenerator::generate`]. A target batch size is drawn uniformly from
//! the configured range and split evenly between `num_streams` streams, each
//! with its own label set sampled from the [`LabelPool`]. Lines are added to a
//! stream until its byte budget is met, so the last line of a stream may
//! overshoot the budget. Lines are never truncated.

use std::{num::NonZeroU32, ops::Range, time::SystemTime};

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::{
    Config, Error, Faker,
    labels::{self, LabelPool, LabelSet},
    line::{Format, LineProducer},
    sink::{Metric, Sample, Sink},
};

const FALLBACK_HOSTNAME: &str = "localhost";

/// A single log line bound for one tenant and one stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// When the line was produced
    pub timestamp: OffsetDateTime,
    /// The log line, without trailing newline
    pub line: String,
    /// The tenant the line belongs to
    pub tenant_id: String,
    /// The labels identifying the line's stream
    pub labels: LabelSet,
}

/// Generator of label-tagged log entries.
#[derive(Debug)]
pub struct EntryGenerator<P, S> {
    pool: LabelPool,
    producer: P,
    sink: S,
    num_streams: NonZeroU32,
    batch_size: Range<usize>,
    instance: String,
}

impl<P, S> EntryGenerator<P, S>
where
    P: LineProducer,
    S: Sink,
{
    /// Create a new [`EntryGenerator`].
    ///
    /// The `instance` label of every entry is `vu<virtual_user>.<hostname>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `batch_size` is empty, that is if the
    /// minimum batch size is not strictly below the maximum.
    pub fn new(
        pool: LabelPool,
        producer: P,
        sink: S,
        virtual_user: u64,
        num_streams: NonZeroU32,
        batch_size: Range<usize>,
    ) -> Result<Self, Error> {
        if batch_size.is_empty() {
            return Err(Error::Validation(format!(
                "minimum batch size {min} must be less than maximum batch size {max}",
                min = batch_size.start,
                max = batch_size.end
            )));
        }

        Ok(Self {
            pool,
            producer,
            sink,
            num_streams,
            batch_size,
            instance: format!("vu{virtual_user}.{}", hostname()),
        })
    }

    /// Create a new [`EntryGenerator`] from `config`, building the default
    /// label pool with [`Faker`].
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate or the label pool cannot
    /// be built.
    pub fn from_config<R>(config: &Config, rng: &mut R, producer: P, sink: S) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        let batch_size = config.batch_size()?;
        let pool = LabelPool::new(rng, &Faker, config.cardinality)?;
        Self::new(
            pool,
            producer,
            sink,
            config.virtual_user,
            config.num_streams,
            batch_size,
        )
    }

    /// Override the `instance` label value.
    #[must_use]
    pub fn with_instance<T>(mut self, instance: T) -> Self
    where
        T: Into<String>,
    {
        self.instance = instance.into();
        self
    }

    /// The `instance` label value attached to every stream.
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// The pool label sets are drawn from.
    #[must_use]
    pub fn pool(&self) -> &LabelPool {
        &self.pool
    }

    /// Generate one batch worth of entries for `tenant_id`.
    ///
    /// Entries are returned stream by stream, in production order. Reports
    /// the total line bytes and line count to the sink once, on completion.
    ///
    /// # Errors
    ///
    /// Returns an error if a sampled label set has no usable `format` label or
    /// the line producer fails.
    pub fn generate<R>(&self, rng: &mut R, tenant_id: &str) -> Result<Vec<Entry>, Error>
    where
        R: Rng + ?Sized,
    {
        let num_streams = self.num_streams.get() as usize;
        let target = rng.random_range(self.batch_size.clone());
        // remainder is dropped, streams slightly under-generate
        let max_size_per_stream = target / num_streams;

        let mut entries = Vec::new();
        let mut batch_bytes = 0;
        let mut lines: usize = 0;

        for _ in 0..num_streams {
            let mut label_set = self.pool.label_set(rng)?;
            label_set.insert(labels::INSTANCE, self.instance.as_str());
            let format: Format = label_set
                .get(labels::FORMAT)
                .ok_or(Error::MissingLabel(labels::FORMAT))?
                .parse()?;

            let mut stream_bytes = 0;
            while stream_bytes < max_size_per_stream {
                let now = OffsetDateTime::now_utc();
                let line = self.producer.produce(rng, format, now)?;
                if line.is_empty() {
                    return Err(Error::EmptyLine(format));
                }
                stream_bytes += line.len();
                lines += 1;
                entries.push(Entry {
                    timestamp: now,
                    line,
                    tenant_id: tenant_id.to_string(),
                    labels: label_set.clone(),
                });
            }
            batch_bytes += stream_bytes;
        }

        debug!(
            tenant_id,
            num_streams, target, batch_bytes, lines, "generated entries"
        );

        let now = SystemTime::now();
        self.sink.push(&[
            Sample::new(Metric::ClientUncompressedBytes, batch_bytes as f64, now)
                .with_tag("tenant", tenant_id),
            Sample::new(Metric::ClientLines, lines as f64, now).with_tag("tenant", tenant_id),
        ]);

        Ok(entries)
    }
}

/// The local hostname, or `localhost` if it cannot be determined.
pub(crate) fn hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => match name.into_string() {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => {
                warn!("hostname is empty, using {FALLBACK_HOSTNAME}");
                FALLBACK_HOSTNAME.to_string()
            }
            Err(name) => {
                warn!("hostname {name:?} is not valid UTF-8, using {FALLBACK_HOSTNAME}");
                FALLBACK_HOSTNAME.to_string()
            }
        },
        Err(err) => {
            warn!("failed to look up hostname, using {FALLBACK_HOSTNAME}: {err}");
            FALLBACK_HOSTNAME.to_string()
        }
    }
}
