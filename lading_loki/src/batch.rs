//! Accumulation of entries into per-stream groups and their encoding as Loki
//! push requests.
//!
//! A [`Batch`] keys streams by the canonical form of their label set, so two
//! entries whose label sets are equal land in the same stream regardless of
//! the order labels were inserted. The byte size of a batch counts log line
//! text only; label strings, timestamps and framing are not included.
//!
//! Entries are appended to their stream in arrival order. Loki rejects
//! out-of-order timestamps within a stream and the batch does not check for
//! this, so callers must add entries in non-decreasing timestamp order per
//! stream.

use std::time::{Duration, Instant};

use bytes::Bytes;
use prost::Message;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error,
    generator::Entry,
    proto::{self, PushRequest, Timestamp},
};

/// Wire encoding of a push request.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Protobuf `logproto.PushRequest`, snappy block compressed
    #[default]
    Protobuf,
    /// Loki JSON push format, uncompressed
    Json,
}

impl Encoding {
    /// The `Content-Type` header value for this encoding
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Encoding::Protobuf => "application/x-protobuf",
            Encoding::Json => "application/json",
        }
    }

    /// The `Content-Encoding` header value for this encoding, if any
    #[must_use]
    pub const fn content_encoding(self) -> Option<&'static str> {
        match self {
            Encoding::Protobuf => Some("snappy"),
            Encoding::Json => None,
        }
    }
}

/// An encoded push request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The request body
    pub bytes: Bytes,
    /// Number of entries carried in `bytes`
    pub entries: usize,
    /// How `bytes` is encoded
    pub encoding: Encoding,
}

impl Encoded {
    /// See [`Encoding::content_type`]
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.encoding.content_type()
    }

    /// See [`Encoding::content_encoding`]
    #[must_use]
    pub const fn content_encoding(&self) -> Option<&'static str> {
        self.encoding.content_encoding()
    }
}

/// A group of streams awaiting a push.
#[derive(Debug, Clone)]
pub struct Batch {
    streams: FxHashMap<String, proto::Stream>,
    bytes: usize,
    created_at: Instant,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            streams: FxHashMap::default(),
            bytes: 0,
            created_at: Instant::now(),
        }
    }

    /// Create a batch holding `entries`, added in iteration order.
    #[must_use]
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut batch = Self::new();
        for entry in entries {
            batch.add(entry);
        }
        batch
    }

    /// Append `entry` to the stream for its label set, creating the stream
    /// if this is the first entry with that label set.
    pub fn add(&mut self, entry: Entry) {
        self.bytes += entry.line.len();
        let key = entry.labels.canonical();
        let wire = proto::Entry {
            timestamp: Some(Timestamp::from(entry.timestamp)),
            line: entry.line,
        };
        match self.streams.get_mut(&key) {
            Some(stream) => stream.entries.push(wire),
            None => {
                let stream = proto::Stream {
                    labels: key.clone(),
                    entries: vec![wire],
                    hash: 0,
                };
                self.streams.insert(key, stream);
            }
        }
    }

    /// Sum of line lengths, in bytes, of every entry added so far.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes
    }

    /// What [`Batch::size_bytes`] would be after adding `entry`. Does not
    /// modify the batch.
    #[must_use]
    pub fn size_bytes_after(&self, entry: &Entry) -> usize {
        self.bytes + entry.line.len()
    }

    /// Time elapsed since the batch was created.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Number of distinct label sets in the batch.
    #[must_use]
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Number of entries in the batch.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.streams.values().map(|s| s.entries.len()).sum()
    }

    /// Whether no entry has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// The streams of the batch, in no particular order.
    pub fn streams(&self) -> impl Iterator<Item = &proto::Stream> {
        self.streams.values()
    }

    /// Build the push request for this batch, with streams ordered by their
    /// canonical label set, and the number of entries it carries.
    #[must_use]
    pub fn push_request(&self) -> (PushRequest, usize) {
        let mut streams: Vec<proto::Stream> = self.streams.values().cloned().collect();
        streams.sort_unstable_by(|a, b| a.labels.cmp(&b.labels));
        let entries = streams.iter().map(|s| s.entries.len()).sum();
        (PushRequest { streams }, entries)
    }

    /// Encode the batch as a snappy compressed protobuf push request.
    ///
    /// # Errors
    ///
    /// Returns an error if protobuf encoding or compression fails.
    pub fn encode_snappy(&self) -> Result<Encoded, Error> {
        let (request, entries) = self.push_request();
        let mut buf = Vec::with_capacity(request.encoded_len());
        request.encode(&mut buf)?;
        let compressed = snap::raw::Encoder::new().compress_vec(&buf)?;
        debug!(
            streams = request.streams.len(),
            entries,
            uncompressed = buf.len(),
            compressed = compressed.len(),
            "encoded protobuf push request"
        );
        Ok(Encoded {
            bytes: Bytes::from(compressed),
            entries,
            encoding: Encoding::Protobuf,
        })
    }

    /// Encode the batch as a JSON push request.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be rendered as RFC 3339.
    pub fn encode_json(&self) -> Result<Encoded, Error> {
        let (request, entries) = self.push_request();
        let body = serde_json::to_vec(&request)?;
        debug!(
            streams = request.streams.len(),
            entries,
            bytes = body.len(),
            "encoded json push request"
        );
        Ok(Encoded {
            bytes: Bytes::from(body),
            entries,
            encoding: Encoding::Json,
        })
    }

    /// Encode the batch with `encoding`.
    ///
    /// # Errors
    ///
    /// See [`Batch::encode_snappy`] and [`Batch::encode_json`].
    pub fn encode(&self, encoding: Encoding) -> Result<Encoded, Error> {
        match encoding {
            Encoding::Protobuf => self.encode_snappy(),
            Encoding::Json => self.encode_json(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashSet, time::Duration};

    use proptest::prelude::*;
    use time::{OffsetDateTime, macros::datetime};

    use super::{Batch, Encoding};
    use crate::{Entry, LabelSet, proto};

    fn entry(labels: &[(&str, &str)], line: &str, at: OffsetDateTime) -> Entry {
        Entry {
            timestamp: at,
            line: line.to_string(),
            tenant_id: "tenant".to_string(),
            labels: labels.iter().copied().collect(),
        }
    }

    prop_compose! {
        fn arb_entry()(
            os in 0usize..3,
            app in 0usize..4,
            line in "[ -~]{0,64}",
            nanos in 1_500_000_000_000_000_000i128..1_600_000_000_000_000_000i128,
        ) -> Entry {
            let os = ["darwin", "linux", "windows"][os];
            let app = ["alpha", "beta", "gamma", "delta"][app];
            let at = OffsetDateTime::from_unix_timestamp_nanos(nanos).expect("in range");
            entry(&[("os", os), ("app", app)], &line, at)
        }
    }

    // The byte size of a batch is the sum of the line lengths added to it,
    // and there are never more streams than adds.
    proptest! {
        #[test]
        fn size_is_sum_of_line_lengths(entries in prop::collection::vec(arb_entry(), 0..64)) {
            let expected: usize = entries.iter().map(|e| e.line.len()).sum();
            let distinct: HashSet<String> = entries.iter().map(|e| e.labels.canonical()).collect();
            let adds = entries.len();

            let batch = Batch::with_entries(entries);
            prop_assert_eq!(batch.size_bytes(), expected);
            prop_assert_eq!(batch.entry_count(), adds);
            prop_assert_eq!(batch.stream_count(), distinct.len());
            prop_assert!(batch.stream_count() <= adds);
        }
    }

    // Entries with equal label sets share a stream and keep their add order.
    proptest! {
        #[test]
        fn streams_keep_arrival_order(entries in prop::collection::vec(arb_entry(), 1..64)) {
            let batch = Batch::with_entries(entries.clone());
            for stream in batch.streams() {
                let expected: Vec<&str> = entries
                    .iter()
                    .filter(|e| e.labels.canonical() == stream.labels)
                    .map(|e| e.line.as_str())
                    .collect();
                let actual: Vec<&str> = stream.entries.iter().map(|e| e.line.as_str()).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }

    // Snappy and JSON encodings decode to the same request, carrying every
    // entry that was added.
    proptest! {
        #[test]
        fn encodings_agree(entries in prop::collection::vec(arb_entry(), 0..32)) {
            let adds = entries.len();
            let batch = Batch::with_entries(entries);

            let snappy = batch.encode_snappy().expect("failed to encode snappy");
            let json = batch.encode_json().expect("failed to encode json");
            prop_assert_eq!(snappy.entries, adds);
            prop_assert_eq!(json.entries, adds);

            let from_snappy = proto::decode_snappy(&snappy.bytes).expect("failed to decode snappy");
            let from_json = proto::decode_json(&json.bytes).expect("failed to decode json");
            prop_assert_eq!(from_snappy.entry_count(), adds);
            prop_assert_eq!(&from_snappy, &from_json);
            prop_assert_eq!(from_snappy, batch.push_request().0);
        }
    }

    #[test]
    fn label_insertion_order_does_not_split_streams() {
        let at = datetime!(2021-02-03 04:05:06 UTC);
        let mut batch = Batch::new();
        batch.add(entry(&[("os", "linux"), ("app", "a")], "one", at));
        batch.add(entry(&[("app", "a"), ("os", "linux")], "two", at));
        assert_eq!(batch.stream_count(), 1);
        assert_eq!(batch.entry_count(), 2);
    }

    #[test]
    fn size_bytes_after_does_not_modify() {
        let at = datetime!(2021-02-03 04:05:06 UTC);
        let mut batch = Batch::new();
        batch.add(entry(&[("os", "linux")], "abc", at));
        let next = entry(&[("os", "darwin")], "defgh", at);

        assert_eq!(batch.size_bytes_after(&next), 8);
        assert_eq!(batch.size_bytes_after(&next), 8);
        assert_eq!(batch.size_bytes(), 3);
        assert_eq!(batch.stream_count(), 1);
        assert_eq!(batch.entry_count(), 1);
    }

    #[test]
    fn push_request_orders_streams_by_labels() {
        let at = datetime!(2021-02-03 04:05:06 UTC);
        let batch = Batch::with_entries([
            entry(&[("os", "windows")], "w", at),
            entry(&[("os", "darwin")], "d", at),
            entry(&[("os", "linux")], "l", at),
        ]);
        let (request, entries) = batch.push_request();
        assert_eq!(entries, 3);
        let labels: Vec<&str> = request.streams.iter().map(|s| s.labels.as_str()).collect();
        assert_eq!(
            labels,
            vec![r#"{os="darwin"}"#, r#"{os="linux"}"#, r#"{os="windows"}"#]
        );
        assert!(request.streams.iter().all(|s| s.hash == 0));
    }

    #[test]
    fn empty_batch_encodes_no_streams() {
        let batch = Batch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.size_bytes(), 0);

        let snappy = batch.encode(Encoding::Protobuf).expect("failed to encode");
        assert_eq!(snappy.entries, 0);
        let request = proto::decode_snappy(&snappy.bytes).expect("failed to decode");
        assert!(request.streams.is_empty());

        let json = batch.encode(Encoding::Json).expect("failed to encode");
        assert_eq!(&json.bytes[..], br#"{"streams":[]}"#);
    }

    #[test]
    fn json_body_matches_loki_push_format() {
        let at = datetime!(2020-09-13 12:26:40.000000005 UTC);
        let batch = Batch::with_entries([entry(&[("os", "linux"), ("app", "web")], "hello", at)]);
        let json = batch.encode_json().expect("failed to encode");
        assert_eq!(json.content_type(), "application/json");
        assert_eq!(json.content_encoding(), None);
        assert_eq!(
            std::str::from_utf8(&json.bytes).expect("json is utf-8"),
            r#"{"streams":[{"labels":"{app=\"web\", os=\"linux\"}","entries":[{"ts":"2020-09-13T12:26:40.000000005Z","line":"hello"}]}]}"#
        );
    }

    #[test]
    fn age_grows_monotonically() {
        let batch = Batch::new();
        let first = batch.age();
        std::thread::sleep(Duration::from_millis(10));
        let second = batch.age();
        assert!(second >= first);
        assert!(second >= Duration::from_millis(10), "{second:?}");
    }

    #[test]
    fn protobuf_headers() {
        let encoded = Batch::new().encode_snappy().expect("failed to encode");
        assert_eq!(encoded.content_type(), "application/x-protobuf");
        assert_eq!(encoded.content_encoding(), Some("snappy"));
    }

    #[test]
    fn labels_round_trip_through_canonical_form() {
        let labels: LabelSet = [("b", "2"), ("a", "1")].into_iter().collect();
        let at = datetime!(2021-02-03 04:05:06 UTC);
        let batch = Batch::with_entries([Entry {
            timestamp: at,
            line: "x".to_string(),
            tenant_id: "tenant".to_string(),
            labels: labels.clone(),
        }]);
        let stream = batch.streams().next().expect("one stream");
        assert_eq!(stream.labels, labels.canonical());
        assert_eq!(stream.labels, r#"{a="1", b="2"}"#);
    }
}
