//! Loki `logproto` push request messages.
//!
//! The messages are declared by hand with `prost` derives and are wire
//! compatible with `logproto.PushRequest` as accepted by Loki's
//! `/loki/api/v1/push` endpoint. The same types serialize to Loki's JSON
//! push format, where each entry carries an RFC 3339 `ts` and a `line`.

use prost::Message;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

/// Top-level message of a push, one per encoded batch.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
pub struct PushRequest {
    #[prost(message, repeated, tag = "1")]
    #[serde(default)]
    pub streams: Vec<Stream>,
}

/// Entries sharing one exact label set.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
pub struct Stream {
    /// Canonical label set, e.g. `{app="foo", os="linux"}`
    #[prost(string, tag = "1")]
    pub labels: String,
    #[prost(message, repeated, tag = "2")]
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Set by the ingester, never by clients. Not part of the JSON form.
    #[prost(uint64, tag = "3")]
    #[serde(skip)]
    pub hash: u64,
}

/// A single timestamped log line.
#[derive(Clone, PartialEq, Message, Serialize, Deserialize)]
pub struct Entry {
    #[prost(message, optional, tag = "1")]
    #[serde(rename = "ts", with = "rfc3339")]
    pub timestamp: Option<Timestamp>,
    #[prost(string, tag = "2")]
    pub line: String,
}

/// `google.protobuf.Timestamp`
#[derive(Clone, Copy, PartialEq, Eq, Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self {
            seconds: dt.unix_timestamp(),
            // nanosecond() is always below 1_000_000_000
            nanos: i32::try_from(dt.nanosecond()).unwrap_or(i32::MAX),
        }
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = Error;

    fn try_from(ts: Timestamp) -> Result<Self, Self::Error> {
        let nanos = i128::from(ts.seconds) * 1_000_000_000 + i128::from(ts.nanos);
        Ok(OffsetDateTime::from_unix_timestamp_nanos(nanos)?)
    }
}

impl PushRequest {
    /// Total number of entries across all streams.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.streams.iter().map(|s| s.entries.len()).sum()
    }
}

/// Decode a snappy block compressed protobuf `PushRequest`.
///
/// # Errors
///
/// Returns an error if `bytes` is not a valid snappy block or the
/// decompressed bytes are not a `PushRequest`.
pub fn decode_snappy(bytes: &[u8]) -> Result<PushRequest, Error> {
    let decompressed = snap::raw::Decoder::new().decompress_vec(bytes)?;
    Ok(PushRequest::decode(decompressed.as_slice())?)
}

/// Decode a JSON `PushRequest`.
///
/// # Errors
///
/// Returns an error if `bytes` is not a JSON push request.
pub fn decode_json(bytes: &[u8]) -> Result<PushRequest, Error> {
    Ok(serde_json::from_slice(bytes)?)
}

mod rfc3339 {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};

    use super::Timestamp;

    #[allow(clippy::ref_option)]
    pub(super) fn serialize<S>(ts: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => {
                let dt = OffsetDateTime::try_from(*ts).map_err(ser::Error::custom)?;
                let formatted = dt.format(&Rfc3339).map_err(ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let dt = OffsetDateTime::parse(&raw, &Rfc3339).map_err(de::Error::custom)?;
        Ok(Some(Timestamp::from(dt)))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use time::OffsetDateTime;

    use super::Timestamp;

    // Conversion to the wire timestamp must not lose nanosecond precision.
    proptest! {
        #[test]
        fn timestamp_preserves_nanos(nanos in 0i128..4_102_444_800_000_000_000i128) {
            let dt = OffsetDateTime::from_unix_timestamp_nanos(nanos).expect("in range");
            let ts = Timestamp::from(dt);
            prop_assert!((0..1_000_000_000).contains(&ts.nanos));
            let back = OffsetDateTime::try_from(ts).expect("must convert back");
            prop_assert_eq!(back, dt);
        }
    }

    #[test]
    fn json_entry_uses_loki_field_names() {
        let entry = super::Entry {
            timestamp: Some(Timestamp {
                seconds: 1_600_000_000,
                nanos: 5,
            }),
            line: String::from("hello"),
        };
        let json = serde_json::to_string(&entry).expect("failed to serialize");
        assert_eq!(
            json,
            r#"{"ts":"2020-09-13T12:26:40.000000005Z","line":"hello"}"#
        );
    }

    #[test]
    fn json_stream_omits_hash() {
        let stream = super::Stream {
            labels: String::from(r#"{os="linux"}"#),
            entries: Vec::new(),
            hash: 42,
        };
        let json = serde_json::to_string(&stream).expect("failed to serialize");
        assert_eq!(json, r#"{"labels":"{os=\"linux\"}","entries":[]}"#);
    }
}
