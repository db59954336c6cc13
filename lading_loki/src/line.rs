//! Synthetic log lines.
//!
//! The set of [`Format`] variants is the vocabulary of the `format` label: the
//! label pool draws its candidates from [`Format::ALL`] and the entry
//! generator parses the sampled value back into a `Format` before asking a
//! [`LineProducer`] for a line.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Error;

mod apache;
mod common;
mod json;
mod syslog;

/// Log line formats understood by a [`LineProducer`]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Apache common log format
    ApacheCommon,
    /// Apache combined log format, common plus referer and user agent
    ApacheCombined,
    /// Apache error log
    ApacheError,
    /// BSD syslog
    Rfc3164,
    /// IETF syslog
    Rfc5424,
    /// A JSON object per line
    Json,
}

impl Format {
    /// Every format, in label pool order.
    pub const ALL: [Format; 6] = [
        Format::ApacheCommon,
        Format::ApacheCombined,
        Format::ApacheError,
        Format::Rfc3164,
        Format::Rfc5424,
        Format::Json,
    ];

    /// The label value naming this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::ApacheCommon => "apache_common",
            Format::ApacheCombined => "apache_combined",
            Format::ApacheError => "apache_error",
            Format::Rfc3164 => "rfc3164",
            Format::Rfc5424 => "rfc5424",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Produces one log line of a given format, stamped with a given time.
pub trait LineProducer {
    /// Produce a line of `format` whose embedded timestamp is `at`. The
    /// returned line carries no trailing newline.
    ///
    /// # Errors
    ///
    /// Implementations fail if the line cannot be rendered.
    fn produce<R>(&self, rng: &mut R, format: Format, at: OffsetDateTime) -> Result<String, Error>
    where
        R: Rng + ?Sized;
}

impl<T> LineProducer for &T
where
    T: LineProducer + ?Sized,
{
    fn produce<R>(&self, rng: &mut R, format: Format, at: OffsetDateTime) -> Result<String, Error>
    where
        R: Rng + ?Sized,
    {
        (**self).produce(rng, format, at)
    }
}

/// The default [`LineProducer`], generating lines in the manner of `flog`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flog;

impl LineProducer for Flog {
    fn produce<R>(&self, rng: &mut R, format: Format, at: OffsetDateTime) -> Result<String, Error>
    where
        R: Rng + ?Sized,
    {
        match format {
            Format::ApacheCommon => apache::common(rng, at),
            Format::ApacheCombined => apache::combined(rng, at),
            Format::ApacheError => apache::error(rng, at),
            Format::Rfc3164 => syslog::rfc3164(rng, at),
            Format::Rfc5424 => syslog::rfc5424(rng, at),
            Format::Json => json::line(rng, at),
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use time::OffsetDateTime;

    use super::{Flog, Format, LineProducer};

    #[test]
    fn format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.as_str().parse::<Format>().ok(), Some(format));
            assert_eq!(format.to_string(), format.as_str());
        }
        assert!("logfmt".parse::<Format>().is_err());
    }

    #[test]
    fn serde_names_match_label_values() {
        for format in Format::ALL {
            let json = serde_json::to_string(&format).expect("failed to serialize");
            assert_eq!(json, format!("\"{}\"", format.as_str()));
        }
    }

    // Every format yields a single non-empty line.
    proptest! {
        #[test]
        fn lines_are_single_and_non_empty(seed: u64, secs in 0i64..4_102_444_800) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let at = OffsetDateTime::from_unix_timestamp(secs).expect("in range");
            for format in Format::ALL {
                let line = Flog.produce(&mut rng, format, at).expect("failed to produce");
                prop_assert!(!line.is_empty());
                prop_assert!(!line.contains('\n'), "{format}: {line:?}");
            }
        }
    }
}
