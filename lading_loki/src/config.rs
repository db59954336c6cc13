//! Configuration for Loki payload generation.

use std::{num::NonZeroU32, ops::Range};

use serde::{Deserialize, Serialize};

use crate::{Encoding, Error, labels::Cardinality};

fn default_tenant_id() -> String {
    String::from("xk6-tenant")
}

fn default_virtual_user() -> u64 {
    1
}

/// Configuration of an [`EntryGenerator`](crate::EntryGenerator) and the
/// encoding of the batches built from its entries.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The seed for random operations
    pub seed: [u8; 32],
    /// The tenant every entry is generated for
    #[serde(default = "default_tenant_id")]
    pub tenant_id: String,
    /// Identifier of the virtual user, rendered into the `instance` label
    #[serde(default = "default_virtual_user")]
    pub virtual_user: u64,
    /// The number of streams, distinct label sets, per generated batch
    pub num_streams: NonZeroU32,
    /// Lower bound, inclusive, of line bytes per generated batch
    pub min_batch_size: byte_unit::Byte,
    /// Upper bound, exclusive, of line bytes per generated batch
    pub max_batch_size: byte_unit::Byte,
    /// The wire encoding of push requests
    #[serde(default)]
    pub encoding: Encoding,
    /// Candidate counts for the open-vocabulary labels
    #[serde(default)]
    pub cardinality: Cardinality,
}

impl Config {
    /// The range target batch sizes are drawn from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a bound does not fit in `usize` or
    /// the minimum is not strictly below the maximum.
    pub fn batch_size(&self) -> Result<Range<usize>, Error> {
        let min = usize::try_from(self.min_batch_size.as_u64()).map_err(|_| {
            Error::Validation(format!(
                "min_batch_size {} is too large",
                self.min_batch_size
            ))
        })?;
        let max = usize::try_from(self.max_batch_size.as_u64()).map_err(|_| {
            Error::Validation(format!(
                "max_batch_size {} is too large",
                self.max_batch_size
            ))
        })?;
        if min >= max {
            return Err(Error::Validation(format!(
                "min_batch_size {min} must be less than max_batch_size {max}"
            )));
        }
        Ok(min..max)
    }

    /// Check the configuration for values generation cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an invalid batch size range and
    /// [`Error::EmptyPool`] for a zero cardinality.
    pub fn validate(&self) -> Result<(), Error> {
        self.batch_size()?;
        for (label, count) in [
            ("app", self.cardinality.app),
            ("namespace", self.cardinality.namespace),
            ("pod", self.cardinality.pod),
        ] {
            if count == 0 {
                return Err(Error::EmptyPool {
                    label: label.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::{Cardinality, Encoding, Error};

    const SEED: &str = "[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109, 113, 127, 131]";

    #[test]
    fn minimal_config_takes_defaults() {
        let contents = format!(
            r#"
seed: {SEED}
num_streams: 4
min_batch_size: "1 KiB"
max_batch_size: "2 KiB"
"#
        );
        let config: Config = serde_yaml::from_str(&contents).expect("failed to parse");
        assert_eq!(config.tenant_id, "xk6-tenant");
        assert_eq!(config.virtual_user, 1);
        assert_eq!(config.num_streams.get(), 4);
        assert_eq!(config.encoding, Encoding::Protobuf);
        assert_eq!(config.cardinality, Cardinality::default());
        assert_eq!(config.batch_size().expect("valid range"), 1024..2048);
        config.validate().expect("config must validate");
    }

    #[test]
    fn full_config_parses() {
        let contents = format!(
            r#"
seed: {SEED}
tenant_id: "team-a"
virtual_user: 9
num_streams: 2
min_batch_size: 1000
max_batch_size: 2000
encoding: json
cardinality:
  app: 2
  namespace: 3
  pod: 4
"#
        );
        let config: Config = serde_yaml::from_str(&contents).expect("failed to parse");
        assert_eq!(config.tenant_id, "team-a");
        assert_eq!(config.encoding, Encoding::Json);
        assert_eq!(
            config.cardinality,
            Cardinality {
                app: 2,
                namespace: 3,
                pod: 4
            }
        );
        assert_eq!(config.batch_size().expect("valid range"), 1000..2000);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let contents = format!(
            r#"
seed: {SEED}
num_streams: 2
min_batch_size: 1000
max_batch_size: 2000
flush_interval: 5
"#
        );
        assert!(serde_yaml::from_str::<Config>(&contents).is_err());
    }

    #[test]
    fn zero_streams_are_rejected() {
        let contents = format!(
            r#"
seed: {SEED}
num_streams: 0
min_batch_size: 1000
max_batch_size: 2000
"#
        );
        assert!(serde_yaml::from_str::<Config>(&contents).is_err());
    }

    #[test]
    fn inverted_batch_size_fails_validation() {
        let contents = format!(
            r#"
seed: {SEED}
num_streams: 2
min_batch_size: 2000
max_batch_size: 2000
"#
        );
        let config: Config = serde_yaml::from_str(&contents).expect("failed to parse");
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn zero_cardinality_fails_validation() {
        let contents = format!(
            r#"
seed: {SEED}
num_streams: 2
min_batch_size: 1000
max_batch_size: 2000
cardinality:
  pod: 0
"#
        );
        let config: Config = serde_yaml::from_str(&contents).expect("failed to parse");
        assert!(matches!(
            config.validate(),
            Err(Error::EmptyPool { label }) if label == "pod"
        ));
    }
}
