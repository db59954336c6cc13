//! Label sets and the pools they are sampled from.
//!
//! A [`LabelSet`] identifies a stream. Its canonical rendering is the
//! Prometheus label set form, `{name="value", other="value"}`, with names in
//! ascending order, so that equal label sets always map to the same stream
//! key.

use std::{collections::BTreeMap, fmt};

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    fake::{self, FakeKind, FakeSource},
    line::Format,
};

/// Label naming the line format of a stream.
pub const FORMAT: &str = "format";
/// Label naming the operating system of a stream.
pub const OS: &str = "os";
/// Open-vocabulary namespace label.
pub const NAMESPACE: &str = "namespace";
/// Open-vocabulary application label.
pub const APP: &str = "app";
/// Open-vocabulary pod label.
pub const POD: &str = "pod";
/// Dictionary-backed language label.
pub const LANGUAGE: &str = "language";
/// Dictionary-backed word label.
pub const WORD: &str = "word";
/// Label injected per virtual user, `vu<id>.<hostname>`.
pub const INSTANCE: &str = "instance";

const OPERATING_SYSTEMS: [&str; 3] = ["darwin", "linux", "windows"];

/// A concrete name to value assignment identifying one stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
    /// Create an empty label set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the previous value if any.
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(name.into(), value.into())
    }

    /// Value of label `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of labels in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the set holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The canonical stream key of this label set.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, value)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}=")?;
            write_quoted(f, value)?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for LabelSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Quote `value` the way Go's `strconv.Quote` does for the characters a
/// label value can hold: named escapes where Go has one, `\xNN` for other
/// ASCII controls, `\uNNNN` for the remaining control characters.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\u{07}' => f.write_str("\\a")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0c}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0b}' => f.write_str("\\v")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Requested number of candidate values for the open-vocabulary labels.
///
/// The `language` and `word` labels always use their full dictionaries and
/// are not configurable here.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Cardinality {
    /// Candidates for the `app` label
    pub app: u32,
    /// Candidates for the `namespace` label
    pub namespace: u32,
    /// Candidates for the `pod` label
    pub pod: u32,
}

impl Default for Cardinality {
    fn default() -> Self {
        Self {
            app: 5,
            namespace: 10,
            pod: 100,
        }
    }
}

/// Uniformly choose a value from `values`, with replacement. `None` if
/// `values` is empty.
pub fn choice<'a, R>(rng: &mut R, values: &'a [String]) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    values.choose(rng).map(String::as_str)
}

/// The universe of candidate values each label name may draw from.
///
/// Every candidate list is non-empty. The pool is never mutated after
/// construction and may be shared between producers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPool {
    values: BTreeMap<String, Vec<String>>,
}

impl LabelPool {
    /// Build the default label vocabulary.
    ///
    /// `format` and `os` are fixed, `namespace`, `app` and `pod` receive
    /// exactly the requested number of values from `faker`, `language` and
    /// `word` take their whole dictionary regardless of `cardinality`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPool`] if any requested cardinality is zero.
    pub fn new<R, F>(rng: &mut R, faker: &F, cardinality: Cardinality) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
        F: FakeSource,
    {
        let formats: Vec<String> = Format::ALL.iter().map(|f| f.as_str().to_string()).collect();
        let os: Vec<String> = OPERATING_SYSTEMS.iter().map(ToString::to_string).collect();
        let namespace = faker.generate(rng, FakeKind::Bs, cardinality.namespace as usize);
        let app = faker.generate(rng, FakeKind::AppName, cardinality.app as usize);
        let pod = faker.generate(rng, FakeKind::Bs, cardinality.pod as usize);
        let language: Vec<String> = fake::LANGUAGES_SHORT
            .iter()
            .map(ToString::to_string)
            .collect();
        let word: Vec<String> = fake::NOUNS.iter().map(ToString::to_string).collect();

        Self::from_values([
            (FORMAT, formats),
            (OS, os),
            (NAMESPACE, namespace),
            (APP, app),
            (POD, pod),
            (LANGUAGE, language),
            (WORD, word),
        ])
    }

    /// Build a pool from explicit candidate lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPool`] if any candidate list is empty.
    pub fn from_values<I, K>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (label, candidates) in values {
            let label = label.into();
            if candidates.is_empty() {
                return Err(Error::EmptyPool { label });
            }
            map.insert(label, candidates);
        }
        Ok(Self { values: map })
    }

    /// Candidates for `label`, if the pool knows it.
    #[must_use]
    pub fn values(&self, label: &str) -> Option<&[String]> {
        self.values.get(label).map(Vec::as_slice)
    }

    /// Label names in the pool, in ascending order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of label names in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the pool has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample one value per label name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPool`] if a candidate list is empty, which
    /// construction rules out.
    pub fn label_set<R>(&self, rng: &mut R) -> Result<LabelSet, Error>
    where
        R: Rng + ?Sized,
    {
        let mut labels = LabelSet::new();
        for (name, candidates) in &self.values {
            let value = choice(rng, candidates).ok_or_else(|| Error::EmptyPool {
                label: name.clone(),
            })?;
            labels.insert(name.as_str(), value);
        }
        Ok(labels)
    }
}
