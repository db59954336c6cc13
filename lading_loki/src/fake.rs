//! Fake values for open-vocabulary labels and log line content.

use rand::{Rng, seq::IndexedRandom};

mod words;

pub use words::{LANGUAGES_SHORT, NOUNS};
pub(crate) use words::{ADJECTIVES, BS_ADJECTIVES, BS_NOUNS, BS_VERBS, TLDS, VERBS};

/// The kind of fake value requested from a [`FakeSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeKind {
    /// Corporate jargon, `"<verb> <adjective> <noun>"`
    Bs,
    /// An application name
    AppName,
}

/// A source of synthetic label values.
pub trait FakeSource {
    /// Draw `n` values of `kind`. Values need not be distinct.
    fn generate<R>(&self, rng: &mut R, kind: FakeKind, n: usize) -> Vec<String>
    where
        R: Rng + ?Sized;
}

/// Word list backed [`FakeSource`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Faker;

impl Faker {
    /// One value of `kind`.
    pub fn value<R>(self, rng: &mut R, kind: FakeKind) -> String
    where
        R: Rng + ?Sized,
    {
        match kind {
            FakeKind::Bs => bs(rng),
            FakeKind::AppName => app_name(rng),
        }
    }
}

impl FakeSource for Faker {
    fn generate<R>(&self, rng: &mut R, kind: FakeKind, n: usize) -> Vec<String>
    where
        R: Rng + ?Sized,
    {
        (0..n).map(|_| self.value(rng, kind)).collect()
    }
}

pub(crate) fn pick<R>(rng: &mut R, words: &[&'static str]) -> &'static str
where
    R: Rng + ?Sized,
{
    words.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn bs<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    format!(
        "{} {} {}",
        pick(rng, BS_VERBS),
        pick(rng, BS_ADJECTIVES),
        pick(rng, BS_NOUNS)
    )
}

fn app_name<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    match rng.random_range(0..3) {
        0 => capitalize(pick(rng, NOUNS)),
        1 => format!(
            "{}{}",
            capitalize(pick(rng, ADJECTIVES)),
            capitalize(pick(rng, NOUNS))
        ),
        _ => format!("{}{}", capitalize(pick(rng, NOUNS)), pick(rng, VERBS)),
    }
}

/// A lower case user name, `<noun><digits>`.
pub(crate) fn username<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    format!("{}{}", pick(rng, NOUNS), rng.random_range(0..10_000))
}

/// A domain name, `<adjective><noun>.<tld>`.
pub(crate) fn domain<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    format!(
        "{}{}.{}",
        pick(rng, ADJECTIVES),
        pick(rng, NOUNS),
        pick(rng, TLDS)
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
