//! Pieces shared by the HTTP flavored line formats.

use core::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution, seq::IndexedRandom};

use crate::fake::{self, NOUNS, VERBS};

const STATUS_CODES: [u16; 24] = [
    200, 200, 200, 200, 201, 204, 206, 301, 302, 304, 400, 401, 403, 404, 404, 405, 408, 409,
    429, 500, 501, 502, 503, 504,
];

const USER_AGENTS: [&str; 8] = [
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
    "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
    "curl/8.7.1",
    "Wget/1.21.4",
    "Go-http-client/1.1",
];

#[derive(Debug, Clone, Copy)]
pub(super) struct StatusCode(pub(super) u16);

impl Distribution<StatusCode> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> StatusCode
    where
        R: Rng + ?Sized,
    {
        StatusCode(STATUS_CODES.choose(rng).copied().unwrap_or(200))
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) enum Protocol {
    Http10,
    Http11,
    Http20,
}

impl Distribution<Protocol> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> Protocol
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..3) {
            0 => Protocol::Http10,
            1 => Protocol::Http11,
            _ => Protocol::Http20,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Protocol::Http10 => "HTTP/1.0",
            Protocol::Http11 => "HTTP/1.1",
            Protocol::Http20 => "HTTP/2.0",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) enum Method {
    Get,
    Head,
    Put,
    Post,
    Delete,
    Patch,
}

impl Distribution<Method> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> Method
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..6) {
            0 => Method::Get,
            1 => Method::Head,
            2 => Method::Put,
            3 => Method::Post,
            4 => Method::Delete,
            _ => Method::Patch,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        };
        f.write_str(s)
    }
}

/// Request path of one to four components.
#[derive(Debug)]
pub(super) struct Path {
    components: Vec<&'static str>,
}

impl Distribution<Path> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> Path
    where
        R: Rng + ?Sized,
    {
        let total_components: usize = rng.random_range(1..=4);
        let components = (0..total_components)
            .map(|idx| {
                if idx % 2 == 0 {
                    fake::pick(rng, NOUNS)
                } else {
                    fake::pick(rng, VERBS)
                }
            })
            .collect();
        Path { components }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "/{component}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct IpV4([u8; 4]);

impl Distribution<IpV4> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> IpV4
    where
        R: Rng + ?Sized,
    {
        IpV4(rng.random())
    }
}

impl fmt::Display for IpV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

pub(super) fn user_agent<R>(rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    USER_AGENTS.choose(rng).copied().unwrap_or("curl/8.7.1")
}

/// A referer URL, `https://www.<domain><path>`.
pub(super) fn referer<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let path: Path = rng.random();
    format!("https://www.{}{path}", fake::domain(rng))
}
