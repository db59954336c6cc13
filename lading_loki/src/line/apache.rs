//! Apache access and error log lines.

use rand::{Rng, seq::IndexedRandom};
use time::{OffsetDateTime, macros::format_description};

use super::common::{self as shared, IpV4, Method, Path, Protocol, StatusCode};
use crate::{Error, fake};

const ERROR_MODULES: [&str; 8] = [
    "core",
    "mpm_event",
    "proxy",
    "ssl",
    "rewrite",
    "authz_core",
    "cgi",
    "http2",
];
const ERROR_LEVELS: [&str; 8] = [
    "emerg", "alert", "crit", "error", "warn", "notice", "info", "debug",
];

/// `[day/Mon/year:hour:minute:second zone]`
pub(super) fn common_time(at: OffsetDateTime) -> Result<String, Error> {
    Ok(at.format(format_description!(
        "[day]/[month repr:short]/[year]:[hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
    ))?)
}

pub(super) fn common<R>(rng: &mut R, at: OffsetDateTime) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let host: IpV4 = rng.random();
    let user = fake::username(rng);
    let method: Method = rng.random();
    let path: Path = rng.random();
    let protocol: Protocol = rng.random();
    let status: StatusCode = rng.random();
    let bytes_out: u16 = rng.random();

    Ok(format!(
        "{host} - {user} [{time}] \"{method} {path} {protocol}\" {status} {bytes_out}",
        time = common_time(at)?,
        status = status.0,
    ))
}

pub(super) fn combined<R>(rng: &mut R, at: OffsetDateTime) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let mut line = common(rng, at)?;
    let referer = shared::referer(rng);
    let agent = shared::user_agent(rng);
    line.push_str(&format!(" \"{referer}\" \"{agent}\""));
    Ok(line)
}

pub(super) fn error<R>(rng: &mut R, at: OffsetDateTime) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let time = at.format(format_description!(
        "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [year]"
    ))?;
    let module = ERROR_MODULES.choose(rng).copied().unwrap_or("core");
    let level = ERROR_LEVELS.choose(rng).copied().unwrap_or("error");
    let pid: u16 = rng.random_range(1..=9999);
    let tid: u16 = rng.random_range(1..=9999);
    let client: IpV4 = rng.random();
    let port: u16 = rng.random_range(1024..=65535);
    let message = fake::bs(rng);

    Ok(format!(
        "[{time}] [{module}:{level}] [pid {pid}:tid {tid}] [client {client}:{port}] {message}"
    ))
}
