//! JSON object lines.

use rand::Rng;
use time::OffsetDateTime;

use super::{
    apache,
    common::{self, IpV4, Method, Path, Protocol, StatusCode},
};
use crate::{Error, fake};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub(crate) struct Member {
    pub(crate) host: String,
    #[serde(rename = "user-identifier")]
    pub(crate) user_identifier: String,
    pub(crate) datetime: String,
    pub(crate) method: String,
    pub(crate) request: String,
    pub(crate) protocol: String,
    pub(crate) status: u16,
    pub(crate) bytes: u16,
    pub(crate) referer: String,
}

pub(super) fn line<R>(rng: &mut R, at: OffsetDateTime) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let host: IpV4 = rng.random();
    let method: Method = rng.random();
    let path: Path = rng.random();
    let protocol: Protocol = rng.random();
    let status: StatusCode = rng.random();

    let member = Member {
        host: host.to_string(),
        user_identifier: fake::username(rng),
        datetime: apache::common_time(at)?,
        method: method.to_string(),
        request: path.to_string(),
        protocol: protocol.to_string(),
        status: status.0,
        bytes: rng.random(),
        referer: common::referer(rng),
    };
    Ok(serde_json::to_string(&member)?)
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::SmallRng};
    use time::macros::datetime;

    use super::Member;

    #[test]
    fn line_is_a_json_object() {
        let mut rng = SmallRng::seed_from_u64(19690716);
        let at = datetime!(2021-02-03 04:05:06 UTC);
        let line = super::line(&mut rng, at).expect("failed to produce");
        let member: Member = serde_json::from_str(&line).expect("line must be json");
        assert_eq!(member.datetime, "03/Feb/2021:04:05:06 +0000");
        assert!(member.request.starts_with('/'));
        assert!(line.contains("\"user-identifier\""));
    }
}
