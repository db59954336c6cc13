//! Syslog lines, BSD and IETF flavors.

use rand::Rng;
use time::{OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};

use crate::{Error, fake};

struct Member {
    priority: u8,     // 0 - 191
    hostname: String, // name.tld
    app_name: String, // shortish string
    procid: u16,      // 100 - 9999
    msgid: u16,       // 1 - 999
    message: String,  // shortish phrase
}

impl Member {
    fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Member {
            priority: rng.random_range(0..=191),
            hostname: fake::domain(rng),
            app_name: fake::Faker.value(rng, fake::FakeKind::AppName),
            procid: rng.random_range(100..=9999),
            msgid: rng.random_range(1..=999),
            message: fake::bs(rng),
        }
    }
}

pub(super) fn rfc3164<R>(rng: &mut R, at: OffsetDateTime) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let member = Member::sample(rng);
    let time = at.format(format_description!(
        "[month repr:short] [day padding:space] [hour]:[minute]:[second]"
    ))?;
    Ok(format!(
        "<{}>{} {} {}[{}]: {}",
        member.priority, time, member.hostname, member.app_name, member.procid, member.message
    ))
}

pub(super) fn rfc5424<R>(rng: &mut R, at: OffsetDateTime) -> Result<String, Error>
where
    R: Rng + ?Sized,
{
    let member = Member::sample(rng);
    let version: u8 = rng.random_range(1..=3);
    Ok(format!(
        "<{}>{} {} {} {} {} ID{} - {}",
        member.priority,
        version,
        at.format(&Rfc3339)?,
        member.hostname,
        member.app_name,
        member.procid,
        member.msgid,
        member.message
    ))
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::SmallRng};
    use time::macros::datetime;

    #[test]
    fn rfc3164_pads_day_with_space() {
        let mut rng = SmallRng::seed_from_u64(19690716);
        let at = datetime!(2021-02-03 04:05:06 UTC);
        let line = super::rfc3164(&mut rng, at).expect("failed to produce");
        assert!(line.starts_with('<'), "{line}");
        assert!(line.contains(">Feb  3 04:05:06 "), "{line}");
        assert!(line.contains("]: "), "{line}");
    }

    #[test]
    fn rfc5424_carries_rfc3339_timestamp() {
        let mut rng = SmallRng::seed_from_u64(19690716);
        let at = datetime!(2021-02-03 04:05:06.5 UTC);
        let line = super::rfc5424(&mut rng, at).expect("failed to produce");
        assert!(line.contains(" 2021-02-03T04:05:06.5Z "), "{line}");
        assert!(line.contains(" ID"), "{line}");
        assert!(line.contains(" - "), "{line}");
    }
}
