//! Display time zone. Offset and short name are resolved per instant, so
//! records on either side of a daylight-saving change render their own time.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use time::{OffsetDateTime, UtcOffset};

use super::format::zone_label;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayZone {
    /// IANA zone with its DST rules and abbreviations.
    Named(Tz),
    /// Fixed offset, used when the host zone cannot be identified.
    Fixed(UtcOffset),
}

impl DisplayZone {
    /// Parse an IANA name such as `America/New_York`.
    pub fn named(name: &str) -> Option<Self> {
        name.trim().parse::<Tz>().ok().map(Self::Named)
    }

    /// The host's configured zone, if the OS reports one chrono-tz knows.
    pub fn system() -> Option<Self> {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| Self::named(&name))
    }

    /// `at` as wall-clock time in this zone, with the zone's short name.
    pub fn localize(&self, at: OffsetDateTime) -> (OffsetDateTime, String) {
        let tz = match self {
            DisplayZone::Fixed(offset) => return (at.to_offset(*offset), zone_label(*offset)),
            DisplayZone::Named(tz) => tz,
        };

        let Some(utc) = DateTime::<Utc>::from_timestamp(at.unix_timestamp(), at.nanosecond()) else {
            return (at.to_offset(UtcOffset::UTC), zone_label(UtcOffset::UTC));
        };
        let local = utc.with_timezone(tz);
        let offset = UtcOffset::from_whole_seconds(local.offset().fix().local_minus_utc())
            .unwrap_or(UtcOffset::UTC);

        // zones without a letter abbreviation report a numeric one like "+04"
        let abbreviation = local.format("%Z").to_string();
        let name = if abbreviation.is_empty() || abbreviation.starts_with(|c| c == '+' || c == '-') {
            zone_label(offset)
        } else {
            abbreviation
        };

        (at.to_offset(offset), name)
    }
}
