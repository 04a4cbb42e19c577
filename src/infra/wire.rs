//! JSON wire format for shipment pages.
//!
//! Accepts a bare array of records or an envelope with `data`, and
//! timestamps as RFC 3339 strings or epoch milliseconds.

use serde::Deserialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::source::FetchError;
use crate::domain::{ShipmentOffer, Stop, TimeWindow};

#[derive(Debug, Deserialize)]
struct ShipmentDto {
    origin: OriginDto,
    destination: DestinationDto,
    miles: f64,
    offer: f64,
}

#[derive(Debug, Deserialize)]
struct OriginDto {
    state: String,
    city: String,
    pickup: WindowDto,
}

#[derive(Debug, Deserialize)]
struct DestinationDto {
    state: String,
    city: String,
    dropoff: WindowDto,
}

#[derive(Debug, Deserialize)]
struct WindowDto {
    #[serde(deserialize_with = "timestamp_from_json")]
    start: OffsetDateTime,
    #[serde(deserialize_with = "timestamp_from_json")]
    end: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<Vec<ShipmentDto>>,
    #[serde(default)]
    message: Option<String>,
}

impl From<WindowDto> for TimeWindow {
    fn from(dto: WindowDto) -> Self {
        Self {
            start: dto.start,
            end: dto.end,
        }
    }
}

impl From<ShipmentDto> for ShipmentOffer {
    fn from(dto: ShipmentDto) -> Self {
        Self {
            origin: Stop {
                state: dto.origin.state,
                city: dto.origin.city,
                window: dto.origin.pickup.into(),
            },
            destination: Stop {
                state: dto.destination.state,
                city: dto.destination.city,
                window: dto.destination.dropoff.into(),
            },
            miles: dto.miles,
            offer: dto.offer,
        }
    }
}

pub fn parse_page(raw: &[u8]) -> Result<Vec<ShipmentOffer>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(raw)?;

    if value.is_array() {
        let records: Vec<ShipmentDto> = serde_json::from_value(value)?;
        return Ok(records.into_iter().map(ShipmentOffer::from).collect());
    }

    let PageEnvelope {
        status,
        data,
        message,
    } = serde_json::from_value(value)?;

    if let Some(status) = status.filter(|s| !s.eq_ignore_ascii_case("ok")) {
        return Err(FetchError::Api(message.unwrap_or(status)));
    }

    data.map(|records| records.into_iter().map(ShipmentOffer::from).collect())
        .ok_or_else(|| FetchError::Api("response missing data".into()))
}

fn timestamp_from_json<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Timestamp;

    impl<'de> serde::de::Visitor<'de> for Timestamp {
        type Value = OffsetDateTime;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an RFC 3339 string or epoch milliseconds")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            OffsetDateTime::parse(value, &Rfc3339).map_err(E::custom)
        }

        fn visit_i64<E>(self, millis: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
                .map_err(E::custom)
        }

        fn visit_u64<E>(self, millis: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
                .map_err(E::custom)
        }

        fn visit_f64<E>(self, millis: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            self.visit_i64(millis.round() as i64)
        }
    }

    deserializer.deserialize_any(Timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const RECORD: &str = r#"{
        "origin": {
            "state": "IL",
            "city": "Chicago",
            "pickup": { "start": "2026-11-03T08:00:00-06:00", "end": 1793800800000 }
        },
        "destination": {
            "state": "CO",
            "city": "Denver",
            "dropoff": { "start": "2026-11-05T09:00:00-07:00", "end": "2026-11-05T15:00:00-07:00" }
        },
        "miles": 1003,
        "offer": 2450.75
    }"#;

    #[test]
    fn parses_bare_array() {
        let raw = format!("[{RECORD}]");
        let page = parse_page(raw.as_bytes()).expect("valid page");

        assert_eq!(page.len(), 1);
        let load = &page[0];
        assert_eq!(load.origin.city, "Chicago");
        assert_eq!(load.destination.state, "CO");
        assert_eq!(load.miles, 1003.0);
        assert_eq!(load.offer, 2450.75);
        assert_eq!(load.pickup().start, datetime!(2026-11-03 14:00 UTC));
        assert_eq!(load.pickup().end, datetime!(2026-11-04 14:00 UTC));
    }

    #[test]
    fn parses_envelope() {
        let raw = format!(r#"{{ "status": "ok", "data": [{RECORD}, {RECORD}] }}"#);
        let page = parse_page(raw.as_bytes()).expect("valid page");
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn envelope_error_status_surfaces_message() {
        let raw = br#"{ "status": "error", "message": "rate limited" }"#;
        let err = parse_page(raw).expect_err("error status");
        assert!(matches!(err, FetchError::Api(ref msg) if msg == "rate limited"));
    }

    #[test]
    fn bad_timestamp_is_a_decode_error() {
        let raw = RECORD.replace("2026-11-03T08:00:00-06:00", "next tuesday");
        let err = parse_page(format!("[{raw}]").as_bytes()).expect_err("bad date");
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
