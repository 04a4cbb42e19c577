//! Per-card derived metrics and display strings.

use time::OffsetDateTime;

use super::format::{days_between, format_money, format_short_date, format_time_range};
use super::shipment::{ShipmentOffer, TimeWindow};
use super::zone::DisplayZone;

/// Expanded/collapsed state of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub expanded: bool,
}

impl DisplayState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            "See Less"
        } else {
            "See More"
        }
    }
}

/// Metrics shown in the expanded section of a card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardMetrics {
    pub days_until_pickup: i64,
    /// Pickup through dropoff, counting both endpoint days. Never below 1.
    pub total_days: i64,
    pub miles_per_day: i64,
    pub dollars_per_day: String,
    pub dollars_per_mile: String,
}

impl CardMetrics {
    pub fn compute(offer: &ShipmentOffer, now: OffsetDateTime) -> Self {
        let pickup_start = offer.pickup().start;
        let dropoff_start = offer.dropoff().start;

        let days_until_pickup = days_between(now, pickup_start);
        // dropoff before pickup would yield zero or negative rates
        let total_days = (days_between(pickup_start, dropoff_start) + 1).max(1);
        let days = total_days as f64;

        let dollars_per_mile = if offer.miles > 0.0 {
            format_money(offer.offer / offer.miles)
        } else {
            "n/a".to_string()
        };

        Self {
            days_until_pickup,
            total_days,
            miles_per_day: (offer.miles / days).floor() as i64,
            dollars_per_day: format_money(offer.offer / days),
            dollars_per_mile,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StopSummary {
    pub state: String,
    pub city: String,
    pub day: String,
    pub time_range: String,
}

impl StopSummary {
    fn new(state: &str, city: &str, window: &TimeWindow, zone: DisplayZone) -> Self {
        let (start, zone_name) = zone.localize(window.start);
        let (end, _) = zone.localize(window.end);
        Self {
            state: state.to_string(),
            city: city.to_string(),
            day: format_short_date(start),
            time_range: format_time_range(start, end, &zone_name),
        }
    }
}

/// Everything a card renders, already formatted for the display zone.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSummary {
    pub pickup: StopSummary,
    pub dropoff: StopSummary,
    pub distance: String,
    pub offer: String,
    pub metrics: CardMetrics,
}

impl CardSummary {
    pub fn build(offer: &ShipmentOffer, zone: DisplayZone, now: OffsetDateTime) -> Self {
        let origin = &offer.origin;
        let destination = &offer.destination;
        Self {
            pickup: StopSummary::new(&origin.state, &origin.city, &origin.window, zone),
            dropoff: StopSummary::new(
                &destination.state,
                &destination.city,
                &destination.window,
                zone,
            ),
            distance: format!("{} Miles", format_miles(offer.miles)),
            offer: format_money(offer.offer),
            metrics: CardMetrics::compute(offer, now),
        }
    }
}

fn format_miles(miles: f64) -> String {
    if miles.fract() == 0.0 {
        format!("{miles:.0}")
    } else {
        format!("{miles}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shipment::Stop;
    use time::macros::{datetime, offset};
    use time::Duration;

    fn offer(miles: f64, payout: f64, pickup: OffsetDateTime, dropoff: OffsetDateTime) -> ShipmentOffer {
        ShipmentOffer {
            origin: Stop {
                state: "TX".into(),
                city: "Dallas".into(),
                window: TimeWindow {
                    start: pickup,
                    end: pickup + Duration::hours(4),
                },
            },
            destination: Stop {
                state: "GA".into(),
                city: "Atlanta".into(),
                window: TimeWindow {
                    start: dropoff,
                    end: dropoff + Duration::hours(2),
                },
            },
            miles,
            offer: payout,
        }
    }

    #[test]
    fn metrics_for_five_day_haul() {
        let pickup = datetime!(2026-11-02 08:00 UTC);
        let load = offer(500.0, 1000.0, pickup, pickup + Duration::days(4));
        let metrics = CardMetrics::compute(&load, pickup - Duration::days(3));

        assert_eq!(metrics.total_days, 5);
        assert_eq!(metrics.miles_per_day, 100);
        assert_eq!(metrics.dollars_per_day, "$200.00");
        assert_eq!(metrics.dollars_per_mile, "$2.00");
        assert_eq!(metrics.days_until_pickup, 3);
    }

    #[test]
    fn same_day_delivery_counts_one_day() {
        let pickup = datetime!(2026-11-02 08:00 UTC);
        let load = offer(333.0, 1000.0, pickup, pickup);
        let metrics = CardMetrics::compute(&load, pickup);

        assert_eq!(metrics.total_days, 1);
        assert_eq!(metrics.miles_per_day, 333);
        assert_eq!(metrics.dollars_per_mile, "$3.00");
        assert_eq!(metrics.days_until_pickup, 0);
    }

    #[test]
    fn dropoff_before_pickup_clamps_to_one_day() {
        let pickup = datetime!(2026-11-10 08:00 UTC);
        let load = offer(700.0, 1400.0, pickup, pickup - Duration::days(3));
        let metrics = CardMetrics::compute(&load, pickup);

        assert_eq!(metrics.total_days, 1);
        assert_eq!(metrics.dollars_per_day, "$1,400.00");
    }

    #[test]
    fn zero_miles_has_no_per_mile_rate() {
        let pickup = datetime!(2026-11-02 08:00 UTC);
        let load = offer(0.0, 500.0, pickup, pickup + Duration::days(1));
        let metrics = CardMetrics::compute(&load, pickup);

        assert_eq!(metrics.dollars_per_mile, "n/a");
        assert_eq!(metrics.miles_per_day, 0);
    }

    #[test]
    fn toggle_twice_returns_to_collapsed() {
        let mut state = DisplayState::default();
        assert_eq!(state.button_label(), "See More");
        state.toggle();
        assert!(state.expanded);
        assert_eq!(state.button_label(), "See Less");
        state.toggle();
        assert_eq!(state, DisplayState::default());
    }

    #[test]
    fn summary_formats_in_display_zone() {
        let pickup = datetime!(2026-11-02 13:00 UTC);
        let load = offer(1200.0, 2500.5, pickup, pickup + Duration::days(2));
        let summary = CardSummary::build(&load, DisplayZone::Fixed(offset!(-5)), pickup);

        assert_eq!(summary.pickup.city, "Dallas");
        assert_eq!(summary.pickup.day, "Mon, 11/2/26");
        assert_eq!(summary.pickup.time_range, "08:00 - 12:00 GMT-5");
        assert_eq!(summary.dropoff.time_range, "08:00 - 10:00 GMT-5");
        assert_eq!(summary.distance, "1200 Miles");
        assert_eq!(summary.offer, "$2,500.50");
    }

    #[test]
    fn stops_on_either_side_of_dst_change_use_their_own_zone() {
        let new_york = DisplayZone::named("America/New_York").expect("known zone");
        let pickup = datetime!(2026-10-30 09:00 -4);
        let dropoff = datetime!(2026-11-03 09:00 -5);
        let summary = CardSummary::build(&offer(900.0, 1800.0, pickup, dropoff), new_york, pickup);

        assert_eq!(summary.pickup.day, "Fri, 10/30/26");
        assert_eq!(summary.pickup.time_range, "09:00 - 13:00 EDT");
        assert_eq!(summary.dropoff.day, "Tue, 11/3/26");
        assert_eq!(summary.dropoff.time_range, "09:00 - 11:00 EST");
    }
}
