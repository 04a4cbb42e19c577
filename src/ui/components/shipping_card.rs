use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::domain::{CardSummary, DisplayState, DisplayZone, ShipmentOffer, StopSummary};
use crate::ui::theme;

/// One offer with its schedule, payout and an expandable metrics row.
#[component]
pub fn ShippingCard(offer: ShipmentOffer, zone: DisplayZone) -> Element {
    let mut display = use_signal(DisplayState::default);
    let summary = CardSummary::build(&offer, zone, OffsetDateTime::now_utc());
    let state = display();
    let metrics = summary.metrics.clone();
    let toggle_label = format!("{} {}", state.button_label(), theme::expand_icon(state.expanded));

    rsx! {
        section { class: "shipping-card",
            div { class: "schedule-row",
                div { class: "shipping-card-location shipping-card-pickup",
                    div { class: "item-label", "pick up" }
                    div { class: "shipping-card-location-state", "{summary.pickup.state}" }
                }
                div { class: "shipping-card-direction", "🚚" }
                div { class: "shipping-card-location shipping-card-dropoff",
                    div { class: "item-label", "drop off" }
                    div { class: "shipping-card-location-state", "{summary.dropoff.state}" }
                }
            }
            div { class: "schedule-row",
                StopDetails { stop: summary.pickup.clone(), side: "shipping-card-pickup" }
                StopDetails { stop: summary.dropoff.clone(), side: "shipping-card-dropoff" }
            }
            div { class: "details-row",
                div {
                    div { class: "item-label", "distance" }
                    div { class: "shipping-card-distance", "{summary.distance}" }
                }
                button {
                    class: "expand-button",
                    onclick: move |_| display.with_mut(DisplayState::toggle),
                    "{toggle_label}"
                }
                div {
                    div { class: "item-label", "offer" }
                    div { class: "shipping-card-offer", "{summary.offer}" }
                }
            }
            if state.expanded {
                div { class: "additional-details-row",
                    div { class: "additional-details-breakdown",
                        "📅"
                        br {}
                        "starts {metrics.days_until_pickup} days from now"
                    }
                    div { class: "additional-details-breakdown",
                        "⏱"
                        br {}
                        "~{metrics.miles_per_day} miles / day"
                    }
                    div { class: "additional-details-breakdown",
                        "💵"
                        br {}
                        "{metrics.dollars_per_mile} / mile"
                        br {}
                        "{metrics.dollars_per_day} / day"
                    }
                }
            }
        }
    }
}

#[component]
fn StopDetails(stop: StopSummary, side: &'static str) -> Element {
    rsx! {
        div { class: "shipping-card-location {side}",
            div { class: "shipping-card-location-city", "{stop.city}" }
            div { class: "shipping-card-location-date",
                "{stop.day}"
                br {}
                "{stop.time_range}"
            }
        }
    }
}
