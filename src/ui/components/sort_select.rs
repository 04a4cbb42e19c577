use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::domain::SortKey;

/// Forwards the chosen key to the caller; holds no state of its own.
#[component]
pub fn SortSelect(value: SortKey, on_change: EventHandler<SortKey>) -> Element {
    rsx! {
        select {
            class: "sort-select",
            value: "{value}",
            onchange: move |evt: FormEvent| match evt.value().parse::<SortKey>() {
                Ok(key) => on_change.call(key),
                Err(err) => warn!("Ignoring sort selection: {err}"),
            },
            for key in SortKey::ALL {
                option {
                    key: "{key}",
                    value: "{key}",
                    selected: key == value,
                    "{key.label()}"
                }
            }
        }
    }
}
