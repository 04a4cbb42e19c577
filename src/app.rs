use dioxus::logger::tracing::{debug, error, info};
use dioxus::prelude::*;

use crate::{
    domain::{DisplayZone, PageRequest, QueryState, SortKey},
    infra::{DataSource, ShipmentSource},
    ui::{
        components::{LoadingSpinner, ShippingCard},
        shell::Shell,
    },
    util::{assets, settings::Settings},
};

/// Resolved at startup and handed to the root component as context.
#[derive(Clone, Debug)]
pub struct Startup {
    pub settings: Settings,
    pub display_zone: DisplayZone,
}

#[component]
pub fn App() -> Element {
    let startup = use_context::<Startup>();
    let source = use_hook(|| DataSource::from_settings(&startup.settings));
    let mut query = use_signal(QueryState::default);

    use_hook({
        let source = source.clone();
        move || {
            let request = query.with_mut(QueryState::start);
            load_page(source, query, request);
        }
    });

    let on_sort_change = {
        let source = source.clone();
        move |key: SortKey| {
            info!("Sorting by {key}");
            let request = query.with_mut(|q| q.change_sort(key));
            load_page(source.clone(), query, request);
        }
    };

    let on_prev = {
        let source = source.clone();
        move |_: ()| {
            if let Some(request) = query.with_mut(QueryState::prev_page) {
                load_page(source.clone(), query, request);
            }
        }
    };

    let on_next = {
        let source = source.clone();
        move |_: ()| {
            if let Some(request) = query.with_mut(QueryState::next_page) {
                load_page(source.clone(), query, request);
            }
        }
    };

    let state = query();
    let zone = startup.display_zone;
    let sort_key = state.sort_key;
    let offset = state.page_offset;

    let listing = if state.is_loading() {
        rsx! { LoadingSpinner {} }
    } else if let Some(message) = state.error_message() {
        rsx! { p { class: "error-message", "{message}" } }
    } else {
        rsx! {
            for (idx, offer) in state.visible.iter().cloned().enumerate() {
                // page-scoped keys remount cards, collapsing them on navigation
                ShippingCard { key: "{sort_key}-{offset}-{idx}", offer, zone }
            }
        }
    };

    rsx! {
        document::Style { "{assets::main_css()}" }
        Shell {
            sort_key,
            prev_disabled: state.prev_disabled,
            next_disabled: state.next_disabled,
            on_sort_change,
            on_prev,
            on_next,
            {listing}
        }
    }
}

/// Fetch on the UI runtime and fold the outcome back into `query`.
fn load_page(source: DataSource, mut query: Signal<QueryState>, request: PageRequest) {
    spawn(async move {
        let result = source.fetch_page(&request).await;
        if let Err(err) = &result {
            error!(
                "Failed to load {} page at offset {}: {err}",
                request.sort_key, request.offset
            );
        }
        if !query.with_mut(|q| q.complete(&request, result)) {
            debug!("Dropped superseded page for ticket {}", request.ticket);
        }
    });
}
