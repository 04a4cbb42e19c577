use dioxus::prelude::*;

use crate::domain::SortKey;
use crate::ui::components::SortSelect;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

/// Header with title and sort selector, the listing, and paging controls.
#[component]
pub fn Shell(
    sort_key: SortKey,
    prev_disabled: bool,
    next_disabled: bool,
    on_sort_change: EventHandler<SortKey>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    children: Element,
) -> Element {
    let version = version_label();
    let main_class = theme::main_class(sort_key);

    rsx! {
        div { class: "app",
            header { class: "app-header",
                span { class: "app-title", title: "{version}", "🚚 {APP_NAME}" }
                SortSelect { value: sort_key, on_change: on_sort_change }
            }
            main { class: "{main_class}",
                {children}
            }
            footer { class: "app-footer",
                button {
                    class: theme::footer_button(prev_disabled),
                    disabled: prev_disabled,
                    onclick: move |_| on_prev.call(()),
                    "◀ Previous"
                }
                button {
                    class: theme::footer_button(next_disabled),
                    disabled: next_disabled,
                    onclick: move |_| on_next.call(()),
                    "Next ▶"
                }
            }
        }
    }
}
