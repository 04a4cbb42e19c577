//! Class helpers shared by the shell and cards.

use crate::domain::SortKey;

/// Main region carries the active sort key so the sheet can accent the sorted field.
pub fn main_class(sort_key: SortKey) -> String {
    format!("app-main {sort_key}")
}

pub fn footer_button(disabled: bool) -> &'static str {
    if disabled {
        "footer-button footer-button--disabled"
    } else {
        "footer-button"
    }
}

pub fn expand_icon(expanded: bool) -> &'static str {
    if expanded {
        "▲"
    } else {
        "▼"
    }
}
