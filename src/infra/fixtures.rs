//! Bundled sample pages standing in for a load board.
//!
//! Two pages exist per sort key: `<key>-1.json` answers offset 0 and
//! `<key>-2.json` answers every later offset.

use dioxus::logger::tracing::debug;

use super::source::{FetchError, ShipmentSource};
use super::wire::parse_page;
use crate::domain::{PageRequest, ShipmentOffer, SortKey};
use crate::util::assets;

#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn fixture_name(request: &PageRequest) -> String {
        let page = if request.offset > 0 { 2 } else { 1 };
        format!("{}-{page}.json", request.sort_key)
    }
}

impl ShipmentSource for FixtureSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ShipmentOffer>, FetchError> {
        let name = Self::fixture_name(request);
        let raw = assets::sample_page(&name).ok_or_else(|| FetchError::MissingFixture(name.clone()))?;
        let records = parse_page(&raw)?;
        debug!("[fixtures] {name}: {} records", records.len());
        Ok(records)
    }
}
