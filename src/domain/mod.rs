//! Shipment model, card metrics and listing state.

pub mod card;
pub mod format;
pub mod query;
pub mod shipment;
pub mod zone;

#[allow(unused_imports)]
pub use card::{CardMetrics, CardSummary, DisplayState, StopSummary};
#[allow(unused_imports)]
pub use query::{LoadPhase, PageRequest, QueryState, SortKey, SortOrder, PAGE_SIZE};
#[allow(unused_imports)]
pub use shipment::{ShipmentOffer, Stop, TimeWindow};
#[allow(unused_imports)]
pub use zone::DisplayZone;
