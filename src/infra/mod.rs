//! Where shipment pages come from: bundled samples or a remote load board.

pub mod fixtures;
pub mod loadboard;
pub mod source;
pub mod wire;

#[allow(unused_imports)]
pub use source::{DataSource, FetchError, ShipmentSource};
