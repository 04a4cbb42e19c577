pub mod loading_spinner;
pub mod shipping_card;
pub mod sort_select;

pub use loading_spinner::LoadingSpinner;
pub use shipping_card::ShippingCard;
pub use sort_select::SortSelect;
