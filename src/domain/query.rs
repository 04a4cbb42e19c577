//! Sorting and pagination state for the listing view.

use std::{fmt, str::FromStr};

use super::shipment::ShipmentOffer;

/// Records fetched and shown per page.
pub const PAGE_SIZE: usize = 10;

const ERROR_PREFIX: &str = "Error: Something went wrong with the request, please try again";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    PickupDate,
    DropoffDate,
    Origin,
    Destination,
    Price,
    Miles,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::PickupDate,
        SortKey::DropoffDate,
        SortKey::Origin,
        SortKey::Destination,
        SortKey::Price,
        SortKey::Miles,
    ];

    /// Name used on the wire and in fixture file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PickupDate => "pickupDate",
            SortKey::DropoffDate => "dropoffDate",
            SortKey::Origin => "origin",
            SortKey::Destination => "destination",
            SortKey::Price => "price",
            SortKey::Miles => "miles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PickupDate => "Pickup Date",
            SortKey::DropoffDate => "Dropoff Date",
            SortKey::Origin => "Origin",
            SortKey::Destination => "Destination",
            SortKey::Price => "Offer",
            SortKey::Miles => "Miles",
        }
    }

    /// Price and the two location keys list highest first.
    pub fn order(&self) -> SortOrder {
        match self {
            SortKey::Price | SortKey::Origin | SortKey::Destination => SortOrder::Desc,
            SortKey::PickupDate | SortKey::DropoffDate | SortKey::Miles => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownSortKey(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One page request handed to a shipment source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub sort_key: SortKey,
    pub offset: usize,
    pub limit: usize,
    pub order: SortOrder,
    /// Sequence number; only the latest ticket may update the view.
    pub ticket: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Controller state: what is visible and how to fetch the next view.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub sort_key: SortKey,
    pub page_offset: usize,
    pub visible: Vec<ShipmentOffer>,
    pub phase: LoadPhase,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    ticket: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::default(),
            page_offset: 0,
            visible: Vec::new(),
            phase: LoadPhase::Idle,
            prev_disabled: true,
            next_disabled: true,
            ticket: 0,
        }
    }
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Initial load on mount.
    pub fn start(&mut self) -> PageRequest {
        self.begin_load()
    }

    /// New sort key: back to the first page.
    pub fn change_sort(&mut self, sort_key: SortKey) -> PageRequest {
        self.sort_key = sort_key;
        self.page_offset = 0;
        self.prev_disabled = true;
        self.begin_load()
    }

    /// Advance one page. `None` while the next control is disabled.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.next_disabled {
            return None;
        }
        self.page_offset += PAGE_SIZE;
        self.prev_disabled = false;
        Some(self.begin_load())
    }

    /// Step back one page. `None` while already at the first page.
    pub fn prev_page(&mut self) -> Option<PageRequest> {
        if self.prev_disabled || self.page_offset == 0 {
            return None;
        }
        self.page_offset = self.page_offset.saturating_sub(PAGE_SIZE);
        self.prev_disabled = self.page_offset == 0;
        Some(self.begin_load())
    }

    /// Apply a finished fetch. Returns `false` when the result belongs to a
    /// request that has since been superseded and was dropped.
    pub fn complete<E: fmt::Display>(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<ShipmentOffer>, E>,
    ) -> bool {
        if request.ticket != self.ticket {
            return false;
        }

        match result {
            Ok(records) => {
                // a full page is taken to mean more exist; there is no look-ahead
                self.next_disabled = records.len() < PAGE_SIZE;
                self.visible = records;
                self.phase = LoadPhase::Idle;
            }
            Err(err) => {
                self.phase = LoadPhase::Error(format!("{ERROR_PREFIX}: {err}"));
            }
        }
        true
    }

    fn begin_load(&mut self) -> PageRequest {
        self.ticket += 1;
        self.phase = LoadPhase::Loading;
        PageRequest {
            sort_key: self.sort_key,
            offset: self.page_offset,
            limit: PAGE_SIZE,
            order: self.sort_key.order(),
            ticket: self.ticket,
        }
    }
}
