use time::OffsetDateTime;

/// Start/end pair for a pickup or dropoff appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub state: String,
    pub city: String,
    pub window: TimeWindow,
}

/// One load offered on the board. Read-only once fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentOffer {
    pub origin: Stop,
    pub destination: Stop,
    pub miles: f64,
    /// Offered payout in USD.
    pub offer: f64,
}

impl ShipmentOffer {
    pub fn pickup(&self) -> &TimeWindow {
        &self.origin.window
    }

    pub fn dropoff(&self) -> &TimeWindow {
        &self.destination.window
    }
}
