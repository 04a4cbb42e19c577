use std::future::Future;

use dioxus::logger::tracing::{error, info};
use thiserror::Error;

use super::{fixtures::FixtureSource, loadboard::LoadBoardClient};
use crate::domain::{PageRequest, ShipmentOffer};
use crate::util::settings::Settings;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
    #[error("malformed shipment data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no sample data named {0}")]
    MissingFixture(String),
}

/// Anything that can answer a page request with an ordered slice of offers.
pub trait ShipmentSource {
    fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<Vec<ShipmentOffer>, FetchError>>;
}

/// The source the app talks to, chosen once at startup.
#[derive(Clone)]
pub enum DataSource {
    Fixtures(FixtureSource),
    LoadBoard(LoadBoardClient),
}

impl DataSource {
    pub fn from_settings(settings: &Settings) -> Self {
        let Some(endpoint) = settings.api_url.as_deref() else {
            info!("No load board configured; serving bundled sample data.");
            return DataSource::Fixtures(FixtureSource);
        };

        match LoadBoardClient::new(endpoint) {
            Ok(client) => {
                info!("Using load board at {endpoint}");
                DataSource::LoadBoard(client)
            }
            Err(err) => {
                error!("Failed to initialise load board client for {endpoint}: {err}");
                DataSource::Fixtures(FixtureSource)
            }
        }
    }
}

impl ShipmentSource for DataSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ShipmentOffer>, FetchError> {
        match self {
            DataSource::Fixtures(source) => source.fetch_page(request).await,
            DataSource::LoadBoard(client) => client.fetch_page(request).await,
        }
    }
}
