//! HTTP client for a paginated load board endpoint.
//!
//! `GET <endpoint>?limit=..&sort=..&offset=..&order=..` returning a JSON page
//! in the shape understood by [`parse_page`].

use dioxus::logger::tracing::{info, warn};
use reqwest::{Client, Url};

use super::source::{FetchError, ShipmentSource};
use super::wire::parse_page;
use crate::domain::{PageRequest, ShipmentOffer};
use crate::util::version::user_agent;

#[derive(Clone)]
pub struct LoadBoardClient {
    http: Client,
    endpoint: Url,
}

impl LoadBoardClient {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)?;
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &request.limit.to_string())
            .append_pair("sort", request.sort_key.as_str())
            .append_pair("offset", &request.offset.to_string())
            .append_pair("order", request.order.as_str());
        url
    }
}

impl ShipmentSource for LoadBoardClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ShipmentOffer>, FetchError> {
        let url = self.page_url(request);
        info!("Requesting loads from {url}");

        let response = self.http.get(url.clone()).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        match parse_page(&body) {
            Ok(records) => {
                info!("Load board returned {} records for {url}", records.len());
                Ok(records)
            }
            Err(err) => {
                warn!("Load board payload from {url} rejected: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortKey, PAGE_SIZE};

    #[test]
    fn page_url_carries_query() {
        let client = LoadBoardClient::new("https://loads.example.com/v1/loads?region=midwest")
            .expect("valid endpoint");
        let request = PageRequest {
            sort_key: SortKey::Origin,
            offset: 20,
            limit: PAGE_SIZE,
            order: SortKey::Origin.order(),
            ticket: 3,
        };

        let url = client.page_url(&request);
        assert_eq!(url.path(), "/v1/loads");
        assert_eq!(
            url.query(),
            Some("region=midwest&limit=10&sort=origin&offset=20&order=desc")
        );
    }

    #[test]
    fn rejects_relative_endpoint() {
        let err = LoadBoardClient::new("/loads").err().expect("relative URL");
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
