use reqwest::{Client, Url};

use crate::config::ApiConfig;
use crate::fetch::{FetchError, PageSource};
use crate::pager::{Page, PageNumber};

/// Fetches pages over HTTP: `GET {endpoint}?{page_param}={n}`.
pub struct HttpPageSource {
    client: Client,
    endpoint: Url,
    page_param: String,
}

impl HttpPageSource {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let endpoint = api.endpoint();
        let endpoint = Url::parse(&endpoint).map_err(|e| FetchError::InvalidEndpoint {
            endpoint,
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .timeout(api.request_timeout())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint,
            page_param: api.page_param.clone(),
        })
    }

    /// URL requested for `page_number`.
    pub fn page_url(&self, page_number: PageNumber) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(&self.page_param, &page_number.to_string());
        url
    }
}

impl PageSource for HttpPageSource {
    async fn get_page(&self, page_number: PageNumber) -> Result<Page, FetchError> {
        let url = self.page_url(page_number);
        tracing::trace!(%url, "GET page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                page_number,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                page_number,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                page_number,
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            page_number,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_carries_page_param() {
        let api = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ApiConfig::default()
        };
        let source = HttpPageSource::new(&api).unwrap();
        assert_eq!(
            source.page_url(3).as_str(),
            "http://127.0.0.1:9/todos?pageNumber=3"
        );
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let api = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            HttpPageSource::new(&api),
            Err(FetchError::InvalidEndpoint { .. })
        ));
    }
}
