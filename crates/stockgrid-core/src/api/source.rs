//! Remote stock API contract and its HTTP implementation.
//!
//! | Call | Request | Response |
//! |------|---------|----------|
//! | [`StockApi::instruments`] | `GET {base}/Stocks` | `[Instrument]` |
//! | [`StockApi::values`] | `GET {base}/stockValues/{id}` | `[ValuePoint]` |

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{Config, FetchError, Instrument, InstrumentId, ValuePoint};

pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<Vec<T>, FetchError>> + Send + 'a>>;

/// Read-only source of the two remote collections.
pub trait StockApi: Send + Sync {
    fn instruments(&self) -> FetchFuture<'_, Instrument>;

    /// Value series of `id`. The sentinel [`InstrumentId::NONE`] yields an empty series.
    fn values(&self, id: InstrumentId) -> FetchFuture<'_, ValuePoint>;
}

/// [`StockApi`] over any [`HttpClient`].
#[derive(Clone)]
pub struct HttpStockApi {
    base_url: String,
    timeout_ms: u64,
    http_client: Arc<dyn HttpClient>,
}

impl HttpStockApi {
    pub fn new(config: &Config) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: &Config, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            timeout_ms: config.timeout_ms,
            http_client,
        }
    }

    pub fn instruments_url(&self) -> String {
        format!("{}/Stocks", self.base_url)
    }

    pub fn values_url(&self, id: InstrumentId) -> String {
        format!("{}/stockValues/{id}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, FetchError> {
        debug!(%url, "requesting collection");
        let request = HttpRequest::get(url.as_str()).with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(%url, error = error.message(), "transport error");
            FetchError::network(error.message())
        })?;

        if !response.is_success() {
            warn!(%url, status = response.status, "upstream returned error status");
            return Err(FetchError::network(format!(
                "upstream returned status {}",
                response.status
            )));
        }

        let rows = serde_json::from_str::<Vec<T>>(&response.body).map_err(|error| {
            warn!(%url, %error, "undecodable response body");
            FetchError::network(format!("invalid response body: {error}"))
        })?;

        info!(%url, rows = rows.len(), "collection fetched");
        Ok(rows)
    }
}

impl StockApi for HttpStockApi {
    fn instruments(&self) -> FetchFuture<'_, Instrument> {
        Box::pin(async move { self.get_json(self.instruments_url()).await })
    }

    fn values(&self, id: InstrumentId) -> FetchFuture<'_, ValuePoint> {
        Box::pin(async move {
            if id.is_none() {
                return Ok(Vec::new());
            }
            self.get_json(self.values_url(id)).await
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::api::{HttpError, HttpResponse};

    struct RecordingClient {
        response: Result<HttpResponse, HttpError>,
        urls: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        fn new(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                urls: Mutex::new(Vec::new()),
            })
        }

        fn urls(&self) -> Vec<String> {
            self.urls.lock().expect("lock").clone()
        }
    }

    impl HttpClient for RecordingClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.urls.lock().expect("lock").push(request.url);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn config() -> Config {
        Config::new("http://api.test/api/").expect("config")
    }

    #[tokio::test]
    async fn fetches_instruments_from_stocks_endpoint() {
        let client = RecordingClient::new(Ok(HttpResponse::ok_json(
            r#"[{"id":1,"stock":"AAA","industry":"Tech","sector":"X","currencyCode":"USD"}]"#,
        )));
        let api = HttpStockApi::with_http_client(&config(), client.clone());

        let instruments = api.instruments().await.expect("instruments");
        assert_eq!(instruments.len(), 1);
        assert_eq!(client.urls(), vec![String::from("http://api.test/api/Stocks")]);
    }

    #[tokio::test]
    async fn sentinel_id_issues_no_request() {
        let client = RecordingClient::new(Ok(HttpResponse::ok_json("[]")));
        let api = HttpStockApi::with_http_client(&config(), client.clone());

        let values = api.values(InstrumentId::NONE).await.expect("empty series");
        assert!(values.is_empty());
        assert!(client.urls().is_empty());
    }

    #[tokio::test]
    async fn error_status_and_bad_payload_are_network_failures() {
        let api = HttpStockApi::with_http_client(
            &config(),
            RecordingClient::new(Ok(HttpResponse::with_status(503, "down"))),
        );
        let err = api.instruments().await.expect_err("must fail");
        assert!(err.detail().contains("503"));

        let api = HttpStockApi::with_http_client(
            &config(),
            RecordingClient::new(Ok(HttpResponse::ok_json("{not json"))),
        );
        let err = api.values(InstrumentId::new(3)).await.expect_err("must fail");
        assert_eq!(err.code(), "fetch.network_failure");
    }
}
