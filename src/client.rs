//! Square API client.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{header, Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    apis::{
        CashDrawersApi, InventoryApi, InvoicesApi, LoyaltyApi, OrdersApi, SubscriptionsApi,
        TeamMembersApi, TransactionsApi,
    },
    config::SquareConfig,
    error::{SquareError, SquareResult},
    http::{ApiResponseBody, HttpContext},
    models::Error as ApiError,
};

/// Asynchronous Square API client.
///
/// The client holds no per-call state; any number of calls may run
/// concurrently on one instance. Dropping a call's future cancels it.
#[derive(Debug, Clone)]
pub struct SquareClient {
    client: Client,
    base_url: String,
    access_token: String,
    square_version: String,
    max_retries: u32,
    initial_delay_ms: u64,
    max_delay_ms: u64,
}

impl SquareClient {
    /// Create a new client from configuration.
    pub fn new(config: &SquareConfig) -> SquareResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("square-api/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            square_version: config.square_version.clone(),
            max_retries: config.retry.max_attempts,
            initial_delay_ms: config.retry.initial_delay_ms,
            max_delay_ms: config.retry.max_delay_ms,
        })
    }

    /// Set the base URL (for testing).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set retry configuration.
    #[must_use]
    pub const fn with_retry_config(
        mut self,
        max_retries: u32,
        initial_delay_ms: u64,
        max_delay_ms: u64,
    ) -> Self {
        self.max_retries = max_retries;
        self.initial_delay_ms = initial_delay_ms;
        self.max_delay_ms = max_delay_ms;
        self
    }

    /// Subscriptions endpoints.
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi { client: self }
    }

    /// Orders endpoints.
    #[must_use]
    pub const fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { client: self }
    }

    /// Invoices endpoints.
    #[must_use]
    pub const fn invoices(&self) -> InvoicesApi<'_> {
        InvoicesApi { client: self }
    }

    /// Inventory endpoints.
    #[must_use]
    pub const fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi { client: self }
    }

    /// Loyalty endpoints.
    #[must_use]
    pub const fn loyalty(&self) -> LoyaltyApi<'_> {
        LoyaltyApi { client: self }
    }

    /// Team members endpoints.
    #[must_use]
    pub const fn team_members(&self) -> TeamMembersApi<'_> {
        TeamMembersApi { client: self }
    }

    /// Transactions endpoints.
    #[must_use]
    pub const fn transactions(&self) -> TransactionsApi<'_> {
        TransactionsApi { client: self }
    }

    /// Cash drawers endpoints (v1).
    #[must_use]
    pub const fn cash_drawers(&self) -> CashDrawersApi<'_> {
        CashDrawersApi { client: self }
    }

    /// Make a GET request.
    pub(crate) async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> SquareResult<T>
    where
        T: DeserializeOwned + ApiResponseBody,
    {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> SquareResult<T>
    where
        T: DeserializeOwned + ApiResponseBody,
        B: Serialize,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Make a POST request with no body.
    pub(crate) async fn post_empty<T>(&self, path: &str) -> SquareResult<T>
    where
        T: DeserializeOwned + ApiResponseBody,
    {
        self.request(Method::POST, path, &[], None::<&()>).await
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> SquareResult<T>
    where
        T: DeserializeOwned + ApiResponseBody,
        B: Serialize,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// Dispatch a request and deserialize the response body, attaching the
    /// exchange context to the resulting model.
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> SquareResult<T>
    where
        T: DeserializeOwned + ApiResponseBody,
        B: Serialize,
    {
        let (context, bytes) = self.execute(method, path, query, body).await?;
        let mut model: T = serde_json::from_slice(&bytes)?;
        model.attach_context(context);
        Ok(model)
    }

    /// Dispatch a request, returning the exchange context and raw body of
    /// a successful response.
    pub(crate) async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> SquareResult<(HttpContext, Bytes)>
    where
        B: Serialize,
    {
        let url = format!("{}{path}", self.base_url);
        let mut delay = Duration::from_millis(self.initial_delay_ms);
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(attempt = attempts, %method, path, "Making Square API request");

            let mut request = self
                .client
                .request(method.clone(), &url)
                .header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", self.access_token),
                )
                .header("Square-Version", &self.square_version);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => match handle_response(response).await {
                    Ok(success) => return Ok(success),
                    Err(e) if e.is_retryable() && attempts < self.max_retries => {
                        if let Some(retry_after) = e.retry_after() {
                            delay = retry_after;
                        }
                        warn!(
                            attempt = attempts,
                            delay_ms = delay.as_millis(),
                            error = %e,
                            "Retrying Square API request"
                        );
                        tokio::time::sleep(delay).await;
                        delay = std::cmp::min(delay * 2, Duration::from_millis(self.max_delay_ms));
                    }
                    Err(e) => return Err(e),
                },
                Err(e) if e.is_timeout() || e.is_connect() => {
                    if attempts < self.max_retries {
                        warn!(
                            attempt = attempts,
                            delay_ms = delay.as_millis(),
                            error = %e,
                            "Retrying after connection error"
                        );
                        tokio::time::sleep(delay).await;
                        delay = std::cmp::min(delay * 2, Duration::from_millis(self.max_delay_ms));
                    } else {
                        return Err(SquareError::Http(e));
                    }
                }
                Err(e) => return Err(SquareError::Http(e)),
            }
        }
    }
}

/// Split a response into exchange context and body, or the matching error.
async fn handle_response(response: Response) -> SquareResult<(HttpContext, Bytes)> {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return Ok((HttpContext { status, headers }, bytes));
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = headers
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        return Err(SquareError::RateLimited { retry_after });
    }

    Err(parse_error_body(status, &bytes))
}

/// Parse a non-2xx body into the structured error list when it has one.
fn parse_error_body(status: StatusCode, bytes: &Bytes) -> SquareError {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        errors: Vec<ApiError>,
    }

    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(bytes) {
        return SquareError::Api {
            status: status.as_u16(),
            errors: envelope.errors,
        };
    }

    SquareError::Unexpected {
        status: status.as_u16(),
        body: String::from_utf8_lossy(bytes).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SQUARE_VERSION;
    use wiremock::{
        matchers::{header as header_matcher, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client(uri: &str) -> SquareClient {
        let config = SquareConfig {
            access_token: "test_token".into(),
            ..SquareConfig::default()
        };
        SquareClient::new(&config)
            .unwrap()
            .with_base_url(uri)
            .with_retry_config(1, 10, 100)
    }

    #[tokio::test]
    async fn test_success_attaches_exchange_context() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1"))
            .and(header_matcher("Authorization", "Bearer test_token"))
            .and(header_matcher("Square-Version", DEFAULT_SQUARE_VERSION))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-request-id", "req_8f7e")
                    .set_body_json(serde_json::json!({
                        "subscription": {"id": "sub_1", "status": "ACTIVE"}
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client.subscriptions().retrieve("sub_1").await.unwrap();

        assert_eq!(
            response.subscription.as_ref().and_then(|s| s.id.as_deref()),
            Some("sub_1")
        );
        let context = response.http_context.as_ref().unwrap();
        assert_eq!(context.status, StatusCode::OK);
        assert_eq!(context.header("x-request-id"), Some("req_8f7e"));
    }

    #[tokio::test]
    async fn test_structured_error_body_becomes_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "errors": [{
                    "category": "INVALID_REQUEST_ERROR",
                    "code": "NOT_FOUND",
                    "detail": "Subscription not found"
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .subscriptions()
            .retrieve("missing")
            .await
            .unwrap_err();

        match err {
            SquareError::Api { status, errors } => {
                assert_eq!(status, 404);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, "NOT_FOUND");
                assert_eq!(errors[0].category, "INVALID_REQUEST_ERROR");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "7")
                    .set_body_json(serde_json::json!({
                        "errors": [{"category": "RATE_LIMIT_ERROR", "code": "RATE_LIMITED"}]
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .subscriptions()
            .retrieve("sub_1")
            .await
            .unwrap_err();

        assert!(matches!(err, SquareError::RateLimited { retry_after: 7 }));
    }

    #[tokio::test]
    async fn test_retries_server_errors_then_succeeds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "errors": [{"category": "API_ERROR", "code": "INTERNAL_SERVER_ERROR"}]
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subscription": {"id": "sub_1"}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri()).with_retry_config(3, 10, 100);
        let response = client.subscriptions().retrieve("sub_1").await.unwrap();

        assert!(response.subscription.is_some());
    }

    #[tokio::test]
    async fn test_unparseable_error_body_is_surfaced_raw() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .subscriptions()
            .retrieve("sub_1")
            .await
            .unwrap_err();

        match err {
            SquareError::Unexpected { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected Unexpected error, got {other:?}"),
        }
    }
}
