//! Subscriptions endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    models::{
        CancelSubscriptionResponse, CreateSubscriptionRequest, CreateSubscriptionResponse,
        ListSubscriptionEventsResponse, RetrieveSubscriptionResponse, SearchSubscriptionsRequest,
        SearchSubscriptionsResponse, UpdateSubscriptionRequest, UpdateSubscriptionResponse,
    },
};

/// Access to the Subscriptions endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl SubscriptionsApi<'_> {
    /// Create a subscription for a customer on a plan.
    #[instrument(skip(self, body))]
    pub async fn create(
        &self,
        body: &CreateSubscriptionRequest,
    ) -> SquareResult<CreateSubscriptionResponse> {
        self.client.post("/v2/subscriptions", body).await
    }

    /// Search subscriptions by customer or location.
    #[instrument(skip(self, body))]
    pub async fn search(
        &self,
        body: &SearchSubscriptionsRequest,
    ) -> SquareResult<SearchSubscriptionsResponse> {
        self.client.post("/v2/subscriptions/search", body).await
    }

    /// Retrieve a subscription by id.
    #[instrument(skip(self))]
    pub async fn retrieve(
        &self,
        subscription_id: &str,
    ) -> SquareResult<RetrieveSubscriptionResponse> {
        self.client
            .get(&format!("/v2/subscriptions/{subscription_id}"), &[])
            .await
    }

    /// Update fields of a subscription. Clearable fields carried as an
    /// explicit null are cleared remotely.
    #[instrument(skip(self, body))]
    pub async fn update(
        &self,
        subscription_id: &str,
        body: &UpdateSubscriptionRequest,
    ) -> SquareResult<UpdateSubscriptionResponse> {
        self.client
            .put(&format!("/v2/subscriptions/{subscription_id}"), body)
            .await
    }

    /// Cancel a subscription at the end of its paid-through date.
    #[instrument(skip(self))]
    pub async fn cancel(&self, subscription_id: &str) -> SquareResult<CancelSubscriptionResponse> {
        self.client
            .post_empty(&format!("/v2/subscriptions/{subscription_id}/cancel"))
            .await
    }

    /// List a subscription's events, newest first. The caller loops on
    /// the returned cursor until it comes back absent.
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        subscription_id: &str,
        cursor: Option<&str>,
        limit: Option<i32>,
    ) -> SquareResult<ListSubscriptionEventsResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        self.client
            .get(
                &format!("/v2/subscriptions/{subscription_id}/events"),
                &query,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SquareConfig;
    use crate::models::Subscription;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client(uri: &str) -> SquareClient {
        let config = SquareConfig {
            access_token: "test_token".into(),
            ..SquareConfig::default()
        };
        SquareClient::new(&config).unwrap().with_base_url(uri)
    }

    #[tokio::test]
    async fn test_create_serializes_request_model() {
        let mock_server = MockServer::start().await;

        let request = CreateSubscriptionRequest::builder(
            "8193148c-9586-11e6-99f9-28cfe92138cf",
            "S8GWD5R9QB376",
            "6JHXF3B2CW3YKHDV4XEM674H",
            "CHFGVKYY8RSV93M5KCYTG4PN0G",
        )
        .card_id("ccof:qy5x8hHGYsgLrp4Q4GB")
        .build();

        Mock::given(method("POST"))
            .and(path("/v2/subscriptions"))
            .and(body_json(serde_json::json!({
                "idempotency_key": "8193148c-9586-11e6-99f9-28cfe92138cf",
                "location_id": "S8GWD5R9QB376",
                "plan_id": "6JHXF3B2CW3YKHDV4XEM674H",
                "customer_id": "CHFGVKYY8RSV93M5KCYTG4PN0G",
                "card_id": "ccof:qy5x8hHGYsgLrp4Q4GB"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subscription": {
                    "id": "9ba40961-995a-4a3d-8c53-048c40cafc13",
                    "status": "ACTIVE",
                    "plan_id": "6JHXF3B2CW3YKHDV4XEM674H"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client.subscriptions().create(&request).await.unwrap();

        assert_eq!(
            response
                .subscription
                .as_ref()
                .and_then(|s| s.status.as_deref()),
            Some("ACTIVE")
        );
    }

    #[tokio::test]
    async fn test_list_events_encodes_cursor_and_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1/events"))
            .and(query_param("cursor", "abc"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subscription_events": [{
                    "id": "06809161-3867-4598-8269-8aea5be4f9de",
                    "subscription_event_type": "START_SUBSCRIPTION",
                    "effective_date": "2020-04-24",
                    "plan_id": "6JHXF3B2CW3YKHDV4XEM674H"
                }],
                "cursor": "def"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client
            .subscriptions()
            .list_events("sub_1", Some("abc"), Some(50))
            .await
            .unwrap();

        assert_eq!(response.cursor.as_deref(), Some("def"));
        assert_eq!(
            response.subscription_events.as_ref().map(Vec::len),
            Some(1)
        );
    }

    #[tokio::test]
    async fn test_list_events_omits_absent_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/subscriptions/sub_1/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subscription_events": []
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client
            .subscriptions()
            .list_events("sub_1", None, None)
            .await
            .unwrap();

        assert_eq!(response.cursor, None);

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_update_sends_explicit_null_for_cleared_field() {
        let mock_server = MockServer::start().await;

        let body = UpdateSubscriptionRequest::builder()
            .subscription(Subscription::builder().version(2).clear_card_id().build())
            .build();

        Mock::given(method("PUT"))
            .and(path("/v2/subscriptions/sub_1"))
            .and(body_json(serde_json::json!({
                "subscription": {"version": 2, "card_id": null}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subscription": {"id": "sub_1", "version": 3}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client
            .subscriptions()
            .update("sub_1", &body)
            .await
            .unwrap();

        assert_eq!(
            response.subscription.as_ref().and_then(|s| s.version),
            Some(3)
        );
    }

    #[tokio::test]
    async fn test_cancel_posts_without_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/subscriptions/sub_1/cancel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "subscription": {
                    "id": "sub_1",
                    "status": "CANCELED",
                    "canceled_date": "2023-06-05"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client.subscriptions().cancel("sub_1").await.unwrap();

        let subscription = response.subscription.unwrap();
        assert_eq!(
            subscription.canceled_date.value().map(String::as_str),
            Some("2023-06-05")
        );

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }
}
