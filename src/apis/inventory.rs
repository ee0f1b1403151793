//! Inventory endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient, error::SquareResult, models::RetrieveInventoryPhysicalCountResponse,
};

/// Access to the Inventory endpoints.
#[derive(Debug, Clone, Copy)]
pub struct InventoryApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl InventoryApi<'_> {
    /// Retrieve a physical count by id.
    #[instrument(skip(self))]
    pub async fn retrieve_physical_count(
        &self,
        physical_count_id: &str,
    ) -> SquareResult<RetrieveInventoryPhysicalCountResponse> {
        self.client
            .get(
                &format!("/v2/inventory/physical-count/{physical_count_id}"),
                &[],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SquareConfig;
    use wiremock::{
        matchers::{method, path},
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
    async fn test_retrieve_physical_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/inventory/physical-count/ANZ3FYV5XEHQNOPN4UGSBGKO"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": {
                    "id": "ANZ3FYV5XEHQNOPN4UGSBGKO",
                    "catalog_object_id": "W62UWFY35CWMYGVWK6TWJDNI",
                    "state": "IN_STOCK",
                    "location_id": "C6W5YS5QM06F5",
                    "quantity": "15",
                    "source": {
                        "product": "SQUARE_POS",
                        "application_id": "416ff29c-86c4-4feb-b58c-9705f21f3ea0",
                        "name": "Square Point of Sale 4.37"
                    },
                    "occurred_at": "2020-10-06T16:56:25.321Z",
                    "created_at": "2020-10-06T16:58:25.321Z"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client
            .inventory()
            .retrieve_physical_count("ANZ3FYV5XEHQNOPN4UGSBGKO")
            .await
            .unwrap();

        let count = response.count.unwrap();
        assert_eq!(count.quantity.as_deref(), Some("15"));
        assert_eq!(count.state.as_deref(), Some("IN_STOCK"));
        assert_eq!(
            count.source.as_ref().and_then(|s| s.name.as_deref()),
            Some("Square Point of Sale 4.37")
        );
    }
}
