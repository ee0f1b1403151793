//! Invoices endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    models::{UpdateInvoiceRequest, UpdateInvoiceResponse},
};

/// Access to the Invoices endpoints.
#[derive(Debug, Clone, Copy)]
pub struct InvoicesApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl InvoicesApi<'_> {
    /// Update a draft invoice. Fields named in the request's
    /// `fields_to_clear` list are removed remotely.
    #[instrument(skip(self, body))]
    pub async fn update(
        &self,
        invoice_id: &str,
        body: &UpdateInvoiceRequest,
    ) -> SquareResult<UpdateInvoiceResponse> {
        self.client
            .put(&format!("/v2/invoices/{invoice_id}"), body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SquareConfig;
    use crate::models::Invoice;
    use wiremock::{
        matchers::{body_json, method, path},
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
    async fn test_update_sends_fields_to_clear() {
        let mock_server = MockServer::start().await;

        let body = UpdateInvoiceRequest::builder(
            Invoice::builder()
                .id("inv:0-ChCHu2mZEabLeeHahQnXDjZQECY")
                .version(1)
                .build(),
        )
        .idempotency_key("4ee82288-0910-499e-ab4c-5d0071dad1be")
        .fields_to_clear(vec!["description".to_string()])
        .build();

        Mock::given(method("PUT"))
            .and(path("/v2/invoices/inv:0-ChCHu2mZEabLeeHahQnXDjZQECY"))
            .and(body_json(serde_json::json!({
                "invoice": {
                    "id": "inv:0-ChCHu2mZEabLeeHahQnXDjZQECY",
                    "version": 1
                },
                "idempotency_key": "4ee82288-0910-499e-ab4c-5d0071dad1be",
                "fields_to_clear": ["description"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "invoice": {
                    "id": "inv:0-ChCHu2mZEabLeeHahQnXDjZQECY",
                    "version": 2,
                    "status": "DRAFT"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client
            .invoices()
            .update("inv:0-ChCHu2mZEabLeeHahQnXDjZQECY", &body)
            .await
            .unwrap();

        assert_eq!(
            response.invoice.as_ref().and_then(|i| i.version),
            Some(2)
        );
    }
}
