//! Cross-module scenarios against a mock server.

use square_api::models::{
    CreateOrderRequest, CreateSubscriptionRequest, Money, Order, OrderLineItem, Subscription,
    SubscriptionEvent, UpdateSubscriptionRequest,
};
use square_api::{SquareClient, SquareConfig, SquareError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(uri: &str) -> SquareClient {
    let config = SquareConfig {
        access_token: "test_token".into(),
        ..SquareConfig::default()
    };
    SquareClient::new(&config).unwrap().with_base_url(uri)
}

#[tokio::test]
async fn pagination_loop_follows_cursor_until_absent() {
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

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions/sub_1/events"))
        .and(query_param("cursor", "def"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscription_events": [{
                "id": "f2736603-cd2e-47ec-8675-f815fff54f88",
                "subscription_event_type": "STOP_SUBSCRIPTION",
                "effective_date": "2020-06-05",
                "plan_id": "6JHXF3B2CW3YKHDV4XEM674H"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri());
    let subscriptions = client.subscriptions();

    let mut events: Vec<SubscriptionEvent> = Vec::new();
    let mut cursor = Some("abc".to_string());
    while let Some(current) = cursor {
        let page = subscriptions
            .list_events("sub_1", Some(&current), Some(50))
            .await
            .unwrap();
        events.extend(page.subscription_events.unwrap_or_default());
        cursor = page.cursor;
    }

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].subscription_event_type, "START_SUBSCRIPTION");
    assert_eq!(events[1].subscription_event_type, "STOP_SUBSCRIPTION");
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn subscription_lifecycle_create_clear_cancel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions"))
        .and(header("Authorization", "Bearer test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscription": {
                "id": "9ba40961-995a-4a3d-8c53-048c40cafc13",
                "status": "ACTIVE",
                "tax_percentage": "5",
                "version": 1
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/subscriptions/9ba40961-995a-4a3d-8c53-048c40cafc13"))
        .and(body_json(serde_json::json!({
            "subscription": {"tax_percentage": null, "version": 1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscription": {
                "id": "9ba40961-995a-4a3d-8c53-048c40cafc13",
                "status": "ACTIVE",
                "version": 2
            }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(
            "/v2/subscriptions/9ba40961-995a-4a3d-8c53-048c40cafc13/cancel",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscription": {
                "id": "9ba40961-995a-4a3d-8c53-048c40cafc13",
                "status": "CANCELED",
                "canceled_date": "2023-06-05",
                "version": 3
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri());

    let created = client
        .subscriptions()
        .create(
            &CreateSubscriptionRequest::builder(
                "8193148c-9586-11e6-99f9-28cfe92138cf",
                "S8GWD5R9QB376",
                "6JHXF3B2CW3YKHDV4XEM674H",
                "CHFGVKYY8RSV93M5KCYTG4PN0G",
            )
            .tax_percentage("5")
            .build(),
        )
        .await
        .unwrap();
    let created = created.subscription.unwrap();
    assert_eq!(created.tax_percentage.value().map(String::as_str), Some("5"));

    let update = UpdateSubscriptionRequest::builder()
        .subscription(
            Subscription::builder()
                .version(1)
                .clear_tax_percentage()
                .build(),
        )
        .build();
    let updated = client
        .subscriptions()
        .update(created.id.as_deref().unwrap(), &update)
        .await
        .unwrap();
    assert_eq!(
        updated.subscription.as_ref().and_then(|s| s.version),
        Some(2)
    );

    let canceled = client
        .subscriptions()
        .cancel(created.id.as_deref().unwrap())
        .await
        .unwrap();
    let canceled = canceled.subscription.unwrap();
    assert_eq!(canceled.status.as_deref(), Some("CANCELED"));
    assert_eq!(
        canceled.canceled_date.value().map(String::as_str),
        Some("2023-06-05")
    );
}

#[tokio::test]
async fn structured_errors_ride_the_typed_failure_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/locations/18YC4JDH91E1H/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errors": [
                {
                    "category": "INVALID_REQUEST_ERROR",
                    "code": "MISSING_REQUIRED_PARAMETER",
                    "detail": "Missing required parameter.",
                    "field": "idempotency_key"
                },
                {
                    "category": "INVALID_REQUEST_ERROR",
                    "code": "VALUE_TOO_LOW",
                    "detail": "base_price_money.amount must be at least 100",
                    "field": "order.line_items[0].base_price_money.amount"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri());
    let body = CreateOrderRequest::builder()
        .order(
            Order::builder("18YC4JDH91E1H")
                .line_items(vec![OrderLineItem::builder("1")
                    .base_price_money(Money::builder().amount(1).currency("USD").build())
                    .build()])
                .build(),
        )
        .build();

    let err = client
        .orders()
        .create("18YC4JDH91E1H", &body)
        .await
        .unwrap_err();

    match err {
        SquareError::Api { status, errors } => {
            assert_eq!(status, 400);
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].code, "MISSING_REQUIRED_PARAMETER");
            assert_eq!(errors[1].field.as_deref(), Some("order.line_items[0].base_price_money.amount"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn independent_calls_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/inventory/physical-count/ANZ3FYV5XEHQNOPN4UGSBGKO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": {"id": "ANZ3FYV5XEHQNOPN4UGSBGKO", "quantity": "15"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/locations/18YC4JDH91E1H/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "transactions": []
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri());
    let inventory = client.inventory();
    let transactions_api = client.transactions();
    let (count, transactions) = tokio::join!(
        inventory.retrieve_physical_count("ANZ3FYV5XEHQNOPN4UGSBGKO"),
        transactions_api.list("18YC4JDH91E1H", None, None, None, None),
    );

    let count = count.unwrap();
    let transactions = transactions.unwrap();
    assert_eq!(
        count.count.as_ref().and_then(|c| c.quantity.as_deref()),
        Some("15")
    );
    assert_eq!(transactions.transactions.as_ref().map(Vec::len), Some(0));

    let count_status = count.http_context.as_ref().map(|c| c.status.as_u16());
    let list_status = transactions.http_context.as_ref().map(|c| c.status.as_u16());
    assert_eq!(count_status, Some(200));
    assert_eq!(list_status, Some(200));
}
