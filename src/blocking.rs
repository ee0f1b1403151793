//! Blocking variant of the client.
//!
//! Wraps the asynchronous client and a single-threaded runtime; each call
//! drives the matching async operation to completion on the current
//! thread. Request and response semantics are identical to the async
//! client's.
//!
//! Must not be used from inside an async runtime: blocking on one
//! runtime from another panics. Use [`crate::SquareClient`] there
//! instead.

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::{
    config::SquareConfig,
    error::SquareResult,
    models::{
        AccumulateLoyaltyPointsRequest, AccumulateLoyaltyPointsResponse,
        BatchRetrieveOrdersRequest, BatchRetrieveOrdersResponse, CancelSubscriptionResponse,
        CreateOrderRequest, CreateOrderResponse, CreateSubscriptionRequest,
        CreateSubscriptionResponse, ListSubscriptionEventsResponse, ListTransactionsResponse,
        RetrieveInventoryPhysicalCountResponse, RetrieveSubscriptionResponse,
        RetrieveTransactionResponse, SearchSubscriptionsRequest, SearchSubscriptionsResponse,
        SearchTeamMembersRequest, SearchTeamMembersResponse, UpdateInvoiceRequest,
        UpdateInvoiceResponse, UpdateSubscriptionRequest, UpdateSubscriptionResponse,
        V1ListCashDrawerShiftsResponse,
    },
};

/// Blocking Square API client.
#[derive(Debug)]
pub struct SquareClient {
    inner: crate::SquareClient,
    runtime: Runtime,
}

impl SquareClient {
    /// Create a new blocking client from configuration.
    pub fn new(config: &SquareConfig) -> SquareResult<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: crate::SquareClient::new(config)?,
            runtime,
        })
    }

    /// Set the base URL (for testing).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.with_base_url(base_url);
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

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Blocking access to the Subscriptions endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsApi<'a> {
    client: &'a SquareClient,
}

impl SubscriptionsApi<'_> {
    /// Create a subscription for a customer on a plan.
    pub fn create(
        &self,
        body: &CreateSubscriptionRequest,
    ) -> SquareResult<CreateSubscriptionResponse> {
        self.client
            .block_on(self.client.inner.subscriptions().create(body))
    }

    /// Search subscriptions by customer or location.
    pub fn search(
        &self,
        body: &SearchSubscriptionsRequest,
    ) -> SquareResult<SearchSubscriptionsResponse> {
        self.client
            .block_on(self.client.inner.subscriptions().search(body))
    }

    /// Retrieve a subscription by id.
    pub fn retrieve(&self, subscription_id: &str) -> SquareResult<RetrieveSubscriptionResponse> {
        self.client
            .block_on(self.client.inner.subscriptions().retrieve(subscription_id))
    }

    /// Update fields of a subscription.
    pub fn update(
        &self,
        subscription_id: &str,
        body: &UpdateSubscriptionRequest,
    ) -> SquareResult<UpdateSubscriptionResponse> {
        self.client.block_on(
            self.client
                .inner
                .subscriptions()
                .update(subscription_id, body),
        )
    }

    /// Cancel a subscription at the end of its paid-through date.
    pub fn cancel(&self, subscription_id: &str) -> SquareResult<CancelSubscriptionResponse> {
        self.client
            .block_on(self.client.inner.subscriptions().cancel(subscription_id))
    }

    /// List a subscription's events, newest first.
    pub fn list_events(
        &self,
        subscription_id: &str,
        cursor: Option<&str>,
        limit: Option<i32>,
    ) -> SquareResult<ListSubscriptionEventsResponse> {
        self.client.block_on(
            self.client
                .inner
                .subscriptions()
                .list_events(subscription_id, cursor, limit),
        )
    }
}

/// Blocking access to the Orders endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    client: &'a SquareClient,
}

impl OrdersApi<'_> {
    /// Create an order at a location.
    pub fn create(
        &self,
        location_id: &str,
        body: &CreateOrderRequest,
    ) -> SquareResult<CreateOrderResponse> {
        self.client
            .block_on(self.client.inner.orders().create(location_id, body))
    }

    /// Retrieve up to 100 orders by id.
    pub fn batch_retrieve(
        &self,
        location_id: &str,
        body: &BatchRetrieveOrdersRequest,
    ) -> SquareResult<BatchRetrieveOrdersResponse> {
        self.client
            .block_on(self.client.inner.orders().batch_retrieve(location_id, body))
    }
}

/// Blocking access to the Invoices endpoints.
#[derive(Debug, Clone, Copy)]
pub struct InvoicesApi<'a> {
    client: &'a SquareClient,
}

impl InvoicesApi<'_> {
    /// Update a draft invoice.
    pub fn update(
        &self,
        invoice_id: &str,
        body: &UpdateInvoiceRequest,
    ) -> SquareResult<UpdateInvoiceResponse> {
        self.client
            .block_on(self.client.inner.invoices().update(invoice_id, body))
    }
}

/// Blocking access to the Inventory endpoints.
#[derive(Debug, Clone, Copy)]
pub struct InventoryApi<'a> {
    client: &'a SquareClient,
}

impl InventoryApi<'_> {
    /// Retrieve a physical count by id.
    pub fn retrieve_physical_count(
        &self,
        physical_count_id: &str,
    ) -> SquareResult<RetrieveInventoryPhysicalCountResponse> {
        self.client.block_on(
            self.client
                .inner
                .inventory()
                .retrieve_physical_count(physical_count_id),
        )
    }
}

/// Blocking access to the Loyalty endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LoyaltyApi<'a> {
    client: &'a SquareClient,
}

impl LoyaltyApi<'_> {
    /// Add points to a loyalty account for a purchase.
    pub fn accumulate_points(
        &self,
        account_id: &str,
        body: &AccumulateLoyaltyPointsRequest,
    ) -> SquareResult<AccumulateLoyaltyPointsResponse> {
        self.client.block_on(
            self.client
                .inner
                .loyalty()
                .accumulate_points(account_id, body),
        )
    }
}

/// Blocking access to the Team members endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TeamMembersApi<'a> {
    client: &'a SquareClient,
}

impl TeamMembersApi<'_> {
    /// Search team members by location assignment and status.
    pub fn search(
        &self,
        body: &SearchTeamMembersRequest,
    ) -> SquareResult<SearchTeamMembersResponse> {
        self.client
            .block_on(self.client.inner.team_members().search(body))
    }
}

/// Blocking access to the Transactions endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TransactionsApi<'a> {
    client: &'a SquareClient,
}

impl TransactionsApi<'_> {
    /// List transactions processed at a location.
    pub fn list(
        &self,
        location_id: &str,
        sort_order: Option<&str>,
        begin_time: Option<&str>,
        end_time: Option<&str>,
        cursor: Option<&str>,
    ) -> SquareResult<ListTransactionsResponse> {
        self.client.block_on(self.client.inner.transactions().list(
            location_id,
            sort_order,
            begin_time,
            end_time,
            cursor,
        ))
    }

    /// Retrieve a transaction by id.
    pub fn retrieve(
        &self,
        location_id: &str,
        transaction_id: &str,
    ) -> SquareResult<RetrieveTransactionResponse> {
        self.client.block_on(
            self.client
                .inner
                .transactions()
                .retrieve(location_id, transaction_id),
        )
    }
}

/// Blocking access to the v1 Cash drawers endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CashDrawersApi<'a> {
    client: &'a SquareClient,
}

impl CashDrawersApi<'_> {
    /// List a location's cash drawer shifts.
    pub fn list_shifts(
        &self,
        location_id: &str,
        order: Option<&str>,
        begin_time: Option<&str>,
        end_time: Option<&str>,
    ) -> SquareResult<V1ListCashDrawerShiftsResponse> {
        self.client.block_on(self.client.inner.cash_drawers().list_shifts(
            location_id,
            order,
            begin_time,
            end_time,
        ))
    }
}
