//! Endpoint groups, one module per API surface.
//!
//! Each group is a borrow handle created from
//! [`SquareClient`](crate::SquareClient), e.g.
//! `client.subscriptions().retrieve("...")`. Groups hold no state of
//! their own.

mod cash_drawers;
mod inventory;
mod invoices;
mod loyalty;
mod orders;
mod subscriptions;
mod team_members;
mod transactions;

pub use cash_drawers::CashDrawersApi;
pub use inventory::InventoryApi;
pub use invoices::InvoicesApi;
pub use loyalty::LoyaltyApi;
pub use orders::OrdersApi;
pub use subscriptions::SubscriptionsApi;
pub use team_members::TeamMembersApi;
pub use transactions::TransactionsApi;
