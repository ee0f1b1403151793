//! Typed Rust client for the Square commerce API.
//!
//! Every operation follows the same marshaling contract: a request model is
//! serialized to JSON, dispatched over HTTPS with bearer auth and a
//! `Square-Version` header, and the response body is deserialized into a
//! typed response model carrying the status and headers of the exchange.
//!
//! Models are plain immutable values. Each one is constructed through a
//! fluent builder (required fields up front, optional fields via setters)
//! and copied-and-modified through `to_builder()`.
//!
//! ## Example
//!
//! ```no_run
//! use square_api::{models::CreateSubscriptionRequest, SquareClient, SquareConfig};
//!
//! # async fn run() -> square_api::SquareResult<()> {
//! let config = SquareConfig::from_env()?;
//! let client = SquareClient::new(&config)?;
//!
//! let request = CreateSubscriptionRequest::builder(
//!     "8193148c-9586-11e6-99f9-28cfe92138cf",
//!     "S8GWD5R9QB376",
//!     "6JHXF3B2CW3YKHDV4XEM674H",
//!     "CHFGVKYY8RSV93M5KCYTG4PN0G",
//! )
//! .timezone("America/Los_Angeles")
//! .build();
//!
//! let response = client.subscriptions().create(&request).await?;
//! println!("created: {:?}", response.subscription);
//! # Ok(())
//! # }
//! ```
//!
//! A blocking variant of the client lives in [`blocking`].

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod apis;
pub mod blocking;
mod client;
mod config;
mod error;
mod http;
mod macros;
pub mod models;

pub use client::SquareClient;
pub use config::{Environment, RetryConfig, SquareConfig, DEFAULT_SQUARE_VERSION};
pub use error::{SquareError, SquareResult};
pub use http::{ApiResponseBody, HttpContext};
