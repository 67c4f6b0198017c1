//! Typed client for the Mollie v2 payments API
//!
//! Every service method builds a path, attaches an optional query or JSON
//! body, performs exactly one HTTP round trip and decodes either the
//! expected payload or Mollie's error envelope.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            Client                               │
//! │                                                                 │
//! │  methods | payments | customers | mandates | subscriptions      │
//! │  orders | chargebacks                                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │   Transport  (base URL, bearer token, User-Agent, decoding)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//!                  https://api.mollie.com/v2/...
//! ```
//!
//! ## Error precedence
//!
//! 1. A transport failure is returned as [`Error::Transport`].
//! 2. A body carrying a numeric `status` of 300 or above is returned as
//!    [`Error::Api`], even when the HTTP status line was successful.
//! 3. A body matching neither shape is returned as [`Error::Decode`]. An
//!    empty body only counts as `null` on a 2xx status.
//!
//! Identifiers are sent as single percent-encoded path segments; an empty,
//! `.` or `..` id fails with [`Error::Transport`] before anything is sent.
//!
//! Both [`Error::Api`] and [`Error::Decode`] keep the raw response, so the
//! status and headers stay available to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mollie_payments::{Client, ListParams};
//!
//! # async fn run() -> mollie_payments::Result<()> {
//! let client = Client::new("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM")?;
//!
//! let page = client.orders().list(Some(&ListParams::new().limit(10))).await?;
//! for order in page.orders() {
//!     println!("{} {:?} {}", order.id, order.status, order.amount);
//! }
//!
//! match client.payments().fetch("tr_unknown").await {
//!     Err(e) if e.status_code() == Some(404) => println!("gone"),
//!     other => println!("{:?}", other.map(|p| p.data.status)),
//! }
//! # Ok(())
//! # }
//! ```

pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod transport;
pub mod types;

pub use amount::Amount;
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiError, Error, Result};
pub use services::*;
pub use transport::{ApiResponse, Transport};
pub use types::*;
