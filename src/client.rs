//! HTTP client for the orders REST API.
//!
//! Two endpoints are used:
//! - `GET {base}/api/orders` returns the full order list.
//! - `PATCH {base}/api/orders/{id}/complete` with `{"status": ...}` sets
//!   the completion status of one order.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::Result;
use crate::models::{Order, OrderStatus, UpdateStatusRequest, decode_orders};

/// Upper bound for a single request so a hung backend cannot stall a poll.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper around a [`reqwest::Client`] bound to one backend.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: reqwest::Client,
    base: Url,
}

impl OrdersClient {
    /// Builds a client for `base_url` using the given TLS configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDeskError::Config`](crate::OrderDeskError::Config) if
    /// `base_url` is not an absolute http(s) URL, and
    /// [`OrderDeskError::Tls`](crate::OrderDeskError::Tls) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, tls_config: rustls::ClientConfig) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| {
            crate::OrderDeskError::Config(format!("invalid API URL {base_url:?}: {e}"))
        })?;
        if base.cannot_be_a_base() {
            return Err(crate::OrderDeskError::Config(format!(
                "API URL {base_url:?} cannot carry a path"
            )));
        }

        let http = reqwest::Client::builder()
            .use_preconfigured_tls(tls_config)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| crate::OrderDeskError::Tls(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetches the order list, leaving out records that fail to decode.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDeskError::Http`](crate::OrderDeskError::Http) on a
    /// transport failure or non-2xx status, and
    /// [`OrderDeskError::Json`](crate::OrderDeskError::Json) if the body is
    /// not a JSON array.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        let url = self.endpoint(&["api", "orders"]);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let orders = decode_orders(&body)?;
        debug!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    /// Writes a new status for one order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDeskError::Rejected`](crate::OrderDeskError::Rejected)
    /// carrying the response text if the backend answers with a non-2xx
    /// status, or [`OrderDeskError::Http`](crate::OrderDeskError::Http) on a
    /// transport failure.
    pub async fn set_status(&self, order_id: &str, status: OrderStatus) -> Result<()> {
        let url = self.endpoint(&["api", "orders", order_id, "complete"]);
        let response = self
            .http
            .patch(url)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;

        let code = response.status();
        if !code.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(crate::OrderDeskError::Rejected {
                status: code.as_u16(),
                message,
            });
        }

        debug!(order_id, %status, "order status written");
        Ok(())
    }
}
