//! Top-level client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::services::{
    ChargebackService, CustomerService, MandateService, MethodService, OrderService,
    PaymentService, SubscriptionService,
};
use tracing::debug;

/// Mollie API client.
///
/// Bundles one instance of every service, all bound to the same access
/// token. The token cannot be changed afterwards; build a new client to
/// rotate it.
///
/// ```rust,no_run
/// use mollie_payments::{Amount, Client, PaymentRequest};
///
/// # async fn run() -> mollie_payments::Result<()> {
/// let client = Client::new("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM")?;
/// let request = PaymentRequest::new(Amount::eur("10.00")?, "Order #12345")
///     .redirect_url("https://webshop.example.org/order/12345/");
///
/// let payment = client.payments().create(&request).await?;
/// println!("checkout at {:?}", payment.checkout_url());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    methods: MethodService,
    payments: PaymentService,
    customers: CustomerService,
    mandates: MandateService,
    subscriptions: SubscriptionService,
    orders: OrderService,
    chargebacks: ChargebackService,
}

impl Client {
    /// Create a client for the production API
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(access_token, ClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let token = access_token.into();
        debug!(endpoint = %config.endpoint(), "Creating Mollie client");

        Ok(Self {
            methods: MethodService::new(token.as_str(), &config)?,
            payments: PaymentService::new(token.as_str(), &config)?,
            customers: CustomerService::new(token.as_str(), &config)?,
            mandates: MandateService::new(token.as_str(), &config)?,
            subscriptions: SubscriptionService::new(token.as_str(), &config)?,
            orders: OrderService::new(token.as_str(), &config)?,
            chargebacks: ChargebackService::new(token, &config)?,
        })
    }

    /// Payment methods
    pub fn methods(&self) -> &MethodService {
        &self.methods
    }

    /// Payments and their refunds
    pub fn payments(&self) -> &PaymentService {
        &self.payments
    }

    /// Customers
    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }

    /// Customer mandates
    pub fn mandates(&self) -> &MandateService {
        &self.mandates
    }

    /// Customer subscriptions
    pub fn subscriptions(&self) -> &SubscriptionService {
        &self.subscriptions
    }

    /// Orders, their payments and refunds
    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    /// Chargebacks
    pub fn chargebacks(&self) -> &ChargebackService {
        &self.chargebacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_new_client() {
        assert!(Client::new("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM").is_ok());
    }

    #[test]
    fn test_bad_config() {
        let config = ClientConfig::builder().base_url("::nope").build();
        assert!(matches!(
            Client::with_config("test_x", config),
            Err(Error::Config(_))
        ));
    }
}
