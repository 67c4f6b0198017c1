//! Payments API
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | GET | `/v2/payments` |
//! | GET | `/v2/payments/{id}` |
//! | POST | `/v2/payments` |
//! | PATCH | `/v2/payments/{id}` |
//! | DELETE | `/v2/payments/{id}` |
//! | POST / GET | `/v2/payments/{id}/refunds` |
//! | GET / DELETE | `/v2/payments/{id}/refunds/{refund_id}` |

use crate::{
    amount::Amount,
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Links, ListMetadata, ListParams, Mode, SequenceType},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::refund::{Refund, RefundList, RefundRequest};

/// Payment status, as last reported by Mollie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Open,
    Canceled,
    Pending,
    Authorized,
    Expired,
    Failed,
    Paid,
    /// Any status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Application fee charged on a payment created through Mollie Connect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFee {
    pub amount: Amount,
    pub description: String,
}

/// Payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub is_cancelable: Option<bool>,
    #[serde(default)]
    pub authorized_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failed_at: Option<DateTime<Utc>>,
    pub amount: Amount,
    #[serde(default)]
    pub amount_refunded: Option<Amount>,
    #[serde(default)]
    pub amount_remaining: Option<Amount>,
    #[serde(default)]
    pub amount_captured: Option<Amount>,
    #[serde(default)]
    pub amount_charged_back: Option<Amount>,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    /// Method-specific details, passed through untouched
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    /// Caller-defined metadata, passed through untouched
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub settlement_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub sequence_type: Option<SequenceType>,
    #[serde(default)]
    pub mandate_id: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub application_fee: Option<ApplicationFee>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Payment {
    /// Hosted checkout URL, present while the payment is open
    pub fn checkout_url(&self) -> Option<&str> {
        self.links.checkout().map(|l| l.href.as_str())
    }
}

/// Payments embedded in a list response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentListEmbedded {
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Page of payments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentList {
    #[serde(rename = "_embedded", default)]
    pub embedded: PaymentListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl PaymentList {
    /// Payments in this page
    pub fn payments(&self) -> &[Payment] {
        &self.embedded.payments
    }
}

/// Create payment request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: Amount,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
}

impl PaymentRequest {
    /// Create a payment request
    pub fn new(amount: Amount, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            redirect_url: None,
            cancel_url: None,
            webhook_url: None,
            locale: None,
            method: None,
            issuer: None,
            metadata: None,
            sequence_type: None,
            customer_id: None,
            mandate_id: None,
        }
    }

    /// Where the customer lands after checkout
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Where Mollie posts status changes
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Checkout locale, e.g. `en_US`
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Restrict to one payment method
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Attach opaque metadata
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the recurring sequence type
    pub fn sequence_type(mut self, sequence_type: SequenceType) -> Self {
        self.sequence_type = Some(sequence_type);
        self
    }

    /// Charge on behalf of a customer
    pub fn customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Charge against a mandate
    pub fn mandate(mut self, mandate_id: impl Into<String>) -> Self {
        self.mandate_id = Some(mandate_id.into());
        self
    }
}

/// Update payment request; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Payment service
#[derive(Debug, Clone)]
pub struct PaymentService {
    transport: Transport,
}

impl PaymentService {
    /// Create a payment service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List payments
    pub async fn list(&self, params: Option<&ListParams>) -> Result<ApiResponse<PaymentList>> {
        self.transport.get_query(&["payments"], params).await
    }

    /// Fetch a payment
    pub async fn fetch(&self, payment_id: &str) -> Result<ApiResponse<Payment>> {
        self.transport.get(&["payments", payment_id]).await
    }

    /// Create a payment
    pub async fn create(&self, request: &PaymentRequest) -> Result<ApiResponse<Payment>> {
        self.transport.post(&["payments"], request).await
    }

    /// Update a payment
    pub async fn update(
        &self,
        payment_id: &str,
        request: &PaymentUpdateRequest,
    ) -> Result<ApiResponse<Payment>> {
        self.transport
            .patch(&["payments", payment_id], request)
            .await
    }

    /// Cancel a payment, if Mollie still allows it
    pub async fn cancel(&self, payment_id: &str) -> Result<ApiResponse<Payment>> {
        self.transport
            .delete(&["payments", payment_id])
            .await
    }

    /// Refund (part of) a payment
    pub async fn create_refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<ApiResponse<Refund>> {
        self.transport
            .post(&["payments", payment_id, "refunds"], request)
            .await
    }

    /// Fetch a payment refund
    pub async fn fetch_refund(
        &self,
        payment_id: &str,
        refund_id: &str,
    ) -> Result<ApiResponse<Refund>> {
        self.transport
            .get(&["payments", payment_id, "refunds", refund_id])
            .await
    }

    /// List refunds of a payment
    pub async fn refund_list(
        &self,
        payment_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<RefundList>> {
        self.transport
            .get_query(&["payments", payment_id, "refunds"], params)
            .await
    }

    /// Cancel a queued or pending refund
    ///
    /// Succeeds on `204 No Content`; an empty 404 or 500 is an
    /// [`Error::Decode`](crate::Error::Decode).
    pub async fn cancel_refund(&self, payment_id: &str, refund_id: &str) -> Result<ApiResponse<()>> {
        self.transport
            .delete(&["payments", payment_id, "refunds", refund_id])
            .await
    }
}
