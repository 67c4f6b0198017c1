//! Subscriptions API
//!
//! Recurring payments on a fixed interval, scoped to a customer.

use crate::{
    amount::Amount,
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Links, ListMetadata, ListParams, Mode},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Pending,
    Active,
    Canceled,
    Suspended,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub created_at: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub amount: Amount,
    /// Total number of charges; `None` means indefinitely
    #[serde(default)]
    pub times: Option<u32>,
    #[serde(default)]
    pub times_remaining: Option<u32>,
    /// Interval such as `1 month` or `14 days`
    pub interval: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub mandate_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionListEmbedded {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

/// Page of subscriptions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionList {
    #[serde(rename = "_embedded", default)]
    pub embedded: SubscriptionListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl SubscriptionList {
    /// Subscriptions in this page
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.embedded.subscriptions
    }
}

/// Create subscription request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub amount: Amount,
    pub interval: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl SubscriptionRequest {
    /// Create a subscription request
    pub fn new(amount: Amount, interval: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount,
            interval: interval.into(),
            description: description.into(),
            times: None,
            start_date: None,
            method: None,
            mandate_id: None,
            webhook_url: None,
            metadata: None,
        }
    }

    /// Stop after `times` charges
    pub fn times(mut self, times: u32) -> Self {
        self.times = Some(times);
        self
    }

    /// First charge date
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Charge against a specific mandate
    pub fn mandate(mut self, mandate_id: impl Into<String>) -> Self {
        self.mandate_id = Some(mandate_id.into());
        self
    }

    /// Where Mollie posts payment status changes
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }
}

/// Update subscription request; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Subscription service
#[derive(Debug, Clone)]
pub struct SubscriptionService {
    transport: Transport,
}

impl SubscriptionService {
    /// Create a subscription service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List subscriptions of a customer
    pub async fn list(
        &self,
        customer_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<SubscriptionList>> {
        self.transport
            .get_query(&["customers", customer_id, "subscriptions"], params)
            .await
    }

    /// Fetch a subscription
    pub async fn fetch(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<ApiResponse<Subscription>> {
        self.transport
            .get(&["customers", customer_id, "subscriptions", subscription_id])
            .await
    }

    /// Create a subscription
    pub async fn create(
        &self,
        customer_id: &str,
        request: &SubscriptionRequest,
    ) -> Result<ApiResponse<Subscription>> {
        self.transport
            .post(&["customers", customer_id, "subscriptions"], request)
            .await
    }

    /// Update a subscription
    pub async fn update(
        &self,
        customer_id: &str,
        subscription_id: &str,
        request: &SubscriptionUpdateRequest,
    ) -> Result<ApiResponse<Subscription>> {
        self.transport
            .patch(
                &["customers", customer_id, "subscriptions", subscription_id],
                request,
            )
            .await
    }

    /// Cancel a subscription; returns it in its canceled state
    pub async fn cancel(
        &self,
        customer_id: &str,
        subscription_id: &str,
    ) -> Result<ApiResponse<Subscription>> {
        self.transport
            .delete(&["customers", customer_id, "subscriptions", subscription_id])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_request() {
        let request = SubscriptionRequest::new(
            Amount::eur("25.00").unwrap(),
            "1 month",
            "Quarterly payment",
        )
        .times(4);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "amount": {"currency": "EUR", "value": "25.00"},
                "interval": "1 month",
                "description": "Quarterly payment",
                "times": 4
            })
        );
    }

    #[test]
    fn test_subscription_decode() {
        let subscription: Subscription = serde_json::from_value(serde_json::json!({
            "resource": "subscription",
            "id": "sub_rVKGtNd6s3",
            "mode": "live",
            "createdAt": "2016-06-01T12:23:34+00:00",
            "status": "active",
            "amount": {"value": "25.00", "currency": "EUR"},
            "times": 4,
            "timesRemaining": 4,
            "interval": "3 months",
            "startDate": "2016-06-01",
            "nextPaymentDate": "2016-09-01",
            "description": "Quarterly payment",
            "method": null,
            "mandateId": "mdt_38HS4fsS",
            "webhookUrl": "https://webshop.example.org/payments/webhook",
            "metadata": {"plan": "small"}
        }))
        .unwrap();

        assert_eq!(subscription.status, SubscriptionStatus::Active);
        assert_eq!(subscription.times_remaining, Some(4));
        assert!(subscription.method.is_none());
        assert!(subscription.canceled_at.is_none());
        assert_eq!(
            subscription.next_payment_date,
            NaiveDate::from_ymd_opt(2016, 9, 1)
        );
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let request = SubscriptionUpdateRequest {
            times: Some(12),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"times": 12})
        );
    }
}
