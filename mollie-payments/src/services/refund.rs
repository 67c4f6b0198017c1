//! Refunds, shared by the payment and order endpoints

use crate::{
    amount::Amount,
    types::{Links, ListMetadata},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::OrderLine;

/// Refund status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Queued,
    Pending,
    Processing,
    Refunded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

/// Refund
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub status: RefundStatus,
    /// Refunded order lines, for order refunds
    #[serde(default)]
    pub lines: Option<Vec<OrderLine>>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundListEmbedded {
    #[serde(default)]
    pub refunds: Vec<Refund>,
}

/// Page of refunds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefundList {
    #[serde(rename = "_embedded", default)]
    pub embedded: RefundListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl RefundList {
    /// Refunds in this page
    pub fn refunds(&self) -> &[Refund] {
        &self.embedded.refunds
    }
}

/// Payment refund request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl RefundRequest {
    /// Refund `amount`
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            description: None,
            metadata: None,
        }
    }

    /// Set the description shown on the bank statement
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach opaque metadata
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
