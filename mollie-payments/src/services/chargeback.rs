//! Chargebacks API

use crate::{
    amount::Amount,
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Links, ListMetadata, ListParams},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Chargeback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reversed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Chargeback {
    /// Check if the chargeback was reversed
    pub fn is_reversed(&self) -> bool {
        self.reversed_at.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargebackListEmbedded {
    #[serde(default)]
    pub chargebacks: Vec<Chargeback>,
}

/// Page of chargebacks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargebackList {
    #[serde(rename = "_embedded", default)]
    pub embedded: ChargebackListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl ChargebackList {
    /// Chargebacks in this page
    pub fn chargebacks(&self) -> &[Chargeback] {
        &self.embedded.chargebacks
    }
}

/// Chargeback service
#[derive(Debug, Clone)]
pub struct ChargebackService {
    transport: Transport,
}

impl ChargebackService {
    /// Create a chargeback service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List chargebacks of a payment
    pub async fn list(
        &self,
        payment_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<ChargebackList>> {
        self.transport
            .get_query(&["payments", payment_id, "chargebacks"], params)
            .await
    }

    /// Fetch a chargeback of a payment
    pub async fn fetch(
        &self,
        payment_id: &str,
        chargeback_id: &str,
    ) -> Result<ApiResponse<Chargeback>> {
        self.transport
            .get(&["payments", payment_id, "chargebacks", chargeback_id])
            .await
    }

    /// List chargebacks across all payments
    pub async fn list_all(&self, params: Option<&ListParams>) -> Result<ApiResponse<ChargebackList>> {
        self.transport.get_query(&["chargebacks"], params).await
    }
}
