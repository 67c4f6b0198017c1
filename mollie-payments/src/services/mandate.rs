//! Mandates API
//!
//! A mandate lets a customer be charged for recurring payments.

use crate::{
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Links, ListMetadata, ListParams, Mode},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mandate status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MandateStatus {
    Valid,
    Pending,
    Invalid,
    #[serde(other)]
    Unknown,
}

/// Method-specific mandate details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandateDetails {
    #[serde(default)]
    pub consumer_name: Option<String>,
    #[serde(default)]
    pub consumer_account: Option<String>,
    #[serde(default)]
    pub consumer_bic: Option<String>,
    #[serde(default)]
    pub card_holder: Option<String>,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_label: Option<String>,
    #[serde(default)]
    pub card_fingerprint: Option<String>,
    #[serde(default)]
    pub card_expiry_date: Option<String>,
}

/// Mandate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mandate {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub status: MandateStatus,
    pub method: String,
    #[serde(default)]
    pub details: MandateDetails,
    #[serde(default)]
    pub mandate_reference: Option<String>,
    #[serde(default)]
    pub signature_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MandateListEmbedded {
    #[serde(default)]
    pub mandates: Vec<Mandate>,
}

/// Page of mandates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MandateList {
    #[serde(rename = "_embedded", default)]
    pub embedded: MandateListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl MandateList {
    /// Mandates in this page
    pub fn mandates(&self) -> &[Mandate] {
        &self.embedded.mandates
    }
}

/// Create mandate request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandateRequest {
    pub method: String,
    pub consumer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_billing_agreement_id: Option<String>,
}

impl MandateRequest {
    /// Create a mandate request
    pub fn new(method: impl Into<String>, consumer_name: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            consumer_name: consumer_name.into(),
            consumer_account: None,
            consumer_bic: None,
            consumer_email: None,
            signature_date: None,
            mandate_reference: None,
            paypal_billing_agreement_id: None,
        }
    }

    /// SEPA direct debit mandate for an IBAN
    pub fn direct_debit(consumer_name: impl Into<String>, iban: impl Into<String>) -> Self {
        let mut request = Self::new("directdebit", consumer_name);
        request.consumer_account = Some(iban.into());
        request
    }

    /// Set the date the mandate was signed
    pub fn signature_date(mut self, date: NaiveDate) -> Self {
        self.signature_date = Some(date);
        self
    }

    /// Set a custom mandate reference
    pub fn mandate_reference(mut self, reference: impl Into<String>) -> Self {
        self.mandate_reference = Some(reference.into());
        self
    }
}

/// Mandate service
#[derive(Debug, Clone)]
pub struct MandateService {
    transport: Transport,
}

impl MandateService {
    /// Create a mandate service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List mandates of a customer
    pub async fn list(
        &self,
        customer_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<MandateList>> {
        self.transport
            .get_query(&["customers", customer_id, "mandates"], params)
            .await
    }

    /// Fetch a mandate
    pub async fn fetch(&self, customer_id: &str, mandate_id: &str) -> Result<ApiResponse<Mandate>> {
        self.transport
            .get(&["customers", customer_id, "mandates", mandate_id])
            .await
    }

    /// Create a mandate
    pub async fn create(
        &self,
        customer_id: &str,
        request: &MandateRequest,
    ) -> Result<ApiResponse<Mandate>> {
        self.transport
            .post(&["customers", customer_id, "mandates"], request)
            .await
    }

    /// Revoke a mandate
    ///
    /// An empty body only counts as success on a 2xx status.
    pub async fn revoke(&self, customer_id: &str, mandate_id: &str) -> Result<ApiResponse<()>> {
        self.transport
            .delete(&["customers", customer_id, "mandates", mandate_id])
            .await
    }
}
