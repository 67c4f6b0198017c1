//! Customers API

use crate::{
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Links, ListMetadata, ListParams, Mode},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mandate::MandateList;
use super::payment::{Payment, PaymentList, PaymentRequest};

/// Customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerListEmbedded {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Page of customers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerList {
    #[serde(rename = "_embedded", default)]
    pub embedded: CustomerListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl CustomerList {
    /// Customers in this page
    pub fn customers(&self) -> &[Customer] {
        &self.embedded.customers
    }
}

/// Create or update customer request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CustomerRequest {
    /// Empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the preferred locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Attach opaque metadata
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Customer service
#[derive(Debug, Clone)]
pub struct CustomerService {
    transport: Transport,
}

impl CustomerService {
    /// Create a customer service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List customers
    pub async fn list(&self, params: Option<&ListParams>) -> Result<ApiResponse<CustomerList>> {
        self.transport.get_query(&["customers"], params).await
    }

    /// Fetch a customer
    pub async fn fetch(&self, customer_id: &str) -> Result<ApiResponse<Customer>> {
        self.transport
            .get(&["customers", customer_id])
            .await
    }

    /// Create a customer
    pub async fn create(&self, request: &CustomerRequest) -> Result<ApiResponse<Customer>> {
        self.transport.post(&["customers"], request).await
    }

    /// Update a customer
    pub async fn update(
        &self,
        customer_id: &str,
        request: &CustomerRequest,
    ) -> Result<ApiResponse<Customer>> {
        self.transport
            .patch(&["customers", customer_id], request)
            .await
    }

    /// Delete a customer
    ///
    /// Mollie answers `204 No Content`. An empty body with any non-2xx
    /// status is reported as [`Error::Decode`](crate::Error::Decode).
    pub async fn delete(&self, customer_id: &str) -> Result<ApiResponse<()>> {
        self.transport
            .delete(&["customers", customer_id])
            .await
    }

    /// List payments of a customer
    pub async fn payment_list(
        &self,
        customer_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<PaymentList>> {
        self.transport
            .get_query(&["customers", customer_id, "payments"], params)
            .await
    }

    /// Create a payment linked to a customer
    pub async fn create_payment(
        &self,
        customer_id: &str,
        request: &PaymentRequest,
    ) -> Result<ApiResponse<Payment>> {
        self.transport
            .post(&["customers", customer_id, "payments"], request)
            .await
    }

    /// List mandates of a customer
    pub async fn mandate_list(
        &self,
        customer_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<MandateList>> {
        self.transport
            .get_query(&["customers", customer_id, "mandates"], params)
            .await
    }
}
