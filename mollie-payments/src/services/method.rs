//! Methods API

use crate::{
    amount::Amount,
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Links, ListMetadata, SequenceType},
};
use serde::{Deserialize, Serialize};

/// Method icon URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodImage {
    #[serde(default)]
    pub size1x: String,
    #[serde(default)]
    pub size2x: String,
    #[serde(default)]
    pub svg: String,
}

/// Payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    #[serde(default)]
    pub resource: String,
    /// Method identifier, e.g. `ideal`
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub minimum_amount: Option<Amount>,
    #[serde(default)]
    pub maximum_amount: Option<Amount>,
    #[serde(default)]
    pub image: MethodImage,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodListEmbedded {
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// Enabled methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodList {
    #[serde(rename = "_embedded", default)]
    pub embedded: MethodListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl MethodList {
    /// Methods in this list
    pub fn methods(&self) -> &[Method] {
        &self.embedded.methods
    }
}

/// Filters for listing methods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodListParams {
    /// Only methods usable for this sequence type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,
    /// Translate descriptions, e.g. `de_DE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Only methods that support `amount[currency]`
    #[serde(rename = "amount[currency]", skip_serializing_if = "Option::is_none")]
    pub amount_currency: Option<String>,
    /// Only methods that support `amount[value]`
    #[serde(rename = "amount[value]", skip_serializing_if = "Option::is_none")]
    pub amount_value: Option<String>,
    /// `payments` or `orders`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
}

impl MethodListParams {
    /// Empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only methods that support `amount`
    pub fn amount(mut self, amount: &Amount) -> Self {
        self.amount_currency = Some(amount.currency.clone());
        self.amount_value = Some(amount.value.to_string());
        self
    }

    /// Only methods for this sequence type
    pub fn sequence_type(mut self, sequence_type: SequenceType) -> Self {
        self.sequence_type = Some(sequence_type);
        self
    }

    /// Only methods usable for `payments` or `orders`
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Translate descriptions
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Method service
#[derive(Debug, Clone)]
pub struct MethodService {
    transport: Transport,
}

impl MethodService {
    /// Create a method service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List methods enabled on the profile
    pub async fn list(&self, params: Option<&MethodListParams>) -> Result<ApiResponse<MethodList>> {
        self.transport.get_query(&["methods"], params).await
    }

    /// Fetch a single method
    pub async fn fetch(&self, method_id: &str) -> Result<ApiResponse<Method>> {
        self.transport.get(&["methods", method_id]).await
    }
}
