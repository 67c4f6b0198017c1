//! Orders API
//!
//! Orders bundle order lines with billing details; Mollie creates the
//! underlying payments. Order-scoped payments and refunds live here too.

use crate::{
    amount::Amount,
    config::ClientConfig,
    error::Result,
    transport::{ApiResponse, Transport},
    types::{Address, Links, ListMetadata, ListParams, Mode, SequenceType},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::payment::Payment;
use super::refund::{Refund, RefundList};

/// Order status, also used for order lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Pending,
    Authorized,
    Paid,
    Shipping,
    Completed,
    Canceled,
    Expired,
    #[serde(other)]
    Unknown,
}

/// Kind of order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLineType {
    Physical,
    Discount,
    Digital,
    ShippingFee,
    StoreCredit,
    GiftCard,
    Surcharge,
    #[serde(other)]
    Unknown,
}

/// Order line as returned by Mollie
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(rename = "type", default)]
    pub line_type: Option<OrderLineType>,
    pub name: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub is_cancelable: Option<bool>,
    pub quantity: u32,
    #[serde(default)]
    pub quantity_shipped: Option<u32>,
    #[serde(default)]
    pub quantity_refunded: Option<u32>,
    #[serde(default)]
    pub quantity_canceled: Option<u32>,
    #[serde(default)]
    pub amount_shipped: Option<Amount>,
    #[serde(default)]
    pub amount_refunded: Option<Amount>,
    #[serde(default)]
    pub amount_canceled: Option<Amount>,
    pub unit_price: Amount,
    #[serde(default)]
    pub discount_amount: Option<Amount>,
    pub total_amount: Amount,
    pub vat_rate: String,
    pub vat_amount: Amount,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

/// Sub-resources embedded on request via `embed`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderEmbedded {
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub refunds: Vec<Refund>,
}

/// Order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub resource: String,
    pub id: String,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    pub mode: Mode,
    pub amount: Amount,
    #[serde(default)]
    pub amount_captured: Option<Amount>,
    #[serde(default)]
    pub amount_refunded: Option<Amount>,
    pub status: OrderStatus,
    #[serde(default)]
    pub is_cancelable: Option<bool>,
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub consumer_date_of_birth: Option<NaiveDate>,
    pub order_number: String,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub authorized_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<OrderEmbedded>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Order {
    /// Hosted checkout URL, present while the order can be paid
    pub fn checkout_url(&self) -> Option<&str> {
        self.links.checkout().map(|l| l.href.as_str())
    }

    /// Embedded payments, when fetched with `embed=payments`
    pub fn payments(&self) -> &[Payment] {
        self.embedded.as_ref().map_or(&[], |e| e.payments.as_slice())
    }

    /// Embedded refunds, when fetched with `embed=refunds`
    pub fn refunds(&self) -> &[Refund] {
        self.embedded.as_ref().map_or(&[], |e| e.refunds.as_slice())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListEmbedded {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Page of orders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(rename = "_embedded", default)]
    pub embedded: OrderListEmbedded,
    #[serde(flatten)]
    pub metadata: ListMetadata,
}

impl OrderList {
    /// Orders in this page
    pub fn orders(&self) -> &[Order] {
        &self.embedded.orders
    }
}

/// Order line on create, or a partial line on update.
///
/// Every field is optional so an update sends only what changed. A price
/// of `0.00` is sent as `Some`, never confused with an absent price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<OrderLineType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl OrderLineRequest {
    /// A complete line for order creation
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: Amount,
        total_amount: Amount,
        vat_rate: impl Into<String>,
        vat_amount: Amount,
    ) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            total_amount: Some(total_amount),
            vat_rate: Some(vat_rate.into()),
            vat_amount: Some(vat_amount),
            ..Default::default()
        }
    }

    /// Set the line type
    pub fn line_type(mut self, line_type: OrderLineType) -> Self {
        self.line_type = Some(line_type);
        self
    }

    /// Set the discount applied to this line
    pub fn discount_amount(mut self, amount: Amount) -> Self {
        self.discount_amount = Some(amount);
        self
    }

    /// Set the product SKU
    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }
}

/// Payment-specific parameters of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Create order request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub amount: Amount,
    pub order_number: String,
    pub lines: Vec<OrderLineRequest>,
    pub billing_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<OrderRequestPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl OrderRequest {
    /// Create an order request with its required fields
    pub fn new(
        amount: Amount,
        order_number: impl Into<String>,
        lines: Vec<OrderLineRequest>,
        billing_address: Address,
    ) -> Self {
        Self {
            amount,
            order_number: order_number.into(),
            lines,
            billing_address,
            shipping_address: None,
            consumer_date_of_birth: None,
            redirect_url: None,
            webhook_url: None,
            locale: None,
            method: None,
            payment: None,
            metadata: None,
        }
    }

    /// Set a separate shipping address
    pub fn shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
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

    /// Checkout locale, e.g. `nl_NL`
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Restrict to one payment method
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set payment-specific parameters
    pub fn payment(mut self, payment: OrderRequestPayment) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Attach opaque metadata
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Update order request; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Create a new payment attempt for an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
}

/// Line to refund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRefundLine {
    pub id: String,
    /// Defaults to the full line quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl OrderRefundLine {
    /// Refund all of line `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantity: None,
            amount: None,
        }
    }

    /// Refund only `quantity` units
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// Order refund request.
///
/// An empty `lines` list refunds every line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRefundRequest {
    pub lines: Vec<OrderRefundLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Order service
#[derive(Debug, Clone)]
pub struct OrderService {
    transport: Transport,
}

impl OrderService {
    /// Create an order service
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(access_token, config)?,
        })
    }

    /// List orders
    pub async fn list(&self, params: Option<&ListParams>) -> Result<ApiResponse<OrderList>> {
        self.transport.get_query(&["orders"], params).await
    }

    /// Fetch an order, optionally embedding sub-resources (`payments`,
    /// `refunds`, or both comma-separated)
    pub async fn fetch(&self, order_id: &str, embed: Option<&str>) -> Result<ApiResponse<Order>> {
        let query = embed.map(|embed| [("embed", embed)]);
        self.transport
            .get_query(&["orders", order_id], query.as_ref())
            .await
    }

    /// Create an order
    pub async fn create(&self, request: &OrderRequest) -> Result<ApiResponse<Order>> {
        self.transport.post(&["orders"], request).await
    }

    /// Update an order
    pub async fn update(
        &self,
        order_id: &str,
        request: &OrderUpdateRequest,
    ) -> Result<ApiResponse<Order>> {
        self.transport
            .patch(&["orders", order_id], request)
            .await
    }

    /// Cancel an order, if Mollie still allows it
    pub async fn cancel(&self, order_id: &str) -> Result<ApiResponse<Order>> {
        self.transport.delete(&["orders", order_id]).await
    }

    /// Update one order line; returns the whole order
    pub async fn update_line(
        &self,
        order_id: &str,
        line_id: &str,
        request: &OrderLineRequest,
    ) -> Result<ApiResponse<Order>> {
        self.transport
            .patch(&["orders", order_id, "lines", line_id], request)
            .await
    }

    /// Start a new payment attempt for an order
    pub async fn create_payment(
        &self,
        order_id: &str,
        request: &OrderPaymentRequest,
    ) -> Result<ApiResponse<Payment>> {
        self.transport
            .post(&["orders", order_id, "payments"], request)
            .await
    }

    /// Refund order lines
    pub async fn create_refund(
        &self,
        order_id: &str,
        request: &OrderRefundRequest,
    ) -> Result<ApiResponse<Refund>> {
        self.transport
            .post(&["orders", order_id, "refunds"], request)
            .await
    }

    /// Fetch an order refund
    pub async fn fetch_refund(&self, order_id: &str, refund_id: &str) -> Result<ApiResponse<Refund>> {
        self.transport
            .get(&["orders", order_id, "refunds", refund_id])
            .await
    }

    /// List refunds of an order
    pub async fn refund_list(
        &self,
        order_id: &str,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<RefundList>> {
        self.transport
            .get_query(&["orders", order_id, "refunds"], params)
            .await
    }
}
