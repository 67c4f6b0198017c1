// Mollie - a typed client for the Mollie payments API
//
// This library re-exports the service layer and the HTTP request builder it
// sits on, so applications only need a single dependency.

// Re-export the service layer
pub use mollie_payments::*;

// Re-export the HTTP layer
pub use mollie_http;

pub mod prelude {
    pub use crate::{
        Address, Amount, ApiError, ApiResponse, Client, ClientConfig, Error, ListParams, Mode,
        Result, SequenceType,
    };

    pub use crate::{
        ChargebackService, CustomerRequest, CustomerService, MandateRequest, MandateService,
        MethodListParams, MethodService, OrderLineRequest, OrderRequest, OrderService,
        OrderUpdateRequest, PaymentRequest, PaymentService, PaymentUpdateRequest, RefundRequest,
        SubscriptionRequest, SubscriptionService,
    };
}
