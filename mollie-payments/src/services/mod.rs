//! Per-resource services
//!
//! Each service owns its own [`Transport`](crate::transport::Transport) and
//! maps one method to one round trip.

mod chargeback;
mod customer;
mod mandate;
mod method;
mod order;
mod payment;
mod refund;
mod subscription;

pub use chargeback::*;
pub use customer::*;
pub use mandate::*;
pub use method::*;
pub use order::*;
pub use payment::*;
pub use refund::*;
pub use subscription::*;
