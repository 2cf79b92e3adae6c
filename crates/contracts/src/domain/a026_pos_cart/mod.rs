pub mod aggregate;
pub mod checkout;
pub mod input;

pub use aggregate::{Cart, CartError, CartLine, UNKNOWN_MATERIAL_NAME};
pub use checkout::{CheckoutRequest, CheckoutResponse, LowStockEntry};
