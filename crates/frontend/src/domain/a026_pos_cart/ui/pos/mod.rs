//! POS page (MVVM)
//!
//! Structure:
//! - model.rs: checkout API call
//! - view_model.rs: PosVm with the controller signal and form fields
//! - cart_table.rs: cart table and total
//! - view.rs: main component PosPage

mod cart_table;
mod model;
mod view;
mod view_model;

pub use view::PosPage;
pub use view_model::PosVm;
