//! Cart controller: owns the cart and the checkout busy flag.
//!
//! No signals and no DOM here. The page view model wraps a controller in a
//! signal and forwards UI events to it; the table is a pure projection of
//! the controller state.

use crate::layout::notification_service::Notice;
use crate::shared::components::table::{format_currency, format_money, format_quantity};
use contracts::domain::a025_material::MaterialCatalog;
use contracts::domain::a026_pos_cart::input::{parse_quantity, parse_unit_price};
use contracts::domain::a026_pos_cart::{
    Cart, CartError, CartLine, CheckoutRequest, CheckoutResponse,
};

pub const CHECKOUT_SUCCESS_TEXT: &str = "✅ Checkout complete! Sale recorded successfully.";
pub const CHECKOUT_FAILED_PREFIX: &str = "❌ Checkout failed: ";
pub const CHECKOUT_UNKNOWN_ERROR: &str = "Unknown error";
pub const LOW_STOCK_PREFIX: &str = "⚠️ Low stock:\n";
pub const NETWORK_ERROR_TEXT: &str = "⚠️ Network or server error while checking out.";

/// One rendered row of the cart table
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub index: usize,
    pub material_id: String,
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartTable {
    pub rows: Vec<CartRow>,
    /// Grand total without currency symbol, e.g. `300.00`
    pub total: String,
}

/// What the page has to do once a checkout attempt is over.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub notices: Vec<Notice>,
    /// Reload the page once the notices are acknowledged
    pub reload: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartController {
    cart: Cart,
    in_flight: bool,
}

impl CartController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// A checkout request is on the wire
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Adds a line from raw form values.
    ///
    /// Bad numbers are not errors: quantity falls back to 1 and price to 0.
    /// The only rejection is a missing material.
    pub fn add_item(
        &mut self,
        material_id: &str,
        quantity_text: &str,
        price_text: &str,
        catalog: &MaterialCatalog,
    ) -> Result<(), CartError> {
        let quantity = parse_quantity(quantity_text);
        let unit_price = parse_unit_price(price_text);
        self.cart
            .add(material_id, quantity, unit_price, |id| catalog.name_of(id))?;
        log::debug!(
            "cart: added {} x {} @ {} ({} lines)",
            material_id,
            quantity,
            unit_price,
            self.cart.len()
        );
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<CartLine, CartError> {
        match self.cart.remove(index) {
            Ok(line) => {
                log::debug!("cart: removed line {} ({})", index, line.material_id);
                Ok(line)
            }
            Err(e) => {
                log::warn!("cart: {}", e);
                Err(e)
            }
        }
    }

    pub fn render_cart(&self, currency: &str) -> CartTable {
        let rows = self
            .cart
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| CartRow {
                index,
                material_id: line.material_id.clone(),
                name: line.name.clone(),
                quantity: format_quantity(line.quantity),
                unit_price: format_currency(line.unit_price, currency),
                subtotal: format_currency(line.subtotal(), currency),
            })
            .collect();

        CartTable {
            rows,
            total: format_money(self.cart.total()),
        }
    }

    /// Switches to in-flight and returns the payload to send.
    pub fn begin_checkout(&mut self) -> Result<CheckoutRequest, CartError> {
        if self.in_flight {
            return Err(CartError::CheckoutInFlight);
        }
        let request = self.cart.to_checkout_request()?;
        self.in_flight = true;
        log::info!(
            "checkout: sending {} lines, total {}",
            request.items.len(),
            request.total
        );
        Ok(request)
    }

    /// Applies the server's answer (or the transport error) and goes idle.
    pub fn finish_checkout(&mut self, result: Result<CheckoutResponse, String>) -> CheckoutOutcome {
        self.in_flight = false;

        match result {
            Ok(response) if response.success => {
                let mut notices = vec![Notice::success(CHECKOUT_SUCCESS_TEXT)];
                if let Some(summary) = response.low_stock_summary() {
                    log::warn!("checkout: low stock: {}", summary);
                    notices.push(Notice::warning(format!("{}{}", LOW_STOCK_PREFIX, summary)));
                }
                self.cart.clear();
                log::info!("checkout: sale recorded");
                CheckoutOutcome { notices, reload: true }
            }
            Ok(response) => {
                let message = response
                    .failure_message()
                    .unwrap_or(CHECKOUT_UNKNOWN_ERROR)
                    .to_string();
                log::warn!("checkout: rejected by server: {}", message);
                CheckoutOutcome {
                    notices: vec![Notice::error(format!("{}{}", CHECKOUT_FAILED_PREFIX, message))],
                    reload: false,
                }
            }
            Err(e) => {
                log::error!("checkout: request failed: {}", e);
                CheckoutOutcome {
                    notices: vec![Notice::error(NETWORK_ERROR_TEXT)],
                    reload: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::notification_service::NoticeLevel;
    use contracts::domain::a025_material::Material;
    use contracts::domain::a026_pos_cart::LowStockEntry;

    fn catalog() -> MaterialCatalog {
        MaterialCatalog::from(vec![
            Material::new("M1", "Cement"),
            Material::new("M2", "Sand"),
        ])
    }

    fn with_cement() -> CartController {
        let mut controller = CartController::new();
        controller.add_item("M1", "2", "150.00", &catalog()).unwrap();
        controller
    }

    #[test]
    fn test_add_and_render() {
        let controller = with_cement();
        let table = controller.render_cart("₱");
        assert_eq!(
            table.rows,
            vec![CartRow {
                index: 0,
                material_id: "M1".into(),
                name: "Cement".into(),
                quantity: "2".into(),
                unit_price: "₱150.00".into(),
                subtotal: "₱300.00".into(),
            }]
        );
        assert_eq!(table.total, "300.00");
    }

    #[test]
    fn test_add_with_bad_numbers_uses_defaults() {
        let mut controller = CartController::new();
        controller.add_item("M2", "lots", "", &catalog()).unwrap();
        let line = &controller.cart().lines()[0];
        assert_eq!(line.quantity, 1.0);
        assert_eq!(line.unit_price, 0.0);
        assert_eq!(controller.render_cart("₱").total, "0.00");
    }

    #[test]
    fn test_add_without_material_is_rejected() {
        let mut controller = CartController::new();
        assert_eq!(
            controller.add_item("", "1", "1", &catalog()),
            Err(CartError::NoMaterialSelected)
        );
        assert!(controller.cart().is_empty());
    }

    #[test]
    fn test_repeat_add_merges_lines() {
        let mut controller = with_cement();
        controller.add_item("M1", "1", "140", &catalog()).unwrap();
        let table = controller.render_cart("₱");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].quantity, "3");
        assert_eq!(table.rows[0].unit_price, "₱140.00");
        assert_eq!(table.total, "420.00");
    }

    #[test]
    fn test_remove_rerenders_total() {
        let mut controller = with_cement();
        controller.add_item("M2", "4", "12.5", &catalog()).unwrap();
        assert_eq!(controller.render_cart("₱").total, "350.00");

        controller.remove_item(0).unwrap();
        let table = controller.render_cart("₱");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].index, 0);
        assert_eq!(table.rows[0].name, "Sand");
        assert_eq!(table.total, "50.00");

        assert_eq!(
            controller.remove_item(5),
            Err(CartError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(controller.cart().len(), 1);
    }

    #[test]
    fn test_shown_total_is_submitted_total_on_half_cent() {
        let mut controller = CartController::new();
        controller.add_item("M1", "0.5", "12.25", &catalog()).unwrap();
        let table = controller.render_cart("₱");
        assert_eq!(table.total, "6.13");
        assert_eq!(table.rows[0].subtotal, "₱6.13");

        let shown: f64 = table.total.parse().unwrap();
        let request = controller.begin_checkout().unwrap();
        assert_eq!(shown, request.total);
    }

    #[test]
    fn test_empty_cart_checkout_builds_no_request() {
        let mut controller = CartController::new();
        assert_eq!(controller.begin_checkout(), Err(CartError::EmptyCart));
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_second_checkout_rejected_while_in_flight() {
        let mut controller = with_cement();
        let request = controller.begin_checkout().unwrap();
        assert_eq!(request.total, 300.0);
        assert!(controller.is_busy());
        assert_eq!(controller.begin_checkout(), Err(CartError::CheckoutInFlight));

        controller.finish_checkout(Err("offline".into()));
        assert!(!controller.is_busy());
        assert!(controller.begin_checkout().is_ok());
    }

    #[test]
    fn test_successful_checkout_with_low_stock() {
        let mut controller = with_cement();
        controller.begin_checkout().unwrap();
        let outcome = controller.finish_checkout(Ok(CheckoutResponse {
            success: true,
            message: None,
            low: vec![LowStockEntry { name: "Sand".into(), qty: 3.0 }],
        }));

        assert!(outcome.reload);
        assert!(controller.cart().is_empty());
        assert!(controller.render_cart("₱").rows.is_empty());
        assert_eq!(outcome.notices.len(), 2);
        assert_eq!(outcome.notices[0], Notice::success(CHECKOUT_SUCCESS_TEXT));
        assert_eq!(outcome.notices[1].level, NoticeLevel::Warning);
        assert!(outcome.notices[1].text.contains("Sand (3)"));
    }

    #[test]
    fn test_successful_checkout_without_low_stock() {
        let mut controller = with_cement();
        controller.begin_checkout().unwrap();
        let outcome = controller.finish_checkout(Ok(CheckoutResponse {
            success: true,
            message: None,
            low: vec![],
        }));
        assert_eq!(outcome.notices.len(), 1);
        assert!(outcome.reload);
    }

    #[test]
    fn test_rejected_checkout_keeps_cart() {
        let mut controller = with_cement();
        let before = controller.cart().clone();
        controller.begin_checkout().unwrap();
        let outcome = controller.finish_checkout(Ok(CheckoutResponse {
            success: false,
            message: Some("Insufficient stock".into()),
            low: vec![],
        }));

        assert!(!outcome.reload);
        assert_eq!(controller.cart(), &before);
        assert_eq!(
            outcome.notices,
            vec![Notice::error("❌ Checkout failed: Insufficient stock")]
        );
    }

    #[test]
    fn test_rejected_checkout_without_message() {
        let mut controller = with_cement();
        controller.begin_checkout().unwrap();
        let outcome = controller.finish_checkout(Ok(CheckoutResponse {
            success: false,
            message: None,
            low: vec![],
        }));
        assert_eq!(outcome.notices[0].text, "❌ Checkout failed: Unknown error");
    }

    #[test]
    fn test_transport_failure_keeps_cart() {
        let mut controller = with_cement();
        controller.begin_checkout().unwrap();
        let outcome = controller.finish_checkout(Err("expected value at line 1 column 1".into()));
        assert!(!outcome.reload);
        assert_eq!(controller.cart().len(), 1);
        assert_eq!(outcome.notices, vec![Notice::error(NETWORK_ERROR_TEXT)]);
    }
}
