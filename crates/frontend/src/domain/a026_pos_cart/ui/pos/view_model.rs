//! POS page - ViewModel
//!
//! Reactive wrapper around [`CartController`]. Every cart mutation goes
//! through the controller; the signals here only hold form input and page
//! state.

use crate::domain::a026_pos_cart::controller::{CartController, CartTable, CheckoutOutcome};
use contracts::domain::a025_material::MaterialCatalog;
use contracts::domain::a026_pos_cart::{CartError, CheckoutRequest, CheckoutResponse};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PosVm {
    pub controller: RwSignal<CartController>,

    // Catalog
    pub catalog: RwSignal<MaterialCatalog>,
    pub catalog_loading: RwSignal<bool>,
    pub catalog_error: RwSignal<Option<String>>,

    // Form fields
    pub material_id: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub price: RwSignal<String>,

    /// Sale recorded, page reload waits for the notices to be dismissed
    pub reload_pending: RwSignal<bool>,
}

impl PosVm {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(CartController::new()),
            catalog: RwSignal::new(MaterialCatalog::default()),
            catalog_loading: RwSignal::new(true),
            catalog_error: RwSignal::new(None),
            material_id: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_string()),
            price: RwSignal::new(String::new()),
            reload_pending: RwSignal::new(false),
        }
    }

    pub fn set_catalog(&self, result: Result<MaterialCatalog, String>) {
        match result {
            Ok(catalog) => {
                log::info!("catalog: {} materials loaded", catalog.materials().len());
                self.catalog.set(catalog);
                self.catalog_error.set(None);
            }
            Err(e) => {
                log::error!("catalog: failed to load materials: {}", e);
                self.catalog_error.set(Some(e));
            }
        }
        self.catalog_loading.set(false);
    }

    /// Select a material; its catalog price, if known, pre-fills the price field
    pub fn select_material(&self, id: String) {
        let price = self
            .catalog
            .with_untracked(|c| c.find(&id).and_then(|m| m.price_per_unit));
        if let Some(price) = price {
            self.price.set(price.to_string());
        }
        self.material_id.set(id);
    }

    pub fn add_to_cart(&self) -> Result<(), CartError> {
        let material_id = self.material_id.get_untracked();
        let quantity = self.quantity.get_untracked();
        let price = self.price.get_untracked();
        self.catalog
            .with_untracked(|catalog| {
                self.controller
                    .try_update(|c| c.add_item(&material_id, &quantity, &price, catalog))
            })
            .unwrap_or(Ok(()))
    }

    pub fn remove(&self, index: usize) -> Result<(), CartError> {
        self.controller
            .try_update(|c| c.remove_item(index).map(|_| ()))
            .unwrap_or(Ok(()))
    }

    pub fn table(&self, currency: &str) -> CartTable {
        self.controller.with(|c| c.render_cart(currency))
    }

    pub fn is_busy(&self) -> bool {
        self.controller.with(CartController::is_busy)
    }

    pub fn begin_checkout(&self) -> Result<CheckoutRequest, CartError> {
        self.controller
            .try_update(CartController::begin_checkout)
            .unwrap_or(Err(CartError::CheckoutInFlight))
    }

    pub fn finish_checkout(&self, result: Result<CheckoutResponse, String>) -> CheckoutOutcome {
        let outcome = self
            .controller
            .try_update(|c| c.finish_checkout(result))
            .unwrap_or_else(|| CheckoutOutcome {
                notices: Vec::new(),
                reload: false,
            });
        if outcome.reload {
            self.reload_pending.set(true);
        }
        outcome
    }
}

impl Default for PosVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_material::Material;

    fn catalog() -> MaterialCatalog {
        let mut cement = Material::new("M1", "Cement");
        cement.price_per_unit = Some(150.0);
        MaterialCatalog::from(vec![cement, Material::new("M2", "Sand")])
    }

    fn vm() -> (Owner, PosVm) {
        let owner = Owner::new();
        owner.set();
        let vm = PosVm::new();
        vm.set_catalog(Ok(catalog()));
        (owner, vm)
    }

    #[test]
    fn test_set_catalog() {
        let (_owner, vm) = vm();
        assert!(!vm.catalog_loading.get_untracked());
        assert_eq!(vm.catalog_error.get_untracked(), None);
        assert_eq!(vm.catalog.with_untracked(|c| c.materials().len()), 2);

        vm.set_catalog(Err("HTTP 500".into()));
        assert!(!vm.catalog_loading.get_untracked());
        assert_eq!(vm.catalog_error.get_untracked().as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_select_material_prefills_price() {
        let (_owner, vm) = vm();
        vm.select_material("M1".into());
        assert_eq!(vm.material_id.get_untracked(), "M1");
        assert_eq!(vm.price.get_untracked(), "150");

        // No catalog price: the cashier's entry stays
        vm.price.set("12.5".into());
        vm.select_material("M2".into());
        assert_eq!(vm.material_id.get_untracked(), "M2");
        assert_eq!(vm.price.get_untracked(), "12.5");
    }

    #[test]
    fn test_add_and_checkout_through_form() {
        let (_owner, vm) = vm();
        assert_eq!(vm.add_to_cart(), Err(CartError::NoMaterialSelected));

        vm.select_material("M1".into());
        vm.quantity.set("2".into());
        vm.add_to_cart().unwrap();
        assert_eq!(vm.table("₱").total, "300.00");

        let request = vm.begin_checkout().unwrap();
        assert_eq!(request.total, 300.0);
        assert!(vm.is_busy());

        let outcome = vm.finish_checkout(Ok(CheckoutResponse {
            success: true,
            message: None,
            low: vec![],
        }));
        assert!(outcome.reload);
        assert!(vm.reload_pending.get_untracked());
        assert!(!vm.is_busy());
        assert!(vm.table("₱").rows.is_empty());
    }

    #[test]
    fn test_failed_checkout_does_not_schedule_reload() {
        let (_owner, vm) = vm();
        vm.select_material("M1".into());
        vm.add_to_cart().unwrap();
        vm.begin_checkout().unwrap();
        let outcome = vm.finish_checkout(Err("offline".into()));
        assert!(!outcome.reload);
        assert!(!vm.reload_pending.get_untracked());
        assert_eq!(vm.table("₱").rows.len(), 1);
        assert_eq!(vm.remove(3), Err(CartError::IndexOutOfRange { index: 3, len: 1 }));
    }
}
