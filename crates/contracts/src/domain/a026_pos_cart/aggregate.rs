use super::checkout::CheckoutRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name given to a line whose material is missing from the catalog.
pub const UNKNOWN_MATERIAL_NAME: &str = "Unknown";

/// Cart operation errors. `Display` is what the cashier sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Select material first!")]
    NoMaterialSelected,

    #[error("Cart is empty!")]
    EmptyCart,

    #[error("Checkout is already in progress.")]
    CheckoutInFlight,

    #[error("Cart line {index} does not exist (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One cart line. Serialized as-is into the checkout payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub material_id: String,

    /// Display label, resolved once when the line is created
    pub name: String,

    #[serde(rename = "qty")]
    pub quantity: f64,

    #[serde(rename = "price")]
    pub unit_price: f64,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Ordered cart, at most one line per material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, material_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.material_id == material_id)
    }

    /// Adds `quantity` of a material at `unit_price`.
    ///
    /// An existing line accumulates quantity and takes the new price. A new
    /// line asks `resolve_name` for its label; `None` yields
    /// [`UNKNOWN_MATERIAL_NAME`].
    pub fn add<F>(
        &mut self,
        material_id: &str,
        quantity: f64,
        unit_price: f64,
        resolve_name: F,
    ) -> Result<(), CartError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let material_id = material_id.trim();
        if material_id.is_empty() {
            return Err(CartError::NoMaterialSelected);
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.material_id == material_id)
        {
            line.quantity += quantity;
            line.unit_price = unit_price;
            return Ok(());
        }

        let name = resolve_name(material_id).unwrap_or_else(|| UNKNOWN_MATERIAL_NAME.to_string());
        self.lines.push(CartLine {
            material_id: material_id.to_string(),
            name,
            quantity,
            unit_price,
        });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<CartLine, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Сумма по всем строкам без округления
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Payload for the checkout endpoint. The total is the one shown to
    /// the cashier, i.e. rounded to cents.
    pub fn to_checkout_request(&self) -> Result<CheckoutRequest, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(CheckoutRequest {
            items: self.lines.clone(),
            total: round_to_cents(self.total()),
        })
    }
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
