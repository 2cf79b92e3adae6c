use serde::{Deserialize, Deserializer, Serialize};

/// Catalog material (blocks, cement, sand and the like).
///
/// Catalog backends emit numeric ids (`1`, `2`, ...) while the selector and
/// the checkout payload work with strings, so `id` accepts both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    #[serde(deserialize_with = "deserialize_material_id")]
    pub id: String,

    pub name: String,

    /// Единица измерения
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Остаток на складе
    #[serde(default)]
    pub quantity: f64,

    /// Точка перезаказа
    #[serde(default)]
    pub reorder_point: f64,

    #[serde(default)]
    pub price_per_unit: Option<f64>,

    #[serde(default)]
    pub supplier: Option<String>,
}

fn default_unit() -> String {
    "pcs".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

fn deserialize_material_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

impl Material {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: default_unit(),
            quantity: 0.0,
            reorder_point: 0.0,
            price_per_unit: None,
            supplier: None,
        }
    }

    /// Остаток на уровне точки перезаказа или ниже
    pub fn is_low(&self) -> bool {
        self.quantity <= self.reorder_point
    }

    /// Text shown in the material selector.
    pub fn option_label(&self) -> String {
        let mut label = format!("{} ({} {})", self.name, self.quantity, self.unit);
        if self.is_low() {
            label.push_str(" - LOW");
        }
        label
    }
}

/// Ordered list of sellable materials, as served by the catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn name_of(&self, id: &str) -> Option<String> {
        self.find(id).map(|m| m.name.clone())
    }

    /// `(value, label)` pairs for a `<select>`
    pub fn options(&self) -> Vec<(String, String)> {
        self.materials
            .iter()
            .map(|m| (m.id.clone(), m.option_label()))
            .collect()
    }
}

impl From<Vec<Material>> for MaterialCatalog {
    fn from(materials: Vec<Material>) -> Self {
        Self::new(materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids() {
        let json = r#"[
            {"id": 1, "name": "Concrete Hollow Blocks (4\")", "quantity": 585, "unit": "pcs", "reorder_point": 500, "supplier": "123 Construction Corp"},
            {"id": "M2", "name": "Sand"}
        ]"#;
        let materials: Vec<Material> = serde_json::from_str(json).unwrap();
        assert_eq!(materials[0].id, "1");
        assert_eq!(materials[0].supplier.as_deref(), Some("123 Construction Corp"));
        assert_eq!(materials[1].id, "M2");
        assert_eq!(materials[1].unit, "pcs");
        assert_eq!(materials[1].price_per_unit, None);
    }

    #[test]
    fn test_is_low_and_label() {
        let mut m = Material::new("1", "Cement");
        m.quantity = 585.0;
        m.reorder_point = 500.0;
        assert!(!m.is_low());
        assert_eq!(m.option_label(), "Cement (585 pcs)");

        m.quantity = 500.0;
        assert!(m.is_low());
        assert_eq!(m.option_label(), "Cement (500 pcs) - LOW");
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = MaterialCatalog::from(vec![
            Material::new("M1", "Cement"),
            Material::new("M2", "Sand"),
        ]);
        assert_eq!(catalog.name_of("M2").as_deref(), Some("Sand"));
        assert_eq!(catalog.name_of("M9"), None);
        assert_eq!(catalog.options().len(), 2);
        assert_eq!(catalog.options()[0].0, "M1");
    }
}
