//! Material catalog API

use contracts::domain::a025_material::{Material, MaterialCatalog};
use gloo_net::http::Request;

/// Fetch the sellable materials for the selector
pub async fn fetch_catalog(url: &str) -> Result<MaterialCatalog, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let materials: Vec<Material> = response
        .json()
        .await
        .map_err(|e| format!("Bad catalog response: {}", e))?;

    Ok(MaterialCatalog::from(materials))
}
