//! POS page - Model Layer

use contracts::domain::a026_pos_cart::{CheckoutRequest, CheckoutResponse};
use gloo_net::http::Request;

/// Submit the cart.
///
/// The body is read as JSON whatever the HTTP status: a checkout handler
/// reports business failures as `{"success": false, "message": ...}`,
/// sometimes with a 4xx/5xx status. Only transport errors and bodies that
/// are not a checkout response end up in `Err`.
pub async fn post_checkout(url: &str, request: &CheckoutRequest) -> Result<CheckoutResponse, String> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    response
        .json::<CheckoutResponse>()
        .await
        .map_err(|e| format!("HTTP {}: {}", status, e))
}
