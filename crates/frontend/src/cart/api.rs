//! Requests against the cart endpoints.
//!
//! `Ok(None)` means the server answered with a non-success status or an
//! unusable body; callers treat that as a silent no-op and leave the view
//! in its last-known-good state. `Err` is a transport failure and gets
//! logged at the call site. There is no retry anywhere.

use contracts::cart::{
    AddToCartRequest, AddToCartResponse, RemoveCartRequest, RemoveCartResponse, UpdateCartRequest,
    UpdateCartResponse,
};
use gloo_net::http::Request;

const CART_API: &str = "/cart";

/// Add one unit of a product to the cart.
pub async fn add_to_cart(product_id: &str) -> Result<Option<AddToCartResponse>, String> {
    let body = AddToCartRequest {
        product_id: product_id.to_string(),
        quantity: 1,
    };

    let response = Request::post(&format!("{}/add", CART_API))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Ok(None);
    }

    Ok(response.json::<AddToCartResponse>().await.ok())
}

/// Set the quantity of a cart line.
pub async fn update_cart_line(
    product_id: &str,
    quantity: u32,
) -> Result<Option<UpdateCartResponse>, String> {
    let body = UpdateCartRequest {
        product_id: product_id.to_string(),
        quantity,
    };

    let response = Request::post(&format!("{}/update", CART_API))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Ok(None);
    }

    Ok(response.json::<UpdateCartResponse>().await.ok())
}

/// Remove a cart line entirely.
pub async fn remove_cart_line(product_id: &str) -> Result<Option<RemoveCartResponse>, String> {
    let body = RemoveCartRequest {
        product_id: product_id.to_string(),
    };

    let response = Request::post(&format!("{}/remove", CART_API))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Ok(None);
    }

    Ok(response.json::<RemoveCartResponse>().await.ok())
}
