//! One-shot activation on module start.
//!
//! The host document marks where each component goes (`[data-products-list]`,
//! `[data-cart-page]`, `[data-cart-count]`) and embeds the initial state as
//! JSON in a `<script type="application/json" data-storefront-state>` tag.
//! Every component whose anchor exists gets mounted; an absent anchor means
//! that component silently skips its setup. There is no teardown and no
//! guard against a second activation.

use contracts::cart::MoneyValue;
use contracts::catalog::{CartContents, StorefrontPayload};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::cart::ui::CartPage;
use crate::catalog::ui::ProductCatalog;
use crate::shared::indicator::{CartCountBadge, CartIndicator};

const STATE_SELECTOR: &str = "script[data-storefront-state]";
const PRODUCTS_ANCHOR: &str = "[data-products-list]";
const CART_PAGE_ANCHOR: &str = "[data-cart-page]";
const CART_COUNT_ANCHOR: &str = "[data-cart-count]";

pub fn activate() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    let payload = read_payload(&document);
    let indicator = CartIndicator::new(payload.cart_count);

    if let Some(anchor) = anchor_element(&document, PRODUCTS_ANCHOR) {
        let items = payload.products.clone();
        leptos::mount::mount_to(anchor, move || {
            view! { <ProductCatalog items=items indicator=indicator /> }
        })
        .forget();
    } else {
        log::debug!("No product listing anchor, filter engine not activated");
    }

    if let Some(anchor) = anchor_element(&document, CART_PAGE_ANCHOR) {
        let contents = payload.cart.clone().unwrap_or(CartContents {
            lines: Vec::new(),
            subtotal: MoneyValue::Number(0.0),
        });
        leptos::mount::mount_to(anchor, move || {
            view! { <CartPage contents=contents indicator=indicator /> }
        })
        .forget();
    } else {
        log::debug!("No cart page anchor, cart controller not activated");
    }

    if let Some(anchor) = anchor_element(&document, CART_COUNT_ANCHOR) {
        leptos::mount::mount_to(anchor, move || {
            view! { <CartCountBadge indicator=indicator /> }
        })
        .forget();
    }
}

fn anchor_element(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn read_payload(document: &Document) -> StorefrontPayload {
    let raw = document
        .query_selector(STATE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    parse_payload(&raw)
}

/// An absent or malformed state tag degrades to an empty payload; whatever
/// anchors are present still mount, just with nothing in them.
fn parse_payload(raw: &str) -> StorefrontPayload {
    if raw.trim().is_empty() {
        return StorefrontPayload::default();
    }
    match serde_json::from_str(raw) {
        Ok(payload) => payload,
        Err(err) => {
            log::error!("Failed to parse storefront state: {}", err);
            StorefrontPayload::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_payload;

    #[test]
    fn test_parse_payload_empty_input() {
        let payload = parse_payload("  \n ");
        assert!(payload.products.is_empty());
        assert!(payload.cart.is_none());
        assert_eq!(payload.cart_count, 0);
    }

    #[test]
    fn test_parse_payload_malformed_input() {
        let payload = parse_payload("{not json");
        assert!(payload.products.is_empty());
        assert_eq!(payload.cart_count, 0);
    }

    #[test]
    fn test_parse_payload_reads_sections() {
        let payload = parse_payload(
            r#"{
                "products": [
                    {"product_id":"p1","name":"Tarta","price":12.5,"search_text":"tarta","offer":"on"}
                ],
                "cart_count": 5
            }"#,
        );
        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.products[0].offer, "on");
        assert_eq!(payload.cart_count, 5);
    }
}
