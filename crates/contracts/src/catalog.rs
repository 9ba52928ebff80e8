//! View models for the storefront pages and the bootstrap payload the host
//! document embeds for the wasm layer.

use serde::{Deserialize, Serialize};

use crate::cart::MoneyValue;

/// A single product card in the listing. Captured once at activation and
/// never added to or removed from during the session; the filter engine
/// only decides visibility and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    /// Searchable text blob assembled by the host page (name, description,
    /// tags and the like).
    pub search_text: String,
    /// Raw offer flag; the literal "on" (after trimming) marks an offer.
    #[serde(default)]
    pub offer: String,
}

/// One row of the rendered cart page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
    /// Displayed line total, already carrying the currency prefix.
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartContents {
    pub lines: Vec<CartLine>,
    pub subtotal: MoneyValue,
}

/// Initial state embedded by the host document in a
/// `<script type="application/json" data-storefront-state>` tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontPayload {
    #[serde(default)]
    pub products: Vec<CatalogItem>,
    #[serde(default)]
    pub cart: Option<CartContents>,
    #[serde(default)]
    pub cart_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_sections_are_optional() {
        let payload: StorefrontPayload = serde_json::from_str(r#"{"cart_count":3}"#).unwrap();
        assert!(payload.products.is_empty());
        assert!(payload.cart.is_none());
        assert_eq!(payload.cart_count, 3);
    }

    #[test]
    fn test_payload_full_round() {
        let json = r#"{
            "products": [
                {"product_id":"p1","name":"Tarta","price":12.5,"search_text":"tarta chocolate"}
            ],
            "cart": {
                "lines": [{"product_id":"p1","quantity":2,"line_total":"$25"}],
                "subtotal": 25
            },
            "cart_count": 2
        }"#;
        let payload: StorefrontPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.products.len(), 1);
        assert_eq!(payload.products[0].offer, "");
        let cart = payload.cart.unwrap();
        assert_eq!(cart.lines[0].line_total, "$25");
        assert_eq!(cart.subtotal.to_string(), "25");
    }
}
