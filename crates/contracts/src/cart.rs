//! Wire contracts for the `/cart/*` endpoints.
//!
//! All three endpoints are `POST` with JSON bodies on both sides. The
//! displayed cart count, subtotal and total are only ever taken from these
//! responses; the client never computes them itself.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Monetary value as the server sends it: some responses carry raw numbers,
/// others preformatted strings. The client displays it verbatim either way,
/// without rounding or reformatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoneyValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyValue::Number(n) => write!(f, "{}", n),
            MoneyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartResponse {
    /// Absent when the server chose not to report a count; the badge is
    /// left untouched in that case.
    #[serde(default)]
    pub cart_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineTotal {
    pub line_total: MoneyValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartResponse {
    pub status: String,
    pub cart_count: u64,
    pub subtotal: MoneyValue,
    /// Per-line totals keyed by product id. A line missing from this map no
    /// longer exists server-side and must be dropped from the view.
    #[serde(default)]
    pub items: HashMap<String, CartLineTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCartRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCartResponse {
    pub status: String,
    pub cart_count: u64,
    pub subtotal: MoneyValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_response_wire_shape() {
        let json =
            r#"{"status":"ok","cart_count":2,"subtotal":50,"items":{"p1":{"line_total":50}}}"#;
        let resp: UpdateCartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.cart_count, 2);
        assert_eq!(resp.subtotal.to_string(), "50");
        assert_eq!(resp.items["p1"].line_total.to_string(), "50");
    }

    #[test]
    fn test_update_response_without_items_map() {
        let json = r#"{"status":"ok","cart_count":0,"subtotal":0}"#;
        let resp: UpdateCartResponse = serde_json::from_str(json).unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_money_value_keeps_preformatted_strings() {
        let json = r#"{"status":"ok","cart_count":1,"subtotal":"49.99"}"#;
        let resp: RemoveCartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.subtotal.to_string(), "49.99");
    }

    #[test]
    fn test_add_response_count_is_optional() {
        let resp: AddToCartResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.cart_count, None);

        let resp: AddToCartResponse = serde_json::from_str(r#"{"cart_count":4}"#).unwrap();
        assert_eq!(resp.cart_count, Some(4));
    }

    #[test]
    fn test_add_request_serializes_quantity() {
        let req = AddToCartRequest {
            product_id: "p7".to_string(),
            quantity: 1,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["product_id"], "p7");
        assert_eq!(json["quantity"], 1);
    }
}
