//! Pure state transitions for the cart page.
//!
//! The page component applies these to its signals after each server
//! response; nothing here touches the DOM or the network.

use contracts::cart::{MoneyValue, RemoveCartResponse, UpdateCartResponse};

pub const STATUS_OK: &str = "ok";

/// Quantity typed into the field. An empty field counts as a single unit;
/// unparseable text also falls back to 1 rather than sending garbage.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        1
    } else {
        trimmed.parse().unwrap_or(1)
    }
}

/// Decrease stepper: never drives the quantity below one. Removal is an
/// explicit, separate action.
pub fn step_down(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(1)
}

pub fn step_up(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

/// What an update response means for one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineChange {
    /// The line still exists; show this total.
    Keep { line_total: String },
    /// The server no longer lists the line; detach it from the view.
    Remove,
}

/// `None` when the response status is not "ok": the whole response is then
/// ignored, summary included.
pub fn line_change(product_id: &str, response: &UpdateCartResponse) -> Option<LineChange> {
    if response.status != STATUS_OK {
        return None;
    }
    Some(match response.items.get(product_id) {
        Some(entry) => LineChange::Keep {
            line_total: money_label(&entry.line_total),
        },
        None => LineChange::Remove,
    })
}

/// `$` plus the raw server value; the client never formats or rounds.
pub fn money_label(value: &MoneyValue) -> String {
    format!("${}", value)
}

/// An emptied cart warrants a full page refresh: the server renders a
/// dedicated empty-cart state that partial patching would miss.
pub fn should_reload(response: &RemoveCartResponse) -> bool {
    response.cart_count == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn update_response(status: &str, items: &[(&str, f64)]) -> UpdateCartResponse {
        let mut map = HashMap::new();
        for (id, total) in items {
            map.insert(
                id.to_string(),
                contracts::cart::CartLineTotal {
                    line_total: MoneyValue::Number(*total),
                },
            );
        }
        UpdateCartResponse {
            status: status.to_string(),
            cart_count: 2,
            subtotal: MoneyValue::Number(50.0),
            items: map,
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("   "), 1);
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 2 "), 2);
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("abc"), 1);
    }

    #[test]
    fn test_step_down_floors_at_one() {
        assert_eq!(step_down(5), 4);
        assert_eq!(step_down(2), 1);
        assert_eq!(step_down(1), 1);
        assert_eq!(step_down(0), 1);
    }

    #[test]
    fn test_step_up() {
        assert_eq!(step_up(1), 2);
        assert_eq!(step_up(7), 8);
    }

    #[test]
    fn test_line_change_keeps_listed_line() {
        let response = update_response("ok", &[("p1", 50.0)]);
        assert_eq!(
            line_change("p1", &response),
            Some(LineChange::Keep {
                line_total: "$50".to_string()
            })
        );
    }

    #[test]
    fn test_line_change_removes_missing_line() {
        let response = update_response("ok", &[("p1", 50.0)]);
        assert_eq!(line_change("p2", &response), Some(LineChange::Remove));
    }

    #[test]
    fn test_line_change_ignores_non_ok_status() {
        let response = update_response("error", &[("p1", 50.0)]);
        assert_eq!(line_change("p1", &response), None);
    }

    #[test]
    fn test_money_label_is_raw_passthrough() {
        assert_eq!(money_label(&MoneyValue::Number(50.0)), "$50");
        assert_eq!(money_label(&MoneyValue::Number(49.9)), "$49.9");
        assert_eq!(money_label(&MoneyValue::Text("49.90".to_string())), "$49.90");
    }

    #[test]
    fn test_should_reload_only_on_empty_cart() {
        let empty = RemoveCartResponse {
            status: "ok".to_string(),
            cart_count: 0,
            subtotal: MoneyValue::Number(0.0),
        };
        let remaining = RemoveCartResponse {
            status: "ok".to_string(),
            cart_count: 3,
            subtotal: MoneyValue::Number(12.0),
        };
        assert!(should_reload(&empty));
        assert!(!should_reload(&remaining));
    }
}
