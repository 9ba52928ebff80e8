use contracts::cart::MoneyValue;
use contracts::catalog::CartContents;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{self, LineChange, STATUS_OK};
use crate::shared::indicator::CartIndicator;

/// One rendered cart row. The signals live for the whole page session;
/// detaching a row just drops it from the list, so a late response landing
/// on a detached row is inert.
#[derive(Clone)]
struct LineView {
    product_id: String,
    quantity: RwSignal<u32>,
    line_total: RwSignal<String>,
}

/// Cart contents view: quantity edits, steppers and removal, all synced
/// in place from server responses. Cart count, subtotal and total are only
/// ever set from values the server returned.
#[component]
pub fn CartPage(contents: CartContents, indicator: CartIndicator) -> impl IntoView {
    let lines = RwSignal::new(
        contents
            .lines
            .into_iter()
            .map(|line| LineView {
                product_id: line.product_id,
                quantity: RwSignal::new(line.quantity),
                line_total: RwSignal::new(line.line_total),
            })
            .collect::<Vec<_>>(),
    );

    let initial_summary = state::money_label(&contents.subtotal);
    let (subtotal, set_subtotal) = signal(initial_summary.clone());
    let (total, set_total) = signal(initial_summary);

    let apply_summary = move |cart_count: u64, value: &MoneyValue| {
        indicator.set(cart_count);
        let label = state::money_label(value);
        set_subtotal.set(label.clone());
        set_total.set(label);
    };

    let detach_line = move |product_id: String| {
        lines.update(|lines| lines.retain(|line| line.product_id != product_id));
    };

    let send_update = move |line: LineView, quantity: u32| {
        spawn_local(async move {
            match api::update_cart_line(&line.product_id, quantity).await {
                Ok(Some(response)) => {
                    match state::line_change(&line.product_id, &response) {
                        Some(LineChange::Keep { line_total }) => line.line_total.set(line_total),
                        Some(LineChange::Remove) => detach_line(line.product_id.clone()),
                        // non-ok status: ignore the whole response
                        None => return,
                    }
                    apply_summary(response.cart_count, &response.subtotal);
                }
                Ok(None) => {}
                Err(err) => log::error!("Cart update failed: {}", err),
            }
        });
    };

    let send_remove = move |line: LineView| {
        spawn_local(async move {
            match api::remove_cart_line(&line.product_id).await {
                Ok(Some(response)) if response.status == STATUS_OK => {
                    detach_line(line.product_id.clone());
                    apply_summary(response.cart_count, &response.subtotal);
                    if state::should_reload(&response) {
                        reload_page();
                    }
                }
                Ok(_) => {}
                Err(err) => log::error!("Cart remove failed: {}", err),
            }
        });
    };

    view! {
        <div class="cart">
            <ul class="cart-lines">
                <For
                    each=move || lines.get()
                    key=|line| line.product_id.clone()
                    children=move |line: LineView| {
                        let quantity = line.quantity;
                        let line_total = line.line_total;
                        let row_id = line.product_id.clone();

                        let edit_line = line.clone();
                        let dec_line = line.clone();
                        let inc_line = line.clone();
                        let remove_line = line;

                        view! {
                            <li class="cart-line" data-cart-line="" data-product-id=row_id>
                                <span class="cart-line__total">{line_total}</span>
                                <button
                                    class="cart-line__decrease"
                                    on:click=move |_| {
                                        // optimistic; deliberately not rolled
                                        // back if the request fails
                                        let next = state::step_down(quantity.get());
                                        quantity.set(next);
                                        send_update(dec_line.clone(), next);
                                    }
                                >
                                    "-"
                                </button>
                                <input
                                    type="number"
                                    class="cart-line__quantity"
                                    min="1"
                                    prop:value=move || quantity.get().to_string()
                                    on:change=move |ev| {
                                        let parsed = state::parse_quantity(&event_target_value(&ev));
                                        quantity.set(parsed);
                                        send_update(edit_line.clone(), parsed);
                                    }
                                />
                                <button
                                    class="cart-line__increase"
                                    on:click=move |_| {
                                        let next = state::step_up(quantity.get());
                                        quantity.set(next);
                                        send_update(inc_line.clone(), next);
                                    }
                                >
                                    "+"
                                </button>
                                <button
                                    class="cart-line__remove"
                                    on:click=move |_| send_remove(remove_line.clone())
                                >
                                    "Quitar"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="cart-summary">
                <p class="cart-summary__subtotal" data-cart-subtotal="">{subtotal}</p>
                <p class="cart-summary__total" data-cart-total="">{total}</p>
            </div>
        </div>
    }
}

/// Add-to-cart trigger for one product. Clicks are independent and
/// unserialized; rapid repeats each fire their own request.
#[component]
pub fn AddToCartButton(product_id: String, indicator: CartIndicator) -> impl IntoView {
    let id_attr = product_id.clone();

    let on_click = move |_| {
        let product_id = product_id.clone();
        spawn_local(async move {
            match api::add_to_cart(&product_id).await {
                Ok(Some(response)) => {
                    if let Some(count) = response.cart_count {
                        indicator.set(count);
                    }
                }
                // non-success or unusable body: leave the view untouched
                Ok(None) => {}
                Err(err) => log::error!("Add to cart failed: {}", err),
            }
        });
    };

    view! {
        <button class="add-to-cart" data-add-to-cart="" data-product-id=id_attr on:click=on_click>
            "Añadir al carrito"
        </button>
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
