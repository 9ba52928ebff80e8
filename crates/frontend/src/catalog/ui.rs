use contracts::catalog::CatalogItem;
use leptos::prelude::*;

use super::filter::{apply_filters, count_label, FilterOutcome, FilterValues};
use crate::cart::ui::AddToCartButton;
use crate::shared::indicator::CartIndicator;

/// Product listing with in-browser filtering.
///
/// One signal per control; the visible set is recomputed on every change
/// (and eagerly on first render) from the fixed item collection. Items are
/// never added or removed during the session.
#[component]
pub fn ProductCatalog(items: Vec<CatalogItem>, indicator: CartIndicator) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (price_min, set_price_min) = signal(String::new());
    let (price_max, set_price_max) = signal(String::new());
    let (offers_only, set_offers_only) = signal(false);

    let items = StoredValue::new(items);

    let outcome = Memo::new(move |_| {
        let values = FilterValues {
            search: search.get(),
            price_min: price_min.get(),
            price_max: price_max.get(),
            offers_only: offers_only.get(),
        };
        items.with_value(|items| apply_filters(items, &values))
    });

    view! {
        <div class="catalog">
            <div class="catalog-filters">
                <input
                    type="search"
                    class="catalog-filters__search"
                    placeholder="Buscar productos"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    class="catalog-filters__price-min"
                    placeholder="Precio mínimo"
                    prop:value=price_min
                    on:input=move |ev| set_price_min.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    class="catalog-filters__price-max"
                    placeholder="Precio máximo"
                    prop:value=price_max
                    on:input=move |ev| set_price_max.set(event_target_value(&ev))
                />
                <label class="catalog-filters__offers">
                    <input
                        type="checkbox"
                        prop:checked=offers_only
                        on:change=move |ev| set_offers_only.set(event_target_checked(&ev))
                    />
                    "Solo ofertas"
                </label>
            </div>

            <p class="catalog-count">{move || outcome.with(|o: &FilterOutcome| count_label(o))}</p>

            <div class="catalog-items">
                {move || {
                    outcome
                        .get()
                        .visible
                        .into_iter()
                        .map(|item| view! { <ProductCard item=item indicator=indicator /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductCard(item: CatalogItem, indicator: CartIndicator) -> impl IntoView {
    let is_offer = item.offer.trim() == "on";

    view! {
        <article class="product-card" data-product-item="" data-product-id=item.product_id.clone()>
            <h3 class="product-card__name">{item.name.clone()}</h3>
            <p class="product-card__price">{format!("${}", item.price)}</p>
            {is_offer.then(|| view! { <span class="product-card__offer">"Oferta"</span> })}
            <AddToCartButton product_id=item.product_id.clone() indicator=indicator />
        </article>
    }
}
