use leptos::prelude::*;

/// Handle for the cart-count display, shared across every mounted root so a
/// server-confirmed count from any component reaches the badge.
///
/// The count only ever holds server-provided values; nothing in the client
/// computes it.
#[derive(Clone, Copy)]
pub struct CartIndicator {
    count: RwSignal<u64>,
}

impl CartIndicator {
    pub fn new(initial: u64) -> Self {
        Self {
            count: RwSignal::new(initial),
        }
    }

    pub fn set(&self, count: u64) {
        self.count.set(count);
    }

    pub fn count(&self) -> RwSignal<u64> {
        self.count
    }
}

#[component]
pub fn CartCountBadge(indicator: CartIndicator) -> impl IntoView {
    view! {
        <span class="cart-count">{move || indicator.count().get().to_string()}</span>
    }
}
