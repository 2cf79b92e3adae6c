//! POS page - View Component

use super::cart_table::CartTable;
use super::model::post_checkout;
use super::view_model::PosVm;
use crate::domain::a025_material::api::fetch_catalog;
use crate::layout::notification_service::{Notice, NotificationService};
use crate::shared::components::ui::{NumberInput, Select};
use crate::shared::config::PosConfig;
use contracts::domain::a026_pos_cart::CartError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn reload_page() {
    let Some(window) = web_sys::window() else {
        log::error!("reload: no window");
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("reload failed: {:?}", e);
    }
}

#[component]
pub fn PosPage() -> impl IntoView {
    let config = use_context::<PosConfig>().expect("PosConfig not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let vm = PosVm::new();

    let currency = StoredValue::new(config.currency_symbol.clone());
    let checkout_url = StoredValue::new(config.checkout_url());
    let materials_url = StoredValue::new(config.materials_url());
    let reload_delay_ms = config.reload_delay_ms;

    // Load catalog once
    Effect::new(move |_| {
        let url = materials_url.get_value();
        spawn_local(async move {
            vm.set_catalog(fetch_catalog(&url).await);
        });
    });

    // Reload after a sale, once the cashier has acknowledged every notice
    Effect::new(move |_| {
        if vm.reload_pending.get() && notifications.is_idle() {
            vm.reload_pending.set(false);
            spawn_local(async move {
                TimeoutFuture::new(reload_delay_ms).await;
                reload_page();
            });
        }
    });

    let table = Memo::new(move |_| currency.with_value(|symbol| vm.table(symbol)));
    let busy = Signal::derive(move || vm.is_busy());
    let options = Signal::derive(move || vm.catalog.with(|c| c.options()));

    let handle_add = move |_| {
        if let Err(e) = vm.add_to_cart() {
            notifications.push(Notice::warning(e.to_string()));
        }
    };

    let handle_remove = Callback::new(move |index: usize| {
        // A stale row can outlive its line; the controller already logged it
        if let Err(e) = vm.remove(index) {
            log::debug!("cart: remove ignored: {}", e);
        }
    });

    let handle_checkout = move |_| {
        let request = match vm.begin_checkout() {
            Ok(request) => request,
            Err(CartError::CheckoutInFlight) => {
                log::debug!("checkout: ignored, previous request still running");
                return;
            }
            Err(e) => {
                notifications.push(Notice::warning(e.to_string()));
                return;
            }
        };

        let url = checkout_url.get_value();
        spawn_local(async move {
            let result = post_checkout(&url, &request).await;
            let outcome = vm.finish_checkout(result);
            notifications.push_all(outcome.notices);
        });
    };

    view! {
        <div id="a026_pos_cart--pos" class="page" data-page-category="custom">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Point of Sale"</h1>
                </div>
            </div>

            <div class="page__content" style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                {move || vm.catalog_error.get().map(|err| view! {
                    <div style="padding:var(--spacing-lg);background:var(--color-error-50);border:1px solid var(--color-error-100);border-radius:var(--radius-sm);color:var(--color-error);">
                        <strong>"Materials could not be loaded: "</strong>{err}
                    </div>
                })}

                <Card>
                    <div class="pos-form" style="padding:var(--spacing-md);display:flex;flex-wrap:wrap;gap:var(--spacing-md);align-items:flex-end;">
                        <Select
                            id="material-select"
                            label="Material"
                            value=vm.material_id
                            options=options
                            placeholder=Signal::derive(move || {
                                if vm.catalog_loading.get() {
                                    "Loading...".to_string()
                                } else {
                                    "Select material".to_string()
                                }
                            })
                            disabled=Signal::derive(move || vm.catalog_loading.get())
                            on_change=Callback::new(move |id: String| vm.select_material(id))
                        />
                        <NumberInput
                            id="qty"
                            label="Quantity"
                            value=vm.quantity
                            min="0"
                            on_input=Callback::new(move |v: String| vm.quantity.set(v))
                        />
                        <NumberInput
                            id="price"
                            label="Unit price"
                            value=vm.price
                            min="0"
                            step="0.01"
                            placeholder="0.00"
                            on_input=Callback::new(move |v: String| vm.price.set(v))
                        />
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=handle_add
                            attr:id="add-to-cart"
                        >
                            "Add to cart"
                        </Button>
                    </div>
                </Card>

                <Card>
                    <CartTable table=table on_remove=handle_remove disabled=busy />
                    <Flex justify=FlexJustify::End style="padding:var(--spacing-md);">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_checkout
                            disabled=busy
                            loading=busy
                            attr:id="checkoutBtn"
                        >
                            {move || if busy.get() { "Processing..." } else { "Checkout" }}
                        </Button>
                    </Flex>
                </Card>
            </div>
        </div>
    }
}
