//! Cart page with order summary and promo entry.

use leptos::prelude::*;
use leptos_router::components::A;
use shopco_commerce::prelude::*;

use crate::state::use_session;

#[component]
pub fn CartPage() -> impl IntoView {
    let session = use_session();
    // Rows re-render only when the lines change.
    let items = Memo::new(move |_| session.with(|s| s.cart().items().to_vec()));

    view! {
        <div class="cart-page">
            <h1>"YOUR CART"</h1>
            <Show
                when=move || items.with(|items| !items.is_empty())
                fallback=|| view! {
                    <div class="empty">
                        <p>"Your cart is empty."</p>
                        <A href="/">"Continue shopping"</A>
                    </div>
                }
            >
                <div class="cart-layout">
                    <div class="cart-items">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| view! { <CartRow item=item/> })
                                .collect_view()
                        }}
                    </div>
                    <OrderSummaryPanel/>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CartRow(item: LineItem) -> impl IntoView {
    let session = use_session();
    let dec_id = item.id.clone();
    let inc_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div class="cart-row">
            {item.image.clone().map(|src| {
                view! { <img src=src alt=item.title.clone() width="100" height="100"/> }
            })}
            <div class="cart-row-info">
                <h3>{item.title.clone()}</h3>
                <span class="price">{item.price.display_compact()}</span>
            </div>
            <div class="stepper">
                <button on:click=move |_| {
                    session.update(|s| {
                        s.step_quantity(&dec_id, QuantityAction::Decrement);
                    })
                }>"-"</button>
                <span>{item.quantity.to_string()}</span>
                <button on:click=move |_| {
                    session.update(|s| {
                        s.step_quantity(&inc_id, QuantityAction::Increment);
                    })
                }>"+"</button>
            </div>
            <button class="remove" on:click=move |_| {
                session.update(|s| {
                    s.remove_from_cart(&remove_id);
                })
            }>"Remove"</button>
        </div>
    }
}

#[component]
fn OrderSummaryPanel() -> impl IntoView {
    let session = use_session();
    let promo_text = move || session.with(|s| s.pricing().promo().code.clone());
    let promo_error = move || session.with(|s| s.promo_error().map(|e| e.to_string()));

    let apply = move |_| {
        // The error, if any, is kept on the session.
        session.update(|s| {
            let _ = s.apply_promo_input();
        });
    };

    view! {
        <div class="order-summary">
            <h2>"Order Summary"</h2>
            {move || match session.with(|s| s.summary()) {
                Ok(summary) => view! {
                    <div class="summary-lines">
                        <div class="summary-line">
                            <span>"Subtotal"</span>
                            <span>{summary.subtotal.display()}</span>
                        </div>
                        <div class="summary-line discount">
                            <span>{format!("Discount ({}%)", summary.discount_percent)}</span>
                            <span>{format!("-{}", summary.discount_amount.display())}</span>
                        </div>
                        <div class="summary-line">
                            <span>"Delivery Fee"</span>
                            <span>{summary.delivery_fee.display()}</span>
                        </div>
                        <div class="summary-line total">
                            <span>"Total"</span>
                            <span>{summary.total.display()}</span>
                        </div>
                    </div>
                }
                .into_any(),
                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
            }}

            <div class="promo">
                <input
                    type="text"
                    placeholder="Add promo code"
                    prop:value=promo_text
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        session.update(|s| s.set_promo_input(text));
                    }
                />
                <button class="btn" on:click=apply>"Apply"</button>
            </div>
            {move || promo_error().map(|msg| view! { <p class="error">{msg}</p> })}

            <button class="btn checkout">"Go to Checkout \u{2192}"</button>
        </div>
    }
}
