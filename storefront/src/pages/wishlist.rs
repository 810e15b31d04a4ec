//! Wishlist page.

use leptos::prelude::*;
use leptos_router::components::A;
use shopco_commerce::prelude::*;

use crate::state::use_session;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let session = use_session();
    let items = move || session.with(|s| s.wishlist().items().to_vec());

    view! {
        <div class="wishlist-page">
            <h1>"YOUR WISHLIST"</h1>
            {move || {
                let items = items();
                if items.is_empty() {
                    view! {
                        <div class="empty">
                            <p>"Your wishlist is empty."</p>
                            <A href="/">"Browse products"</A>
                        </div>
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .map(|item| view! { <WishlistRow item=item/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn WishlistRow(item: WishlistItem) -> impl IntoView {
    let session = use_session();
    let move_id = item.id.clone();
    let remove_id = item.id.clone();
    let href = format!("/product/{}", item.id);

    view! {
        <div class="wishlist-row">
            {item.image.clone().map(|src| {
                view! { <img src=src alt=item.title.clone() width="100" height="100"/> }
            })}
            <div class="wishlist-row-info">
                <A href=href>
                    <h3>{item.title.clone()}</h3>
                </A>
                <span class="price">{item.price.display_compact()}</span>
            </div>
            <button class="btn" on:click=move |_| {
                session.update(|s| {
                    s.move_to_cart(&move_id);
                })
            }>"Move to cart"</button>
            <button class="remove" on:click=move |_| {
                session.update(|s| {
                    s.remove_from_wishlist(&remove_id);
                })
            }>"Remove"</button>
        </div>
    }
}
