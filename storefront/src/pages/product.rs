//! Product detail page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use shopco_commerce::prelude::*;

use super::home::Rating;
use crate::state::{use_catalog, use_session};

/// `/product/:id`: detail view, or a placeholder for unknown ids.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();

    view! {
        {move || {
            let id = params.get().get("id").unwrap_or_default();
            match catalog.find(&id) {
                Ok(product) => view! { <ProductDetail product=product.clone()/> }.into_any(),
                Err(_) => view! {
                    <div class="not-found">
                        <p>"Product not found!"</p>
                        <A href="/">"Back to products"</A>
                    </div>
                }
                .into_any(),
            }
        }}
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let session = use_session();
    let (quantity, set_quantity) = signal(1u32);
    let (size, set_size) = signal(None::<Size>);
    let (notice, set_notice) = signal(None::<String>);

    let for_cart = product.clone();
    let add_to_cart = move |_| {
        let mut outcome = None;
        session.update(|s| {
            outcome = Some(s.add_to_cart(for_cart.to_line_item(quantity.get_untracked())));
        });
        if let Some(outcome) = outcome {
            set_notice.set(Some(format!(
                "Added to cart ({} in cart)",
                outcome.quantity()
            )));
        }
    };

    let wish = product.to_wishlist_item();
    let add_to_wishlist = move |_| {
        let mut added = false;
        session.update(|s| added = s.add_to_wishlist(wish.clone()));
        let message = if added {
            "Added to wishlist"
        } else {
            "Already on your wishlist"
        };
        set_notice.set(Some(message.to_string()));
    };

    let description = product.description.clone();

    view! {
        <div class="product-detail">
            <img
                src=product.image_url.clone()
                alt=product.name.clone()
                width="400"
                height="400"
                class="product-image"
            />

            <div class="product-info">
                <h1>{product.name.clone()}</h1>
                {description.map(|text| view! { <p class="description">{text}</p> })}
                <div class="price-row">
                    <span class="price">{product.price.display_compact()}</span>
                    <Rating rating=product.rating label=product.rating_label()/>
                </div>

                <div class="size-selector">
                    <h2>"Select Size"</h2>
                    <div class="sizes">
                        {Size::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <button
                                        class=move || {
                                            if size.get() == Some(option) { "size selected" } else { "size" }
                                        }
                                        on:click=move |_| set_size.set(Some(option))
                                    >
                                        {option.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        size.get()
                            .map(|s| view! { <p class="selected-size">"Selected Size: " {s.label()}</p> })
                    }}
                </div>

                <div class="purchase-row">
                    <div class="stepper">
                        <button on:click=move |_| {
                            set_quantity.update(|q| *q = QuantityAction::Decrement.apply(*q))
                        }>"-"</button>
                        <span>{move || quantity.get().to_string()}</span>
                        <button on:click=move |_| {
                            set_quantity.update(|q| *q = QuantityAction::Increment.apply(*q))
                        }>"+"</button>
                    </div>
                    <button class="btn" on:click=add_to_cart>"Add to Cart"</button>
                </div>

                <button class="outline" on:click=add_to_wishlist>"Add to Wishlist"</button>
                {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
            </div>
        </div>

        <Reviews/>
        <RelatedProducts current=product.id.clone()/>
    }
}

#[component]
fn Reviews() -> impl IntoView {
    view! {
        <section class="reviews">
            <h2>"Reviews"</h2>
            {demo_reviews()
                .into_iter()
                .map(|review| {
                    view! {
                        <div class="review">
                            <div class="review-header">
                                <span class="author">{review.author.clone()}</span>
                                <span class="stars">{format!("\u{2605} {}", review.rating_label())}</span>
                            </div>
                            <p>{review.comment.clone()}</p>
                            <span class="date">"Posted on " {review.date.clone()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

/// "You Might Also Like": every other catalog product.
#[component]
fn RelatedProducts(current: ProductId) -> impl IntoView {
    let catalog = use_catalog();
    let related: Vec<Product> = catalog.related(current.as_str()).cloned().collect();

    view! {
        <section class="related">
            <h2>"You Might Also Like"</h2>
            <div class="related-grid">
                {related
                    .into_iter()
                    .map(|p| {
                        view! {
                            <A href=p.href()>
                                <div class="related-card">
                                    <img src=p.image_url.clone() alt=p.name.clone() width="300" height="300"/>
                                    <h3>{p.name.clone()}</h3>
                                    <span class="price">{p.price.display_compact()}</span>
                                    <span class="stars">{format!("\u{2605} {}", p.rating_label())}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
