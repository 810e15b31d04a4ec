//! Home page listing sections.

use leptos::prelude::*;
use leptos_router::components::A;
use shopco_commerce::prelude::*;

use crate::state::{use_catalog, use_session};

/// Home page: hero plus one grid per featured section.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"FIND CLOTHES THAT MATCHES YOUR STYLE"</h1>
            <p>
                "Browse through our diverse range of meticulously crafted garments, "
                "designed to bring out your individuality."
            </p>
            <a href="#arrival" class="btn">"Shop Now"</a>
        </section>

        {ProductSection::ALL
            .into_iter()
            .map(|section| view! { <SectionGrid section=section/> })
            .collect_view()}
    }
}

#[component]
fn SectionGrid(section: ProductSection) -> impl IntoView {
    let catalog = use_catalog();
    let products: Vec<Product> = catalog.section(section).cloned().collect();

    view! {
        <section id=section.anchor() class="listing">
            <h2>{section.title()}</h2>
            <div class="product-row">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Listing card with an "Add to Wishlist" button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let session = use_session();
    let item = product.to_wishlist_item();
    let id = product.id.clone();
    let saved = move || session.with(|s| s.wishlist().contains(&id));

    let save = move |_| {
        session.update(|s| {
            s.add_to_wishlist(item.clone());
        });
    };

    view! {
        <div class="product-card">
            <A href=product.href()>
                <img
                    src=product.image_url.clone()
                    alt=product.name.clone()
                    width="300"
                    height="300"
                />
                <h4>{product.name.clone()}</h4>
                <Rating rating=product.rating label=product.rating_label()/>
                <p class="price">{product.price.display_compact()}</p>
            </A>
            <button class="outline" on:click=save>
                {move || if saved() { "Saved to Wishlist" } else { "Add to Wishlist" }}
            </button>
        </div>
    }
}

/// Star row followed by a text label.
#[component]
pub fn Rating(rating: u8, label: String) -> impl IntoView {
    let stars = "\u{2605}".repeat(usize::from(rating));

    view! {
        <div class="rating">
            <span class="stars">{stars}</span>
            <span class="rating-label">{label}</span>
        </div>
    }
}
