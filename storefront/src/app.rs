//! Application shell and layout.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::pages::{CartPage, HomePage, ProductPage, WishlistPage};
use crate::state::{provide_shop, use_session};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_shop();

    view! {
        <Meta name="description" content="SHOP.CO - find clothes that match your style"/>
        <Title text="SHOP.CO"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/wishlist") view=WishlistPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let cart_count = move || session.with(|s| s.cart().item_count()).to_string();
    let wishlist_count = move || session.with(|s| s.wishlist().len()).to_string();

    view! {
        <header>
            <div class="promo-banner">
                "Sign up and get 20% off on your first order"
            </div>
            <nav class="site-nav">
                <A href="/">
                    <span class="brand">"SHOP.CO"</span>
                </A>
                <div class="nav-links">
                    <a href="/#topsell">"On Sale"</a>
                    <a href="/#arrival">"New Arrivals"</a>
                </div>
                <div class="nav-icons">
                    <A href="/wishlist">"Wishlist (" {wishlist_count} ")"</A>
                    <A href="/cart">"Cart (" {cart_count} ")"</A>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"SHOP.CO - Shop.co \u{a9} 2000-2024, All Rights Reserved"</p>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Back to Home"</A>
        </div>
    }
}
