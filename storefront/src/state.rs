//! Shared storefront state.
//!
//! The session lives in one `RwSignal` provided at the root; pages read it
//! with `with` and mutate it with `update`.

use std::sync::Arc;

use leptos::logging::{console_error, console_log, console_warn};
use leptos::prelude::*;
use shopco_commerce::prelude::*;
use shopco_observability::{LogLevel, LogSink};

/// Settings compiled into the bundle.
const SHOP_TOML: &str = include_str!("../shop.toml");

/// Create the catalog and session and put them in context.
pub fn provide_shop() {
    let (config, config_error) = match ShopConfig::from_toml_str(SHOP_TOML) {
        Ok(config) => (config, None),
        Err(e) => (ShopConfig::default(), Some(e)),
    };

    let session = ShopSession::with_sink(&config, console_sink());
    if let Some(e) = config_error {
        session
            .logger()
            .warn_builder("bundled config rejected, using defaults")
            .field("error", e.to_string())
            .emit();
    }

    provide_context(Arc::new(Catalog::demo(config.currency)));
    provide_context(RwSignal::new(session));
}

/// Route session logs to the browser console.
fn console_sink() -> LogSink {
    LogSink::callback(|level, line| match level {
        LogLevel::Error => console_error(line),
        LogLevel::Warn => console_warn(line),
        LogLevel::Info | LogLevel::Debug => console_log(line),
    })
}

pub fn use_session() -> RwSignal<ShopSession> {
    expect_context::<RwSignal<ShopSession>>()
}

pub fn use_catalog() -> Arc<Catalog> {
    expect_context::<Arc<Catalog>>()
}
