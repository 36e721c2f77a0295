#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the aggregation and reporting primitives behind a
//! personal finance tracker: balance totals, per-category budget tracking,
//! and chart-ready breakdown and trend series.
//!
//! The crate is split between a pure reporting layer (`core::services`), the
//! domain entities it consumes (`domain`), and the store boundary that
//! normalizes raw stored records into those entities (`store`). Reporting
//! functions never hold state: callers snapshot their collections and pass
//! them in on every invocation.

pub mod core;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
