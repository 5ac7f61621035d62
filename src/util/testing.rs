//! Logging setup and fixtures shared by unit and integration tests.

use std::sync::Once;

use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Addin, Coffee, Order};

static TEST_SETUP: Once = Once::new();

/// Installs the test subscriber once per process.
///
/// Honours `RUST_LOG`, defaulting to `trace` for this crate.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // termtree and friends are not worth tracing in tests
    let noisy_modules = ["termtree"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brewtree=trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Turkish coffee (5) with sugar (0.2) and milk (0.7).
pub fn turkish_with_sugar_and_milk() -> Coffee {
    Coffee::new("Turkish Coffee", Decimal::new(5, 0))
        .with(Addin::new("Sugar", Decimal::new(2, 1)))
        .with(Addin::new("Milk", Decimal::new(7, 1)))
}

/// France coffee (7) with milk (0.7).
pub fn france_with_milk() -> Coffee {
    Coffee::new("France Coffee", Decimal::new(7, 0)).with(Addin::new("Milk", Decimal::new(7, 1)))
}

/// The reference order containing both coffees above.
pub fn reference_order() -> Order {
    Order::new()
        .with(turkish_with_sugar_and_milk())
        .with(france_with_milk())
}
