//! Course price catalog and page-support tooling for the e-room website.
//!
//! The price catalog is compiled from `data/catalog.toml` at build time; see
//! [`Resolver`] for turning a course, room and period selection into a quote.

pub mod carousel;
pub mod constants;
pub mod error;
pub mod models;
pub mod prelude;
pub mod repository;
pub mod resolver;
pub mod slideshow;
pub mod voices;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use self::error::PricingError;
pub use self::models::{Catalog, Course, Occupancy, Period, PriceTable, Yen};
pub use self::repository::Repository;
pub use self::resolver::{Description, Quote, Resolver, Selection};

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
