//! Read-only REST API over a static art catalog (paintings, artists, galleries).

pub mod api;
pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
