//! Static art catalog.
//!
//! # Data Flow
//! ```text
//! data/*.json (read once at startup)
//!     → store.rs (deserialize into typed records)
//!     → Catalog (immutable, shared via Arc)
//!     → query.rs (single-pass filters, file order preserved)
//! ```

pub mod model;
pub mod query;
pub mod store;

pub use model::{Annotation, Artist, DominantColor, Gallery, Painting, PaintingArtist, PaintingDetails, PaintingGallery};
pub use store::{Catalog, CatalogError};
