//! Core record definitions shared across Canvas crates.
#![allow(missing_docs)]

pub mod artist;
pub mod gallery;
pub mod lenient;
pub mod painting;
pub mod scalar;
mod text;

// Intentionally curated re-exports for downstream consumers.
pub use artist::Artist;
pub use gallery::Gallery;
pub use lenient::Lenient;
pub use painting::{
    Annotation, ArtistRef, DominantColor, GalleryRef, Painting,
    PaintingDetails,
};
pub use scalar::Scalar;

/// Attributes of a record that are carried through untouched.
pub type Attributes = serde_json::Map<String, serde_json::Value>;
