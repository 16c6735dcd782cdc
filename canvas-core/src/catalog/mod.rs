pub mod loader;

use canvas_model::{Artist, Gallery, Painting};
use serde::Serialize;

/// The three catalog collections, fixed for the life of the process.
///
/// Nothing hands out mutable access once a catalog is built, so a single
/// instance behind an `Arc` serves every request handler without locking.
/// Collections keep the order of their source documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    paintings: Vec<Painting>,
    artists: Vec<Artist>,
    galleries: Vec<Gallery>,
}

/// Collection sizes, reported by health checks and startup logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub paintings: usize,
    pub artists: usize,
    pub galleries: usize,
}

impl Catalog {
    pub fn new(
        paintings: Vec<Painting>,
        artists: Vec<Artist>,
        galleries: Vec<Gallery>,
    ) -> Self {
        Self {
            paintings,
            artists,
            galleries,
        }
    }

    pub fn paintings(&self) -> &[Painting] {
        &self.paintings
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            paintings: self.paintings.len(),
            artists: self.artists.len(),
            galleries: self.galleries.len(),
        }
    }
}
