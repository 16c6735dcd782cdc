use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing::info;

use super::Catalog;
use crate::error::{CatalogError, Result};

pub const PAINTINGS_FILE: &str = "paintings-nested.json";
pub const ARTISTS_FILE: &str = "artists.json";
pub const GALLERIES_FILE: &str = "galleries.json";

/// Locations of the three JSON documents a catalog is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSources {
    pub paintings: PathBuf,
    pub artists: PathBuf,
    pub galleries: PathBuf,
}

impl CatalogSources {
    /// The default document names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            paintings: dir.join(PAINTINGS_FILE),
            artists: dir.join(ARTISTS_FILE),
            galleries: dir.join(GALLERIES_FILE),
        }
    }
}

impl Catalog {
    /// Read and parse all three documents. Each must be a JSON array.
    pub fn load(sources: &CatalogSources) -> Result<Self> {
        let catalog = Catalog::new(
            read_collection(&sources.paintings)?,
            read_collection(&sources.artists)?,
            read_collection(&sources.galleries)?,
        );

        let stats = catalog.stats();
        info!(
            paintings = stats.paintings,
            artists = stats.artists,
            galleries = stats.galleries,
            source = %sources.paintings.display(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Build a catalog from in-memory documents.
    pub fn from_json_strs(
        paintings: &str,
        artists: &str,
        galleries: &str,
    ) -> Result<Self> {
        Ok(Catalog::new(
            parse_inline(paintings, "paintings")?,
            parse_inline(artists, "artists")?,
            parse_inline(galleries, "galleries")?,
        ))
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents =
        fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_inline<T: DeserializeOwned>(
    contents: &str,
    collection: &'static str,
) -> Result<Vec<T>> {
    serde_json::from_str(contents)
        .map_err(|source| CatalogError::InlineParse { collection, source })
}
