use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a catalog. Queries themselves never fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {collection} collection: {source}")]
    InlineParse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
