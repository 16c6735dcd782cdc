//! # Canvas Core
//!
//! Core library for the Canvas catalog service: the in-memory art catalog and
//! the fixed set of queries answered over it.
//!
//! ## Overview
//!
//! - [`catalog`]: the immutable [`Catalog`] of paintings, artists and
//!   galleries, and loading it from the three JSON source documents
//! - [`query`]: lookups and filters over the catalog, returning a
//!   [`QueryOutcome`] that is either a result or an explicit empty signal
//! - [`api`]: route paths and the messages sent when a query finds nothing
//!
//! Queries never fail. A malformed parameter, an unknown id or a record
//! missing the inspected field all end in [`QueryOutcome::Empty`].
//!
//! ## Examples
//!
//! ```
//! use canvas_core::{Catalog, QueryOutcome};
//!
//! let catalog = Catalog::from_json_strs(
//!     r#"[{"paintingID": 7, "title": "Water Lilies", "yearOfWork": 1919}]"#,
//!     "[]",
//!     "[]",
//! )
//! .unwrap();
//!
//! assert!(catalog.painting_by_id("7").is_found());
//! assert_eq!(catalog.paintings_in_years("1920", "1930"), QueryOutcome::Empty);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Route paths and miss messages shared by the server and its tests
pub mod api;

/// The in-memory catalog and its loader
pub mod catalog;

pub mod error;

/// Lookups and filters over the catalog
pub mod query;

pub use canvas_model as model;
pub use catalog::{Catalog, CatalogStats, loader::CatalogSources};
pub use error::{CatalogError, Result};
pub use query::{CaseFolded, QueryOutcome, YearRange};
