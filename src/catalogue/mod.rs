//! The static symbol catalogue: unit definitions and the two variant axes.
//!
//! Everything is read-only after [`Catalogue::load`]; adding a unit, an
//! affiliation or a confidence variant is a data-authoring change in
//! `data.rs`, never a code-path change. Authoring defects (malformed
//! templates, duplicate keys) are caught once at load time and are fatal
//! for the run.

pub mod data;
pub mod error;
pub mod types;

pub use data::{Catalogue, AFFILIATIONS, CONFIDENCE_VARIANTS, UNIT_DEFINITIONS};
pub use error::CatalogueError;
pub use types::*;
