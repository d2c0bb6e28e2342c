//! Catalogue validation errors.
//!
//! All of these are data-authoring defects, caught once at load time before
//! any task is produced. They are fatal for the whole run, unlike per-task
//! render/write failures, which the batch driver isolates and counts.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("unit `{unit_id}`: malformed SIDC template ({reason})")]
    MalformedTemplate { unit_id: String, reason: String },

    #[error("duplicate unit id `{0}`: output names would silently collide")]
    DuplicateId(String),

    #[error("affiliation `{key}`: substitution character `{found}` is not an ASCII digit")]
    NonDigitAffiliation { key: String, found: char },

    #[error("duplicate {axis} key `{key}`: output names would silently collide")]
    DuplicateVariantKey { axis: &'static str, key: String },
}
