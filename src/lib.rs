pub mod batch; // task loop with per-task failure isolation
pub mod catalogue; // unit definitions + the affiliation/confidence axes
pub mod config;
pub mod expand; // catalogue cross-product → generation tasks
pub mod render; // renderer collaborator boundary + bundled frame renderer
pub mod sidc; // SIDC template substitution + field layout
pub mod sink; // flat-file output
