//! Renderer collaborator boundary.
//!
//! The batch driver treats rendering as an opaque capability: hand over a
//! resolved SIDC plus per-unit options, get back markup or an error.
//! Swapping the bundled [`FrameRenderer`] for another backend is an
//! implementation of [`SymbolRenderer`], never a driver change.

pub mod frame;

pub use frame::FrameRenderer;

use thiserror::Error;

use crate::catalogue::RenderOptions;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid SIDC `{code}`: {reason}")]
    InvalidIdentifier { code: String, reason: String },
}

/// A rendered symbol plus the renderer's own diagnostics.
#[derive(Debug, Clone)]
pub struct RenderedSymbol {
    /// A standalone SVG document.
    pub svg: String,
    /// True when the renderer did not recognise the function id and drew its
    /// placeholder glyph instead. The renderer owns this signal so callers
    /// never have to sniff the markup for it.
    pub is_fallback: bool,
}

pub trait SymbolRenderer: Send + Sync {
    fn render(&self, sidc: &str, options: &RenderOptions)
        -> Result<RenderedSymbol, RenderError>;
}
