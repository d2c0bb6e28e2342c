//! Core catalogue types.
//!
//! All rows are `'static` data defined in `data.rs`; these types only give
//! them shape. Serde derives keep the catalogue serializable, including the
//! post-process transform, which is a closed tag set rather than a stored
//! callable.

use serde::{Deserialize, Serialize};

/// Branch grouping, used for metadata and asset organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Infantry,
    Armor,
    FireSupport,
    Recon,
    Support,
    Command,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infantry => "infantry",
            Self::Armor => "armor",
            Self::FireSupport => "fire_support",
            Self::Recon => "recon",
            Self::Support => "support",
            Self::Command => "command",
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relative weight class of a unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitWeight {
    Light,
    Medium,
    Heavy,
}

impl UnitWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

impl std::fmt::Display for UnitWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-unit renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    /// Output size in pixels (square canvas).
    pub size: u32,
}

/// One unit type in the catalogue.
///
/// `template` is a 32-character SIDC with the affiliation digit replaced by
/// the `X` placeholder; see the layout table in [`crate::sidc`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnitDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub category: UnitCategory,
    pub weight: UnitWeight,
    pub template: &'static str,
    pub options: RenderOptions,
}

/// One affiliation axis entry: the digit substituted into the SIDC and the
/// slug used in output names.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AffiliationVariant {
    pub key: &'static str,
    pub sidc_char: char,
    pub label: &'static str,
}

/// Post-render transform attached to a confidence variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostProcess {
    None,
    /// Inject `opacity="…"` into the root `<svg>` element.
    ApplyOpacity(f32),
}

/// One confidence axis entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceVariant {
    pub key: &'static str,
    pub post_process: PostProcess,
}
