//! The built-in catalogue tables and their load-time validation.
//!
//! Function ids (template offsets 10..16), land symbol set `10`:
//!
//! ```text
//! 121100 infantry              130800 mortar
//! 121102 mechanized infantry   130300 field artillery
//! 121104 motorized infantry    120400 anti-tank
//! 140700 engineer              163400 supply
//! 121300 reconnaissance        161300 medical
//! 120500 armour
//! ```
//!
//! Air symbol set `01`: 110300 fixed wing (used for the recon UAV).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::error::CatalogueError;
use super::types::{
    AffiliationVariant, ConfidenceVariant, PostProcess, RenderOptions, UnitCategory,
    UnitDefinition, UnitWeight,
};
use crate::sidc::{AFFILIATION_OFFSET, PLACEHOLDER, SIDC_LEN};

const SIZE_60: RenderOptions = RenderOptions { size: 60 };

pub const UNIT_DEFINITIONS: &[UnitDefinition] = &[
    // ── Infantry ──
    UnitDefinition {
        id: "inf_rifle",
        label: "Rifle Infantry",
        category: UnitCategory::Infantry,
        weight: UnitWeight::Light,
        template: "130X1000001211000000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "inf_mech",
        label: "Mechanized Infantry",
        category: UnitCategory::Infantry,
        weight: UnitWeight::Medium,
        // function id 121102 = infantry + armoured
        template: "130X1000001211020000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "inf_engineer",
        label: "Combat Engineer",
        category: UnitCategory::Infantry,
        weight: UnitWeight::Light,
        template: "130X1000001407000000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "inf_recon",
        label: "Reconnaissance",
        category: UnitCategory::Infantry,
        weight: UnitWeight::Light,
        template: "130X1000001213000000000000000000",
        options: SIZE_60,
    },
    // ── Armour ──
    UnitDefinition {
        id: "armor_tank",
        label: "Main Battle Tank",
        category: UnitCategory::Armor,
        weight: UnitWeight::Heavy,
        template: "130X1000001205000000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "armor_ifv",
        label: "Infantry Fighting Vehicle",
        category: UnitCategory::Armor,
        weight: UnitWeight::Medium,
        // shares the mechanized-infantry function id; distinct unit id keeps
        // output names unique
        template: "130X1000001211020000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "armor_apc",
        label: "Armoured Personnel Carrier",
        category: UnitCategory::Armor,
        weight: UnitWeight::Medium,
        // function id 121104 = infantry + motorized
        template: "130X1000001211040000000000000000",
        options: SIZE_60,
    },
    // ── Fire support ──
    UnitDefinition {
        id: "fs_mortar",
        label: "Mortar",
        category: UnitCategory::FireSupport,
        weight: UnitWeight::Light,
        template: "130X1000001308000000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "fs_artillery",
        label: "Field Artillery",
        category: UnitCategory::FireSupport,
        weight: UnitWeight::Heavy,
        template: "130X1000001303000000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "fs_atgm",
        label: "Anti-Tank Guided Missile",
        category: UnitCategory::FireSupport,
        weight: UnitWeight::Light,
        template: "130X1000001204000000000000000000",
        options: SIZE_60,
    },
    // ── Recon / intelligence ──
    UnitDefinition {
        id: "recon_uav",
        label: "Reconnaissance UAV",
        category: UnitCategory::Recon,
        weight: UnitWeight::Light,
        // air symbol set 01, function id 110300 = fixed wing
        template: "130X0100001103000000000000000000",
        options: SIZE_60,
    },
    // ── Support ──
    UnitDefinition {
        id: "sup_logistics",
        label: "Logistics / Supply",
        category: UnitCategory::Support,
        weight: UnitWeight::Light,
        template: "130X1000001634000000000000000000",
        options: SIZE_60,
    },
    UnitDefinition {
        id: "sup_medevac",
        label: "Medical / Evacuation",
        category: UnitCategory::Support,
        weight: UnitWeight::Light,
        template: "130X1000001613000000000000000000",
        options: SIZE_60,
    },
    // ── Command ──
    UnitDefinition {
        id: "cmd_hq",
        label: "Company Headquarters",
        category: UnitCategory::Command,
        weight: UnitWeight::Light,
        // HQ flag set, echelon 13 (company), infantry icon
        template: "130X1001131211000000000000000000",
        options: SIZE_60,
    },
];

/// Affiliation digit at SIDC position 3: 3 = friendly, 6 = hostile,
/// 1 = unknown.
pub const AFFILIATIONS: &[AffiliationVariant] = &[
    AffiliationVariant {
        key: "friendly",
        sidc_char: '3',
        label: "Friendly",
    },
    AffiliationVariant {
        key: "hostile",
        sidc_char: '6',
        label: "Hostile",
    },
    AffiliationVariant {
        key: "unknown",
        sidc_char: '1',
        label: "Unknown",
    },
];

/// Confidence axis: `conf` renders as-is, `sus` is dimmed to signal a
/// suspected contact. Lost contacts are hidden by the game and need no file.
pub const CONFIDENCE_VARIANTS: &[ConfidenceVariant] = &[
    ConfidenceVariant {
        key: "conf",
        post_process: PostProcess::None,
    },
    ConfidenceVariant {
        key: "sus",
        post_process: PostProcess::ApplyOpacity(0.55),
    },
];

/// 32 characters: three leading digits, the affiliation placeholder,
/// 28 trailing digits.
static TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}X[0-9]{28}$").unwrap());

/// The validated, read-only catalogue handed to the expander.
#[derive(Debug, Clone)]
pub struct Catalogue {
    pub units: Vec<UnitDefinition>,
    pub affiliations: Vec<AffiliationVariant>,
    pub confidences: Vec<ConfidenceVariant>,
}

impl Catalogue {
    /// Load the built-in tables, failing fast on any authoring defect.
    pub fn load() -> Result<Self, CatalogueError> {
        Self::from_parts(UNIT_DEFINITIONS, AFFILIATIONS, CONFIDENCE_VARIANTS)
    }

    /// Validate arbitrary tables. The public entry for tests and for any
    /// future data-driven catalogue source.
    pub fn from_parts(
        units: &[UnitDefinition],
        affiliations: &[AffiliationVariant],
        confidences: &[ConfidenceVariant],
    ) -> Result<Self, CatalogueError> {
        let mut unit_ids = HashSet::new();
        for unit in units {
            if let Err(reason) = check_template(unit.template) {
                return Err(CatalogueError::MalformedTemplate {
                    unit_id: unit.id.to_string(),
                    reason,
                });
            }
            if !unit_ids.insert(unit.id) {
                return Err(CatalogueError::DuplicateId(unit.id.to_string()));
            }
        }

        let mut affiliation_keys = HashSet::new();
        for affiliation in affiliations {
            if !affiliation.sidc_char.is_ascii_digit() {
                return Err(CatalogueError::NonDigitAffiliation {
                    key: affiliation.key.to_string(),
                    found: affiliation.sidc_char,
                });
            }
            if !affiliation_keys.insert(affiliation.key) {
                return Err(CatalogueError::DuplicateVariantKey {
                    axis: "affiliation",
                    key: affiliation.key.to_string(),
                });
            }
        }

        let mut confidence_keys = HashSet::new();
        for confidence in confidences {
            if !confidence_keys.insert(confidence.key) {
                return Err(CatalogueError::DuplicateVariantKey {
                    axis: "confidence",
                    key: confidence.key.to_string(),
                });
            }
        }

        Ok(Self {
            units: units.to_vec(),
            affiliations: affiliations.to_vec(),
            confidences: confidences.to_vec(),
        })
    }
}

/// Human-readable reason for a template that failed the shape check.
fn check_template(template: &str) -> Result<(), String> {
    if TEMPLATE_RE.is_match(template) {
        return Ok(());
    }
    let chars: Vec<char> = template.chars().collect();
    if chars.len() != SIDC_LEN {
        return Err(format!("length {}, expected {SIDC_LEN}", chars.len()));
    }
    if chars[AFFILIATION_OFFSET] != PLACEHOLDER {
        return Err(format!(
            "expected placeholder `{PLACEHOLDER}` at offset {AFFILIATION_OFFSET}, found `{}`",
            chars[AFFILIATION_OFFSET]
        ));
    }
    Err("non-digit character outside the placeholder position".to_string())
}
