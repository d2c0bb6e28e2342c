//! Built-in APP-6E frame renderer.
//!
//! Draws the affiliation frame, the function icon and the HQ/echelon
//! decorations as plain SVG markup on a 64×64 canvas, scaled by the unit's
//! render options. Icon geometry is a simplified rendition of the standard
//! set; frame shape and fill follow the standard light palette. Anything
//! outside the known function-id table gets the placeholder glyph and an
//! explicit fallback flag.

use super::{RenderError, RenderedSymbol, SymbolRenderer};
use crate::catalogue::RenderOptions;
use crate::sidc;

// Affiliation frames (fills from the standard light palette).
const FRAME_FRIENDLY: &str = r##"<rect x="8" y="16" width="48" height="32" fill="#80E0FF" stroke="#000000" stroke-width="2"/>"##;
const FRAME_HOSTILE: &str = r##"<path d="M32 6 L58 32 L32 58 L6 32 Z" fill="#FF8080" stroke="#000000" stroke-width="2"/>"##;
const FRAME_UNKNOWN: &str = r##"<path d="M16 16 A16 16 0 0 1 48 16 A16 16 0 0 1 48 48 A16 16 0 0 1 16 48 A16 16 0 0 1 16 16 Z" fill="#FFFF80" stroke="#000000" stroke-width="2"/>"##;

// Function icons, drawn inside the 16..48 inner box.
const ICON_INFANTRY: &str = r##"<path d="M16 20 L48 44 M16 44 L48 20" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_INFANTRY_MECH: &str = r##"<path d="M16 20 L48 44 M16 44 L48 20" fill="none" stroke="#000000" stroke-width="2"/><ellipse cx="32" cy="32" rx="13" ry="7" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_INFANTRY_MOT: &str = r##"<path d="M16 20 L48 44 M16 44 L48 20 M32 20 L32 44" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_ENGINEER: &str = r##"<path d="M20 36 H44 M24 36 V28 M32 36 V28 M40 36 V28" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_RECON: &str = r##"<path d="M16 44 L48 20" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_ARMOUR: &str = r##"<ellipse cx="32" cy="32" rx="14" ry="8" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_MORTAR: &str = r##"<circle cx="32" cy="38" r="3" fill="#000000"/><path d="M32 36 V22 M28 26 L32 22 L36 26" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_ARTILLERY: &str = r##"<circle cx="32" cy="32" r="5" fill="#000000"/>"##;
const ICON_ANTITANK: &str = r##"<path d="M16 44 L32 20 L48 44" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_SUPPLY: &str = r##"<path d="M16 38 H48" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_MEDICAL: &str = r##"<path d="M32 22 V42 M22 32 H42" fill="none" stroke="#000000" stroke-width="2"/>"##;
const ICON_FIXED_WING: &str = r##"<path d="M16 32 Q24 22 32 32 Q40 42 48 32" fill="none" stroke="#000000" stroke-width="2"/>"##;

/// Placeholder for unrecognised function ids.
const FALLBACK_GLYPH: &str = r##"<text x="32" y="41" text-anchor="middle" font-family="sans-serif" font-size="26" fill="#000000">?</text>"##;

// Decorations.
const HQ_STAFF: &str = r##"<path d="M8 48 V62" fill="none" stroke="#000000" stroke-width="2"/>"##;
const COMPANY_TICK: &str = r##"<path d="M32 4 V12" fill="none" stroke="#000000" stroke-width="2"/>"##;

const ECHELON_COMPANY: &str = "13";

pub struct FrameRenderer;

impl FrameRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolRenderer for FrameRenderer {
    fn render(
        &self,
        code: &str,
        options: &RenderOptions,
    ) -> Result<RenderedSymbol, RenderError> {
        validate(code)?;

        let mut body = String::new();
        body.push_str(frame_markup(sidc::affiliation(code)));

        let icon = icon_markup(sidc::symbol_set(code), sidc::function_id(code));
        let is_fallback = icon.is_none();
        body.push_str(icon.unwrap_or(FALLBACK_GLYPH));
        if is_fallback {
            tracing::debug!(
                code,
                function_id = sidc::function_id(code),
                "no icon for function id, drawing placeholder glyph"
            );
        }

        if sidc::is_headquarters(code) {
            body.push_str(HQ_STAFF);
        }
        if sidc::echelon(code) == ECHELON_COMPANY {
            body.push_str(COMPANY_TICK);
        }

        let size = options.size;
        let svg = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 64 64">{body}</svg>"##
        );

        Ok(RenderedSymbol { svg, is_fallback })
    }
}

fn validate(code: &str) -> Result<(), RenderError> {
    if code.len() != sidc::SIDC_LEN || !code.is_ascii() {
        return Err(RenderError::InvalidIdentifier {
            code: code.to_string(),
            reason: format!("length {}, expected {}", code.chars().count(), sidc::SIDC_LEN),
        });
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RenderError::InvalidIdentifier {
            code: code.to_string(),
            reason: "contains non-digit characters".to_string(),
        });
    }
    Ok(())
}

/// Frame geometry is affiliation-driven; the symbol set only selects the
/// icon table. Codes outside the catalogue's axis get the unknown frame.
fn frame_markup(affiliation: char) -> &'static str {
    match affiliation {
        '3' => FRAME_FRIENDLY,
        '6' => FRAME_HOSTILE,
        _ => FRAME_UNKNOWN,
    }
}

fn icon_markup(symbol_set: &str, function_id: &str) -> Option<&'static str> {
    match (symbol_set, function_id) {
        ("10", "121100") => Some(ICON_INFANTRY),
        ("10", "121102") => Some(ICON_INFANTRY_MECH),
        ("10", "121104") => Some(ICON_INFANTRY_MOT),
        ("10", "140700") => Some(ICON_ENGINEER),
        ("10", "121300") => Some(ICON_RECON),
        ("10", "120500") => Some(ICON_ARMOUR),
        ("10", "130800") => Some(ICON_MORTAR),
        ("10", "130300") => Some(ICON_ARTILLERY),
        ("10", "120400") => Some(ICON_ANTITANK),
        ("10", "163400") => Some(ICON_SUPPLY),
        ("10", "161300") => Some(ICON_MEDICAL),
        ("01", "110300") => Some(ICON_FIXED_WING),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::sidc::resolve;

    const OPTIONS: RenderOptions = RenderOptions { size: 60 };

    #[test]
    fn friendly_infantry_renders_a_rectangle_frame() {
        let code = resolve("130X1000001211000000000000000000", '3');
        let rendered = FrameRenderer::new().render(&code, &OPTIONS).unwrap();

        assert!(rendered.svg.starts_with("<svg"));
        assert!(rendered.svg.ends_with("</svg>"));
        assert!(rendered.svg.contains("#80E0FF"));
        assert!(rendered.svg.contains("<rect"));
        assert!(!rendered.is_fallback);
    }

    #[test]
    fn hostile_units_get_the_diamond_frame() {
        let code = resolve("130X1000001205000000000000000000", '6');
        let rendered = FrameRenderer::new().render(&code, &OPTIONS).unwrap();
        assert!(rendered.svg.contains("#FF8080"));
        assert!(rendered.svg.contains("M32 6 L58 32"));
    }

    #[test]
    fn unknown_units_get_the_quatrefoil_frame() {
        let code = resolve("130X1000001211000000000000000000", '1');
        let rendered = FrameRenderer::new().render(&code, &OPTIONS).unwrap();
        assert!(rendered.svg.contains("#FFFF80"));
    }

    #[test]
    fn unrecognised_function_id_falls_back_with_flag() {
        let code = resolve("130X1000009999990000000000000000", '3');
        let rendered = FrameRenderer::new().render(&code, &OPTIONS).unwrap();
        assert!(rendered.is_fallback);
        assert!(rendered.svg.contains(">?</text>"));
    }

    #[test]
    fn headquarters_template_draws_staff_and_company_tick() {
        let code = resolve("130X1001131211000000000000000000", '3');
        let rendered = FrameRenderer::new().render(&code, &OPTIONS).unwrap();
        assert!(rendered.svg.contains("M8 48 V62"));
        assert!(rendered.svg.contains("M32 4 V12"));
    }

    #[test]
    fn size_option_scales_the_document() {
        let code = resolve("130X1000001211000000000000000000", '3');
        let rendered = FrameRenderer::new()
            .render(&code, &RenderOptions { size: 120 })
            .unwrap();
        assert!(rendered.svg.contains(r#"width="120""#));
        assert!(rendered.svg.contains(r#"height="120""#));
    }

    #[test]
    fn rejects_wrong_length_identifier() {
        let err = FrameRenderer::new()
            .render("130310000012110000000000000000", &OPTIONS)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidIdentifier { .. }));
        assert!(err.to_string().contains("length 30"));
    }

    #[test]
    fn rejects_unresolved_template() {
        // Placeholder still present; the expander never produced this.
        let err = FrameRenderer::new()
            .render("130X1000001211000000000000000000", &OPTIONS)
            .unwrap_err();
        assert!(err.to_string().contains("non-digit"));
    }

    #[test]
    fn every_catalogue_combination_has_an_icon() {
        let catalogue = Catalogue::load().unwrap();
        let renderer = FrameRenderer::new();
        for unit in &catalogue.units {
            for affiliation in &catalogue.affiliations {
                let code = resolve(unit.template, affiliation.sidc_char);
                let rendered = renderer.render(&code, &unit.options).unwrap();
                assert!(
                    !rendered.is_fallback,
                    "unit {} rendered the placeholder glyph",
                    unit.id
                );
            }
        }
    }
}
