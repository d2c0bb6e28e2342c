//! Variant expansion: catalogue × affiliation × confidence → tasks.
//!
//! Expansion is pure and lazy. Recomputing it twice yields identical tasks,
//! and no two tasks share an output name (unit ids are unique, the variant
//! axes are closed), so a batch can be re-driven at any time without
//! coordination.

use crate::catalogue::{AffiliationVariant, Catalogue, ConfidenceVariant, UnitDefinition};
use crate::sidc;

/// One (unit, affiliation, confidence) combination ready for rendering.
/// Lives only for the duration of a generation pass.
#[derive(Debug, Clone)]
pub struct GenerationTask<'a> {
    pub unit: &'a UnitDefinition,
    pub affiliation: &'a AffiliationVariant,
    pub confidence: &'a ConfidenceVariant,
    /// The unit's template with the affiliation digit substituted in.
    pub sidc: String,
    /// Deterministic output key: `{unit.id}_{affiliation.key}_{confidence.key}`.
    pub output_name: String,
}

impl GenerationTask<'_> {
    /// SVG comment block embedded at the top of every generated file.
    pub fn metadata_comment(&self) -> String {
        format!(
            "<!-- APP-6E unit symbol\n\
             \x20    unit_id: {}\n\
             \x20    label: {}\n\
             \x20    sidc: {}\n\
             \x20    affiliation: {}\n\
             \x20    confidence: {}\n\
             \x20    weight: {}\n\
             \x20    category: {}\n\
             -->",
            self.unit.id,
            self.unit.label,
            self.sidc,
            self.affiliation.key,
            self.confidence.key,
            self.unit.weight,
            self.unit.category,
        )
    }
}

/// Cross-product the catalogue in a fixed order: units outer, affiliations
/// middle, confidences inner. The ordering only matters for log and
/// directory readability, never for correctness.
pub fn expand(catalogue: &Catalogue) -> impl Iterator<Item = GenerationTask<'_>> + '_ {
    catalogue.units.iter().flat_map(move |unit| {
        catalogue.affiliations.iter().flat_map(move |affiliation| {
            let sidc = sidc::resolve(unit.template, affiliation.sidc_char);
            catalogue.confidences.iter().map(move |confidence| GenerationTask {
                unit,
                affiliation,
                confidence,
                sidc: sidc.clone(),
                output_name: format!("{}_{}_{}", unit.id, affiliation.key, confidence.key),
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalogue::{
        RenderOptions, UnitCategory, UnitWeight, AFFILIATIONS, CONFIDENCE_VARIANTS,
    };

    fn one_unit_catalogue() -> Catalogue {
        let units = [UnitDefinition {
            id: "inf_rifle",
            label: "Rifle Infantry",
            category: UnitCategory::Infantry,
            weight: UnitWeight::Light,
            template: "130X1000001211000000000000000000",
            options: RenderOptions { size: 60 },
        }];
        Catalogue::from_parts(&units, AFFILIATIONS, CONFIDENCE_VARIANTS).unwrap()
    }

    #[test]
    fn expansion_covers_the_full_cross_product() {
        let catalogue = Catalogue::load().unwrap();
        let expected =
            catalogue.units.len() * catalogue.affiliations.len() * catalogue.confidences.len();

        let tasks: Vec<_> = expand(&catalogue).collect();
        assert_eq!(tasks.len(), expected);
        assert_eq!(tasks.len(), 84);
    }

    #[test]
    fn output_names_are_pairwise_distinct() {
        let catalogue = Catalogue::load().unwrap();
        let mut seen = HashSet::new();
        for task in expand(&catalogue) {
            assert!(
                seen.insert(task.output_name.clone()),
                "duplicate output name {}",
                task.output_name
            );
        }
    }

    #[test]
    fn expansion_is_deterministic_and_restartable() {
        let catalogue = Catalogue::load().unwrap();
        let first: Vec<_> = expand(&catalogue)
            .map(|t| (t.sidc, t.output_name))
            .collect();
        let second: Vec<_> = expand(&catalogue)
            .map(|t| (t.sidc, t.output_name))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn one_unit_expands_to_the_six_reference_names() {
        let catalogue = one_unit_catalogue();
        let names: Vec<_> = expand(&catalogue).map(|t| t.output_name).collect();
        assert_eq!(
            names,
            vec![
                "inf_rifle_friendly_conf",
                "inf_rifle_friendly_sus",
                "inf_rifle_hostile_conf",
                "inf_rifle_hostile_sus",
                "inf_rifle_unknown_conf",
                "inf_rifle_unknown_sus",
            ]
        );
    }

    #[test]
    fn tasks_carry_the_resolved_sidc() {
        let catalogue = one_unit_catalogue();
        for task in expand(&catalogue) {
            assert_eq!(
                task.sidc,
                sidc::resolve(task.unit.template, task.affiliation.sidc_char)
            );
            assert_eq!(sidc::affiliation(&task.sidc), task.affiliation.sidc_char);
        }
    }

    #[test]
    fn metadata_comment_names_the_combination() {
        let catalogue = one_unit_catalogue();
        let task = expand(&catalogue).next().unwrap();
        let comment = task.metadata_comment();

        assert!(comment.starts_with("<!--"));
        assert!(comment.ends_with("-->"));
        assert!(comment.contains("unit_id: inf_rifle"));
        assert!(comment.contains("affiliation: friendly"));
        assert!(comment.contains("confidence: conf"));
        assert!(comment.contains("sidc: 13031000001211000000000000000000"));
        assert!(comment.contains("weight: light"));
        assert!(comment.contains("category: infantry"));
    }
}
