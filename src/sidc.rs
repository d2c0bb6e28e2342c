//! SIDC (Symbol Identification Code) templates and field layout.
//!
//! APP-6E / MIL-STD-2525E number-based SIDCs are 32-character digit strings.
//! Catalogue templates keep position 3 (the affiliation digit) as an `X`
//! placeholder; [`resolve`] substitutes a variant's affiliation code into it.
//!
//! Layout of a resolved code:
//!
//! | offset | len | field                                            |
//! |--------|-----|--------------------------------------------------|
//! | 0      | 2   | version (13 = APP-6E / 2525E)                    |
//! | 2      | 1   | context (0 = reality)                            |
//! | 3      | 1   | affiliation (3 friendly, 6 hostile, 1 unknown)   |
//! | 4      | 2   | symbol set (10 = land unit, 01 = air)            |
//! | 6      | 1   | status (0 = present)                             |
//! | 7      | 1   | HQ / task force / dummy (1 = HQ)                 |
//! | 8      | 2   | echelon / mobility (13 = company)                |
//! | 10     | 6   | main icon / function id                          |
//! | 16     | 4   | modifier 1 + modifier 2                          |
//! | 20     | 12  | reserved                                         |

/// Length of a well-formed SIDC, and of every catalogue template.
pub const SIDC_LEN: usize = 32;

/// Offset of the affiliation digit, the single substitutable position.
pub const AFFILIATION_OFFSET: usize = 3;

/// Placeholder character catalogue templates carry at [`AFFILIATION_OFFSET`].
pub const PLACEHOLDER: char = 'X';

/// Substitute the affiliation character into a SIDC template.
///
/// Pure string surgery: the result equals `template` with the character at
/// [`AFFILIATION_OFFSET`] replaced by `affiliation`, every other character
/// unchanged. Template well-formedness (length, digit alphabet) is a
/// catalogue-load invariant and is not rechecked here.
pub fn resolve(template: &str, affiliation: char) -> String {
    template
        .chars()
        .enumerate()
        .map(|(i, c)| if i == AFFILIATION_OFFSET { affiliation } else { c })
        .collect()
}

// Field accessors over a resolved code. Callers must hold a well-formed
// 32-character ASCII SIDC (the renderer validates before using these).

pub fn affiliation(code: &str) -> char {
    code.as_bytes()[AFFILIATION_OFFSET] as char
}

pub fn symbol_set(code: &str) -> &str {
    &code[4..6]
}

pub fn is_headquarters(code: &str) -> bool {
    code.as_bytes()[7] == b'1'
}

pub fn echelon(code: &str) -> &str {
    &code[8..10]
}

pub fn function_id(code: &str) -> &str {
    &code[10..16]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_substitutes_only_the_affiliation_position() {
        let template = "130X1000001211000000000000000000";
        let resolved = resolve(template, '6');

        assert_eq!(resolved.len(), template.len());
        for (i, (before, after)) in template.chars().zip(resolved.chars()).enumerate() {
            if i == AFFILIATION_OFFSET {
                assert_eq!(after, '6');
            } else {
                assert_eq!(before, after, "position {i} changed");
            }
        }
    }

    #[test]
    fn resolve_matches_reference_substitution() {
        // Substitution is position-based, independent of template length.
        assert_eq!(
            resolve("130X10000012110000000000000000", '3'),
            "130310000012110000000000000000"
        );
    }

    #[test]
    fn resolve_supports_every_affiliation_digit() {
        let template = "130X1000001211000000000000000000";
        assert_eq!(affiliation(&resolve(template, '3')), '3');
        assert_eq!(affiliation(&resolve(template, '6')), '6');
        assert_eq!(affiliation(&resolve(template, '1')), '1');
    }

    #[test]
    fn field_accessors_read_documented_offsets() {
        let code = resolve("130X1001131211000000000000000000", '3');
        assert_eq!(symbol_set(&code), "10");
        assert!(is_headquarters(&code));
        assert_eq!(echelon(&code), "13");
        assert_eq!(function_id(&code), "121100");
    }

    #[test]
    fn plain_unit_is_not_headquarters() {
        let code = resolve("130X1000001205000000000000000000", '6');
        assert!(!is_headquarters(&code));
        assert_eq!(echelon(&code), "00");
        assert_eq!(function_id(&code), "120500");
    }
}
