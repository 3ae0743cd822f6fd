//! Table module: lowercase characters to homoglyph variants
//!
//! The built-in table covers the Latin lowercase alphabet, the digits
//! with convincing look-alikes, and a few punctuation characters.
//! Lookups always go through the lowercased form of the input character.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in confusable pairs. Every variant list is non-empty.
#[rustfmt::skip]
const BUILTIN_VARIANTS: &[(char, &[char])] = &[
    ('a', &['а', 'ɑ']),   // cyrillic a, latin alpha
    ('b', &['Ь', 'ʙ']),   // cyrillic soft sign, small capital b
    ('c', &['ϲ', 'с']),   // greek lunate sigma, cyrillic es
    ('d', &['ԁ', 'đ']),   // cyrillic komi de, d with stroke
    ('e', &['е', 'є']),   // cyrillic ie, ukrainian ie
    ('f', &['ƒ']),        // f with hook
    ('g', &['ɡ', 'ց']),   // latin script g, armenian co
    ('h', &['հ', 'ɦ']),   // armenian ho, h with hook
    ('i', &['і', 'ı']),   // cyrillic dotted i, dotless i
    ('j', &['ϳ']),        // greek yot
    ('k', &['κ']),        // greek kappa
    ('l', &['Ɩ', 'ӏ']),   // latin capital iota, cyrillic palochka
    ('m', &['м']),        // cyrillic em
    ('n', &['ո', 'п']),   // armenian vo, cyrillic pe
    ('o', &['о', 'ο']),   // cyrillic o, greek omicron
    ('p', &['р', 'ρ']),   // cyrillic er, greek rho
    ('q', &['զ']),        // armenian za
    ('r', &['г']),        // cyrillic ghe
    ('s', &['ѕ', 'ꜱ']),   // cyrillic dze, small capital s
    ('t', &['т']),        // cyrillic te
    ('u', &['υ', 'ս']),   // greek upsilon, armenian se
    ('v', &['ν']),        // greek nu
    ('w', &['ѡ']),        // cyrillic omega
    ('x', &['х']),        // cyrillic ha
    ('y', &['у', 'γ']),   // cyrillic u, greek gamma
    ('z', &['z', 'з']),   // identity, cyrillic ze
    ('0', &['O']),
    ('1', &['l', 'I']),
    ('2', &['Ƨ']),        // tone two
    ('5', &['Ƽ']),        // tone five
    ('6', &['9']),
    ('8', &['B']),
    (' ', &['\u{00a0}']), // no-break space
    ('.', &['․']),        // one dot leader
    ('-', &['–']),        // en dash
    ('_', &['˯']),        // modifier letter low down arrowhead
];

static BUILTIN: Lazy<HomoglyphTable> = Lazy::new(|| HomoglyphTable::from_pairs(BUILTIN_VARIANTS));

/// Immutable lookup table from a lowercase character to its homoglyph
/// variants.
#[derive(Debug, Clone)]
pub struct HomoglyphTable {
    variants: HashMap<char, Vec<char>>,
}

impl HomoglyphTable {
    /// The built-in table, constructed once on first use and shared
    /// process-wide.
    pub fn builtin() -> &'static HomoglyphTable {
        &BUILTIN
    }

    /// Build a table from (key, variants) pairs. Keys are stored in
    /// their lowercase form.
    pub fn from_pairs(pairs: &[(char, &[char])]) -> Self {
        let mut variants = HashMap::with_capacity(pairs.len());
        for (key, glyphs) in pairs {
            assert!(!glyphs.is_empty(), "empty variant list for {:?}", key);
            variants.insert(fold(*key), glyphs.to_vec());
        }
        Self { variants }
    }

    /// Look up the variants registered for the lowercased form of `ch`.
    pub fn variants_for(&self, ch: char) -> Option<&[char]> {
        self.variants.get(&fold(ch)).map(Vec::as_slice)
    }

    /// Get number of keys
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Lowercase form used for lookups. A multi-character lowercase
/// expansion (e.g. 'İ') can never equal a single-character key, so such
/// characters fold to themselves.
fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_expected_keys() {
        let table = HomoglyphTable::builtin();

        for key in 'a'..='z' {
            assert!(table.variants_for(key).is_some(), "missing key {:?}", key);
        }
        for key in ['0', '1', '2', '5', '6', '8', ' ', '.', '-', '_'] {
            assert!(table.variants_for(key).is_some(), "missing key {:?}", key);
        }
        for key in ['3', '4', '7', '9', '!', '#'] {
            assert!(table.variants_for(key).is_none(), "unexpected key {:?}", key);
        }
    }

    #[test]
    fn test_builtin_variant_lists_are_nonempty() {
        let table = HomoglyphTable::builtin();
        assert_eq!(table.len(), BUILTIN_VARIANTS.len());

        for (key, _) in BUILTIN_VARIANTS {
            assert!(!table.variants_for(*key).unwrap().is_empty());
        }
    }

    #[test]
    fn test_builtin_variants_differ_from_key() {
        // 'z' intentionally lists itself; every other variant is a
        // distinct code point.
        for (key, glyphs) in BUILTIN_VARIANTS {
            if *key == 'z' {
                continue;
            }
            for glyph in *glyphs {
                assert_ne!(glyph, key, "variant for {:?} is the key itself", key);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = HomoglyphTable::builtin();
        assert_eq!(table.variants_for('A'), table.variants_for('a'));
        assert_eq!(table.variants_for('Z'), table.variants_for('z'));
    }

    #[test]
    fn test_from_pairs_folds_keys() {
        let table = HomoglyphTable::from_pairs(&[('Q', &['զ'])]);
        assert_eq!(table.variants_for('q'), Some(&['զ'][..]));
        assert_eq!(table.variants_for('Q'), Some(&['զ'][..]));
    }

    #[test]
    fn test_multichar_lowercase_expansion_is_not_a_key() {
        // 'İ' lowercases to two characters and must not match 'i'.
        let table = HomoglyphTable::builtin();
        assert!(table.variants_for('İ').is_none());
    }
}
