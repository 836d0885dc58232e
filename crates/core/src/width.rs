//! Width mapping: fullwidth and halfwidth compatibility variants mapped to
//! their canonical-width decomposition forms (UAX #11, Halfwidth and
//! Fullwidth Forms block).
//!
//! The table is fixed data built once at first use; lookups afterwards are
//! read-only and shareable across threads.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Singleton source → canonical pairs that do not follow a fixed offset.
/// Format: (variant, decomposition)
const WIDTH_PAIRS: &[(char, char)] = &[
    // Fullwidth brackets
    ('\u{FF5F}', '\u{2985}'), // FULLWIDTH LEFT WHITE PARENTHESIS
    ('\u{FF60}', '\u{2986}'), // FULLWIDTH RIGHT WHITE PARENTHESIS
    // Halfwidth CJK punctuation
    ('\u{FF61}', '\u{3002}'), // HALFWIDTH IDEOGRAPHIC FULL STOP
    ('\u{FF62}', '\u{300C}'), // HALFWIDTH LEFT CORNER BRACKET
    ('\u{FF63}', '\u{300D}'), // HALFWIDTH RIGHT CORNER BRACKET
    ('\u{FF64}', '\u{3001}'), // HALFWIDTH IDEOGRAPHIC COMMA
    // Halfwidth Katakana variants
    ('\u{FF65}', '\u{30FB}'), // HALFWIDTH KATAKANA MIDDLE DOT
    ('\u{FF66}', '\u{30F2}'), // HALFWIDTH KATAKANA LETTER WO
    ('\u{FF67}', '\u{30A1}'), // HALFWIDTH KATAKANA LETTER SMALL A
    ('\u{FF68}', '\u{30A3}'), // HALFWIDTH KATAKANA LETTER SMALL I
    ('\u{FF69}', '\u{30A5}'), // HALFWIDTH KATAKANA LETTER SMALL U
    ('\u{FF6A}', '\u{30A7}'), // HALFWIDTH KATAKANA LETTER SMALL E
    ('\u{FF6B}', '\u{30A9}'), // HALFWIDTH KATAKANA LETTER SMALL O
    ('\u{FF6C}', '\u{30E3}'), // HALFWIDTH KATAKANA LETTER SMALL YA
    ('\u{FF6D}', '\u{30E5}'), // HALFWIDTH KATAKANA LETTER SMALL YU
    ('\u{FF6E}', '\u{30E7}'), // HALFWIDTH KATAKANA LETTER SMALL YO
    ('\u{FF6F}', '\u{30C3}'), // HALFWIDTH KATAKANA LETTER SMALL TU
    ('\u{FF70}', '\u{30FC}'), // HALFWIDTH KATAKANA-HIRAGANA PROLONGED SOUND MARK
    ('\u{FF71}', '\u{30A2}'), // HALFWIDTH KATAKANA LETTER A
    ('\u{FF72}', '\u{30A4}'), // HALFWIDTH KATAKANA LETTER I
    ('\u{FF73}', '\u{30A6}'), // HALFWIDTH KATAKANA LETTER U
    ('\u{FF74}', '\u{30A8}'), // HALFWIDTH KATAKANA LETTER E
    ('\u{FF75}', '\u{30AA}'), // HALFWIDTH KATAKANA LETTER O
    ('\u{FF76}', '\u{30AB}'), // HALFWIDTH KATAKANA LETTER KA
    ('\u{FF77}', '\u{30AD}'), // HALFWIDTH KATAKANA LETTER KI
    ('\u{FF78}', '\u{30AF}'), // HALFWIDTH KATAKANA LETTER KU
    ('\u{FF79}', '\u{30B1}'), // HALFWIDTH KATAKANA LETTER KE
    ('\u{FF7A}', '\u{30B3}'), // HALFWIDTH KATAKANA LETTER KO
    ('\u{FF7B}', '\u{30B5}'), // HALFWIDTH KATAKANA LETTER SA
    ('\u{FF7C}', '\u{30B7}'), // HALFWIDTH KATAKANA LETTER SI
    ('\u{FF7D}', '\u{30B9}'), // HALFWIDTH KATAKANA LETTER SU
    ('\u{FF7E}', '\u{30BB}'), // HALFWIDTH KATAKANA LETTER SE
    ('\u{FF7F}', '\u{30BD}'), // HALFWIDTH KATAKANA LETTER SO
    ('\u{FF80}', '\u{30BF}'), // HALFWIDTH KATAKANA LETTER TA
    ('\u{FF81}', '\u{30C1}'), // HALFWIDTH KATAKANA LETTER TI
    ('\u{FF82}', '\u{30C4}'), // HALFWIDTH KATAKANA LETTER TU
    ('\u{FF83}', '\u{30C6}'), // HALFWIDTH KATAKANA LETTER TE
    ('\u{FF84}', '\u{30C8}'), // HALFWIDTH KATAKANA LETTER TO
    ('\u{FF85}', '\u{30CA}'), // HALFWIDTH KATAKANA LETTER NA
    ('\u{FF86}', '\u{30CB}'), // HALFWIDTH KATAKANA LETTER NI
    ('\u{FF87}', '\u{30CC}'), // HALFWIDTH KATAKANA LETTER NU
    ('\u{FF88}', '\u{30CD}'), // HALFWIDTH KATAKANA LETTER NE
    ('\u{FF89}', '\u{30CE}'), // HALFWIDTH KATAKANA LETTER NO
    ('\u{FF8A}', '\u{30CF}'), // HALFWIDTH KATAKANA LETTER HA
    ('\u{FF8B}', '\u{30D2}'), // HALFWIDTH KATAKANA LETTER HI
    ('\u{FF8C}', '\u{30D5}'), // HALFWIDTH KATAKANA LETTER HU
    ('\u{FF8D}', '\u{30D8}'), // HALFWIDTH KATAKANA LETTER HE
    ('\u{FF8E}', '\u{30DB}'), // HALFWIDTH KATAKANA LETTER HO
    ('\u{FF8F}', '\u{30DE}'), // HALFWIDTH KATAKANA LETTER MA
    ('\u{FF90}', '\u{30DF}'), // HALFWIDTH KATAKANA LETTER MI
    ('\u{FF91}', '\u{30E0}'), // HALFWIDTH KATAKANA LETTER MU
    ('\u{FF92}', '\u{30E1}'), // HALFWIDTH KATAKANA LETTER ME
    ('\u{FF93}', '\u{30E2}'), // HALFWIDTH KATAKANA LETTER MO
    ('\u{FF94}', '\u{30E4}'), // HALFWIDTH KATAKANA LETTER YA
    ('\u{FF95}', '\u{30E6}'), // HALFWIDTH KATAKANA LETTER YU
    ('\u{FF96}', '\u{30E8}'), // HALFWIDTH KATAKANA LETTER YO
    ('\u{FF97}', '\u{30E9}'), // HALFWIDTH KATAKANA LETTER RA
    ('\u{FF98}', '\u{30EA}'), // HALFWIDTH KATAKANA LETTER RI
    ('\u{FF99}', '\u{30EB}'), // HALFWIDTH KATAKANA LETTER RU
    ('\u{FF9A}', '\u{30EC}'), // HALFWIDTH KATAKANA LETTER RE
    ('\u{FF9B}', '\u{30ED}'), // HALFWIDTH KATAKANA LETTER RO
    ('\u{FF9C}', '\u{30EF}'), // HALFWIDTH KATAKANA LETTER WA
    ('\u{FF9D}', '\u{30F3}'), // HALFWIDTH KATAKANA LETTER N
    ('\u{FF9E}', '\u{3099}'), // HALFWIDTH KATAKANA VOICED SOUND MARK
    ('\u{FF9F}', '\u{309A}'), // HALFWIDTH KATAKANA SEMI-VOICED SOUND MARK
    // Halfwidth Hangul variants outside the offset runs
    ('\u{FFA0}', '\u{3164}'), // HALFWIDTH HANGUL FILLER
    ('\u{FFDA}', '\u{3161}'), // HALFWIDTH HANGUL LETTER EU
    ('\u{FFDB}', '\u{3162}'), // HALFWIDTH HANGUL LETTER YI
    ('\u{FFDC}', '\u{3163}'), // HALFWIDTH HANGUL LETTER I
    // Fullwidth symbol variants
    ('\u{FFE0}', '\u{00A2}'), // FULLWIDTH CENT SIGN
    ('\u{FFE1}', '\u{00A3}'), // FULLWIDTH POUND SIGN
    ('\u{FFE2}', '\u{00AC}'), // FULLWIDTH NOT SIGN
    ('\u{FFE3}', '\u{00AF}'), // FULLWIDTH MACRON
    ('\u{FFE4}', '\u{00A6}'), // FULLWIDTH BROKEN BAR
    ('\u{FFE5}', '\u{00A5}'), // FULLWIDTH YEN SIGN
    ('\u{FFE6}', '\u{20A9}'), // FULLWIDTH WON SIGN
    // Halfwidth symbol variants
    ('\u{FFE8}', '\u{2502}'), // HALFWIDTH FORMS LIGHT VERTICAL
    ('\u{FFE9}', '\u{2190}'), // HALFWIDTH LEFTWARDS ARROW
    ('\u{FFEA}', '\u{2191}'), // HALFWIDTH UPWARDS ARROW
    ('\u{FFEB}', '\u{2192}'), // HALFWIDTH RIGHTWARDS ARROW
    ('\u{FFEC}', '\u{2193}'), // HALFWIDTH DOWNWARDS ARROW
    ('\u{FFED}', '\u{25A0}'), // HALFWIDTH BLACK SQUARE
    ('\u{FFEE}', '\u{25CB}'), // HALFWIDTH WHITE CIRCLE
];

/// Contiguous runs where the decomposition is the variant minus a fixed
/// offset. Format: (first, last, offset)
const WIDTH_RUNS: &[(u32, u32, u32)] = &[
    // Fullwidth ASCII variants (Latin symbols, punctuation, digits, letters)
    (0xFF01, 0xFF5E, 0xFEE0),
    // Halfwidth Hangul letters KIYEOK..HIEUH
    (0xFFA1, 0xFFBE, 0xCE70),
    // Halfwidth Hangul letters A..E
    (0xFFC2, 0xFFC7, 0xCE73),
    // Halfwidth Hangul letters YEO..OE
    (0xFFCA, 0xFFCF, 0xCE75),
    // Halfwidth Hangul letters YO..YU
    (0xFFD2, 0xFFD7, 0xCE77),
];

static WIDTH_MAP: Lazy<FxHashMap<char, char>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for &(variant, canonical) in WIDTH_PAIRS {
        map.insert(variant, canonical);
    }
    for &(first, last, offset) in WIDTH_RUNS {
        for cp in first..=last {
            if let (Some(variant), Some(canonical)) =
                (char::from_u32(cp), char::from_u32(cp - offset))
            {
                map.insert(variant, canonical);
            }
        }
    }
    map
});

/// Looks up the canonical-width counterpart of a single code point, if any.
pub fn width_map_char(c: char) -> Option<char> {
    WIDTH_MAP.get(&c).copied()
}

/// Replaces every fullwidth/halfwidth variant in `input` with its
/// canonical-width form; characters without an entry pass through.
pub fn width_map(input: &str) -> Cow<'_, str> {
    if input.chars().any(|c| WIDTH_MAP.contains_key(&c)) {
        Cow::Owned(
            input
                .chars()
                .map(|c| width_map_char(c).unwrap_or(c))
                .collect(),
        )
    } else {
        Cow::Borrowed(input)
    }
}
