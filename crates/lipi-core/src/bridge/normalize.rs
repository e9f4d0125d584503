use std::borrow::Cow;

use crate::script::ScriptRange;

/// Block origin of the Malayalam script (U+0D00).
pub const MALAYALAM_BLOCK_START: u32 = 0x0D00;

const MALAYALAM_VIRAMA: char = '\u{0D4D}';

/// Malayalam chillus and the consonant each one is the vowelless form of.
///
/// Chillus sit past the coordinated range, so they have no counterpart in
/// the other blocks and must be spelled out as consonant + virama first.
pub const MALAYALAM_CHILLUS: [(char, char); 6] = [
    ('\u{0D7A}', '\u{0D23}'), // NNA
    ('\u{0D7B}', '\u{0D28}'), // NA
    ('\u{0D7C}', '\u{0D30}'), // RA
    ('\u{0D7D}', '\u{0D32}'), // LA
    ('\u{0D7E}', '\u{0D33}'), // LLA
    ('\u{0D7F}', '\u{0D15}'), // KA
];

/// Rewrite script-specific characters before pivoting to the reference script.
pub fn pre_romanize<'a>(text: &'a str, script: &ScriptRange) -> Cow<'a, str> {
    if script.start == MALAYALAM_BLOCK_START {
        expand_chillus(text)
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace every chillu with its consonant followed by a virama.
pub fn expand_chillus(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| chillu_base(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match chillu_base(c) {
            Some(base) => {
                out.push(base);
                out.push(MALAYALAM_VIRAMA);
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn chillu_base(c: char) -> Option<char> {
    MALAYALAM_CHILLUS
        .iter()
        .find(|&&(chillu, _)| chillu == c)
        .map(|&(_, base)| base)
}
