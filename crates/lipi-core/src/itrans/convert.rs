use tracing::{debug, debug_span};

use crate::engine::{
    ascii_encode, ConvertOptions, EngineError, RomanizationEngine, Scheme, UnrecognisedPolicy,
};

use super::table::{ItransTable, Letter, Token, SEPARATOR, VIRAMA};

/// Converts between Devanagari and ITRANS using an [`ItransTable`].
#[derive(Clone, Copy)]
pub struct ItransEngine<'a> {
    table: &'a ItransTable,
}

impl ItransEngine<'static> {
    /// Engine over the global table.
    pub fn global() -> Self {
        Self {
            table: ItransTable::global(),
        }
    }
}

impl<'a> ItransEngine<'a> {
    pub fn new(table: &'a ItransTable) -> Self {
        Self { table }
    }
}

impl RomanizationEngine for ItransEngine<'_> {
    fn convert(
        &self,
        text: &str,
        from: Scheme,
        to: Scheme,
        options: &ConvertOptions,
    ) -> Result<String, EngineError> {
        let _span = debug_span!(
            "itrans_convert",
            from = from.name(),
            to = to.name(),
            bytes = text.len()
        )
        .entered();

        let out = match (from, to) {
            (Scheme::Devanagari, Scheme::Itrans) => {
                devanagari_to_itrans(self.table, text, options.unrecognised)?
            }
            (Scheme::Itrans, Scheme::Devanagari) => {
                itrans_to_devanagari(self.table, text, options.unrecognised)?
            }
            _ => text.to_string(),
        };

        if options.ascii_output {
            Ok(ascii_encode(&out))
        } else {
            Ok(out)
        }
    }
}

/// Whitespace and ASCII punctuation are copied in both directions.
fn is_passthrough(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// Output buffer that applies the unrecognised-input policy.
struct Writer {
    out: String,
    policy: UnrecognisedPolicy,
    unrecognised: usize,
}

impl Writer {
    fn new(capacity: usize, policy: UnrecognisedPolicy) -> Self {
        Self {
            out: String::with_capacity(capacity),
            policy,
            unrecognised: 0,
        }
    }

    /// The character to write in place of `ch`.
    fn unrecognised(&mut self, ch: char, position: usize) -> Result<char, EngineError> {
        self.unrecognised += 1;
        match self.policy {
            UnrecognisedPolicy::Echo => Ok(ch),
            UnrecognisedPolicy::Substitute(sub) => Ok(sub),
            UnrecognisedPolicy::Raise => Err(EngineError::Unrecognised { ch, position }),
        }
    }

    fn finish(self) -> String {
        if self.unrecognised > 0 {
            debug!(count = self.unrecognised, "unrecognised characters");
        }
        self.out
    }
}

/// Writes spellings so that reading them back yields the same letters.
///
/// Tracks where each spelling of the current run starts, in the output and in
/// the source. Before a spelling is appended, every start close enough to the
/// end is re-matched with the new spelling attached. If the longest match
/// grows, a [`SEPARATOR`] goes in first, unless the grown match is a conjunct
/// spelling of exactly the source letters it covers (`k` + `Sh` is `kSh`).
struct Speller<'t> {
    table: &'t ItransTable,
    source: &'t [char],
    /// (output byte offset, source index) of each spelling since the last break.
    run: Vec<(usize, usize)>,
}

impl<'t> Speller<'t> {
    fn new(table: &'t ItransTable, source: &'t [char]) -> Self {
        Self {
            table,
            source,
            run: Vec::new(),
        }
    }

    /// Append `spelling`, which renders the source letter at `src`.
    fn push(&mut self, out: &mut String, spelling: &str, src: usize) {
        match self.fusion(out, spelling, src) {
            Fusion::Apart => self.run.push((out.len(), src)),
            Fusion::Conjunct(keep) => self.run.truncate(keep),
            Fusion::Conflict => {
                out.push(SEPARATOR);
                self.run.clear();
                self.run.push((out.len(), src));
            }
        }
        out.push_str(spelling);
    }

    /// Whitespace was written; no spelling spans it.
    fn break_run(&mut self) {
        self.run.clear();
    }

    fn fusion(&self, out: &str, spelling: &str, src: usize) -> Fusion {
        let limit = self.table.max_spelling_len();
        let mut conjunct = None;
        for (i, &(pos, start)) in self.run.iter().enumerate() {
            if out.len() - pos >= limit {
                continue;
            }
            let end = self.run.get(i + 1).map_or(out.len(), |&(next, _)| next);
            let mut probe = String::with_capacity(limit + spelling.len());
            probe.push_str(&out[pos..]);
            probe.push_str(spelling);
            match self.table.next_token(&probe) {
                None => {}
                Some((len, _)) if len <= end - pos => {}
                Some((len, Token::Consonant(letters)))
                    if len == probe.len() && self.covers(letters, start, src) =>
                {
                    conjunct.get_or_insert(i + 1);
                }
                _ => return Fusion::Conflict,
            }
        }
        conjunct.map_or(Fusion::Apart, Fusion::Conjunct)
    }

    fn covers(&self, letters: &str, start: usize, src: usize) -> bool {
        self.source
            .get(start..=src)
            .is_some_and(|segment| letters.chars().eq(segment.iter().copied()))
    }
}

enum Fusion {
    /// The new spelling reads on its own.
    Apart,
    /// The new spelling joins the run entry before this index into one conjunct.
    Conjunct(usize),
    /// The new spelling would change how earlier output reads.
    Conflict,
}

/// Devanagari → ITRANS.
///
/// A consonant owes its inherent `a` until a vowel sign replaces it or a
/// virama cancels it; anything else settles the debt by writing `a`.
fn devanagari_to_itrans(
    table: &ItransTable,
    text: &str,
    policy: UnrecognisedPolicy,
) -> Result<String, EngineError> {
    let source: Vec<char> = text.chars().collect();
    let mut w = Writer::new(text.len(), policy);
    let mut speller = Speller::new(table, &source);
    // Source index of the consonant still owing its `a`.
    let mut owes_a: Option<usize> = None;

    for (position, &c) in source.iter().enumerate() {
        match table.letter(c) {
            Some(Letter::Consonant(roman)) => {
                if let Some(consonant) = owes_a {
                    speller.push(&mut w.out, "a", consonant);
                }
                speller.push(&mut w.out, roman, position);
                owes_a = Some(position);
            }
            Some(Letter::Sign(roman)) => {
                speller.push(&mut w.out, roman, position);
                owes_a = None;
            }
            Some(Letter::Virama(roman)) => {
                // After a consonant the virama is implied by the missing vowel,
                // unless a vowel follows and would read as its sign.
                let vowel_next = matches!(
                    source.get(position + 1).and_then(|&next| table.letter(next)),
                    Some(Letter::Vowel(_))
                );
                if owes_a.is_none() || vowel_next {
                    speller.push(&mut w.out, roman, position);
                }
                owes_a = None;
            }
            Some(Letter::Vowel(roman)) | Some(Letter::Symbol(roman)) => {
                if let Some(consonant) = owes_a.take() {
                    speller.push(&mut w.out, "a", consonant);
                }
                speller.push(&mut w.out, roman, position);
            }
            None => {
                if let Some(consonant) = owes_a.take() {
                    speller.push(&mut w.out, "a", consonant);
                }
                if c.is_whitespace() {
                    speller.break_run();
                    w.out.push(c);
                    continue;
                }
                let written = if is_passthrough(c) || c.is_ascii_digit() {
                    c
                } else {
                    w.unrecognised(c, position)?
                };
                // Copied text can still run into a spelling: `.` + `h` reads as a virama.
                speller.push(&mut w.out, written.encode_utf8(&mut [0; 4]), position);
            }
        }
    }
    if let Some(consonant) = owes_a {
        speller.push(&mut w.out, "a", consonant);
    }
    Ok(w.finish())
}

/// ITRANS → Devanagari.
///
/// Tokens are matched longest-first. A consonant followed by a vowel takes
/// the vowel sign (nothing for `a`); followed by anything else, or at the end
/// of the input, it takes a virama. [`SEPARATOR`] is skipped without ending
/// a bare consonant.
fn itrans_to_devanagari(
    table: &ItransTable,
    text: &str,
    policy: UnrecognisedPolicy,
) -> Result<String, EngineError> {
    let mut w = Writer::new(text.len() * 3, policy);
    let mut bare = false;
    let mut rest = text;
    let mut position = 0;

    while let Some(c) = rest.chars().next() {
        if c == SEPARATOR {
            position += 1;
            rest = &rest[1..];
            continue;
        }
        let Some((len, token)) = table.next_token(rest) else {
            if bare {
                w.out.push(VIRAMA);
                bare = false;
            }
            let written = if is_passthrough(c) {
                c
            } else {
                w.unrecognised(c, position)?
            };
            w.out.push(written);
            position += 1;
            rest = &rest[c.len_utf8()..];
            continue;
        };

        match token {
            Token::Consonant(letters) => {
                if bare {
                    w.out.push(VIRAMA);
                }
                w.out.push_str(letters);
                bare = true;
            }
            Token::Vowel { letter, sign } => {
                if bare {
                    if let Some(sign) = sign {
                        w.out.push(*sign);
                    }
                } else {
                    w.out.push(*letter);
                }
                bare = false;
            }
            Token::Virama => {
                w.out.push(VIRAMA);
                bare = false;
            }
            Token::Symbol(letters) => {
                if bare {
                    w.out.push(VIRAMA);
                }
                w.out.push_str(letters);
                bare = false;
            }
        }
        // Spellings are ASCII, so bytes and code points agree.
        position += len;
        rest = &rest[len..];
    }
    if bare {
        w.out.push(VIRAMA);
    }
    Ok(w.finish())
}
