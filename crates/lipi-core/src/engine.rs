//! Interface to romanization engines.
//!
//! The bridge only talks to an engine through [`RomanizationEngine`]; how a
//! scheme's grammar is parsed and rendered is entirely the engine's business.

/// A writing system understood by a romanization engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Unicode Devanagari, the native side of every engine.
    Devanagari,
    /// ITRANS ASCII romanization.
    Itrans,
}

impl Scheme {
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Devanagari => "devanagari",
            Scheme::Itrans => "itrans",
        }
    }
}

/// What to do with input the engine has no mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognisedPolicy {
    /// Copy the character to the output.
    #[default]
    Echo,
    /// Write the given character instead.
    Substitute(char),
    /// Fail with [`EngineError::Unrecognised`].
    Raise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Rewrite non-ASCII output as `&#NNNN;` character references.
    pub ascii_output: bool,
    pub unrecognised: UnrecognisedPolicy,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unrecognised character {ch:?} at position {position}")]
    Unrecognised { ch: char, position: usize },
}

pub trait RomanizationEngine {
    fn convert(
        &self,
        text: &str,
        from: Scheme,
        to: Scheme,
        options: &ConvertOptions,
    ) -> Result<String, EngineError>;
}

/// Rewrite every non-ASCII character as a decimal character reference.
pub(crate) fn ascii_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            out.push_str(&format!("&#{};", c as u32));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_echo_without_coercion() {
        let opts = ConvertOptions::default();
        assert!(!opts.ascii_output);
        assert_eq!(opts.unrecognised, UnrecognisedPolicy::Echo);
    }

    #[test]
    fn ascii_encode_escapes_non_ascii() {
        assert_eq!(ascii_encode("ka क"), "ka &#2325;");
        assert_eq!(ascii_encode(""), "");
    }

    #[test]
    fn error_message() {
        let err = EngineError::Unrecognised { ch: 'Q', position: 3 };
        assert_eq!(err.to_string(), "unrecognised character 'Q' at position 3");
    }

    #[test]
    fn scheme_names() {
        assert_eq!(Scheme::Devanagari.name(), "devanagari");
        assert_eq!(Scheme::Itrans.name(), "itrans");
    }
}
