use std::cell::RefCell;

use super::normalize::MALAYALAM_CHILLUS;
use super::*;

/// Records every call; replies with a fixed string or echoes the input.
struct RecordingEngine {
    calls: RefCell<Vec<(String, Scheme, Scheme, ConvertOptions)>>,
    reply: Option<&'static str>,
}

impl RecordingEngine {
    fn echo() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            reply: None,
        }
    }

    fn replying(reply: &'static str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            reply: Some(reply),
        }
    }

    fn last_input(&self) -> String {
        self.calls.borrow().last().map(|c| c.0.clone()).unwrap()
    }
}

impl RomanizationEngine for RecordingEngine {
    fn convert(
        &self,
        text: &str,
        from: Scheme,
        to: Scheme,
        options: &ConvertOptions,
    ) -> Result<String, EngineError> {
        self.calls
            .borrow_mut()
            .push((text.to_string(), from, to, *options));
        Ok(self.reply.map(str::to_string).unwrap_or_else(|| text.to_string()))
    }
}

/// Rejects everything, to show the bridge only forwards engine errors.
struct FailingEngine;

impl RomanizationEngine for FailingEngine {
    fn convert(
        &self,
        text: &str,
        _from: Scheme,
        _to: Scheme,
        _options: &ConvertOptions,
    ) -> Result<String, EngineError> {
        Err(EngineError::Unrecognised {
            ch: text.chars().next().unwrap_or(' '),
            position: 0,
        })
    }
}

#[test]
fn to_romanized_pivots_through_devanagari() {
    let engine = RecordingEngine::echo();
    let bridge = RomanizationBridge::new(ScriptTable::global(), &engine);
    bridge.to_romanized("কমল", "bn").unwrap();

    let calls = engine.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (input, from, to, options) = &calls[0];
    assert_eq!(input, "कमल");
    assert_eq!(*from, Scheme::Devanagari);
    assert_eq!(*to, Scheme::Itrans);
    assert!(!options.ascii_output);
    assert_eq!(options.unrecognised, UnrecognisedPolicy::Echo);
}

#[test]
fn from_romanized_maps_engine_output_to_script() {
    let engine = RecordingEngine::replying("कमल");
    let bridge = RomanizationBridge::new(ScriptTable::global(), &engine);
    assert_eq!(bridge.from_romanized("kamala", "gu").unwrap(), "કમલ");

    let calls = engine.calls.borrow();
    assert_eq!(calls[0].0, "kamala");
    assert_eq!(calls[0].1, Scheme::Itrans);
    assert_eq!(calls[0].2, Scheme::Devanagari);
    assert_eq!(calls[0].3.unrecognised, UnrecognisedPolicy::Echo);
}

#[test]
fn engine_output_is_returned_unmodified() {
    let engine = RecordingEngine::replying("ka?? <unknown> ☃");
    let bridge = RomanizationBridge::new(ScriptTable::global(), &engine);
    assert_eq!(bridge.to_romanized("क", "hi").unwrap(), "ka?? <unknown> ☃");
}

#[test]
fn engine_errors_are_forwarded() {
    let bridge = RomanizationBridge::new(ScriptTable::global(), &FailingEngine);
    let err = bridge.to_romanized("क", "hi").unwrap_err();
    assert_eq!(err, EngineError::Unrecognised { ch: 'क', position: 0 });
}

#[test]
fn unknown_script_skips_engine() {
    let engine = RecordingEngine::replying("never");
    let bridge = RomanizationBridge::new(ScriptTable::global(), &engine);
    assert_eq!(bridge.to_romanized("कमल", "xx").unwrap(), "कमल");
    assert_eq!(bridge.from_romanized("kamala", "xx").unwrap(), "kamala");
    assert!(engine.calls.borrow().is_empty());
}

#[test]
fn every_chillu_is_expanded_before_mapping() {
    let engine = RecordingEngine::echo();
    let bridge = RomanizationBridge::new(ScriptTable::global(), &engine);
    let expected = ["ण्", "न्", "र्", "ल्", "ळ्", "क्"];

    for (&(chillu, _), want) in MALAYALAM_CHILLUS.iter().zip(expected) {
        bridge.to_romanized(&chillu.to_string(), "ml").unwrap();
        let input = engine.last_input();
        assert_eq!(input, want, "chillu {chillu}");
        assert!(input.chars().all(|c| !(0x0D00..=0x0D7F).contains(&(c as u32))));
    }
}

#[test]
fn chillus_are_not_resynthesised() {
    let engine = RecordingEngine::replying("अवन्");
    let bridge = RomanizationBridge::new(ScriptTable::global(), &engine);
    assert_eq!(bridge.from_romanized("avan", "ml").unwrap(), "അവന്");
}

#[test]
fn with_scheme_selects_engine_scheme() {
    let engine = RecordingEngine::echo();
    let bridge =
        RomanizationBridge::new(ScriptTable::global(), &engine).with_scheme(Scheme::Devanagari);
    bridge.to_romanized("ক", "bn").unwrap();
    assert_eq!(engine.calls.borrow()[0].2, Scheme::Devanagari);
}

#[test]
fn to_itrans_from_other_scripts() {
    assert_eq!(to_itrans("কমল", "bn").unwrap(), "kamala");
    assert_eq!(to_itrans("കമല", "ml").unwrap(), "kamala");
    assert_eq!(to_itrans("தமிழ்", "ta").unwrap(), "tamizh");
    assert_eq!(to_itrans("নমস্তে", "bn").unwrap(), "namaste");
}

#[test]
fn to_itrans_expands_malayalam_chillu() {
    assert_eq!(to_itrans("അവൻ", "ml").unwrap(), "avan");
}

#[test]
fn from_itrans_into_scripts() {
    assert_eq!(from_itrans("namaste", "bn").unwrap(), "নমস্তে");
    assert_eq!(from_itrans("kamala", "ta").unwrap(), "கமல");
    assert_eq!(from_itrans("avan", "ml").unwrap(), "അവന്");
}

#[test]
fn itrans_round_trip_through_scripts() {
    // Short o before anusvara must not read back as OM.
    assert_eq!(to_itrans("కొంచెం", "te").unwrap(), "k^oMch^eM");
    assert_eq!(to_itrans("कई", "hi").unwrap(), "ka_ii");
    for (word, script) in [
        ("కొంచెం", "te"),
        ("कई", "hi"),
        ("কই", "bn"),
        ("കൊമ്പ്", "ml"),
        ("ಕೊಂಡ", "kn"),
    ] {
        let itrans = to_itrans(word, script).unwrap();
        assert_eq!(from_itrans(&itrans, script).unwrap(), word, "{script} {itrans}");
    }
}

#[test]
fn unrecognised_input_is_echoed() {
    assert_eq!(to_itrans("কQ", "bn").unwrap(), "kaQ");
    assert_eq!(from_itrans("kaQ", "ta").unwrap(), "கQ");
}

#[test]
fn unknown_script_is_identity() {
    assert_eq!(to_itrans("কমল", "xx").unwrap(), "কমল");
    assert_eq!(from_itrans("kamala", "xx").unwrap(), "kamala");
}

#[test]
fn convert_dispatches_on_itrans() {
    assert_eq!(convert("नमस्ते", "hi", ITRANS).unwrap(), "namaste");
    assert_eq!(convert("kamala", ITRANS, "kn").unwrap(), "ಕಮಲ");
    assert_eq!(convert("कमल", "hi", "te").unwrap(), "కమల");
}
