use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use lipi_core::bridge::ITRANS;
use lipi_core::engine::EngineError;
use lipi_core::ScriptTable;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Engine(#[from] EngineError),
}

/// Convert `reader` into `writer` one line at a time, keeping line endings.
/// Returns the number of lines written.
pub fn convert_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    source: &str,
    target: &str,
) -> Result<usize, ConvertError> {
    let mut line = String::new();
    let mut count = 0;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let converted = lipi_core::convert(&line, source, target)?;
        writer.write_all(converted.as_bytes())?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

pub fn convert_file(
    input: &Path,
    output: &Path,
    source: &str,
    target: &str,
) -> Result<usize, ConvertError> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    convert_stream(reader, writer, source, target)
}

/// Identifiers the library would silently pass text through for.
fn unknown_ids<'a>(source: &'a str, target: &'a str) -> Vec<&'a str> {
    let table = ScriptTable::global();
    [source, target]
        .into_iter()
        .filter(|id| *id != ITRANS && !table.contains(id))
        .collect()
}

fn warn_unknown(source: &str, target: &str) {
    for id in unknown_ids(source, target) {
        eprintln!("warning: unknown script {id:?}; text is copied unchanged");
    }
}

pub fn convert_cmd(infile: &str, outfile: &str, source: &str, target: &str) {
    warn_unknown(source, target);
    let lines = die!(
        convert_file(Path::new(infile), Path::new(outfile), source, target),
        "Error converting {infile}: {}"
    );
    eprintln!("{lines} lines written to {outfile}");
}

pub fn text_cmd(source: &str, target: &str, text: &str) {
    warn_unknown(source, target);
    let out = die!(lipi_core::convert(text, source, target), "Error: {}");
    println!("{out}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn stream_keeps_line_endings() {
        let input = "कमल\r\nनमस्ते\nराम";
        let mut out = Vec::new();
        let lines = convert_stream(input.as_bytes(), &mut out, "hi", "bn").unwrap();
        assert_eq!(lines, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "কমল\r\nনমস্তে\nরাম");
    }

    #[test]
    fn stream_empty_input() {
        let mut out = Vec::new();
        assert_eq!(convert_stream("".as_bytes(), &mut out, "hi", "ta").unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn stream_to_itrans() {
        let mut out = Vec::new();
        convert_stream("कमल\nभारत\n".as_bytes(), &mut out, "hi", "itrans").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "kamala\nbhaarata\n");
    }

    #[test]
    fn stream_from_itrans() {
        let mut out = Vec::new();
        convert_stream("kamala\nnamaste\n".as_bytes(), &mut out, "itrans", "hi").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "कमल\nनमस्ते\n");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "कमल 12\n").unwrap();

        let lines = convert_file(&input, &output, "hi", "ml").unwrap();
        assert_eq!(lines, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "കമല 12\n");
    }

    #[test]
    fn file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
            "hi",
            "bn",
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }

    #[test]
    fn unknown_ids_skip_known_and_itrans() {
        assert_eq!(unknown_ids("hi", "itrans"), Vec::<&str>::new());
        assert_eq!(unknown_ids("xx", "bn"), vec!["xx"]);
        assert_eq!(unknown_ids("en", "yy"), vec!["en", "yy"]);
    }
}
