use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AlignError;
use crate::types::KeyEvent;

/// Read a key-event log, keeping only alphanumeric key presses.
///
/// Log format: one event per line, `"<timestamp> <decimal char code>"`.
/// Lines starting with `#` are section markers; the marker name is everything
/// after the first space. With a `section` filter, only events between a
/// matching marker and the next marker are kept; without one, every event is.
pub fn read_key_log(path: &Path, section: Option<&str>) -> Result<Vec<KeyEvent>, AlignError> {
    let file = File::open(path).map_err(|e| AlignError::io("opening key log", e))?;
    parse_key_log(BufReader::new(file), section)
}

pub fn parse_key_log<R: BufRead>(
    reader: R,
    section: Option<&str>,
) -> Result<Vec<KeyEvent>, AlignError> {
    let mut events = Vec::new();
    let mut active = true;
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AlignError::io("reading key log", e))?;
        let line = line.trim();
        if let Some(marker) = line.strip_prefix('#') {
            let name = marker.split_once(' ').map(|(_, rest)| rest).unwrap_or("");
            active = section.map_or(true, |wanted| wanted == name);
            continue;
        }
        if line.is_empty() || !active {
            continue;
        }
        // Lines without two fields carry no event and are skipped.
        let Some((stamp, code)) = line.split_once(' ') else {
            continue;
        };
        let (stamp, code) = (stamp.trim(), code.trim());
        if stamp.is_empty() || code.is_empty() {
            continue;
        }
        let timestamp: f64 = stamp
            .parse()
            .map_err(|_| AlignError::malformed(line_no, format!("bad timestamp {stamp:?}")))?;
        let code: u32 = code
            .parse()
            .map_err(|_| AlignError::malformed(line_no, format!("bad character code {code:?}")))?;
        let ch = char::from_u32(code)
            .ok_or_else(|| AlignError::malformed(line_no, format!("invalid character code {code}")))?;
        if ch.is_alphanumeric() {
            events.push(KeyEvent { timestamp, ch });
        }
    }
    Ok(events)
}

/// Concatenate the characters of all transcript files, in order, unfiltered.
pub fn read_transcripts(paths: &[impl AsRef<Path>]) -> Result<Vec<char>, AlignError> {
    let mut text = Vec::new();
    for path in paths {
        let data = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AlignError::io("reading transcript", e))?;
        text.extend(data.chars());
    }
    Ok(text)
}
