use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::error::AlignError;
use crate::types::{AlignmentInput, MappedChar, Mapping};

/// Join every mapped text position with its source key event, in increasing
/// text index order.
pub fn mapped_rows(input: &AlignmentInput, mapping: &Mapping) -> Vec<MappedChar> {
    mapping
        .iter()
        .map(|(text_index, key_index)| {
            let event = input.events[key_index];
            MappedChar {
                text_index,
                text_char: input.text[text_index],
                key_index,
                timestamp: event.timestamp,
                key_char: event.ch,
            }
        })
        .collect()
}

/// One line per mapped text index, followed by a trailing separator line.
pub fn write_text_report<W: Write>(mut w: W, rows: &[MappedChar]) -> Result<(), AlignError> {
    for row in rows {
        writeln!(
            w,
            "{} {} {} {} {}",
            row.text_index, row.text_char, row.key_index, row.timestamp, row.key_char
        )
        .map_err(|e| AlignError::io("writing report", e))?;
    }
    writeln!(w).map_err(|e| AlignError::io("writing report", e))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    mapped: usize,
    rows: &'a [MappedChar],
}

pub fn write_json_report<W: Write>(mut w: W, rows: &[MappedChar]) -> Result<(), AlignError> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        mapped: rows.len(),
        rows,
    };
    serde_json::to_writer_pretty(&mut w, &report)
        .map_err(|e| AlignError::json("serializing report", e))?;
    writeln!(w).map_err(|e| AlignError::io("writing report", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyEvent;

    fn sample_input() -> AlignmentInput {
        AlignmentInput {
            events: vec![
                KeyEvent { timestamp: 10.5, ch: 'a' },
                KeyEvent { timestamp: 11.0, ch: 'b' },
            ],
            text: vec!['a', 'b'],
        }
    }

    fn sample_mapping() -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert(1, 1);
        mapping.insert(0, 0);
        mapping
    }

    #[test]
    fn rows_follow_text_order() {
        let rows = mapped_rows(&sample_input(), &sample_mapping());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text_index, 0);
        assert_eq!(rows[0].key_char, 'a');
        assert_eq!(rows[0].timestamp, 10.5);
        assert_eq!(rows[1].text_index, 1);
        assert_eq!(rows[1].key_index, 1);
    }

    #[test]
    fn text_report_has_one_line_per_row_and_a_trailing_separator() {
        let rows = mapped_rows(&sample_input(), &sample_mapping());
        let mut out = Vec::new();
        write_text_report(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0 a 0 10.5 a\n1 b 1 11 b\n\n");
    }

    #[test]
    fn empty_mapping_still_emits_the_separator() {
        let mut out = Vec::new();
        write_text_report(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn json_report_round_trips() {
        let rows = mapped_rows(&sample_input(), &sample_mapping());
        let mut out = Vec::new();
        write_json_report(&mut out, &rows).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["mapped"], 2);
        assert_eq!(value["rows"][0]["text_char"], "a");
        assert_eq!(value["rows"][1]["key_index"], 1);
        assert!(value["generated_at"].is_string());
    }
}
