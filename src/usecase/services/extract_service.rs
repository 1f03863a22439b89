use encoding_rs::ISO_8859_2;
use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::extraction::{Extraction, RejectReason, RejectedLine};
use crate::domain::entities::row::{Row, Variant};

/// Preamble lines every export starts with.
pub const HEADER_LINES: usize = 3;

/// Exports are always read as ISO-8859-2, whatever they were written in.
pub fn decode_central_european(bytes: &[u8]) -> String {
    let (text, _had_errors) = ISO_8859_2.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Strips combining marks after canonical decomposition. Letters without a
/// decomposition (for example `ł`) pass through unchanged.
pub fn fold_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

pub fn project_fields(fields: &[&str], variant: Variant) -> Option<Row> {
    if fields.len() < variant.min_fields() {
        return None;
    }
    let projected = variant
        .projection()
        .iter()
        .map(|&idx| fields[idx].to_string())
        .collect();
    Some(Row::new(projected))
}

pub fn extract_rows(text: &str, variant: Variant) -> Extraction {
    let folded = fold_accents(text);
    let mut extraction = Extraction::default();

    for (idx, line) in folded.split('\n').enumerate() {
        if idx < HEADER_LINES {
            continue;
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match project_fields(&fields, variant) {
            Some(row) => extraction.rows.push(row),
            None => extraction.rejected.push(RejectedLine {
                line_no: idx + 1,
                field_count: fields.len(),
                reason: RejectReason::TooFewFields {
                    required: variant.min_fields(),
                },
            }),
        }
    }

    extraction
}

pub fn extract_from_bytes(bytes: &[u8], variant: Variant) -> Extraction {
    extract_rows(&decode_central_european(bytes), variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Zestawienie\nOkres\nKolumny\n";

    fn line(fields: usize) -> String {
        (0..fields)
            .map(|idx| format!("f{idx}"))
            .collect::<Vec<_>>()
            .join("\t")
    }

    #[test]
    fn projects_base_fields_from_fourth_line() {
        let text = format!("{HEADER}A\tB\tC\tD\tE\tF\tG\tH\tI\tJ\tK\tL\tM\tN\n");
        let extraction = extract_rows(&text, Variant::Base);
        assert_eq!(extraction.rows, vec![Row::from(vec!["A", "F", "K", "N"])]);
        assert!(extraction.rejected.is_empty());
    }

    #[test]
    fn header_lines_never_produce_rows() {
        let full = line(14);
        let text = format!("{full}\n{full}\n{full}\n");
        let extraction = extract_rows(&text, Variant::Base);
        assert!(extraction.rows.is_empty());
        assert!(extraction.rejected.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped_silently() {
        let text = format!("{HEADER}\n   \n\t\n{}\n", line(14));
        let extraction = extract_rows(&text, Variant::Base);
        assert_eq!(extraction.rows.len(), 1);
        assert!(extraction.rejected.is_empty());
    }

    #[test]
    fn short_lines_are_rejected_with_line_number() {
        let text = format!("{HEADER}{}\n{}\n", line(13), line(14));
        let extraction = extract_rows(&text, Variant::Base);
        assert_eq!(extraction.rows.len(), 1);
        assert_eq!(
            extraction.rejected,
            vec![RejectedLine {
                line_no: 4,
                field_count: 13,
                reason: RejectReason::TooFewFields { required: 14 },
            }]
        );
    }

    #[test]
    fn extended_variant_needs_sixteen_fields() {
        let text = format!("{HEADER}{}\n{}\n", line(15), line(16));
        let extraction = extract_rows(&text, Variant::Extended);
        assert_eq!(
            extraction.rows,
            vec![Row::from(vec!["f0", "f5", "f10", "f13", "f1", "f2", "f15"])]
        );
        assert_eq!(extraction.rejected.len(), 1);
        assert_eq!(extraction.rejected[0].line_no, 4);
    }

    #[test]
    fn accents_are_stripped_from_every_field() {
        let mut fields: Vec<String> = (0..14).map(|idx| format!("f{idx}")).collect();
        fields[5] = "Zażółć Spółka".to_string();
        let text = format!("{HEADER}{}\n", fields.join("\t"));
        let extraction = extract_rows(&text, Variant::Base);
        assert_eq!(extraction.rows[0].get(1), Some("Zazołc Społka"));
    }

    #[test]
    fn carriage_returns_do_not_leak_into_last_field() {
        let text = format!("h1\r\nh2\r\nh3\r\n{}\r\n", line(14));
        let extraction = extract_rows(&text, Variant::Base);
        assert_eq!(extraction.rows[0].get(3), Some("f13"));
    }

    #[test]
    fn decodes_iso_8859_2_bytes() {
        assert_eq!(decode_central_european(b"\xb3\xb1ka"), "łąka");
        assert_eq!(fold_accents(&decode_central_european(b"\xb3\xb1ka")), "łaka");
    }
}
