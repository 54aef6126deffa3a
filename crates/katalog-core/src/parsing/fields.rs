//! Per-field micro-parsers for the datasheet columns.
//!
//! Each parser is independent and tolerant of absence: when the raw cell
//! yields nothing, the field is simply omitted from the row. The produced
//! strings carry their presentation markup (`<br>` line breaks and
//! `<span class='optional'>` variant wrappers); the renderer treats them
//! as opaque pre-formatted content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Footnote glyph attached to secondary (optional) field variants.
pub const FOOTNOTE: char = '¹';

static DIAMETER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"d\.?(\d+)").unwrap());

static ACCURACY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"к\.т\.\s*").unwrap());

static IP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"IP\d+").unwrap());

static THREAD_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[; ]+").unwrap());

static CYRILLIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[А-Яа-яЁё]").unwrap());

/// A parenthesized group plus an optional trailing plain or superscript 1.
static VIBRO_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*?)\)\s*([1¹])?").unwrap());

/// Unit tail (letters + semicolon) that terminates one pressure range.
static PRESSURE_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-zА-Яа-яЁё]+;").unwrap());

fn optional_span(value: &str) -> String {
    format!("<span class='optional'>{value}{FOOTNOTE}</span>")
}

/// First value bare, every further value wrapped as an optional variant.
fn join_first_bare(values: &[String]) -> Option<String> {
    let (first, rest) = values.split_first()?;
    let mut parts = vec![first.clone()];
    parts.extend(rest.iter().map(|v| optional_span(v)));
    Some(parts.join("<br>"))
}

/// Model names may span several physical lines. The first line is the
/// primary model code; continuation lines with at least two uppercase
/// letters are further codes (plain line break), anything else is a
/// descriptive suffix set in subtext.
pub fn parse_model(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.contains('\n') {
        return raw.to_string();
    }

    let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut out = String::new();
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        let upper = line.chars().filter(|c| c.is_uppercase()).count();
        if upper >= 2 {
            out.push_str("<br>");
            out.push_str(line);
        } else {
            out.push_str("<br><span class='table_subtext'>");
            out.push_str(line);
            out.push_str("</span>");
        }
    }
    out
}

/// "d.63" / "d50" → "63 мм" / "50 мм".
pub fn parse_diameter(raw: &str) -> Option<String> {
    DIAMETER_RE
        .captures(raw)
        .map(|caps| format!("{} мм", &caps[1]))
}

/// Strip the "к.т." label, split on semicolons; first class bare, the rest
/// are optional variants with the footnote glyph re-appended.
pub fn parse_accuracy_class(raw: &str) -> Option<String> {
    let stripped = ACCURACY_LABEL_RE.replace_all(raw, "");
    let values: Vec<String> = stripped
        .split(';')
        .map(|v| v.trim().replace(FOOTNOTE, ""))
        .filter(|v| !v.is_empty())
        .collect();
    join_first_bare(&values)
}

/// Every "IP<digits>" token; first bare, rest optional.
pub fn parse_ingress_protection(raw: &str) -> Option<String> {
    let values: Vec<String> = IP_RE
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect();
    join_first_bare(&values)
}

/// Semicolon/space separated thread specs; first bare, rest optional.
pub fn parse_thread(raw: &str) -> Option<String> {
    let cleaned = raw.replace(FOOTNOTE, "");
    let values: Vec<String> = THREAD_SPLIT_RE
        .split(&cleaned)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    join_first_bare(&values)
}

/// Base rating before the first parenthesis kept bare; ratings inside the
/// parentheses become optional variants.
pub fn parse_climate(raw: &str) -> Option<String> {
    split_parenthetical(raw)
}

/// Dual grammar selected by script detection.
///
/// Cyrillic text keeps its prose shape: a single substitution pass rewraps
/// every "(...)" group (plus an optional trailing 1/¹) as an optional span,
/// parentheses preserved. Non-Cyrillic values fall back to the same
/// base/parenthetical split used for the climate column.
pub fn parse_vibro_protection(raw: &str) -> Option<String> {
    if CYRILLIC_RE.is_match(raw) {
        let rewritten = VIBRO_GROUP_RE.replace_all(raw, |caps: &Captures| {
            let suffix = if caps.get(2).is_some() {
                FOOTNOTE.to_string()
            } else {
                String::new()
            };
            format!("<span class='optional'>({}){}</span>", &caps[1], suffix)
        });
        let rewritten = rewritten.trim();
        if rewritten.is_empty() {
            None
        } else {
            Some(rewritten.to_string())
        }
    } else {
        split_parenthetical(raw)
    }
}

fn split_parenthetical(raw: &str) -> Option<String> {
    let mut segments = raw.split(['(', ')']);
    let base = segments.next().unwrap_or("").trim();
    let mut values: Vec<String> = vec![base.to_string()];
    if let Some(inside) = segments.next() {
        for opt in inside.split(';') {
            let opt = opt.trim().replace(FOOTNOTE, "");
            if !opt.is_empty() {
                values.push(optional_span(&opt));
            }
        }
    }
    let joined = values.join("<br>");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Pressure ranges form an ordered list, one entry per "<value> <unit>;"
/// chunk. Lines are split at every letters+semicolon tail; leftover text
/// after the last tail becomes a final entry.
pub fn parse_pressure_ranges(raw: &str) -> Option<Vec<String>> {
    let mut result = Vec::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut start = 0;
        for m in PRESSURE_UNIT_RE.find_iter(line) {
            let chunk = line[start..m.end()].trim();
            if !chunk.is_empty() {
                result.push(chunk.to_string());
            }
            start = m.end();
        }
        let rest = line[start..].trim();
        if !rest.is_empty() {
            result.push(rest.to_string());
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

/// Temperature ranges collapse to a single sentence: internal line breaks
/// become ", " and a trailing period is appended.
pub fn parse_temperature(raw: &str) -> String {
    format!("{}.", raw.trim().replace('\n', ", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn model_single_line_passes_through() {
        assert_eq!(parse_model("МП3-У"), "МП3-У");
    }

    #[test]
    fn model_continuation_code_gets_plain_break() {
        assert_eq!(parse_model("МП3-У\nМП4-У"), "МП3-У<br>МП4-У");
    }

    #[test]
    fn model_descriptive_suffix_gets_subtext() {
        assert_eq!(
            parse_model("МП3-У\nс фланцем"),
            "МП3-У<br><span class='table_subtext'>с фланцем</span>"
        );
    }

    #[test]
    fn diameter_with_and_without_period() {
        assert_eq!(parse_diameter("d.63").as_deref(), Some("63 мм"));
        assert_eq!(parse_diameter("d100").as_deref(), Some("100 мм"));
        assert_eq!(parse_diameter("нет"), None);
    }

    #[test]
    fn accuracy_first_bare_rest_optional() {
        assert_eq!(
            parse_accuracy_class("к.т. 1,5; 1,0¹").as_deref(),
            Some("1,5<br><span class='optional'>1,0¹</span>")
        );
    }

    #[test]
    fn accuracy_empty_is_absent() {
        assert_eq!(parse_accuracy_class(""), None);
    }

    #[test]
    fn ingress_protection_tokens() {
        assert_eq!(
            parse_ingress_protection("IP40; IP53").as_deref(),
            Some("IP40<br><span class='optional'>IP53¹</span>")
        );
        assert_eq!(parse_ingress_protection("-"), None);
    }

    #[test]
    fn thread_splits_on_semicolons_and_spaces() {
        assert_eq!(
            parse_thread("М20х1,5; G1/2¹").as_deref(),
            Some("М20х1,5<br><span class='optional'>G1/2¹</span>")
        );
    }

    #[test]
    fn climate_parenthetical_variants() {
        assert_eq!(
            parse_climate("УХЛ1 (Т3; О1¹)").as_deref(),
            Some(
                "УХЛ1<br><span class='optional'>Т3¹</span>\
                 <br><span class='optional'>О1¹</span>"
            )
        );
    }

    #[test]
    fn climate_without_parens_is_bare() {
        assert_eq!(parse_climate("УХЛ1").as_deref(), Some("УХЛ1"));
    }

    #[test]
    fn vibro_cyrillic_rewraps_group_with_footnote() {
        assert_eq!(
            parse_vibro_protection("Виброустойчив (группа V1)1").as_deref(),
            Some("Виброустойчив <span class='optional'>(группа V1)¹</span>")
        );
    }

    #[test]
    fn vibro_cyrillic_group_without_digit_keeps_parens() {
        assert_eq!(
            parse_vibro_protection("Виброустойчив (группа N2)").as_deref(),
            Some("Виброустойчив <span class='optional'>(группа N2)</span>")
        );
    }

    #[test]
    fn vibro_non_cyrillic_falls_back_to_split() {
        assert_eq!(
            parse_vibro_protection("V1 (V2)").as_deref(),
            Some("V1<br><span class='optional'>V2¹</span>")
        );
    }

    #[test]
    fn pressure_chunks_split_at_unit_tails() {
        assert_eq!(
            parse_pressure_ranges("0-10 кПа;\n0-100 кПа;").unwrap(),
            vec!["0-10 кПа;".to_string(), "0-100 кПа;".to_string()]
        );
    }

    #[test]
    fn pressure_chunks_within_one_line() {
        assert_eq!(
            parse_pressure_ranges("0-10 кПа; 0-16 кПа; 0-25").unwrap(),
            vec![
                "0-10 кПа;".to_string(),
                "0-16 кПа;".to_string(),
                "0-25".to_string()
            ]
        );
    }

    #[test]
    fn pressure_empty_is_absent() {
        assert_eq!(parse_pressure_ranges(""), None);
    }

    #[test]
    fn temperature_joins_lines_and_ends_sentence() {
        assert_eq!(
            parse_temperature("-40...+60 °С\n-50...+60 °С¹"),
            "-40...+60 °С, -50...+60 °С¹."
        );
    }
}
