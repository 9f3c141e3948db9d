//! Value conversion
//!
//! Pure parsing of scraped text into numbers. Scraped values arrive as
//! whatever the page rendered ("12.3", "2.5B", "4.1%"), so every parser here
//! answers `None` for anything it cannot read; nothing in this module panics
//! or errors.

use crate::models::field::MetricField;
use crate::models::raw_data::RawSymbolData;

const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Parse the leading decimal prefix of `text`.
///
/// Matches how the page text is actually shaped: a number possibly followed
/// by trailing junk ("12.3x", "4.1%"). Empty input or a missing numeric
/// prefix is `None`, never NaN.
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }

    s[..end].parse::<f64>().ok()
}

/// Expand a shorthand-magnitude figure like "2.5B" or "750m".
///
/// Exactly one case-insensitive suffix from {M, B} is accepted; a plain
/// number without a suffix, or any other suffix, is `None`. Plain numbers
/// belong to [`parse_float`] instead.
pub fn parse_shorthand(text: &str) -> Option<f64> {
    let s = text.trim();
    let last = s.chars().last()?;

    let magnitude = match last.to_ascii_uppercase() {
        'M' => MILLION,
        'B' => BILLION,
        _ => return None,
    };

    let prefix = &s[..s.len() - last.len_utf8()];
    let number = parse_float(prefix)?;

    Some(number * magnitude)
}

/// Read a percentage figure ("4.1%" or a bare "4.1") as its numeric value
pub fn parse_percent(text: &str) -> Option<f64> {
    let s = text.trim().trim_end_matches('%');
    parse_float(s)
}

/// Raw scraped text for a field, `None` when the field was never captured
pub fn raw_text(data: &RawSymbolData, field: MetricField) -> Option<&str> {
    data.find(field).map(|r| r.raw_text.as_str())
}

/// Float value of a field's raw text.
///
/// Quirk carried over from the original pipeline: a value that parses to
/// exactly 0 is treated as missing, the same as unscraped or unparseable
/// text. See the rating engine for the matching zero-is-missing rule.
pub fn float_of(data: &RawSymbolData, field: MetricField) -> Option<f64> {
    raw_text(data, field)
        .and_then(parse_float)
        .filter(|v| *v != 0.0)
}
