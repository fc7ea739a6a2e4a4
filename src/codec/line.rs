//! Dump-line classification.
//!
//! One line of dump text classifies as blank, a section separator, a
//! continuation of the most recent attribute, an attribute line, or noise.
//! Continuation is tried before Attribute: a name-less leading `[n]` token
//! is a syntactic subset of the attribute grammar, and trying Attribute
//! first would misread it as an attribute named `""`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Classification of one line of dump text (line terminators already
/// stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpLine {
    /// Empty or whitespace-only.
    Blank,
    /// Section delimiter (`---`). Carries no data.
    Separator,
    /// An additional indexed value for the most recently named attribute.
    Continuation {
        index: usize,
        declared_type: Option<String>,
        raw_value: String,
    },
    /// A named attribute value, optionally indexed and typed.
    Attribute {
        name: String,
        index: Option<usize>,
        declared_type: Option<String>,
        raw_value: String,
    },
    /// None of the above. Dropped by the accumulator.
    Unrecognized,
}

// Leading token is only the bracketed index; at most one canonical space is
// stripped after the `:`/`=` delimiter, the rest of the line is verbatim.
static CONTINUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\[(\d+)\](?:\s*\[([^\[\]]+)\])?\s*[:=]\s?(.*)$")
        .expect("continuation line pattern compiles")
});

// The index bracket must immediately follow the name token.
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^\s\[\]:=]+)(?:\[(\d+)\])?(?:\s*\[([^\[\]]+)\])?\s*[:=]\s?(.*)$")
        .expect("attribute line pattern compiles")
});

/// Classify one line of dump text.
pub fn classify(line: &str) -> DumpLine {
    if line.trim().is_empty() {
        return DumpLine::Blank;
    }
    if line.starts_with("---") {
        return DumpLine::Separator;
    }
    if let Some(captures) = CONTINUATION_RE.captures(line) {
        return match captures[1].parse::<usize>() {
            Ok(index) => DumpLine::Continuation {
                index,
                declared_type: captures.get(2).map(|m| m.as_str().to_string()),
                raw_value: captures[3].to_string(),
            },
            // Digit runs that overflow usize are noise, not data.
            Err(_) => DumpLine::Unrecognized,
        };
    }
    if let Some(captures) = ATTRIBUTE_RE.captures(line) {
        let index = match captures.get(2) {
            Some(digits) => match digits.as_str().parse::<usize>() {
                Ok(index) => Some(index),
                Err(_) => return DumpLine::Unrecognized,
            },
            None => None,
        };
        return DumpLine::Attribute {
            name: captures[1].to_string(),
            index,
            declared_type: captures.get(3).map(|m| m.as_str().to_string()),
            raw_value: captures[4].to_string(),
        };
    }
    DumpLine::Unrecognized
}
