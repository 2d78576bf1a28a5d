//! Locating and splicing the marker comments in managed text.
//!
//! Detection is line-oriented pattern matching, not JavaScript parsing. A
//! marker-like line inside a string literal or block comment is treated as a
//! real marker.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::generator::create_postamble;

/// `// fid-umd {...}` with the JSON payload in group 1.
const CONFIG_PATTERN: &str = r"(?m)^[ \t]*// fid-umd (\{.*\})";
const PREAMBLE_START_PATTERN: &str = r"(?m)^[ \t]*// fid-umd \{.*\n?";
const PREAMBLE_END_PATTERN: &str = r"(?m)^[ \t]*// fid-umd end\n?";
const POSTAMBLE_START_PATTERN: &str = r"(?m)^[ \t]*// fid-umd post\n?";
const POSTAMBLE_END_PATTERN: &str = r"(?m)[ \t]*// fid-umd post-end\n?";

/// A generated region delimited by a start and an end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// From the configuration marker through `// fid-umd end`
    Preamble,
    /// From `// fid-umd post` through `// fid-umd post-end`
    Postamble,
}

impl Region {
    fn start(self) -> Option<&'static Regex> {
        static PREAMBLE: OnceLock<Option<Regex>> = OnceLock::new();
        static POSTAMBLE: OnceLock<Option<Regex>> = OnceLock::new();
        match self {
            Self::Preamble => compiled(&PREAMBLE, PREAMBLE_START_PATTERN),
            Self::Postamble => compiled(&POSTAMBLE, POSTAMBLE_START_PATTERN),
        }
    }

    fn end(self) -> Option<&'static Regex> {
        static PREAMBLE: OnceLock<Option<Regex>> = OnceLock::new();
        static POSTAMBLE: OnceLock<Option<Regex>> = OnceLock::new();
        match self {
            Self::Preamble => compiled(&PREAMBLE, PREAMBLE_END_PATTERN),
            Self::Postamble => compiled(&POSTAMBLE, POSTAMBLE_END_PATTERN),
        }
    }

    /// Split `text` around this region. See [`split_code`].
    #[must_use]
    pub fn split(self, text: &str) -> (&str, &str) {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => split_code(text, start, end),
            _ => (text, ""),
        }
    }
}

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

/// Raw JSON payload of the first configuration marker, if any.
///
/// The payload must open and close its braces on the marker line;
/// `// fid-umd { blah` is not a configuration marker.
#[must_use]
pub fn find_config_payload(text: &str) -> Option<&str> {
    static CONFIG: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = compiled(&CONFIG, CONFIG_PATTERN)?;
    pattern.captures(text).and_then(|captures| captures.get(1)).map(|payload| payload.as_str())
}

/// Split text into the parts before and after a marked region.
///
/// - No start match: `(text, "")`
/// - Start match without a later end match: everything after the start line
///   is returned as `after`
/// - Both found: `after` starts right after the end match
///
/// Only the first start match and the first end match after it count.
#[must_use]
pub fn split_code<'a>(text: &'a str, start: &Regex, end: &Regex) -> (&'a str, &'a str) {
    let Some(start_match) = start.find(text) else {
        return (text, "");
    };

    let before = &text[..start_match.start()];
    let remainder = &text[start_match.end()..];
    match end.find(remainder) {
        Some(end_match) => (before, &remainder[end_match.end()..]),
        None => (before, remainder),
    }
}

/// Replace (or insert) the preamble.
///
/// Without a configuration marker the preamble is placed at the very start
/// and the whole text follows it.
#[must_use]
pub fn update_preamble(text: &str, preamble: &str) -> String {
    let (before, after) = match Region::Preamble.split(text) {
        (_, "") if !has_preamble_start(text) => {
            debug!("No preamble marker found, inserting at start");
            ("", text)
        }
        pieces => pieces,
    };

    format!("{before}{preamble}{after}")
}

fn has_preamble_start(text: &str) -> bool {
    Region::Preamble.start().is_some_and(|start| start.is_match(text))
}

/// Replace (or append) the postamble, keeping it on its own line.
#[must_use]
pub fn update_postamble(text: &str) -> String {
    let (before, after) = Region::Postamble.split(text);
    let mut updated = String::with_capacity(text.len() + 64);
    updated.push_str(before);

    if !updated.ends_with('\n') {
        updated.push('\n');
    }

    updated.push_str(&create_postamble());
    updated.push_str(after);
    updated
}
