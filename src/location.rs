//! Best-effort mapping from a violation's serialized HTML back to a
//! line/column in the original source text.
//!
//! The rules engine reports the re-serialized (and potentially
//! re-normalized) HTML of the offending node, not an offset into the
//! source, so this is a heuristic text match rather than a source map.

/// A 1-based source position. `(0, 0)` means "not determined".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const UNRESOLVED: Location = Location { line: 0, column: 0 };
}

/// Trim the ends and collapse internal whitespace runs to single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Locate the first line of `source` whose whitespace-normalized text
/// contains the whitespace-normalized `element_html`.
///
/// The column is the 1-based character offset of the trimmed snippet
/// within the raw line. When the raw lookup misses (the engine altered
/// whitespace inside the markup), the column falls back to the line's
/// first non-whitespace character so the result is still a real position
/// on the matched line. No match at all yields `(0, 0)`.
pub fn locate(source: &str, element_html: &str) -> Location {
    if source.is_empty() {
        return Location::UNRESOLVED;
    }

    let needle = normalize(element_html);
    let needle_trimmed = element_html.trim();

    for (idx, line) in source.split('\n').enumerate() {
        if !normalize(line).contains(&needle) {
            continue;
        }
        let byte_offset = line
            .find(needle_trimmed)
            .unwrap_or_else(|| line.len() - line.trim_start().len());
        return Location {
            line: idx + 1,
            column: line[..byte_offset].chars().count() + 1,
        };
    }

    Location::UNRESOLVED
}
