use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHENATED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

const SOFT_HYPHEN: char = '\u{00AD}';

/// Cleans text pulled out of a PDF page: NFKC, words re-joined across
/// hyphenated line breaks, control characters dropped, runs of spaces
/// collapsed and consecutive blank lines folded into one paragraph break.
pub fn sanitize_page_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| *c != SOFT_HYPHEN)
        .map(|c| if c == '\u{000C}' { '\n' } else { c })
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t' || *c == '\r')
        .collect();
    let joined = HYPHENATED_BREAK.replace_all(&normalized, "$head$tail");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in joined.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(collapsed);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
