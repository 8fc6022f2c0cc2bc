use std::ops::Range;

/// Byte ranges of one token, before any emptiness filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub target: Range<usize>,
    pub label: Option<Range<usize>>,
    /// Offset one past the closing delimiter
    pub end: usize,
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Read `[[target]]` or `[[target | label]]` starting at `open`.
///
/// The target is the shortest text after `[[` that is followed by optional
/// whitespace and either `]]` or `|`; it may not contain brackets. Trailing
/// whitespace is trimmed from the target, leading whitespace from the label,
/// and the label ends at the first `]]`. Neither may contain a line break,
/// though the whitespace before `]]`/`|` may.
pub fn wiki_at(text: &str, open: usize) -> Option<RawToken> {
    if !text[open..].starts_with("[[") {
        return None;
    }
    let body_start = open + 2;

    for (i, c) in text[body_start..].char_indices() {
        let target_end = body_start + i;
        if let Some(token) = wiki_tail(text, body_start..target_end) {
            return Some(token);
        }
        if is_line_break(c) || c == '[' || c == ']' {
            return None;
        }
    }
    None
}

fn wiki_tail(text: &str, target: Range<usize>) -> Option<RawToken> {
    let rest = &text[target.end..];
    let after = rest.trim_start();
    let after_start = target.end + (rest.len() - after.len());

    if after.starts_with("]]") {
        return Some(RawToken {
            target,
            label: None,
            end: after_start + 2,
        });
    }

    let piped = after.strip_prefix('|')?;
    let label_text = piped.trim_start();
    let label_start = text.len() - label_text.len();

    for (j, c) in label_text.char_indices() {
        if label_text[j..].starts_with("]]") {
            return Some(RawToken {
                target,
                label: Some(label_start..label_start + j),
                end: label_start + j + 2,
            });
        }
        if is_line_break(c) {
            break;
        }
    }
    None
}

/// Read `[label](target)` starting at `open`.
///
/// The label runs to the first `]` and may not contain `[`; the `]` must be
/// followed directly by `(`. The target runs to the first `)`. Neither may
/// contain a line break.
pub fn markdown_at(text: &str, open: usize) -> Option<RawToken> {
    if !text[open..].starts_with('[') {
        return None;
    }
    let body_start = open + 1;

    let label_len =
        text[body_start..].find(|c: char| c == '[' || c == ']' || is_line_break(c))?;
    let label_end = body_start + label_len;
    if !text[label_end..].starts_with("](") {
        return None;
    }

    let target_start = label_end + 2;
    let target_len = text[target_start..].find(|c: char| c == ')' || is_line_break(c))?;
    let target_end = target_start + target_len;
    if !text[target_end..].starts_with(')') {
        return None;
    }

    Some(RawToken {
        target: target_start..target_end,
        label: Some(body_start..label_end),
        end: target_end + 1,
    })
}
