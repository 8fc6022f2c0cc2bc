//! Recognition of shorthand link and image syntax.
//!
//! A single left-to-right scanner finds non-overlapping tokens of one
//! [`LinkKind`] inside a byte window of the text. Matching is leftmost-first:
//! at every position the scanner tries to read a token and, on success, resumes
//! after it.
//!
//! Image kinds start at a `!`. Link kinds start at a `[` that is not preceded
//! by `!` in the full text, so image syntax is never read as a link.

mod scanner;

use scanner::{markdown_at, wiki_at};

use crate::model::{LinkKind, LinkToken};
use std::ops::Range;

/// Iterator over the tokens of one kind inside `window`.
pub struct Tokens<'a> {
    text: &'a str,
    kind: LinkKind,
    pos: usize,
    end: usize,
}

/// Scan all of `text` for tokens of `kind`.
pub fn tokens(text: &str, kind: LinkKind) -> Tokens<'_> {
    tokens_in(text, 0..text.len(), kind)
}

/// Scan `text[window]` for tokens of `kind`; no token extends past the window.
pub fn tokens_in(text: &str, window: Range<usize>, kind: LinkKind) -> Tokens<'_> {
    Tokens {
        text,
        kind,
        pos: window.start,
        end: window.end,
    }
}

impl<'a> Tokens<'a> {
    fn token_at(&self, pos: usize) -> Option<LinkToken<'a>> {
        let bytes = self.text.as_bytes();
        let bounded = &self.text[..self.end];

        let open = match self.kind {
            LinkKind::WikiImage | LinkKind::MarkdownImage => {
                if bytes[pos] != b'!' {
                    return None;
                }
                pos + 1
            }
            LinkKind::WikiLink | LinkKind::MarkdownLink => {
                if pos > 0 && bytes[pos - 1] == b'!' {
                    return None;
                }
                pos
            }
        };

        let raw = match self.kind {
            LinkKind::WikiLink | LinkKind::WikiImage => wiki_at(bounded, open)?,
            LinkKind::MarkdownLink | LinkKind::MarkdownImage => markdown_at(bounded, open)?,
        };

        let target = &self.text[raw.target];
        if target.trim().is_empty() {
            return None;
        }
        let label = raw.label.map(|r| &self.text[r]).filter(|l| !l.is_empty());

        Some(LinkToken {
            kind: self.kind,
            target,
            label,
            span: pos..raw.end,
        })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = LinkToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.end {
            let pos = self.pos;
            if let Some(token) = self.token_at(pos) {
                self.pos = token.span.end;
                log::trace!("{:?} `{}` at {:?}", token.kind, token.target, token.span);
                return Some(token);
            }
            // Advance by one char, staying on a boundary
            let step = self.text[pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos = pos + step;
        }
        None
    }
}
