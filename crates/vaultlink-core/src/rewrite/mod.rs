//! Text transforms that turn shorthand references into site-relative ones.
//!
//! Both passes have the same two-stage shape. The markdown form is rewritten
//! across the whole text first; the wiki form is then only looked for in the
//! text the first stage left alone. A span claimed by the first stage, whether
//! replaced or kept verbatim, is never re-entered by the second.

mod images;
mod links;

pub use images::rewrite_images;
pub use links::rewrite_links;

use crate::model::{LinkKind, LinkToken};
use crate::syntax::{tokens, tokens_in};
use std::ops::Range;

struct Splice {
    span: Range<usize>,
    /// `None` keeps the original bytes
    replacement: Option<String>,
}

fn rewrite_two_stage<F>(text: &str, first: LinkKind, second: LinkKind, replace: F) -> String
where
    F: Fn(&LinkToken<'_>) -> Option<String>,
{
    let mut splices: Vec<Splice> = tokens(text, first)
        .map(|token| Splice {
            replacement: replace(&token),
            span: token.span,
        })
        .collect();

    let mut gaps = Vec::with_capacity(splices.len() + 1);
    let mut cursor = 0;
    for splice in &splices {
        if splice.span.start > cursor {
            gaps.push(cursor..splice.span.start);
        }
        cursor = splice.span.end;
    }
    if cursor < text.len() {
        gaps.push(cursor..text.len());
    }

    for gap in gaps {
        splices.extend(tokens_in(text, gap, second).map(|token| Splice {
            replacement: replace(&token),
            span: token.span,
        }));
    }

    if splices.is_empty() {
        return text.to_string();
    }
    splices.sort_by_key(|splice| splice.span.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for splice in splices {
        out.push_str(&text[cursor..splice.span.start]);
        match splice.replacement {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(&text[splice.span.clone()]),
        }
        cursor = splice.span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
