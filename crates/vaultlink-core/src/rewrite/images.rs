use super::rewrite_two_stage;
use crate::model::{LinkKind, LinkToken};

/// Prefix every embedded image with `assets_root`.
///
/// `![alt](x)` becomes `![alt](<root>/x)`. `![[x]]` and `![[x | alt]]` become
/// markdown images whose visible text is the file name `x`; the alt text, if
/// any, is carried as a quoted title: `![x "alt"](<root>/x)`.
///
/// Not idempotent: applying it twice prefixes twice. Run it once per document.
pub fn rewrite_images(raw_text: &str, assets_root: &str) -> String {
    rewrite_two_stage(
        raw_text,
        LinkKind::MarkdownImage,
        LinkKind::WikiImage,
        |token| Some(image_markup(token, assets_root)),
    )
}

fn image_markup(token: &LinkToken<'_>, assets_root: &str) -> String {
    let url = format!("{}/{}", assets_root, token.target);
    match token.kind {
        LinkKind::WikiImage => {
            let title = token
                .label
                .map(|alt| format!(" \"{}\"", alt))
                .unwrap_or_default();
            format!("![{}{}]({})", token.target, title, url)
        }
        _ => format!("![{}]({})", token.label.unwrap_or(""), url),
    }
}
