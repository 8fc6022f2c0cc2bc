use std::path::{Component, Path};

/// Render a path with `/` separators, dropping `.` components.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vaultlink_core::to_slash_path;
///
/// assert_eq!(to_slash_path(Path::new("content/public/a.md")), "content/public/a.md");
/// assert_eq!(to_slash_path(Path::new("./pages/b.md")), "pages/b.md");
/// ```
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// The short name a document is mentioned by, derived from its path relative
/// to its source root.
///
/// Rules:
/// - the file stem, extension dropped
/// - `index` files take their directory's name (empty at the source root)
/// - a leading `YYYY-MM-DD-` date is stripped
///
/// # Examples
///
/// ```
/// use vaultlink_core::file_slug;
///
/// assert_eq!(file_slug("posts/hello-world.md"), "hello-world");
/// assert_eq!(file_slug("books/dune/index.md"), "dune");
/// assert_eq!(file_slug("index.md"), "");
/// assert_eq!(file_slug("posts/2024-03-01-launch.md"), "launch");
/// ```
pub fn file_slug(relative_path: &str) -> String {
    let path = Path::new(relative_path);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = if stem == "index" {
        path.parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        stem
    };

    strip_date_prefix(&name).to_string()
}

fn strip_date_prefix(name: &str) -> &str {
    let bytes = name.as_bytes();
    let is_date = bytes.len() >= 10
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !is_date {
        return name;
    }

    let rest = &name[10..];
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    if rest.is_empty() {
        name
    } else {
        rest
    }
}
