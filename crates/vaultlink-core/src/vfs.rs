use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Read the entire contents of a file as bytes.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Write `contents` to `path`, creating parent directories as needed.
    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()>;

    /// List all files under `root` whose extension is one of `extensions`.
    /// An empty `extensions` lists every file. The search is recursive and
    /// the result is sorted by path.
    fn list_files(&self, root: &Path, extensions: &[String]) -> Vec<PathBuf>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }

    fn list_files(&self, root: &Path, extensions: &[String]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                let matches = extensions.is_empty()
                    || path
                        .extension()
                        .is_some_and(|ext| extensions.iter().any(|e| ext == e.as_str()));
                if matches {
                    files.push(path.to_path_buf());
                }
            }
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("b/z.md"), "").unwrap();
        fs::write(root.join("a.md"), "").unwrap();
        fs::write(root.join("c.txt"), "").unwrap();

        let fs_backend = PhysicalFileSystem;
        let files = fs_backend.list_files(root, &["md".to_string()]);
        assert_eq!(files, vec![root.join("a.md"), root.join("b/z.md")]);

        assert_eq!(fs_backend.list_files(root, &[]).len(), 3);
    }

    #[test]
    fn test_write_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out/posts/x/index.html");
        PhysicalFileSystem.write(&path, b"<p>hi</p>").unwrap();
        assert_eq!(PhysicalFileSystem.read_to_string(&path).unwrap(), "<p>hi</p>");
    }
}
