//! File provider abstraction for the scanner.
//!
//! The scanner receives a `FileProvider` instead of walking the filesystem
//! itself, so tests can feed it in-memory fixtures and the I/O policy
//! (whole-file blocking reads, unreadable files skipped) lives in one place.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Trait for supplying source files and their contents to the scanner.
pub trait FileProvider {
    /// All source files known to this provider, in walk order.
    fn files(&self) -> &[PathBuf];

    /// Files whose extension matches `ext` (without the leading dot).
    fn files_with_extension(&self, ext: &str) -> Vec<&Path>;

    /// Read the whole file. `None` when the file cannot be read (missing,
    /// permission denied, not valid UTF-8); the caller skips it.
    fn content(&self, path: &Path) -> Option<String>;
}

/// Real implementation: one blocking `read_to_string` per file, no caching.
pub struct SourceFiles {
    files: Vec<PathBuf>,
}

impl SourceFiles {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl FileProvider for SourceFiles {
    fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn files_with_extension(&self, ext: &str) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e == ext)
                    .unwrap_or(false)
            })
            .map(|p| p.as_path())
            .collect()
    }

    fn content(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("skipping unreadable file {}: {}", path.display(), e);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Test-only mock
// ---------------------------------------------------------------------------

#[cfg(test)]
pub struct MockFileProvider {
    files: Vec<PathBuf>,
    contents: std::collections::HashMap<PathBuf, String>,
}

#[cfg(test)]
impl MockFileProvider {
    /// Build a mock from `(relative_path, content)` pairs.
    ///
    /// Paths are prefixed with `/mock/src/` so tests never touch real files.
    pub fn new(entries: Vec<(&str, &str)>) -> Self {
        let root = PathBuf::from("/mock/src");
        let mut files = Vec::with_capacity(entries.len());
        let mut contents = std::collections::HashMap::with_capacity(entries.len());

        for (rel, body) in entries {
            let full = root.join(rel);
            files.push(full.clone());
            contents.insert(full, body.to_string());
        }

        Self { files, contents }
    }
}

#[cfg(test)]
impl FileProvider for MockFileProvider {
    fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn files_with_extension(&self, ext: &str) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e == ext)
                    .unwrap_or(false)
            })
            .map(|p| p.as_path())
            .collect()
    }

    fn content(&self, path: &Path) -> Option<String> {
        self.contents.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_file_provider_basics() {
        let provider = MockFileProvider::new(vec![
            ("components/Header.tsx", "<button onClick={open}>"),
            ("lib/email.ts", "export const send = () => {};"),
            ("README.md", "# notes"),
        ]);

        assert_eq!(provider.files().len(), 3);

        let tsx_files = provider.files_with_extension("tsx");
        assert_eq!(tsx_files.len(), 1);

        let header = PathBuf::from("/mock/src/components/Header.tsx");
        let content = provider.content(&header).expect("content should exist");
        assert!(content.contains("onClick"));

        assert!(provider.content(Path::new("/mock/src/missing.tsx")).is_none());
    }

    #[test]
    fn test_source_files_unreadable_returns_none() {
        let provider = SourceFiles::new(vec![PathBuf::from("/nonexistent/App.tsx")]);
        assert!(provider.content(Path::new("/nonexistent/App.tsx")).is_none());
    }
}
