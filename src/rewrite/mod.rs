//! One-shot text substitutions over a source tree
//!
//! Single-pass, unvalidated edits with one hard requirement: idempotence.
//! Running the same rewrite twice must produce no further change, so the
//! import rewriter only matches the exact old module specifier and the init
//! injector skips files that already carry the call line.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a tree-wide rewrite touched.
#[derive(Debug, Default)]
pub struct RewriteOutcome {
    pub changed: Vec<PathBuf>,
    pub unchanged: usize,
}

/// Rewrites ES import statements whose module specifier is exactly `from`.
///
/// Covers `import x from 'mod'`, `export { y } from 'mod'` and bare
/// `import 'mod'`, in both quote styles. Anything else on the line is left
/// untouched.
pub struct ImportRewrite {
    to: String,
    pattern: Regex,
}

impl ImportRewrite {
    pub fn new(from: &str, to: &str) -> Result<Self> {
        let escaped = regex::escape(from);
        // The regex crate has no backreferences; the quote pair is kept
        // consistent by matching each style as its own alternative.
        let pattern = Regex::new(&format!(
            r#"(\b(?:import|from)\s*)('{0}'|"{0}")"#,
            escaped
        ))
        .context("building import pattern")?;
        Ok(Self {
            to: to.to_string(),
            pattern,
        })
    }

    /// Returns the rewritten content, or `None` when nothing matched.
    pub fn apply(&self, content: &str) -> Option<String> {
        if !self.pattern.is_match(content) {
            return None;
        }
        let replaced = self.pattern.replace_all(content, |caps: &regex::Captures| {
            let quote = &caps[2][..1];
            format!("{}{}{}{}", &caps[1], quote, self.to, quote)
        });
        Some(replaced.into_owned())
    }
}

/// Ensures an import line and an initialization call exist after the last
/// import of a file. Files already carrying the call line are untouched.
pub struct InitInjection {
    import_line: String,
    call_line: String,
}

impl InitInjection {
    pub fn new(import_line: &str, call_line: &str) -> Self {
        Self {
            import_line: import_line.to_string(),
            call_line: call_line.to_string(),
        }
    }

    /// Returns the injected content, or `None` when the file already has the
    /// call line.
    pub fn apply(&self, content: &str) -> Option<String> {
        let call = self.call_line.trim();
        if content.lines().any(|l| l.trim() == call) {
            return None;
        }

        let lines: Vec<&str> = content.lines().collect();
        let insert_at = lines
            .iter()
            .rposition(|l| is_import_line(l))
            .map(|i| i + 1)
            .unwrap_or(0);
        let has_import = lines.iter().any(|l| l.trim() == self.import_line.trim());

        let mut out: Vec<String> = Vec::with_capacity(lines.len() + 2);
        out.extend(lines[..insert_at].iter().map(|s| s.to_string()));
        if !has_import {
            out.push(self.import_line.clone());
        }
        out.push(self.call_line.clone());
        out.extend(lines[insert_at..].iter().map(|s| s.to_string()));

        let mut joined = out.join("\n");
        if content.ends_with('\n') || content.is_empty() {
            joined.push('\n');
        }
        Some(joined)
    }
}

fn is_import_line(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("import ") || t.starts_with("import{") || t.starts_with("import'") || t.starts_with("import\"")
}

/// Apply a transform to every matching file under `root`. A file the
/// transform leaves alone (or returns unchanged) counts as unchanged; an
/// unreadable file is skipped. With `dry_run` nothing is written back.
pub fn apply_to_tree<F>(
    root: &Path,
    extensions: &[&str],
    dry_run: bool,
    transform: F,
) -> Result<RewriteOutcome>
where
    F: Fn(&str) -> Option<String>,
{
    let files = crate::scanner::files::collect_source_files(root, extensions)?;
    let mut outcome = RewriteOutcome::default();

    for path in files {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                debug!("skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };

        match transform(&content) {
            Some(updated) if updated != content => {
                if !dry_run {
                    std::fs::write(&path, &updated)
                        .with_context(|| format!("writing {}", path.display()))?;
                }
                outcome.changed.push(path);
            }
            _ => outcome.unchanged += 1,
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_rewrite_both_quote_styles() {
        let rewrite = ImportRewrite::new("@/lib/email", "@/lib/email-service").expect("pattern");
        let content = "import { send } from '@/lib/email';\nimport cfg from \"@/lib/email\";\n";
        let updated = rewrite.apply(content).expect("should rewrite");
        assert!(updated.contains("from '@/lib/email-service';"));
        assert!(updated.contains("from \"@/lib/email-service\";"));
        assert!(!updated.contains("'@/lib/email';"));
    }

    #[test]
    fn test_import_rewrite_bare_and_export_from() {
        let rewrite = ImportRewrite::new("./globals.css", "./styles/globals.css").expect("pattern");
        let content = "import './globals.css';\nexport { theme } from './globals.css';\n";
        let updated = rewrite.apply(content).expect("should rewrite");
        assert_eq!(
            updated,
            "import './styles/globals.css';\nexport { theme } from './styles/globals.css';\n"
        );
    }

    #[test]
    fn test_import_rewrite_exact_specifier_only() {
        let rewrite = ImportRewrite::new("@/lib/email", "@/lib/email-service").expect("pattern");
        // A longer specifier sharing the prefix must not match.
        assert!(rewrite
            .apply("import { tpl } from '@/lib/email/templates';\n")
            .is_none());
    }

    #[test]
    fn test_import_rewrite_is_idempotent() {
        let rewrite = ImportRewrite::new("react-hot-toast", "sonner").expect("pattern");
        let content = "import { toast } from 'react-hot-toast';\n";
        let once = rewrite.apply(content).expect("first pass rewrites");
        assert!(rewrite.apply(&once).is_none(), "second pass must be a no-op");
    }

    #[test]
    fn test_inject_after_last_import() {
        let inject = InitInjection::new(
            "import { initMonitoring } from '@/lib/monitoring';",
            "initMonitoring();",
        );
        let content = "import React from 'react';\nimport { App } from './App';\n\nexport default App;\n";
        let updated = inject.apply(content).expect("should inject");
        let lines: Vec<&str> = updated.lines().collect();
        assert_eq!(lines[2], "import { initMonitoring } from '@/lib/monitoring';");
        assert_eq!(lines[3], "initMonitoring();");
        assert!(updated.ends_with("export default App;\n"));
    }

    #[test]
    fn test_inject_without_imports_goes_to_top() {
        let inject = InitInjection::new("import './init';", "setup();");
        let updated = inject.apply("export const x = 1;\n").expect("should inject");
        assert!(updated.starts_with("import './init';\nsetup();\n"));
    }

    #[test]
    fn test_inject_is_idempotent() {
        let inject = InitInjection::new("import './init';", "setup();");
        let once = inject.apply("import React from 'react';\n").expect("injects");
        assert!(inject.apply(&once).is_none(), "second pass must be a no-op");
    }

    #[test]
    fn test_inject_keeps_existing_import_line() {
        let inject = InitInjection::new("import './init';", "setup();");
        let content = "import './init';\nconst a = 1;\n";
        let updated = inject.apply(content).expect("call line still missing");
        assert_eq!(updated.matches("import './init';").count(), 1);
        assert!(updated.contains("setup();"));
    }

    #[test]
    fn test_apply_to_tree_counts_and_writes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = dir.path().join("a.ts");
        let b = dir.path().join("b.ts");
        std::fs::write(&a, "import x from 'old';\n").expect("write");
        std::fs::write(&b, "import y from 'other';\n").expect("write");

        let rewrite = ImportRewrite::new("old", "new").expect("pattern");
        let outcome = apply_to_tree(dir.path(), &["ts"], false, |c| rewrite.apply(c))
            .expect("tree rewrite");
        assert_eq!(outcome.changed.len(), 1);
        assert_eq!(outcome.unchanged, 1);
        let rewritten = std::fs::read_to_string(&a).expect("read back");
        assert_eq!(rewritten, "import x from 'new';\n");

        // Second run over the tree changes nothing.
        let again = apply_to_tree(dir.path(), &["ts"], false, |c| rewrite.apply(c))
            .expect("tree rewrite");
        assert!(again.changed.is_empty());
        assert_eq!(again.unchanged, 2);
    }

    #[test]
    fn test_apply_to_tree_dry_run_leaves_files_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = dir.path().join("a.ts");
        std::fs::write(&a, "import x from 'old';\n").expect("write");

        let rewrite = ImportRewrite::new("old", "new").expect("pattern");
        let outcome = apply_to_tree(dir.path(), &["ts"], true, |c| rewrite.apply(c))
            .expect("tree rewrite");
        assert_eq!(outcome.changed.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&a).expect("read back"),
            "import x from 'old';\n"
        );
    }
}
