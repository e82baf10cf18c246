//! Fix-imports and inject-init commands - one-shot tree rewrites

use crate::rewrite::{apply_to_tree, ImportRewrite, InitInjection, RewriteOutcome};

use anyhow::Result;
use console::style;
use std::path::Path;

/// Extensions the rewriters touch.
const REWRITE_EXTENSIONS: &[&str] = &["ts", "tsx"];

pub fn run_fix_imports(root: &Path, from: &str, to: &str, dry_run: bool) -> Result<()> {
    let rewrite = ImportRewrite::new(from, to)?;

    eprintln!(
        "{}Rewriting imports of {} to {} under {}{}",
        style("→ ").dim(),
        style(from).yellow(),
        style(to).green(),
        style(root.display()).dim(),
        if dry_run { " (dry run)" } else { "" }
    );

    let outcome = apply_to_tree(root, REWRITE_EXTENSIONS, dry_run, |content| {
        rewrite.apply(content)
    })?;

    report(&outcome, dry_run);
    Ok(())
}

pub fn run_inject_init(
    root: &Path,
    import_line: &str,
    call_line: &str,
    containing: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let inject = InitInjection::new(import_line, call_line);

    eprintln!(
        "{}Injecting init call under {}{}",
        style("→ ").dim(),
        style(root.display()).dim(),
        if dry_run { " (dry run)" } else { "" }
    );

    let outcome = apply_to_tree(root, REWRITE_EXTENSIONS, dry_run, |content| {
        if let Some(needle) = containing {
            if !content.contains(needle) {
                return None;
            }
        }
        inject.apply(content)
    })?;

    report(&outcome, dry_run);
    Ok(())
}

fn report(outcome: &RewriteOutcome, dry_run: bool) {
    for path in &outcome.changed {
        let verb = if dry_run { "would change" } else { "changed" };
        println!("  {} {}", style(verb).green(), path.display());
    }
    println!(
        "\n{} file(s) {}, {} unchanged",
        outcome.changed.len(),
        if dry_run { "would change" } else { "changed" },
        outcome.unchanged
    );
}
