//! Unhandled-button scanner
//!
//! Line-oriented heuristic scan of JSX/TSX markup for `<button` elements
//! that never receive an `onClick` handler. Deliberately NOT a parser: the
//! detection is plain substring search over lines with fixed lookahead and
//! lookback windows, so false positives and negatives are possible and
//! accepted. The window sizes are part of the contract; changing them
//! changes which findings are reported.

pub mod file_provider;
pub mod files;

use crate::models::Finding;
use std::path::Path;
use tracing::debug;

pub use file_provider::{FileProvider, SourceFiles};

/// Opening-tag marker of the interactive element under inspection.
pub const OPEN_TAG: &str = "<button";
/// Attribute that registers a click handler.
pub const HANDLER_ATTR: &str = "onClick";
/// Closing element marker, bounds the display window.
pub const CLOSE_TAG: &str = "</button";
/// JSX block-comment delimiters.
pub const COMMENT_OPEN: &str = "{/*";
pub const COMMENT_CLOSE: &str = "*/";

/// Lines inspected after the opening tag for the handler attribute.
pub const HANDLER_LOOKAHEAD: usize = 5;
/// Lines after the opening tag included in the display window.
pub const WINDOW_LINES: usize = 9;
/// Display window truncation limit, in characters.
pub const WINDOW_MAX_CHARS: usize = 200;
/// Lines scanned backward for an unterminated block-comment opener.
pub const COMMENT_LOOKBACK: usize = 10;

/// Scan every `.tsx` file of the provider. A file that cannot be read is
/// skipped; the scan continues with the remaining files.
pub fn scan(provider: &dyn FileProvider) -> Vec<Finding> {
    let mut findings = Vec::new();

    for path in provider.files_with_extension("tsx") {
        match provider.content(path) {
            Some(content) => findings.extend(scan_file(path, &content)),
            None => debug!("no content for {}, skipping", path.display()),
        }
    }

    findings
}

/// Scan a single file's content for unhandled buttons.
pub fn scan_file(path: &Path, content: &str) -> Vec<Finding> {
    let lines: Vec<&str> = content.lines().collect();
    let mut findings = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.contains(OPEN_TAG) {
            continue;
        }
        if has_handler(&lines, i) {
            continue;
        }
        findings.push(Finding {
            file: path.to_path_buf(),
            line: (i + 1) as u32,
            text: line.trim().to_string(),
            in_comment: inside_block_comment(&lines, i),
            window: display_window(&lines, i),
        });
    }

    findings
}

/// Handler presence check: same line first, then up to `HANDLER_LOOKAHEAD`
/// following lines. The lookahead stops early once a line closes the tag
/// (contains a `>` that is not the last character of the trimmed line)
/// without the attribute having appeared: the tag terminated before any
/// handler. A handler on the same line as the closing bracket still counts.
fn has_handler(lines: &[&str], i: usize) -> bool {
    if lines[i].contains(HANDLER_ATTR) {
        return true;
    }

    let end = (i + 1 + HANDLER_LOOKAHEAD).min(lines.len());
    for next in &lines[i + 1..end] {
        if next.contains(HANDLER_ATTR) {
            return true;
        }
        let trimmed = next.trim();
        if let Some(pos) = trimmed.find('>') {
            if pos + 1 != trimmed.len() {
                return false;
            }
        }
    }

    false
}

/// Assemble the display window: the opening-tag line plus up to
/// `WINDOW_LINES` following lines joined with spaces, stopping after a line
/// that carries the closing element marker, truncated to `WINDOW_MAX_CHARS`
/// characters with an ellipsis.
fn display_window(lines: &[&str], i: usize) -> String {
    let end = (i + 1 + WINDOW_LINES).min(lines.len());
    let mut parts = Vec::new();

    for line in &lines[i..end] {
        parts.push(line.trim());
        if line.contains(CLOSE_TAG) {
            break;
        }
    }

    let window = parts.join(" ");
    if window.chars().count() > WINDOW_MAX_CHARS {
        let truncated: String = window.chars().take(WINDOW_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        window
    }
}

/// Comment status: scan backward up to `COMMENT_LOOKBACK` lines for the
/// nearest unterminated block-comment opener (opener with no closer on the
/// same line). The tag is inside the comment when no closer appears strictly
/// before the tag line; a closer on the tag's own line or later means the
/// comment is still open where the tag starts. An opener more than
/// `COMMENT_LOOKBACK` lines up is invisible; that blind spot is intentional.
fn inside_block_comment(lines: &[&str], i: usize) -> bool {
    let start = i.saturating_sub(COMMENT_LOOKBACK);

    for k in (start..i).rev() {
        if lines[k].contains(COMMENT_OPEN) && !lines[k].contains(COMMENT_CLOSE) {
            return !lines[k + 1..i].iter().any(|l| l.contains(COMMENT_CLOSE));
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::file_provider::MockFileProvider;
    use super::*;

    fn scan_str(content: &str) -> Vec<Finding> {
        scan_file(Path::new("/mock/src/App.tsx"), content)
    }

    #[test]
    fn test_inline_handler_is_not_reported() {
        let findings = scan_str("<button onClick={save}>Save</button>\n");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_handler_is_reported() {
        let findings = scan_str("<button className=\"btn\">Save</button>\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert!(findings[0].text.contains(OPEN_TAG));
    }

    #[test]
    fn test_handler_within_lookahead_is_not_reported() {
        // Handler two lines below the tag, inside a multi-line attribute block.
        let content = "<button\n  className=\"btn\"\n  onClick={save}\n>\n  Save\n</button>\n";
        assert!(scan_str(content).is_empty());
    }

    #[test]
    fn test_handler_beyond_lookahead_is_reported() {
        // onClick first appears on line 7, six lines below the opening tag.
        let content = "<button\n  a={1}\n  b={2}\n  c={3}\n  d={4}\n  e={5}\n  onClick={save}\n>\n";
        let findings = scan_str(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_lookahead_stops_when_tag_closes() {
        // Tag closes on line 2 (`>` followed by label text), handler on line 3
        // belongs to some other element.
        let content = "<button\n  className=\"btn\"> Save\n<a onClick={go}>go</a>\n";
        let findings = scan_str(content);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_trailing_bracket_does_not_stop_lookahead() {
        // A line whose trimmed text ends with `>` does not terminate the
        // lookahead; the handler two lines later is still seen.
        let content = "<button\n  disabled\n>\n  onClick={save}\n";
        assert!(scan_str(content).is_empty());
    }

    #[test]
    fn test_window_stops_at_closing_tag() {
        let content = "<button>\n  Share\n</button>\n<div>unrelated</div>\n";
        let findings = scan_str(content);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].window.contains("Share"));
        assert!(findings[0].window.contains(CLOSE_TAG));
        assert!(!findings[0].window.contains("unrelated"));
    }

    #[test]
    fn test_window_truncates_to_200_chars() {
        let long_attr = "x".repeat(300);
        let content = format!("<button className=\"{}\">\n  Save\n</button>\n", long_attr);
        let findings = scan_str(&content);
        assert_eq!(findings.len(), 1);
        let window = &findings[0].window;
        assert!(window.ends_with("..."));
        assert_eq!(window.chars().count(), WINDOW_MAX_CHARS + 3);
    }

    #[test]
    fn test_comment_opener_ten_lines_up_marks_finding() {
        // Opener exactly COMMENT_LOOKBACK lines above the tag, closer on the
        // tag's own line: still inside the comment where the tag starts.
        let mut content = String::from("{/*\n");
        for _ in 0..9 {
            content.push_str("  disabled section\n");
        }
        content.push_str("<button>Old</button> */}\n");
        let findings = scan_str(&content);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].in_comment);
    }

    #[test]
    fn test_comment_opener_eleven_lines_up_is_blind_spot() {
        let mut content = String::from("{/*\n");
        for _ in 0..10 {
            content.push_str("  disabled section\n");
        }
        content.push_str("<button>Old</button> */}\n");
        let findings = scan_str(&content);
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].in_comment);
    }

    #[test]
    fn test_closed_comment_before_tag_is_not_marked() {
        let content = "{/*\n  old markup\n*/}\n<button>Save</button>\n";
        let findings = scan_str(content);
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].in_comment);
    }

    #[test]
    fn test_single_line_comment_does_not_mark_later_tag() {
        // Opener and closer on the same line is not an unterminated opener.
        let content = "{/* note */}\n<button>Save</button>\n";
        let findings = scan_str(content);
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].in_comment);
    }

    #[test]
    fn test_end_to_end_three_buttons_one_finding() {
        // One inline handler, one handler two lines below in a multi-line
        // attribute block, one handler-less button inside a block comment.
        let content = "\
<button onClick={submit}>Envoyer</button>
<button
  className=\"btn\"
  onClick={cancel}
>
  Annuler
</button>
{/*
<button className=\"btn\">Archiver</button>
*/}
";
        let findings = scan_str(content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 9);
        assert!(findings[0].in_comment);
    }

    #[test]
    fn test_scan_only_visits_tsx_files() {
        let provider = MockFileProvider::new(vec![
            ("components/A.tsx", "<button>Save</button>\n"),
            ("lib/helpers.ts", "<button>not scanned</button>\n"),
        ]);
        let findings = scan(&provider);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].file.ends_with("components/A.tsx"));
    }

    #[test]
    fn test_reported_lines_contain_the_marker() {
        let content = "<div>\n<button>\nSave\n</button>\n<button>Go</button>\n";
        let original: Vec<&str> = content.lines().collect();
        for f in scan_str(content) {
            assert!(original[(f.line - 1) as usize].contains(OPEN_TAG));
        }
    }
}
