//! Text (terminal) reporter with colors and formatting

use crate::models::{Category, ScanReport};

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";

/// Category section colors
fn category_color(category: Category) -> &'static str {
    match category {
        Category::Commented => "\x1b[90m",   // Gray
        Category::SocialShare => "\x1b[36m", // Cyan
        Category::Placeholder => "\x1b[33m", // Yellow
        Category::Modal => "\x1b[35m",       // Magenta
        Category::IconOnly => "\x1b[34m",    // Blue
        Category::Other => "\x1b[0m",
    }
}

/// Render the scan report as formatted terminal output.
pub fn render(report: &ScanReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Unhandled Buttons{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Scanned {} .tsx files — {} button(s) without an onClick handler\n\n",
        report.files_scanned,
        report.total()
    ));

    if report.total() == 0 {
        out.push_str(&format!("{DIM}Nothing to review.{RESET}\n"));
        return out;
    }

    for (category, findings) in report.iter() {
        if findings.is_empty() {
            continue;
        }

        let color = category_color(category);
        out.push_str(&format!(
            "{color}{BOLD}{}{RESET} ({})\n",
            category.name().to_uppercase(),
            findings.len()
        ));

        for finding in findings {
            let marker = if finding.in_comment {
                format!("  {YELLOW}⚠ inside block comment{RESET}")
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  {}:{}{}\n",
                finding.file.display(),
                finding.line,
                marker
            ));
            out.push_str(&format!("    {DIM}{}{RESET}\n", finding.text));
        }
        out.push('\n');
    }

    out
}
