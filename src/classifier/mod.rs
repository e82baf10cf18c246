//! Heuristic finding categorization
//!
//! A priority list of substring rules, not independent predicates: rules are
//! evaluated top to bottom and the first match wins. Matching is
//! case-insensitive against both the raw opening-tag line and the display
//! window. The term tables are fixed process-wide configuration; they are
//! passed in explicitly so tests can substitute their own.

use crate::models::{Category, Finding, ScanReport};

/// Share actions and named social platforms (the site ships French UI, so
/// the localized share label is in the list).
pub const SOCIAL_SHARE_TERMS: &[&str] = &[
    "share",
    "partager",
    "facebook",
    "instagram",
    "twitter",
    "linkedin",
    "whatsapp",
    "pinterest",
];

/// Placeholder / not-yet-wired markers, localized variants included.
pub const PLACEHOLDER_TERMS: &[&str] = &[
    "todo",
    "coming soon",
    "placeholder",
    "bientôt",
    "à venir",
    "prochainement",
];

/// The rule tables the classifier evaluates, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct Rules<'a> {
    pub social_share: &'a [&'a str],
    pub placeholder: &'a [&'a str],
    pub modal: &'a str,
    /// Compact-padding utility class that marks icon-only buttons.
    pub icon_padding: &'a str,
    /// Text-label wrapper whose presence vetoes the icon-only rule.
    pub label_wrapper: &'a str,
    /// Closing-tag substring whose presence vetoes the icon-only rule.
    pub close_tag: &'a str,
}

pub const DEFAULT_RULES: Rules<'static> = Rules {
    social_share: SOCIAL_SHARE_TERMS,
    placeholder: PLACEHOLDER_TERMS,
    modal: "modal",
    icon_padding: "p-2",
    label_wrapper: "<span",
    close_tag: crate::scanner::CLOSE_TAG,
};

/// Assign the finding its category. Pure function of the finding's text
/// content and comment flag; evaluated once per finding.
pub fn classify(finding: &Finding, rules: &Rules) -> Category {
    if finding.in_comment {
        return Category::Commented;
    }

    let line = finding.text.to_lowercase();
    let window = finding.window.to_lowercase();
    let matches = |term: &str| {
        let term = term.to_lowercase();
        line.contains(&term) || window.contains(&term)
    };

    if rules.social_share.iter().any(|t| matches(t)) {
        return Category::SocialShare;
    }
    if rules.placeholder.iter().any(|t| matches(t)) {
        return Category::Placeholder;
    }
    if matches(rules.modal) {
        return Category::Modal;
    }
    // The window was truncated before this check; a closing tag past the
    // truncation point is invisible here, and that drift is preserved.
    if matches(rules.icon_padding)
        && !window.contains(rules.label_wrapper)
        && !window.contains(rules.close_tag)
    {
        return Category::IconOnly;
    }

    Category::Other
}

/// Partition findings into a report, preserving encounter order per bucket.
pub fn partition(findings: Vec<Finding>, rules: &Rules, files_scanned: usize) -> ScanReport {
    let mut report = ScanReport::new(files_scanned);
    for finding in findings {
        let category = classify(&finding, rules);
        report.push(category, finding);
    }
    report
}
