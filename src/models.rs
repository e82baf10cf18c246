//! Core data models for siteops
//!
//! Shared between the scanner, the classifier, and the reporters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Heuristic triage buckets for unhandled-button findings.
///
/// The order here is the rule-evaluation order: classification walks the
/// variants top to bottom and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Commented,
    SocialShare,
    Placeholder,
    Modal,
    IconOnly,
    Other,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Commented,
        Category::SocialShare,
        Category::Placeholder,
        Category::Modal,
        Category::IconOnly,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Commented => "commented",
            Category::SocialShare => "social-share",
            Category::Placeholder => "placeholder",
            Category::Modal => "modal",
            Category::IconOnly => "icon-only",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One interactive element found without a click handler.
///
/// Created during the scan, never mutated afterwards. `window` is the
/// opening-tag line plus up to nine following lines, truncated to 200
/// characters; it exists only for classification and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub file: PathBuf,
    /// 1-based line number of the opening tag.
    pub line: u32,
    /// Trimmed text of the opening-tag line.
    pub text: String,
    /// Whether the opening tag sits inside a JSX block comment.
    pub in_comment: bool,
    /// Bounded text window used for classification and display.
    pub window: String,
}

/// Findings partitioned into categories, encounter order preserved.
///
/// All six buckets always exist so that an empty category is distinguishable
/// from a missing one; the text reporter skips empty buckets at render time.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub files_scanned: usize,
    buckets: [Vec<Finding>; 6],
}

impl ScanReport {
    pub fn new(files_scanned: usize) -> Self {
        Self {
            files_scanned,
            ..Default::default()
        }
    }

    pub fn push(&mut self, category: Category, finding: Finding) {
        self.buckets[category as usize].push(finding);
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn findings(&self, category: Category) -> &[Finding] {
        &self.buckets[category as usize]
    }

    /// Iterate all buckets in report order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Finding])> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.findings(*c)))
    }
}
