//! Posting section identification.
//!
//! Job postings are loosely structured: short heading lines ("Requirements",
//! "Nice to have", "What you'll do") introduce blocks of related text. The
//! segmenter classifies headings by keyword and captures each block verbatim
//! so later passes can bucket skill matches by the section they fell in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Classified posting section.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    About,
    Responsibilities,
    Requirements,
    Preferred,
    Benefits,
}

/// Heading keyword tables, checked in declaration order.
///
/// Preferred comes first: "preferred qualifications" must not fall into the
/// requirements bucket.
const HEADING_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Preferred,
        &["nice to have", "nice-to-have", "preferred", "bonus", "desirable", "plus"],
    ),
    (
        SectionKind::Benefits,
        &["benefits", "perks", "what we offer", "compensation"],
    ),
    (
        SectionKind::About,
        &["about us", "about the company", "who we are", "our mission"],
    ),
    (
        SectionKind::Responsibilities,
        &["responsibilities", "duties", "what you'll do", "what you will do", "your role", "the role"],
    ),
    (
        SectionKind::Requirements,
        &["requirements", "qualifications", "what you bring", "what we're looking for", "must have", "skills"],
    ),
];

/// Maximum length of a line still considered a heading candidate.
const MAX_HEADING_LEN: usize = 60;

/// Maximum word count of a heading candidate.
const MAX_HEADING_WORDS: usize = 6;

impl SectionKind {
    /// Classifies a single line as a section heading, if it is one.
    ///
    /// Headings are short, non-bullet lines containing a known keyword.
    pub fn classify_heading(line: &str) -> Option<Self> {
        let trimmed = line.trim().trim_end_matches(':').trim();
        if trimmed.is_empty() || trimmed.len() > MAX_HEADING_LEN {
            return None;
        }
        if trimmed.starts_with(['-', '*', '\u{2022}', '\u{2013}']) {
            return None;
        }
        if trimmed.split_whitespace().count() > MAX_HEADING_WORDS {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        for (kind, keywords) in HEADING_KEYWORDS {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return Some(*kind);
            }
        }
        None
    }

    /// Returns the display label for this section.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::About => "About",
            SectionKind::Responsibilities => "Responsibilities",
            SectionKind::Requirements => "Requirements",
            SectionKind::Preferred => "Preferred",
            SectionKind::Benefits => "Benefits",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A posting split into its preamble and classified sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedPosting {
    /// Text before the first recognized heading.
    pub preamble: String,
    /// Section blocks, stored verbatim. Repeated headings of the same kind
    /// concatenate.
    pub sections: BTreeMap<SectionKind, String>,
}

impl SegmentedPosting {
    /// Segments posting text by heading lines.
    pub fn segment(text: &str) -> Self {
        let mut preamble = String::new();
        let mut sections: BTreeMap<SectionKind, String> = BTreeMap::new();
        let mut current: Option<SectionKind> = None;

        for line in text.lines() {
            if let Some(kind) = SectionKind::classify_heading(line) {
                current = Some(kind);
                continue;
            }
            match current {
                Some(kind) => {
                    let block = sections.entry(kind).or_default();
                    if !block.is_empty() {
                        block.push('\n');
                    }
                    block.push_str(line);
                }
                None => {
                    if !preamble.is_empty() {
                        preamble.push('\n');
                    }
                    preamble.push_str(line);
                }
            }
        }

        for block in sections.values_mut() {
            *block = block.trim().to_string();
        }

        Self {
            preamble: preamble.trim().to_string(),
            sections,
        }
    }

    /// Returns the block for a given section kind, if present.
    pub fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections.get(&kind).map(String::as_str)
    }

    /// Text feeding the required-skills bucket: the preamble plus the
    /// requirements and responsibilities blocks.
    ///
    /// Benefits and about blocks are excluded so that tooling mentioned as a
    /// perk does not become a requirement.
    pub fn required_text(&self) -> String {
        let mut parts = vec![self.preamble.as_str()];
        for kind in [SectionKind::Requirements, SectionKind::Responsibilities] {
            if let Some(block) = self.section(kind) {
                parts.push(block);
            }
        }
        parts.retain(|p| !p.is_empty());
        parts.join("\n")
    }

    /// Text feeding the preferred-skills bucket.
    pub fn preferred_text(&self) -> Option<&str> {
        self.section(SectionKind::Preferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = "\
Acme builds rockets.

Requirements:
- 5+ years of Python
- Experience with AWS

Nice to have
- Rust

Benefits
- Free snacks and a Kubernetes cluster";

    #[test]
    fn classifies_plain_headings() {
        assert_eq!(
            SectionKind::classify_heading("Requirements:"),
            Some(SectionKind::Requirements)
        );
        assert_eq!(
            SectionKind::classify_heading("What you'll do"),
            Some(SectionKind::Responsibilities)
        );
        assert_eq!(
            SectionKind::classify_heading("Preferred Qualifications"),
            Some(SectionKind::Preferred)
        );
    }

    #[test]
    fn bullet_lines_are_not_headings() {
        assert_eq!(SectionKind::classify_heading("- 5 years preferred"), None);
        assert_eq!(SectionKind::classify_heading("* bonus points for Go"), None);
    }

    #[test]
    fn long_lines_are_not_headings() {
        let line = "We are looking for someone with deep requirements analysis experience across many domains";
        assert_eq!(SectionKind::classify_heading(line), None);
    }

    #[test]
    fn segment_captures_blocks_verbatim() {
        let segmented = SegmentedPosting::segment(POSTING);

        assert_eq!(segmented.preamble, "Acme builds rockets.");
        assert_eq!(
            segmented.section(SectionKind::Requirements),
            Some("- 5+ years of Python\n- Experience with AWS")
        );
        assert_eq!(segmented.section(SectionKind::Preferred), Some("- Rust"));
        assert_eq!(
            segmented.section(SectionKind::Benefits),
            Some("- Free snacks and a Kubernetes cluster")
        );
    }

    #[test]
    fn required_text_excludes_benefits() {
        let segmented = SegmentedPosting::segment(POSTING);
        let required = segmented.required_text();

        assert!(required.contains("Python"));
        assert!(!required.contains("snacks"));
        assert!(!required.contains("Kubernetes"));
    }

    #[test]
    fn repeated_headings_concatenate() {
        let text = "Requirements\nPython\nRequirements\nRust";
        let segmented = SegmentedPosting::segment(text);
        assert_eq!(
            segmented.section(SectionKind::Requirements),
            Some("Python\nRust")
        );
    }

    #[test]
    fn text_without_headings_is_all_preamble() {
        let segmented = SegmentedPosting::segment("just a paragraph of text");
        assert_eq!(segmented.preamble, "just a paragraph of text");
        assert!(segmented.sections.is_empty());
    }
}
