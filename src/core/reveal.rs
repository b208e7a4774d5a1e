//! Reveal-once flags for the landing page sections
//!
//! Every animated section is a variant of [`RevealSection`]; the page owns one
//! [`RevealFlags`] value and each section's observer flips its own flag the
//! first time the section intersects the viewport.

use std::fmt;

/// Fraction of a section that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll offset (px) after which the scroll-to-top control appears
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Class put on `<html>` once the client can reveal sections; the stylesheet
/// only hides sections under it
pub const REVEAL_READY_CLASS: &str = "reveal-ready";

/// Per-step transition delay in the "How it works" list (ms)
pub const STEP_STAGGER_MS: u32 = 150;

/// Sections that animate in on first view.
///
/// The `Display` form is the section's element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealSection {
    Problem,
    Solution,
    HowItWorks,
    Audience,
    Pricing,
    Validate,
}

impl RevealSection {
    pub const ALL: [RevealSection; 6] = [
        RevealSection::Problem,
        RevealSection::Solution,
        RevealSection::HowItWorks,
        RevealSection::Audience,
        RevealSection::Pricing,
        RevealSection::Validate,
    ];

    /// DOM id of the section's root element
    pub fn element_id(&self) -> &'static str {
        match self {
            RevealSection::Problem => "problem",
            RevealSection::Solution => "solution",
            RevealSection::HowItWorks => "how-it-works",
            RevealSection::Audience => "audience",
            RevealSection::Pricing => "pricing",
            RevealSection::Validate => "validate",
        }
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl fmt::Display for RevealSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// One boolean per [`RevealSection`]; bits only ever go from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealFlags(u8);

impl RevealFlags {
    pub fn is_revealed(&self, section: RevealSection) -> bool {
        self.0 & section.bit() != 0
    }

    /// Mark `section` as revealed. Returns `true` only on the first call.
    pub fn reveal(&mut self, section: RevealSection) -> bool {
        if self.is_revealed(section) {
            return false;
        }
        self.0 |= section.bit();
        true
    }

    /// Feed one intersection observation; only an intersecting entry reveals.
    pub fn observe(&mut self, section: RevealSection, is_intersecting: bool) -> bool {
        is_intersecting && self.reveal(section)
    }

    pub fn all_revealed(&self) -> bool {
        RevealSection::ALL.iter().all(|s| self.is_revealed(*s))
    }
}

/// Whether the scroll-to-top control should be shown at `scroll_y`
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// CSS `transition-delay` for the step at `index`
pub fn step_delay(index: usize) -> String {
    format!("transition-delay: {}ms", index as u32 * STEP_STAGGER_MS)
}
