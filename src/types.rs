//! Common types and data structures

/// One education/work/project engagement in the experience dataset.
///
/// Records are defined at build time and never created, mutated, or
/// destroyed at runtime; the card row is re-derived from them every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRecord {
    /// Optional category tag ("Education", "Open Source"). Drives the
    /// color-coded badge only; no badge renders when absent.
    pub note: Option<&'static str>,
    /// External image resource for the avatar.
    pub image_url: &'static str,
    /// Organization/project display name.
    pub title: &'static str,
    /// Role display name.
    pub subtitle: &'static str,
    /// Icon glyphs rendered left to right at a fixed uniform size.
    pub tech_icons: &'static [&'static str],
    /// Freeform (start, end) labels. Never parsed as dates; `end` may be a
    /// sentinel like "present".
    pub period: (&'static str, &'static str),
    /// Freeform highlight strings, rendered as a list in input order.
    pub bullets: &'static [&'static str],
}
