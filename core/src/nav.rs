//! Scroll-position driven navigation highlighting.

/// Default distance ahead of the viewport top at which a section counts as reached.
pub const DEFAULT_LOOKAHEAD: f64 = 200.0;

/// A named page section and its offset from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: String,
    top: f64,
}

impl Section {
    /// Creates a section entry.
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }

    /// The section's element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Offset of the section from the document top.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.top
    }
}

/// Picks the last section whose top, less `lookahead`, is at or above `scroll_y`.
///
/// Sections are taken in document order.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - lookahead)
        .map(Section::id)
}

/// Whether a nav link `href` points at the section `id`.
#[must_use]
pub fn links_to(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// What the nav links should look like after a scroll update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUpdate<'a> {
    /// The active section did not change; leave the links alone.
    Unchanged,
    /// Mark the link for this section and clear the rest.
    Activate(&'a str),
    /// No section is reached; clear every link.
    Clear,
}

/// Remembers the last applied selection so repeated scroll ticks skip DOM writes.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSync {
    lookahead: f64,
    applied: Option<Option<String>>,
}

impl Default for NavSync {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD)
    }
}

impl NavSync {
    /// Creates a tracker that has not applied anything yet.
    #[must_use]
    pub const fn new(lookahead: f64) -> Self {
        Self {
            lookahead,
            applied: None,
        }
    }

    /// The lookahead margin in CSS pixels.
    #[must_use]
    pub const fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// The section currently marked active, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.applied.as_ref().and_then(Option::as_deref)
    }

    /// Recomputes the selection for `scroll_y`.
    ///
    /// The first call always reports a change so markup-provided classes get reset.
    pub fn update<'s>(&mut self, sections: &'s [Section], scroll_y: f64) -> NavUpdate<'s> {
        let next = active_section(sections, scroll_y, self.lookahead);
        if let Some(previous) = &self.applied
            && previous.as_deref() == next
        {
            return NavUpdate::Unchanged;
        }
        self.applied = Some(next.map(str::to_owned));
        next.map_or(NavUpdate::Clear, NavUpdate::Activate)
    }

    /// Forgets the applied selection so the next update reports again.
    pub fn reset(&mut self) {
        self.applied = None;
    }
}
