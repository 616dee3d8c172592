//! Scroll-driven behaviour
//!
//! Anchor-link resolution, the scroll spy that highlights the current nav
//! link, the sticky header flag and section reveal.

/// Fixed header height subtracted from anchor targets
pub const HEADER_OFFSET: f64 = 60.0;

/// Scroll position beyond which the header turns compact
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Distance above the viewport bottom at which sections reveal
pub const REVEAL_MARGIN: f64 = 100.0;

/// What to do with a clicked link
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorAction {
    /// Bare `#`: swallow the click
    Ignore,
    /// Same-page anchor: smooth-scroll to `top`, close the menu
    ScrollTo {
        /// Target element id
        id: String,
        /// Scroll position to reach
        top: f64,
    },
    /// Same-page anchor without a matching element: swallow the click
    Missing,
    /// Other page: close the menu, let the browser navigate
    Navigate,
}

impl AnchorAction {
    /// Check if the default navigation must be suppressed
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorAction::Navigate)
    }

    /// Check if the mobile menu closes
    #[must_use]
    pub fn closes_menu(&self) -> bool {
        matches!(self, AnchorAction::ScrollTo { .. } | AnchorAction::Navigate)
    }
}

/// Resolve a link click; `offset_of` looks up an element's page offset by id
pub fn resolve_anchor<F>(href: &str, offset_of: F) -> AnchorAction
where
    F: FnOnce(&str) -> Option<f64>,
{
    let Some(id) = href.strip_prefix('#') else {
        return AnchorAction::Navigate;
    };
    if id.is_empty() {
        return AnchorAction::Ignore;
    }
    match offset_of(id) {
        Some(offset) => AnchorAction::ScrollTo {
            id: id.to_string(),
            top: (offset - HEADER_OFFSET).max(0.0),
        },
        None => AnchorAction::Missing,
    }
}

/// Page section geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Element id
    pub id: String,
    /// Offset from the page top
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl Section {
    /// Create section geometry
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Id of the section the nav should highlight
///
/// The last section whose top, less a third of its height, is above the
/// scroll position.
#[must_use]
pub fn current_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - s.height / 3.0)
        .map(|s| s.id.as_str())
}

/// Check if the header shows its scrolled style
#[inline]
#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Check if a section has entered far enough to reveal
///
/// `top_in_viewport` is the section top relative to the viewport.
#[inline]
#[must_use]
pub fn should_reveal(top_in_viewport: f64, viewport_height: f64) -> bool {
    top_in_viewport < viewport_height - REVEAL_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(resolve_anchor("#", |_| None), AnchorAction::Ignore);
        assert_eq!(resolve_anchor("portfolio.html", |_| None), AnchorAction::Navigate);
        assert_eq!(resolve_anchor("#nope", |_| None), AnchorAction::Missing);

        let action = resolve_anchor("#kontakt", |id| (id == "kontakt").then_some(900.0));
        assert_eq!(
            action,
            AnchorAction::ScrollTo {
                id: "kontakt".to_string(),
                top: 840.0
            }
        );
        assert!(action.prevents_default());
        assert!(action.closes_menu());
        assert!(!AnchorAction::Navigate.prevents_default());
    }

    #[test]
    fn scroll_spy_picks_last_passed_section() {
        let sections = vec![
            Section::new("hero", 0.0, 600.0),
            Section::new("uslugi", 600.0, 900.0),
            Section::new("kontakt", 1500.0, 600.0),
        ];
        assert_eq!(current_section(&sections, 0.0), Some("hero"));
        assert_eq!(current_section(&sections, 300.0), Some("uslugi"));
        assert_eq!(current_section(&sections, 1300.0), Some("kontakt"));
        assert_eq!(current_section(&[], 10.0), None);
    }

    #[test]
    fn header_and_reveal_thresholds() {
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(101.0));
        assert!(should_reveal(599.0, 700.0));
        assert!(!should_reveal(600.0, 700.0));
    }
}
