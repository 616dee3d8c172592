//! Mobile navigation menu
//!
//! The hamburger button and the overlay share one open flag. While the
//! overlay is open the page body does not scroll.

/// Mobile navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Closed menu
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay visible
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body scrolling blocked
    #[inline]
    #[must_use]
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Hamburger pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "menu toggled");
    }

    /// Close button, nav link, or external link pressed
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape pressed; returns whether it closed the menu
    pub fn on_escape(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }

    /// Click on the overlay; only a click on the backdrop itself closes
    pub fn on_overlay_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_locks_scroll() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.body_scroll_locked());

        menu.toggle();
        assert!(!menu.body_scroll_locked());
    }

    #[test]
    fn escape_only_reports_when_open() {
        let mut menu = NavMenu::new();
        assert!(!menu.on_escape());
        menu.toggle();
        assert!(menu.on_escape());
        assert!(!menu.is_open());
    }

    #[test]
    fn overlay_content_click_keeps_menu() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.on_overlay_click(false);
        assert!(menu.is_open());
        menu.on_overlay_click(true);
        assert!(!menu.is_open());
    }
}
