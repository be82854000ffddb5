//! Navigation bar state
//!
//! The menu open/closed flag lives in one value object; everything the
//! renderer needs is derived through pure functions, so the state is
//! testable without a terminal.

/// Site sections shown in the navigation bar
pub const NAV_ITEMS: [&str; 6] = ["Home", "About", "Services", "Portfolio", "Blog", "Contact"];

/// Explicit UI state for the navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Indicator for the menu control
    pub fn toggle_symbol(&self) -> &'static str {
        if self.menu_open {
            "[x]"
        } else {
            "[=]"
        }
    }

    /// Items to render; an expanded menu shows every section, a
    /// collapsed one only the current page
    pub fn visible_items(&self) -> &'static [&'static str] {
        if self.menu_open {
            &NAV_ITEMS
        } else {
            &NAV_ITEMS[5..]
        }
    }

    /// While the menu overlays the page, background scrolling is held
    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let nav = NavState::default();
        assert!(!nav.menu_open);
        assert!(!nav.scroll_locked());
        assert_eq!(nav.toggle_symbol(), "[=]");
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.menu_open);
        assert!(nav.scroll_locked());
        assert_eq!(nav.toggle_symbol(), "[x]");
        nav.toggle();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_visible_items_derive_from_state() {
        let mut nav = NavState::default();
        assert_eq!(nav.visible_items(), &["Contact"]);
        nav.toggle();
        assert_eq!(nav.visible_items().len(), 6);
        assert_eq!(nav.visible_items()[0], "Home");
    }
}
