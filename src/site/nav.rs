//! Navigation
//!
//! Mobile menu state, header styling and the active-section link.

/// Scroll offset at which the header switches to its scrolled style
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// How far above a section's top it starts counting as active
pub const SECTION_OFFSET: f64 = 200.0;

/// Something that can open or close the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    CloseButton,
    LinkClicked,
    /// Click outside both the menu and its toggle
    OutsideClick,
    Escape,
}

/// Mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the menu is open
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    /// Apply an event and return whether the menu is now open
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        self.open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::CloseButton
            | MenuEvent::LinkClicked
            | MenuEvent::OutsideClick
            | MenuEvent::Escape => false,
        };
        self.open
    }
}

/// Whether the header shows its scrolled style
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= HEADER_SCROLL_THRESHOLD
}

/// Where an anchor link should scroll to, clear of the fixed header
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

/// Geometry of a page section with an `id`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// `top - 200 < scroll_y <= top - 200 + height`
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_OFFSET;
        scroll_y > start && scroll_y <= start + self.height
    }
}

/// Tracks which nav link is highlighted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLinkTracker {
    active: Option<String>,
}

impl ActiveLinkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-evaluate for the current scroll position
    ///
    /// The last matching section wins; when none matches the previous
    /// highlight stays.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
        if let Some(section) = sections.iter().rev().find(|s| s.contains(scroll_y)) {
            self.active = Some(section.id.clone());
        }
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close_triggers() {
        let mut menu = NavMenu::new();
        assert!(menu.handle(MenuEvent::Toggle));
        assert!(menu.locks_scroll());
        assert!(!menu.handle(MenuEvent::Toggle));

        for event in [
            MenuEvent::CloseButton,
            MenuEvent::LinkClicked,
            MenuEvent::OutsideClick,
            MenuEvent::Escape,
        ] {
            menu.handle(MenuEvent::Toggle);
            assert!(menu.is_open());
            assert!(!menu.handle(event), "{:?} should close the menu", event);
        }
    }

    #[test]
    fn test_close_events_keep_closed_menu_closed() {
        let mut menu = NavMenu::new();
        assert!(!menu.handle(MenuEvent::Escape));
        assert!(!menu.handle(MenuEvent::OutsideClick));
    }

    #[test]
    fn test_header_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(49.9));
        assert!(header_is_scrolled(50.0));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(900.0, 72.0), 828.0);
    }

    #[test]
    fn test_section_bounds() {
        let section = SectionBounds::new("services", 800.0, 500.0);
        assert!(!section.contains(600.0));
        assert!(section.contains(600.5));
        assert!(section.contains(1100.0));
        assert!(!section.contains(1100.5));
    }

    #[test]
    fn test_active_link() {
        let sections = vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("services", 700.0, 600.0),
            SectionBounds::new("contact", 1300.0, 400.0),
        ];
        let mut tracker = ActiveLinkTracker::new();

        assert_eq!(tracker.update(&sections, 0.0), Some("home"));
        assert_eq!(tracker.update(&sections, 600.0), Some("services"));
        assert_eq!(tracker.update(&sections, 1150.0), Some("contact"));
    }

    #[test]
    fn test_active_link_sticks_when_nothing_matches() {
        let sections = vec![SectionBounds::new("about", 1000.0, 300.0)];
        let mut tracker = ActiveLinkTracker::new();

        assert_eq!(tracker.update(&sections, 100.0), None);
        assert_eq!(tracker.update(&sections, 900.0), Some("about"));
        assert_eq!(tracker.update(&sections, 5000.0), Some("about"));
    }
}
