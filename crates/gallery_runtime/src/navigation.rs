//! Section navigation: active-link tracking, navbar state, and scroll targets.

/// Height of the fixed navbar subtracted from scroll targets.
pub const NAVBAR_OFFSET_PX: f64 = 70.0;
/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 100.0;
/// Distance below the viewport top used to decide which section is current.
pub const ACTIVE_SECTION_LINE_PX: f64 = 100.0;
/// Minimum spacing between two scroll measurements.
pub const SCROLL_THROTTLE_MS: u64 = 100;

/// Page sections in document order: `(dom id, link label)`.
pub const PAGE_SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("story", "Our Story"),
    ("gallery", "Gallery"),
    ("message", "Message"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            active_section: PAGE_SECTIONS[0].0.to_string(),
        }
    }
}

impl NavState {
    /// Updates navbar style and the active link for a new scroll offset.
    ///
    /// The active section is left unchanged when the section line falls between sections.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > NAVBAR_SCROLLED_THRESHOLD_PX;
        if let Some(active) = active_section(scroll_y, sections) {
            self.active_section = active.to_string();
        }
    }
}

pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let line = scroll_y + ACTIVE_SECTION_LINE_PX;
    sections
        .iter()
        .find(|section| line >= section.top && line < section.top + section.height)
        .map(|section| section.id.as_str())
}

/// Whether a page click should close the mobile menu.
pub fn click_closes_menu(menu_open: bool, inside_navbar: bool) -> bool {
    menu_open && !inside_navbar
}

/// Leading-edge throttle for scroll measurements.
///
/// The first event of a burst is measured at once; events arriving during the cooldown are
/// folded into one trailing measurement when it elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollThrottle {
    cooling: bool,
    missed: bool,
}

impl ScrollThrottle {
    /// Records a scroll event. Returns `true` when the caller should measure now and arm the
    /// cooldown timer.
    pub fn on_event(&mut self) -> bool {
        if self.cooling {
            self.missed = true;
            return false;
        }
        self.cooling = true;
        true
    }

    /// Ends the cooldown. Returns `true` when events were swallowed and a trailing measurement is
    /// due.
    pub fn on_cooldown_elapsed(&mut self) -> bool {
        self.cooling = false;
        std::mem::take(&mut self.missed)
    }
}

/// Document offset to scroll to so the section starts just below the navbar.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - NAVBAR_OFFSET_PX).max(0.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 600.0), ("story", 600.0, 800.0), ("gallery", 1400.0, 1200.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn active_section_uses_line_below_viewport_top() {
        assert_eq!(active_section(0.0, &sections()), Some("home"));
        assert_eq!(active_section(499.0, &sections()), Some("home"));
        assert_eq!(active_section(500.0, &sections()), Some("story"));
        assert_eq!(active_section(5_000.0, &sections()), None);
    }

    #[test]
    fn on_scroll_toggles_scrolled_and_keeps_last_active_section() {
        let mut nav = NavState::default();
        nav.on_scroll(1_500.0, &sections());
        assert!(nav.scrolled);
        assert_eq!(nav.active_section, "gallery");

        nav.on_scroll(9_000.0, &sections());
        assert_eq!(nav.active_section, "gallery");

        nav.on_scroll(20.0, &sections());
        assert!(!nav.scrolled);
        assert_eq!(nav.active_section, "home");
    }

    #[test]
    fn scroll_burst_measures_once_then_trails() {
        let mut throttle = ScrollThrottle::default();
        assert!(throttle.on_event());
        assert!(!throttle.on_event());
        assert!(!throttle.on_event());
        assert!(throttle.on_cooldown_elapsed());

        assert!(throttle.on_event());
        assert!(!throttle.on_cooldown_elapsed());
        assert!(throttle.on_event());
    }

    #[test]
    fn only_clicks_outside_an_open_menu_close_it() {
        assert!(click_closes_menu(true, false));
        assert!(!click_closes_menu(true, true));
        assert!(!click_closes_menu(false, false));
    }

    #[test]
    fn scroll_target_accounts_for_navbar() {
        assert_eq!(scroll_target(600.0), 530.0);
        assert_eq!(scroll_target(10.0), 0.0);
    }
}
