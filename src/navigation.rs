pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 100.0;
pub const HIDE_THRESHOLD: f64 = 200.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Experience", href: "#experience" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Contact", href: "#contact" },
];

/// Header chrome derived from the scroll-offset stream and menu clicks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    pub menu_open: bool,
    pub visible: bool,
    pub scrolled: bool,
    pub last_offset: f64,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            menu_open: false,
            visible: true,
            scrolled: false,
            last_offset: 0.0,
        }
    }
}

impl HeaderState {
    /// Folds one scroll sample into the state.
    ///
    /// Scrolling up or sitting near the top reveals the header; it only hides
    /// once the page moves down past [`HIDE_THRESHOLD`]. Between the two
    /// thresholds the previous visibility holds. Any scroll closes the menu.
    pub fn on_scroll(self, offset: f64) -> Self {
        let visible = if offset < self.last_offset || offset < REVEAL_THRESHOLD {
            true
        } else if offset > self.last_offset && offset > HIDE_THRESHOLD {
            false
        } else {
            self.visible
        };

        Self {
            menu_open: false,
            visible,
            scrolled: offset > SCROLLED_THRESHOLD,
            last_offset: offset,
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }
}

pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Only web links open in a new tab; anchors and `mailto:` stay in place.
pub fn opens_new_tab(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_links_open_a_new_tab() {
        assert!(opens_new_tab("https://github.com/Vicky2002p"));
        assert!(opens_new_tab("http://example.com"));
        assert!(!opens_new_tab("mailto:vivekjpatel2002@gmail.com"));
        assert!(!opens_new_tab("#contact"));
    }

    fn replay(offsets: &[f64]) -> Vec<HeaderState> {
        let mut state = HeaderState::default();
        offsets
            .iter()
            .map(|offset| {
                state = state.on_scroll(*offset);
                state
            })
            .collect()
    }

    /// Checks every sample against the reveal/hide rule, given what came before it.
    fn assert_hysteresis(offsets: &[f64]) {
        let states = replay(offsets);
        let mut previous = HeaderState::default();

        for (offset, state) in offsets.iter().zip(&states) {
            if *offset < previous.last_offset || *offset < REVEAL_THRESHOLD {
                assert!(state.visible, "sample {offset} after {} must show", previous.last_offset);
            } else if *offset > previous.last_offset && *offset > HIDE_THRESHOLD {
                assert!(!state.visible, "sample {offset} after {} must hide", previous.last_offset);
            } else {
                assert_eq!(state.visible, previous.visible, "sample {offset} must hold");
            }
            previous = *state;
        }
    }

    #[test]
    fn starts_visible_at_top_with_menu_closed() {
        let state = HeaderState::default();
        assert!(state.visible);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn downward_scroll_hides_only_past_hide_threshold() {
        let states = replay(&[40.0, 120.0, 180.0, 200.0, 210.0, 400.0]);
        let visibility: Vec<bool> = states.iter().map(|state| state.visible).collect();

        assert_eq!(visibility, vec![true, true, true, true, false, false]);
    }

    #[test]
    fn any_upward_sample_reveals_immediately() {
        let states = replay(&[300.0, 600.0, 599.0]);
        assert!(!states[1].visible);
        assert!(states[2].visible);
    }

    #[test]
    fn hidden_header_stays_hidden_between_thresholds_until_scrolling_up() {
        let states = replay(&[250.0, 150.0, 160.0, 170.0, 90.0]);
        let visibility: Vec<bool> = states.iter().map(|state| state.visible).collect();

        // 150 is an upward sample; 160 and 170 move down but stay under the hide line.
        assert_eq!(visibility, vec![false, true, true, true, true]);
    }

    #[test]
    fn repeated_offset_keeps_visibility() {
        let states = replay(&[300.0, 300.0]);
        assert!(!states[0].visible);
        assert!(!states[1].visible);

        let states = replay(&[150.0, 150.0]);
        assert!(states[1].visible);
    }

    #[test]
    fn scrolled_flag_tracks_fifty_pixel_line() {
        let states = replay(&[50.0, 51.0, 10.0]);
        assert!(!states[0].scrolled);
        assert!(states[1].scrolled);
        assert!(!states[2].scrolled);
    }

    #[test]
    fn monotonic_sequences_follow_hysteresis() {
        let down: Vec<f64> = (0..60).map(|step| f64::from(step) * 15.0).collect();
        let up: Vec<f64> = down.iter().rev().copied().collect();

        assert_hysteresis(&down);
        assert_hysteresis(&up);
    }

    #[test]
    fn oscillating_sequences_follow_hysteresis() {
        for amplitude in [30.0, 80.0, 150.0, 400.0] {
            for base in [0.0, 90.0, 180.0, 260.0, 1_000.0] {
                let offsets: Vec<f64> = (0..40)
                    .map(|step| {
                        let wave = if step % 2 == 0 { amplitude } else { 0.0 };
                        base + wave + f64::from(step) * 3.0
                    })
                    .collect();
                assert_hysteresis(&offsets);
            }
        }
    }

    #[test]
    fn scroll_closes_open_menu_in_either_direction() {
        let open = HeaderState::default().on_scroll(300.0).toggle_menu();
        assert!(open.menu_open);
        assert!(!open.on_scroll(400.0).menu_open);
        assert!(!open.on_scroll(10.0).menu_open);
    }

    #[test]
    fn menu_toggle_flips_and_close_is_idempotent() {
        let state = HeaderState::default();
        assert!(state.toggle_menu().menu_open);
        assert!(!state.toggle_menu().toggle_menu().menu_open);
        assert!(!state.close_menu().close_menu().menu_open);
    }

    #[test]
    fn scroll_top_control_appears_past_five_hundred() {
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(501.0));
    }

    #[test]
    fn nav_items_are_in_page_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
        assert_eq!(NAV_ITEMS[0].href, "#home");
        assert_eq!(NAV_ITEMS[5].href, "#contact");
    }
}
