//! Scroll arithmetic shared by the navigation components.
//!
//! Everything here is plain math over measurements the DOM layer reads each
//! scroll tick, so the threshold behavior can be tested without a browser.

/// Fixed header height cleared when scrolling to an anchor target.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Viewport line (from the top) that decides which section is "current".
pub const SECTION_LINE_PX: f64 = 100.0;
/// Scroll offset past which the navbar switches to its opaque state.
pub const NAVBAR_THRESHOLD_PX: f64 = 50.0;

/// One scroll tick's worth of viewport measurements, read fresh every event.
pub struct ScrollSnapshot {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Live position of one `section` element, viewport-relative top plus height.
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Progress bar width in percent. Defined as 0 when the page is shorter than
/// the viewport (nothing to scroll).
pub fn progress_percent(snapshot: &ScrollSnapshot) -> f64 {
    let scrollable = snapshot.scroll_height - snapshot.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    snapshot.scroll_top / scrollable * 100.0
}

/// Two discrete navbar states, no hysteresis.
pub fn navbar_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAVBAR_THRESHOLD_PX
}

/// Id of the section whose bounds contain the section line. Sections are
/// assumed non-overlapping; the last match in document order wins regardless.
pub fn current_section(sections: &[SectionBounds]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if section.top <= SECTION_LINE_PX && section.top + section.height > SECTION_LINE_PX {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Absolute scroll target that puts `target_top` (viewport-relative) just
/// below the fixed header.
pub fn anchor_scroll_top(target_top: f64, page_y_offset: f64) -> f64 {
    target_top + page_y_offset - HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn progress_is_linear_over_scrollable_height() {
        let snapshot = ScrollSnapshot {
            scroll_top: 500.0,
            scroll_height: 2768.0,
            viewport_height: 768.0,
        };
        assert_eq!(progress_percent(&snapshot), 25.0);

        let at_bottom = ScrollSnapshot {
            scroll_top: 2000.0,
            ..snapshot
        };
        assert_eq!(progress_percent(&at_bottom), 100.0);
    }

    #[test]
    fn progress_is_zero_when_page_fits_in_viewport() {
        let snapshot = ScrollSnapshot {
            scroll_top: 0.0,
            scroll_height: 768.0,
            viewport_height: 768.0,
        };
        assert_eq!(progress_percent(&snapshot), 0.0);

        let taller_viewport = ScrollSnapshot {
            scroll_top: 0.0,
            scroll_height: 600.0,
            viewport_height: 768.0,
        };
        assert_eq!(progress_percent(&taller_viewport), 0.0);
    }

    #[test]
    fn navbar_switches_strictly_past_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.1));
        assert!(navbar_scrolled(400.0));
    }

    #[test]
    fn current_section_contains_the_line() {
        let sections = vec![
            section("home", -500.0, 590.0),
            section("about", 90.0, 600.0),
            section("projects", 690.0, 600.0),
        ];
        assert_eq!(current_section(&sections), Some("about"));
    }

    #[test]
    fn current_section_boundaries() {
        // Top exactly on the line counts, bottom exactly on the line does not.
        let on_line = vec![section("about", 100.0, 400.0)];
        assert_eq!(current_section(&on_line), Some("about"));

        let ends_on_line = vec![section("about", -300.0, 400.0)];
        assert_eq!(current_section(&ends_on_line), None);
    }

    #[test]
    fn no_section_matches_above_all() {
        let sections = vec![
            section("home", 200.0, 600.0),
            section("about", 800.0, 600.0),
        ];
        assert_eq!(current_section(&sections), None);
        assert_eq!(current_section(&[]), None);
    }

    #[test]
    fn last_match_wins_when_sections_overlap() {
        let sections = vec![
            section("home", 0.0, 400.0),
            section("about", 50.0, 400.0),
        ];
        assert_eq!(current_section(&sections), Some("about"));
    }

    #[test]
    fn anchor_target_clears_the_header() {
        assert_eq!(anchor_scroll_top(300.0, 1000.0), 1220.0);
        assert_eq!(anchor_scroll_top(-120.0, 1000.0), 800.0);
    }
}
