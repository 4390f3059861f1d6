use super::*;

fn sections() -> Vec<SectionBox> {
    vec![
        SectionBox::new("home", 0.0, 600.0),
        SectionBox::new("services", 600.0, 800.0),
        SectionBox::new("contact", 1400.0, 500.0),
    ]
}

// =============================================================================
// navbar
// =============================================================================

#[test]
fn navbar_is_translucent_near_top() {
    let style = ScrollTracker::new().on_scroll(50.0);
    assert_eq!(style.background, NAVBAR_BG_TRANSLUCENT);
    assert_eq!(style.transform, TRANSFORM_REST);
    assert_eq!(style.transition, None);
}

#[test]
fn navbar_turns_solid_past_fifty() {
    let style = ScrollTracker::new().on_scroll(51.0);
    assert_eq!(style.background, NAVBAR_BG_SOLID);
}

#[test]
fn scrolling_down_past_hundred_hides_navbar() {
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(90.0);
    let style = tracker.on_scroll(150.0);
    assert_eq!(style.transform, NAVBAR_HIDDEN);
    assert_eq!(style.transition, Some(NAVBAR_TRANSITION));
}

#[test]
fn scrolling_up_shows_navbar_again() {
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(400.0);
    let style = tracker.on_scroll(300.0);
    assert_eq!(style.transform, TRANSFORM_REST);
    assert_eq!(style.background, NAVBAR_BG_SOLID);
}

#[test]
fn scrolling_down_below_hundred_keeps_navbar() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.on_scroll(80.0).transform, TRANSFORM_REST);
}

#[test]
fn unchanged_offset_counts_as_up() {
    let mut tracker = ScrollTracker::new();
    tracker.advance(200.0);
    assert_eq!(tracker.advance(200.0), ScrollDirection::Up);
}

// =============================================================================
// parallax
// =============================================================================

#[test]
fn parallax_moves_at_half_speed_within_hero() {
    assert_eq!(parallax_offset(200.0, 800.0), Some(100.0));
    assert_eq!(parallax_transform(100.0), "translateY(100px)");
}

#[test]
fn parallax_stops_past_viewport_height() {
    assert_eq!(parallax_offset(800.0, 800.0), None);
}

// =============================================================================
// active link
// =============================================================================

#[test]
fn active_section_uses_hundred_px_lookahead() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0), Some("home"));
    assert_eq!(active_section(&s, 499.0), Some("home"));
    assert_eq!(active_section(&s, 500.0), Some("services"));
    assert_eq!(active_section(&s, 1800.0), None);
}

#[test]
fn link_colors_mark_only_active_section() {
    let s = sections();
    let colors = link_colors(&s, active_section(&s, 650.0));
    assert_eq!(
        colors,
        vec![("home", LINK_COLOR_IDLE), ("services", LINK_COLOR_ACTIVE), ("contact", LINK_COLOR_IDLE)]
    );
}

#[test]
fn link_colors_are_all_idle_below_last_section() {
    let s = sections();
    let colors = link_colors(&s, active_section(&s, 1800.0));
    assert!(colors.iter().all(|(_, color)| *color == LINK_COLOR_IDLE));
}
