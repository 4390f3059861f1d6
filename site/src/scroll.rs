//! Scroll-driven navbar, parallax and active-link decisions.
//!
//! The page registers one scroll listener; it feeds `scrollY` into a
//! [`ScrollTracker`] and applies the returned styles. Nothing here reads the
//! DOM, so the thresholds are unit-tested directly.

use crate::consts::{
    ACTIVE_SECTION_OFFSET_PX, LINK_COLOR_ACTIVE, LINK_COLOR_IDLE, NAVBAR_BG_SOLID, NAVBAR_BG_TRANSLUCENT,
    NAVBAR_HIDDEN, NAVBAR_HIDE_AFTER_PX, NAVBAR_SOLID_AFTER_PX, NAVBAR_TRANSITION, PARALLAX_FACTOR, TRANSFORM_REST,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Inline styles to apply to `.navbar` after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub transform: &'static str,
    /// Set once the page is scrolled past the hide threshold.
    pub transition: Option<&'static str>,
}

/// Remembers the previous scroll offset to derive direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollTracker {
    last_y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new offset and return the direction of travel. An unchanged
    /// offset counts as upward, which keeps the navbar visible.
    pub fn advance(&mut self, scroll_y: f64) -> ScrollDirection {
        let direction = if scroll_y > self.last_y { ScrollDirection::Down } else { ScrollDirection::Up };
        self.last_y = scroll_y;
        direction
    }

    /// Navbar styles for the new offset.
    pub fn on_scroll(&mut self, scroll_y: f64) -> NavbarStyle {
        let direction = self.advance(scroll_y);
        navbar_style(scroll_y, direction)
    }
}

pub fn navbar_style(scroll_y: f64, direction: ScrollDirection) -> NavbarStyle {
    let background = if scroll_y > NAVBAR_SOLID_AFTER_PX { NAVBAR_BG_SOLID } else { NAVBAR_BG_TRANSLUCENT };
    let past_hide = scroll_y > NAVBAR_HIDE_AFTER_PX;
    let transform = if direction == ScrollDirection::Down && past_hide { NAVBAR_HIDDEN } else { TRANSFORM_REST };
    NavbarStyle { background, transform, transition: past_hide.then_some(NAVBAR_TRANSITION) }
}

/// Hero gradient offset in px, or `None` once the hero is scrolled away.
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * PARALLAX_FACTOR)
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Layout box of one `<section>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Nav-link color for every section, in section order, given the id
/// returned by [`active_section`].
pub fn link_colors<'a>(sections: &'a [SectionBox], active: Option<&str>) -> Vec<(&'a str, &'static str)> {
    sections
        .iter()
        .map(|s| {
            let color = if Some(s.id.as_str()) == active { LINK_COLOR_ACTIVE } else { LINK_COLOR_IDLE };
            (s.id.as_str(), color)
        })
        .collect()
}

/// Id of the first section under the probe line, if any.
pub fn active_section(sections: &[SectionBox], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET_PX;
    sections.iter().find(|s| s.contains(probe)).map(|s| s.id.as_str())
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;
