//! Fade-in reveal, skill-bar animation and hover transforms.
//!
//! Each effect is wired independently by the DOM layer; this module holds
//! the style values and the once-only bookkeeping they need.

use crate::consts::{
    BUTTON_LIFT, CARD_LIFT, REVEAL_HIDDEN_TRANSFORM, REVEAL_TRANSITION, SKILL_BAR_TRANSITION, TRANSFORM_REST,
};

/// A list of `(property, value)` pairs to apply to an element's style.
pub type StyleSet = [(&'static str, &'static str); 3];

/// Initial style for elements waiting to fade in.
pub const REVEAL_HIDDEN: StyleSet =
    [("opacity", "0"), ("transform", REVEAL_HIDDEN_TRANSFORM), ("transition", REVEAL_TRANSITION)];

/// Final style once an element has intersected.
pub const REVEAL_SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", TRANSFORM_REST)];

/// Whether an intersecting skills section should start its bar animation.
/// Runs at most once per section, tracked by the `animated` class.
pub fn should_animate_skills(is_intersecting: bool, already_animated: bool) -> bool {
    is_intersecting && !already_animated
}

/// Two-step width animation for one skill bar: collapse now, restore later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBarAnimation {
    pub target_width: String,
}

impl SkillBarAnimation {
    /// `authored_width` is the bar's inline width before animating. Returns
    /// `None` for bars without one, which are left alone.
    pub fn new(authored_width: &str) -> Option<Self> {
        let width = authored_width.trim();
        (!width.is_empty()).then(|| Self { target_width: width.to_owned() })
    }

    pub fn collapsed_width() -> &'static str {
        "0"
    }

    pub fn transition() -> &'static str {
        SKILL_BAR_TRANSITION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// `.btn`
    Button,
    /// `.service-card`
    ServiceCard,
}

impl HoverTarget {
    pub fn selector(self) -> &'static str {
        match self {
            Self::Button => ".btn",
            Self::ServiceCard => ".service-card",
        }
    }

    /// Transform for mouseenter (`true`) or mouseleave (`false`).
    pub fn transform(self, entering: bool) -> &'static str {
        match (self, entering) {
            (Self::Button, true) => BUTTON_LIFT,
            (Self::ServiceCard, true) => CARD_LIFT,
            (_, false) => TRANSFORM_REST,
        }
    }
}

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;
