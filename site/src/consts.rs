//! Shared constants for the site crate.

// ── Network / storage ──────────────────────────────────────────

/// Contact endpoint, relative to the page origin.
pub const SUBMIT_ENDPOINT: &str = "/api/submit-contact-form";

/// `localStorage` key holding the local echo array.
pub const ECHO_STORAGE_KEY: &str = "aawebcreations_submissions";

/// Filename prefix for exported local echoes.
pub const ECHO_EXPORT_PREFIX: &str = "aa_web_creations_submissions_";

// ── Navbar ─────────────────────────────────────────────────────

/// Scroll offset past which the navbar turns opaque.
pub const NAVBAR_SOLID_AFTER_PX: f64 = 50.0;

/// Scroll offset past which scrolling down hides the navbar.
pub const NAVBAR_HIDE_AFTER_PX: f64 = 100.0;

pub const NAVBAR_BG_SOLID: &str = "rgba(10, 14, 39, 0.9)";
pub const NAVBAR_BG_TRANSLUCENT: &str = "rgba(10, 14, 39, 0.7)";
pub const NAVBAR_TRANSITION: &str = "transform 0.3s ease";
pub const NAVBAR_HIDDEN: &str = "translateY(-100%)";

/// Lookahead added to `scrollY` when picking the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

pub const LINK_COLOR_ACTIVE: &str = "var(--primary-color)";
pub const LINK_COLOR_IDLE: &str = "var(--text-primary)";

/// Hero gradient moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;

// ── Reveal / skill bars ────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".service-card, .why-card, .project-card, .skill-item, .about-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const SKILLS_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_DELAY_MS: u32 = 100;
pub const SKILL_BAR_TRANSITION: &str = "width 1.5s ease";
/// Class marking a skills section whose bars already ran.
pub const ANIMATED_CLASS: &str = "animated";

// ── Hover ──────────────────────────────────────────────────────

pub const TRANSFORM_REST: &str = "translateY(0)";
pub const BUTTON_LIFT: &str = "translateY(-3px)";
pub const CARD_LIFT: &str = "translateY(-10px)";

// ── Form / toast ───────────────────────────────────────────────

pub const SENDING_LABEL: &str = "Sending...";
pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 500;
