//! Transient status banners shown after a submit attempt.

use crate::consts::TOAST_EXIT_MS;

pub const DEFAULT_TOAST_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

/// Keyframes injected once into `<head>` for the banner slide animations.
pub const TOAST_KEYFRAMES: &str = "\
@keyframes slideInDown {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slideOutUp {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-20px); }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// CSS `background` value for this kind.
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, var(--primary-color), var(--secondary-color))",
            Self::Error => "linear-gradient(135deg, #ff6b6b, #ee5a6f)",
            Self::Warning => "linear-gradient(135deg, #ffa502, #ffb81d)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Banner text; an empty message falls back to the generic thank-you.
    pub fn text(&self) -> &str {
        if self.message.is_empty() { DEFAULT_TOAST_MESSAGE } else { &self.message }
    }

    /// Inline style for the banner element.
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 2rem; border-radius: 10px; font-weight: 600; z-index: 10000; \
             animation: slideInDown 0.5s ease; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); \
             max-width: 300px;",
            self.kind.background()
        )
    }

    /// Animation applied when the banner starts leaving.
    pub fn exit_animation() -> String {
        format!("slideOutUp {:.1}s ease", f64::from(TOAST_EXIT_MS) / 1000.0)
    }
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;
