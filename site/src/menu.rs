//! Mobile menu open/close state.

/// Class toggled on both `.nav-menu` and `.hamburger`.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Nav link click. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Document click; `inside_nav` is whether the target sits inside
    /// `.nav-container`. Returns whether the menu closed.
    pub fn on_document_click(&mut self, inside_nav: bool) -> bool {
        if inside_nav { false } else { self.close() }
    }
}
