//! Global keyboard shortcuts

/// Key press as seen by the document listener
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// `KeyboardEvent.key`
    pub key: String,
    /// Ctrl held
    pub ctrl: bool,
    /// Cmd held
    pub meta: bool,
    /// Focus is in an input, textarea or select
    pub in_input: bool,
}

impl KeyEvent {
    /// Plain key press outside any input
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// With Ctrl held
    #[must_use]
    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// With Cmd held
    #[must_use]
    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Typed inside a form control
    #[must_use]
    pub fn in_input(mut self) -> Self {
        self.in_input = true;
        self
    }

    fn modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Action bound to a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+Enter
    SubmitActiveForm,
    /// Ctrl/Cmd+1..3, zero-based tab index
    SwitchTab(usize),
    /// Escape
    CloseOverlays,
    /// ArrowRight on the portfolio
    PortfolioNext,
    /// ArrowLeft on the portfolio
    PortfolioPrev,
    /// Enter on a focused portfolio card
    PortfolioOpen,
}

/// Number of tabs reachable with Ctrl/Cmd+digit
pub const TAB_SHORTCUTS: usize = 3;

/// Map a key press to its shortcut
#[must_use]
pub fn shortcut(event: &KeyEvent) -> Option<Shortcut> {
    if event.modifier() {
        return match event.key.as_str() {
            "Enter" => Some(Shortcut::SubmitActiveForm),
            digit => digit
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=TAB_SHORTCUTS).contains(n))
                .map(|n| Shortcut::SwitchTab(n - 1)),
        };
    }
    match event.key.as_str() {
        "Escape" => Some(Shortcut::CloseOverlays),
        _ if event.in_input => None,
        "ArrowRight" => Some(Shortcut::PortfolioNext),
        "ArrowLeft" => Some(Shortcut::PortfolioPrev),
        "Enter" => Some(Shortcut::PortfolioOpen),
        _ => None,
    }
}
