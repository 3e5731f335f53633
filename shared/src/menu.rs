//! Mobile navigation menu state machine.
//!
//! The menu animates in two steps: it becomes visible (and locks page scroll)
//! first, then fades in a moment later; closing fades out first and hides the
//! menu once the transition has run. The in-between phases carry the timer
//! delay the UI has to wait before sending [`MenuEvent::Settled`].

/// Delay before a freshly shown menu fades in.
pub const OPEN_SETTLE_MS: u32 = 10;
/// Fade-out time before the menu is hidden.
pub const CLOSE_SETTLE_MS: u32 = 200;
/// Wait after an orientation change before force-closing.
pub const ORIENTATION_SETTLE_MS: u32 = 100;
/// Upward swipe distance that closes the menu.
pub const MENU_SWIPE_THRESHOLD: f64 = 50.0;
/// Upward swipe distance that dismisses an open modal.
pub const MODAL_SWIPE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Why the menu is being dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    OutsideClick,
    EscapeKey,
    OrientationChange,
    LinkClick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// Menu button tapped
    Toggle,
    Dismiss(DismissReason),
    /// Touch gesture on the menu, start and end vertical positions
    Swipe { start_y: f64, end_y: f64 },
    /// The pending transition timer fired
    Settled,
}

impl MenuPhase {
    /// The menu element is in the layout (not `hidden`).
    pub fn is_visible(self) -> bool {
        !matches!(self, MenuPhase::Closed)
    }

    /// Fully faded in: opacity 1, no vertical offset.
    pub fn is_shown(self) -> bool {
        matches!(self, MenuPhase::Open)
    }

    /// Page scroll is locked for as long as the menu is visible.
    pub fn locks_scroll(self) -> bool {
        self.is_visible()
    }

    /// The menu button shows a close icon while the menu is up.
    pub fn shows_close_icon(self) -> bool {
        self.is_visible()
    }

    /// Timer the UI must arm for this phase, if any.
    pub fn settle_delay_ms(self) -> Option<u32> {
        match self {
            MenuPhase::Opening => Some(OPEN_SETTLE_MS),
            MenuPhase::Closing => Some(CLOSE_SETTLE_MS),
            MenuPhase::Closed | MenuPhase::Open => None,
        }
    }

    pub fn handle(self, event: MenuEvent) -> MenuPhase {
        match event {
            MenuEvent::Toggle => {
                if self.is_visible() {
                    MenuPhase::Closing
                } else {
                    MenuPhase::Opening
                }
            }
            MenuEvent::Dismiss(_) => self.close(),
            MenuEvent::Swipe { start_y, end_y } => {
                if is_swipe_up(start_y, end_y, MENU_SWIPE_THRESHOLD) {
                    self.close()
                } else {
                    self
                }
            }
            MenuEvent::Settled => match self {
                MenuPhase::Opening => MenuPhase::Open,
                MenuPhase::Closing => MenuPhase::Closed,
                settled => settled,
            },
        }
    }

    fn close(self) -> MenuPhase {
        if self.is_visible() {
            MenuPhase::Closing
        } else {
            MenuPhase::Closed
        }
    }
}

/// True when the finger moved up by more than `threshold` pixels.
pub fn is_swipe_up(start_y: f64, end_y: f64, threshold: f64) -> bool {
    start_y - end_y > threshold
}
