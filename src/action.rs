//! Action enum - All possible application actions
//!
//! Components turn key events into Actions; the App processes them to
//! update state.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background work
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Show the waitlist modal after a successful submit
    OpenWaitlist,
    /// Close the top modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    AddRequirement,
    RemoveRequirement,
    Submit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenWaitlist => write!(f, "OpenWaitlist"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::AddRequirement => write!(f, "AddRequirement"),
            Action::RemoveRequirement => write!(f, "RemoveRequirement"),
            Action::Submit => write!(f, "Submit"),
        }
    }
}
