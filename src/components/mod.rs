//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod waitlist_dialog;

pub use form::FormComponent;
pub use help_dialog::HelpDialog;
pub use quit_dialog::QuitDialog;
pub use waitlist_dialog::WaitlistDialog;
