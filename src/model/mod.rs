//! Model layer - form data, validation and modal state
//!
//! - `ProjectDraft` / `ValidationErrors` - owned by the form
//! - `WaitlistSession` - owned by the waitlist modal
//! - `ModalStack` / `Focus` - presentation state

pub mod draft;
pub mod modal;
pub mod ui;
pub mod validation;
pub mod waitlist;

pub use draft::ProjectDraft;
pub use modal::{Modal, ModalStack};
pub use ui::Focus;
pub use validation::{validate, FieldKey, ValidationErrors};
