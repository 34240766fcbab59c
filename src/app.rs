//! Root application component
//!
//! The App routes key events to the form or the top modal, processes the
//! resulting Actions and draws modals over the form. It holds no form or
//! waitlist state of its own.

use crate::action::Action;
use crate::component::Component;
use crate::components::{FormComponent, HelpDialog, QuitDialog, WaitlistDialog};
use crate::config::Config;
use crate::model::{Modal, ModalStack, ProjectDraft};
use crate::services::{SimulatedWaitlist, WaitlistService};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

pub struct App {
    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: FormComponent,
    pub waitlist: WaitlistDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(config: &Config) -> App {
        let draft = if config.start_blank {
            ProjectDraft::default()
        } else {
            ProjectDraft::sample()
        };
        let service = Arc::new(SimulatedWaitlist::new(config.join_latency()));
        Self::with_service(draft, service)
    }

    pub fn with_service(draft: ProjectDraft, service: Arc<dyn WaitlistService>) -> App {
        App {
            modals: ModalStack::new(),
            should_quit: false,
            form: FormComponent::new(draft),
            waitlist: WaitlistDialog::new(service),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    fn close_top_modal(&mut self) {
        if let Some(Modal::Waitlist) = self.modals.pop() {
            tracing::debug!("waitlist modal closed");
            self.form.on_modal_closed();
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.modals.is_empty() {
            return self.form.handle_key_event(key);
        }
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            Some(Modal::Waitlist) => self.waitlist.handle_key_event(key),
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.waitlist.update(Action::Tick)?;
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenWaitlist => {
                if !self.modals.contains(&Modal::Waitlist) {
                    self.waitlist.open();
                    self.modals.push(Modal::Waitlist);
                }
            }
            Action::CloseModal => self.close_top_modal(),

            Action::FocusNext
            | Action::FocusPrev
            | Action::AddRequirement
            | Action::RemoveRequirement
            | Action::Submit => return self.form.update(action),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.form.draw(frame, area)?;

        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
                Modal::Waitlist => self.waitlist.draw(frame, area)?,
            }
        }
        Ok(())
    }
}
