//! Waitlist session - email capture and join state machine
//!
//! A session moves `Idle -> Joining -> Joined` and is reset to `Idle` when the
//! modal closes. Every open and close bumps the session generation; a join
//! completion only applies if it carries the live generation, so a request
//! that finishes after the modal was closed cannot resurrect the success view.

use chrono::{DateTime, Local};
use std::sync::mpsc::Receiver;
use thiserror::Error;

/// Errors a waitlist service can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    #[error("Waitlist request failed: {0}")]
    Request(String),

    #[error("Waitlist service is unavailable, please try again")]
    Unavailable,
}

/// Join progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinState {
    #[default]
    Idle,
    Joining,
    Joined,
}

/// A join request handed to the background runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTicket {
    pub generation: u64,
    pub email: String,
}

/// Message sent from a join worker back to the UI thread
#[derive(Debug)]
pub struct JoinMessage {
    pub generation: u64,
    pub result: Result<(), WaitlistError>,
}

/// Receiving end of the join worker channel
pub struct BackgroundJoin {
    pub receiver: Receiver<JoinMessage>,
}

/// Outcome of applying a join completion to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Joined,
    Failed,
    /// The session was reset or reopened since the request started
    Stale,
}

/// Returns true for input that passes the waitlist email gate
///
/// Only checks for a non-blank value containing `@`.
pub fn is_plausible_email(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@')
}

#[derive(Debug, Clone, Default)]
pub struct WaitlistSession {
    pub email: String,
    pub state: JoinState,
    /// Retryable message from the last failed join
    pub error: Option<String>,
    pub joined_at: Option<DateTime<Local>>,
    generation: u64,
}

impl WaitlistSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_joining(&self) -> bool {
        self.state == JoinState::Joining
    }

    pub fn has_joined(&self) -> bool {
        self.state == JoinState::Joined
    }

    /// Start a new session, invalidating any in-flight request
    pub fn open(&mut self) {
        self.reset();
    }

    /// Return to a pristine idle session
    pub fn reset(&mut self) {
        self.email.clear();
        self.state = JoinState::Idle;
        self.error = None;
        self.joined_at = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Replace the email; ignored once joined since the input is hidden
    pub fn set_email(&mut self, value: &str) {
        if self.has_joined() {
            return;
        }
        self.email = value.to_string();
    }

    /// Whether the join button is enabled
    pub fn can_join(&self) -> bool {
        self.state == JoinState::Idle && is_plausible_email(&self.email)
    }

    /// Enter `Joining` if the gate passes
    pub fn begin_join(&mut self) -> Option<JoinTicket> {
        if !self.can_join() {
            return None;
        }
        self.state = JoinState::Joining;
        self.error = None;
        Some(JoinTicket {
            generation: self.generation,
            email: self.email.clone(),
        })
    }

    /// Apply a finished join request
    pub fn complete(&mut self, message: JoinMessage) -> Completion {
        if message.generation != self.generation || self.state != JoinState::Joining {
            return Completion::Stale;
        }

        match message.result {
            Ok(()) => {
                self.state = JoinState::Joined;
                self.joined_at = Some(Local::now());
                Completion::Joined
            }
            Err(e) => {
                // Keep the email so the user can retry
                self.state = JoinState::Idle;
                self.error = Some(e.to_string());
                Completion::Failed
            }
        }
    }
}
