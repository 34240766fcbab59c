//! "Under construction" modal with waitlist signup
//!
//! Owns its own session; the App only decides whether it is on screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, tail_to_width};
use crate::model::waitlist::{JoinState, WaitlistSession};
use crate::services::{WaitlistRunner, WaitlistService};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;

const UPCOMING_FEATURES: [&str; 4] = [
    "Intelligent project analysis & planning",
    "Automated timeline & milestone generation",
    "Technology stack recommendations",
    "Risk assessment & mitigation strategies",
];

pub struct WaitlistDialog {
    session: WaitlistSession,
    runner: WaitlistRunner,
}

impl WaitlistDialog {
    pub fn new(service: Arc<dyn WaitlistService>) -> Self {
        Self {
            session: WaitlistSession::new(),
            runner: WaitlistRunner::new(service),
        }
    }

    pub fn session(&self) -> &WaitlistSession {
        &self.session
    }

    /// Start a fresh session
    pub fn open(&mut self) {
        self.session.open();
        tracing::debug!(generation = self.session.generation(), "waitlist modal opened");
    }

    pub fn set_email(&mut self, value: &str) {
        self.session.set_email(value);
    }

    /// Kick off a join if the email gate passes, returns whether one started
    pub fn join_waitlist(&mut self) -> bool {
        match self.session.begin_join() {
            Some(ticket) => {
                self.runner.spawn(ticket);
                true
            }
            None => false,
        }
    }

    /// Reset to a pristine session and ask the App to hide the modal
    pub fn close(&mut self) -> Action {
        if self.session.is_joining() {
            tracing::debug!("closing waitlist modal with a join in flight");
        }
        self.session.reset();
        Action::CloseModal
    }

    fn edit_email(&mut self, edit: impl FnOnce(&mut String)) {
        let mut email = self.session.email.clone();
        edit(&mut email);
        self.set_email(&email);
    }
}

impl Component for WaitlistDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }
        if key.code == KeyCode::Esc {
            return Ok(Some(self.close()));
        }

        if self.session.has_joined() {
            return Ok(match key.code {
                KeyCode::Enter | KeyCode::Char('q') => Some(self.close()),
                _ => None,
            });
        }

        match key.code {
            KeyCode::Enter => {
                self.join_waitlist();
            }
            KeyCode::Backspace => self.edit_email(|email| {
                email.pop();
            }),
            KeyCode::Char(c) if !ctrl => self.edit_email(|email| email.push(c)),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.runner.poll(&mut self.session);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 62, 24);
        frame.render_widget(Clear, popup_area);

        let inner_width = popup_area.width.saturating_sub(4) as usize;
        let lines = match self.session.state {
            JoinState::Joined => self.success_lines(),
            JoinState::Idle | JoinState::Joining => self.signup_lines(inner_width),
        };

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(Line::from(vec![
                        Span::styled(
                            " ⏱ Under Construction ",
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            "Feature in development ",
                            Style::default().fg(Color::Gray),
                        ),
                    ]))
                    .title_bottom(Line::from(Span::styled(
                        " Esc Close ",
                        Style::default().fg(Color::DarkGray),
                    ))),
            );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl WaitlistDialog {
    fn signup_lines(&self, inner_width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✦ AI-Powered SDLC Generation Coming Soon!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                "We're building something amazing! Our AI-powered Software Development Life Cycle generator is currently under development. Be the first to know when it's ready.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for feature in UPCOMING_FEATURES {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                Span::raw(feature),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Join our waitlist for early access",
            Style::default().fg(Color::Gray),
        )));

        let joining = self.session.is_joining();
        let input = if self.session.email.is_empty() && !joining {
            Span::styled(
                "Enter your email address_",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            let caret = if joining { "" } else { "_" };
            Span::styled(
                tail_to_width(
                    &format!("{}{}", self.session.email, caret),
                    inner_width.saturating_sub(2),
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            input,
        ]));
        lines.push(Line::from(""));

        let button = if joining {
            Span::styled(
                " ⟳ Joining Waitlist... ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )
        } else if self.session.can_join() {
            Span::styled(
                " 🔔 Join Waitlist (Enter) ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" Join Waitlist ", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(button).alignment(Alignment::Center));

        if let Some(ref error) = self.session.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("⚠ {}", error),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(Span::styled(
                "Press Enter to try again",
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Join 2,847+ developers already waiting",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );

        lines
    }

    fn success_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "✓ You're on the list!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                "Thanks for joining our waitlist. We'll notify you as soon as the AI-powered SDLC generator is ready for early access.",
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Center),
        ];

        if let Some(joined_at) = self.session.joined_at {
            lines.push(Line::from(""));
            lines.push(
                Line::from(Span::styled(
                    format!("Joined at {}", joined_at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Center),
            );
        }

        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                " Close (Enter) ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
        lines
    }
}
