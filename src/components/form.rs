//! Intake form component
//!
//! Owns the project draft and its validation errors. Errors are recomputed
//! wholesale only on submit; editing a field clears just that field's error.
//! A successful submit asks the App to show the waitlist modal.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{
    calculate_form_layout, head_to_width, tail_to_width, wrapped_height,
};
use crate::model::draft::{DESCRIPTION_MAX_CHARS, REQUIREMENT_MAX_CHARS, TITLE_MAX_CHARS};
use crate::model::{validate, FieldKey, Focus, ProjectDraft, ValidationErrors};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const CARET: &str = "_";

pub struct FormComponent {
    draft: ProjectDraft,
    errors: ValidationErrors,
    pub focus: Focus,
    /// Set by a successful submit, cleared when the waitlist modal closes
    show_modal: bool,
}

impl FormComponent {
    pub fn new(draft: ProjectDraft) -> Self {
        Self {
            draft,
            errors: ValidationErrors::new(),
            focus: Focus::Title,
            show_modal: false,
        }
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Errors from the last submit, minus fields edited since
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_modal_shown(&self) -> bool {
        self.show_modal
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_title(&mut self, value: &str) {
        self.draft.set_title(value);
        self.errors.clear(FieldKey::ProjectTitle);
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.set_description(value);
        self.errors.clear(FieldKey::ProjectDescription);
    }

    pub fn add_requirement(&mut self) {
        self.draft.add_requirement();
    }

    pub fn update_requirement(&mut self, index: usize, value: &str) {
        self.draft.update_requirement(index, value);
        self.errors.clear(FieldKey::Requirement(index));
    }

    /// Remove a requirement row; the last remaining row is kept
    pub fn remove_requirement(&mut self, index: usize) {
        if !self.draft.remove_requirement(index) {
            return;
        }
        self.errors.shift_requirements_after_removal(index);

        if let Focus::Requirement(focused) = self.focus {
            let last = self.draft.requirements().len() - 1;
            let focused = if focused > index { focused - 1 } else { focused };
            self.focus = Focus::Requirement(focused.min(last));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived state
    // ─────────────────────────────────────────────────────────────────────────

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.draft)
    }

    pub fn completion_percentage(&self) -> u8 {
        self.draft.completion_percentage()
    }

    /// Whether a submit would pass validation
    pub fn is_submittable(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validate and, if clean, request the waitlist modal
    pub fn submit(&mut self) -> Option<Action> {
        self.errors = self.validate();

        if !self.errors.is_empty() {
            let fields: Vec<String> = self.errors.keys().map(|k| k.to_string()).collect();
            tracing::info!(count = self.errors.len(), ?fields, "submit rejected by validation");
            return None;
        }

        let request = self.draft.to_plan_request();
        match serde_json::to_string(&request) {
            Ok(json) => tracing::info!(request = %json, "plan request ready"),
            Err(e) => tracing::warn!(error = %e, "could not serialize plan request"),
        }

        self.show_modal = true;
        Some(Action::OpenWaitlist)
    }

    /// Called by the App once the waitlist modal has closed
    pub fn on_modal_closed(&mut self) {
        self.show_modal = false;
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::Title => {
                let mut value = self.draft.title.clone();
                edit(&mut value);
                self.set_title(&value);
            }
            Focus::Description => {
                let mut value = self.draft.description.clone();
                edit(&mut value);
                self.set_description(&value);
            }
            Focus::Requirement(index) => {
                let mut value = self.draft.requirements()[index].clone();
                edit(&mut value);
                self.update_requirement(index, &value);
            }
            Focus::AddRequirement | Focus::Submit => {}
        }
    }
}

impl Component for FormComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let action = match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::ForceQuit),
            KeyCode::Char('n') if ctrl => Some(Action::AddRequirement),
            KeyCode::Char('d') if ctrl => Some(Action::RemoveRequirement),
            KeyCode::Char('s') if ctrl => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::F(1) => Some(Action::OpenHelp),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Enter => match self.focus {
                Focus::AddRequirement => Some(Action::AddRequirement),
                Focus::Submit => Some(Action::Submit),
                _ => Some(Action::FocusNext),
            },
            KeyCode::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
                None
            }
            KeyCode::Char(c) if !ctrl && self.focus.is_text_field() => {
                self.edit_focused(|value| value.push(c));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let count = self.draft.requirements().len();
        match action {
            Action::FocusNext => self.focus = self.focus.next(count),
            Action::FocusPrev => self.focus = self.focus.prev(count),
            Action::AddRequirement => {
                self.add_requirement();
                self.focus = Focus::Requirement(count);
            }
            Action::RemoveRequirement => {
                if let Focus::Requirement(index) = self.focus {
                    self.remove_requirement(index);
                }
            }
            Action::Submit => return Ok(self.submit()),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_form_layout(area);

        render_header(frame, layout.header);

        self.render_text_field(
            frame,
            layout.title,
            " Project Title ",
            &self.draft.title,
            Focus::Title,
            FieldKey::ProjectTitle,
            false,
        );
        self.render_field_footer(
            frame,
            layout.title_footer,
            FieldKey::ProjectTitle,
            self.draft.title.chars().count(),
            TITLE_MAX_CHARS,
        );

        self.render_text_field(
            frame,
            layout.description,
            " Project Description ",
            &self.draft.description,
            Focus::Description,
            FieldKey::ProjectDescription,
            true,
        );
        self.render_field_footer(
            frame,
            layout.description_footer,
            FieldKey::ProjectDescription,
            self.draft.description.chars().count(),
            DESCRIPTION_MAX_CHARS,
        );

        self.render_requirements(frame, layout.requirements);
        self.render_progress(frame, layout.progress);
        self.render_submit(frame, layout.submit);
        render_feature_cards(frame, layout.features);
        render_help_bar(frame, layout.help);

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

fn field_border_style(focused: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn required_title(label: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("* ", Style::default().fg(Color::Red)),
    ])
}

fn error_span(message: &str) -> Span<'static> {
    Span::styled(format!("⚠ {}", message), Style::default().fg(Color::Red))
}

impl FormComponent {
    #[allow(clippy::too_many_arguments)]
    fn render_text_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focus: Focus,
        key: FieldKey,
        multiline: bool,
    ) {
        let focused = self.focus == focus;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(required_title(label))
            .border_style(field_border_style(focused, self.errors.contains(key)));

        let inner_width = area.width.saturating_sub(2) as usize;
        let shown = if focused {
            format!("{}{}", value, CARET)
        } else {
            value.to_string()
        };

        let paragraph = if multiline {
            // Keep the caret in view once the text outgrows the box
            let inner_height = area.height.saturating_sub(2) as usize;
            let scroll = if focused {
                wrapped_height(&shown, inner_width).saturating_sub(inner_height)
            } else {
                0
            };
            Paragraph::new(shown)
                .wrap(Wrap { trim: false })
                .scroll((scroll as u16, 0))
        } else if focused {
            Paragraph::new(tail_to_width(&shown, inner_width))
        } else {
            Paragraph::new(head_to_width(&shown, inner_width))
        };

        frame.render_widget(paragraph.block(block), area);
    }

    fn render_field_footer(
        &self,
        frame: &mut Frame,
        area: Rect,
        key: FieldKey,
        length: usize,
        limit: usize,
    ) {
        let counter = format!("{}/{} characters ", length, limit);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(counter.len() as u16)])
            .split(area);

        if let Some(message) = self.errors.get(key) {
            frame.render_widget(Paragraph::new(Line::from(error_span(message))), chunks[0]);
        }
        let counter = Paragraph::new(Span::styled(counter, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right);
        frame.render_widget(counter, chunks[1]);
    }

    fn render_requirements(&self, frame: &mut Frame, area: Rect) {
        let requirements = self.draft.requirements();
        let can_remove = requirements.len() > 1;
        let inner_width = area.width.saturating_sub(2) as usize;
        let text_width = inner_width.saturating_sub(5);

        let mut lines: Vec<Line> = Vec::new();
        let mut focused_line = 0;

        if let Some(message) = self.errors.get(FieldKey::Requirements) {
            lines.push(Line::from(error_span(message)));
        }

        for (index, requirement) in requirements.iter().enumerate() {
            let focused = self.focus == Focus::Requirement(index);
            if focused {
                focused_line = lines.len();
            }

            let number_style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).bg(Color::DarkGray)
            };

            let text = if requirement.is_empty() && !focused {
                Span::styled(
                    format!("Describe requirement {} in detail...", index + 1),
                    Style::default().fg(Color::DarkGray),
                )
            } else if focused {
                Span::styled(
                    tail_to_width(&format!("{}{}", requirement, CARET), text_width),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(head_to_width(requirement, text_width))
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}", index + 1), number_style),
                Span::raw("   "),
                text,
            ]));

            let mut detail = vec![
                Span::raw("     "),
                Span::styled(
                    format!(
                        "{}/{} characters",
                        requirement.chars().count(),
                        REQUIREMENT_MAX_CHARS
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if let Some(message) = self.errors.get(FieldKey::Requirement(index)) {
                detail.push(Span::raw("  "));
                detail.push(error_span(message));
            }
            if focused && can_remove {
                detail.push(Span::styled(
                    "  ✕ Ctrl-D remove",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(detail));
        }

        let add_focused = self.focus == Focus::AddRequirement;
        if add_focused {
            focused_line = lines.len();
        }
        let add_style = if add_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta)
        };
        lines.push(Line::from(Span::styled(" + Add Requirement ", add_style)));

        let visible = area.height.saturating_sub(2) as usize;
        // Keep the focused row and its detail line on screen
        let scroll = (focused_line + 2).saturating_sub(visible);

        let has_error = self.errors.contains(FieldKey::Requirements)
            || self
                .errors
                .keys()
                .any(|k| matches!(k, FieldKey::Requirement(_)));
        let any_focused = matches!(self.focus, Focus::Requirement(_) | Focus::AddRequirement);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(required_title(" Project Requirements "))
                    .border_style(field_border_style(any_focused, has_error)),
            )
            .scroll((scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let percent = self.completion_percentage();
        let (color, message) = if percent == 100 {
            (Color::Green, "Ready to submit your requirements")
        } else {
            (Color::Blue, "Complete all required fields to proceed")
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" ✔ Form Completion ")
                    .title_bottom(Line::from(Span::styled(
                        format!(" {} ", message),
                        Style::default().fg(Color::DarkGray),
                    )))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent(percent as u16)
            .label(Span::styled(
                format!("{}%", percent),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let enabled = self.is_submittable();
        let focused = self.focus == Focus::Submit;

        let label = if self.show_modal {
            "⟳ Processing Requirements..."
        } else {
            "➤ Generate SDLC Plan"
        };

        let mut style = if enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(if focused {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    }),
            );
        frame.render_widget(button, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✦ ", Style::default().fg(Color::Magenta)),
            Span::styled(
                "The Weaver",
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Your personal Software Development Life Cycle co-pilot",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Provide your project requirements to get started with intelligent development planning and implementation.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(header, area);
}

fn render_feature_cards(frame: &mut Frame, area: Rect) {
    let cards = [
        (
            "AI Analysis",
            Color::Blue,
            "Analyze requirements for patterns, dependencies and optimization opportunities.",
        ),
        (
            "SDLC Generation",
            Color::Green,
            "Phases, milestones, deliverables and timeline estimates.",
        ),
        (
            "Smart Recommendations",
            Color::Magenta,
            "Technology stack, architecture patterns and practices for your project.",
        ),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, color, text), column) in cards.iter().zip(columns.iter()) {
        let card = Paragraph::new(Span::styled(*text, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        format!(" {} ", title),
                        Style::default().fg(*color).add_modifier(Modifier::BOLD),
                    ))
                    .border_style(Style::default().fg(*color)),
            );
        frame.render_widget(card, *column);
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let spans = vec![
        Span::styled(" Tab ", key_style),
        Span::raw("Next  "),
        Span::styled(" Shift-Tab ", key_style),
        Span::raw("Prev  "),
        Span::styled(" Ctrl-N ", key_style),
        Span::raw("Add  "),
        Span::styled(" Ctrl-D ", key_style),
        Span::raw("Remove  "),
        Span::styled(" Ctrl-S ", key_style),
        Span::raw("Submit  "),
        Span::styled(" F1 ", key_style),
        Span::raw("Help  "),
        Span::styled(" Esc ", key_style),
        Span::raw("Quit"),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    const LONG_DESCRIPTION: &str =
        "A description that is comfortably longer than fifty characters in total.";

    fn form(title: &str, description: &str, requirements: &[&str]) -> FormComponent {
        FormComponent::new(ProjectDraft::new(
            title,
            description,
            requirements.iter().map(|r| r.to_string()).collect(),
        ))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_empty_form_is_not_submittable() {
        let mut form = form("", "", &[""]);
        assert!(!form.is_submittable());

        assert_eq!(form.submit(), None);
        let keys: Vec<_> = form.errors().keys().collect();
        assert_eq!(
            keys,
            vec![
                FieldKey::ProjectTitle,
                FieldKey::ProjectDescription,
                FieldKey::Requirements
            ]
        );
        assert!(!form.is_modal_shown());
    }

    #[test]
    fn test_valid_form_submits_and_opens_waitlist() {
        let mut form = form("Valid Title", LONG_DESCRIPTION, &["valid requirement text"]);
        assert!(form.is_submittable());
        assert_eq!(form.submit(), Some(Action::OpenWaitlist));
        assert!(form.errors().is_empty());
        assert!(form.is_modal_shown());

        form.on_modal_closed();
        assert!(!form.is_modal_shown());
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = form("ab", "short", &["tiny", "also tiny"]);
        form.submit();
        assert!(form.errors().contains(FieldKey::ProjectTitle));
        assert!(form.errors().contains(FieldKey::ProjectDescription));
        assert!(form.errors().contains(FieldKey::Requirement(0)));
        assert!(form.errors().contains(FieldKey::Requirement(1)));

        // Still invalid, but the error is cleared optimistically
        form.set_title("a");
        assert!(!form.errors().contains(FieldKey::ProjectTitle));
        assert_eq!(form.errors().len(), 3);

        form.update_requirement(1, "still");
        assert!(!form.errors().contains(FieldKey::Requirement(1)));
        assert!(form.errors().contains(FieldKey::Requirement(0)));
        assert!(form.errors().contains(FieldKey::ProjectDescription));
        assert_eq!(form.errors().len(), 2);

        form.set_description("x");
        assert_eq!(
            form.errors().keys().collect::<Vec<_>>(),
            vec![FieldKey::Requirement(0)]
        );
    }

    #[test]
    fn test_editing_without_error_leaves_errors_alone() {
        let mut form = form("", LONG_DESCRIPTION, &["valid requirement text"]);
        form.submit();
        form.set_description("changed");
        assert_eq!(
            form.errors().keys().collect::<Vec<_>>(),
            vec![FieldKey::ProjectTitle]
        );
    }

    #[test]
    fn test_remove_keeps_last_requirement() {
        let mut form = form("", "", &["only"]);
        form.remove_requirement(0);
        assert_eq!(form.draft().requirements().len(), 1);
    }

    #[test]
    fn test_remove_shifts_errors_and_focus() {
        let mut form = form(
            "Valid Title",
            LONG_DESCRIPTION,
            &["long enough one", "tiny", "long enough two", "tiny too"],
        );
        form.submit();
        form.focus = Focus::Requirement(3);

        form.remove_requirement(1);

        assert_eq!(form.draft().requirements().len(), 3);
        assert_eq!(
            form.errors().keys().collect::<Vec<_>>(),
            vec![FieldKey::Requirement(2)]
        );
        assert_eq!(form.focus, Focus::Requirement(2));
    }

    #[test]
    fn test_remove_focused_last_row_moves_focus_up() {
        let mut form = form("", "", &["a", "b"]);
        form.focus = Focus::Requirement(1);
        form.update(Action::RemoveRequirement).unwrap();
        assert_eq!(form.focus, Focus::Requirement(0));
        assert_eq!(form.draft().requirements(), &["a".to_string()]);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = form("", "", &[""]);
        for c in "Hi!".chars() {
            form.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        form.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(form.draft().title, "Hi");

        form.focus = Focus::Requirement(0);
        form.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(form.draft().requirements()[0], "x");
    }

    #[test]
    fn test_typing_past_limit_is_truncated() {
        let mut form = form(&"t".repeat(TITLE_MAX_CHARS), "", &[""]);
        form.handle_key_event(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(form.draft().title.chars().count(), TITLE_MAX_CHARS);
        assert!(!form.draft().title.ends_with('x'));
    }

    #[test]
    fn test_shortcuts_map_to_actions() {
        let mut form = form("", "", &[""]);
        assert_eq!(form.handle_key_event(ctrl('n')).unwrap(), Some(Action::AddRequirement));
        assert_eq!(form.handle_key_event(ctrl('d')).unwrap(), Some(Action::RemoveRequirement));
        assert_eq!(form.handle_key_event(ctrl('s')).unwrap(), Some(Action::Submit));
        assert_eq!(form.handle_key_event(key(KeyCode::Tab)).unwrap(), Some(Action::FocusNext));
        assert_eq!(form.handle_key_event(key(KeyCode::Esc)).unwrap(), Some(Action::OpenQuitDialog));
        // Ctrl shortcuts never leak into the text
        assert_eq!(form.draft().title, "");
    }

    #[test]
    fn test_enter_activates_buttons() {
        let mut form = form("", "", &[""]);
        form.focus = Focus::AddRequirement;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::AddRequirement)
        );
        form.focus = Focus::Submit;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::Submit)
        );
    }

    #[test]
    fn test_add_requirement_focuses_new_row() {
        let mut form = form("", "", &["one"]);
        form.update(Action::AddRequirement).unwrap();
        assert_eq!(form.draft().requirements().len(), 2);
        assert_eq!(form.focus, Focus::Requirement(1));
    }

    #[test]
    fn test_completion_tracks_fields() {
        let mut form = form("", "", &[""]);
        assert_eq!(form.completion_percentage(), 0);
        form.set_title("t");
        form.set_description("d");
        assert_eq!(form.completion_percentage(), 67);
        form.update_requirement(0, "r");
        assert_eq!(form.completion_percentage(), 100);
        // Full buckets do not imply valid content
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_draw_renders_form() {
        let mut form = FormComponent::new(ProjectDraft::sample());
        form.focus = Focus::Requirement(4);
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                form.draw(frame, area).unwrap();
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("The Weaver"));
        assert!(rendered.contains("100%"));
        assert!(rendered.contains("Generate SDLC Plan"));
    }

    #[test]
    fn test_draw_shows_errors() {
        let mut form = form("", "", &[""]);
        form.submit();
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                form.draw(frame, area).unwrap();
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Project title is required"));
        assert!(rendered.contains("At least one requirement is required"));
    }
}
