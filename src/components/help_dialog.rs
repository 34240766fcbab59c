//! Help dialog listing the form's keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::model::draft::{DESCRIPTION_MAX_CHARS, REQUIREMENT_MAX_CHARS, TITLE_MAX_CHARS};
use crate::model::validation::{DESCRIPTION_MIN_CHARS, REQUIREMENT_MIN_CHARS, TITLE_MIN_CHARS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let total = content.len();

        let dialog_area = centered_popup(area, 64, (total as u16).saturating_add(2));
        frame.render_widget(Clear, dialog_area);

        // Clamp scroll offset
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);
        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: String| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description, Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Form");
    add_shortcut(&mut lines, "Tab / ↓", "Next field".into());
    add_shortcut(&mut lines, "Shift+Tab / ↑", "Previous field".into());
    add_shortcut(&mut lines, "Enter", "Next field / press focused button".into());
    add_shortcut(&mut lines, "Ctrl+n", "Add a requirement".into());
    add_shortcut(&mut lines, "Ctrl+d", "Remove the focused requirement".into());
    add_shortcut(&mut lines, "Ctrl+s", "Validate and submit".into());

    add_section(&mut lines, "Rules");
    add_shortcut(
        &mut lines,
        "Title",
        format!("{}-{} characters", TITLE_MIN_CHARS, TITLE_MAX_CHARS),
    );
    add_shortcut(
        &mut lines,
        "Description",
        format!("{}-{} characters", DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS),
    );
    add_shortcut(
        &mut lines,
        "Requirement",
        format!(
            "{}-{} characters, at least one filled",
            REQUIREMENT_MIN_CHARS, REQUIREMENT_MAX_CHARS
        ),
    );

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "F1", "Show this help".into());
    add_shortcut(&mut lines, "Esc", "Quit / close dialog".into());
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately".into());

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_help_closes_on_escape() {
        let mut dialog = HelpDialog::default();
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }

    #[test]
    fn test_help_lists_rules() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("3-100 characters"));
        assert!(text.contains("50-2000 characters"));
    }
}
