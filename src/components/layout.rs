//! Layout calculations and text fitting for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Areas of the intake form screen
pub struct FormLayout {
    pub header: Rect,
    pub title: Rect,
    pub title_footer: Rect,
    pub description: Rect,
    pub description_footer: Rect,
    pub requirements: Rect,
    pub progress: Rect,
    pub submit: Rect,
    pub features: Rect,
    pub help: Rect,
}

/// Calculate centered popup area inside `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width - width) / 2;
    let popup_y = area.y + (area.height - height) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

/// Calculate the form screen layout
pub fn calculate_form_layout(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Title field
            Constraint::Length(1), // Title error / counter
            Constraint::Length(6), // Description field
            Constraint::Length(1), // Description error / counter
            Constraint::Min(6),    // Requirements
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Submit button
            Constraint::Length(4), // Feature cards
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    FormLayout {
        header: chunks[0],
        title: chunks[1],
        title_footer: chunks[2],
        description: chunks[3],
        description_footer: chunks[4],
        requirements: chunks[5],
        progress: chunks[6],
        submit: chunks[7],
        features: chunks[8],
        help: chunks[9],
    }
}

/// Keep the end of `text` that fits in `width` columns
///
/// Used for single-line inputs so the caret stays visible while typing.
pub fn tail_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

/// Keep the start of `text` that fits in `width` columns, marking a cut with `…`
pub fn head_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Approximate number of rows `text` occupies when wrapped at `width`
pub fn wrapped_height(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    text.split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}
