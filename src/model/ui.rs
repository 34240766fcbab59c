//! UI state - focus tracking for the intake form

/// The form element that currently receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Description,
    Requirement(usize),
    AddRequirement,
    Submit,
}

impl Focus {
    /// Next element in tab order for a form with `requirement_count` rows
    pub fn next(self, requirement_count: usize) -> Focus {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Requirement(0),
            Focus::Requirement(i) if i + 1 < requirement_count => Focus::Requirement(i + 1),
            Focus::Requirement(_) => Focus::AddRequirement,
            Focus::AddRequirement => Focus::Submit,
            Focus::Submit => Focus::Title,
        }
    }

    /// Previous element in tab order
    pub fn prev(self, requirement_count: usize) -> Focus {
        match self {
            Focus::Title => Focus::Submit,
            Focus::Description => Focus::Title,
            Focus::Requirement(0) => Focus::Description,
            Focus::Requirement(i) => Focus::Requirement(i - 1),
            Focus::AddRequirement => Focus::Requirement(requirement_count.saturating_sub(1)),
            Focus::Submit => Focus::AddRequirement,
        }
    }

    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Focus::Title | Focus::Description | Focus::Requirement(_)
        )
    }
}
