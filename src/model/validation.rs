//! Validation rules for the project draft

use super::draft::{is_filled, ProjectDraft};
use std::collections::BTreeMap;
use std::fmt;

pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const REQUIREMENT_MIN_CHARS: usize = 10;

/// Identifies the field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    ProjectTitle,
    ProjectDescription,
    /// List-level error: no requirement has content
    Requirements,
    /// A specific requirement row
    Requirement(usize),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::ProjectTitle => write!(f, "projectTitle"),
            FieldKey::ProjectDescription => write!(f, "projectDescription"),
            FieldKey::Requirements => write!(f, "requirements"),
            FieldKey::Requirement(index) => write!(f, "requirement-{}", index),
        }
    }
}

/// Field errors keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldKey, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.errors.insert(key, message.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    /// Remove a single key, returning whether it was present
    pub fn clear(&mut self, key: FieldKey) -> bool {
        self.errors.remove(&key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.errors.keys().copied()
    }

    /// Re-key row errors after the requirement at `removed` was deleted
    ///
    /// The removed row's error is dropped and rows after it move up by one.
    pub fn shift_requirements_after_removal(&mut self, removed: usize) {
        let old = std::mem::take(&mut self.errors);
        self.errors = old
            .into_iter()
            .filter_map(|(key, message)| match key {
                FieldKey::Requirement(i) if i == removed => None,
                FieldKey::Requirement(i) if i > removed => {
                    Some((FieldKey::Requirement(i - 1), message))
                }
                other => Some((other, message)),
            })
            .collect();
    }
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Validate a draft, reporting every failing rule
pub fn validate(draft: &ProjectDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !is_filled(&draft.title) {
        errors.insert(FieldKey::ProjectTitle, "Project title is required");
    } else if trimmed_len(&draft.title) < TITLE_MIN_CHARS {
        errors.insert(
            FieldKey::ProjectTitle,
            format!("Project title must be at least {} characters", TITLE_MIN_CHARS),
        );
    }

    if !is_filled(&draft.description) {
        errors.insert(FieldKey::ProjectDescription, "Project description is required");
    } else if trimmed_len(&draft.description) < DESCRIPTION_MIN_CHARS {
        errors.insert(
            FieldKey::ProjectDescription,
            format!(
                "Project description must be at least {} characters",
                DESCRIPTION_MIN_CHARS
            ),
        );
    }

    if !draft.has_any_requirement() {
        errors.insert(FieldKey::Requirements, "At least one requirement is required");
    } else {
        for (index, requirement) in draft.requirements().iter().enumerate() {
            // Blank rows are only covered by the list-level rule
            if is_filled(requirement) && trimmed_len(requirement) < REQUIREMENT_MIN_CHARS {
                errors.insert(
                    FieldKey::Requirement(index),
                    format!(
                        "Requirement must be at least {} characters",
                        REQUIREMENT_MIN_CHARS
                    ),
                );
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_DESCRIPTION: &str =
        "A description that is comfortably longer than fifty characters in total.";

    fn draft(title: &str, description: &str, requirements: &[&str]) -> ProjectDraft {
        ProjectDraft::new(
            title,
            description,
            requirements.iter().map(|r| r.to_string()).collect(),
        )
    }

    #[test]
    fn test_field_key_display() {
        assert_eq!(FieldKey::ProjectTitle.to_string(), "projectTitle");
        assert_eq!(FieldKey::ProjectDescription.to_string(), "projectDescription");
        assert_eq!(FieldKey::Requirements.to_string(), "requirements");
        assert_eq!(FieldKey::Requirement(3).to_string(), "requirement-3");
    }

    #[test]
    fn test_empty_draft_reports_three_errors() {
        let errors = validate(&draft("", "", &[""]));
        let keys: Vec<_> = errors.keys().collect();
        assert_eq!(
            keys,
            vec![
                FieldKey::ProjectTitle,
                FieldKey::ProjectDescription,
                FieldKey::Requirements
            ]
        );
        assert_eq!(errors.get(FieldKey::ProjectTitle), Some("Project title is required"));
        assert_eq!(
            errors.get(FieldKey::Requirements),
            Some("At least one requirement is required")
        );
    }

    #[test]
    fn test_short_title_only() {
        let errors = validate(&draft("ab", LONG_DESCRIPTION, &["valid requirement text"]));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldKey::ProjectTitle),
            Some("Project title must be at least 3 characters")
        );
    }

    #[test]
    fn test_short_requirement_only() {
        let errors = validate(&draft(
            "Valid Title",
            LONG_DESCRIPTION,
            &["short", "this one is long enough to pass"],
        ));
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec![FieldKey::Requirement(0)]);
    }

    #[test]
    fn test_blank_rows_never_get_row_errors() {
        let errors = validate(&draft(
            "Valid Title",
            LONG_DESCRIPTION,
            &["", "   ", "long enough requirement", "tiny"],
        ));
        assert!(!errors.contains(FieldKey::Requirement(0)));
        assert!(!errors.contains(FieldKey::Requirement(1)));
        assert!(!errors.contains(FieldKey::Requirement(2)));
        assert!(errors.contains(FieldKey::Requirement(3)));
        assert!(!errors.contains(FieldKey::Requirements));
    }

    #[test]
    fn test_each_short_row_gets_exactly_one_error() {
        let errors = validate(&draft("Valid Title", LONG_DESCRIPTION, &["a", "bb", "ccc"]));
        assert_eq!(errors.len(), 3);
        for i in 0..3 {
            assert!(errors.contains(FieldKey::Requirement(i)));
        }
    }

    #[test]
    fn test_lengths_are_measured_after_trim() {
        let errors = validate(&draft(
            "  ab  ",
            &format!("   {}   ", "x".repeat(49)),
            &["   123456789   "],
        ));
        assert!(errors.contains(FieldKey::ProjectTitle));
        assert!(errors.contains(FieldKey::ProjectDescription));
        assert!(errors.contains(FieldKey::Requirement(0)));
    }

    #[test]
    fn test_boundaries_pass() {
        let errors = validate(&draft("abc", &"x".repeat(50), &["1234567890"]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_iff_minimums_met() {
        let titles = ["", "ab", "abc"];
        let descriptions = ["".to_string(), "x".repeat(49), "x".repeat(50)];
        let requirement_sets: [&[&str]; 3] = [&[""], &["", "   "], &["", "long enough!"]];

        for title in titles {
            for description in &descriptions {
                for requirements in requirement_sets {
                    let d = draft(title, description, requirements);
                    let expected = title.trim().chars().count() >= 3
                        && description.trim().chars().count() >= 50
                        && requirements.iter().any(|r| !r.trim().is_empty());
                    assert_eq!(validate(&d).is_empty(), expected, "{:?}", d);
                }
            }
        }
    }

    #[test]
    fn test_shift_requirements_after_removal() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldKey::ProjectTitle, "t");
        errors.insert(FieldKey::Requirement(0), "zero");
        errors.insert(FieldKey::Requirement(1), "one");
        errors.insert(FieldKey::Requirement(3), "three");

        errors.shift_requirements_after_removal(1);

        assert_eq!(errors.get(FieldKey::ProjectTitle), Some("t"));
        assert_eq!(errors.get(FieldKey::Requirement(0)), Some("zero"));
        assert_eq!(errors.get(FieldKey::Requirement(1)), None);
        assert_eq!(errors.get(FieldKey::Requirement(2)), Some("three"));
        assert_eq!(errors.len(), 3);
    }
}
