//! Project draft - the in-memory form data and its input limits

use serde::{Deserialize, Serialize};

/// Maximum title length accepted by the title field
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length accepted by the description field
pub const DESCRIPTION_MAX_CHARS: usize = 2000;
/// Maximum length of a single requirement
pub const REQUIREMENT_MAX_CHARS: usize = 500;

/// Truncate a value to at most `limit` characters
///
/// Input fields enforce their limits by dropping overflow, never by
/// reporting an error.
pub fn truncate_chars(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

/// Returns true when the value has content after trimming
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// The project being described in the intake form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Never empty: the last requirement cannot be removed
    requirements: Vec<String>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            requirements: vec![String::new()],
        }
    }
}

impl ProjectDraft {
    /// Build a draft from parts. An empty requirement list is replaced by a
    /// single blank entry.
    pub fn new(title: &str, description: &str, requirements: Vec<String>) -> Self {
        let requirements = if requirements.is_empty() {
            vec![String::new()]
        } else {
            requirements
        };
        Self {
            title: title.to_string(),
            description: description.to_string(),
            requirements,
        }
    }

    /// The pre-filled example project shown on startup
    pub fn sample() -> Self {
        Self::new(
            SAMPLE_TITLE,
            SAMPLE_DESCRIPTION,
            SAMPLE_REQUIREMENTS.iter().map(|r| r.to_string()).collect(),
        )
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = truncate_chars(value, TITLE_MAX_CHARS);
    }

    pub fn set_description(&mut self, value: &str) {
        self.description = truncate_chars(value, DESCRIPTION_MAX_CHARS);
    }

    pub fn add_requirement(&mut self) {
        self.requirements.push(String::new());
    }

    /// Replace the requirement at `index`
    ///
    /// Panics if `index` is out of range; callers derive indices from the
    /// current list.
    pub fn update_requirement(&mut self, index: usize, value: &str) {
        self.requirements[index] = truncate_chars(value, REQUIREMENT_MAX_CHARS);
    }

    /// Remove the requirement at `index`, returning whether anything changed
    pub fn remove_requirement(&mut self, index: usize) -> bool {
        if self.requirements.len() <= 1 || index >= self.requirements.len() {
            return false;
        }
        self.requirements.remove(index);
        true
    }

    /// Requirements that have content after trimming
    pub fn filled_requirements(&self) -> impl Iterator<Item = &String> {
        self.requirements.iter().filter(|r| is_filled(r))
    }

    pub fn has_any_requirement(&self) -> bool {
        self.filled_requirements().next().is_some()
    }

    /// Coarse progress: one bucket each for title, description and
    /// "at least one requirement", rounded to a whole percentage.
    pub fn completion_percentage(&self) -> u8 {
        let filled = [
            is_filled(&self.title),
            is_filled(&self.description),
            self.has_any_requirement(),
        ]
        .iter()
        .filter(|done| **done)
        .count();

        ((filled as f64 / 3.0) * 100.0).round() as u8
    }

    /// Build the request handed to plan generation
    pub fn to_plan_request(&self) -> PlanRequest {
        PlanRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            requirements: self
                .filled_requirements()
                .map(|r| r.trim().to_string())
                .collect(),
        }
    }
}

/// Input for SDLC plan generation (not wired to a service yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
}

const SAMPLE_TITLE: &str = "EcoTrack - Smart Environmental Monitoring Platform";

const SAMPLE_DESCRIPTION: &str = "EcoTrack is an innovative IoT-powered environmental monitoring platform designed to help organizations and individuals track, analyze, and optimize their environmental impact in real-time. The system integrates advanced sensor networks, machine learning analytics, and intuitive dashboards to provide actionable insights for sustainable practices. Built with scalability in mind, EcoTrack serves both residential users and enterprise clients, offering customizable monitoring solutions that adapt to specific environmental goals and compliance requirements.";

const SAMPLE_REQUIREMENTS: [&str; 5] = [
    "Develop a real-time IoT sensor integration system capable of collecting environmental data including air quality metrics (PM2.5, CO2, VOCs), temperature, humidity, and energy consumption patterns from multiple device categories and building zones.",
    "Implement machine learning algorithms for predictive analytics that can forecast environmental trends, detect anomalies, provide optimization recommendations, and generate automated sustainability reports with actionable insights.",
    "Create responsive web and mobile applications with interactive dashboards featuring customizable widgets, data visualization tools, carbon footprint tracking, and comprehensive reporting capabilities for different user roles.",
    "Build a notification system with configurable alerts for threshold breaches, goal achievements, and compliance monitoring, including email, SMS, and in-app notifications with escalation workflows.",
    "Design a scalable cloud infrastructure with secure data storage, API endpoints for third-party integrations, user authentication, role-based access control, and support for multi-tenant architecture.",
];
