//! Data model for the plan generation pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Subject is required")]
    EmptySubject,

    #[error("Time budget must be a positive number of minutes")]
    InvalidTimeBudget,
}

/// A validated request for one study plan.
///
/// Construction goes through [`PlanRequest::new`], so every instance carries
/// a non-blank subject and a positive time budget. The subtopic is optional
/// and normalized to `None` when blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    subject: String,
    sub_topic: Option<String>,
    time_minutes: u32,
}

impl PlanRequest {
    pub fn new(
        subject: impl Into<String>,
        sub_topic: Option<String>,
        time_minutes: u32,
    ) -> Result<Self, PlanError> {
        let subject = subject.into().trim().to_string();
        if subject.is_empty() {
            return Err(PlanError::EmptySubject);
        }
        if time_minutes == 0 {
            return Err(PlanError::InvalidTimeBudget);
        }
        let sub_topic = sub_topic
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            subject,
            sub_topic,
            time_minutes,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn sub_topic(&self) -> Option<&str> {
        self.sub_topic.as_deref()
    }

    pub fn time_minutes(&self) -> u32 {
        self.time_minutes
    }

    /// Heading label: `"Subject"` or `"Subject - Topic"`.
    pub fn topic_label(&self) -> String {
        match &self.sub_topic {
            Some(topic) => format!("{} - {}", self.subject, topic),
            None => self.subject.clone(),
        }
    }
}

/// The three typed resource links attached to every plan.
///
/// Fields default to the empty string when the model omits them; the
/// fallback generator always fills all three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub exercises: String,
}

/// Result of parsing (or synthesizing) one model response.
///
/// `study_plan` is guaranteed non-empty: the parser either found usable
/// text or synthesized a plan from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlanPayload {
    pub study_plan: String,
    pub resources: ResourceLinks,
}

/// The canonical, assembled output of the generation pipeline.
///
/// Serializes in the wire shape the frontend consumes:
/// `{studyPlan, resources, subject, time, subTopic, format}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub study_plan: String,
    pub resources: ResourceLinks,
    pub subject: String,
    pub time: u32,
    pub sub_topic: String,
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_empty_subject() {
        assert_eq!(
            PlanRequest::new("", None, 30).unwrap_err(),
            PlanError::EmptySubject
        );
        assert_eq!(
            PlanRequest::new("   ", None, 30).unwrap_err(),
            PlanError::EmptySubject
        );
    }

    #[test]
    fn test_request_rejects_zero_time_budget() {
        assert_eq!(
            PlanRequest::new("Rust", None, 0).unwrap_err(),
            PlanError::InvalidTimeBudget
        );
    }

    #[test]
    fn test_request_normalizes_blank_subtopic() {
        let request = PlanRequest::new("Rust", Some("  ".to_string()), 30).unwrap();
        assert_eq!(request.sub_topic(), None);
        assert_eq!(request.topic_label(), "Rust");
    }

    #[test]
    fn test_topic_label_includes_subtopic() {
        let request = PlanRequest::new("Rust", Some("Ownership".to_string()), 30).unwrap();
        assert_eq!(request.topic_label(), "Rust - Ownership");
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = Plan {
            study_plan: "# Plan".to_string(),
            resources: ResourceLinks::default(),
            subject: "Rust".to_string(),
            time: 60,
            sub_topic: String::new(),
            format: "markdown".to_string(),
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["studyPlan"], "# Plan");
        assert_eq!(json["subTopic"], "");
        assert_eq!(json["time"], 60);
        assert_eq!(json["format"], "markdown");
    }
}
