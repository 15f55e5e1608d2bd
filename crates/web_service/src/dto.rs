//! Request/response bodies for the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
///
/// `subject` defaults to empty so a missing field is rejected with the
/// boundary's own validation message rather than a deserializer error.
/// The frontend has historically sent `time` as both a number and a
/// string, so both are accepted.
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "subTopic", default)]
    pub sub_topic: Option<String>,
    #[serde(default)]
    pub time: Option<TimeBudget>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimeBudget {
    Minutes(u32),
    Text(String),
}

impl TimeBudget {
    /// The budget as a positive minute count, `None` when unusable.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            TimeBudget::Minutes(m) if *m > 0 => Some(*m),
            TimeBudget::Minutes(_) => None,
            TimeBudget::Text(s) => s.trim().parse().ok().filter(|m| *m > 0),
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub content: String,
}

/// Body of `POST /api/focus-sessions`.
#[derive(Debug, Deserialize)]
pub struct CreateFocusSessionRequest {
    pub time: u32,
    pub subject: String,
    #[serde(default)]
    pub sub_topic: Option<String>,
    #[serde(default)]
    pub output_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_budget_accepts_number_and_string() {
        let numeric: GeneratePlanRequest =
            serde_json::from_str(r#"{"subject": "Rust", "time": 60}"#).unwrap();
        assert_eq!(numeric.time.unwrap().minutes(), Some(60));

        let text: GeneratePlanRequest =
            serde_json::from_str(r#"{"subject": "Rust", "time": "45"}"#).unwrap();
        assert_eq!(text.time.unwrap().minutes(), Some(45));
    }

    #[test]
    fn test_time_budget_rejects_non_positive_values() {
        assert_eq!(TimeBudget::Minutes(0).minutes(), None);
        assert_eq!(TimeBudget::Text("0".to_string()).minutes(), None);
        assert_eq!(TimeBudget::Text("soon".to_string()).minutes(), None);
        assert_eq!(TimeBudget::Text("-5".to_string()).minutes(), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let body: GeneratePlanRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(body.subject, "");
        assert!(body.sub_topic.is_none());
        assert!(body.time.is_none());
    }
}
