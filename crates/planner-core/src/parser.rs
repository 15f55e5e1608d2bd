//! Model response parsing.
//!
//! The upstream contract was never stabilized: responses have been observed
//! with camelCase and snake_case plan fields, a legacy `output` field, and
//! resource links both nested and flat. Each observed shape gets its own
//! [`RawShape`] adapter; when none matches, parsing degrades to the model's
//! raw text or, for unparseable input, to deterministic fallback synthesis.
//! `parse_response` is total: it never fails and never returns an empty plan.

use serde_json::{Map, Value};

use crate::fallback::synthesize_plan;
use crate::plan::{ParsedPlanPayload, PlanRequest, ResourceLinks};

/// Parse one raw model response into a usable payload.
///
/// Ordered, first match wins:
/// 1. extract a fenced code block when present, otherwise use the raw text;
/// 2. a JSON object matching a known [`RawShape`] is adapted directly;
/// 3. any other successfully parsed JSON keeps the raw text as the plan body;
/// 4. unparseable input synthesizes a plan from the request alone.
pub fn parse_response(raw: &str, request: &PlanRequest) -> ParsedPlanPayload {
    let trimmed = raw.trim();
    let candidate = extract_fenced_block(raw).unwrap_or(trimmed);

    let Ok(value) = serde_json::from_str::<Value>(candidate) else {
        return synthesize_plan(request);
    };

    if let Value::Object(object) = &value {
        if let Some(payload) = RawShape::detect(object).and_then(|shape| shape.convert(object)) {
            return payload;
        }
    }

    // Valid JSON without a usable plan field: keep the model's text verbatim.
    if trimmed.is_empty() {
        return synthesize_plan(request);
    }
    ParsedPlanPayload {
        study_plan: trimmed.to_string(),
        resources: ResourceLinks::default(),
    }
}

/// Known upstream response schemas, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawShape {
    /// `{"studyPlan": "...", "resources": {"video": ..}}`
    CamelNested,
    /// `{"study_plan": "...", "resources": {"video": ..}}`
    SnakeNested,
    /// `{"output": "..."}` (earliest observed variant)
    LegacyOutput,
    /// `{"studyPlan": "...", "video": .., "documentation": .., "exercises": ..}`
    FlatLinks,
}

impl RawShape {
    fn detect(object: &Map<String, Value>) -> Option<Self> {
        if object.get("studyPlan").is_some_and(Value::is_string) {
            if object.contains_key("resources") {
                return Some(Self::CamelNested);
            }
            if ["video", "documentation", "exercises"]
                .iter()
                .any(|k| object.contains_key(*k))
            {
                return Some(Self::FlatLinks);
            }
            return Some(Self::CamelNested);
        }
        if object.get("study_plan").is_some_and(Value::is_string) {
            return Some(Self::SnakeNested);
        }
        if object.get("output").is_some_and(Value::is_string) {
            return Some(Self::LegacyOutput);
        }
        None
    }

    /// Adapt the object to the canonical payload. Returns `None` when the
    /// plan field turns out to be blank, which callers treat the same as an
    /// unrecognized shape.
    fn convert(self, object: &Map<String, Value>) -> Option<ParsedPlanPayload> {
        let (plan_field, resources) = match self {
            Self::CamelNested => ("studyPlan", nested_resources(object)),
            Self::SnakeNested => ("study_plan", nested_resources(object)),
            Self::LegacyOutput => ("output", nested_resources(object)),
            Self::FlatLinks => ("studyPlan", flat_resources(object)),
        };

        let study_plan = str_field(object, plan_field);
        if study_plan.trim().is_empty() {
            return None;
        }

        Some(ParsedPlanPayload {
            study_plan,
            resources,
        })
    }
}

fn nested_resources(object: &Map<String, Value>) -> ResourceLinks {
    match object.get("resources").and_then(Value::as_object) {
        Some(resources) => ResourceLinks {
            video: str_field(resources, "video"),
            documentation: str_field(resources, "documentation"),
            exercises: str_field(resources, "exercises"),
        },
        None => ResourceLinks::default(),
    }
}

fn flat_resources(object: &Map<String, Value>) -> ResourceLinks {
    ResourceLinks {
        video: str_field(object, "video"),
        documentation: str_field(object, "documentation"),
        exercises: str_field(object, "exercises"),
    }
}

fn str_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Extract the body of the first fenced code block, tolerating an optional
/// `json` language tag. Returns `None` when there is no complete fence.
fn extract_fenced_block(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after_fence = &raw[start + 3..];
    let body = after_fence.strip_prefix("json").unwrap_or(after_fence);
    let end = body.find("```")?;
    Some(body[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        PlanRequest::new("React Hooks", Some("useEffect".to_string()), 60).unwrap()
    }

    #[test]
    fn test_camel_case_nested_shape() {
        let raw = r##"{"studyPlan": "# X", "resources": {"video": "v", "documentation": "d", "exercises": "e"}}"##;
        let payload = parse_response(raw, &request());

        assert_eq!(payload.study_plan, "# X");
        assert_eq!(payload.resources.video, "v");
        assert_eq!(payload.resources.documentation, "d");
        assert_eq!(payload.resources.exercises, "e");
    }

    #[test]
    fn test_snake_case_shape_round_trips() {
        let raw = r##"{"study_plan": "# X", "resources": {"video": "v", "documentation": "d", "exercises": "e"}}"##;
        let payload = parse_response(raw, &request());

        assert_eq!(payload.study_plan, "# X");
        assert_eq!(
            payload.resources,
            ResourceLinks {
                video: "v".to_string(),
                documentation: "d".to_string(),
                exercises: "e".to_string(),
            }
        );
    }

    #[test]
    fn test_legacy_output_shape() {
        let raw = r#"{"output": "plan body"}"#;
        let payload = parse_response(raw, &request());

        assert_eq!(payload.study_plan, "plan body");
        assert_eq!(payload.resources, ResourceLinks::default());
    }

    #[test]
    fn test_flat_resource_links_shape() {
        let raw = r##"{"studyPlan": "# X", "video": "v", "documentation": "d", "exercises": "e"}"##;
        let payload = parse_response(raw, &request());

        assert_eq!(payload.study_plan, "# X");
        assert_eq!(payload.resources.video, "v");
        assert_eq!(payload.resources.documentation, "d");
        assert_eq!(payload.resources.exercises, "e");
    }

    #[test]
    fn test_missing_resource_fields_default_to_empty() {
        let raw = r##"{"studyPlan": "# X", "resources": {"video": "v"}}"##;
        let payload = parse_response(raw, &request());

        assert_eq!(payload.resources.video, "v");
        assert_eq!(payload.resources.documentation, "");
        assert_eq!(payload.resources.exercises, "");
    }

    #[test]
    fn test_fenced_json_block_is_extracted() {
        let raw = "Here is your plan:\n```json\n{\"studyPlan\": \"# Fenced\", \"resources\": {}}\n```\nEnjoy!";
        let payload = parse_response(raw, &request());
        assert_eq!(payload.study_plan, "# Fenced");
    }

    #[test]
    fn test_unlabeled_fence_is_extracted() {
        let raw = "```\n{\"studyPlan\": \"# Fenced\"}\n```";
        let payload = parse_response(raw, &request());
        assert_eq!(payload.study_plan, "# Fenced");
    }

    #[test]
    fn test_json_object_without_plan_field_keeps_raw_text() {
        let raw = r#"{"message": "no plan here"}"#;
        let payload = parse_response(raw, &request());

        assert_eq!(payload.study_plan, raw);
        assert_eq!(payload.resources, ResourceLinks::default());
    }

    #[test]
    fn test_blank_plan_field_keeps_raw_text() {
        let raw = r#"{"studyPlan": "  "}"#;
        let payload = parse_response(raw, &request());
        assert_eq!(payload.study_plan, raw);
    }

    #[test]
    fn test_invalid_json_synthesizes_fallback() {
        let payload = parse_response("not json", &request());

        assert!(payload.study_plan.contains("0-18min"));
        assert!(payload.study_plan.contains("18-48min"));
        assert!(payload.study_plan.contains("48-60min"));
        assert_eq!(payload.resources.documentation, "https://react.dev/learn");
    }

    #[test]
    fn test_empty_input_synthesizes_fallback() {
        let payload = parse_response("", &request());
        assert!(!payload.study_plan.is_empty());
        assert!(payload.study_plan.contains("React Hooks"));
    }

    #[test]
    fn test_never_fails_and_never_returns_empty_plan() {
        let inputs = [
            "",
            "   ",
            "garbage {{{",
            "```json\nbroken\n```",
            "[1, 2, 3]",
            "\"just a string\"",
            "42",
            "{\"studyPlan\": 17}",
            "{\"resources\": {\"video\": \"v\"}}",
        ];
        for raw in inputs {
            let payload = parse_response(raw, &request());
            assert!(
                !payload.study_plan.trim().is_empty(),
                "empty plan for input {raw:?}"
            );
        }
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let raw = "not json at all";
        assert_eq!(
            parse_response(raw, &request()),
            parse_response(raw, &request())
        );
    }
}
