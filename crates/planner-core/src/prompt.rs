//! Prompt construction for the study-plan model call.
//!
//! The prompt is a pure function of the request: identical requests produce
//! byte-identical prompts. That keeps retries idempotent from the model's
//! perspective and makes the builder trivially testable.

use crate::plan::PlanRequest;

/// Build the generation prompt for one plan request.
pub fn build_prompt(request: &PlanRequest) -> String {
    let subject = request.subject();
    let label = request.topic_label();
    let time = request.time_minutes();
    let topic_clause = match request.sub_topic() {
        Some(topic) => format!(" - Topic: {topic}"),
        None => String::new(),
    };
    let video_focus = match request.sub_topic() {
        Some(topic) => format!(" specifically about {topic}"),
        None => String::new(),
    };

    format!(
        r##"Create a detailed study roadmap for "{subject}"{topic_clause} with {time} minutes available.

Return a JSON object with this exact structure:
{{
  "studyPlan": "# Study Roadmap: {label}\n\n## Quick Prerequisites\n- Basic knowledge needed\n- Required background\n\n## Minute-by-Minute Roadmap\n| Time | Duration | Activity | Task | Resource | Key Takeaways |\n|------|----------|----------|------|----------|---------------|\n| 0-5min | 5 min | Watch | Introduction video | [YouTube link] | Main concepts |\n| 5-10min | 5 min | Practice | Hands-on exercise | [Practice link] | Apply learning |\n| 10-15min | 5 min | Review | Summarize notes | - | Key points |\n\n## Step-by-Step Guidance\n1. **Step 1**: [Detailed instruction]\n2. **Step 2**: [Detailed instruction]\n3. **Step 3**: [Detailed instruction]\n\n## Practice Exercises\n- Exercise 1: [Description]\n- Exercise 2: [Description]\n\n## Key Points to Remember\n- Important concept 1\n- Important concept 2\n\n## Next Steps\n1. Review your notes\n2. Practice more exercises\n3. Test your understanding",
  "resources": {{
    "video": "[Specific YouTube video URL for {label}]",
    "documentation": "[Official documentation URL for {subject}]",
    "exercises": "[Practice platform URL for {subject}]"
  }}
}}

CRITICAL REQUIREMENTS:
- For "video": Provide a REAL, SPECIFIC YouTube video URL that teaches {subject}{video_focus}
- For "documentation": Provide the OFFICIAL documentation URL for {subject}
- For "exercises": Provide a REAL practice platform URL that has {subject} exercises
- Make sure ALL URLs are real, working, and directly relevant to {label}
- Create a detailed minute-by-minute breakdown with specific timestamps whose durations sum to exactly {time} minutes
- Include step-by-step guidance for each phase
- Focus on practical, actionable tasks"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        PlanRequest::new("React Hooks", Some("useEffect".to_string()), 60).unwrap()
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&request()), build_prompt(&request()));
    }

    #[test]
    fn test_prompt_states_subject_topic_and_budget() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("\"React Hooks\""));
        assert!(prompt.contains("- Topic: useEffect"));
        assert!(prompt.contains("with 60 minutes available"));
    }

    #[test]
    fn test_prompt_demands_machine_parseable_shape() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Return a JSON object"));
        assert!(prompt.contains("\"studyPlan\""));
        assert!(prompt.contains("\"video\""));
        assert!(prompt.contains("\"documentation\""));
        assert!(prompt.contains("\"exercises\""));
        assert!(prompt.contains("sum to exactly 60 minutes"));
    }

    #[test]
    fn test_prompt_omits_topic_clause_without_subtopic() {
        let request = PlanRequest::new("Python", None, 30).unwrap();
        let prompt = build_prompt(&request);
        assert!(!prompt.contains("- Topic:"));
        assert!(prompt.contains("# Study Roadmap: Python"));
    }
}
