//! The plan generation pipeline, wired end to end.

use planner_core::{assemble, build_prompt, parse_response, Plan, PlanRequest};
use planner_llm::{GeminiClient, GenerationConfig};

use crate::error::Result;

/// Runs one validated request through prompt building, the model call,
/// response parsing, and assembly.
///
/// Holds no mutable state; concurrent generations are independent. A model
/// response that is not valid JSON is not a failure here — the parser
/// degrades to a synthesized plan. Only classified upstream errors
/// propagate.
pub struct PlanService {
    client: GeminiClient,
    generation: GenerationConfig,
}

impl PlanService {
    pub fn new(client: GeminiClient, generation: GenerationConfig) -> Self {
        Self { client, generation }
    }

    pub async fn generate(&self, request: &PlanRequest) -> Result<Plan> {
        let prompt = build_prompt(request);
        let raw = self.client.generate_text(&prompt, &self.generation).await?;

        log::debug!(
            "model returned {} bytes for subject '{}'",
            raw.len(),
            request.subject()
        );

        let payload = parse_response(&raw, request);
        Ok(assemble(payload, request))
    }
}
