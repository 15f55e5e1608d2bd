//! Final plan assembly.

use crate::plan::{ParsedPlanPayload, Plan, PlanRequest};

/// Merge a parsed payload with the echoed request parameters.
///
/// Total function: copies the payload verbatim, echoes the request, and
/// stamps the output format. A missing subtopic echoes as the empty string,
/// matching the wire contract.
pub fn assemble(payload: ParsedPlanPayload, request: &PlanRequest) -> Plan {
    Plan {
        study_plan: payload.study_plan,
        resources: payload.resources,
        subject: request.subject().to_string(),
        time: request.time_minutes(),
        sub_topic: request.sub_topic().unwrap_or_default().to_string(),
        format: "markdown".to_string(),
    }
}
