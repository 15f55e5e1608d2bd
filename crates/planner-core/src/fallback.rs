//! Deterministic fallback synthesis.
//!
//! When the model's text cannot be parsed as structured data, the pipeline
//! must still return a complete plan. This module builds one from the
//! request alone: a three-phase 30%/50%/20% split of the time budget and a
//! markdown document parameterized by subject and subtopic. No wall-clock
//! or random data, so identical requests synthesize identical plans.

use crate::plan::{ParsedPlanPayload, PlanRequest, ResourceLinks};
use crate::resources;

/// Three-phase breakdown of a time budget, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSplit {
    pub learn: u32,
    pub practice: u32,
    pub review: u32,
}

/// Split a positive time budget 30%/50%/20%, rounding down and assigning
/// the remainder to the review phase so the parts sum exactly to `total`.
pub fn split_time_budget(total: u32) -> PhaseSplit {
    // u64 intermediates: total * 30 overflows u32 near the top of the range.
    let learn = (u64::from(total) * 30 / 100) as u32;
    let practice = (u64::from(total) * 50 / 100) as u32;
    let review = total - learn - practice;
    PhaseSplit {
        learn,
        practice,
        review,
    }
}

/// Synthesize a complete payload from the request alone.
pub fn synthesize_plan(request: &PlanRequest) -> ParsedPlanPayload {
    let subject = request.subject();
    let label = request.topic_label();
    let total = request.time_minutes();
    let split = split_time_budget(total);
    let practice_end = split.learn + split.practice;

    let study_plan = format!(
        "# Study Roadmap: {label}\n\n\
         ## Quick Prerequisites\n\
         - Basic understanding of {subject}\n\
         - Willingness to learn and practice\n\n\
         ## Minute-by-Minute Roadmap\n\
         | Time | Duration | Activity | Task | Resource | Key Takeaways |\n\
         |------|----------|----------|------|----------|---------------|\n\
         | 0-{learn}min | {learn} min | Learn | Introduction to {subject} | [YouTube: {subject} tutorial] | Core concepts |\n\
         | {learn}-{practice_end}min | {practice} min | Practice | Hands-on exercises | [Practice platform] | Apply knowledge |\n\
         | {practice_end}-{total}min | {review} min | Review | Summarize and test | [Quiz/Test] | Retention check |\n\n\
         ## Step-by-Step Guidance\n\
         1. **Phase 1 (0-{learn}min)**: Watch introduction video and take notes\n\
         2. **Phase 2 ({learn}-{practice_end}min)**: Complete hands-on exercises\n\
         3. **Phase 3 ({practice_end}-{total}min)**: Review notes and test understanding\n\n\
         ## Practice Exercises\n\
         - Exercise 1: Basic {subject} concepts\n\
         - Exercise 2: Intermediate {subject} problems\n\
         - Exercise 3: Advanced {subject} challenges\n\n\
         ## Key Points to Remember\n\
         - Focus on understanding, not memorization\n\
         - Practice regularly for better retention\n\
         - Ask questions when stuck\n\n\
         ## Next Steps\n\
         1. Review your notes after each session\n\
         2. Practice daily for 15-30 minutes\n\
         3. Join study groups or forums for {subject}",
        learn = split.learn,
        practice = split.practice,
        review = split.review,
    );

    ParsedPlanPayload {
        study_plan,
        resources: ResourceLinks {
            video: resources::video_search_url(request),
            documentation: resources::documentation_for(subject).to_string(),
            exercises: resources::exercises_for(subject).to_string(),
        },
    }
}
