//! Core study-plan generation pipeline for Focus Factory.
//!
//! The pipeline is a linear sequence of pure functions:
//!
//! ```text
//! PlanRequest -> build_prompt -> (model call, external) -> parse_response -> assemble -> Plan
//! ```
//!
//! Everything in this crate is deterministic and I/O-free. The model call
//! itself lives in `planner-llm`; this crate only defines what is sent to
//! the model and how its (possibly malformed) output becomes a usable plan.

pub mod assembler;
pub mod fallback;
pub mod parser;
pub mod plan;
pub mod prompt;
pub mod resources;

pub use assembler::assemble;
pub use parser::parse_response;
pub use plan::{ParsedPlanPayload, Plan, PlanError, PlanRequest, ResourceLinks};
pub use prompt::build_prompt;
