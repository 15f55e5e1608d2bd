use actix_web::{post, web, HttpResponse};
use planner_core::PlanRequest;

use crate::dto::GeneratePlanRequest;
use crate::error::AppError;
use crate::server::AppState;

/// Configure plan generation routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_plan);
}

/// Generate an AI-assisted study plan.
///
/// Validation happens here, before the pipeline: a blank subject or an
/// unusable time budget never reaches the model.
#[post("/generate")]
pub async fn generate_plan(
    request: web::Json<GeneratePlanRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = request.into_inner();

    if body.subject.trim().is_empty() {
        return Err(AppError::Validation("Subject is required".to_string()));
    }
    let minutes = body
        .time
        .as_ref()
        .and_then(|t| t.minutes())
        .ok_or_else(|| {
            AppError::Validation("Time budget must be a positive number of minutes".to_string())
        })?;

    let plan_request = PlanRequest::new(body.subject, body.sub_topic, minutes)?;

    log::info!(
        "generating plan: subject='{}', time={}min",
        plan_request.subject(),
        plan_request.time_minutes()
    );

    let plan = state.planner.generate(&plan_request).await?;
    Ok(HttpResponse::Ok().json(plan))
}
