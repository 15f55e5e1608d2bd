use actix_web::{get, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::dto::CreateFocusSessionRequest;
use crate::error::AppError;
use crate::server::AppState;
use crate::storage::FocusSession;

/// Configure focus session routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_focus_sessions).service(create_focus_session);
}

/// Caller identity, as established by the upstream identity provider.
/// Authentication itself is outside this service.
fn caller_id(req: &HttpRequest) -> Result<String, AppError> {
    req.headers()
        .get("X-User-Id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .ok_or(AppError::Unauthorized)
}

/// List the caller's focus sessions, newest first.
#[get("/focus-sessions")]
pub async fn list_focus_sessions(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = caller_id(&req)?;
    let sessions = state.sessions.list_sessions(&user_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "sessions": sessions })))
}

/// Record one focus session for the caller.
#[post("/focus-sessions")]
pub async fn create_focus_session(
    req: HttpRequest,
    body: web::Json<CreateFocusSessionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = caller_id(&req)?;
    let body = body.into_inner();

    if body.subject.trim().is_empty() {
        return Err(AppError::Validation("Subject is required".to_string()));
    }

    let session = state
        .sessions
        .insert_session(FocusSession {
            id: Uuid::new_v4(),
            user_id,
            time: body.time,
            subject: body.subject,
            sub_topic: body.sub_topic,
            output_text: body.output_text,
            created_at: Utc::now(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "session": session })))
}
