use actix_web::{post, web, HttpResponse};

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::server::AppState;

/// Configure chat routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(chat);
}

/// Converse with the Focus Factory assistant.
#[post("/chat")]
pub async fn chat(
    request: web::Json<ChatRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let content = state.chat.send(&request.messages).await?;
    Ok(HttpResponse::Ok().json(ChatResponse { content }))
}
