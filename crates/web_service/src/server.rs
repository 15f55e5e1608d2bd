use std::{path::PathBuf, sync::Arc};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use crate::config::GeminiSettings;
use crate::controllers::{
    chat_controller, generate_controller, session_controller, system_controller,
};
use crate::services::{ChatService, PlanService};
use crate::storage::{FileSessionStorage, SessionStorage};

pub struct AppState {
    pub planner: PlanService,
    pub chat: ChatService,
    pub sessions: Arc<dyn SessionStorage>,
}

impl AppState {
    pub fn new(settings: &GeminiSettings, data_dir: PathBuf) -> Self {
        let client = settings.client();
        Self {
            planner: PlanService::new(client.clone(), settings.generation_config()),
            chat: ChatService::new(client, settings.generation_config()),
            sessions: Arc::new(FileSessionStorage::new(data_dir)),
        }
    }
}

const DEFAULT_WORKER_COUNT: usize = 10;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(generate_controller::config)
            .configure(chat_controller::config)
            .configure(session_controller::config)
            .configure(system_controller::config),
    );
}

pub async fn run(data_dir: PathBuf, port: u16) -> Result<(), String> {
    info!("Starting web service...");

    // Configuration is resolved up front so a missing credential fails
    // here instead of on the first request.
    let settings = GeminiSettings::from_env().map_err(|e| e.to_string())?;
    let app_state = web::Data::new(AppState::new(&settings, data_dir));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Starting web service on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
