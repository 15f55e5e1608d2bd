pub mod chat_service;
pub mod plan_service;

pub use chat_service::ChatService;
pub use plan_service::PlanService;
