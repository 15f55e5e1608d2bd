pub mod chat_controller;
pub mod generate_controller;
pub mod session_controller;
pub mod system_controller;
