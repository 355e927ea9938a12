pub mod card_renderer;
pub mod password_service;
pub mod sequence_service;
pub mod session_service;
