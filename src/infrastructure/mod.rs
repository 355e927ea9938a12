pub mod argon2_password_hasher;
pub(crate) mod collections;
pub mod credential_repository;
pub mod pdf_card_renderer;
pub mod registrant_repository;
pub mod registration_repository;
pub mod sequence_allocator;
pub mod session_manager;
pub mod store;
