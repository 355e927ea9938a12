pub mod credential_repository;
pub mod registrant_repository;
pub mod registration_repository;
