//! Storage, session and authentication core of the Dahira Touba Médecine
//! membership portal: members sign up, log in, maintain a profile and
//! download their membership card; an administrator lists, edits, deletes
//! and exports registrants. All state lives in a local per-key string
//! store; there is no server and no network protocol.

pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;
