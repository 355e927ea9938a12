pub mod credential;
pub mod registrant;
