use crate::domain::{error::DomainError, models::registrant::Registrant};

/// Renders the membership card artifact for one registrant. Read-only
/// consumer: the record is never written back.
pub trait CardRenderer: Clone {
    fn render(&self, registrant: &Registrant) -> Result<Vec<u8>, DomainError>;
}
