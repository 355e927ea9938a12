use crate::domain::{
    error::{DomainError, RepositoryError},
    repositories::registrant_repository::RegistrantRepository,
    services::{card_renderer::CardRenderer, session_service::SessionManager},
};

/// A rendered card ready to be written out. The file name embeds the
/// matricule so cards of different members never collide on disk.
#[derive(Debug)]
pub struct MembershipCard {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct DownloadCardUsecase<S: SessionManager, R: RegistrantRepository, C: CardRenderer> {
    session_manager: S,
    registrant_repository: R,
    card_renderer: C,
}

impl<S: SessionManager, R: RegistrantRepository, C: CardRenderer> DownloadCardUsecase<S, R, C> {
    pub fn new(session_manager: S, registrant_repository: R, card_renderer: C) -> Self {
        Self {
            session_manager,
            registrant_repository,
            card_renderer,
        }
    }

    /// Render the logged-in member's card from their current record. Every
    /// call renders afresh; nothing is cached or persisted here.
    pub async fn download(&self) -> Result<MembershipCard, DomainError> {
        let id = self
            .session_manager
            .current()
            .await?
            .ok_or(DomainError::NotLoggedIn)?;

        let registrant = self
            .registrant_repository
            .find_by_id(&id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let bytes = self.card_renderer.render(&registrant)?;

        Ok(MembershipCard {
            file_name: format!("carte_{}.pdf", registrant.matricule()),
            bytes,
        })
    }
}
