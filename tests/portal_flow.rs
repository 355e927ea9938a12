//! End-to-end flows of the membership portal over a real on-disk store:
//! signup, authentication, profile edits, card download, admin operations,
//! and what survives a process restart.

use std::path::Path;

use chrono::Datelike;

use dahira_portal::domain::error::{DomainError, RepositoryError};
use dahira_portal::domain::models::credential::HashedPassword;
use dahira_portal::domain::models::registrant::{Registrant, RegistrantDraft, RegistrantUpdate};
use dahira_portal::domain::repositories::credential_repository::CredentialRepository;
use dahira_portal::domain::repositories::registration_repository::RegistrationRepository;
use dahira_portal::domain::services::sequence_service::MatriculeAllocator;
use dahira_portal::domain::services::session_service::SessionManager;
use dahira_portal::infrastructure::argon2_password_hasher::Argon2PasswordHasher;
use dahira_portal::infrastructure::credential_repository::KvCredentialRepository;
use dahira_portal::infrastructure::pdf_card_renderer::PdfCardRenderer;
use dahira_portal::infrastructure::registrant_repository::KvRegistrantRepository;
use dahira_portal::infrastructure::registration_repository::KvRegistrationRepository;
use dahira_portal::infrastructure::sequence_allocator::StoreSequenceAllocator;
use dahira_portal::infrastructure::session_manager::StoreSessionManager;
use dahira_portal::infrastructure::store::{CREDENTIALS_KEY, FileStore, KeyValueStore};
use dahira_portal::usecase::admin_usecase::AdminUsecase;
use dahira_portal::usecase::change_password_usecase::ChangePasswordUsecase;
use dahira_portal::usecase::download_card_usecase::DownloadCardUsecase;
use dahira_portal::usecase::export_registrants_usecase::ExportRegistrantsUsecase;
use dahira_portal::usecase::login_usecase::LoginUsecase;
use dahira_portal::usecase::show_profile_usecase::ShowProfileUsecase;
use dahira_portal::usecase::signup_usecase::SignupUsecase;
use dahira_portal::usecase::update_profile_usecase::UpdateProfileUsecase;

/// All portal operations wired over one on-disk store, the way the binary
/// wires them.
struct Portal {
    store: FileStore,
}

impl Portal {
    fn open(dir: &Path) -> Self {
        Self {
            store: FileStore::open(dir).unwrap(),
        }
    }

    fn signup(&self) -> SignupUsecase<KvRegistrationRepository<FileStore>, Argon2PasswordHasher> {
        let allocator = StoreSequenceAllocator::new(self.store.clone(), "DTM");
        SignupUsecase::new(
            KvRegistrationRepository::new(self.store.clone(), allocator),
            Argon2PasswordHasher::new(),
        )
    }

    fn login(
        &self,
    ) -> LoginUsecase<
        KvCredentialRepository<FileStore>,
        StoreSessionManager<FileStore>,
        Argon2PasswordHasher,
    > {
        LoginUsecase::new(
            self.credentials(),
            self.session(),
            Argon2PasswordHasher::new(),
        )
    }

    fn change_password(
        &self,
    ) -> ChangePasswordUsecase<
        StoreSessionManager<FileStore>,
        KvCredentialRepository<FileStore>,
        Argon2PasswordHasher,
    > {
        ChangePasswordUsecase::new(
            self.session(),
            self.credentials(),
            Argon2PasswordHasher::new(),
        )
    }

    fn show_profile(
        &self,
    ) -> ShowProfileUsecase<StoreSessionManager<FileStore>, KvRegistrantRepository<FileStore>>
    {
        ShowProfileUsecase::new(self.session(), self.registrants())
    }

    fn update_profile(
        &self,
    ) -> UpdateProfileUsecase<StoreSessionManager<FileStore>, KvRegistrantRepository<FileStore>>
    {
        UpdateProfileUsecase::new(self.session(), self.registrants())
    }

    fn download_card(
        &self,
    ) -> DownloadCardUsecase<
        StoreSessionManager<FileStore>,
        KvRegistrantRepository<FileStore>,
        PdfCardRenderer,
    > {
        DownloadCardUsecase::new(self.session(), self.registrants(), PdfCardRenderer::new())
    }

    fn admin(&self) -> AdminUsecase<KvRegistrantRepository<FileStore>> {
        AdminUsecase::new(self.registrants())
    }

    fn export(&self) -> ExportRegistrantsUsecase<KvRegistrantRepository<FileStore>> {
        ExportRegistrantsUsecase::new(self.registrants())
    }

    fn session(&self) -> StoreSessionManager<FileStore> {
        StoreSessionManager::new(self.store.clone())
    }

    fn registrants(&self) -> KvRegistrantRepository<FileStore> {
        KvRegistrantRepository::new(self.store.clone())
    }

    fn credentials(&self) -> KvCredentialRepository<FileStore> {
        KvCredentialRepository::new(self.store.clone())
    }

    /// Register bypassing the signup checks, with a fake stored hash.
    /// Keeps tests that never exercise authentication off the Argon2 path.
    async fn seed(&self, nom: &str, tel: &str, email: &str) -> Registrant {
        let allocator = StoreSequenceAllocator::new(self.store.clone(), "DTM");
        KvRegistrationRepository::new(self.store.clone(), allocator)
            .register(
                &draft(nom, tel, email),
                HashedPassword::new("$argon2id$seeded".to_string()),
            )
            .await
            .unwrap()
    }

    fn credential_count(&self) -> usize {
        let raw = self.store.get(CREDENTIALS_KEY).unwrap().unwrap_or_default();
        serde_json::from_str::<serde_json::Value>(&raw)
            .ok()
            .and_then(|v| v.as_array().map(Vec::len))
            .unwrap_or(0)
    }
}

fn draft(nom: &str, tel: &str, email: &str) -> RegistrantDraft {
    RegistrantDraft {
        nom: nom.to_string(),
        prenom: "Awa".to_string(),
        dob: "14/03/1999".to_string(),
        lieu_naiss: "Touba".to_string(),
        sexe: "F".to_string(),
        nationalite: "Sénégalaise".to_string(),
        tel: tel.to_string(),
        email: email.to_string(),
        adresse: "Dakar".to_string(),
        niveau: "Licence 3".to_string(),
        password: "secret1".to_string(),
        password_confirm: "secret1".to_string(),
        consent: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn first_signup_of_the_year_gets_matricule_0001() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());

    let registrant = portal
        .signup()
        .signup(draft("Ndao", "771234567", "awa@x.com"))
        .await
        .unwrap();

    let year = chrono::Local::now().year();
    assert_eq!(registrant.matricule().as_str(), format!("DTM-{year}-0001"));

    let second = portal.seed("Diop", "781234567", "moussa@x.com").await;
    assert_eq!(second.matricule().as_str(), format!("DTM-{year}-0002"));
}

#[tokio::test]
async fn duplicate_contact_details_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    portal.seed("Ndao", "771234567", "awa@x.com").await;

    let same_phone = draft("Diop", "771234567", "autre@x.com");
    let err = portal.signup().signup(same_phone).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Repository(RepositoryError::Duplicate("tel"))
    ));

    let same_email = draft("Diop", "781234567", "awa@x.com");
    let err = portal.signup().signup(same_email).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Repository(RepositoryError::Duplicate("email"))
    ));

    assert_eq!(portal.admin().list().await.unwrap().len(), 1);
    assert_eq!(portal.credential_count(), 1);
}

#[tokio::test]
async fn login_and_logout_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    let member = portal
        .signup()
        .signup(draft("Ndao", "771234567", "awa@x.com"))
        .await
        .unwrap();

    let id = portal.login().login("awa@x.com", "secret1").await.unwrap();
    assert_eq!(&id, member.id());
    assert_eq!(portal.session().current().await.unwrap().as_ref(), Some(member.id()));

    portal.session().logout().await.unwrap();
    assert!(portal.session().current().await.unwrap().is_none());

    // logging out twice stays a no-op
    portal.session().logout().await.unwrap();
    assert!(portal.session().current().await.unwrap().is_none());
}

#[tokio::test]
async fn wrong_password_leaves_the_session_empty() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    portal
        .signup()
        .signup(draft("Ndao", "771234567", "awa@x.com"))
        .await
        .unwrap();

    let err = portal
        .login()
        .login("awa@x.com", "mauvais")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::AuthenticationFailed));
    assert!(portal.session().current().await.unwrap().is_none());
}

#[tokio::test]
async fn profile_edit_keeps_the_identity_fields() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    let member = portal.seed("Ndao", "771234567", "awa@x.com").await;
    portal.session().login(member.id()).await.unwrap();

    let updated = portal
        .update_profile()
        .update(RegistrantUpdate {
            adresse: Some("Thiès".to_string()),
            niveau: Some("Master 1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.adresse(), "Thiès");
    assert_eq!(updated.niveau(), "Master 1");
    assert_eq!(updated.id(), member.id());
    assert_eq!(updated.matricule(), member.matricule());
    assert_eq!(updated.created_at(), member.created_at());

    let shown = portal.show_profile().show().await.unwrap();
    assert_eq!(shown.adresse(), "Thiès");
}

#[tokio::test]
async fn changing_the_email_moves_the_login_to_the_new_address() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    portal
        .signup()
        .signup(draft("Ndao", "771234567", "awa@x.com"))
        .await
        .unwrap();
    portal.login().login("awa@x.com", "secret1").await.unwrap();

    portal
        .update_profile()
        .update(RegistrantUpdate {
            email: Some("awa.ndao@y.sn".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = portal
        .login()
        .login("awa@x.com", "secret1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AuthenticationFailed));

    portal
        .login()
        .login("awa.ndao@y.sn", "secret1")
        .await
        .unwrap();
}

#[tokio::test]
async fn change_password_requires_the_current_one_and_six_characters() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    portal
        .signup()
        .signup(draft("Ndao", "771234567", "awa@x.com"))
        .await
        .unwrap();
    portal.login().login("awa@x.com", "secret1").await.unwrap();

    let err = portal
        .change_password()
        .change_password("secret1", "ab")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PasswordTooShort));

    // the stored hash is unchanged, the old password still logs in
    portal.login().login("awa@x.com", "secret1").await.unwrap();

    portal
        .change_password()
        .change_password("secret1", "nouveau1")
        .await
        .unwrap();

    let err = portal
        .login()
        .login("awa@x.com", "secret1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AuthenticationFailed));
    portal.login().login("awa@x.com", "nouveau1").await.unwrap();
}

#[tokio::test]
async fn deleting_a_member_removes_their_login_too() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    let first = portal.seed("Ndao", "771234567", "awa@x.com").await;
    portal.seed("Diop", "781234567", "moussa@x.com").await;

    portal.admin().delete(first.id()).await.unwrap();

    let members = portal.admin().list().await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].nom(), "Diop");
    assert_eq!(portal.credential_count(), 1);
    assert!(portal
        .credentials()
        .find_by_username("awa@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn card_download_is_a_pdf_named_after_the_matricule() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    let member = portal.seed("Ndao", "771234567", "awa@x.com").await;
    portal.session().login(member.id()).await.unwrap();

    let card = portal.download_card().download().await.unwrap();

    assert_eq!(card.file_name, format!("carte_{}.pdf", member.matricule()));
    assert!(card.bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn export_covers_every_member_without_the_photo_payload() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    let mut with_photo = draft("Ndao", "771234567", "awa@x.com");
    with_photo.photo_data = "data:image/png;base64,iVBORw0KGgo=".to_string();
    let allocator = StoreSequenceAllocator::new(portal.store.clone(), "DTM");
    KvRegistrationRepository::new(portal.store.clone(), allocator)
        .register(&with_photo, HashedPassword::new("$argon2id$seeded".to_string()))
        .await
        .unwrap();
    portal.seed("Diop", "781234567", "moussa@x.com").await;

    let export = portal.export().export().await.unwrap();

    assert_eq!(export.row_count, 2);
    let lines: Vec<&str> = export.csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Id,Matricule,Nom"));
    assert!(lines[1].contains("Ndao"));
    assert!(lines[2].contains("Diop"));
    assert!(!export.csv.contains("base64"));
}

#[tokio::test]
async fn the_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let member = {
        let portal = Portal::open(dir.path());
        let member = portal.seed("Ndao", "771234567", "awa@x.com").await;
        portal.session().login(member.id()).await.unwrap();
        member
    };

    let reopened = Portal::open(dir.path());
    assert_eq!(
        reopened.session().current().await.unwrap().as_ref(),
        Some(member.id())
    );
    let profile = reopened.show_profile().show().await.unwrap();
    assert_eq!(profile.nom(), "Ndao");
}

#[tokio::test]
async fn peeking_the_next_matricule_consumes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let portal = Portal::open(dir.path());
    portal.seed("Ndao", "771234567", "awa@x.com").await;

    let allocator = StoreSequenceAllocator::new(portal.store.clone(), "DTM");
    let peeked = allocator.peek().await.unwrap();
    assert_eq!(peeked, allocator.peek().await.unwrap());

    let issued = portal.seed("Diop", "781234567", "moussa@x.com").await;
    assert_eq!(issued.matricule(), &peeked);
}
