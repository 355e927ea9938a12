use crate::domain::{
    error::DomainError,
    models::registrant::{Registrant, RegistrantDraft},
    repositories::registration_repository::RegistrationRepository,
    services::password_service::{MIN_PASSWORD_LEN, PasswordHasher},
};

pub struct SignupUsecase<R: RegistrationRepository, P: PasswordHasher> {
    registration_repository: R,
    password_hasher: P,
}

impl<R: RegistrationRepository, P: PasswordHasher> SignupUsecase<R, P> {
    pub fn new(registration_repository: R, password_hasher: P) -> Self {
        Self {
            registration_repository,
            password_hasher,
        }
    }

    /// Validates the draft, hashes the password and registers the new
    /// member together with their credential. Nothing is written when any
    /// check fails.
    pub async fn signup(&self, draft: RegistrantDraft) -> Result<Registrant, DomainError> {
        validate(&draft)?;

        let password_hash = self.password_hasher.hash(&draft.password)?;

        let registrant = self
            .registration_repository
            .register(&draft, password_hash)
            .await?;

        Ok(registrant)
    }
}

/// The identity and contact block is mandatory; academic and free-text
/// fields stay optional. Whitespace-only entries count as empty.
fn validate(draft: &RegistrantDraft) -> Result<(), DomainError> {
    let required: [(&'static str, &str); 9] = [
        ("nom", &draft.nom),
        ("prenom", &draft.prenom),
        ("dob", &draft.dob),
        ("lieu_naiss", &draft.lieu_naiss),
        ("sexe", &draft.sexe),
        ("nationalite", &draft.nationalite),
        ("tel", &draft.tel),
        ("email", &draft.email),
        ("adresse", &draft.adresse),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(DomainError::MissingField(name));
        }
    }
    if draft.password != draft.password_confirm {
        return Err(DomainError::PasswordMismatch);
    }
    if draft.password.len() < MIN_PASSWORD_LEN {
        return Err(DomainError::PasswordTooShort);
    }
    if !draft.consent {
        return Err(DomainError::ConsentRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::models::credential::HashedPassword;
    use crate::infrastructure::registration_repository::KvRegistrationRepository;
    use crate::infrastructure::sequence_allocator::StoreSequenceAllocator;
    use crate::infrastructure::store::{KeyValueStore, MemoryStore, REGISTRANTS_KEY};

    #[derive(Clone)]
    struct MockPasswordHasher;

    impl PasswordHasher for MockPasswordHasher {
        fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
            Ok(HashedPassword::new(format!("hashed:{plain_password}")))
        }

        fn verify(
            &self,
            plain_password: &str,
            hashed_password: &HashedPassword,
        ) -> Result<bool, DomainError> {
            Ok(hashed_password.as_str() == format!("hashed:{plain_password}"))
        }
    }

    fn usecase(
        store: &MemoryStore,
    ) -> SignupUsecase<KvRegistrationRepository<MemoryStore>, MockPasswordHasher> {
        let allocator = StoreSequenceAllocator::new(store.clone(), "DTM");
        SignupUsecase::new(
            KvRegistrationRepository::new(store.clone(), allocator),
            MockPasswordHasher,
        )
    }

    fn valid_draft() -> RegistrantDraft {
        RegistrantDraft {
            nom: "Ndao".to_string(),
            prenom: "Awa".to_string(),
            dob: "14/03/1999".to_string(),
            lieu_naiss: "Touba".to_string(),
            sexe: "F".to_string(),
            nationalite: "Sénégalaise".to_string(),
            tel: "771234567".to_string(),
            email: "awa@x.com".to_string(),
            adresse: "Dakar".to_string(),
            password: "secret1".to_string(),
            password_confirm: "secret1".to_string(),
            consent: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn signup_creates_the_registrant() {
        let store = MemoryStore::new();
        let registrant = usecase(&store).signup(valid_draft()).await.unwrap();

        assert!(registrant.matricule().as_str().ends_with("-0001"));
        assert!(!registrant.id().as_str().is_empty());
        assert_eq!(registrant.nom(), "Ndao");
    }

    #[rstest]
    #[case::nom("nom")]
    #[case::prenom("prenom")]
    #[case::dob("dob")]
    #[case::lieu_naiss("lieu_naiss")]
    #[case::sexe("sexe")]
    #[case::nationalite("nationalite")]
    #[case::tel("tel")]
    #[case::email("email")]
    #[case::adresse("adresse")]
    #[tokio::test]
    async fn empty_required_field_is_rejected(#[case] name: &'static str) {
        let mut draft = valid_draft();
        match name {
            "nom" => draft.nom = "   ".to_string(),
            "prenom" => draft.prenom = String::new(),
            "dob" => draft.dob = String::new(),
            "lieu_naiss" => draft.lieu_naiss = " ".to_string(),
            "sexe" => draft.sexe = String::new(),
            "nationalite" => draft.nationalite = String::new(),
            "tel" => draft.tel = "\t".to_string(),
            "email" => draft.email = String::new(),
            "adresse" => draft.adresse = String::new(),
            _ => unreachable!(),
        }

        let err = usecase(&MemoryStore::new()).signup(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::MissingField(f) if f == name));
    }

    #[tokio::test]
    async fn mismatched_password_entries_are_rejected() {
        let draft = RegistrantDraft {
            password_confirm: "secret2".to_string(),
            ..valid_draft()
        };
        let err = usecase(&MemoryStore::new()).signup(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::PasswordMismatch));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let draft = RegistrantDraft {
            password: "ab".to_string(),
            password_confirm: "ab".to_string(),
            ..valid_draft()
        };
        let err = usecase(&MemoryStore::new()).signup(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::PasswordTooShort));
    }

    #[tokio::test]
    async fn missing_consent_is_rejected() {
        let draft = RegistrantDraft {
            consent: false,
            ..valid_draft()
        };
        let err = usecase(&MemoryStore::new()).signup(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::ConsentRequired));
    }

    #[tokio::test]
    async fn failed_validation_writes_nothing() {
        let store = MemoryStore::new();
        let draft = RegistrantDraft {
            consent: false,
            ..valid_draft()
        };

        usecase(&store).signup(draft).await.unwrap_err();
        assert!(store.get(REGISTRANTS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_phone_is_rejected() {
        let store = MemoryStore::new();
        let usecase = usecase(&store);
        usecase.signup(valid_draft()).await.unwrap();

        let second = RegistrantDraft {
            email: "autre@x.com".to_string(),
            ..valid_draft()
        };
        let err = usecase.signup(second).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Repository(crate::domain::error::RepositoryError::Duplicate("tel"))
        ));
    }
}
