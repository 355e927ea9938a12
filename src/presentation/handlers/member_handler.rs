use std::fs;
use std::path::Path;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::registrant::{Registrant, RegistrantDraft, RegistrantUpdate},
    repositories::{
        credential_repository::CredentialRepository,
        registrant_repository::RegistrantRepository,
        registration_repository::RegistrationRepository,
    },
    services::{
        card_renderer::CardRenderer, password_service::PasswordHasher,
        sequence_service::MatriculeAllocator, session_service::SessionManager,
    },
};
use crate::usecase::{
    change_password_usecase::ChangePasswordUsecase, download_card_usecase::DownloadCardUsecase,
    login_usecase::LoginUsecase, show_profile_usecase::ShowProfileUsecase,
    signup_usecase::SignupUsecase, update_profile_usecase::UpdateProfileUsecase,
};

pub async fn signup<R: RegistrationRepository, P: PasswordHasher>(
    usecase: &SignupUsecase<R, P>,
    draft: RegistrantDraft,
) -> Result<(), DomainError> {
    let registrant = usecase.signup(draft).await?;
    println!("Inscription réussie. Matricule : {}", registrant.matricule());
    Ok(())
}

pub async fn login<C: CredentialRepository, S: SessionManager, P: PasswordHasher>(
    usecase: &LoginUsecase<C, S, P>,
    email: &str,
    password: &str,
) -> Result<(), DomainError> {
    usecase.login(email, password).await?;
    println!("Connexion réussie.");
    Ok(())
}

pub async fn logout<S: SessionManager>(session_manager: &S) -> Result<(), DomainError> {
    session_manager.logout().await?;
    println!("Déconnexion réussie.");
    Ok(())
}

/// Answers even when nobody is logged in; anonymity is a normal state
/// here, not a failure.
pub async fn whoami<S: SessionManager, R: RegistrantRepository>(
    usecase: &ShowProfileUsecase<S, R>,
) -> Result<(), DomainError> {
    match usecase.show().await {
        Ok(registrant) => {
            println!(
                "Connecté : {} {} ({})",
                registrant.prenom(),
                registrant.nom(),
                registrant.matricule()
            );
            Ok(())
        }
        Err(DomainError::NotLoggedIn) => {
            println!("Aucun utilisateur connecté.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

pub async fn show_profile<S: SessionManager, R: RegistrantRepository>(
    usecase: &ShowProfileUsecase<S, R>,
) -> Result<(), DomainError> {
    let registrant = usecase.show().await?;
    print_profile(&registrant);
    Ok(())
}

pub async fn edit_profile<S: SessionManager, R: RegistrantRepository>(
    usecase: &UpdateProfileUsecase<S, R>,
    changes: RegistrantUpdate,
) -> Result<(), DomainError> {
    usecase.update(changes).await?;
    println!("Profil mis à jour.");
    Ok(())
}

pub async fn change_password<S: SessionManager, C: CredentialRepository, P: PasswordHasher>(
    usecase: &ChangePasswordUsecase<S, C, P>,
    current_password: &str,
    new_password: &str,
) -> Result<(), DomainError> {
    usecase
        .change_password(current_password, new_password)
        .await?;
    println!("Mot de passe modifié.");
    Ok(())
}

pub async fn download_card<S: SessionManager, R: RegistrantRepository, C: CardRenderer>(
    usecase: &DownloadCardUsecase<S, R, C>,
    output_dir: &Path,
) -> Result<(), DomainError> {
    let card = usecase.download().await?;
    let path = output_dir.join(&card.file_name);
    fs::write(&path, &card.bytes).map_err(|e| RepositoryError::Storage(e.to_string()))?;
    println!("Carte enregistrée : {}", path.display());
    Ok(())
}

pub async fn next_matricule<A: MatriculeAllocator>(allocator: &A) -> Result<(), DomainError> {
    let matricule = allocator.peek().await?;
    println!("Prochain matricule : {matricule}");
    Ok(())
}

/// The photo and signature payloads are data URLs and stay out of the
/// terminal output.
fn print_profile(registrant: &Registrant) {
    let lines = [
        ("Matricule", registrant.matricule().as_str()),
        ("Nom", registrant.nom()),
        ("Prénom", registrant.prenom()),
        ("Date de naissance", registrant.dob()),
        ("Lieu de naissance", registrant.lieu_naiss()),
        ("Sexe", registrant.sexe()),
        ("Nationalité", registrant.nationalite()),
        ("Téléphone", registrant.tel()),
        ("Email", registrant.email()),
        ("Adresse", registrant.adresse()),
        ("Statut dahira", registrant.statut_dahira()),
        ("Statut", registrant.statut()),
        ("Université", registrant.universite()),
        ("Niveau", registrant.niveau()),
        ("Spécialité", registrant.specialite()),
        ("Année de diplôme", registrant.annee_diplome()),
        ("Disponibilités", registrant.disponibilites()),
        ("Compétences", registrant.competences()),
        ("Domaine", registrant.domaine()),
    ];
    for (label, value) in lines {
        println!("{label:<17} : {value}");
    }
    println!("{:<17} : {}", "Inscrit le", registrant.created_at().to_rfc3339());
}
