pub mod admin_handler;
pub mod member_handler;

use crate::domain::error::{DomainError, RepositoryError};

/// One French sentence per failure, mirroring the portal's alert texts.
/// The technical detail stays in the logs.
pub fn user_message(error: &DomainError) -> String {
    match error {
        DomainError::AuthenticationFailed => "Identifiants incorrects.".to_string(),
        DomainError::NotLoggedIn => "Aucun utilisateur connecté.".to_string(),
        DomainError::MissingField(name) => format!("Champ obligatoire manquant : {name}"),
        DomainError::PasswordMismatch => {
            "Les deux mots de passe ne correspondent pas.".to_string()
        }
        DomainError::PasswordTooShort => {
            "Mot de passe trop court (6 caractères minimum).".to_string()
        }
        DomainError::ConsentRequired => {
            "Vous devez accepter le règlement intérieur.".to_string()
        }
        DomainError::CardRender(_) => "Erreur lors de la génération de la carte.".to_string(),
        DomainError::Repository(RepositoryError::NotFound) => "Profil introuvable.".to_string(),
        DomainError::Repository(RepositoryError::Duplicate("tel")) => {
            "Ce numéro de téléphone est déjà utilisé.".to_string()
        }
        DomainError::Repository(RepositoryError::Duplicate(_)) => {
            "Cette adresse e-mail est déjà utilisée.".to_string()
        }
        DomainError::Repository(RepositoryError::Storage(reason)) => {
            format!("Erreur de stockage : {reason}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_failure_gets_a_french_sentence() {
        assert_eq!(
            user_message(&DomainError::NotLoggedIn),
            "Aucun utilisateur connecté."
        );
        assert_eq!(
            user_message(&DomainError::MissingField("nom")),
            "Champ obligatoire manquant : nom"
        );
        assert_eq!(
            user_message(&DomainError::Repository(RepositoryError::Duplicate("tel"))),
            "Ce numéro de téléphone est déjà utilisé."
        );
        assert_eq!(
            user_message(&DomainError::Repository(RepositoryError::Duplicate("email"))),
            "Cette adresse e-mail est déjà utilisée."
        );
    }
}
