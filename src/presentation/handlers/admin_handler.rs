use std::fs;
use std::path::Path;

use tabled::{builder::Builder, settings::Style};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::registrant::{RegistrantId, RegistrantUpdate},
    repositories::registrant_repository::RegistrantRepository,
};
use crate::usecase::{
    admin_usecase::AdminUsecase, export_registrants_usecase::ExportRegistrantsUsecase,
};

/// Per-invocation admin gate. Compares the supplied secret against the
/// configured one and grants nothing persistent.
pub fn ensure_admin(supplied: &str, expected: &str) -> Result<(), DomainError> {
    if supplied != expected {
        return Err(DomainError::AuthenticationFailed);
    }
    Ok(())
}

pub async fn list<R: RegistrantRepository>(
    usecase: &AdminUsecase<R>,
) -> Result<(), DomainError> {
    let members = usecase.list().await?;
    if members.is_empty() {
        println!("Aucun inscrit.");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Matricule", "Nom", "Prénom", "Téléphone", "Email"]);
    for member in &members {
        builder.push_record([
            member.id().as_str(),
            member.matricule().as_str(),
            member.nom(),
            member.prenom(),
            member.tel(),
            member.email(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    println!("{table}");
    Ok(())
}

pub async fn edit<R: RegistrantRepository>(
    usecase: &AdminUsecase<R>,
    id: RegistrantId,
    changes: RegistrantUpdate,
) -> Result<(), DomainError> {
    let updated = usecase.edit(&id, changes).await?;
    println!("Profil mis à jour : {}", updated.matricule());
    Ok(())
}

pub async fn delete<R: RegistrantRepository>(
    usecase: &AdminUsecase<R>,
    id: RegistrantId,
) -> Result<(), DomainError> {
    usecase.delete(&id).await?;
    println!("Inscrit supprimé.");
    Ok(())
}

pub async fn export<R: RegistrantRepository>(
    usecase: &ExportRegistrantsUsecase<R>,
    output: &Path,
) -> Result<(), DomainError> {
    let export = usecase.export().await?;
    fs::write(output, export.csv).map_err(|e| RepositoryError::Storage(e.to_string()))?;
    println!(
        "Export écrit : {} ({} inscrits)",
        output.display(),
        export.row_count
    );
    Ok(())
}
