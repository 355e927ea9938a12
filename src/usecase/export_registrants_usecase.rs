use crate::domain::{
    error::DomainError, models::registrant::Registrant,
    repositories::registrant_repository::RegistrantRepository,
};

/// Header row of the admin export. Column order follows the stored record;
/// the photo and signature payloads are deliberately absent.
const HEADER: [&str; 21] = [
    "Id",
    "Matricule",
    "Nom",
    "Prénom",
    "Date de naissance",
    "Lieu de naissance",
    "Sexe",
    "Nationalité",
    "Téléphone",
    "Email",
    "Adresse",
    "Statut dahira",
    "Statut",
    "Université",
    "Niveau",
    "Spécialité",
    "Année de diplôme",
    "Disponibilités",
    "Compétences",
    "Domaine",
    "Date d'inscription",
];

/// The whole collection rendered as CSV, plus the number of data rows.
pub struct RegistrantsExport {
    pub csv: String,
    pub row_count: usize,
}

pub struct ExportRegistrantsUsecase<R: RegistrantRepository> {
    registrant_repository: R,
}

impl<R: RegistrantRepository> ExportRegistrantsUsecase<R> {
    pub fn new(registrant_repository: R) -> Self {
        Self {
            registrant_repository,
        }
    }

    /// Render every member as one CSV row, in insertion order. Consumes the
    /// collection read-only.
    pub async fn export(&self) -> Result<RegistrantsExport, DomainError> {
        let registrants = self.registrant_repository.list().await?;

        let mut csv = String::new();
        csv.push_str(&HEADER.join(","));
        csv.push('\n');
        for registrant in &registrants {
            csv.push_str(&row(registrant).join(","));
            csv.push('\n');
        }

        Ok(RegistrantsExport {
            csv,
            row_count: registrants.len(),
        })
    }
}

fn row(registrant: &Registrant) -> Vec<String> {
    [
        registrant.id().as_str(),
        registrant.matricule().as_str(),
        registrant.nom(),
        registrant.prenom(),
        registrant.dob(),
        registrant.lieu_naiss(),
        registrant.sexe(),
        registrant.nationalite(),
        registrant.tel(),
        registrant.email(),
        registrant.adresse(),
        registrant.statut_dahira(),
        registrant.statut(),
        registrant.universite(),
        registrant.niveau(),
        registrant.specialite(),
        registrant.annee_diplome(),
        registrant.disponibilites(),
        registrant.competences(),
        registrant.domaine(),
        &registrant.created_at().to_rfc3339(),
    ]
    .into_iter()
    .map(csv_field)
    .collect()
}

/// RFC 4180 quoting: only fields containing a separator, a quote or a line
/// break are wrapped, with embedded quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
