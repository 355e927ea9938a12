use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a registrant. Generated once at signup, never
/// reused, not derivable from any profile field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrantId(String);

impl RegistrantId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RegistrantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RegistrantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-facing membership number, `PREFIX-YYYY-NNNN`. Unique, assigned
/// once by the sequence allocator, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matricule(String);

impl Matricule {
    pub fn compose(prefix: &str, year: i32, number: u32) -> Self {
        Self(format!("{prefix}-{year}-{number:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Matricule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One membership application/profile. Fixed schema: every field is always
/// present in the stored form, defaulting to the empty string, so records
/// written by older sparse front-ends still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Registrant {
    id: RegistrantId,
    matricule: Matricule,
    nom: String,
    prenom: String,
    dob: String,
    lieu_naiss: String,
    sexe: String,
    nationalite: String,
    tel: String,
    email: String,
    adresse: String,
    statut_dahira: String,
    #[serde(rename = "photoData")]
    photo_data: String,
    statut: String,
    universite: String,
    niveau: String,
    specialite: String,
    annee_diplome: String,
    disponibilites: String,
    competences: String,
    domaine: String,
    signature: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl Default for Registrant {
    fn default() -> Self {
        Self {
            id: RegistrantId(String::new()),
            matricule: Matricule(String::new()),
            nom: String::new(),
            prenom: String::new(),
            dob: String::new(),
            lieu_naiss: String::new(),
            sexe: String::new(),
            nationalite: String::new(),
            tel: String::new(),
            email: String::new(),
            adresse: String::new(),
            statut_dahira: String::new(),
            photo_data: String::new(),
            statut: String::new(),
            universite: String::new(),
            niveau: String::new(),
            specialite: String::new(),
            annee_diplome: String::new(),
            disponibilites: String::new(),
            competences: String::new(),
            domaine: String::new(),
            signature: String::new(),
            created_at: DateTime::UNIX_EPOCH,
        }
    }
}

impl Registrant {
    /// Build a record from a validated signup draft. The password entries
    /// and the consent flag of the draft never reach the stored record.
    pub fn from_draft(
        draft: &RegistrantDraft,
        id: RegistrantId,
        matricule: Matricule,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            matricule,
            nom: draft.nom.clone(),
            prenom: draft.prenom.clone(),
            dob: draft.dob.clone(),
            lieu_naiss: draft.lieu_naiss.clone(),
            sexe: draft.sexe.clone(),
            nationalite: draft.nationalite.clone(),
            tel: draft.tel.clone(),
            email: draft.email.clone(),
            adresse: draft.adresse.clone(),
            statut_dahira: draft.statut_dahira.clone(),
            photo_data: draft.photo_data.clone(),
            statut: draft.statut.clone(),
            universite: draft.universite.clone(),
            niveau: draft.niveau.clone(),
            specialite: draft.specialite.clone(),
            annee_diplome: draft.annee_diplome.clone(),
            disponibilites: draft.disponibilites.clone(),
            competences: draft.competences.clone(),
            domaine: draft.domaine.clone(),
            signature: draft.signature.clone(),
            created_at,
        }
    }

    /// Merge a partial edit into this record. `id`, `matricule` and
    /// `created_at` have no counterpart in [`RegistrantUpdate`] and stay
    /// untouched.
    pub fn apply(&mut self, changes: RegistrantUpdate) {
        let RegistrantUpdate {
            nom,
            prenom,
            dob,
            lieu_naiss,
            sexe,
            nationalite,
            tel,
            email,
            adresse,
            statut_dahira,
            photo_data,
            statut,
            universite,
            niveau,
            specialite,
            annee_diplome,
            disponibilites,
            competences,
            domaine,
            signature,
        } = changes;

        if let Some(v) = nom {
            self.nom = v;
        }
        if let Some(v) = prenom {
            self.prenom = v;
        }
        if let Some(v) = dob {
            self.dob = v;
        }
        if let Some(v) = lieu_naiss {
            self.lieu_naiss = v;
        }
        if let Some(v) = sexe {
            self.sexe = v;
        }
        if let Some(v) = nationalite {
            self.nationalite = v;
        }
        if let Some(v) = tel {
            self.tel = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = adresse {
            self.adresse = v;
        }
        if let Some(v) = statut_dahira {
            self.statut_dahira = v;
        }
        if let Some(v) = photo_data {
            self.photo_data = v;
        }
        if let Some(v) = statut {
            self.statut = v;
        }
        if let Some(v) = universite {
            self.universite = v;
        }
        if let Some(v) = niveau {
            self.niveau = v;
        }
        if let Some(v) = specialite {
            self.specialite = v;
        }
        if let Some(v) = annee_diplome {
            self.annee_diplome = v;
        }
        if let Some(v) = disponibilites {
            self.disponibilites = v;
        }
        if let Some(v) = competences {
            self.competences = v;
        }
        if let Some(v) = domaine {
            self.domaine = v;
        }
        if let Some(v) = signature {
            self.signature = v;
        }
    }

    pub fn id(&self) -> &RegistrantId {
        &self.id
    }
    pub fn matricule(&self) -> &Matricule {
        &self.matricule
    }
    pub fn nom(&self) -> &str {
        &self.nom
    }
    pub fn prenom(&self) -> &str {
        &self.prenom
    }
    pub fn dob(&self) -> &str {
        &self.dob
    }
    pub fn lieu_naiss(&self) -> &str {
        &self.lieu_naiss
    }
    pub fn sexe(&self) -> &str {
        &self.sexe
    }
    pub fn nationalite(&self) -> &str {
        &self.nationalite
    }
    pub fn tel(&self) -> &str {
        &self.tel
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn adresse(&self) -> &str {
        &self.adresse
    }
    pub fn statut_dahira(&self) -> &str {
        &self.statut_dahira
    }
    pub fn photo_data(&self) -> &str {
        &self.photo_data
    }
    pub fn statut(&self) -> &str {
        &self.statut
    }
    pub fn universite(&self) -> &str {
        &self.universite
    }
    pub fn niveau(&self) -> &str {
        &self.niveau
    }
    pub fn specialite(&self) -> &str {
        &self.specialite
    }
    pub fn annee_diplome(&self) -> &str {
        &self.annee_diplome
    }
    pub fn disponibilites(&self) -> &str {
        &self.disponibilites
    }
    pub fn competences(&self) -> &str {
        &self.competences
    }
    pub fn domaine(&self) -> &str {
        &self.domaine
    }
    pub fn signature(&self) -> &str {
        &self.signature
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Signup input: the full profile plus the two password entries and the
/// consent flag. Which fields must be non-empty is the signup operation's
/// contract, not the draft's.
#[derive(Debug, Clone, Default)]
pub struct RegistrantDraft {
    pub nom: String,
    pub prenom: String,
    pub dob: String,
    pub lieu_naiss: String,
    pub sexe: String,
    pub nationalite: String,
    pub tel: String,
    pub email: String,
    pub adresse: String,
    pub statut_dahira: String,
    pub photo_data: String,
    pub statut: String,
    pub universite: String,
    pub niveau: String,
    pub specialite: String,
    pub annee_diplome: String,
    pub disponibilites: String,
    pub competences: String,
    pub domaine: String,
    pub signature: String,
    pub password: String,
    pub password_confirm: String,
    pub consent: bool,
}

/// Partial profile edit. Absent fields are left as they are; the identity
/// fields cannot be expressed here at all.
#[derive(Debug, Clone, Default)]
pub struct RegistrantUpdate {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub dob: Option<String>,
    pub lieu_naiss: Option<String>,
    pub sexe: Option<String>,
    pub nationalite: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub adresse: Option<String>,
    pub statut_dahira: Option<String>,
    pub photo_data: Option<String>,
    pub statut: Option<String>,
    pub universite: Option<String>,
    pub niveau: Option<String>,
    pub specialite: Option<String>,
    pub annee_diplome: Option<String>,
    pub disponibilites: Option<String>,
    pub competences: Option<String>,
    pub domaine: Option<String>,
    pub signature: Option<String>,
}
