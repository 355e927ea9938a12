use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::registrant::{RegistrantDraft, RegistrantUpdate};

/// Portail des membres du Dahira Touba Médecine
#[derive(Parser, Debug)]
#[command(name = "dahira")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// S'inscrire comme nouveau membre
    Signup(SignupArgs),

    /// Se connecter avec son adresse e-mail
    Login {
        /// Adresse e-mail utilisée à l'inscription
        #[arg(long)]
        email: String,

        /// Mot de passe
        #[arg(long)]
        password: String,
    },

    /// Se déconnecter
    Logout,

    /// Afficher le membre actuellement connecté
    Whoami,

    /// Consulter ou modifier son profil
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Changer son mot de passe
    Password {
        /// Mot de passe actuel
        #[arg(long)]
        current: String,

        /// Nouveau mot de passe (6 caractères minimum)
        #[arg(long)]
        new: String,
    },

    /// Télécharger sa carte de membre (PDF)
    Card {
        /// Dossier de destination
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Afficher le prochain matricule sans le consommer
    Matricule,

    /// Commandes d'administration
    Admin(AdminArgs),
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Afficher son profil
    Show,

    /// Modifier son profil
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct AdminArgs {
    /// Mot de passe administrateur
    #[arg(long)]
    pub password: String,

    #[command(subcommand)]
    pub command: AdminCommands,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Lister tous les inscrits
    #[command(alias = "ls")]
    List,

    /// Modifier la fiche d'un inscrit
    Edit {
        /// Identifiant de l'inscrit
        #[arg(long)]
        id: String,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Supprimer un inscrit et son accès
    Delete {
        /// Identifiant de l'inscrit
        #[arg(long)]
        id: String,
    },

    /// Exporter les inscrits en CSV
    Export {
        /// Fichier de sortie
        #[arg(long, default_value = "inscrits.csv")]
        output: PathBuf,
    },
}

/// Formulaire d'inscription. Le bloc identité/contact est obligatoire,
/// le volet académique est facultatif.
#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Nom de famille
    #[arg(long)]
    pub nom: String,

    /// Prénom
    #[arg(long)]
    pub prenom: String,

    /// Date de naissance (JJ/MM/AAAA)
    #[arg(long)]
    pub dob: String,

    /// Lieu de naissance
    #[arg(long)]
    pub lieu_naiss: String,

    /// Sexe
    #[arg(long)]
    pub sexe: String,

    /// Nationalité
    #[arg(long)]
    pub nationalite: String,

    /// Numéro de téléphone
    #[arg(long)]
    pub tel: String,

    /// Adresse e-mail (servira d'identifiant de connexion)
    #[arg(long)]
    pub email: String,

    /// Adresse de résidence
    #[arg(long)]
    pub adresse: String,

    /// Statut au sein du dahira
    #[arg(long, default_value = "")]
    pub statut_dahira: String,

    /// Photo (data URL)
    #[arg(long, default_value = "")]
    pub photo_data: String,

    /// Statut (étudiant, professionnel, ...)
    #[arg(long, default_value = "")]
    pub statut: String,

    /// Université
    #[arg(long, default_value = "")]
    pub universite: String,

    /// Niveau d'études
    #[arg(long, default_value = "")]
    pub niveau: String,

    /// Spécialité
    #[arg(long, default_value = "")]
    pub specialite: String,

    /// Année d'obtention du diplôme
    #[arg(long, default_value = "")]
    pub annee_diplome: String,

    /// Disponibilités
    #[arg(long, default_value = "")]
    pub disponibilites: String,

    /// Compétences
    #[arg(long, default_value = "")]
    pub competences: String,

    /// Domaine
    #[arg(long, default_value = "")]
    pub domaine: String,

    /// Signature (data URL)
    #[arg(long, default_value = "")]
    pub signature: String,

    /// Mot de passe (6 caractères minimum)
    #[arg(long)]
    pub password: String,

    /// Confirmation du mot de passe
    #[arg(long)]
    pub password_confirm: String,

    /// Accepter le règlement intérieur
    #[arg(long)]
    pub consent: bool,
}

impl From<SignupArgs> for RegistrantDraft {
    fn from(args: SignupArgs) -> Self {
        Self {
            nom: args.nom,
            prenom: args.prenom,
            dob: args.dob,
            lieu_naiss: args.lieu_naiss,
            sexe: args.sexe,
            nationalite: args.nationalite,
            tel: args.tel,
            email: args.email,
            adresse: args.adresse,
            statut_dahira: args.statut_dahira,
            photo_data: args.photo_data,
            statut: args.statut,
            universite: args.universite,
            niveau: args.niveau,
            specialite: args.specialite,
            annee_diplome: args.annee_diplome,
            disponibilites: args.disponibilites,
            competences: args.competences,
            domaine: args.domaine,
            signature: args.signature,
            password: args.password,
            password_confirm: args.password_confirm,
            consent: args.consent,
        }
    }
}

/// Modification partielle d'un profil: seuls les champs fournis changent.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Nom de famille
    #[arg(long)]
    pub nom: Option<String>,

    /// Prénom
    #[arg(long)]
    pub prenom: Option<String>,

    /// Date de naissance (JJ/MM/AAAA)
    #[arg(long)]
    pub dob: Option<String>,

    /// Lieu de naissance
    #[arg(long)]
    pub lieu_naiss: Option<String>,

    /// Sexe
    #[arg(long)]
    pub sexe: Option<String>,

    /// Nationalité
    #[arg(long)]
    pub nationalite: Option<String>,

    /// Numéro de téléphone
    #[arg(long)]
    pub tel: Option<String>,

    /// Adresse e-mail (l'identifiant de connexion suivra)
    #[arg(long)]
    pub email: Option<String>,

    /// Adresse de résidence
    #[arg(long)]
    pub adresse: Option<String>,

    /// Statut au sein du dahira
    #[arg(long)]
    pub statut_dahira: Option<String>,

    /// Photo (data URL)
    #[arg(long)]
    pub photo_data: Option<String>,

    /// Statut (étudiant, professionnel, ...)
    #[arg(long)]
    pub statut: Option<String>,

    /// Université
    #[arg(long)]
    pub universite: Option<String>,

    /// Niveau d'études
    #[arg(long)]
    pub niveau: Option<String>,

    /// Spécialité
    #[arg(long)]
    pub specialite: Option<String>,

    /// Année d'obtention du diplôme
    #[arg(long)]
    pub annee_diplome: Option<String>,

    /// Disponibilités
    #[arg(long)]
    pub disponibilites: Option<String>,

    /// Compétences
    #[arg(long)]
    pub competences: Option<String>,

    /// Domaine
    #[arg(long)]
    pub domaine: Option<String>,

    /// Signature (data URL)
    #[arg(long)]
    pub signature: Option<String>,
}

impl From<EditArgs> for RegistrantUpdate {
    fn from(args: EditArgs) -> Self {
        Self {
            nom: args.nom,
            prenom: args.prenom,
            dob: args.dob,
            lieu_naiss: args.lieu_naiss,
            sexe: args.sexe,
            nationalite: args.nationalite,
            tel: args.tel,
            email: args.email,
            adresse: args.adresse,
            statut_dahira: args.statut_dahira,
            photo_data: args.photo_data,
            statut: args.statut,
            universite: args.universite,
            niveau: args.niveau,
            specialite: args.specialite,
            annee_diplome: args.annee_diplome,
            disponibilites: args.disponibilites,
            competences: args.competences,
            domaine: args.domaine,
            signature: args.signature,
        }
    }
}
