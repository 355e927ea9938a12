use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dahira_portal::domain::error::DomainError;
use dahira_portal::infrastructure::{
    argon2_password_hasher::Argon2PasswordHasher,
    credential_repository::KvCredentialRepository,
    pdf_card_renderer::PdfCardRenderer,
    registrant_repository::KvRegistrantRepository,
    registration_repository::KvRegistrationRepository,
    sequence_allocator::StoreSequenceAllocator,
    session_manager::StoreSessionManager,
    store::FileStore,
};
use dahira_portal::presentation::{
    cli::{AdminCommands, Cli, Commands, ProfileCommands},
    config::PortalConfig,
    handlers::{admin_handler, member_handler, user_message},
};
use dahira_portal::usecase::{
    admin_usecase::AdminUsecase, change_password_usecase::ChangePasswordUsecase,
    download_card_usecase::DownloadCardUsecase,
    export_registrants_usecase::ExportRegistrantsUsecase, login_usecase::LoginUsecase,
    show_profile_usecase::ShowProfileUsecase, signup_usecase::SignupUsecase,
    update_profile_usecase::UpdateProfileUsecase,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = PortalConfig::from_env();

    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let store = match FileStore::open(&config.data_dir) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Erreur de stockage : {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(cli, &config, store).await {
        tracing::debug!(error = %err, "commande échouée");
        eprintln!("{}", user_message(&err));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli, config: &PortalConfig, store: FileStore) -> Result<(), DomainError> {
    let allocator = StoreSequenceAllocator::new(store.clone(), config.matricule_prefix.as_str());
    let hasher = Argon2PasswordHasher::new();
    let session = StoreSessionManager::new(store.clone());
    let registrants = KvRegistrantRepository::new(store.clone());
    let credentials = KvCredentialRepository::new(store.clone());

    match cli.command {
        Commands::Signup(args) => {
            let registration = KvRegistrationRepository::new(store.clone(), allocator);
            let usecase = SignupUsecase::new(registration, hasher);
            member_handler::signup(&usecase, args.into()).await
        }
        Commands::Login { email, password } => {
            let usecase = LoginUsecase::new(credentials, session, hasher);
            member_handler::login(&usecase, &email, &password).await
        }
        Commands::Logout => member_handler::logout(&session).await,
        Commands::Whoami => {
            let usecase = ShowProfileUsecase::new(session, registrants);
            member_handler::whoami(&usecase).await
        }
        Commands::Profile(command) => match command {
            ProfileCommands::Show => {
                let usecase = ShowProfileUsecase::new(session, registrants);
                member_handler::show_profile(&usecase).await
            }
            ProfileCommands::Edit(args) => {
                let usecase = UpdateProfileUsecase::new(session, registrants);
                member_handler::edit_profile(&usecase, args.into()).await
            }
        },
        Commands::Password { current, new } => {
            let usecase = ChangePasswordUsecase::new(session, credentials, hasher);
            member_handler::change_password(&usecase, &current, &new).await
        }
        Commands::Card { output_dir } => {
            let usecase =
                DownloadCardUsecase::new(session, registrants, PdfCardRenderer::new());
            member_handler::download_card(&usecase, &output_dir).await
        }
        Commands::Matricule => member_handler::next_matricule(&allocator).await,
        Commands::Admin(args) => {
            admin_handler::ensure_admin(&args.password, &config.admin_password)?;
            match args.command {
                AdminCommands::List => {
                    let usecase = AdminUsecase::new(registrants);
                    admin_handler::list(&usecase).await
                }
                AdminCommands::Edit { id, changes } => {
                    let usecase = AdminUsecase::new(registrants);
                    admin_handler::edit(&usecase, id.into(), changes.into()).await
                }
                AdminCommands::Delete { id } => {
                    let usecase = AdminUsecase::new(registrants);
                    admin_handler::delete(&usecase, id.into()).await
                }
                AdminCommands::Export { output } => {
                    let usecase = ExportRegistrantsUsecase::new(registrants);
                    admin_handler::export(&usecase, &output).await
                }
            }
        }
    }
}
