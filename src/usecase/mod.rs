pub mod admin_usecase;
pub mod change_password_usecase;
pub mod download_card_usecase;
pub mod export_registrants_usecase;
pub mod login_usecase;
pub mod show_profile_usecase;
pub mod signup_usecase;
pub mod update_profile_usecase;
