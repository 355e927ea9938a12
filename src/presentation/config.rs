use std::env;
use std::path::PathBuf;

/// Runtime settings, resolved once at startup from a `.env` file and the
/// process environment. Every knob has a default so a bare invocation
/// works out of the box.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Directory holding the key-value store, one file per key.
    pub data_dir: PathBuf,
    /// Prefix of issued matricules, `PREFIX-YYYY-NNNN`.
    pub matricule_prefix: String,
    /// Shared secret gating the admin commands.
    pub admin_password: String,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("PORTAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./portal-data")),
            matricule_prefix: lookup("PORTAL_MATRICULE_PREFIX")
                .unwrap_or_else(|| "DTM".to_string()),
            admin_password: lookup("PORTAL_ADMIN_PASSWORD")
                .unwrap_or_else(|| "toubamedecine".to_string()),
            log_filter: lookup("PORTAL_LOG").unwrap_or_else(|| "warn".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let config = PortalConfig::from_lookup(|_| None);

        assert_eq!(config.data_dir, PathBuf::from("./portal-data"));
        assert_eq!(config.matricule_prefix, "DTM");
        assert_eq!(config.admin_password, "toubamedecine");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn environment_overrides_every_default() {
        let config = PortalConfig::from_lookup(|name| match name {
            "PORTAL_DATA_DIR" => Some("/var/lib/dahira".to_string()),
            "PORTAL_MATRICULE_PREFIX" => Some("DKR".to_string()),
            "PORTAL_ADMIN_PASSWORD" => Some("secret".to_string()),
            "PORTAL_LOG" => Some("debug".to_string()),
            _ => None,
        });

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/dahira"));
        assert_eq!(config.matricule_prefix, "DKR");
        assert_eq!(config.admin_password, "secret");
        assert_eq!(config.log_filter, "debug");
    }
}
