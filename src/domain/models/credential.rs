use serde::{Deserialize, Serialize};

use crate::domain::models::registrant::RegistrantId;

/// Role tag stored on every credential. The admin gate is a per-invocation
/// secret check and never appears here.
pub const ROLE_MEMBER: &str = "membre";

/// Value object representing a hashed password (PHC string form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Authentication record owned by exactly one registrant. The username is
/// the registrant's email address and follows it when the email changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    username: String,
    password_hash: HashedPassword,
    registrant_id: RegistrantId,
    role: String,
}

impl Credential {
    pub fn new(username: String, password_hash: HashedPassword, registrant_id: RegistrantId) -> Self {
        Self {
            username,
            password_hash,
            registrant_id,
            role: ROLE_MEMBER.to_string(),
        }
    }

    pub fn change_password(&mut self, new_password_hash: HashedPassword) {
        self.password_hash = new_password_hash;
    }

    pub fn rename(&mut self, new_username: String) {
        self.username = new_username;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn registrant_id(&self) -> &RegistrantId {
        &self.registrant_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_form_uses_camel_case_field_names() {
        let credential = Credential::new(
            "awa@x.com".to_string(),
            HashedPassword::new("$argon2id$stub".to_string()),
            RegistrantId::generate(),
        );

        let json = serde_json::to_value(&credential).unwrap();
        assert_eq!(json["username"], "awa@x.com");
        assert_eq!(json["passwordHash"], "$argon2id$stub");
        assert_eq!(json["role"], ROLE_MEMBER);
        assert!(json.get("registrantId").is_some());
        assert!(json.get("registrant_id").is_none());
    }
}
