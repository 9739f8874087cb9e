use serde::{Deserialize, Serialize};

/// Rôle porté par le compte. Le backend envoie le libellé exact,
/// toute autre valeur fait échouer la désérialisation du profil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Client,
    Organizer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub confirmed_users: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

/// Réponse de /auth/login et /auth/register: { token, user }
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_json(role: &str) -> String {
        format!(
            r#"{{"id":7,"name":"Dupont","surname":"Jean","email":"jean@exemple.fr","role":"{}"}}"#,
            role
        )
    }

    #[test]
    fn role_deserializes_from_wire_literals() {
        for (literal, expected) in [
            ("Client", Role::Client),
            ("Organizer", Role::Organizer),
            ("Admin", Role::Admin),
        ] {
            let user: UserProfile = serde_json::from_str(&profile_json(literal)).unwrap();
            assert_eq!(user.role, expected);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<UserProfile>(&profile_json("SuperAdmin")).is_err());
    }

    #[test]
    fn optional_profile_fields_default_to_absent() {
        let user: UserProfile = serde_json::from_str(&profile_json("Client")).unwrap();
        assert_eq!(user.age, None);
        assert_eq!(user.phone, None);
        assert_eq!(user.confirmed_users, None);
    }
}
