use serde::Serialize;
use web_sys::{window, Storage};

use crate::models::UserProfile;
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

// ----------------------------------------------------------------------------
// Registro de sesión (user + token). Escrito únicamente por el auth provider.
// ----------------------------------------------------------------------------

/// user y token se escriben juntos: nunca debe persistirse medio registro
pub fn save_session(user: &UserProfile, token: &str) -> Result<(), String> {
    save_to_storage(STORAGE_KEY_USER, user)?;
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.set_item(STORAGE_KEY_TOKEN, token)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

/// Re-persiste solo el perfil (refresh), el token no cambia
pub fn save_user(user: &UserProfile) -> Result<(), String> {
    save_to_storage(STORAGE_KEY_USER, user)
}

pub fn clear_session() -> Result<(), String> {
    remove_from_storage(STORAGE_KEY_USER)?;
    remove_from_storage(STORAGE_KEY_TOKEN)?;
    Ok(())
}

/// Carga la sesión persistida. Un registro corrupto o incompleto se
/// descarta en silencio (y se borra) - arrancamos sin sesión.
pub fn load_session() -> Option<(UserProfile, String)> {
    let storage = get_local_storage()?;
    let user_json = storage.get_item(STORAGE_KEY_USER).ok()?;
    let token = storage.get_item(STORAGE_KEY_TOKEN).ok()?;

    if user_json.is_none() && token.is_none() {
        return None;
    }

    match parse_persisted_session(user_json.as_deref(), token.as_deref()) {
        Some(session) => Some(session),
        None => {
            log::warn!("⚠️ Sesión persistida corrupta, descartada");
            let _ = clear_session();
            None
        }
    }
}

/// Parsing puro del registro persistido: None en cuanto falta o falla algo
pub fn parse_persisted_session(
    user_json: Option<&str>,
    token: Option<&str>,
) -> Option<(UserProfile, String)> {
    let user: UserProfile = serde_json::from_str(user_json?).ok()?;
    let token = token?.trim();
    if token.is_empty() {
        return None;
    }
    Some((user, token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str =
        r#"{"id":1,"name":"Durand","surname":"Alice","email":"alice@exemple.fr","role":"Admin"}"#;

    #[test]
    fn valid_record_parses() {
        let (user, token) = parse_persisted_session(Some(USER_JSON), Some("jwt-abc")).unwrap();
        assert_eq!(user.email, "alice@exemple.fr");
        assert_eq!(token, "jwt-abc");
    }

    #[test]
    fn missing_pieces_read_as_no_session() {
        assert!(parse_persisted_session(None, Some("jwt-abc")).is_none());
        assert!(parse_persisted_session(Some(USER_JSON), None).is_none());
        assert!(parse_persisted_session(None, None).is_none());
    }

    #[test]
    fn malformed_records_read_as_no_session() {
        // JSON cassé, mauvais type, rôle inconnu, token vide: jamais de panique
        assert!(parse_persisted_session(Some("{not json"), Some("jwt")).is_none());
        assert!(parse_persisted_session(Some("42"), Some("jwt")).is_none());
        assert!(parse_persisted_session(Some(r#"{"id":1}"#), Some("jwt")).is_none());
        assert!(parse_persisted_session(
            Some(r#"{"id":1,"name":"x","surname":"y","email":"z","role":"Root"}"#),
            Some("jwt"),
        )
        .is_none());
        assert!(parse_persisted_session(Some(USER_JSON), Some("   ")).is_none());
    }
}
